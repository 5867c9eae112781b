use super::{Command, Context, Word};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// The script control verbs every runtime carries.
pub fn commands() -> Vec<Command> {
    vec![
        Command::new("clear").handler(clear),
        Command::new("run").handler(run),
        Command::new("goto").handler(goto),
        Command::new("gosub").handler(gosub),
        Command::new("return").handler(ret),
        Command::new("end").handler(end),
        Command::new("let").handler(let_),
        Command::new("skip").handler(skip),
        Command::new("list").handler(list),
        Command::new("puts").handler(puts),
    ]
}

fn line_number(argv: &[&str], index: usize) -> Result<u16> {
    match argv.get(index) {
        Some(arg) => arg
            .parse::<u16>()
            .map_err(|_| error!(InvalidArgument; "INVALID LINE NUMBER")),
        None => Err(error!(InvalidArgument; "MISSING LINE NUMBER")),
    }
}

fn code(argv: &[&str]) -> Result<Word> {
    match argv.get(1) {
        Some(arg) => arg
            .parse::<Word>()
            .map_err(|_| error!(InvalidArgument; "INVALID RETURN CODE")),
        None => Ok(0),
    }
}

fn clear(context: &mut Context, _argv: &[&str]) -> Word {
    context.clear();
    0
}

fn run(context: &mut Context, _argv: &[&str]) -> Word {
    match context.run() {
        Ok(()) => 0,
        Err(error) => context.fail(error),
    }
}

fn goto(context: &mut Context, argv: &[&str]) -> Word {
    match line_number(argv, 1) {
        Ok(number) => {
            context.goto(number);
            0
        }
        Err(error) => context.fail(error),
    }
}

fn gosub(context: &mut Context, argv: &[&str]) -> Word {
    match line_number(argv, 1).and_then(|number| context.gosub(number)) {
        Ok(()) => 0,
        Err(error) => context.fail(error),
    }
}

fn ret(context: &mut Context, argv: &[&str]) -> Word {
    match code(argv) {
        Ok(code) => context.ret(code),
        Err(error) => context.fail(error),
    }
}

fn end(context: &mut Context, argv: &[&str]) -> Word {
    match code(argv) {
        Ok(code) => context.end(code),
        Err(error) => context.fail(error),
    }
}

/// Evaluate the rest of the line and return the value it leaves.
fn let_(context: &mut Context, argv: &[&str]) -> Word {
    let expr = argv[1..].join(" ");
    match context.evaluate(&expr) {
        Ok(evaluation) => evaluation.value,
        Err(error) => context.fail(error),
    }
}

/// Evaluate like `let`; a nonzero value skips the next script line.
fn skip(context: &mut Context, argv: &[&str]) -> Word {
    let expr = argv[1..].join(" ");
    match context.evaluate(&expr) {
        Ok(evaluation) => {
            if evaluation.is_true() {
                context.next_line();
            }
            evaluation.value
        }
        Err(error) => context.fail(error),
    }
}

/// `list [from [to]]`
fn list(context: &mut Context, argv: &[&str]) -> Word {
    let from = if argv.len() > 1 {
        match line_number(argv, 1) {
            Ok(n) => n,
            Err(error) => return context.fail(error),
        }
    } else {
        0
    };
    let to = if argv.len() > 2 {
        match line_number(argv, 2) {
            Ok(n) => n,
            Err(error) => return context.fail(error),
        }
    } else {
        u16::MAX
    };
    let mut s = String::new();
    for record in context.memory().lines() {
        if record.number >= from && record.number <= to {
            s.push_str(&format!("{}\n", record));
        }
    }
    context.print(&s);
    0
}

fn puts(context: &mut Context, argv: &[&str]) -> Word {
    let mut s = argv[1..].join(" ");
    s.push('\n');
    context.print(&s);
    0
}
