use super::{
    builtin, Command, Commands, Config, Evaluation, Evaluator, ExternalMemory, Flow, Memory,
    Status, Var, Word,
};
use crate::error;
use crate::lang::{lex, substitute, Error, Line, LineNumber};
use log::{debug, trace, warn};
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// ## Engine state handed to command handlers
///
/// Owns the arena and the control flow. Output and errors produced while
/// a line runs are collected here until the runtime reports them.

pub struct Context {
    memory: Memory,
    flow: Flow,
    external: Option<Box<dyn ExternalMemory>>,
    eval_depth: usize,
    current: LineNumber,
    output: String,
    errors: Vec<Error>,
}

impl Context {
    pub fn new(config: &Config) -> Context {
        Context {
            memory: Memory::new(config.arena_size),
            flow: Flow::new(config.return_depth),
            external: None,
            eval_depth: config.eval_depth,
            current: None,
            output: String::new(),
            errors: vec![],
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    pub fn is_running(&self) -> bool {
        self.flow.is_running()
    }

    pub fn print(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Record a failure: raise its status bit, report it, and hand back
    /// the code a handler should return.
    pub fn fail(&mut self, error: Error) -> Word {
        let error = if error.is_direct() && self.current.is_some() {
            error.in_line_number(self.current)
        } else {
            error
        };
        warn!("{}", error);
        if let Some(status) = error.code().status() {
            self.memory.raise(status);
        }
        let code = error.return_code();
        self.errors.push(error);
        code
    }

    /// Evaluate `expr` against the arena. A failure also raises its bit
    /// in the status variable.
    pub fn evaluate(&mut self, expr: &str) -> Result<Evaluation> {
        let evaluator = Evaluator::new(&mut self.memory, self.external.as_mut(), self.eval_depth);
        let result = evaluator.evaluate(expr);
        if let Err(error) = &result {
            if let Some(status) = error.code().status() {
                self.memory.raise(status);
            }
        }
        result
    }

    pub fn get(&mut self, name: char) -> Word {
        self.memory.get(name)
    }

    pub fn set(&mut self, name: char, value: Word) {
        self.memory.set(name, value)
    }

    pub fn status(&self) -> Status {
        self.memory.status()
    }

    pub fn result(&self) -> Word {
        self.memory.fetch(Var::RESULT)
    }

    /// Store a script line, keeping a running script on the same line.
    pub fn load_line(&mut self, number: u16, text: &str) -> Result<()> {
        let resume = self.flow.lp().and_then(|lp| self.memory.line_number_at(lp));
        let result = self.memory.load_line(number, text);
        self.flow.relocate(&self.memory, resume);
        result
    }

    /// Erase the script and stop it if it was running.
    pub fn clear(&mut self) {
        self.flow.stop();
        self.memory.clear_script();
    }

    pub fn goto(&mut self, number: u16) {
        self.flow.goto(&self.memory, number)
    }

    pub fn gosub(&mut self, number: u16) -> Result<()> {
        self.flow.gosub(&self.memory, number)
    }

    pub fn ret(&mut self, code: Word) -> Word {
        self.flow.ret(&self.memory, code)
    }

    pub fn run(&mut self) -> Result<()> {
        self.flow.run(&self.memory)
    }

    pub fn end(&mut self, code: Word) -> Word {
        self.flow.end(code)
    }

    pub fn next_line(&mut self) {
        self.flow.next_line(&self.memory)
    }
}

#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(String),
    Errors(Vec<Error>),
}

/// ## Runtime
///
/// Takes console lines, runs direct lines and scripts, and reports what
/// happened as a stream of events. Every call to `execute` returns at a
/// line boundary, so the host can wait for input between calls.

pub struct Runtime {
    config: Config,
    context: Context,
    commands: Commands,
    direct: Option<String>,
    events: VecDeque<Event>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default(), vec![])
    }
}

impl Runtime {
    /// Host commands are matched before the built-in ones.
    pub fn new(config: Config, commands: Vec<Command>) -> Runtime {
        let mut root = commands;
        root.extend(builtin::commands());
        Runtime {
            config,
            context: Context::new(&config),
            commands: Commands::new(root),
            direct: None,
            events: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Let scripts reach addresses outside the arena through `external`.
    pub fn grant_external_memory(&mut self, external: Box<dyn ExternalMemory>) {
        self.context.external = Some(external);
    }

    /// Take one line from the console. Numbered lines are stored, others
    /// wait for the next `execute`. Returns whether the line is worth
    /// keeping in the console history.
    pub fn enter(&mut self, s: &str) -> bool {
        let s = s.trim();
        if s.is_empty() {
            return false;
        }
        if s.len() > self.config.line_len {
            self.report(error!(LineBufferOverflow));
            return false;
        }
        let line = match Line::new(s) {
            Ok(line) => line,
            Err(error) => {
                self.report(error);
                return false;
            }
        };
        match line.number() {
            Some(number) => {
                debug!("load {}", line);
                if let Err(error) = self.context.load_line(number, line.text()) {
                    let code = self.context.fail(error);
                    self.context.memory.store(Var::RESULT, code);
                    self.collect();
                }
            }
            None => self.direct = Some(line.text().to_string()),
        }
        true
    }

    /// Run until something needs reporting, the script stops, or
    /// `cycles` script lines have run.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        if let Some(line) = self.direct.take() {
            self.context.current = None;
            self.process(&line);
            self.context.flow.settle();
            if let Some(event) = self.events.pop_front() {
                return event;
            }
        }
        for _ in 0..cycles {
            let lp = match self.context.flow.lp() {
                Some(lp) => lp,
                None => break,
            };
            let (number, text) = match self.context.memory.record_at(lp) {
                Some(record) => (record.number, record.text().into_owned()),
                None => {
                    self.context.flow.stop();
                    break;
                }
            };
            trace!("{} {}", number, text);
            self.context.current = Some(number);
            self.context.next_line();
            self.process(&text);
            self.context.current = None;
            self.context.flow.settle();
            if let Some(event) = self.events.pop_front() {
                return event;
            }
        }
        if self.context.is_running() {
            Event::Running
        } else {
            Event::Stopped
        }
    }

    /// Stop a running script.
    pub fn interrupt(&mut self) {
        if let Some(lp) = self.context.flow.lp() {
            let number = self.context.memory.line_number_at(lp);
            self.context.flow.stop();
            self.report(error!(Interrupted, number));
        }
    }

    /// Run one line: the `[...]` test, `$` substitution, splitting into
    /// words, dispatch, and storing the result in `R`.
    pub fn process(&mut self, line: &str) {
        let mut line = line;
        if let Some(expr) = line.strip_prefix('[') {
            match self.context.evaluate(expr) {
                Ok(evaluation) if evaluation.is_true() => line = &expr[evaluation.rest..],
                Ok(_) => return,
                Err(error) => {
                    self.context.fail(error);
                    self.collect();
                    return;
                }
            }
        }
        let memory = &self.context.memory;
        let expanded = substitute(line, self.config.line_len, |name| {
            Var::from_name(name).map(|var| memory.fetch(var))
        });
        let args = lex(&expanded);
        if !args.is_empty() {
            let argv: Vec<&str> = args.iter().map(String::as_str).collect();
            let result = match self.commands.exec(&mut self.context, &argv) {
                Ok(result) => result,
                Err(error) => self.context.fail(error),
            };
            self.context.memory.store(Var::RESULT, result);
        }
        self.collect();
    }

    fn report(&mut self, error: Error) {
        warn!("{}", error);
        self.events.push_back(Event::Errors(vec![error]));
    }

    fn collect(&mut self) {
        if !self.context.output.is_empty() {
            let output = std::mem::take(&mut self.context.output);
            self.events.push_back(Event::Print(output));
        }
        if !self.context.errors.is_empty() {
            let errors = std::mem::take(&mut self.context.errors);
            self.events.push_back(Event::Errors(errors));
        }
    }
}
