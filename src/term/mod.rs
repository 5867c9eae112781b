extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Terminal};
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tea::lang::Error;
use tea::mach::{Config, Context, Event, Runtime};

const CYCLES: usize = 5000;

pub fn main(config: Config, load: Option<PathBuf>) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(config, load, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(
    config: Config,
    load: Option<PathBuf>,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<()> {
    let mut runtime = Runtime::new(config, vec![]);
    let interface = Interface::new("teash")?;

    if let Some(filename) = load {
        load_file(&mut runtime, &interface, &filename, &interrupted)?;
    }

    loop {
        check_interrupt(&mut runtime, &interrupted);
        match runtime.execute(CYCLES) {
            Event::Stopped => {
                interface.set_prompt(&prompt(runtime.context()))?;
                match interface.read_line()? {
                    ReadResult::Input(string) => {
                        if runtime.enter(&string) {
                            interface.add_history_unique(string);
                        }
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                }
            }
            event => show(&interface, event)?,
        }
    }
    Ok(())
}

fn check_interrupt(runtime: &mut Runtime, interrupted: &AtomicBool) {
    if interrupted.load(Ordering::SeqCst) {
        runtime.interrupt();
        interrupted.store(false, Ordering::SeqCst);
    };
}

fn show<T: Terminal>(interface: &Interface<T>, event: Event) -> std::io::Result<()> {
    match event {
        Event::Print(s) => interface.write_fmt(format_args!("{}", s)),
        Event::Errors(errors) => show_errors(interface, &errors),
        Event::Running | Event::Stopped => Ok(()),
    }
}

fn show_errors<T: Terminal>(interface: &Interface<T>, errors: &[Error]) -> std::io::Result<()> {
    for error in errors.iter() {
        interface.write_fmt(format_args!(
            "{}\n",
            Style::new().bold().paint(error.to_string())
        ))?;
    }
    Ok(())
}

/// The result of the last command, and the status flags when any are set.
fn prompt(context: &Context) -> String {
    let status = context.status();
    if status.is_empty() {
        format!("{}> ", context.result())
    } else {
        format!("{} {:#06x}> ", context.result(), status.bits())
    }
}

/// Feed a text file through the console one line at a time, running
/// each direct line to completion before the next.
fn load_file<T: Terminal>(
    runtime: &mut Runtime,
    interface: &Interface<T>,
    filename: &Path,
    interrupted: &AtomicBool,
) -> std::io::Result<()> {
    let reader = BufReader::new(File::open(filename)?);
    for (index, line) in reader.lines().enumerate() {
        runtime.enter(&line?);
        loop {
            check_interrupt(runtime, interrupted);
            match runtime.execute(CYCLES) {
                Event::Stopped => break,
                Event::Errors(errors) => {
                    interface.write_fmt(format_args!(
                        "In line {} of {}\n",
                        index + 1,
                        filename.display()
                    ))?;
                    show_errors(interface, &errors)?;
                }
                event => show(interface, event)?,
            }
        }
    }
    info!("loaded {}", filename.display());
    Ok(())
}
