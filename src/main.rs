//! # teash
//!
//! Interactive console for the tea script engine.
//!

mod term;

use clap::Parser as ClapParser;
use std::path::PathBuf;
use tea::mach::Config;

/// A tiny line-numbered command and scripting console
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to feed through the console before the first prompt
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Bytes shared by the script and the variables
    #[arg(long, default_value_t = Config::default().arena_size)]
    arena_size: usize,

    /// Entries in the expression stack
    #[arg(long, default_value_t = Config::default().eval_depth)]
    eval_depth: usize,

    /// Nested gosubs allowed
    #[arg(long, default_value_t = Config::default().return_depth)]
    return_depth: usize,

    /// Longest line accepted
    #[arg(long, default_value_t = Config::default().line_len)]
    line_len: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = Config {
        arena_size: args.arena_size,
        eval_depth: args.eval_depth,
        return_depth: args.return_depth,
        line_len: args.line_len,
    };
    term::main(config, args.load);
}
