/*!
## Rust Machine Module

This Rust module is the script engine: the byte arena, the variables and
script records stored in it, the postfix evaluator, the command tree,
and the runtime that drives them one line at a time.

*/

pub type Address = usize;
pub type Word = i32;

mod builtin;
mod command;
mod config;
mod eval;
mod flow;
mod listing;
mod memory;
mod operation;
mod runtime;
mod stack;
mod var;

pub use command::Command;
pub use command::Commands;
pub use command::Handler;
pub use config::Config;
pub use eval::Evaluation;
pub use eval::Evaluator;
pub use flow::Flow;
pub use listing::Lines;
pub use listing::Record;
pub use memory::ExternalMemory;
pub use memory::Memory;
pub use memory::WORD_SIZE;
pub use operation::Operation;
pub use runtime::Context;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Status;
pub use var::Var;

#[cfg(test)]
mod tests;
