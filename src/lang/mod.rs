/*!
# Rust Language Module

This Rust module turns text into things the machine can act on: console
lines, argument vectors, `$` substitutions and postfix expression tokens.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod subst;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use subst::substitute;
pub use subst::TRUNCATED;
pub use token::Operator;
pub use token::Scanner;
pub use token::Token;
pub use token::Width;

pub type LineNumber = Option<u16>;

#[cfg(test)]
mod tests;
