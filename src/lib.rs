//! # tea
//!
//! A tiny command and scripting engine for small systems.
//!
//! Lines typed at a console are either run straight away or, when they
//! start with a line number, stored in a script that `run`, `goto` and
//! `gosub` can execute later. Script and variables share one fixed byte
//! arena.
//!
//! ```text
//! 10 let 1 A !+
//! 20 [A @ 5 <] goto 10
//! 30 puts A is $A
//! run
//! A is 5
//! ```
//!
//! A line may start with a postfix test in brackets; when it leaves 0
//! the rest of the line is skipped. `$X` is replaced by the value of
//! variable `X` and `$$` by a single `$`. After every command its return
//! value is left in `R`, and error flags accumulate in `S`.

pub mod lang;
pub mod mach;
