use super::{ExternalMemory, Memory, Operation, Stack, Var, Word};
use crate::error;
use crate::lang::{Error, ErrorCode, Operator, Scanner, Token, Width};
use log::trace;

type Result<T> = std::result::Result<T, Error>;

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Top of the stack when the expression ended, 0 if it was empty.
    pub value: Word,
    /// Offset of the input left over after the expression.
    pub rest: usize,
}

impl Evaluation {
    pub fn is_true(&self) -> bool {
        self.value != 0
    }
}

/// ## Postfix evaluator
///
/// Variables push their address. `@` and `!` move values between the
/// stack and memory: arena addresses go to the arena, anything else to
/// the external memory if the host installed one.

pub struct Evaluator<'a> {
    memory: &'a mut Memory,
    external: Option<&'a mut Box<dyn ExternalMemory>>,
    stack: Stack<Word>,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        memory: &'a mut Memory,
        external: Option<&'a mut Box<dyn ExternalMemory>>,
        depth: usize,
    ) -> Evaluator<'a> {
        Evaluator {
            memory,
            external,
            stack: Stack::new(depth, ErrorCode::MathError),
        }
    }

    /// Status bits are left to the caller; see `Context::evaluate`.
    pub fn evaluate(mut self, input: &str) -> Result<Evaluation> {
        let mut scanner = Scanner::new(input);
        for token in scanner.by_ref() {
            trace!("{:?} {:?}", token, self.stack);
            match token {
                Token::Literal(n) => self.stack.push(n)?,
                Token::Ident(name) => match Var::from_name(name) {
                    Some(var) => {
                        let addr = self.memory.var_address(var) as Word;
                        self.stack.push(addr)?
                    }
                    None => return Err(error!(VarsError)),
                },
                Token::Operator(op) => self.operate(op)?,
            }
        }
        Ok(Evaluation {
            value: self.stack.last().copied().unwrap_or(0),
            rest: scanner.remainder(),
        })
    }

    fn operate(&mut self, op: Operator) -> Result<()> {
        use Operator::*;
        match op {
            Invert => {
                let val = self.stack.pop()?;
                self.stack.push(Operation::invert(val))
            }
            Fetch(width) => {
                let addr = self.stack.pop()?;
                let val = self.read(addr, width)?;
                self.stack.push(val)
            }
            Store(width) => {
                let (val, addr) = self.stack.pop_2()?;
                self.write(addr, width, val)
            }
            AddStore | SubtractStore => {
                let (val, addr) = self.stack.pop_2()?;
                let old = self.read(addr, Width::Int)?;
                let new = if op == AddStore {
                    old.wrapping_add(val)
                } else {
                    old.wrapping_sub(val)
                };
                self.write(addr, Width::Int, new)
            }
            Dup => {
                let val = self.stack.pop()?;
                self.stack.push(val)?;
                self.stack.push(val)
            }
            Swap => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(rhs)?;
                self.stack.push(lhs)
            }
            Drop => self.stack.pop().map(|_| ()),
            _ => {
                let (lhs, rhs) = self.stack.pop_2()?;
                self.stack.push(Operation::binary(op, lhs, rhs)?)
            }
        }
    }

    fn read(&mut self, addr: Word, width: Width) -> Result<Word> {
        if let Some(val) = usize::try_from(addr)
            .ok()
            .and_then(|a| self.memory.read(a, width))
        {
            return Ok(val);
        }
        match self.external.as_mut().and_then(|ext| ext.read(addr, width)) {
            Some(val) => Ok(val),
            None => Err(error!(MathError; "ADDRESS OUT OF RANGE")),
        }
    }

    fn write(&mut self, addr: Word, width: Width, val: Word) -> Result<()> {
        if let Some(()) = usize::try_from(addr)
            .ok()
            .and_then(|a| self.memory.write(a, width, val))
        {
            return Ok(());
        }
        match self
            .external
            .as_mut()
            .and_then(|ext| ext.write(addr, width, val))
        {
            Some(()) => Ok(()),
            None => Err(error!(MathError; "ADDRESS OUT OF RANGE")),
        }
    }
}
