use super::memory::WORD_SIZE;
use super::{Address, Memory, Word};
use crate::lang::Width;
use bitflags::bitflags;

/// Variable names in slot order. `S` holds the status flags and `R` the
/// result of the last command; the rest are free for scripts.
const NAMES: &[u8] = b"SRABCDEFGHIJKLMN";

/// ## Variable memory

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Var(u8);

impl Var {
    pub const COUNT: usize = NAMES.len();
    pub const STATUS: Var = Var(0);
    pub const RESULT: Var = Var(1);

    pub fn from_name(name: char) -> Option<Var> {
        NAMES
            .iter()
            .position(|&n| n as char == name)
            .map(|index| Var(index as u8))
    }

    pub fn name(self) -> char {
        NAMES[self.0 as usize] as char
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags! {
    /// Bits of the status variable. Error bits stay set until a script
    /// or the host clears them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Status: u32 {
        const MATH_ERROR = 1 << 0;
        const VARS_ERROR = 1 << 1;
        const GOSUB_ERROR = 1 << 2;
        const OUT_OF_SPACE = 1 << 3;
        const OVERWRITE = 1 << 8;
        const EVENT0 = 1 << 12;
        const EVENT1 = 1 << 13;
        const EVENT2 = 1 << 14;
        const EVENT3 = 1 << 15;
    }
}

impl Memory {
    pub fn var_address(&self, var: Var) -> Address {
        self.var_base() + var.index() * WORD_SIZE
    }

    pub fn fetch(&self, var: Var) -> Word {
        self.read(self.var_address(var), Width::Int).unwrap_or(0)
    }

    pub fn store(&mut self, var: Var, value: Word) {
        let addr = self.var_address(var);
        let written = self.write(addr, Width::Int, value);
        debug_assert!(written.is_some());
    }

    /// Read a variable by name; unknown names raise `VARS_ERROR` and read 0.
    pub fn get(&mut self, name: char) -> Word {
        match Var::from_name(name) {
            Some(var) => self.fetch(var),
            None => {
                self.raise(Status::VARS_ERROR);
                0
            }
        }
    }

    /// Write a variable by name; unknown names raise `VARS_ERROR`.
    pub fn set(&mut self, name: char, value: Word) {
        match Var::from_name(name) {
            Some(var) => self.store(var, value),
            None => self.raise(Status::VARS_ERROR),
        }
    }

    pub fn status(&self) -> Status {
        Status::from_bits_retain(self.fetch(Var::STATUS) as u32)
    }

    pub fn raise(&mut self, status: Status) {
        let bits = self.status().union(status).bits();
        self.store(Var::STATUS, bits as Word);
    }
}
