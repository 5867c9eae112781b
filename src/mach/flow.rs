use super::{Address, Memory, Stack, Word};
use crate::error;
use crate::lang::{Error, ErrorCode};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## Control flow
///
/// `lp` is the address of the next record to run; `None` means no script
/// is running. Return entries are line numbers, so edits made while a
/// subroutine runs do not leave stale addresses behind. A `None` entry
/// returns to the end of the script.

#[derive(Debug)]
pub struct Flow {
    lp: Option<Address>,
    returns: Stack<Option<u16>>,
}

impl Flow {
    pub fn new(return_depth: usize) -> Flow {
        Flow {
            lp: None,
            returns: Stack::new(return_depth, ErrorCode::GosubError),
        }
    }

    pub fn lp(&self) -> Option<Address> {
        self.lp
    }

    pub fn is_running(&self) -> bool {
        self.lp.is_some()
    }

    pub fn returns(&self) -> &[Option<u16>] {
        self.returns.as_slice()
    }

    pub fn goto(&mut self, memory: &Memory, number: u16) {
        self.lp = memory.find_line(number);
        debug!("goto {} -> {:?}", number, self.lp);
    }

    /// Nothing changes when the return stack is full.
    pub fn gosub(&mut self, memory: &Memory, number: u16) -> Result<()> {
        if self.returns.is_full() {
            return Err(error!(GosubError));
        }
        let resume = self.lp.and_then(|lp| memory.line_number_at(lp));
        self.returns.push(resume)?;
        self.goto(memory, number);
        Ok(())
    }

    pub fn ret(&mut self, memory: &Memory, code: Word) -> Word {
        match self.returns.pop() {
            Ok(Some(number)) => self.goto(memory, number),
            Ok(None) | Err(_) => self.lp = None,
        }
        code
    }

    pub fn run(&mut self, memory: &Memory) -> Result<()> {
        if self.lp.is_some() {
            return Err(error!(AlreadyRunning));
        }
        self.returns.clear();
        self.lp = memory.first_line();
        debug!("run -> {:?}", self.lp);
        Ok(())
    }

    pub fn end(&mut self, code: Word) -> Word {
        self.lp = None;
        code
    }

    pub fn next_line(&mut self, memory: &Memory) {
        self.lp = self.lp.and_then(|lp| memory.next_record(lp));
    }

    pub fn stop(&mut self) {
        self.lp = None;
        self.returns.clear();
    }

    /// Drop return entries left behind by a script that has stopped.
    /// Called at line boundaries, never while a line is still running.
    pub fn settle(&mut self) {
        if self.lp.is_none() && !self.returns.is_empty() {
            debug!("dropping {} return entries", self.returns.len());
            self.returns.clear();
        }
    }

    /// Put `lp` back on the line numbered `number` (or the one after it)
    /// once the records beneath it have moved.
    pub(super) fn relocate(&mut self, memory: &Memory, number: Option<u16>) {
        if self.lp.is_some() {
            self.lp = number.and_then(|number| memory.find_line(number));
        }
    }
}
