use super::{Address, Memory};
use crate::lang::Error;
use std::borrow::Cow;

type Result<T> = std::result::Result<T, Error>;

/// ## Script storage
///
/// Records are packed from address 0: a big-endian line number, the text,
/// then a NUL. They are kept in ascending order with no gaps, and a record
/// with empty text is never stored.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    pub number: u16,
    pub text: &'a [u8],
    len: usize,
}

impl<'a> Record<'a> {
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.text)
    }

    /// Bytes the record occupies in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.text())
    }
}

/// Walks the script from the first record every time it is created.
pub struct Lines<'a> {
    memory: &'a Memory,
    at: Option<Address>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.memory.record_at(self.at?)?;
        self.at = self.memory.next_record(self.at?);
        Some(record)
    }
}

fn decode(bytes: &[u8], at: Address) -> Option<Record<'_>> {
    let header = bytes.get(at..at.checked_add(2)?)?;
    let number = u16::from_be_bytes([header[0], header[1]]);
    let rest = bytes.get(at + 2..)?;
    if rest.is_empty() {
        return None;
    }
    let (text, len) = match rest.iter().position(|&b| b == 0) {
        Some(nul) => (&rest[..nul], nul + 3),
        None => (rest, rest.len() + 2),
    };
    Some(Record { number, text, len })
}

impl Memory {
    /// The record starting at `at`, if one does.
    pub fn record_at(&self, at: Address) -> Option<Record<'_>> {
        decode(self.script(), at)
    }

    pub fn line_number_at(&self, at: Address) -> Option<u16> {
        self.record_at(at).map(|record| record.number)
    }

    /// Address of the record after the one at `at`, or `None` at the end.
    pub fn next_record(&self, at: Address) -> Option<Address> {
        let next = at + self.record_at(at)?.len();
        if next < self.script_end() {
            Some(next)
        } else {
            None
        }
    }

    pub fn first_line(&self) -> Option<Address> {
        if self.script_end() > 0 {
            Some(0)
        } else {
            None
        }
    }

    /// Address of the first record numbered `number` or higher.
    pub fn find_line(&self, number: u16) -> Option<Address> {
        let mut at = self.first_line();
        while let Some(addr) = at {
            if self.line_number_at(addr)? >= number {
                return Some(addr);
            }
            at = self.next_record(addr);
        }
        None
    }

    pub fn lines(&self) -> Lines<'_> {
        Lines {
            memory: self,
            at: self.first_line(),
        }
    }

    /// Insert, replace, or with empty `text` delete, the record for `number`.
    ///
    /// Text stops at the first NUL. On `OutOfSpace` the script is unchanged.
    pub fn load_line(&mut self, number: u16, text: &str) -> Result<()> {
        let text = text.as_bytes();
        let text = match text.iter().position(|&b| b == 0) {
            Some(nul) => &text[..nul],
            None => text,
        };
        let (at, old_len) = match self.find_line(number) {
            Some(at) => match self.record_at(at) {
                Some(record) if record.number == number => (at, record.len()),
                _ => (at, 0),
            },
            None => (self.script_end(), 0),
        };
        if text.is_empty() {
            if old_len == 0 {
                return Ok(());
            }
            return self.splice(at, old_len, &[]);
        }
        let mut record = Vec::with_capacity(text.len() + 3);
        record.extend_from_slice(&number.to_be_bytes());
        record.extend_from_slice(text);
        record.push(0);
        self.splice(at, old_len, &record)
    }

    /// End of the last well formed record in the script area of an image.
    pub(super) fn scan_script_end(&self) -> Address {
        let area = &self.bytes()[..self.var_base()];
        let mut at = 0;
        let mut previous: Option<u16> = None;
        while let Some(record) = decode(area, at) {
            let terminated = area.get(at + record.len() - 1) == Some(&0);
            let ascending = previous.map_or(true, |p| record.number > p);
            if record.is_empty() || !terminated || !ascending {
                break;
            }
            previous = Some(record.number);
            at += record.len();
        }
        at
    }
}
