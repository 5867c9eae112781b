use super::{Address, Var, Word};
use crate::error;
use crate::lang::{Error, Width};

type Result<T> = std::result::Result<T, Error>;

pub const WORD_SIZE: usize = 4;

/// ## The byte arena
///
/// One fixed block shared by the script, which grows up from address 0,
/// and the variable slots, which sit word-aligned at the top. Everything
/// between `script_end` and `var_base` is free and kept zeroed.

#[derive(Clone, PartialEq)]
pub struct Memory {
    bytes: Box<[u8]>,
    script_end: Address,
    var_base: Address,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Memory {{ capacity: {}, script_end: {}, var_base: {} }}",
            self.capacity(),
            self.script_end,
            self.var_base
        )
    }
}

impl Memory {
    /// The capacity is rounded down to whole words and never drops below
    /// what the variable slots need.
    pub fn new(size: usize) -> Memory {
        let vars_len = Var::COUNT * WORD_SIZE;
        let size = (size - size % WORD_SIZE).max(vars_len);
        Memory {
            bytes: vec![0; size].into_boxed_slice(),
            script_end: 0,
            var_base: size - vars_len,
        }
    }

    /// Rebuild an arena from a saved image, finding the end of the script
    /// by walking its records.
    pub fn from_image(image: &[u8]) -> Memory {
        let mut memory = Memory::new(image.len());
        let len = memory.bytes.len().min(image.len());
        memory.bytes[..len].copy_from_slice(&image[..len]);
        memory.script_end = memory.scan_script_end();
        let end = memory.script_end;
        memory.bytes[end..memory.var_base].fill(0);
        memory
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub fn script_end(&self) -> Address {
        self.script_end
    }

    pub fn var_base(&self) -> Address {
        self.var_base
    }

    pub fn free(&self) -> usize {
        self.var_base - self.script_end
    }

    pub fn script(&self) -> &[u8] {
        &self.bytes[..self.script_end]
    }

    /// The whole arena, byte for byte, as a host would persist it.
    pub fn image(&self) -> &[u8] {
        &self.bytes
    }

    pub(super) fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Read `width` bytes at `addr`, little-endian, zero extended.
    pub fn read(&self, addr: Address, width: Width) -> Option<Word> {
        let bytes = self.bytes.get(addr..addr.checked_add(width.size())?)?;
        Some(match width {
            Width::Byte => bytes[0] as Word,
            Width::Short => u16::from_le_bytes([bytes[0], bytes[1]]) as Word,
            Width::Int => Word::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        })
    }

    /// Write the low `width` bytes of `value` at `addr`.
    pub fn write(&mut self, addr: Address, width: Width, value: Word) -> Option<()> {
        let end = addr.checked_add(width.size())?;
        let bytes = self.bytes.get_mut(addr..end)?;
        bytes.copy_from_slice(&value.to_le_bytes()[..width.size()]);
        Some(())
    }

    /// Replace `old_len` script bytes at `at` with `new` in one shift and
    /// copy. Nothing is touched when the result would not fit.
    pub(super) fn splice(&mut self, at: Address, old_len: usize, new: &[u8]) -> Result<()> {
        debug_assert!(at + old_len <= self.script_end);
        let new_end = self.script_end - old_len + new.len();
        if new_end > self.var_base {
            return Err(error!(OutOfSpace));
        }
        self.bytes.copy_within(at + old_len..self.script_end, at + new.len());
        self.bytes[at..at + new.len()].copy_from_slice(new);
        if new_end < self.script_end {
            self.bytes[new_end..self.script_end].fill(0);
        }
        self.script_end = new_end;
        Ok(())
    }

    pub fn clear_script(&mut self) {
        let end = self.script_end;
        self.bytes[..end].fill(0);
        self.script_end = 0;
    }
}

/// Memory outside the arena.
///
/// Scripts can only reach addresses beyond the arena once a host installs
/// one of these, and then they can reach whatever it maps. Implementations
/// that touch real hardware or raw pointers carry that risk themselves.
pub trait ExternalMemory {
    fn read(&mut self, addr: Word, width: Width) -> Option<Word>;
    fn write(&mut self, addr: Word, width: Width, value: Word) -> Option<()>;
}
