// Pattern 1: A Large Copy Type
// 256 KiB of bytes in one struct. Arrays of Copy types are Copy,
// so the whole struct is Copy too and a by-value call copies every byte.

use std::fmt;

pub const BUF_LEN: usize = 1 << 18;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BigStruct {
    pub buf: [u8; BUF_LEN],
}

/// The single process-wide instance. Lives in static memory, never mutated.
pub static OBJ: BigStruct = BigStruct::new();

impl BigStruct {
    pub const fn new() -> Self {
        BigStruct { buf: [0; BUF_LEN] }
    }

    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Wrapping sum of every byte.
    pub fn checksum(&self) -> u64 {
        self.buf
            .iter()
            .fold(0u64, |acc, &b| acc.wrapping_add(b as u64))
    }

    pub fn is_zeroed(&self) -> bool {
        self.buf.iter().all(|&b| b == 0)
    }
}

impl Default for BigStruct {
    fn default() -> Self {
        Self::new()
    }
}

// Printing 262,144 bytes helps nobody
impl fmt::Debug for BigStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigStruct")
            .field("len", &self.len())
            .field("checksum", &self.checksum())
            .finish()
    }
}
