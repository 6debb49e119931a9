//! Byte-indexed encoding tables.
//!
//! A table answers, for one escape set, the only question the runtime
//! encoder has: "how is byte `i` written?". The answer is precomputed for
//! all 256 byte values so the encoder never branches on a rule.

use std::fmt;
use std::ops::Index;

use percent_encoding::AsciiSet;

use crate::encode_set::{AsciiSetExt, Context};

/// One slot of an [`EncodeTable`]: how a byte is written in some context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// Printable ASCII that is safe to emit bare.
    Literal(char),
    /// Everything else, written as `%` plus two uppercase hex digits.
    Percent(u8),
}

impl Entry {
    /// The byte this entry stands for, whichever form it takes.
    pub fn byte(self) -> u8 {
        match self {
            Entry::Literal(c) => c as u8,
            Entry::Percent(b) => b,
        }
    }

    /// Whether this entry is the `%XX` form.
    pub fn is_escaped(self) -> bool {
        matches!(self, Entry::Percent(_))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Entry::Literal(c) => write!(f, "{}", c),
            Entry::Percent(b) => write!(f, "%{:02X}", b),
        }
    }
}

/// A byte-indexed lookup table: slot `i` holds the representation of byte
/// `i`. Built once from an escape set and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeTable([Entry; 256]);

impl EncodeTable {
    /// Every table has exactly this many slots.
    pub const LEN: usize = 256;

    /// The representation of `byte`. Equivalent to `table[byte]`.
    pub fn get(&self, byte: u8) -> Entry {
        self.0[byte as usize]
    }

    /// All 256 slots in byte order.
    pub fn entries(&self) -> &[Entry; 256] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.0.iter().copied()
    }
}

impl Index<u8> for EncodeTable {
    type Output = Entry;

    fn index(&self, byte: u8) -> &Entry {
        &self.0[byte as usize]
    }
}

/// Builds the 256-slot table for one escape set.
///
/// A byte stays literal only when it is printable ASCII and not a member of
/// `set`; every other byte, including everything outside ASCII, gets its
/// `%XX` form. The same set always yields a bit-identical table.
pub fn build(set: &AsciiSet) -> EncodeTable {
    let mut entries = [Entry::Percent(0); 256];
    for (i, entry) in entries.iter_mut().enumerate() {
        let b = i as u8;
        *entry = if matches!(b, 0x20..=0x7E) && !set.contains(b) {
            Entry::Literal(b as char)
        } else {
            Entry::Percent(b)
        };
    }

    EncodeTable(entries)
}

impl Context {
    /// Builds this context's table: `build(self.ascii_set())`.
    pub fn table(self) -> EncodeTable {
        build(self.ascii_set())
    }
}
