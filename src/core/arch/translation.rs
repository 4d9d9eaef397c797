//! RISC-V Address Translation.
//!
//! This module defines the per-hart address-translation modes and the
//! dispatch function that converts a virtual address into a guest-physical
//! address. Only `Bare` (identity) translation is implemented; the paged
//! modes are the extensibility point through which a page-table walker would
//! be added, and until then they fail explicitly instead of crashing.

use crate::common::error::LoadError;

/// Address-translation mode of a hart.
///
/// Encodings follow the `satp` MODE field. Harts come out of reset in `Bare`
/// mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TranslationMode {
    /// No translation: virtual addresses are guest-physical addresses.
    #[default]
    Bare = 0,

    /// Page-based 39-bit virtual addressing (reserved, unimplemented).
    Sv39 = 8,

    /// Page-based 48-bit virtual addressing (reserved, unimplemented).
    Sv48 = 9,

    /// Page-based 57-bit virtual addressing (reserved, unimplemented).
    Sv57 = 10,
}

impl TranslationMode {
    /// Converts a `satp` MODE encoding to a translation mode.
    ///
    /// Invalid encodings default to `Bare`.
    pub fn from_u8(val: u8) -> Self {
        match val {
            8 => TranslationMode::Sv39,
            9 => TranslationMode::Sv48,
            10 => TranslationMode::Sv57,
            _ => TranslationMode::Bare,
        }
    }

    /// Converts a translation mode to its `satp` MODE encoding.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns the human-readable name of the translation mode.
    pub fn name(&self) -> &'static str {
        match self {
            TranslationMode::Bare => "Bare",
            TranslationMode::Sv39 => "Sv39",
            TranslationMode::Sv48 => "Sv48",
            TranslationMode::Sv57 => "Sv57",
        }
    }
}

impl std::fmt::Display for TranslationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Translates a virtual address to a guest-physical address.
///
/// For `Bare` the translation is the identity. Every paged mode fails with
/// [`LoadError::Unimplemented`].
///
/// This is a pure function of the arguments: no I/O, no side effects, no
/// caching. The translation mode is per-hart mutable state, so callers must
/// re-invoke this on every access rather than reuse a result that could have
/// been produced under a different mode.
pub fn translate(vaddr: u64, mode: TranslationMode) -> Result<u64, LoadError> {
    match mode {
        TranslationMode::Bare => Ok(vaddr),
        mode => Err(LoadError::Unimplemented { mode }),
    }
}
