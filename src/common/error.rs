//! Error taxonomy for the emulator core.
//!
//! Memory access failures are recoverable and per-direction (`LoadError`,
//! `StoreError`): the executor receives them as results and decides whether
//! to raise a guest-visible fault or stop emulation. Lifecycle failures
//! (`CreateError`) cover allocation and mapping problems during machine or
//! hart creation. Syscall translation failures (`SyscallError`) are
//! recoverable as well; whether an unknown syscall aborts the process is the
//! embedding application's policy, not this crate's.

use thiserror::Error;

use crate::core::arch::translation::TranslationMode;

/// Failure of a guest memory load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The access would read past the end of guest memory. An access whose
    /// last byte falls at or past the end is rejected, not only one that
    /// starts past the end.
    #[error("load of {width} bytes at {addr:#x} falls outside guest memory")]
    ExecutionOutOfBounds { addr: u64, width: usize },

    /// The hart's address-translation mode is a reserved paged mode with no
    /// translation implementation behind it.
    #[error("address translation mode {mode} is not implemented")]
    Unimplemented { mode: TranslationMode },
}

/// Failure of a guest memory store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The access would write past the end of guest memory. A failing store
    /// leaves memory strictly unmodified.
    #[error("store of {width} bytes at {addr:#x} falls outside guest memory")]
    ExecutionOutOfBounds { addr: u64, width: usize },

    /// The hart's address-translation mode is a reserved paged mode with no
    /// translation implementation behind it.
    #[error("address translation mode {mode} is not implemented")]
    Unimplemented { mode: TranslationMode },
}

impl From<LoadError> for StoreError {
    /// Address translation reports through `LoadError`; the store path maps
    /// the same conditions into its own direction.
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::ExecutionOutOfBounds { addr, width } => {
                StoreError::ExecutionOutOfBounds { addr, width }
            }
            LoadError::Unimplemented { mode } => StoreError::Unimplemented { mode },
        }
    }
}

/// Failure while creating a machine or a user hart.
///
/// Every partial allocation made before the failure is released before the
/// error is returned; no half-built machine or hart survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateError {
    /// The host refused to provide memory for the named resource.
    #[error("failed to allocate {size:#x} bytes for {what}")]
    OutOfMemory { what: &'static str, size: usize },

    /// The executable image does not fit inside the requested guest memory.
    #[error("executable does not fit in guest memory: {0}")]
    Load(#[from] StoreError),
}

/// Failure of guest environment-call translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyscallError {
    /// The value in `a7` is not a RISC-V Linux syscall number this crate
    /// knows about.
    #[error("unknown syscall number {0}")]
    Unknown(u64),

    /// The syscall number is recognized but has no host forwarding yet.
    /// Distinct from [`SyscallError::Unknown`] so diagnostics can name it.
    #[error("syscall {name} ({number}) is not supported")]
    Unsupported { number: u64, name: &'static str },
}
