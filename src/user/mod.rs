//! User-Model Hart and Syscall Translation.
//!
//! In the user model there is no guest-physical arena: the emulated
//! program's virtual addresses *are* host addresses, and environment calls
//! are forwarded to the host kernel. The hart is therefore the addressable
//! context itself, and the only memory it owns outright is its mapped stack.

/// Host-memory-aliasing hart with a dedicated mapped stack.
pub mod hart;

/// Guest-ABI-to-host-kernel environment call translation.
pub mod syscall;

pub use hart::{page_size, UserHart};
pub use syscall::{handle_syscall, Syscall};
