//! System-Model Machine Components.
//!
//! In the system model, guest memory is a private bounded arena shared by
//! every hart of a machine. This module implements that arena, the
//! executable image used to (re)initialize it, and the machine lifecycle
//! that owns both.

/// Executable image consumed by machine creation and reset.
pub mod executable;

/// Machine lifecycle: creation, reset, teardown.
pub mod machine;

/// Bounded guest-physical memory arena.
pub mod memory;

pub use executable::{Executable, Segment};
pub use machine::Machine;
pub use memory::Memory;
