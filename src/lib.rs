//! RISC-V 64-bit Emulator Core Library.
//!
//! This crate implements the hart/machine/memory/syscall substrate of a
//! RISC-V 64-bit emulator. It supports two execution models:
//!
//! * **System model**: multiple harts share a bounded guest-physical memory
//!   arena. Each hart carries a privilege level and an address-translation
//!   mode, and every data access is translated and bounds-checked.
//! * **User model**: a single hart whose memory accesses alias the host
//!   process address space directly and whose environment calls are forwarded
//!   to the host kernel.
//!
//! The instruction fetch/decode/execute loop, ELF loading, and any front end
//! are external collaborators: they drive the types in this crate through the
//! load/store and syscall entry points but are not part of it.
//!
//! # Modules
//!
//! * `common`: Shared types and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: Per-hart architectural state (registers, privilege, translation).
//! * `isa`: Instruction Set Architecture ABI definitions.
//! * `system`: System-model machine, guest memory, and executable images.
//! * `user`: User-model hart and host syscall translation.

/// Shared types and error handling.
///
/// Provides the register file abstraction and the error taxonomy used
/// throughout the emulator core.
pub mod common;

/// Configuration system for machine and user-model settings.
///
/// Loads and parses TOML configuration files to customize guest memory size,
/// hart count, user stack size, and syscall tracing.
pub mod config;

/// Per-hart architectural state.
///
/// Implements the system-model hart (program counter, registers, cycle
/// counter, privilege level, translation mode) and address translation
/// dispatch.
pub mod core;

/// Instruction Set Architecture ABI definitions.
///
/// Names the RISC-V integer ABI register indices used by the syscall
/// translator and by embedding executors.
pub mod isa;

/// System-model machine components.
///
/// Implements the bounded guest-physical memory arena, the executable image
/// consumed by machine creation and reset, and the machine lifecycle that
/// owns memory and the hart array.
pub mod system;

/// User-model hart and syscall translation.
///
/// Implements the host-memory-aliasing hart with its mapped stack, and the
/// guest-ABI-to-host-kernel environment call translation layer.
pub mod user;
