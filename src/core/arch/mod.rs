//! RISC-V architecture-specific components.
//!
//! This module contains the architectural state that distinguishes one
//! system-model hart from another: privilege modes and address-translation
//! modes, together with the translation dispatch itself.

/// Privilege mode definitions.
pub mod mode;

/// Address-translation mode definitions and dispatch.
pub mod translation;

pub use mode::PrivilegeMode;
pub use translation::TranslationMode;
