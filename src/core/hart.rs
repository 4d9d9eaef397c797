//! System-Model Hart State.
//!
//! A hart is one emulated hardware thread. This module holds its full
//! architectural state for the system model: program counter, general-purpose
//! registers, cycle counter, privilege level, and address-translation mode.
//! The instruction executor owns stepping: it mutates `pc` and `cycle`,
//! validates fetch addresses before dereferencing them, and enforces the x0
//! hard-wiring on write-back. This layer only validates data accesses.

use super::arch::{PrivilegeMode, TranslationMode};
use crate::common::reg::RegisterFile;

/// One emulated hardware thread of a system-model machine.
///
/// Harts are data, not threads of control: whether several harts step in
/// parallel or cooperatively is the executor's decision. Each hart must have
/// exactly one mutable owner at a time; nothing here synchronizes concurrent
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hart {
    /// Stable identity of this hart within its machine, 0-based.
    pub hart_id: u64,
    /// Address of the next instruction. Mutated only by the executor.
    pub pc: u64,
    /// General-purpose integer registers.
    pub regs: RegisterFile,
    /// Monotonically increasing instruction/cycle counter.
    pub cycle: u64,
    /// Current privilege level. Machine mode out of reset.
    pub privilege: PrivilegeMode,
    /// Current address-translation mode. Bare out of reset. Memory access
    /// paths re-read this on every access; it must never be cached across
    /// accesses.
    pub translation: TranslationMode,
}

impl Hart {
    /// Creates a hart in its reset state: the given identity, the program
    /// counter at `entry`, registers and cycle counter zeroed, Machine
    /// privilege, and Bare translation.
    pub fn new(hart_id: u64, entry: u64) -> Self {
        Self {
            hart_id,
            pc: entry,
            regs: RegisterFile::new(),
            cycle: 0,
            privilege: PrivilegeMode::default(),
            translation: TranslationMode::default(),
        }
    }

    /// Dumps the hart's program counter and registers to stdout.
    pub fn dump_state(&self) {
        println!("hart {} PC = {:#018x}", self.hart_id, self.pc);
        self.regs.dump();
    }
}
