//! RISC-V General-Purpose Register File.
//!
//! This module implements the 32-entry general-purpose register file shared
//! by both hart variants. Register x0 is *not* special-cased here: the
//! register file is plain addressable storage, and the architectural
//! hard-wiring of x0 to zero is the instruction executor's contract to
//! enforce on every write-back.

/// General-Purpose Register file.
///
/// Contains 32 general-purpose 64-bit registers (x0-x31). All registers,
/// including x0, behave as ordinary storage at this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u64; 32],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31)
    pub fn read(&self, idx: usize) -> u64 {
        self.regs[idx]
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31)
    /// * `val` - The 64-bit value to write
    pub fn write(&mut self, idx: usize, val: u64) {
        self.regs[idx] = val;
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Displays registers in pairs (two per line) with hexadecimal formatting.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            println!(
                "x{:<2}={:#018x} x{:<2}={:#018x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}
