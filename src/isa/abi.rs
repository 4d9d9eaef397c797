//! RISC-V Integer ABI Register Indices.
//!
//! Standard RV64 calling-convention names for the 32 general-purpose
//! registers. The syscall translator decodes the syscall number from `a7`
//! and its arguments from `a0`-`a5`; the stack pointer is initialized by
//! user-hart creation.

/// Hard-wired zero register (x0).
pub const REG_ZERO: usize = 0;
/// Return address (x1).
pub const REG_RA: usize = 1;
/// Stack pointer (x2).
pub const REG_SP: usize = 2;
/// Global pointer (x3).
pub const REG_GP: usize = 3;
/// Thread pointer (x4).
pub const REG_TP: usize = 4;
/// Temporary registers t0-t2 (x5-x7).
pub const REG_T0: usize = 5;
pub const REG_T1: usize = 6;
pub const REG_T2: usize = 7;
/// Saved register / frame pointer (x8).
pub const REG_S0: usize = 8;
/// Saved register s1 (x9).
pub const REG_S1: usize = 9;
/// Argument/return registers a0-a7 (x10-x17).
pub const REG_A0: usize = 10;
pub const REG_A1: usize = 11;
pub const REG_A2: usize = 12;
pub const REG_A3: usize = 13;
pub const REG_A4: usize = 14;
pub const REG_A5: usize = 15;
pub const REG_A6: usize = 16;
/// Syscall number register (x17).
pub const REG_A7: usize = 17;
