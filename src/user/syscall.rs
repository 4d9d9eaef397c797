//! Environment Call Translation.
//!
//! When a user-model guest issues an environment call, the executor hands
//! the hart to [`handle_syscall`]. The syscall number in `a7` is decoded
//! against the RISC-V 64-bit Linux numbering (the guest ABI's numbering,
//! which is what makes this a translation layer at all: it need not match
//! the host's own), arguments are read from `a0`-`a5`, and the return value
//! is written back to `a0`.
//!
//! Unknown and recognized-but-unimplemented numbers surface as recoverable
//! [`SyscallError`]s; whether to abort on them is the embedding
//! application's policy. An optional trace sink receives one line per
//! invocation and one per result; its absence, or a failing sink write,
//! never changes control flow or return values.

use std::io::{self, Write};

use crate::common::error::SyscallError;
use crate::isa::abi;
use crate::user::hart::UserHart;

/// RISC-V 64-bit Linux syscall numbers the translator recognizes.
///
/// Only `write` and `exit_group` are forwarded to the host today; the rest
/// decode so their names can appear in diagnostics instead of a bare number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Syscall {
    /// `read(fd, buf, count)`.
    Read = 63,
    /// `write(fd, buf, count)`.
    Write = 64,
    /// `exit(code)`.
    Exit = 93,
    /// `exit_group(code)`.
    ExitGroup = 94,
    /// `set_tid_address(tidptr)`.
    SetTidAddress = 96,
    /// `brk(addr)`.
    Brk = 214,
    /// `munmap(addr, len)`.
    Munmap = 215,
    /// `mmap(addr, len, prot, flags, fd, offset)`.
    Mmap = 222,
}

impl Syscall {
    /// Decodes a RISC-V Linux syscall number.
    pub fn from_u64(number: u64) -> Option<Self> {
        match number {
            63 => Some(Syscall::Read),
            64 => Some(Syscall::Write),
            93 => Some(Syscall::Exit),
            94 => Some(Syscall::ExitGroup),
            96 => Some(Syscall::SetTidAddress),
            214 => Some(Syscall::Brk),
            215 => Some(Syscall::Munmap),
            222 => Some(Syscall::Mmap),
            _ => None,
        }
    }

    /// The syscall's number in the RISC-V Linux ABI.
    pub fn number(self) -> u64 {
        self as u64
    }

    /// The syscall's name.
    pub fn name(self) -> &'static str {
        match self {
            Syscall::Read => "read",
            Syscall::Write => "write",
            Syscall::Exit => "exit",
            Syscall::ExitGroup => "exit_group",
            Syscall::SetTidAddress => "set_tid_address",
            Syscall::Brk => "brk",
            Syscall::Munmap => "munmap",
            Syscall::Mmap => "mmap",
        }
    }
}

impl std::fmt::Display for Syscall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Handles one environment call issued by the guest.
///
/// Returns `Ok(true)` when the call was handled and the executor should
/// continue stepping; other trap kinds can later return `false` without
/// changing the call site.
///
/// * `write` forwards `a0..a2` to the host's `write` verbatim. The buffer
///   address is used as-is, consistent with the user model's unchecked
///   memory design. `a0` receives the host's byte count on success or the
///   negated host errno on failure.
/// * `exit_group` terminates the host process immediately with the exit
///   code in `a0` and never returns.
///
/// # Errors
///
/// [`SyscallError::Unknown`] for numbers outside the RISC-V Linux
/// numbering, [`SyscallError::Unsupported`] for recognized numbers with no
/// host forwarding yet.
pub fn handle_syscall(
    hart: &mut UserHart,
    mut trace: Option<&mut dyn Write>,
) -> Result<bool, SyscallError> {
    let number = hart.regs.read(abi::REG_A7);
    let syscall = Syscall::from_u64(number).ok_or(SyscallError::Unknown(number))?;

    match syscall {
        Syscall::Write => {
            let fd = hart.regs.read(abi::REG_A0) as i32;
            let buf = hart.regs.read(abi::REG_A1);
            let count = hart.regs.read(abi::REG_A2) as usize;

            if let Some(sink) = trace.as_deref_mut() {
                let _ = writeln!(sink, "[syscall] write(fd={fd}, buf={buf:#x}, count={count})");
            }

            // SAFETY: in the user model the guest address space is the host
            // address space; the buffer range is trusted, not validated.
            let ret = unsafe { libc::write(fd, buf as *const libc::c_void, count) };
            let ret: i64 = if ret < 0 {
                -i64::from(io::Error::last_os_error().raw_os_error().unwrap_or(libc::EIO))
            } else {
                ret as i64
            };
            hart.regs.write(abi::REG_A0, ret as u64);

            if let Some(sink) = trace {
                let _ = writeln!(sink, "[syscall] write -> {ret}");
            }
            Ok(true)
        }
        Syscall::ExitGroup => {
            let code = hart.regs.read(abi::REG_A0);
            if let Some(sink) = trace {
                let _ = writeln!(sink, "[syscall] exit_group(code={code})");
                let _ = sink.flush();
            }
            // SAFETY: exit_group takes a plain integer status and does not
            // return, so no state below this frame is ever observed again.
            unsafe {
                libc::syscall(libc::SYS_exit_group, code as libc::c_long);
            }
            unreachable!("exit_group returned")
        }
        other => Err(SyscallError::Unsupported {
            number: other.number(),
            name: other.name(),
        }),
    }
}
