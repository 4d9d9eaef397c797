//! User-Model Hart.
//!
//! A user hart's loads and stores alias the host process address space
//! directly: no translation, no bounds check, the virtual address is
//! interpreted as a host address. This is a deliberate simplification that
//! is sound only while the emulated program's address space is trusted to
//! coincide with host addressing. Memory-mapping validation is not enforced
//! here; these accesses must not be exposed to untrusted guest code without
//! adding it. The access methods are `unsafe fn`s for exactly that reason.
//!
//! The only memory a user hart owns is its stack: a private anonymous
//! read/write mapping whose base and size are fixed at creation and released
//! exactly once when the hart is dropped.

use std::ptr;

use log::debug;

use crate::common::error::CreateError;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::isa::abi;

/// Returns the host page size in bytes.
pub fn page_size() -> usize {
    // SAFETY: sysconf has no preconditions for _SC_PAGESIZE.
    unsafe { libc::sysconf(libc::_SC_PAGESIZE) as usize }
}

/// Exclusively-owned anonymous mapping used as the hart's stack.
struct StackMapping {
    base: *mut u8,
    size: usize,
}

impl StackMapping {
    fn new(size: usize) -> Result<Self, CreateError> {
        // SAFETY: anonymous private mapping with no address hint; the kernel
        // picks the placement and MAP_FAILED is checked below.
        let base = unsafe {
            libc::mmap(
                ptr::null_mut(),
                size,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };
        if base == libc::MAP_FAILED {
            return Err(CreateError::OutOfMemory {
                what: "user stack mapping",
                size,
            });
        }
        Ok(Self {
            base: base.cast(),
            size,
        })
    }
}

impl Drop for StackMapping {
    fn drop(&mut self) {
        // SAFETY: base/size describe exactly the region mapped in new(), and
        // Drop runs at most once, so the mapping is released exactly once.
        unsafe {
            libc::munmap(self.base.cast(), self.size);
        }
    }
}

/// A hart whose memory accesses map directly onto host process memory.
///
/// At most one live user hart should be associated with a given thread of
/// control; syscall-capable code receives it as an explicit `&mut` context
/// rather than through any ambient global.
pub struct UserHart {
    /// Address of the next instruction. Mutated only by the executor.
    pub pc: u64,
    /// General-purpose integer registers.
    pub regs: RegisterFile,
    /// Monotonically increasing instruction/cycle counter.
    pub cycle: u64,
    stack: StackMapping,
}

impl UserHart {
    /// Creates a user hart with a freshly mapped stack of `stack_size`
    /// bytes. The stack-pointer register starts at the mapping's highest
    /// address (one past the end; the stack grows downward).
    ///
    /// # Panics
    ///
    /// Panics if `stack_size` is zero or not a multiple of the host page
    /// size; both are caller bugs.
    ///
    /// # Errors
    ///
    /// Returns [`CreateError::OutOfMemory`] if the mapping cannot be
    /// obtained. No partial state survives the failure.
    pub fn new(stack_size: usize) -> Result<Self, CreateError> {
        assert!(stack_size != 0, "user stack size must be nonzero");
        assert!(
            stack_size % page_size() == 0,
            "user stack size must be a multiple of the host page size"
        );

        let stack = StackMapping::new(stack_size)?;
        let mut regs = RegisterFile::new();
        regs.write(abi::REG_SP, stack.base as u64 + stack.size as u64);

        debug!("mapped {:#x} byte user stack @ {:p}", stack.size, stack.base);
        Ok(Self {
            pc: 0,
            regs,
            cycle: 0,
            stack,
        })
    }

    /// Creates a user hart from the configuration layer.
    pub fn from_config(config: &Config) -> Result<Self, CreateError> {
        Self::new(config.general.user_stack_size)
    }

    /// Lowest address of the stack mapping.
    pub fn stack_base(&self) -> u64 {
        self.stack.base as u64
    }

    /// Size of the stack mapping in bytes.
    pub fn stack_size(&self) -> usize {
        self.stack.size
    }

    /// One past the highest address of the stack mapping; the initial value
    /// of the stack-pointer register.
    pub fn stack_top(&self) -> u64 {
        self.stack.base as u64 + self.stack.size as u64
    }

    /// Loads an unsigned byte from host memory.
    ///
    /// # Safety
    ///
    /// `addr` must be a readable host address; no validation is performed.
    pub unsafe fn load_u8(&self, addr: u64) -> u8 {
        u8::from_le_bytes(unsafe { load_bytes(addr) })
    }

    /// Loads an unsigned half-word (16-bit) from host memory, little-endian.
    ///
    /// # Safety
    ///
    /// The 2 bytes at `addr` must be readable host memory.
    pub unsafe fn load_u16(&self, addr: u64) -> u16 {
        u16::from_le_bytes(unsafe { load_bytes(addr) })
    }

    /// Loads an unsigned word (32-bit) from host memory, little-endian.
    ///
    /// # Safety
    ///
    /// The 4 bytes at `addr` must be readable host memory.
    pub unsafe fn load_u32(&self, addr: u64) -> u32 {
        u32::from_le_bytes(unsafe { load_bytes(addr) })
    }

    /// Loads an unsigned double-word (64-bit) from host memory,
    /// little-endian.
    ///
    /// # Safety
    ///
    /// The 8 bytes at `addr` must be readable host memory.
    pub unsafe fn load_u64(&self, addr: u64) -> u64 {
        u64::from_le_bytes(unsafe { load_bytes(addr) })
    }

    /// Stores a byte to host memory.
    ///
    /// # Safety
    ///
    /// `addr` must be a writable host address; no validation is performed.
    pub unsafe fn store_u8(&mut self, addr: u64, val: u8) {
        unsafe { store_bytes(addr, val.to_le_bytes()) }
    }

    /// Stores a half-word (16-bit) to host memory, little-endian.
    ///
    /// # Safety
    ///
    /// The 2 bytes at `addr` must be writable host memory.
    pub unsafe fn store_u16(&mut self, addr: u64, val: u16) {
        unsafe { store_bytes(addr, val.to_le_bytes()) }
    }

    /// Stores a word (32-bit) to host memory, little-endian.
    ///
    /// # Safety
    ///
    /// The 4 bytes at `addr` must be writable host memory.
    pub unsafe fn store_u32(&mut self, addr: u64, val: u32) {
        unsafe { store_bytes(addr, val.to_le_bytes()) }
    }

    /// Stores a double-word (64-bit) to host memory, little-endian.
    ///
    /// # Safety
    ///
    /// The 8 bytes at `addr` must be writable host memory.
    pub unsafe fn store_u64(&mut self, addr: u64, val: u64) {
        unsafe { store_bytes(addr, val.to_le_bytes()) }
    }
}

unsafe fn load_bytes<const N: usize>(addr: u64) -> [u8; N] {
    let mut out = [0u8; N];
    unsafe { ptr::copy_nonoverlapping(addr as *const u8, out.as_mut_ptr(), N) };
    out
}

unsafe fn store_bytes<const N: usize>(addr: u64, bytes: [u8; N]) {
    unsafe { ptr::copy_nonoverlapping(bytes.as_ptr(), addr as *mut u8, N) };
}
