//! Guest-Physical Memory Arena.
//!
//! A fixed-size, contiguous, zero-initialized byte buffer representing
//! guest-physical address space starting at address 0. Every access runs the
//! virtual address through the hart's translation mode first, then
//! bounds-checks the translated range: an access whose *last* byte falls at
//! or past the end of the buffer is rejected, and a failing access leaves
//! memory strictly unmodified. Values are unsigned and little-endian at
//! every width.
//!
//! Nothing here synchronizes concurrent access. If an executor steps harts
//! on parallel threads, providing the memory-consistency guarantees of the
//! emulated multiprocessor is its responsibility; this type supplies only
//! the raw bounds-checked byte-level primitive, not atomicity.

use log::trace;

use crate::common::error::{CreateError, LoadError, StoreError};
use crate::core::arch::translation::{self, TranslationMode};
use crate::system::executable::Executable;

/// Bounded guest-physical memory.
///
/// The buffer length is fixed at creation and immutable thereafter.
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Allocates `size` bytes of zero-filled guest memory.
    ///
    /// # Errors
    ///
    /// Returns [`CreateError::OutOfMemory`] if the host cannot provide the
    /// buffer.
    pub fn new(size: usize) -> Result<Self, CreateError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(size)
            .map_err(|_| CreateError::OutOfMemory {
                what: "guest memory",
                size,
            })?;
        bytes.resize(size, 0);
        Ok(Self { bytes })
    }

    /// Returns the size of guest memory in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Zero-fills the entire buffer.
    pub fn reset(&mut self) {
        self.bytes.fill(0);
    }

    /// Copies each segment of `executable` into memory at its declared load
    /// address, overwriting existing contents.
    ///
    /// Idempotent and safe to call repeatedly; machine reset relies on that.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ExecutionOutOfBounds`] if any segment does not
    /// fit inside the buffer. Segments before the offending one have already
    /// been copied when this happens.
    pub fn load_executable(&mut self, executable: &Executable) -> Result<(), StoreError> {
        for segment in &executable.segments {
            let len = segment.data.len();
            let start = self.check_range::<StoreError>(segment.addr, len)?;
            self.bytes[start..start + len].copy_from_slice(&segment.data);
            trace!("loaded segment: {} bytes @ {:#x}", len, segment.addr);
        }
        Ok(())
    }

    /// Loads an unsigned byte.
    pub fn load_u8(&self, vaddr: u64, mode: TranslationMode) -> Result<u8, LoadError> {
        Ok(u8::from_le_bytes(self.load_bytes(vaddr, mode)?))
    }

    /// Loads an unsigned half-word (16-bit), little-endian.
    pub fn load_u16(&self, vaddr: u64, mode: TranslationMode) -> Result<u16, LoadError> {
        Ok(u16::from_le_bytes(self.load_bytes(vaddr, mode)?))
    }

    /// Loads an unsigned word (32-bit), little-endian.
    pub fn load_u32(&self, vaddr: u64, mode: TranslationMode) -> Result<u32, LoadError> {
        Ok(u32::from_le_bytes(self.load_bytes(vaddr, mode)?))
    }

    /// Loads an unsigned double-word (64-bit), little-endian.
    pub fn load_u64(&self, vaddr: u64, mode: TranslationMode) -> Result<u64, LoadError> {
        Ok(u64::from_le_bytes(self.load_bytes(vaddr, mode)?))
    }

    /// Stores a byte.
    pub fn store_u8(
        &mut self,
        vaddr: u64,
        val: u8,
        mode: TranslationMode,
    ) -> Result<(), StoreError> {
        self.store_bytes(vaddr, val.to_le_bytes(), mode)
    }

    /// Stores a half-word (16-bit), little-endian.
    pub fn store_u16(
        &mut self,
        vaddr: u64,
        val: u16,
        mode: TranslationMode,
    ) -> Result<(), StoreError> {
        self.store_bytes(vaddr, val.to_le_bytes(), mode)
    }

    /// Stores a word (32-bit), little-endian.
    pub fn store_u32(
        &mut self,
        vaddr: u64,
        val: u32,
        mode: TranslationMode,
    ) -> Result<(), StoreError> {
        self.store_bytes(vaddr, val.to_le_bytes(), mode)
    }

    /// Stores a double-word (64-bit), little-endian.
    pub fn store_u64(
        &mut self,
        vaddr: u64,
        val: u64,
        mode: TranslationMode,
    ) -> Result<(), StoreError> {
        self.store_bytes(vaddr, val.to_le_bytes(), mode)
    }

    /// Bounds check for a `width`-byte access at translated address `addr`.
    /// Rejects a range whose last byte falls at or past the end.
    fn check_range<E: From<LoadError>>(&self, addr: u64, width: usize) -> Result<usize, E> {
        addr.checked_add(width as u64)
            .filter(|&end| end <= self.bytes.len() as u64)
            .map(|_| addr as usize)
            .ok_or_else(|| LoadError::ExecutionOutOfBounds { addr, width }.into())
    }

    fn load_bytes<const N: usize>(
        &self,
        vaddr: u64,
        mode: TranslationMode,
    ) -> Result<[u8; N], LoadError> {
        let addr = translation::translate(vaddr, mode)?;
        let start = self.check_range::<LoadError>(addr, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[start..start + N]);
        Ok(out)
    }

    fn store_bytes<const N: usize>(
        &mut self,
        vaddr: u64,
        bytes: [u8; N],
        mode: TranslationMode,
    ) -> Result<(), StoreError> {
        let addr = translation::translate(vaddr, mode)?;
        let start = self.check_range::<StoreError>(addr, N)?;
        self.bytes[start..start + N].copy_from_slice(&bytes);
        Ok(())
    }
}
