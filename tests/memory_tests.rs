//! Integration tests for the guest-physical memory arena.

use riscv_core::common::{LoadError, StoreError};
use riscv_core::core::arch::translation::TranslationMode;
use riscv_core::system::{Executable, Memory, Segment};

const BARE: TranslationMode = TranslationMode::Bare;

/// Helper to allocate a memory arena for testing.
fn memory(size: usize) -> Memory {
    Memory::new(size).expect("guest memory allocation")
}

/// Tests bounds exactness at the end of the arena.
///
/// For a memory of size N, an 8-byte access at N-8 is the last legal one;
/// an access at N-7 must be rejected because its *last* byte falls past the
/// end, even though its first byte is in bounds.
#[test]
fn test_store_load_at_boundary() {
    let n: u64 = 64;
    let mut mem = memory(n as usize);

    mem.store_u64(n - 8, 0xAABB_CCDD_EEFF_0011, BARE)
        .expect("store at N-8");
    assert_eq!(mem.load_u64(n - 8, BARE), Ok(0xAABB_CCDD_EEFF_0011));

    assert_eq!(
        mem.store_u64(n - 7, 1, BARE),
        Err(StoreError::ExecutionOutOfBounds {
            addr: n - 7,
            width: 8
        })
    );
    assert_eq!(
        mem.load_u64(n - 7, BARE),
        Err(LoadError::ExecutionOutOfBounds {
            addr: n - 7,
            width: 8
        })
    );
}

/// Tests store/load round-trips at every access width, aligned or not.
#[test]
fn test_round_trip_all_widths() {
    let mut mem = memory(256);

    for addr in [0u64, 1, 7, 100] {
        mem.store_u8(addr, 0xA5, BARE).unwrap();
        assert_eq!(mem.load_u8(addr, BARE), Ok(0xA5));

        mem.store_u16(addr, 0xBEEF, BARE).unwrap();
        assert_eq!(mem.load_u16(addr, BARE), Ok(0xBEEF));

        mem.store_u32(addr, 0xDEAD_BEEF, BARE).unwrap();
        assert_eq!(mem.load_u32(addr, BARE), Ok(0xDEAD_BEEF));

        mem.store_u64(addr, 0x0123_4567_89AB_CDEF, BARE).unwrap();
        assert_eq!(mem.load_u64(addr, BARE), Ok(0x0123_4567_89AB_CDEF));
    }
}

/// Tests that stores encode little-endian byte order.
#[test]
fn test_little_endian_encoding() {
    let mut mem = memory(16);
    mem.store_u64(0, 0x0102_0304_0506_0708, BARE).unwrap();

    let expected = [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01];
    for (offset, &byte) in expected.iter().enumerate() {
        assert_eq!(mem.load_u8(offset as u64, BARE), Ok(byte));
    }
}

/// Tests that a failing store leaves memory unchanged.
#[test]
fn test_failed_store_leaves_memory_unchanged() {
    let mut mem = memory(16);
    mem.store_u64(8, 0x1111_2222_3333_4444, BARE).unwrap();

    assert!(mem.store_u64(12, 0xFFFF_FFFF_FFFF_FFFF, BARE).is_err());
    assert_eq!(mem.load_u64(8, BARE), Ok(0x1111_2222_3333_4444));
}

/// Tests that reset zero-fills the whole arena.
#[test]
fn test_reset_zero_fills() {
    let mut mem = memory(32);
    for addr in 0..32 {
        mem.store_u8(addr, 0xFF, BARE).unwrap();
    }

    mem.reset();
    for addr in 0..32 {
        assert_eq!(mem.load_u8(addr, BARE), Ok(0));
    }
}

/// Tests executable loading copies every segment at its declared address
/// and is idempotent.
#[test]
fn test_load_executable_idempotent() {
    let mut mem = memory(64);
    let exe = Executable::new(
        0x10,
        vec![
            Segment {
                addr: 0x10,
                data: vec![0x13, 0x00, 0x00, 0x00],
            },
            Segment {
                addr: 0x20,
                data: vec![0xEF, 0xBE],
            },
        ],
    );

    mem.load_executable(&exe).unwrap();
    mem.load_executable(&exe).unwrap();

    assert_eq!(mem.load_u32(0x10, BARE), Ok(0x0000_0013));
    assert_eq!(mem.load_u16(0x20, BARE), Ok(0xBEEF));
}

/// Tests that a segment falling outside the arena is rejected.
#[test]
fn test_load_executable_out_of_bounds() {
    let mut mem = memory(16);
    let exe = Executable::flat(14, vec![0xAA, 0xBB, 0xCC, 0xDD]);

    assert_eq!(
        mem.load_executable(&exe),
        Err(StoreError::ExecutionOutOfBounds { addr: 14, width: 4 })
    );
}

/// Tests that an access under a paged translation mode fails with
/// Unimplemented instead of touching memory.
#[test]
fn test_paged_mode_access_fails() {
    let mut mem = memory(16);
    assert_eq!(
        mem.load_u64(0, TranslationMode::Sv39),
        Err(LoadError::Unimplemented {
            mode: TranslationMode::Sv39
        })
    );
    assert_eq!(
        mem.store_u64(0, 1, TranslationMode::Sv48),
        Err(StoreError::Unimplemented {
            mode: TranslationMode::Sv48
        })
    );
}

/// Tests that even a byte access to an empty arena is out of bounds.
#[test]
fn test_empty_memory_rejects_access() {
    let mem = memory(0);
    assert_eq!(
        mem.load_u8(0, BARE),
        Err(LoadError::ExecutionOutOfBounds { addr: 0, width: 1 })
    );
}
