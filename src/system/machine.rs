//! System Machine Lifecycle.
//!
//! A machine owns exactly one guest memory arena and an array of harts, plus
//! the executable image used to (re)initialize both. Creation brings the
//! machine to a ready state via the same path as a reset; reset can be
//! repeated any number of times; teardown is `Drop`, so a second destroy is
//! unrepresentable.

use log::debug;

use crate::common::error::CreateError;
use crate::config::Config;
use crate::core::hart::Hart;
use crate::system::executable::Executable;
use crate::system::memory::Memory;

/// A system-model machine: one memory arena, `n >= 1` harts, one executable.
///
/// `memory` and `harts` are public because the external instruction executor
/// drives them directly; the machine is the owning context both reach back
/// into for shared resources. Dropping the machine releases the hart array
/// and guest memory.
pub struct Machine {
    /// Guest-physical memory shared by all harts.
    pub memory: Memory,
    /// Hart array; `harts[i].hart_id == i` after every reset.
    pub harts: Vec<Hart>,
    executable: Executable,
}

impl Machine {
    /// Creates a machine with `memory_size` bytes of guest memory and
    /// `harts` harts, loads the executable, and brings every hart to its
    /// reset state.
    ///
    /// # Panics
    ///
    /// Panics if `harts` is zero; a machine with no harts is a caller bug,
    /// not an environmental condition.
    ///
    /// # Errors
    ///
    /// Returns [`CreateError::OutOfMemory`] if memory or the hart array
    /// cannot be allocated, and [`CreateError::Load`] if the executable does
    /// not fit in `memory_size` bytes. Partial allocations are released by
    /// ownership on every failure path.
    pub fn new(
        memory_size: usize,
        executable: Executable,
        harts: usize,
    ) -> Result<Self, CreateError> {
        assert!(harts >= 1, "a machine requires at least one hart");

        let memory = Memory::new(memory_size)?;
        let mut hart_array = Vec::new();
        hart_array
            .try_reserve_exact(harts)
            .map_err(|_| CreateError::OutOfMemory {
                what: "hart array",
                size: harts * std::mem::size_of::<Hart>(),
            })?;
        hart_array.extend((0..harts).map(|id| Hart::new(id as u64, executable.entry)));

        let mut machine = Self {
            memory,
            harts: hart_array,
            executable,
        };
        machine.reset(false)?;

        debug!(
            "created machine: {} hart(s), {:#x} bytes of guest memory, entry {:#x}",
            machine.harts.len(),
            machine.memory.size(),
            machine.executable.entry
        );
        Ok(machine)
    }

    /// Creates a machine from the configuration layer.
    pub fn from_config(config: &Config, executable: Executable) -> Result<Self, CreateError> {
        Self::new(
            config.machine.memory_size_val(),
            executable,
            config.machine.harts,
        )
    }

    /// Re-creates every hart's initial state and reloads the executable.
    ///
    /// Each hart becomes `Hart::new(index, entry)`: uniform Machine
    /// privilege and Bare translation regardless of what any hart held
    /// before. With `clear_memory` the whole arena is zero-filled first. The
    /// executable's segments are reloaded in either case, so the segment
    /// region is always rewritten while, without `clear_memory`, all other
    /// memory (prior heap or stack contents) is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CreateError::Load`] if a segment does not fit in guest
    /// memory. Creation validates this once, so resets of a successfully
    /// created machine do not fail.
    pub fn reset(&mut self, clear_memory: bool) -> Result<(), CreateError> {
        for (index, hart) in self.harts.iter_mut().enumerate() {
            *hart = Hart::new(index as u64, self.executable.entry);
        }
        if clear_memory {
            self.memory.reset();
        }
        self.memory.load_executable(&self.executable)?;
        debug!("machine reset (clear_memory = {clear_memory})");
        Ok(())
    }

    /// The executable this machine was created with.
    pub fn executable(&self) -> &Executable {
        &self.executable
    }
}
