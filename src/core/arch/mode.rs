//! RISC-V Privilege Modes.
//!
//! This module defines the privilege levels a system-model hart can run at:
//! User (U), Supervisor (S), and Machine (M). Harts come out of reset in
//! Machine mode.

/// RISC-V privilege mode levels.
///
/// RISC-V defines three privilege modes that control access to system
/// resources and instructions. Machine mode is the highest privilege level
/// and the initial mode of every hart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrivilegeMode {
    /// User mode (U-mode), the lowest privilege level for application code.
    User = 0,

    /// Supervisor mode (S-mode), the intermediate privilege level for
    /// operating system kernel code.
    Supervisor = 1,

    /// Machine mode (M-mode), the highest privilege level and the reset
    /// state of every hart.
    #[default]
    Machine = 3,
}

impl PrivilegeMode {
    /// Converts a u8 value to a privilege mode.
    ///
    /// Invalid encodings (including the reserved value 2) default to
    /// `Machine`.
    pub fn from_u8(val: u8) -> Self {
        match val {
            0 => PrivilegeMode::User,
            1 => PrivilegeMode::Supervisor,
            _ => PrivilegeMode::Machine,
        }
    }

    /// Converts a privilege mode to its u8 representation (0, 1, or 3).
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns the human-readable name of the privilege mode.
    pub fn name(&self) -> &'static str {
        match self {
            PrivilegeMode::User => "User",
            PrivilegeMode::Supervisor => "Supervisor",
            PrivilegeMode::Machine => "Machine",
        }
    }
}

impl std::fmt::Display for PrivilegeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
