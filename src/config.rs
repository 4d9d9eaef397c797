use serde::Deserialize;

const DEFAULT_MEMORY_SIZE: usize = 128 * 1024 * 1024;
const DEFAULT_STACK_SIZE: usize = 0x80_0000;
const DEFAULT_HARTS: usize = 1;

/// Top-level emulator configuration, parsed from TOML.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub machine: MachineConfig,
}

impl Config {
    /// Parses a configuration from TOML text. Missing sections and fields
    /// fall back to their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    /// Emit one trace line per syscall invocation and result.
    #[serde(default)]
    pub trace_syscalls: bool,

    /// User-model stack mapping size in bytes. Must stay a multiple of the
    /// host page size.
    #[serde(default = "default_stack_size")]
    pub user_stack_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct MachineConfig {
    /// Guest memory size as a hex string, e.g. "0x8000000".
    #[serde(default = "default_memory_size")]
    pub memory_size: String,

    /// Number of harts in a system-model machine.
    #[serde(default = "default_harts")]
    pub harts: usize,
}

impl MachineConfig {
    pub fn memory_size_val(&self) -> usize {
        let s = self.memory_size.trim_start_matches("0x");
        usize::from_str_radix(s, 16).unwrap_or(DEFAULT_MEMORY_SIZE)
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_syscalls: false,
            user_stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            memory_size: default_memory_size(),
            harts: DEFAULT_HARTS,
        }
    }
}

fn default_memory_size() -> String {
    format!("{:#x}", DEFAULT_MEMORY_SIZE)
}

fn default_stack_size() -> usize {
    DEFAULT_STACK_SIZE
}

fn default_harts() -> usize {
    DEFAULT_HARTS
}
