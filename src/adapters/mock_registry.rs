//! Mock device registry for development and testing without hardware.
//!
//! Activate by setting SDRCONF_MOCK=1 in the environment (or passing --mock):
//!
//!   SDRCONF_MOCK=1 RUST_LOG=sdrconf_lib=debug sdrconf devices
//!
//! Every lookup is logged at INFO level so you can see exactly what a real
//! registry would have been asked.

use crate::domain::IoConfigResult;
use crate::ports::DeviceRegistry;

/// Environment variable that swaps the real registry for this one
pub const MOCK_ENV_VAR: &str = "SDRCONF_MOCK";

/// Descriptors returned by `MockRegistry::new()`
const DEFAULT_DEVICES: &[&str] = &[
    "rtl=0,label='Generic RTL2832U OEM'",
    "fcd=0,label='FUNcube Dongle V2.0'",
];

pub struct MockRegistry {
    devices: Vec<String>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::with_devices(DEFAULT_DEVICES.iter().map(|d| d.to_string()).collect())
    }

    pub fn with_devices(devices: Vec<String>) -> Self {
        log::info!("[MOCK REGISTRY] Initialized with {} device(s)", devices.len());
        Self { devices }
    }

    /// True when the environment asks for the mock registry.
    pub fn requested() -> bool {
        std::env::var(MOCK_ENV_VAR).map(|v| v == "1").unwrap_or(false)
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry for MockRegistry {
    fn find(&self) -> IoConfigResult<Vec<String>> {
        log::info!("[MOCK REGISTRY] find() → {:?}", self.devices);
        Ok(self.devices.clone())
    }
}
