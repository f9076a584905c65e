//! Saved device configuration
//!
//! The three settings keys a configuration session reads, and the snapshot
//! they are read into.

use serde::{Deserialize, Serialize};

use crate::ports::SettingsStore;

/// Descriptor of the input device (string)
pub const KEY_INPUT_DEVICE: &str = "input.device";
/// Configured input sample rate (int, 0 means unset)
pub const KEY_INPUT_SAMPLE_RATE: &str = "input.sample_rate";
/// Name of the output device (string, absent means default)
pub const KEY_OUTPUT_DEVICE: &str = "output.device";

/// Snapshot of the saved device configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedIoConfig {
    pub input_device: String,
    pub input_sample_rate: i64,
    pub output_device: String,
}

impl SavedIoConfig {
    /// Read the snapshot from a settings store. Missing keys read as empty / 0.
    pub fn read(settings: &dyn SettingsStore) -> Self {
        Self {
            input_device: settings.get_string(KEY_INPUT_DEVICE).unwrap_or_default(),
            input_sample_rate: settings.get_int(KEY_INPUT_SAMPLE_RATE).unwrap_or(0),
            output_device: settings.get_string(KEY_OUTPUT_DEVICE).unwrap_or_default(),
        }
    }
}
