//! Core domain types

use serde::{Deserialize, Serialize};

/// Label shown for the synthetic free-text input slot
pub const OTHER_INPUT_LABEL: &str = "Other...";

/// Label shown for the synthetic output slot at position 0
pub const DEFAULT_OUTPUT_LABEL: &str = "Default";

/// An enumerated input device.
///
/// `descriptor` is the opaque string the hardware registry understands;
/// `label` is derived from it for display and is not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEntry {
    pub position: usize,
    pub label: String,
    pub descriptor: String,
}

/// An output device as reported by the audio subsystem.
///
/// `name` is what gets persisted, `description` is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDeviceEntry {
    pub name: String,
    pub description: String,
}

/// Information about an audio device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioDeviceInfo {
    pub name: String,
    pub description: String,
}

impl From<AudioDeviceInfo> for OutputDeviceEntry {
    fn from(info: AudioDeviceInfo) -> Self {
        Self {
            name: info.name,
            description: info.description,
        }
    }
}

/// Which input slot is selected.
///
/// `Manual` always points at the synthetic "Other..." slot, which sits one
/// past the last enumerated device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputSelection {
    Device { index: usize },
    Manual { index: usize, raw_text: String },
}

impl InputSelection {
    /// Position of the selected slot in the presented input list
    pub fn index(&self) -> usize {
        match self {
            InputSelection::Device { index } | InputSelection::Manual { index, .. } => *index,
        }
    }

    pub fn is_manual(&self) -> bool {
        matches!(self, InputSelection::Manual { .. })
    }
}

/// Selection state of one configuration session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub input: InputSelection,
    /// Effective input descriptor: the matched device or the free-typed text
    pub descriptor: String,
    /// 0 is the default output, `n` is output entry `n - 1`
    pub output_index: usize,
    pub sample_rates: Vec<String>,
    pub sample_rate_index: Option<usize>,
}
