//! CPAL audio adapter — implements AudioSubsystem using the cpal crate
//!
//! cpal talks to whatever the OS provides (ALSA on Linux, CoreAudio on macOS,
//! WASAPI on Windows). It exposes one string per device, so that string is
//! used both as the persisted name and as the description.

use cpal::traits::{DeviceTrait, HostTrait};
use cpal::{Device, Host};

use crate::domain::{AudioDeviceInfo, IoConfigError, IoConfigResult};
use crate::ports::AudioSubsystem;

/// Audio subsystem backed by the cpal default host.
pub struct CpalAudio {
    host: Host,
}

impl CpalAudio {
    pub fn new() -> Self {
        Self {
            host: cpal::default_host(),
        }
    }
}

impl Default for CpalAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSubsystem for CpalAudio {
    fn input_devices(&self) -> IoConfigResult<Vec<AudioDeviceInfo>> {
        let devices = self.host.input_devices().map_err(|e| {
            IoConfigError::Audio(format!("Failed to enumerate input devices: {e}"))
        })?;
        Ok(describe(devices))
    }

    fn output_devices(&self) -> IoConfigResult<Vec<AudioDeviceInfo>> {
        let devices = self.host.output_devices().map_err(|e| {
            IoConfigError::Audio(format!("Failed to enumerate output devices: {e}"))
        })?;
        Ok(describe(devices))
    }
}

/// Devices whose name cannot be read are skipped: without a name there is
/// nothing to persist.
fn describe(devices: impl Iterator<Item = Device>) -> Vec<AudioDeviceInfo> {
    devices
        .filter_map(|device| match device.name() {
            Ok(name) => Some(name),
            Err(e) => {
                log::debug!("Skipping audio device without a name: {e}");
                None
            }
        })
        .map(|name| AudioDeviceInfo {
            description: name.clone(),
            name,
        })
        .collect()
}
