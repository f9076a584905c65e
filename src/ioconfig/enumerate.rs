//! Device enumeration
//!
//! Wraps the hardware registry and the (optional) audio subsystem. Any
//! failure to enumerate is logged and turned into an empty list: missing
//! devices are a normal condition, not an error.

use crate::domain::{DeviceEntry, OutputDeviceEntry};
use crate::ports::{AudioSubsystem, DeviceRegistry};

use super::label::extract_label;

/// Substring identifying a FUNcube Dongle in an audio device description
pub const FCD_DESCRIPTION_MARKER: &str = "FUNcube Dongle";

/// Lists input devices from a registry and output devices from an audio subsystem.
pub struct DeviceEnumerator {
    registry: Box<dyn DeviceRegistry>,
    audio: Option<Box<dyn AudioSubsystem>>,
}

impl DeviceEnumerator {
    pub fn new(registry: Box<dyn DeviceRegistry>, audio: Option<Box<dyn AudioSubsystem>>) -> Self {
        Self { registry, audio }
    }

    /// Input descriptors in registry order
    pub fn list_input_devices(&self) -> Vec<String> {
        match self.registry.find() {
            Ok(devices) => devices,
            Err(e) => {
                log::warn!("Input device enumeration failed: {e}");
                Vec::new()
            }
        }
    }

    /// Input descriptors paired with their display labels
    pub fn input_entries(&self) -> Vec<DeviceEntry> {
        let entries = entries_for(self.list_input_devices());
        log::debug!("Available input devices:");
        for entry in &entries {
            log::debug!("    {}: {}", entry.position, entry.label);
        }
        entries
    }

    /// Output devices in audio subsystem order.
    ///
    /// Without an audio subsystem this is empty, same as a subsystem with no
    /// outputs.
    pub fn list_output_devices(&self) -> Vec<OutputDeviceEntry> {
        let Some(audio) = &self.audio else {
            log::debug!("No audio subsystem; only the default output is available");
            return Vec::new();
        };

        let devices = match audio.output_devices() {
            Ok(devices) => devices,
            Err(e) => {
                log::warn!("Output device enumeration failed: {e}");
                return Vec::new();
            }
        };

        log::debug!("Available output devices:");
        devices
            .into_iter()
            .enumerate()
            .map(|(i, info)| {
                log::debug!("    {i}: {}", info.description);
                OutputDeviceEntry::from(info)
            })
            .collect()
    }

    /// Name of the audio input belonging to a FUNcube Dongle, if one is plugged in.
    ///
    /// If several match, the last one listed wins.
    pub fn fcd_device_name(&self) -> Option<String> {
        let audio = self.audio.as_ref()?;
        let devices = match audio.input_devices() {
            Ok(devices) => devices,
            Err(e) => {
                log::warn!("Audio input enumeration failed: {e}");
                return None;
            }
        };

        let name = devices
            .into_iter()
            .rev()
            .find(|d| d.description.contains(FCD_DESCRIPTION_MARKER))
            .map(|d| d.name);
        log::debug!("FUNcube Dongle audio device: {name:?}");
        name
    }
}

/// Label each descriptor, keeping enumeration order as the position.
pub fn entries_for(descriptors: Vec<String>) -> Vec<DeviceEntry> {
    descriptors
        .into_iter()
        .enumerate()
        .map(|(position, descriptor)| DeviceEntry {
            position,
            label: extract_label(&descriptor),
            descriptor,
        })
        .collect()
}
