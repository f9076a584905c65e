//! FUNcube Dongle registry
//!
//! A FUNcube Dongle shows up as a USB sound card, so it is found by asking the
//! audio subsystem for capture devices whose description mentions it.

use crate::domain::IoConfigResult;
use crate::ioconfig::enumerate::FCD_DESCRIPTION_MARKER;
use crate::ioconfig::label::label_safe;
use crate::ports::{AudioSubsystem, DeviceRegistry};

pub struct FcdRegistry {
    audio: Box<dyn AudioSubsystem>,
}

impl FcdRegistry {
    pub fn new(audio: Box<dyn AudioSubsystem>) -> Self {
        Self { audio }
    }
}

impl DeviceRegistry for FcdRegistry {
    /// One `fcd=<n>,label='<description>',device=<audio name>` per dongle
    fn find(&self) -> IoConfigResult<Vec<String>> {
        let devices = self.audio.input_devices()?;
        Ok(devices
            .into_iter()
            .filter(|d| d.description.contains(FCD_DESCRIPTION_MARKER))
            .enumerate()
            .map(|(n, d)| {
                format!(
                    "fcd={n},label='{}',device={}",
                    label_safe(&d.description),
                    d.name
                )
            })
            .collect())
    }
}
