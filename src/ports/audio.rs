//! Audio subsystem port

use crate::domain::{AudioDeviceInfo, IoConfigResult};

/// Trait for the platform audio subsystem.
///
/// Only enumeration is needed here; streaming is someone else's job. Some
/// platforms have no audio subsystem at all, which callers model as
/// `Option<Box<dyn AudioSubsystem>>`.
pub trait AudioSubsystem {
    /// List capture devices (name, description)
    fn input_devices(&self) -> IoConfigResult<Vec<AudioDeviceInfo>>;

    /// List playback devices (name, description)
    fn output_devices(&self) -> IoConfigResult<Vec<AudioDeviceInfo>>;
}
