//! Registry that concatenates several registries.

use crate::domain::IoConfigResult;
use crate::ports::DeviceRegistry;

/// Asks each member in turn and concatenates the results in member order.
///
/// A member that fails is logged and skipped so one missing driver does not
/// hide the devices found by the others.
#[derive(Default)]
pub struct RegistryChain {
    members: Vec<Box<dyn DeviceRegistry>>,
}

impl RegistryChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, registry: Box<dyn DeviceRegistry>) -> Self {
        self.members.push(registry);
        self
    }
}

impl DeviceRegistry for RegistryChain {
    fn find(&self) -> IoConfigResult<Vec<String>> {
        let mut devices = Vec::new();
        for member in &self.members {
            match member.find() {
                Ok(found) => devices.extend(found),
                Err(e) => log::warn!("Skipping device registry: {e}"),
            }
        }
        Ok(devices)
    }
}
