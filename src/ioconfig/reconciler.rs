//! Configuration session: load, user edits, save.
//!
//! A `ConfigReconciler` owns the device lists from one enumeration together
//! with the selection made against them. Indices are only meaningful for the
//! lists held by the same session; a fresh `load` starts over.

use crate::domain::{
    DeviceEntry, InputSelection, IoConfigError, IoConfigResult, OutputDeviceEntry,
    SavedIoConfig, SelectionState, DEFAULT_OUTPUT_LABEL, KEY_OUTPUT_DEVICE, OTHER_INPUT_LABEL,
};
use crate::ports::{DeviceListView, SettingsStore};

use super::enumerate::{entries_for, DeviceEnumerator};
use super::matcher::{match_input, match_output};
use super::sample_rate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigReconciler {
    inputs: Vec<DeviceEntry>,
    outputs: Vec<OutputDeviceEntry>,
    state: SelectionState,
}

impl ConfigReconciler {
    /// Build the initial selection from saved settings and fresh enumerations.
    pub fn load(
        saved: &SavedIoConfig,
        inputs: Vec<String>,
        outputs: Vec<OutputDeviceEntry>,
    ) -> Self {
        Self::from_entries(saved, entries_for(inputs), outputs)
    }

    /// Read the saved settings and enumerate devices, then `load`.
    pub fn load_from(settings: &dyn SettingsStore, enumerator: &DeviceEnumerator) -> Self {
        let saved = SavedIoConfig::read(settings);
        Self::from_entries(
            &saved,
            enumerator.input_entries(),
            enumerator.list_output_devices(),
        )
    }

    /// `load` for inputs that are already labelled.
    fn from_entries(
        saved: &SavedIoConfig,
        inputs: Vec<DeviceEntry>,
        outputs: Vec<OutputDeviceEntry>,
    ) -> Self {
        let descriptors: Vec<String> = inputs.iter().map(|e| e.descriptor.clone()).collect();
        let input = match_input(&saved.input_device, &descriptors);
        let descriptor = match &input {
            InputSelection::Device { index } => inputs[*index].descriptor.clone(),
            InputSelection::Manual { raw_text, .. } => raw_text.clone(),
        };
        let output_index = match_output(&saved.output_device, &outputs);
        let sample_rates = sample_rate::resolve(&descriptor, saved.input_sample_rate);

        log::debug!(
            "Loaded io config: input={input:?} output_index={output_index} rates={sample_rates:?}"
        );

        Self {
            inputs,
            outputs,
            state: SelectionState {
                sample_rate_index: first_index(&sample_rates),
                input,
                descriptor,
                output_index,
                sample_rates,
            },
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Effective input descriptor (matched device or free text)
    pub fn descriptor(&self) -> &str {
        &self.state.descriptor
    }

    pub fn inputs(&self) -> &[DeviceEntry] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[OutputDeviceEntry] {
        &self.outputs
    }

    /// Input choices as presented: enumerated devices then the "Other..." slot.
    pub fn input_choices(&self) -> Vec<DeviceEntry> {
        let mut choices = self.inputs.clone();
        choices.push(DeviceEntry {
            position: self.inputs.len(),
            label: OTHER_INPUT_LABEL.to_string(),
            descriptor: String::new(),
        });
        choices
    }

    /// Output choices as presented: "Default" then each device description.
    pub fn output_choices(&self) -> Vec<String> {
        std::iter::once(DEFAULT_OUTPUT_LABEL.to_string())
            .chain(self.outputs.iter().map(|o| o.description.clone()))
            .collect()
    }

    /// The user picked input slot `index`; the last slot is "Other...".
    ///
    /// Rates are re-derived from the descriptor alone, ignoring any saved rate.
    pub fn input_changed(&mut self, index: usize) -> IoConfigResult<()> {
        let other = self.inputs.len();
        if index > other {
            return Err(IoConfigError::InvalidSelection {
                index,
                limit: other + 1,
            });
        }

        if index == other {
            self.state.input = InputSelection::Manual {
                index,
                raw_text: String::new(),
            };
            self.state.descriptor = String::new();
        } else {
            self.state.input = InputSelection::Device { index };
            self.state.descriptor = self.inputs[index].descriptor.clone();
        }

        log::debug!(
            "New input device selected: {index} ({:?})",
            self.state.descriptor
        );
        self.refresh_sample_rates();
        Ok(())
    }

    /// The user typed a descriptor by hand. Selects the "Other..." slot.
    pub fn set_manual_descriptor(&mut self, text: &str) {
        self.state.input = InputSelection::Manual {
            index: self.inputs.len(),
            raw_text: text.to_string(),
        };
        self.state.descriptor = text.to_string();
        log::debug!("Manual input descriptor: {text:?}");
        self.refresh_sample_rates();
    }

    /// The user picked output slot `index`; 0 is the default output.
    pub fn output_changed(&mut self, index: usize) -> IoConfigResult<()> {
        if index > self.outputs.len() {
            return Err(IoConfigError::InvalidSelection {
                index,
                limit: self.outputs.len() + 1,
            });
        }
        self.state.output_index = index;
        Ok(())
    }

    pub fn sample_rate_changed(&mut self, index: usize) -> IoConfigResult<()> {
        if index >= self.state.sample_rates.len() {
            return Err(IoConfigError::InvalidSelection {
                index,
                limit: self.state.sample_rates.len(),
            });
        }
        self.state.sample_rate_index = Some(index);
        Ok(())
    }

    /// Persist the output selection.
    ///
    /// Returns the name written, or `None` for the default output, which is
    /// represented by leaving the key alone. The input descriptor is not
    /// written here.
    pub fn save(&self, settings: &mut dyn SettingsStore) -> IoConfigResult<Option<String>> {
        let index = self.state.output_index;
        if index == 0 {
            log::info!("Selected output device is 'default' (not saving)");
            return Ok(None);
        }

        let entry = self
            .outputs
            .get(index - 1)
            .ok_or(IoConfigError::InvalidSelection {
                index,
                limit: self.outputs.len() + 1,
            })?;
        log::info!("Output device {index}: {}", entry.name);
        settings.set_string(KEY_OUTPUT_DEVICE, &entry.name)?;
        Ok(Some(entry.name.clone()))
    }

    /// Push the current lists and selection to a view.
    pub fn present(&self, view: &mut dyn DeviceListView) {
        view.show_input_devices(&self.input_choices(), self.state.input.index());
        view.show_input_descriptor(&self.state.descriptor);
        view.show_output_devices(&self.output_choices(), self.state.output_index);
        view.show_sample_rates(&self.state.sample_rates, self.state.sample_rate_index);
    }

    fn refresh_sample_rates(&mut self) {
        self.state.sample_rates = sample_rate::resolve(&self.state.descriptor, 0);
        self.state.sample_rate_index = first_index(&self.state.sample_rates);
    }
}

fn first_index(rates: &[String]) -> Option<usize> {
    (!rates.is_empty()).then_some(0)
}
