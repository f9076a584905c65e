//! Presentation surface port

use crate::domain::DeviceEntry;

/// Something that can display the device lists of a configuration session.
///
/// The session pushes its state here; user events come back as plain method
/// calls on `ConfigReconciler`.
pub trait DeviceListView {
    /// Input choices, including the trailing "Other..." slot
    fn show_input_devices(&mut self, choices: &[DeviceEntry], selected: usize);

    /// Text of the free-form descriptor field
    fn show_input_descriptor(&mut self, descriptor: &str);

    /// Output choices, including the leading "Default" slot
    fn show_output_devices(&mut self, choices: &[String], selected: usize);

    fn show_sample_rates(&mut self, rates: &[String], selected: Option<usize>);
}
