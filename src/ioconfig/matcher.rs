//! Matching saved configuration against freshly enumerated devices
//!
//! Both matchers are exact, case-sensitive and first-match-wins. Neither can
//! fail: an unmatched input falls back to the "Other..." slot and an
//! unmatched output falls back to the default slot.

use crate::domain::{InputSelection, OutputDeviceEntry};

/// Find the saved input descriptor among the enumerated descriptors.
///
/// On a miss the selection points one past the last entry (the "Other..."
/// slot) and carries the saved text, even when that text is empty.
pub fn match_input(saved: &str, entries: &[String]) -> InputSelection {
    match entries.iter().position(|descriptor| descriptor == saved) {
        Some(index) => InputSelection::Device { index },
        None => InputSelection::Manual {
            index: entries.len(),
            raw_text: saved.to_string(),
        },
    }
}

/// Find the saved output name among the enumerated outputs.
///
/// Returns the presentation index: entry `i` is shown at `i + 1` because the
/// default output occupies slot 0. Empty or unmatched names map to 0.
pub fn match_output(saved: &str, entries: &[OutputDeviceEntry]) -> usize {
    if saved.is_empty() {
        return 0;
    }
    entries
        .iter()
        .position(|entry| entry.name == saved)
        .map(|i| i + 1)
        .unwrap_or(0)
}
