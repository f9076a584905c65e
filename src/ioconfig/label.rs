//! Device label extraction
//!
//! Registry descriptors carry a human-readable name as a single-quoted
//! segment, e.g. `rtl=0,label='Generic RTL2832U OEM'`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when a descriptor has no quoted segment
pub const UNKNOWN_LABEL: &str = "Unknown";

static LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'([a-zA-Z0-9 \-_/.,()]+)'").expect("label pattern is valid"));

/// Extract the display label from a device descriptor.
///
/// Returns the first quoted run of alphanumerics, spaces and `-_/.,()`,
/// or `"Unknown"` if there is none.
pub fn extract_label(descriptor: &str) -> String {
    LABEL_RE
        .captures(descriptor)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

/// Reduce free text to characters a label may contain, so that a descriptor
/// built as `key='text'` extracts back to it.
pub fn label_safe(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || " -_/.,()".contains(*c))
        .collect::<String>()
        .trim()
        .to_string()
}
