//! Sample rate choices for an input device
//!
//! Querying the driver for its supported rates is not reliable for every
//! device (opening an RTL source just to ask can crash the driver), so the
//! choices come from the saved configuration or from the descriptor itself.

/// Rate offered for FUNcube Dongle descriptors
pub const FCD_SAMPLE_RATE: u32 = 96_000;
/// Rate offered for RTL-SDR descriptors
pub const RTL_SAMPLE_RATE: u32 = 1_200_000;

/// Derive the sample rate labels to offer for `device`.
///
/// A positive `saved_rate` is trusted as-is. Otherwise the descriptor is
/// checked for `fcd` and then `rtl`. No device means no rates.
pub fn resolve(device: &str, saved_rate: i64) -> Vec<String> {
    if device.is_empty() {
        return Vec::new();
    }

    if saved_rate > 0 {
        vec![saved_rate.to_string()]
    } else if device.contains("fcd") {
        vec![FCD_SAMPLE_RATE.to_string()]
    } else if device.contains("rtl") {
        vec![RTL_SAMPLE_RATE.to_string()]
    } else {
        Vec::new()
    }
}
