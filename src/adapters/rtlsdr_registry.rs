//! RTL-SDR registry using the `rtl_test` utility from librtlsdr.
//!
//! `rtl_test` prints the attached dongles to stderr before it does anything
//! else:
//!
//! ```text
//! Found 2 device(s):
//!   0:  Realtek, RTL2838UHIDIR, SN: 00000001
//!   1:  Generic, RTL2832U, SN: 77771111153705700
//! ```
//!
//! With `-t` it runs the (E4000-only) tuner range test and exits, so the
//! process never outlives the lookup.

use std::process::{Command, Stdio};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{IoConfigError, IoConfigResult};
use crate::ioconfig::label::label_safe;
use crate::ports::DeviceRegistry;

const DEFAULT_PROGRAM: &str = "rtl_test";
const DEFAULT_ARGS: &[&str] = &["-t"];

static DEVICE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+):\s+(.+?)\s*$").expect("device line pattern is valid"));

pub struct RtlSdrRegistry {
    program: String,
    args: Vec<String>,
}

impl RtlSdrRegistry {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Another `rtl_test` binary, run with `-t`.
    pub fn with_program(program: &str) -> Self {
        Self::with_command(program, DEFAULT_ARGS)
    }

    /// Any command that prints an `rtl_test` style listing on stderr.
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Default for RtlSdrRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry for RtlSdrRegistry {
    fn find(&self) -> IoConfigResult<Vec<String>> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| IoConfigError::Registry(format!("Failed to run {}: {e}", self.program)))?;

        let listing = String::from_utf8_lossy(&output.stderr);
        log::debug!("{} listing:\n{listing}", self.program);

        Ok(parse_listing(&listing)
            .into_iter()
            .map(|(index, name)| format!("rtl={index},label='{}'", rtl_label(&name)))
            .collect())
    }
}

/// Pull `(index, name)` pairs out of the `Found N device(s):` block.
pub fn parse_listing(listing: &str) -> Vec<(usize, String)> {
    let mut lines = listing.lines();
    if !lines.any(|line| line.starts_with("Found ") && line.contains("device")) {
        return Vec::new();
    }

    lines
        .take_while(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let caps = DEVICE_LINE_RE.captures(line)?;
            let index = caps[1].parse().ok()?;
            Some((index, caps[2].to_string()))
        })
        .collect()
}

/// Vendor and product without the serial number, e.g. `Realtek, RTL2838UHIDIR`
fn rtl_label(name: &str) -> String {
    let without_serial = name.split(", SN:").next().unwrap_or(name);
    label_safe(without_serial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ioconfig::extract_label;

    const TWO_DONGLES: &str = "Found 2 device(s):
  0:  Realtek, RTL2838UHIDIR, SN: 00000001
  1:  Generic, RTL2832U, SN: 77771111153705700

Using device 0: Generic RTL2832U OEM
No E4000 tuner found, aborting.
";

    #[test]
    fn parses_device_block() {
        let devices = parse_listing(TWO_DONGLES);
        assert_eq!(
            devices,
            vec![
                (0, "Realtek, RTL2838UHIDIR, SN: 00000001".to_string()),
                (1, "Generic, RTL2832U, SN: 77771111153705700".to_string()),
            ]
        );
    }

    #[test]
    fn no_devices_found() {
        assert!(parse_listing("No supported devices found.\n").is_empty());
        assert!(parse_listing("").is_empty());
    }

    #[test]
    fn ignores_lines_after_block() {
        let listing = "Found 1 device(s):\n  0:  Realtek, RTL2838UHIDIR, SN: 1\n\n  5:  stray\n";
        assert_eq!(parse_listing(listing).len(), 1);
    }

    #[test]
    fn label_drops_serial_number() {
        let label = rtl_label("Realtek, RTL2838UHIDIR, SN: 00000001");
        assert_eq!(label, "Realtek, RTL2838UHIDIR");
        assert_eq!(extract_label(&format!("rtl=0,label='{label}'")), label);
    }

    #[cfg(unix)]
    #[test]
    fn find_builds_descriptors_from_command_output() {
        let script = "echo 'Found 2 device(s):' >&2; \
            echo '  0:  Realtek, RTL2838UHIDIR, SN: 00000001' >&2; \
            echo '  1:  Generic, RTL2832U, SN: 77771111153705700' >&2; \
            echo '' >&2; echo 'No E4000 tuner found, aborting.' >&2";
        let registry = RtlSdrRegistry::with_command("sh", &["-c", script]);

        let found = registry.find().unwrap();
        assert_eq!(
            found,
            vec![
                "rtl=0,label='Realtek, RTL2838UHIDIR'".to_string(),
                "rtl=1,label='Generic, RTL2832U'".to_string(),
            ]
        );
        assert_eq!(extract_label(&found[1]), "Generic, RTL2832U");
    }

    #[cfg(unix)]
    #[test]
    fn find_without_dongles_is_empty() {
        let registry =
            RtlSdrRegistry::with_command("sh", &["-c", "echo 'No supported devices found.' >&2"]);
        assert_eq!(registry.find().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn missing_program_is_an_error() {
        let registry = RtlSdrRegistry::with_program("sdrconf-no-such-rtl-test-binary");
        assert!(matches!(registry.find(), Err(IoConfigError::Registry(_))));
    }
}
