//! Command-line driver
//!
//! A text rendition of the device configuration dialog: load the saved
//! settings against the devices present now, optionally apply the user's
//! choices, save, and print the result.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::cpal_audio::CpalAudio;
use crate::adapters::fcd_registry::FcdRegistry;
use crate::adapters::mock_registry::MockRegistry;
use crate::adapters::registry_chain::RegistryChain;
use crate::adapters::rtlsdr_registry::RtlSdrRegistry;
use crate::adapters::settings_store::{JsonSettingsStore, DEFAULT_PROFILE};
use crate::domain::{
    DeviceEntry, IoConfigError, IoConfigResult, SavedIoConfig, DEFAULT_OUTPUT_LABEL,
};
use crate::ioconfig::{ConfigReconciler, DeviceEnumerator};
use crate::ports::{DeviceListView, DeviceRegistry};

#[derive(Parser, Debug)]
#[command(name = "sdrconf", version, about = "Select and persist SDR input/output devices")]
pub struct Cli {
    /// Settings profile in the platform config directory
    #[arg(long, default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Use this settings file instead of a profile
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Use canned devices instead of probing hardware (same as SDRCONF_MOCK=1)
    #[arg(long)]
    pub mock: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the input and output devices present now
    Devices,
    /// Show the saved configuration reconciled against present devices
    Show {
        /// Print the selection state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change the selection and save it
    Select {
        /// Input slot to select (the last slot is "Other...")
        #[arg(long, conflicts_with = "manual")]
        input: Option<usize>,
        /// Free-form input descriptor
        #[arg(long)]
        manual: Option<String>,
        /// Output slot to select (0 is the default output)
        #[arg(long)]
        output: Option<usize>,
    },
    /// Print the audio device name of an attached FUNcube Dongle
    Fcd,
}

/// Collects what a dialog would display, one line per item.
#[derive(Debug, Default)]
pub struct TextView {
    lines: Vec<String>,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl DeviceListView for TextView {
    fn show_input_devices(&mut self, choices: &[DeviceEntry], selected: usize) {
        self.lines.push("Input devices:".to_string());
        for entry in choices {
            let marker = if entry.position == selected { '*' } else { ' ' };
            self.lines
                .push(format!(" {marker} {:>2}: {}", entry.position, entry.label));
        }
    }

    fn show_input_descriptor(&mut self, descriptor: &str) {
        self.lines.push(format!("Input descriptor: {descriptor}"));
    }

    fn show_output_devices(&mut self, choices: &[String], selected: usize) {
        self.lines.push("Output devices:".to_string());
        for (i, label) in choices.iter().enumerate() {
            let marker = if i == selected { '*' } else { ' ' };
            self.lines.push(format!(" {marker} {i:>2}: {label}"));
        }
    }

    fn show_sample_rates(&mut self, rates: &[String], selected: Option<usize>) {
        if rates.is_empty() {
            self.lines.push("Sample rates: (none)".to_string());
            return;
        }
        self.lines.push("Sample rates:".to_string());
        for (i, rate) in rates.iter().enumerate() {
            let marker = if Some(i) == selected { '*' } else { ' ' };
            self.lines.push(format!(" {marker} {rate}"));
        }
    }
}

/// Registry and audio subsystem for this machine, or the mock registry.
pub fn build_enumerator(mock: bool) -> DeviceEnumerator {
    let registry: Box<dyn DeviceRegistry> = if mock || MockRegistry::requested() {
        Box::new(MockRegistry::new())
    } else {
        Box::new(
            RegistryChain::new()
                .with(Box::new(RtlSdrRegistry::new()))
                .with(Box::new(FcdRegistry::new(Box::new(CpalAudio::new())))),
        )
    };
    DeviceEnumerator::new(registry, Some(Box::new(CpalAudio::new())))
}

fn open_store(cli: &Cli) -> IoConfigResult<JsonSettingsStore> {
    match &cli.settings {
        Some(path) => JsonSettingsStore::open(path),
        None => JsonSettingsStore::open_profile(&cli.profile),
    }
}

pub fn run(cli: Cli) -> IoConfigResult<()> {
    let enumerator = build_enumerator(cli.mock);

    match &cli.command {
        Command::Devices => {
            let session = ConfigReconciler::load(
                &SavedIoConfig::default(),
                enumerator.list_input_devices(),
                enumerator.list_output_devices(),
            );
            for line in device_lines(&session) {
                println!("{line}");
            }
        }
        Command::Show { json } => {
            let store = open_store(&cli)?;
            let session = ConfigReconciler::load_from(&store, &enumerator);
            if *json {
                let text = serde_json::to_string_pretty(session.state())
                    .map_err(|e| IoConfigError::Settings(format!("Serialization error: {e}")))?;
                println!("{text}");
            } else {
                print_session(&session);
            }
        }
        Command::Select {
            input,
            manual,
            output,
        } => {
            let mut store = open_store(&cli)?;
            let mut session = ConfigReconciler::load_from(&store, &enumerator);
            if let Some(index) = input {
                session.input_changed(*index)?;
            }
            if let Some(text) = manual {
                session.set_manual_descriptor(text);
            }
            if let Some(index) = output {
                session.output_changed(*index)?;
            }
            match session.save(&mut store)? {
                Some(name) => {
                    println!("Saved output device '{name}' to {}", store.path().display())
                }
                None => println!("Using the default output device"),
            }
            print_session(&session);
        }
        Command::Fcd => match enumerator.fcd_device_name() {
            Some(name) => println!("{name}"),
            None => println!("No FUNcube Dongle found"),
        },
    }

    Ok(())
}

/// Device listing numbered with the slots `select --input/--output` accept.
pub fn device_lines(session: &ConfigReconciler) -> Vec<String> {
    let mut lines = vec!["Input devices:".to_string()];
    for entry in session.input_choices() {
        if entry.position == session.inputs().len() {
            lines.push(format!("  {:>2}: {}  (use --manual)", entry.position, entry.label));
        } else {
            lines.push(format!("  {:>2}: {}  [{}]", entry.position, entry.label, entry.descriptor));
        }
    }
    lines.push("Output devices:".to_string());
    lines.push(format!("  {:>2}: {DEFAULT_OUTPUT_LABEL}", 0));
    for (i, output) in session.outputs().iter().enumerate() {
        lines.push(format!("  {:>2}: {}  [{}]", i + 1, output.description, output.name));
    }
    lines
}

fn print_session(session: &ConfigReconciler) {
    let mut view = TextView::new();
    session.present(&mut view);
    println!("{}", view.render());
}
