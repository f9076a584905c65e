//! Integration tests: configuration session against port implementations
//!
//! These tests drive the full path settings → enumerator → reconciler → save
//! without real hardware. Two kinds of collaborators are exercised:
//!
//! - local `FakeAudio` / `MockRegistry` standing in for the audio subsystem
//!   and the SDR device registry
//! - `MemorySettingsStore` and `JsonSettingsStore` (on a temp dir) as the
//!   settings store
//!
//! Run with: cargo test --test ioconfig_session

use sdrconf_lib::adapters::fcd_registry::FcdRegistry;
use sdrconf_lib::adapters::mock_registry::MockRegistry;
use sdrconf_lib::adapters::registry_chain::RegistryChain;
use sdrconf_lib::adapters::settings_store::{JsonSettingsStore, MemorySettingsStore};
use sdrconf_lib::domain::{
    AudioDeviceInfo, InputSelection, IoConfigError, IoConfigResult, KEY_INPUT_DEVICE,
    KEY_INPUT_SAMPLE_RATE, KEY_OUTPUT_DEVICE,
};
use sdrconf_lib::ioconfig::{ConfigReconciler, DeviceEnumerator};
use sdrconf_lib::ports::{AudioSubsystem, SettingsStore};

// ---------------------------------------------------------------------------
// Local FakeAudio — a fixed audio subsystem, optionally failing.
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct FakeAudio {
    inputs: Vec<AudioDeviceInfo>,
    outputs: Vec<AudioDeviceInfo>,
    broken: bool,
}

impl FakeAudio {
    fn new(inputs: &[(&str, &str)], outputs: &[(&str, &str)]) -> Self {
        Self {
            inputs: infos(inputs),
            outputs: infos(outputs),
            broken: false,
        }
    }

    fn broken() -> Self {
        Self {
            inputs: Vec::new(),
            outputs: Vec::new(),
            broken: true,
        }
    }
}

impl AudioSubsystem for FakeAudio {
    fn input_devices(&self) -> IoConfigResult<Vec<AudioDeviceInfo>> {
        if self.broken {
            return Err(IoConfigError::Audio("sound server unavailable".into()));
        }
        Ok(self.inputs.clone())
    }

    fn output_devices(&self) -> IoConfigResult<Vec<AudioDeviceInfo>> {
        if self.broken {
            return Err(IoConfigError::Audio("sound server unavailable".into()));
        }
        Ok(self.outputs.clone())
    }
}

fn infos(devices: &[(&str, &str)]) -> Vec<AudioDeviceInfo> {
    devices
        .iter()
        .map(|(name, description)| AudioDeviceInfo {
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn enumerator(inputs: &[&str], audio: Option<FakeAudio>) -> DeviceEnumerator {
    let registry = MockRegistry::with_devices(inputs.iter().map(|d| d.to_string()).collect());
    DeviceEnumerator::new(
        Box::new(registry),
        audio.map(|a| Box::new(a) as Box<dyn AudioSubsystem>),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Saved rtl descriptor is found; rate comes from the descriptor heuristic.
#[test]
fn saved_rtl_input_is_selected_with_rtl_rate() {
    let store = MemorySettingsStore::new().with_string(KEY_INPUT_DEVICE, "rtl=0,driver=rtlsdr");
    let devices = enumerator(&["rtl=0,driver=rtlsdr", "fcd=0"], None);

    let session = ConfigReconciler::load_from(&store, &devices);

    assert_eq!(session.state().input, InputSelection::Device { index: 0 });
    assert_eq!(session.state().sample_rates, vec!["1200000"]);
}

/// Empty saved output → default slot; saving writes nothing.
#[test]
fn default_output_is_not_persisted() {
    let mut store = MemorySettingsStore::new().with_string(KEY_OUTPUT_DEVICE, "");
    let devices = enumerator(&[], Some(FakeAudio::new(&[], &[("hw:0", "Built-in")])));

    let session = ConfigReconciler::load_from(&store, &devices);
    assert_eq!(session.state().output_index, 0);

    assert_eq!(session.save(&mut store).unwrap(), None);
    assert_eq!(store.get_string(KEY_OUTPUT_DEVICE).as_deref(), Some(""));
}

/// Output chosen at index i is written as E[i-1].name and reloads to i.
#[test]
fn output_round_trips_through_json_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("profile.json");
    let audio = FakeAudio::new(&[], &[("hw:0", "Built-in"), ("hw:1", "USB Audio CODEC")]);

    let mut store = JsonSettingsStore::open(&path).unwrap();
    let mut session = ConfigReconciler::load_from(&store, &enumerator(&[], Some(audio.clone())));
    session.output_changed(2).unwrap();
    assert_eq!(session.save(&mut store).unwrap().as_deref(), Some("hw:1"));

    let reopened = JsonSettingsStore::open(&path).unwrap();
    let reloaded = ConfigReconciler::load_from(&reopened, &enumerator(&[], Some(audio)));
    assert_eq!(reloaded.state().output_index, 2);
    assert_eq!(reloaded.output_choices()[2], "USB Audio CODEC");
}

/// Two loads with identical inputs give identical sessions.
#[test]
fn load_is_idempotent() {
    let store = MemorySettingsStore::new()
        .with_string(KEY_INPUT_DEVICE, "airspy=0")
        .with_int(KEY_INPUT_SAMPLE_RATE, 2_500_000)
        .with_string(KEY_OUTPUT_DEVICE, "hw:1");
    let audio = FakeAudio::new(&[], &[("hw:0", "Built-in"), ("hw:1", "USB")]);

    let a = ConfigReconciler::load_from(&store, &enumerator(&["rtl=0"], Some(audio.clone())));
    let b = ConfigReconciler::load_from(&store, &enumerator(&["rtl=0"], Some(audio)));

    assert_eq!(a, b);
    assert_eq!(
        a.state().input,
        InputSelection::Manual {
            index: 1,
            raw_text: "airspy=0".into()
        }
    );
    assert_eq!(a.state().sample_rates, vec!["2500000"]);
}

/// A disappeared output falls back to default; no audio behaves like no outputs.
#[test]
fn missing_audio_subsystem_leaves_only_default() {
    let store = MemorySettingsStore::new().with_string(KEY_OUTPUT_DEVICE, "hw:1");

    let absent = ConfigReconciler::load_from(&store, &enumerator(&[], None));
    let broken = ConfigReconciler::load_from(&store, &enumerator(&[], Some(FakeAudio::broken())));
    let empty =
        ConfigReconciler::load_from(&store, &enumerator(&[], Some(FakeAudio::new(&[], &[]))));

    for session in [&absent, &broken, &empty] {
        assert_eq!(session.state().output_index, 0);
        assert_eq!(session.output_choices(), vec!["Default"]);
    }
    assert_eq!(absent, empty);
}

/// Walking through the input list re-derives rates and ignores the saved rate.
#[test]
fn switching_inputs_recomputes_rates() {
    let store = MemorySettingsStore::new()
        .with_string(KEY_INPUT_DEVICE, "rtl=0")
        .with_int(KEY_INPUT_SAMPLE_RATE, 2_048_000);
    let mut session = ConfigReconciler::load_from(&store, &enumerator(&["rtl=0", "fcd=0"], None));
    assert_eq!(session.state().sample_rates, vec!["2048000"]);

    session.input_changed(0).unwrap();
    assert_eq!(session.state().sample_rates, vec!["1200000"]);

    session.input_changed(1).unwrap();
    assert_eq!(session.descriptor(), "fcd=0");
    assert_eq!(session.state().sample_rates, vec!["96000"]);

    session.input_changed(2).unwrap();
    assert!(session.state().input.is_manual());
    assert!(session.state().sample_rates.is_empty());

    session.set_manual_descriptor("rtl_tcp=192.168.1.5:1234");
    assert_eq!(session.state().sample_rates, vec!["1200000"]);

    assert!(session.input_changed(3).is_err());
}

/// Dongles found through the audio subsystem show up as labelled inputs.
#[test]
fn fcd_registry_feeds_labelled_inputs() {
    let audio = FakeAudio::new(
        &[("hw:0", "Built-in Mic"), ("hw:2", "FUNcube Dongle V2.0")],
        &[],
    );
    let registry = RegistryChain::new()
        .with(Box::new(MockRegistry::with_devices(vec![
            "rtl=0,label='Generic RTL2832U OEM'".into(),
        ])))
        .with(Box::new(FcdRegistry::new(Box::new(audio.clone()))));
    let devices = DeviceEnumerator::new(Box::new(registry), Some(Box::new(audio)));

    let store = MemorySettingsStore::new()
        .with_string(KEY_INPUT_DEVICE, "fcd=0,label='FUNcube Dongle V2.0',device=hw:2");
    let session = ConfigReconciler::load_from(&store, &devices);

    let labels: Vec<String> = session.input_choices().into_iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec!["Generic RTL2832U OEM", "FUNcube Dongle V2.0", "Other..."]
    );
    assert_eq!(session.state().input, InputSelection::Device { index: 1 });
    assert_eq!(session.state().sample_rates, vec!["96000"]);
    assert_eq!(devices.fcd_device_name().as_deref(), Some("hw:2"));
}

/// Save leaves the input descriptor untouched in the store.
#[test]
fn save_persists_output_only() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("profile.json");
    let audio = FakeAudio::new(&[], &[("hw:0", "Built-in")]);

    let mut store = JsonSettingsStore::open(&path).unwrap();
    let mut session = ConfigReconciler::load_from(&store, &enumerator(&["fcd=0"], Some(audio)));
    session.input_changed(0).unwrap();
    session.output_changed(1).unwrap();
    session.save(&mut store).unwrap();

    let reopened = JsonSettingsStore::open(&path).unwrap();
    assert_eq!(reopened.get_string(KEY_OUTPUT_DEVICE).as_deref(), Some("hw:0"));
    assert_eq!(reopened.get_string(KEY_INPUT_DEVICE), None);
}
