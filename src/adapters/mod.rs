//! Adapters: implementations of the port traits
//!
//! - `cpal_audio` - audio subsystem via cpal
//! - `fcd_registry` / `rtlsdr_registry` - SDR hardware discovery
//! - `mock_registry` - canned devices for running without hardware
//! - `registry_chain` - several registries as one
//! - `settings_store` - JSON file and in-memory settings

pub mod cpal_audio;
pub mod fcd_registry;
pub mod mock_registry;
pub mod registry_chain;
pub mod rtlsdr_registry;
pub mod settings_store;
