//! Core domain types
//!
//! Pure types with no I/O dependencies. These describe devices, the saved
//! configuration snapshot and the selection state of a configuration session.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
