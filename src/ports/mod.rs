//! Port traits (interfaces)
//!
//! These traits define the boundaries between the reconciliation core and the
//! outside world. Adapters implement them against real hardware and storage.

pub mod audio;
pub mod registry;
pub mod settings;
pub mod view;

pub use audio::*;
pub use registry::*;
pub use settings::*;
pub use view::*;
