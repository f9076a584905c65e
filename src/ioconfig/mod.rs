//! Device reconciliation core
//!
//! Pure logic, no I/O of its own. Everything external comes in through the
//! traits in `ports`.
//!
//! - `label` - display label from a device descriptor
//! - `enumerate` - input/output device lists from the registry and audio ports
//! - `matcher` - saved setting -> selection index, with fallbacks
//! - `sample_rate` - sample rate choices for a descriptor
//! - `reconciler` - the load / edit / save session tying it together

pub mod enumerate;
pub mod label;
pub mod matcher;
pub mod reconciler;
pub mod sample_rate;

pub use enumerate::DeviceEnumerator;
pub use label::extract_label;
pub use matcher::{match_input, match_output};
pub use reconciler::ConfigReconciler;
