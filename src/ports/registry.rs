//! Hardware device registry port

use crate::domain::IoConfigResult;

/// Trait for a source of SDR hardware descriptors.
///
/// Each descriptor is an opaque string such as `rtl=0,label='Generic RTL2832U'`.
/// The order returned is significant: it defines the index space of the
/// presented input list.
pub trait DeviceRegistry {
    fn find(&self) -> IoConfigResult<Vec<String>>;
}
