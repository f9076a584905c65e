//! Settings store port

use crate::domain::IoConfigResult;

/// Key-value settings store with string and integer values.
///
/// Reads never fail: a missing or mistyped key is `None`. Writes may fail
/// when the backing storage does.
pub trait SettingsStore {
    fn get_string(&self, key: &str) -> Option<String>;

    fn get_int(&self, key: &str) -> Option<i64>;

    fn set_string(&mut self, key: &str, value: &str) -> IoConfigResult<()>;
}
