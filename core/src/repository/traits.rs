use crate::error::StoreError;
use serde_json::{Map, Value};

pub const KEY_MONTHLY_STATS: &str = "monthly_stats";
pub const KEY_IS_RUNNING: &str = "is_running";
pub const KEY_ELAPSED_TEXT: &str = "elapsed_text";

/// Read-only view of the key-value store shared with the main app.
pub trait SharedStore {
    /// Every value of `namespace`, read in one go so they all come from the
    /// same write. Empty when the namespace does not exist.
    fn get_all(&self, namespace: &str) -> Result<Map<String, Value>, StoreError>;

    /// `Ok(None)` when the namespace or the key does not exist.
    fn get(&self, namespace: &str, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.get_all(namespace)?.remove(key))
    }
}

impl<S: SharedStore + ?Sized> SharedStore for &S {
    fn get_all(&self, namespace: &str) -> Result<Map<String, Value>, StoreError> {
        (**self).get_all(namespace)
    }
}
