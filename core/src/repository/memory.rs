use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::repository::traits::SharedStore;

/// Store held in memory, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySharedStore {
    namespaces: HashMap<String, Map<String, Value>>,
}

impl MemorySharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, namespace: &str, key: &str, value: Value) {
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    pub fn with(mut self, namespace: &str, key: &str, value: Value) -> Self {
        self.set(namespace, key, value);
        self
    }
}

impl SharedStore for MemorySharedStore {
    fn get_all(&self, namespace: &str) -> Result<Map<String, Value>, StoreError> {
        Ok(self.namespaces.get(namespace).cloned().unwrap_or_default())
    }
}
