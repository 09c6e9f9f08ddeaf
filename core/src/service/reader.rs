use log::warn;
use serde_json::{Map, Value};

use crate::model::entry::default_elapsed_text;
use crate::repository::{SharedStore, KEY_ELAPSED_TEXT, KEY_IS_RUNNING, KEY_MONTHLY_STATS};

/// The three values the main app publishes for the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedState {
    pub stats_json: String,
    pub is_running: bool,
    pub elapsed_text: String,
}

pub struct SharedStateReader<S: SharedStore> {
    store: S,
}

impl<S: SharedStore> SharedStateReader<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Never fails: anything missing or unreadable takes its default. The
    /// namespace is read once, so all three values come from the same write.
    pub fn read(&self, namespace: &str) -> SharedState {
        let values = self.load(namespace);

        let stats_json = values
            .get(KEY_MONTHLY_STATS)
            .and_then(value_as_string)
            .unwrap_or_default();
        let is_running = values
            .get(KEY_IS_RUNNING)
            .and_then(value_as_bool)
            .unwrap_or(false);
        let elapsed_text = values
            .get(KEY_ELAPSED_TEXT)
            .and_then(value_as_string)
            .unwrap_or_else(|| default_elapsed_text(is_running).to_string());

        SharedState {
            stats_json,
            is_running,
            elapsed_text,
        }
    }

    fn load(&self, namespace: &str) -> Map<String, Value> {
        match self.store.get_all(namespace) {
            Ok(values) => values,
            Err(e) => {
                warn!("reading {}: {}", namespace, e);
                Map::new()
            }
        }
    }
}

/// Strings as-is, numbers as their decimal text.
fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Booleans, non-zero numbers, and "true"/"yes"/"1" strings.
fn value_as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim().to_lowercase();
            Some(matches!(s.as_str(), "true" | "yes" | "1"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::model::entry::{LOADING_LABEL, PAUSED_LABEL};
    use crate::repository::{FileSharedStore, MemorySharedStore};
    use serde_json::json;
    use std::cell::Cell;

    const NS: &str = "group.com.bee1an.easy";

    struct BrokenStore;

    impl SharedStore for BrokenStore {
        fn get_all(&self, _namespace: &str) -> Result<Map<String, Value>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk on fire")))
        }
    }

    /// Serves a different write on every call.
    struct ChangingStore {
        reads: Cell<usize>,
    }

    impl SharedStore for ChangingStore {
        fn get_all(&self, _namespace: &str) -> Result<Map<String, Value>, StoreError> {
            let n = self.reads.get();
            self.reads.set(n + 1);
            let mut values = Map::new();
            values.insert(KEY_IS_RUNNING.to_string(), json!(n % 2 == 0));
            values.insert(KEY_ELAPSED_TEXT.to_string(), json!(format!("write {}", n)));
            Ok(values)
        }
    }

    #[test]
    fn test_empty_store_gives_defaults() {
        let reader = SharedStateReader::new(MemorySharedStore::new());
        let state = reader.read(NS);

        assert_eq!(state.stats_json, "");
        assert!(!state.is_running);
        assert_eq!(state.elapsed_text, PAUSED_LABEL);
    }

    #[test]
    fn test_running_without_elapsed_text_is_loading() {
        let store = MemorySharedStore::new().with(NS, KEY_IS_RUNNING, json!(true));
        let state = SharedStateReader::new(store).read(NS);

        assert!(state.is_running);
        assert_eq!(state.elapsed_text, LOADING_LABEL);
    }

    #[test]
    fn test_values_are_read() {
        let store = MemorySharedStore::new()
            .with(NS, KEY_MONTHLY_STATS, json!(r#"{"month":1}"#))
            .with(NS, KEY_IS_RUNNING, json!(true))
            .with(NS, KEY_ELAPSED_TEXT, json!("12:34"));
        let state = SharedStateReader::new(store).read(NS);

        assert_eq!(state.stats_json, r#"{"month":1}"#);
        assert!(state.is_running);
        assert_eq!(state.elapsed_text, "12:34");
    }

    #[test]
    fn test_other_namespace_is_not_visible() {
        let store = MemorySharedStore::new().with("group.other", KEY_IS_RUNNING, json!(true));
        let state = SharedStateReader::new(store).read(NS);

        assert!(!state.is_running);
    }

    #[test]
    fn test_store_errors_are_absorbed() {
        let state = SharedStateReader::new(BrokenStore).read(NS);

        assert_eq!(state.stats_json, "");
        assert!(!state.is_running);
        assert_eq!(state.elapsed_text, PAUSED_LABEL);
    }

    #[test]
    fn test_values_come_from_one_read() {
        let store = ChangingStore { reads: Cell::new(0) };
        let reader = SharedStateReader::new(&store);

        let state = reader.read(NS);
        assert!(state.is_running);
        assert_eq!(state.elapsed_text, "write 0");
        assert_eq!(store.reads.get(), 1);

        let state = reader.read(NS);
        assert!(!state.is_running);
        assert_eq!(state.elapsed_text, "write 1");
        assert_eq!(store.reads.get(), 2);
    }

    #[test]
    fn test_invalid_namespace_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let state = SharedStateReader::new(FileSharedStore::new(dir.path())).read("../escape");

        assert!(!state.is_running);
        assert_eq!(state.elapsed_text, PAUSED_LABEL);
    }

    #[test]
    fn test_value_coercion() {
        assert_eq!(value_as_bool(&json!(1)), Some(true));
        assert_eq!(value_as_bool(&json!(0)), Some(false));
        assert_eq!(value_as_bool(&json!("YES")), Some(true));
        assert_eq!(value_as_bool(&json!("nope")), Some(false));
        assert_eq!(value_as_bool(&json!(null)), None);
        assert_eq!(value_as_string(&json!(42)), Some("42".to_string()));
        assert_eq!(value_as_string(&json!(["a"])), None);
    }
}
