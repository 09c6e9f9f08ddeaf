use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::repository::traits::SharedStore;

const FILE_EXTENSION: &str = "json";

/// Shared store kept as one JSON object per namespace:
/// `<base_dir>/<namespace>.json`. Read-only; the main app owns the files.
#[derive(Clone, Debug)]
pub struct FileSharedStore {
    base_dir: PathBuf,
}

impl FileSharedStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File holding `namespace`. The namespace must stay a single file name
    /// inside `base_dir`.
    pub fn namespace_path(&self, namespace: &str) -> Result<PathBuf, StoreError> {
        let invalid = namespace.is_empty()
            || namespace == "."
            || namespace == ".."
            || namespace.contains(['/', '\\', '\0']);
        if invalid {
            return Err(StoreError::InvalidNamespace(namespace.to_string()));
        }
        Ok(self.base_dir.join(format!("{}.{}", namespace, FILE_EXTENSION)))
    }
}

impl SharedStore for FileSharedStore {
    fn get_all(&self, namespace: &str) -> Result<Map<String, Value>, StoreError> {
        let path = self.namespace_path(namespace)?;
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_reader(BufReader::new(file))? {
            Value::Object(values) => Ok(values),
            _ => Err(StoreError::NotAnObject(path)),
        }
    }
}
