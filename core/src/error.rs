use std::path::PathBuf;

/// Failures reading the shared store. Never reach the widget: the reader
/// logs them and carries on with defaults.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid namespace: {0:?}")]
    InvalidNamespace(String),
    #[error("Store document is not an object: {0}")]
    NotAnObject(PathBuf),
}
