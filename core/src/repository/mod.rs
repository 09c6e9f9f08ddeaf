pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use file::FileSharedStore;
pub use memory::MemorySharedStore;
pub use traits::{SharedStore, KEY_ELAPSED_TEXT, KEY_IS_RUNNING, KEY_MONTHLY_STATS};
