pub mod entry;
pub mod grid;
pub mod stats;
