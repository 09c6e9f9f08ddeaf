pub mod decoder;
pub mod reader;
