pub mod entry_provider;
