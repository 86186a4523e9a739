//! Settings store adapters
//!
//! The trait-based abstraction over the backing configuration store and
//! its implementations.

pub mod factory;
pub mod json_file;
pub mod memory;
pub mod traits;

pub use factory::create_store;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::SettingsStore;
