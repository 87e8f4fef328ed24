//! Key-value storage adapters.

mod file_store;
mod in_memory_store;

pub use file_store::FileStore;
pub use in_memory_store::InMemoryStore;
