pub mod memory;

pub use memory::InMemoryRepository;
pub use vidcat_core::{ReadRepository, Repository, StorageError};
