pub mod memory;

pub use memory::InMemoryLinkStore;
pub use shortlink_core::store::Result;
pub use shortlink_core::{Link, LinkStore, StorageError};
