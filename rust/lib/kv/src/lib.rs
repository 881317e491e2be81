pub mod composite;
pub mod error;
pub mod memory;
pub mod redb_store;
pub mod traits;

pub use composite::{COMPOSITE_KEY_NAMESPACE, create_composite_key, split_composite_key};
pub use error::KVError;
pub use memory::MemoryStore;
pub use redb_store::RedbStore;
pub use traits::KVStore;
