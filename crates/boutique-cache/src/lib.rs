//! Type-safe local Key-Value storage for Boutique.
//!
//! Provides a small, ergonomic API for keeping serialized state in a local
//! store, the way a browser page keeps state in `localStorage`:
//!
//! - [`KvStore`]: raw byte-oriented backend trait
//! - [`MemoryStore`]: in-process backend for tests and ephemeral sessions
//! - [`FileStore`]: durable backend, one file per key
//! - [`Cache`]: JSON encode/decode on top of any backend
//!
//! # Example
//!
//! ```rust,ignore
//! use boutique_cache::{Cache, FileStore};
//!
//! let mut cache = Cache::new(FileStore::open(".boutique")?);
//!
//! // Store a value
//! cache.set("cart", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<Item>> = cache.get("cart")?;
//!
//! // Delete a value
//! cache.delete("cart")?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KvStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
