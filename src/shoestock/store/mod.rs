//! # Storage Layer
//!
//! [`RecordStore`] is the in-memory working set of shoes. It owns every record
//! and mediates all reads and writes to a backing [`Resource`].
//!
//! ## Implementations
//!
//! - [`fs::FileResource`]: Production storage, a single delimited text file
//!   (see [`crate::codec`] for the format).
//!
//! - [`memory::InMemoryResource`]: In-memory storage for testing
//!   - No filesystem access
//!   - Can simulate write failures
//!
//! ## Lifecycle
//!
//! A store starts empty, is populated by [`RecordStore::load`] and grows through
//! [`RecordStore::append`]. Only [`RecordStore::restock`] and an explicit
//! [`RecordStore::save`] write back to the resource. Saving always rewrites the
//! whole resource.

use crate::error::Result;

pub mod fs;
pub mod memory;
mod record_store;

pub use record_store::{LoadReport, RecordStore, RecordValue};

/// Raw access to the text that persists the store.
pub trait Resource {
    /// Read the whole resource.
    ///
    /// Returns `StockError::ResourceNotFound` when it does not exist.
    fn read(&self) -> Result<String>;

    /// Replace the whole resource with `contents`.
    fn write(&mut self, contents: &str) -> Result<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}
