//! # Storage Layer
//!
//! The repository never touches files directly. It reads and writes the whole
//! collection through the [`DataStore`] trait, as a sequence of flat
//! [`ItemRecord`]s.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file
//!   (`library_data.json` by default) holding an array of records.
//! - [`memory::InMemoryStore`]: In-memory storage for testing. Can be told to
//!   report corrupt data or to fail writes.
//!
//! ## Absent vs. empty
//!
//! `read_all` returns `Ok(None)` when no data has ever been written, which is
//! different from `Ok(Some(vec![]))` (a library that was saved empty). The
//! repository seeds the demo catalog only in the first case.

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod record;

pub use record::ItemRecord;

/// Abstract interface for item storage.
pub trait DataStore {
    /// Read every record, in stored order.
    ///
    /// Returns `Ok(None)` if no data is present, and `CorruptData` if the
    /// stored content cannot be parsed.
    fn read_all(&self) -> Result<Option<Vec<ItemRecord>>>;

    /// Replace the stored content with `records`.
    fn write_all(&mut self, records: &[ItemRecord]) -> Result<()>;

    /// Where the data lives, for messages and logs.
    fn location(&self) -> String;
}
