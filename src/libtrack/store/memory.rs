use super::{DataStore, ItemRecord};
use crate::error::{LibraryError, Result};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Option<Vec<ItemRecord>>,
    corrupt: bool,
    fail_writes: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `records`.
    pub fn with_records(records: Vec<ItemRecord>) -> Self {
        Self {
            records: Some(records),
            ..Self::default()
        }
    }

    /// A store whose content cannot be parsed.
    pub fn corrupt() -> Self {
        Self {
            corrupt: true,
            ..Self::default()
        }
    }

    /// Make every subsequent `write_all` fail with an IO error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn records(&self) -> Option<&[ItemRecord]> {
        self.records.as_deref()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl DataStore for InMemoryStore {
    fn read_all(&self) -> Result<Option<Vec<ItemRecord>>> {
        if self.corrupt {
            return Err(LibraryError::CorruptData(
                "in-memory store marked corrupt".to_string(),
            ));
        }
        Ok(self.records.clone())
    }

    fn write_all(&mut self, records: &[ItemRecord]) -> Result<()> {
        if self.fail_writes {
            return Err(LibraryError::Io(std::io::Error::other(
                "in-memory store rejects writes",
            )));
        }
        self.records = Some(records.to_vec());
        self.corrupt = false;
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Item;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// Starts from an empty, already-saved library (so loading does not seed).
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::with_records(Vec::new()),
            }
        }

        fn push(mut self, item: Item) -> Self {
            let mut records = self.store.records.take().unwrap_or_default();
            records.push(ItemRecord::from(&item));
            self.store.records = Some(records);
            self
        }

        pub fn with_book(self, title: &str, id: &str) -> Self {
            self.push(Item::book(title, id, 200, "Fiction"))
        }

        pub fn with_dvd(self, title: &str, id: &str) -> Self {
            self.push(Item::dvd(title, id, "Unknown", 90))
        }

        pub fn with_magazine(self, title: &str, id: &str) -> Self {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            self.push(Item::magazine(title, id, 1, date))
        }

        pub fn with_borrowed_book(self, title: &str, id: &str) -> Self {
            let mut item = Item::book(title, id, 200, "Fiction");
            item.borrow().unwrap();
            self.push(item)
        }
    }
}
