//! # Repository
//!
//! [`Library`] is the single in-memory owner of the catalog during a run. It
//! keeps items in insertion order, enforces id uniqueness, and writes the
//! whole collection back through its [`DataStore`] after every successful
//! mutation.
//!
//! ## Persistence failures
//!
//! Mutations are applied in memory first and then saved. If the save fails the
//! change is kept and the storage error is returned; memory and disk stay out
//! of sync until the next successful save. Callers can tell these failures
//! apart with [`LibraryError::is_storage`].
//!
//! ## Loading
//!
//! [`Library::load`] never fails. Absent data seeds the demo catalog (and saves
//! it), unreadable or corrupt data seeds it without saving. Stored records that
//! break the field rules are skipped, as are later records reusing an id; each
//! skip is listed in the [`LoadReport`].

use crate::demo;
use crate::error::{LibraryError, Result};
use crate::model::Item;
use crate::store::{DataStore, ItemRecord};
use std::collections::HashSet;

/// Where the in-memory state came from after [`Library::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Read from the store.
    Stored,
    /// No data was present; the demo catalog was seeded.
    Seeded,
    /// No data was present and seeding is disabled.
    Empty,
    /// The store could not be read; the demo catalog was seeded in its place.
    Fallback { reason: String },
}

/// Why a stored record was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// An earlier record already used the same id.
    DuplicateId,
    /// A field breaks the rules user input is held to.
    Invalid(String),
}

/// A stored record that was not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Zero-based position of the record in the stored sequence
    pub position: usize,
    pub item_id: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub origin: LoadOrigin,
    pub skipped: Vec<SkippedRecord>,
    /// Set when the freshly seeded catalog could not be written.
    pub save_error: Option<String>,
}

impl LoadReport {
    fn new(origin: LoadOrigin) -> Self {
        Self {
            origin,
            skipped: Vec::new(),
            save_error: None,
        }
    }
}

pub struct Library<S: DataStore> {
    store: S,
    items: Vec<Item>,
    seed_demo: bool,
}

impl<S: DataStore> Library<S> {
    /// An empty library. Call [`Library::load`] to read the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: Vec::new(),
            seed_demo: true,
        }
    }

    pub fn with_demo_seed(mut self, enabled: bool) -> Self {
        self.seed_demo = enabled;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.item_id() == id)
    }

    /// Replace the in-memory state with what the store holds.
    pub fn load(&mut self) -> LoadReport {
        match self.store.read_all() {
            Ok(Some(records)) => {
                let mut report = LoadReport::new(LoadOrigin::Stored);
                self.items = collect_unique(records, &mut report.skipped);
                for skipped in &report.skipped {
                    tracing::warn!(
                        item_id = %skipped.item_id,
                        position = skipped.position,
                        reason = ?skipped.reason,
                        "skipping stored record"
                    );
                }
                tracing::info!(
                    location = %self.store.location(),
                    count = self.items.len(),
                    skipped = report.skipped.len(),
                    "loaded library"
                );
                report
            }
            Ok(None) if self.seed_demo => {
                tracing::info!(location = %self.store.location(), "no library data, seeding demo catalog");
                self.items = demo::demo_items();
                let mut report = LoadReport::new(LoadOrigin::Seeded);
                if let Err(e) = self.save() {
                    tracing::warn!(error = %e, "could not save demo catalog");
                    report.save_error = Some(e.to_string());
                }
                report
            }
            Ok(None) => {
                self.items = Vec::new();
                LoadReport::new(LoadOrigin::Empty)
            }
            Err(e) => {
                tracing::error!(
                    location = %self.store.location(),
                    error = %e,
                    "could not read library data, falling back to demo catalog"
                );
                self.items = demo::demo_items();
                LoadReport::new(LoadOrigin::Fallback {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Write the full collection, in order, to the store.
    pub fn save(&mut self) -> Result<()> {
        let records: Vec<ItemRecord> = self.items.iter().map(ItemRecord::from).collect();
        self.store.write_all(&records)
    }

    /// Append a new item and persist.
    pub fn add(&mut self, item: Item) -> Result<&Item> {
        if self.contains_id(item.item_id()) {
            return Err(LibraryError::DuplicateId(item.item_id().to_string()));
        }
        tracing::debug!(item_id = %item.item_id(), "adding item");
        self.items.push(item);
        self.save()?;
        Ok(&self.items[self.items.len() - 1])
    }

    /// Exact, case-sensitive lookup.
    pub fn find_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.item_id() == id)
    }

    pub fn get(&self, id: &str) -> Result<&Item> {
        self.find_by_id(id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))
    }

    /// Case-insensitive substring match on title or item id.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Item> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&query)
                    || item.item_id().to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn list_all(&self) -> Vec<&Item> {
        self.items.iter().collect()
    }

    pub fn list_available(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_available()).collect()
    }

    pub fn list_borrowed(&self) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| !item.is_available())
            .collect()
    }

    pub fn borrow(&mut self, id: &str) -> Result<&Item> {
        self.mutate(id, Item::borrow)
    }

    pub fn return_item(&mut self, id: &str) -> Result<&Item> {
        self.mutate(id, Item::return_item)
    }

    fn mutate(&mut self, id: &str, op: fn(&mut Item) -> Result<()>) -> Result<&Item> {
        let pos = self
            .items
            .iter()
            .position(|item| item.item_id() == id)
            .ok_or_else(|| LibraryError::NotFound(id.to_string()))?;
        op(&mut self.items[pos])?;
        tracing::debug!(item_id = %id, available = self.items[pos].is_available(), "item updated");
        self.save()?;
        Ok(&self.items[pos])
    }
}

/// Keep the first valid record for each id, recording the rest in `skipped`.
///
/// An invalid record does not claim its id, so a later valid record with the
/// same id is still loaded.
fn collect_unique(records: Vec<ItemRecord>, skipped: &mut Vec<SkippedRecord>) -> Vec<Item> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        let item_id = record.item_id().to_string();
        let reason = match Item::try_from(record) {
            Ok(item) if seen.insert(item.item_id().to_string()) => {
                items.push(item);
                continue;
            }
            Ok(_) => SkipReason::DuplicateId,
            Err(e) => SkipReason::Invalid(e.to_string()),
        };
        skipped.push(SkippedRecord {
            position,
            item_id,
            reason,
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn loaded(store: InMemoryStore) -> Library<InMemoryStore> {
        let mut library = Library::new(store);
        library.load();
        library
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.item_id().to_string()).collect()
    }

    #[test]
    fn add_and_list() {
        let mut library = loaded(StoreFixture::new().store);
        library
            .add(Item::book("Dune", "B001", 412, "Sci-Fi"))
            .unwrap();

        let all = library.list_all();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_available());
        assert_eq!(library.store().write_count(), 1);
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let mut library = loaded(StoreFixture::new().store);
        library
            .add(Item::book("Dune", "B001", 412, "Sci-Fi"))
            .unwrap();
        let err = library
            .add(Item::dvd("Other", "B001", "Someone", 90))
            .unwrap_err();

        assert!(matches!(err, LibraryError::DuplicateId(id) if id == "B001"));
        assert_eq!(library.len(), 1);
        assert_eq!(library.store().write_count(), 1);
    }

    #[test]
    fn ids_are_case_sensitive() {
        let mut library = loaded(StoreFixture::new().with_book("Dune", "B001").store);
        library
            .add(Item::book("Dune (lowercase)", "b001", 412, "Sci-Fi"))
            .unwrap();
        assert_eq!(library.len(), 2);
        assert!(library.find_by_id("b001").is_some());
        assert!(library.find_by_id("B002").is_none());
    }

    #[test]
    fn double_borrow() {
        let mut library = loaded(StoreFixture::new().store);
        library
            .add(Item::book("Dune", "B001", 412, "Sci-Fi"))
            .unwrap();

        library.borrow("B001").unwrap();
        let err = library.borrow("B001").unwrap_err();
        assert!(matches!(err, LibraryError::AlreadyBorrowed(_)));
        assert_eq!(ids(&library.list_borrowed()), vec!["B001"]);
        // add + first borrow only
        assert_eq!(library.store().write_count(), 2);
    }

    #[test]
    fn return_of_available_item_fails() {
        let mut library = loaded(StoreFixture::new().with_book("Dune", "B001").store);
        let err = library.return_item("B001").unwrap_err();
        assert!(matches!(err, LibraryError::NotBorrowed(_)));
        assert_eq!(library.store().write_count(), 0);
    }

    #[test]
    fn borrow_unknown_id_is_not_found() {
        let mut library = loaded(StoreFixture::new().store);
        let err = library.borrow("X999").unwrap_err();
        assert!(matches!(err, LibraryError::NotFound(id) if id == "X999"));
    }

    #[test]
    fn return_restores_availability() {
        let mut library = loaded(StoreFixture::new().with_borrowed_book("1984", "B002").store);
        let item = library.return_item("B002").unwrap();
        assert!(item.is_available());
        assert!(library.list_borrowed().is_empty());
    }

    #[test]
    fn filtered_lists_keep_insertion_order() {
        let library = loaded(
            StoreFixture::new()
                .with_book("A", "B003")
                .with_borrowed_book("B", "B001")
                .with_dvd("C", "D001")
                .with_borrowed_book("D", "B002")
                .store,
        );
        assert_eq!(
            ids(&library.list_all()),
            vec!["B003", "B001", "D001", "B002"]
        );
        assert_eq!(ids(&library.list_available()), vec!["B003", "D001"]);
        assert_eq!(ids(&library.list_borrowed()), vec!["B001", "B002"]);
    }

    #[test]
    fn search_matches_title_any_case() {
        let library = loaded(
            StoreFixture::new()
                .with_book("The Hobbit", "B001")
                .with_dvd("The Matrix", "D001")
                .with_magazine("Time", "M001")
                .store,
        );
        assert_eq!(ids(&library.search("hOBb")), vec!["B001"]);
        assert_eq!(ids(&library.search("the")), vec!["B001", "D001"]);
        assert_eq!(ids(&library.search("d00")), vec!["D001"]);
        assert!(library.search("zzz").is_empty());
    }

    #[test]
    fn blank_search_matches_nothing() {
        let library = loaded(StoreFixture::new().with_book("The Hobbit", "B001").store);
        assert!(library.search("").is_empty());
        assert!(library.search("   ").is_empty());
    }

    #[test]
    fn missing_data_seeds_and_saves_demo() {
        let mut library = Library::new(InMemoryStore::new());
        let report = library.load();

        assert_eq!(report.origin, LoadOrigin::Seeded);
        assert_eq!(library.len(), demo::demo_items().len());
        assert_eq!(library.store().write_count(), 1);
    }

    #[test]
    fn missing_data_without_seeding_starts_empty() {
        let mut library = Library::new(InMemoryStore::new()).with_demo_seed(false);
        let report = library.load();
        assert_eq!(report.origin, LoadOrigin::Empty);
        assert!(library.is_empty());
    }

    #[test]
    fn stored_empty_collection_is_not_seeded() {
        let mut library = Library::new(InMemoryStore::with_records(vec![]));
        let report = library.load();
        assert_eq!(report.origin, LoadOrigin::Stored);
        assert!(library.is_empty());
    }

    #[test]
    fn corrupt_data_falls_back_to_demo() {
        let mut library = Library::new(InMemoryStore::corrupt());
        let report = library.load();

        assert!(matches!(report.origin, LoadOrigin::Fallback { .. }));
        assert_eq!(library.list_all().len(), demo::demo_items().len());
        assert_eq!(ids(&library.list_borrowed()), demo::PRE_BORROWED.to_vec());
        assert_eq!(library.store().write_count(), 0);
    }

    #[test]
    fn duplicate_ids_on_load_keep_first() {
        let store = StoreFixture::new()
            .with_book("First", "B001")
            .with_dvd("Second", "B001")
            .with_book("Other", "B002")
            .store;
        let mut library = Library::new(store);
        let report = library.load();

        assert_eq!(
            report.skipped,
            vec![SkippedRecord {
                position: 1,
                item_id: "B001".to_string(),
                reason: SkipReason::DuplicateId,
            }]
        );
        assert_eq!(library.len(), 2);
        assert_eq!(library.find_by_id("B001").unwrap().title, "First");
    }

    #[test]
    fn invalid_records_on_load_are_skipped() {
        let records = vec![
            ItemRecord::Book {
                title: String::new(),
                item_id: String::new(),
                available: true,
                author: None,
                num_pages: 0,
                genre: String::new(),
            },
            ItemRecord::Dvd {
                title: "Inception".into(),
                item_id: "D002".into(),
                available: true,
                director: "Christopher Nolan".into(),
                duration: 0,
            },
            ItemRecord::Dvd {
                title: "Inception".into(),
                item_id: "D002".into(),
                available: false,
                director: "Christopher Nolan".into(),
                duration: 148,
            },
        ];
        let mut library = Library::new(InMemoryStore::with_records(records));
        let report = library.load();

        assert_eq!(report.origin, LoadOrigin::Stored);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].position, 0);
        assert!(matches!(report.skipped[0].reason, SkipReason::Invalid(_)));
        assert_eq!(report.skipped[1].item_id, "D002");
        assert!(matches!(
            &report.skipped[1].reason,
            SkipReason::Invalid(reason) if reason.contains("duration")
        ));
        assert_eq!(ids(&library.list_all()), vec!["D002"]);
        assert!(!library.find_by_id("D002").unwrap().is_available());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut library = loaded(StoreFixture::new().store);
        library
            .add(Item::book("Dune", "B001", 412, "Sci-Fi").with_author("Frank Herbert"))
            .unwrap();
        library
            .add(Item::dvd("Inception", "D002", "Christopher Nolan", 148))
            .unwrap();
        library.borrow("D002").unwrap();
        let before: Vec<Item> = library.list_all().into_iter().cloned().collect();

        let records = library.store().records().unwrap().to_vec();
        let reloaded = loaded(InMemoryStore::with_records(records));
        let after: Vec<Item> = reloaded.list_all().into_iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn failed_save_keeps_in_memory_change() {
        let store = StoreFixture::new()
            .with_book("Dune", "B001")
            .store
            .failing_writes();
        let mut library = loaded(store);

        let err = library.borrow("B001").unwrap_err();
        assert!(err.is_storage());
        assert!(!library.find_by_id("B001").unwrap().is_available());
    }

    #[test]
    fn seeding_save_failure_is_reported() {
        let mut library = Library::new(InMemoryStore::new().failing_writes());
        let report = library.load();
        assert_eq!(report.origin, LoadOrigin::Seeded);
        assert!(report.save_error.is_some());
        assert!(!library.is_empty());
    }
}
