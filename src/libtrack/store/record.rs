//! Flat, persisted shape of an [`Item`].
//!
//! A record carries a `kind` tag next to the shared and kind-specific fields:
//!
//! ```json
//! {
//!     "kind": "magazine",
//!     "title": "Time",
//!     "itemId": "M003",
//!     "available": true,
//!     "issueNumber": 5221,
//!     "publicationDate": "2023-12-25"
//! }
//! ```

use crate::error::{LibraryError, Result};
use crate::model::{Item, ItemKind};
use crate::validate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ItemRecord {
    Book {
        title: String,
        item_id: String,
        available: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
        num_pages: u32,
        genre: String,
    },
    Dvd {
        title: String,
        item_id: String,
        available: bool,
        director: String,
        duration: u32,
    },
    Magazine {
        title: String,
        item_id: String,
        available: bool,
        issue_number: u32,
        publication_date: NaiveDate,
    },
}

impl ItemRecord {
    pub fn item_id(&self) -> &str {
        match self {
            ItemRecord::Book { item_id, .. }
            | ItemRecord::Dvd { item_id, .. }
            | ItemRecord::Magazine { item_id, .. } => item_id,
        }
    }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        let title = item.title.clone();
        let item_id = item.item_id().to_string();
        let available = item.is_available();
        match &item.kind {
            ItemKind::Book {
                author,
                num_pages,
                genre,
            } => ItemRecord::Book {
                title,
                item_id,
                available,
                author: author.clone(),
                num_pages: *num_pages,
                genre: genre.clone(),
            },
            ItemKind::Dvd { director, duration } => ItemRecord::Dvd {
                title,
                item_id,
                available,
                director: director.clone(),
                duration: *duration,
            },
            ItemKind::Magazine {
                issue_number,
                publication_date,
            } => ItemRecord::Magazine {
                title,
                item_id,
                available,
                issue_number: *issue_number,
                publication_date: *publication_date,
            },
        }
    }
}

/// Rebuilds an item from stored data, applying the same field rules as
/// user input. A record that could never have been added is rejected.
impl TryFrom<ItemRecord> for Item {
    type Error = LibraryError;

    fn try_from(record: ItemRecord) -> Result<Self> {
        let (title, item_id, available, kind) = match record {
            ItemRecord::Book {
                title,
                item_id,
                available,
                author,
                num_pages,
                genre,
            } => (
                title,
                item_id,
                available,
                ItemKind::Book {
                    author: validate::optional(author.as_deref()),
                    num_pages: validate::positive("numPages", num_pages)?,
                    genre: validate::non_empty("genre", &genre)?,
                },
            ),
            ItemRecord::Dvd {
                title,
                item_id,
                available,
                director,
                duration,
            } => (
                title,
                item_id,
                available,
                ItemKind::Dvd {
                    director: validate::non_empty("director", &director)?,
                    duration: validate::positive("duration", duration)?,
                },
            ),
            ItemRecord::Magazine {
                title,
                item_id,
                available,
                issue_number,
                publication_date,
            } => (
                title,
                item_id,
                available,
                ItemKind::Magazine {
                    issue_number: validate::positive("issueNumber", issue_number)?,
                    publication_date,
                },
            ),
        };
        let title = validate::non_empty("title", &title)?;
        let item_id = validate::non_empty("itemId", &item_id)?;
        let mut item = Item::new(title, item_id, kind);
        item.available = available;
        Ok(item)
    }
}
