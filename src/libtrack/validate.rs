//! # Input validation
//!
//! Helpers that turn raw, user-typed text into the typed values an [`Item`]
//! is built from. Every failure is an [`LibraryError::InvalidInput`], which
//! the UI treats as "ask again" rather than as a failed operation.

use crate::error::{LibraryError, Result};
use crate::model::{Item, ItemKind};
use crate::repository::Library;
use crate::store::DataStore;
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trimmed text, rejecting empty or whitespace-only input.
pub fn non_empty(field: &'static str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(LibraryError::invalid(field, "cannot be empty"));
    }
    Ok(value.to_string())
}

/// A whole number greater than zero.
pub fn positive_int(field: &'static str, raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .and_then(|n| positive(field, n).ok())
        .ok_or_else(|| {
            LibraryError::invalid(
                field,
                format!("'{}' is not a positive whole number", raw.trim()),
            )
        })
}

/// Rejects zero for counts that are already numeric (e.g. read from storage).
pub fn positive(field: &'static str, n: u32) -> Result<u32> {
    if n == 0 {
        return Err(LibraryError::invalid(field, "must be greater than zero"));
    }
    Ok(n)
}

/// A calendar date written as `YYYY-MM-DD`.
pub fn iso_date(field: &'static str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        LibraryError::invalid(
            field,
            format!("'{}' is not a date in YYYY-MM-DD format", raw.trim()),
        )
    })
}

/// An id that is non-empty and not yet used in `library`.
///
/// Reported as invalid input so the caller can ask again, unlike the
/// repository's own duplicate check which rejects the whole add.
pub fn new_item_id<S: DataStore>(library: &Library<S>, raw: &str) -> Result<String> {
    let id = non_empty("itemId", raw)?;
    if library.contains_id(&id) {
        return Err(LibraryError::invalid(
            "itemId",
            format!("{} is already in use", id),
        ));
    }
    Ok(id)
}

/// Optional text: blank means absent.
pub fn optional(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Raw, unvalidated fields for a new item, as typed by the user.
#[derive(Debug, Clone)]
pub enum ItemDraft {
    Book {
        title: String,
        item_id: String,
        author: Option<String>,
        num_pages: String,
        genre: String,
    },
    Dvd {
        title: String,
        item_id: String,
        director: String,
        duration: String,
    },
    Magazine {
        title: String,
        item_id: String,
        issue_number: String,
        publication_date: String,
    },
}

impl ItemDraft {
    /// Validate every field and build the item. Stops at the first bad field.
    pub fn validate<S: DataStore>(&self, library: &Library<S>) -> Result<Item> {
        match self {
            ItemDraft::Book {
                title,
                item_id,
                author,
                num_pages,
                genre,
            } => {
                let title = non_empty("title", title)?;
                let item_id = new_item_id(library, item_id)?;
                let kind = ItemKind::Book {
                    author: optional(author.as_deref()),
                    num_pages: positive_int("numPages", num_pages)?,
                    genre: non_empty("genre", genre)?,
                };
                Ok(Item::new(title, item_id, kind))
            }
            ItemDraft::Dvd {
                title,
                item_id,
                director,
                duration,
            } => {
                let title = non_empty("title", title)?;
                let item_id = new_item_id(library, item_id)?;
                let kind = ItemKind::Dvd {
                    director: non_empty("director", director)?,
                    duration: positive_int("duration", duration)?,
                };
                Ok(Item::new(title, item_id, kind))
            }
            ItemDraft::Magazine {
                title,
                item_id,
                issue_number,
                publication_date,
            } => {
                let title = non_empty("title", title)?;
                let item_id = new_item_id(library, item_id)?;
                let kind = ItemKind::Magazine {
                    issue_number: positive_int("issueNumber", issue_number)?,
                    publication_date: iso_date("publicationDate", publication_date)?,
                };
                Ok(Item::new(title, item_id, kind))
            }
        }
    }
}
