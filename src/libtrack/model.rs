use crate::error::{LibraryError, Result};
use chrono::NaiveDate;

/// Kind-specific payload of an item. The set of kinds is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Book {
        author: Option<String>,
        num_pages: u32,
        genre: String,
    },
    Dvd {
        director: String,
        /// Running time in minutes
        duration: u32,
    },
    Magazine {
        issue_number: u32,
        publication_date: NaiveDate,
    },
}

/// One catalog entry.
///
/// Values are expected to be validated (see [`crate::validate`]) before an item
/// is constructed; the constructors do not check them again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    item_id: String,
    pub(crate) available: bool,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(title: String, item_id: String, kind: ItemKind) -> Self {
        Self {
            title,
            item_id,
            available: true,
            kind,
        }
    }

    pub fn book(title: &str, item_id: &str, num_pages: u32, genre: &str) -> Self {
        Self::new(
            title.to_string(),
            item_id.to_string(),
            ItemKind::Book {
                author: None,
                num_pages,
                genre: genre.to_string(),
            },
        )
    }

    pub fn dvd(title: &str, item_id: &str, director: &str, duration: u32) -> Self {
        Self::new(
            title.to_string(),
            item_id.to_string(),
            ItemKind::Dvd {
                director: director.to_string(),
                duration,
            },
        )
    }

    pub fn magazine(
        title: &str,
        item_id: &str,
        issue_number: u32,
        publication_date: NaiveDate,
    ) -> Self {
        Self::new(
            title.to_string(),
            item_id.to_string(),
            ItemKind::Magazine {
                issue_number,
                publication_date,
            },
        )
    }

    /// Sets the author of a book. Has no effect on other kinds.
    pub fn with_author(mut self, name: &str) -> Self {
        if let ItemKind::Book { author, .. } = &mut self.kind {
            *author = Some(name.to_string());
        }
        self
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ItemKind::Book { .. } => "Book",
            ItemKind::Dvd { .. } => "DVD",
            ItemKind::Magazine { .. } => "Magazine",
        }
    }

    pub fn borrow(&mut self) -> Result<()> {
        if !self.available {
            return Err(LibraryError::AlreadyBorrowed(self.item_id.clone()));
        }
        self.available = false;
        Ok(())
    }

    pub fn return_item(&mut self) -> Result<()> {
        if self.available {
            return Err(LibraryError::NotBorrowed(self.item_id.clone()));
        }
        self.available = true;
        Ok(())
    }

    /// One-line, human readable description of the item.
    pub fn describe(&self) -> String {
        match &self.kind {
            ItemKind::Book {
                author,
                num_pages,
                genre,
            } => {
                let by = author
                    .as_deref()
                    .map(|a| format!(" by {}", a))
                    .unwrap_or_default();
                format!(
                    "Book: '{}'{} | Pages: {} | Genre: {} | ID: {}",
                    self.title, by, num_pages, genre, self.item_id
                )
            }
            ItemKind::Dvd { director, duration } => format!(
                "DVD: '{}' directed by {} | Duration: {} min | ID: {}",
                self.title, director, duration, self.item_id
            ),
            ItemKind::Magazine {
                issue_number,
                publication_date,
            } => format!(
                "Magazine: '{}' | Issue: {} | Published: {} | ID: {}",
                self.title,
                issue_number,
                publication_date.format("%Y-%m-%d"),
                self.item_id
            ),
        }
    }
}
