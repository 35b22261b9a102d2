use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Item {0} is already borrowed")]
    AlreadyBorrowed(String),

    #[error("Item {0} is not currently borrowed")]
    NotBorrowed(String),

    #[error("An item with ID {0} already exists")]
    DuplicateId(String),

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Corrupt library data: {0}")]
    CorruptData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("The interactive menu needs a terminal; use a subcommand such as `list` instead")]
    NoTerminal,
}

impl LibraryError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        LibraryError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Errors raised by the storage collaborator rather than by the operation itself.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            LibraryError::CorruptData(_) | LibraryError::Io(_) | LibraryError::Serialization(_)
        )
    }

    /// Errors the user can fix by re-entering a value.
    pub fn is_user_error(&self) -> bool {
        matches!(self, LibraryError::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
