use super::{DataStore, ItemRecord};
use crate::error::{LibraryError, Result};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "library_data.json";

pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(LibraryError::Io)?;
        }
        Ok(())
    }
}

/// Pretty JSON with a four space indent.
fn to_pretty_json(records: &[ItemRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(LibraryError::Serialization)?;
    buf.push(b'\n');
    Ok(buf)
}

impl DataStore for FileStore {
    fn read_all(&self) -> Result<Option<Vec<ItemRecord>>> {
        let path = self.data_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LibraryError::Io(e)),
        };

        let records: Vec<ItemRecord> = serde_json::from_str(&content)
            .map_err(|e| LibraryError::CorruptData(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), count = records.len(), "read library data");
        Ok(Some(records))
    }

    fn write_all(&mut self, records: &[ItemRecord]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let path = self.data_path();
        let content = to_pretty_json(records)?;
        fs::write(&path, content).map_err(LibraryError::Io)?;
        tracing::debug!(path = %path.display(), count = records.len(), "wrote library data");
        Ok(())
    }

    fn location(&self) -> String {
        self.data_path().display().to_string()
    }
}
