use crate::error::{LibraryError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for libtrack, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Name of the data file inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Seed the demo catalog when no data exists yet
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_seed_demo() -> bool {
    true
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed_demo: default_seed_demo(),
        }
    }
}

/// Keys accepted by `config get/set`.
pub const KEYS: [&str; 2] = ["data-file", "seed-demo"];

impl LibraryConfig {
    /// Read `config.json` from `data_dir`. A missing file means defaults.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let path = data_dir.as_ref().join(CONFIG_FILENAME);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(LibraryError::Io(e)),
        };
        serde_json::from_str(&content)
            .map_err(|e| LibraryError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Like [`LibraryConfig::load`], but an unreadable file yields the defaults
    /// together with the error that was ignored.
    pub fn load_or_default<P: AsRef<Path>>(data_dir: P) -> (Self, Option<LibraryError>) {
        match Self::load(data_dir) {
            Ok(config) => (config, None),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable config");
                (Self::default(), Some(e))
            }
        }
    }

    /// Write `config.json` into `data_dir`, creating the directory if needed.
    pub fn save<P: AsRef<Path>>(&self, data_dir: P) -> Result<()> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(data_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self.data_file.clone()),
            "seed-demo" => Ok(self.seed_demo.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let name = value.trim();
                if name.is_empty() || name.contains(['/', '\\']) {
                    return Err(LibraryError::Config(format!(
                        "data-file must be a plain file name, got '{}'",
                        value
                    )));
                }
                self.data_file = name.to_string();
            }
            "seed-demo" => {
                self.seed_demo = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => {
                        return Err(LibraryError::Config(format!(
                            "seed-demo expects true or false, got '{}'",
                            value
                        )))
                    }
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> LibraryError {
    LibraryError::Config(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        KEYS.join(", ")
    ))
}
