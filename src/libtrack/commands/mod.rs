use crate::config::LibraryConfig;
use crate::error::{LibraryError, Result};
use crate::model::Item;
use crate::repository::{LoadOrigin, LoadReport, SkipReason};
use std::path::PathBuf;

pub mod add;
pub mod circulation;
pub mod config;
pub mod list;
pub mod search;
pub mod show;

#[derive(Debug, Clone)]
pub struct LibraryPaths {
    /// Holds the data file and `config.json`
    pub data_dir: PathBuf,
}

impl LibraryPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_file(&self, config: &LibraryConfig) -> PathBuf {
        self.data_dir.join(&config.data_file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<Item>,
    pub config: Option<LibraryConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_config(mut self, config: LibraryConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Split off a storage failure from a mutation that was already applied.
///
/// Returns `Ok(None)` on success, `Ok(Some(err))` when only the save failed,
/// and `Err` for failures that rejected the operation.
pub(crate) fn unsaved<T>(outcome: Result<T>) -> Result<Option<LibraryError>> {
    match outcome {
        Ok(_) => Ok(None),
        Err(e) if e.is_storage() => {
            tracing::warn!(error = %e, "change applied but not saved");
            Ok(Some(e))
        }
        Err(e) => Err(e),
    }
}

pub(crate) fn report_unsaved(result: &mut CmdResult, failure: Option<LibraryError>) {
    if let Some(e) = failure {
        result.add_message(CmdMessage::error(format!(
            "Changes could not be saved: {}",
            e
        )));
    }
}

pub(crate) fn cloned(items: Vec<&Item>) -> Vec<Item> {
    items.into_iter().cloned().collect()
}

/// User-facing notices for how the library was loaded. Empty for a normal load.
pub fn load_messages(report: &LoadReport) -> Vec<CmdMessage> {
    let mut messages = Vec::new();
    match &report.origin {
        LoadOrigin::Stored | LoadOrigin::Empty => {}
        LoadOrigin::Seeded => messages.push(CmdMessage::info(
            "Populated library with initial items for the first time.",
        )),
        LoadOrigin::Fallback { reason } => messages.push(CmdMessage::warning(format!(
            "Error reading data file: {}. Starting with the demo catalog.",
            reason
        ))),
    }
    for skipped in &report.skipped {
        let position = skipped.position + 1;
        messages.push(CmdMessage::warning(match &skipped.reason {
            SkipReason::DuplicateId => format!(
                "Skipped record {} with duplicate item ID {}.",
                position, skipped.item_id
            ),
            SkipReason::Invalid(reason) => format!("Skipped record {}: {}.", position, reason),
        }));
    }
    if let Some(error) = &report.save_error {
        messages.push(CmdMessage::error(format!(
            "Initial library data could not be saved: {}",
            error
        )));
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::SkippedRecord;

    #[test]
    fn normal_load_is_silent() {
        let report = LoadReport {
            origin: LoadOrigin::Stored,
            skipped: vec![],
            save_error: None,
        };
        assert!(load_messages(&report).is_empty());
    }

    #[test]
    fn fallback_and_skips_are_warnings() {
        let report = LoadReport {
            origin: LoadOrigin::Fallback {
                reason: "bad json".into(),
            },
            skipped: vec![
                SkippedRecord {
                    position: 1,
                    item_id: "B001".into(),
                    reason: SkipReason::DuplicateId,
                },
                SkippedRecord {
                    position: 4,
                    item_id: "".into(),
                    reason: SkipReason::Invalid("Invalid itemId: cannot be empty".into()),
                },
            ],
            save_error: None,
        };
        let messages = load_messages(&report);
        assert_eq!(messages.len(), 3);
        assert!(messages.iter().all(|m| m.level == MessageLevel::Warning));
        assert_eq!(
            messages[1].content,
            "Skipped record 2 with duplicate item ID B001."
        );
        assert_eq!(
            messages[2].content,
            "Skipped record 5: Invalid itemId: cannot be empty."
        );
    }
}
