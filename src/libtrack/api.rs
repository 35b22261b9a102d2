//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! UI (the clap subcommands and the interactive menu both go through it).
//!
//! The facade owns the [`Library`] for the whole run, so there is no global
//! repository: whoever needs the catalog is handed the API (or a reference to
//! the library) explicitly.
//!
//! `LibraryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `LibraryApi<FileStore>`
//! - Testing: `LibraryApi<InMemoryStore>`

use crate::commands;
use crate::config::LibraryConfig;
use crate::error::Result;
use crate::model::Item;
use crate::repository::{Library, LoadReport};
use crate::store::DataStore;
use crate::validate::ItemDraft;

pub struct LibraryApi<S: DataStore> {
    library: Library<S>,
    load_report: LoadReport,
}

impl<S: DataStore> LibraryApi<S> {
    /// Load the library from `store`, seeding or falling back as configured.
    pub fn open(store: S, config: &LibraryConfig) -> Self {
        let mut library = Library::new(store).with_demo_seed(config.seed_demo);
        let load_report = library.load();
        Self {
            library,
            load_report,
        }
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn load_messages(&self) -> Vec<commands::CmdMessage> {
        commands::load_messages(&self.load_report)
    }

    pub fn library(&self) -> &Library<S> {
        &self.library
    }

    pub fn add_item(&mut self, item: Item) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.library, item)
    }

    /// Validate raw field values and add the resulting item.
    pub fn add_draft(&mut self, draft: &ItemDraft) -> Result<commands::CmdResult> {
        let item = draft.validate(&self.library)?;
        self.add_item(item)
    }

    pub fn list_items(&self, filter: ListFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.library, filter)
    }

    pub fn search_items(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.library, query)
    }

    pub fn show_item(&self, id: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.library, id)
    }

    pub fn borrow_item(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::circulation::borrow(&mut self.library, id)
    }

    pub fn return_item(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::circulation::return_item(&mut self.library, id)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::list::ListFilter;
pub use commands::{CmdMessage, CmdResult, LibraryPaths, MessageLevel};
