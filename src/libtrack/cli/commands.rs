//! # CLI Layer
//!
//! One possible UI client for libtrack. This is the only place that reads
//! arguments, touches stdout/stderr, or decides the exit code.
//!
//! - `run()`: parses arguments and dispatches (called by `main.rs`)
//! - `init_context()`: resolves the data dir, loads config and opens the API
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::menu;
use super::render::{print_item_details, print_item_list, print_messages};
use super::setup::{AddCommands, Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use libtrack::api::{CmdMessage, ConfigAction, LibraryApi, LibraryPaths, ListFilter};
use libtrack::commands;
use libtrack::config::LibraryConfig;
use libtrack::error::{LibraryError, Result};
use libtrack::logging::init_logging;
use libtrack::store::fs::FileStore;
use std::path::PathBuf;

pub const HOME_ENV: &str = "LIBTRACK_HOME";

struct AppContext {
    api: LibraryApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = LibraryPaths::new(resolve_data_dir(cli.data_dir.clone())?);
    let interactive = Term::stdout().is_term();

    match cli.command {
        // Config does not need (or create) the library data
        Some(Commands::Config { key, value }) => handle_config(&paths, key, value),
        Some(Commands::Menu) => {
            require_terminal(interactive)?;
            menu::run(&mut init_context(paths)?.api)
        }
        None if interactive => menu::run(&mut init_context(paths)?.api),
        None => handle_list(&init_context(paths)?, ListFilter::All),
        Some(Commands::List {
            available,
            borrowed,
        }) => handle_list(
            &init_context(paths)?,
            Commands::list_filter(available, borrowed),
        ),
        Some(Commands::Search { query }) => {
            handle_search(&init_context(paths)?, &query.join(" "))
        }
        Some(Commands::Show { id }) => handle_show(&init_context(paths)?, &id),
        Some(Commands::Borrow { id }) => handle_borrow(&mut init_context(paths)?, &id),
        Some(Commands::Return { id }) => handle_return(&mut init_context(paths)?, &id),
        Some(Commands::Add(add)) => handle_add(&mut init_context(paths)?, add),
    }
}

/// The menu reads raw keys; without a terminal it would never see one.
fn require_terminal(interactive: bool) -> Result<()> {
    if interactive {
        Ok(())
    } else {
        Err(LibraryError::NoTerminal)
    }
}

/// `--data-dir`, then `$LIBTRACK_HOME`, then the OS data directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "libtrack", "libtrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            LibraryError::Config(format!(
                "Could not determine a data directory; set {} or pass --data-dir",
                HOME_ENV
            ))
        })
}

/// Load the config (defaults if it is unreadable), open the library and
/// report how it was loaded.
fn init_context(paths: LibraryPaths) -> Result<AppContext> {
    let (config, ignored) = LibraryConfig::load_or_default(&paths.data_dir);
    if let Some(e) = ignored {
        print_messages(&[CmdMessage::warning(format!(
            "{}. Using default settings.",
            e
        ))]);
    }
    tracing::debug!(data_file = %paths.data_file(&config).display(), "opening library");

    let store = FileStore::new(paths.data_dir.clone()).with_file_name(&config.data_file);
    let api = LibraryApi::open(store, &config);
    print_messages(&api.load_messages());
    Ok(AppContext { api })
}

fn handle_list(ctx: &AppContext, filter: ListFilter) -> Result<()> {
    let heading = match filter {
        ListFilter::All => "All Library Items",
        ListFilter::Available => "Available Items",
        ListFilter::Borrowed => "Borrowed Items",
    };
    let result = ctx.api.list_items(filter)?;
    print_item_list(heading, &result.listed_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search_items(query)?;
    if !result.listed_items.is_empty() {
        print_item_list("Search Results", &result.listed_items);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.show_item(id)?;
    print_item_details(&result.listed_items);
    Ok(())
}

fn handle_borrow(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.borrow_item(id)?;
    finish(&result)
}

fn handle_return(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.return_item(id)?;
    finish(&result)
}

fn handle_add(ctx: &mut AppContext, add: AddCommands) -> Result<()> {
    let draft = add.into_draft();
    let result = ctx.api.add_draft(&draft)?;
    print_item_details(&result.affected_items);
    finish(&result)
}

fn handle_config(paths: &LibraryPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(paths, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            println!("data-file = {}", config.data_file);
            println!("seed-demo = {}", config.seed_demo);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Print messages; a save failure still fails the command.
fn finish(result: &commands::CmdResult) -> Result<()> {
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(LibraryError::Io(std::io::Error::other(
            "changes were not saved",
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_requires_a_terminal() {
        assert!(require_terminal(true).is_ok());
        assert!(matches!(
            require_terminal(false),
            Err(LibraryError::NoTerminal)
        ));
    }

    #[test]
    fn data_dir_flag_wins() {
        let dir = PathBuf::from("/tmp/libtrack-flag");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }
}
