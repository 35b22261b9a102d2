use clap::{Args, Parser, Subcommand};
use libtrack::api::ListFilter;
use libtrack::validate::ItemDraft;
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "libtrack", bin_name = "libtrack", version = get_version())]
#[command(
    about = "Track the books, DVDs and magazines of a small library",
    long_about = "Track the books, DVDs and magazines of a small library.\n\n\
                  Run without a command in a terminal to open the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the library data and config (default: $LIBTRACK_HOME or the OS data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu
    Menu,

    /// List items
    #[command(alias = "ls")]
    List {
        /// Only items that can be borrowed
        #[arg(long, conflicts_with = "borrowed")]
        available: bool,

        /// Only items that are checked out
        #[arg(long)]
        borrowed: bool,
    },

    /// Search titles and item IDs (case-insensitive)
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show the full description of one item
    Show { id: String },

    /// Borrow an item
    Borrow { id: String },

    /// Return a borrowed item
    Return { id: String },

    /// Add a new item
    #[command(subcommand)]
    Add(AddCommands),

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, seed-demo)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

impl Commands {
    pub fn list_filter(available: bool, borrowed: bool) -> ListFilter {
        match (available, borrowed) {
            (true, _) => ListFilter::Available,
            (_, true) => ListFilter::Borrowed,
            _ => ListFilter::All,
        }
    }
}

#[derive(Args, Debug)]
pub struct CommonFields {
    /// Title of the item
    #[arg(long)]
    pub title: String,

    /// Unique item ID (e.g. B006)
    #[arg(long)]
    pub id: String,
}

#[derive(Subcommand, Debug)]
pub enum AddCommands {
    /// Add a book
    Book {
        #[command(flatten)]
        common: CommonFields,

        #[arg(long)]
        author: Option<String>,

        /// Number of pages
        #[arg(long)]
        pages: String,

        #[arg(long)]
        genre: String,
    },

    /// Add a DVD
    Dvd {
        #[command(flatten)]
        common: CommonFields,

        #[arg(long)]
        director: String,

        /// Running time in minutes
        #[arg(long)]
        duration: String,
    },

    /// Add a magazine issue
    Magazine {
        #[command(flatten)]
        common: CommonFields,

        /// Issue number
        #[arg(long)]
        issue: String,

        /// Publication date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

impl AddCommands {
    pub fn into_draft(self) -> ItemDraft {
        match self {
            AddCommands::Book {
                common,
                author,
                pages,
                genre,
            } => ItemDraft::Book {
                title: common.title,
                item_id: common.id,
                author,
                num_pages: pages,
                genre,
            },
            AddCommands::Dvd {
                common,
                director,
                duration,
            } => ItemDraft::Dvd {
                title: common.title,
                item_id: common.id,
                director,
                duration,
            },
            AddCommands::Magazine {
                common,
                issue,
                date,
            } => ItemDraft::Magazine {
                title: common.title,
                item_id: common.id,
                issue_number: issue,
                publication_date: date,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_book() {
        let cli = Cli::try_parse_from([
            "libtrack", "add", "book", "--title", "Dune", "--id", "B001", "--pages", "412",
            "--genre", "Sci-Fi",
        ])
        .unwrap();
        let Some(Commands::Add(add)) = cli.command else {
            panic!("expected add command");
        };
        assert!(matches!(
            add.into_draft(),
            ItemDraft::Book { ref item_id, author: None, .. } if item_id == "B001"
        ));
    }

    #[test]
    fn list_flags_are_exclusive() {
        assert!(Cli::try_parse_from(["libtrack", "ls", "--available", "--borrowed"]).is_err());
        assert_eq!(Commands::list_filter(false, true), ListFilter::Borrowed);
        assert_eq!(Commands::list_filter(false, false), ListFilter::All);
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["libtrack", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
