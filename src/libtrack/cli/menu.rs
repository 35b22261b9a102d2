//! Interactive, keystroke driven menu.
//!
//! W/S or the arrow keys move the selection, Enter or Space picks it, Q or Esc
//! goes back. Every action runs through the same [`LibraryApi`] as the
//! subcommands; failures of an action are printed and the menu carries on.

use super::render::{print_error, print_item_details, print_item_list, print_messages};
use colored::Colorize;
use console::{Key, Term};
use libtrack::api::{CmdResult, LibraryApi, ListFilter};
use libtrack::error::Result;
use libtrack::model::{Item, ItemKind};
use libtrack::store::DataStore;
use libtrack::validate;

const MAIN_OPTIONS: [&str; 8] = [
    "List All Items",
    "List Available Items",
    "List Borrowed Items",
    "Borrow an Item",
    "Return an Item",
    "Search for an Item",
    "Add a New Item",
    "Exit",
];
const EXIT: usize = MAIN_OPTIONS.len() - 1;

const KINDS: [&str; 3] = ["Book", "DVD", "Magazine"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MenuAction {
    Moved,
    Select(usize),
    Back,
    Ignored,
}

/// Selection state of a vertical menu. Movement wraps around.
#[derive(Debug)]
pub(super) struct MenuState {
    selected: usize,
    len: usize,
}

impl MenuState {
    pub(super) fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub(super) fn selected(&self) -> usize {
        self.selected
    }

    pub(super) fn handle(&mut self, key: &Key) -> MenuAction {
        if self.len == 0 {
            return MenuAction::Back;
        }
        match key {
            Key::ArrowUp | Key::Char('w') | Key::Char('W') => {
                self.selected = (self.selected + self.len - 1) % self.len;
                MenuAction::Moved
            }
            Key::ArrowDown | Key::Char('s') | Key::Char('S') => {
                self.selected = (self.selected + 1) % self.len;
                MenuAction::Moved
            }
            Key::Enter | Key::Char(' ') => MenuAction::Select(self.selected),
            // Unknown is all a non-terminal input ever yields
            Key::Escape | Key::Char('q') | Key::Char('Q') | Key::Unknown => MenuAction::Back,
            _ => MenuAction::Ignored,
        }
    }
}

pub(super) fn run<S: DataStore>(api: &mut LibraryApi<S>) -> Result<()> {
    let term = Term::stdout();
    let mut state = MenuState::new(MAIN_OPTIONS.len());

    loop {
        draw(&term, "===== Library Menu =====", &MAIN_OPTIONS, state.selected())?;
        match state.handle(&term.read_key()?) {
            MenuAction::Select(EXIT) | MenuAction::Back => {
                term.clear_screen()?;
                println!("Thank you for using the Library System. Goodbye!");
                return Ok(());
            }
            MenuAction::Select(choice) => {
                term.clear_screen()?;
                run_choice(&term, api, choice)?;
                term.write_str("\nPress any key to return to the menu...")?;
                term.read_key()?;
            }
            MenuAction::Moved | MenuAction::Ignored => {}
        }
    }
}

fn run_choice<S: DataStore>(term: &Term, api: &mut LibraryApi<S>, choice: usize) -> Result<()> {
    match choice {
        0 => show_list(api, "All Library Items", ListFilter::All),
        1 => show_list(api, "Available Items", ListFilter::Available),
        2 => show_list(api, "Borrowed Items", ListFilter::Borrowed),
        3 => {
            let candidates = api.list_items(ListFilter::Available)?.listed_items;
            match pick_item(term, "Select an item to borrow:", &candidates)? {
                Some(id) => show_outcome(api.borrow_item(&id)),
                None => println!("Borrowing cancelled."),
            }
        }
        4 => {
            let candidates = api.list_items(ListFilter::Borrowed)?.listed_items;
            match pick_item(term, "Select an item to return:", &candidates)? {
                Some(id) => show_outcome(api.return_item(&id)),
                None => println!("Return cancelled."),
            }
        }
        5 => {
            term.write_str("Enter title or Item ID to search for: ")?;
            let query = term.read_line()?;
            match api.search_items(&query) {
                Ok(result) => {
                    print_item_list("Search Results", &result.listed_items);
                    print_messages(&result.messages);
                }
                Err(e) => print_error(&e.to_string()),
            }
        }
        6 => add_item(term, api)?,
        _ => {}
    }
    Ok(())
}

fn show_list<S: DataStore>(api: &LibraryApi<S>, heading: &str, filter: ListFilter) {
    match api.list_items(filter) {
        Ok(result) => print_item_list(heading, &result.listed_items),
        Err(e) => print_error(&e.to_string()),
    }
}

fn show_outcome(outcome: Result<CmdResult>) {
    match outcome {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_error(&e.to_string()),
    }
}

/// Let the user pick one of `items`; returns its id.
fn pick_item(term: &Term, prompt: &str, items: &[Item]) -> Result<Option<String>> {
    if items.is_empty() {
        println!("No items to display in this category.");
        return Ok(None);
    }
    let labels: Vec<String> = items.iter().map(Item::describe).collect();
    let picked = select(term, prompt, &labels)?;
    Ok(picked.map(|i| items[i].item_id().to_string()))
}

fn select<T: AsRef<str>>(term: &Term, prompt: &str, options: &[T]) -> Result<Option<usize>> {
    let mut state = MenuState::new(options.len());
    loop {
        draw(term, prompt, options, state.selected())?;
        match state.handle(&term.read_key()?) {
            MenuAction::Select(i) => {
                term.clear_screen()?;
                return Ok(Some(i));
            }
            MenuAction::Back => {
                term.clear_screen()?;
                return Ok(None);
            }
            MenuAction::Moved | MenuAction::Ignored => {}
        }
    }
}

fn draw<T: AsRef<str>>(term: &Term, heading: &str, options: &[T], selected: usize) -> Result<()> {
    term.clear_screen()?;
    term.write_line(&format!("\n{}", heading))?;
    for (i, option) in options.iter().enumerate() {
        let option = option.as_ref();
        if i == selected {
            term.write_line(&format!("> {}", format!(" {} ", option).black().on_white()))?;
        } else {
            term.write_line(&format!("  {}", option))?;
        }
    }
    term.write_line(&"-".repeat(heading.chars().count()))?;
    term.write_line("Use W/S or Arrow Keys to navigate, Enter to select, Q to go back.")?;
    Ok(())
}

/// Ask for a value until `parse` accepts it. Invalid input is reported and asked again.
fn prompt<T>(term: &Term, label: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
    loop {
        term.write_str(&format!("{}: ", label))?;
        let raw = term.read_line()?;
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_user_error() => print_error(&e.to_string()),
            Err(e) => return Err(e),
        }
    }
}

fn add_item<S: DataStore>(term: &Term, api: &mut LibraryApi<S>) -> Result<()> {
    let Some(kind) = select(term, "Select the kind of item to add:", &KINDS)? else {
        println!("Adding cancelled.");
        return Ok(());
    };

    println!("New {}", KINDS[kind]);
    let title = prompt(term, "Title", |s| validate::non_empty("title", s))?;
    let item_id = prompt(term, "Item ID", |s| validate::new_item_id(api.library(), s))?;
    let kind = match kind {
        0 => ItemKind::Book {
            author: prompt(term, "Author (optional)", |s| Ok(validate::optional(Some(s))))?,
            num_pages: prompt(term, "Number of pages", |s| {
                validate::positive_int("numPages", s)
            })?,
            genre: prompt(term, "Genre", |s| validate::non_empty("genre", s))?,
        },
        1 => ItemKind::Dvd {
            director: prompt(term, "Director", |s| validate::non_empty("director", s))?,
            duration: prompt(term, "Duration (minutes)", |s| {
                validate::positive_int("duration", s)
            })?,
        },
        _ => ItemKind::Magazine {
            issue_number: prompt(term, "Issue number", |s| {
                validate::positive_int("issueNumber", s)
            })?,
            publication_date: prompt(term, "Publication date (YYYY-MM-DD)", |s| {
                validate::iso_date("publicationDate", s)
            })?,
        },
    };

    let item = Item::new(title, item_id, kind);
    print_item_details(std::slice::from_ref(&item));
    term.write_str("Save this item? [y/N] ")?;
    let confirmed = matches!(term.read_key()?, Key::Char('y') | Key::Char('Y'));
    term.write_line("")?;
    if confirmed {
        show_outcome(api.add_item(item));
    } else {
        println!("Adding cancelled.");
    }
    Ok(())
}
