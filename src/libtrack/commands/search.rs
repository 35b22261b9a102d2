use crate::commands::{cloned, CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::Library;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &Library<S>, query: &str) -> Result<CmdResult> {
    let matches = cloned(library.search(query));

    let mut result = CmdResult::default();
    if query.trim().is_empty() {
        result.add_message(CmdMessage::warning("Enter a title or item ID to search for."));
    } else if matches.is_empty() {
        result.add_message(CmdMessage::info("No items found matching your query."));
    }
    Ok(result.with_listed_items(matches))
}
