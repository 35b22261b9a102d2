use crate::commands::{report_unsaved, unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Item;
use crate::repository::Library;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &mut Library<S>, item: Item) -> Result<CmdResult> {
    let id = item.item_id().to_string();
    let failure = unsaved(library.add(item))?;

    let item = library.get(&id)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added '{}' (ID: {}).",
        item.title,
        item.item_id()
    )));
    report_unsaved(&mut result, failure);
    Ok(result.with_affected_items(vec![item]))
}
