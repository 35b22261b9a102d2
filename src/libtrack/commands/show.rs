use crate::commands::CmdResult;
use crate::error::Result;
use crate::repository::Library;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &Library<S>, id: &str) -> Result<CmdResult> {
    let item = library.get(id)?.clone();
    Ok(CmdResult::default().with_listed_items(vec![item]))
}
