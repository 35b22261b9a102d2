use crate::commands::{report_unsaved, unsaved, CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::Library;
use crate::store::DataStore;

pub fn borrow<S: DataStore>(library: &mut Library<S>, id: &str) -> Result<CmdResult> {
    let failure = unsaved(library.borrow(id))?;
    let item = library.get(id)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "You have successfully borrowed '{}'.",
        item.title
    )));
    report_unsaved(&mut result, failure);
    Ok(result.with_affected_items(vec![item]))
}

pub fn return_item<S: DataStore>(library: &mut Library<S>, id: &str) -> Result<CmdResult> {
    let failure = unsaved(library.return_item(id))?;
    let item = library.get(id)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Thank you for returning '{}'.",
        item.title
    )));
    report_unsaved(&mut result, failure);
    Ok(result.with_affected_items(vec![item]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list::{self, ListFilter};
    use crate::error::LibraryError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn library(store: InMemoryStore) -> Library<InMemoryStore> {
        let mut library = Library::new(store);
        library.load();
        library
    }

    #[test]
    fn borrow_marks_item_borrowed() {
        let mut library = library(StoreFixture::new().with_book("Dune", "B001").store);
        let result = borrow(&mut library, "B001").unwrap();

        assert_eq!(
            result.messages[0].content,
            "You have successfully borrowed 'Dune'."
        );
        assert!(!result.affected_items[0].is_available());

        let borrowed = list::run(&library, ListFilter::Borrowed).unwrap();
        assert_eq!(borrowed.listed_items[0].item_id(), "B001");
    }

    #[test]
    fn second_borrow_is_rejected() {
        let mut library = library(StoreFixture::new().with_book("Dune", "B001").store);
        borrow(&mut library, "B001").unwrap();
        let err = borrow(&mut library, "B001").unwrap_err();
        assert!(matches!(err, LibraryError::AlreadyBorrowed(_)));
    }

    #[test]
    fn return_round_trip() {
        let mut library = library(StoreFixture::new().with_borrowed_book("1984", "B002").store);
        let result = return_item(&mut library, "B002").unwrap();
        assert_eq!(result.messages[0].content, "Thank you for returning '1984'.");

        let err = return_item(&mut library, "B002").unwrap_err();
        assert!(matches!(err, LibraryError::NotBorrowed(_)));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut library = library(StoreFixture::new().store);
        assert!(matches!(
            borrow(&mut library, "Z1").unwrap_err(),
            LibraryError::NotFound(_)
        ));
        assert!(matches!(
            return_item(&mut library, "Z1").unwrap_err(),
            LibraryError::NotFound(_)
        ));
    }
}
