use crate::commands::{cloned, CmdResult};
use crate::error::Result;
use crate::repository::Library;
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    Available,
    Borrowed,
}

pub fn run<S: DataStore>(library: &Library<S>, filter: ListFilter) -> Result<CmdResult> {
    let items = match filter {
        ListFilter::All => library.list_all(),
        ListFilter::Available => library.list_available(),
        ListFilter::Borrowed => library.list_borrowed(),
    };
    Ok(CmdResult::default().with_listed_items(cloned(items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn titles(result: &CmdResult) -> Vec<&str> {
        result
            .listed_items
            .iter()
            .map(|i| i.title.as_str())
            .collect()
    }

    #[test]
    fn filters_by_availability() {
        let mut library = Library::new(
            StoreFixture::new()
                .with_book("The Hobbit", "B001")
                .with_borrowed_book("1984", "B002")
                .with_magazine("Time", "M003")
                .store,
        );
        library.load();

        let all = run(&library, ListFilter::All).unwrap();
        assert_eq!(titles(&all), vec!["The Hobbit", "1984", "Time"]);

        let available = run(&library, ListFilter::Available).unwrap();
        assert_eq!(titles(&available), vec!["The Hobbit", "Time"]);

        let borrowed = run(&library, ListFilter::Borrowed).unwrap();
        assert_eq!(titles(&borrowed), vec!["1984"]);
    }
}
