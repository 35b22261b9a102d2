//! Canned catalog used the first time the library is opened.

use crate::model::Item;
use chrono::NaiveDate;

/// Ids of the demo items that start out borrowed.
pub const PRE_BORROWED: [&str; 2] = ["B002", "D003"];

/// The fixed demo catalog, in insertion order.
pub fn demo_items() -> Vec<Item> {
    let mut items = vec![
        Item::book("The Hobbit", "B001", 310, "Fantasy").with_author("J.R.R. Tolkien"),
        Item::book("1984", "B002", 328, "Dystopian").with_author("George Orwell"),
        Item::book("Dune", "B003", 412, "Science Fiction").with_author("Frank Herbert"),
        Item::book("Foundation", "B004", 255, "Science Fiction").with_author("Isaac Asimov"),
        Item::book("Brave New World", "B005", 311, "Dystopian").with_author("Aldous Huxley"),
        Item::dvd("The Matrix", "D001", "Wachowskis", 136),
        Item::dvd("Inception", "D002", "Christopher Nolan", 148),
        Item::dvd("The Lord of the Rings", "D003", "Peter Jackson", 201),
        Item::magazine("National Geographic", "M001", 230, ymd(2023, 10, 1)),
        Item::magazine("Scientific American", "M002", 1089, ymd(2024, 1, 1)),
        Item::magazine("Time", "M003", 5221, ymd(2023, 12, 25)),
    ];

    for item in items.iter_mut() {
        if PRE_BORROWED.contains(&item.item_id()) {
            item.available = false;
        }
    }
    items
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
