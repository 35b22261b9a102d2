use colored::Colorize;
use libtrack::api::{CmdMessage, MessageLevel};
use libtrack::model::Item;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

/// Print a titled, tree-style list of items.
pub(super) fn print_item_list(heading: &str, items: &[Item]) {
    let banner = format!("--- {} ---", heading);
    println!("\n{}", banner.bold());
    if items.is_empty() {
        println!("No items to display in this category.");
    }
    for line in render_item_tree(items) {
        println!("{}", line);
    }
    println!("{}", "-".repeat(banner.width()));
}

/// Print the one-line description of each item together with its status.
pub(super) fn print_item_details(items: &[Item]) {
    for item in items {
        println!("{} {}", status_marker(item), item.describe());
    }
}

pub(super) fn render_item_tree(items: &[Item]) -> Vec<String> {
    let last = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let prefix = if i == last { LAST_BRANCH } else { BRANCH };
            let details = format!(
                "{}: '{}' (ID: {})",
                item.kind_name(),
                item.title,
                item.item_id()
            );
            // prefix + "[x] "
            let available = LINE_WIDTH.saturating_sub(prefix.width() + 4);
            format!(
                "{}{} {}",
                prefix,
                status_marker(item),
                truncate_to_width(&details, available)
            )
        })
        .collect()
}

fn status_marker(item: &Item) -> String {
    if item.is_available() {
        format!("[{}]", "✓".green())
    } else {
        format!("[{}]", "✕".red())
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
