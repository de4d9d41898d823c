use tabled::Table;

use crate::{Browser, types::RefTableRow};

/// Prints every static directory, parents before their children.
pub fn tree() {
    let browser = Browser::new();
    let table_rows: Vec<RefTableRow> = browser
        .tree()
        .entries()
        .into_iter()
        .cloned()
        .map(RefTableRow::from)
        .collect();

    println!("{}", Table::new(table_rows));
}
