//! Many-to-many link table detection.

use indexmap::IndexSet;

use crate::sql::{ParsedTable, TableRegistry};

/// A table is a junction when it has at least two foreign-key columns and
/// carries no more payload columns (not primary key, not `id`) than it has
/// foreign-key columns.
///
/// This is a heuristic. A link table whose composite primary key covers its
/// two references may carry a `created_at` and still qualify. With a
/// surrogate `id` key the references themselves count as payload, so any
/// extra column disqualifies it. A small content table that happens to hold
/// two references qualifies too.
pub fn is_junction_table(table: &ParsedTable) -> bool {
    let fk_columns = table.foreign_key_columns().len();
    fk_columns >= 2 && table.payload_columns().count() <= fk_columns
}

/// Registry keys of every junction table, in declaration order.
pub fn detect_junction_tables(tables: &TableRegistry) -> IndexSet<String> {
    tables
        .iter()
        .filter(|(_, table)| is_junction_table(table))
        .map(|(key, _)| key.to_string())
        .collect()
}
