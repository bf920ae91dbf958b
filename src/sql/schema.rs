//! Intermediate table model filled in by the DDL parser.

use indexmap::{IndexMap, IndexSet};

use crate::design::ReferentialAction;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedColumn {
    pub name: String,
    /// Type as written, including any `(length)` suffix
    pub raw_type: String,
    pub nullable: bool,
    pub unique: bool,
    pub primary_key: bool,
    pub default: Option<String>,
    pub reference: Option<InlineReference>,
}

/// `REFERENCES table(column)` attached to a column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineReference {
    pub table: String,
    pub column: String,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedForeignKey {
    pub columns: Vec<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
    pub on_delete: Option<ReferentialAction>,
    pub on_update: Option<ReferentialAction>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedTable {
    pub name: String,
    pub columns: Vec<ParsedColumn>,
    /// From a table-level `PRIMARY KEY (...)` clause
    pub primary_key: Option<Vec<String>>,
    pub foreign_keys: Vec<ParsedForeignKey>,
}

impl ParsedTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn column(&self, name: &str) -> Option<&ParsedColumn> {
        self.columns.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Inline `PRIMARY KEY` or member of the table-level key.
    pub fn is_primary_key(&self, column: &ParsedColumn) -> bool {
        column.primary_key
            || self
                .primary_key
                .as_ref()
                .is_some_and(|pk| pk.iter().any(|c| c.eq_ignore_ascii_case(&column.name)))
    }

    /// Lower-cased names of every column that takes part in a foreign key,
    /// table-level or inline, in declaration order.
    pub fn foreign_key_columns(&self) -> IndexSet<String> {
        let table_level = self
            .foreign_keys
            .iter()
            .flat_map(|fk| fk.columns.iter())
            .map(|c| c.to_lowercase());
        let inline = self
            .columns
            .iter()
            .filter(|c| c.reference.is_some())
            .map(|c| c.name.to_lowercase());
        table_level.chain(inline).collect()
    }

    /// Columns that are neither part of the primary key nor named `id`.
    pub fn payload_columns(&self) -> impl Iterator<Item = &ParsedColumn> {
        self.columns
            .iter()
            .filter(|c| !self.is_primary_key(c) && !c.name.eq_ignore_ascii_case("id"))
    }

    /// Table-level foreign keys followed by inline references whose column
    /// is not already covered by one of them.
    pub fn all_foreign_keys(&self) -> Vec<ParsedForeignKey> {
        let mut keys = self.foreign_keys.clone();
        for column in &self.columns {
            let Some(reference) = &column.reference else {
                continue;
            };
            let covered = self
                .foreign_keys
                .iter()
                .any(|fk| fk.columns.iter().any(|c| c.eq_ignore_ascii_case(&column.name)));
            if !covered {
                keys.push(ParsedForeignKey {
                    columns: vec![column.name.clone()],
                    referenced_table: reference.table.clone(),
                    referenced_columns: vec![reference.column.clone()],
                    on_delete: reference.on_delete,
                    on_update: reference.on_update,
                });
            }
        }
        keys
    }
}

/// Tables keyed by lower-cased name, iterated in first-declaration order.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: IndexMap<String, ParsedTable>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table. Redeclaring a name replaces the earlier
    /// definition but keeps its original position.
    pub fn insert(&mut self, table: ParsedTable) -> Option<ParsedTable> {
        self.tables.insert(table.name.to_lowercase(), table)
    }

    pub fn get(&self, name: &str) -> Option<&ParsedTable> {
        self.tables.get(&name.to_lowercase())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ParsedTable> {
        self.tables.get_mut(&name.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParsedTable)> {
        self.tables.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
