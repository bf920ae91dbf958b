//! SQL DDL parsing: comment and statement handling, CREATE/ALTER TABLE
//! parsing, and column type mapping.

mod dialect;
mod lexer;
mod parser;
mod schema;
mod types;

pub use dialect::Dialect;
pub use lexer::{split_statements, split_top_level, strip_comments};
pub use parser::{
    Outcome, ParsedSchema, TableConstraint, apply_alter_table, parse_column, parse_create_table,
    parse_ddl, parse_table_constraint,
};
pub use schema::{InlineReference, ParsedColumn, ParsedForeignKey, ParsedTable, TableRegistry};
pub use types::{ColumnType, map_type};
