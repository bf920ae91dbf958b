use std::path::PathBuf;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a piece of the input contributed nothing to the design.
///
/// The import never fails; every silent skip is one of these, logged at
/// debug level and collected in the import report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("Not a CREATE TABLE or ALTER TABLE statement: {0}")]
    UnsupportedStatement(String),
    #[error("CREATE TABLE without a name and column list: {0}")]
    MalformedCreateTable(String),
    #[error("Unparsable column clause in {table}: {clause}")]
    UnparsableColumn { table: String, clause: String },
    #[error("ALTER TABLE on unknown table {0}")]
    AlterUnknownTable(String),
    #[error("ALTER TABLE {0} has no FOREIGN KEY (...) clause")]
    AlterWithoutForeignKey(String),
    #[error("ALTER TABLE {0} has no REFERENCES table(...) clause")]
    AlterWithoutReferences(String),
    #[error("Foreign key {table}.{column} references unknown table {referenced}")]
    UnknownReferencedTable {
        table: String,
        column: String,
        referenced: String,
    },
    #[error("Junction table {0} has fewer than two resolvable targets")]
    UnresolvedJunction(String),
}

impl Serialize for SkipReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Consistency violations in a design, see `ErDesign::check_integrity`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("Relation {relation} references missing entity {entity}")]
    DanglingEndpoint { relation: String, entity: String },
    #[error("Duplicate id {0}")]
    DuplicateId(String),
}

/// Errors from the surfaces around the engine (options, JSON, files).
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid import options: {0}")]
    Options(#[source] serde_json::Error),
    #[error("Failed to serialize design: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_serializes_as_message() {
        let reason = SkipReason::AlterUnknownTable("ghosts".to_string());
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json, "ALTER TABLE on unknown table ghosts");
    }
}
