//! SQL column type to semantic field type mapping.

use crate::design::FieldType;

use super::Dialect;

/// Known type tokens. Exact matches win; otherwise the longest token
/// contained in the normalized type is used.
const TYPE_TABLE: &[(&str, FieldType)] = &[
    // Integers
    ("BIGINT", FieldType::Long),
    ("INT8", FieldType::Long),
    ("BIGSERIAL", FieldType::Long),
    ("SERIAL8", FieldType::Long),
    ("INT", FieldType::Integer),
    ("INTEGER", FieldType::Integer),
    ("INT4", FieldType::Integer),
    ("INT2", FieldType::Integer),
    ("SMALLINT", FieldType::Integer),
    ("MEDIUMINT", FieldType::Integer),
    ("TINYINT", FieldType::Integer),
    ("SERIAL", FieldType::Integer),
    ("SERIAL4", FieldType::Integer),
    ("SMALLSERIAL", FieldType::Integer),
    // Exact numerics
    ("DECIMAL", FieldType::BigDecimal),
    ("NUMERIC", FieldType::BigDecimal),
    ("NUMBER", FieldType::BigDecimal),
    ("MONEY", FieldType::BigDecimal),
    // Floating point
    ("REAL", FieldType::Float),
    ("FLOAT", FieldType::Float),
    ("FLOAT4", FieldType::Float),
    ("DOUBLE", FieldType::Double),
    ("FLOAT8", FieldType::Double),
    // Boolean
    ("BOOLEAN", FieldType::Boolean),
    ("BOOL", FieldType::Boolean),
    ("BIT", FieldType::Boolean),
    // Date/time
    ("DATE", FieldType::LocalDate),
    ("TIME", FieldType::LocalTime),
    ("TIMETZ", FieldType::LocalTime),
    ("DATETIME", FieldType::LocalDateTime),
    ("DATETIME2", FieldType::LocalDateTime),
    ("SMALLDATETIME", FieldType::LocalDateTime),
    ("TIMESTAMP", FieldType::LocalDateTime),
    ("TIMESTAMPTZ", FieldType::Instant),
    ("DATETIMEOFFSET", FieldType::Instant),
    // Identifiers
    ("UUID", FieldType::Uuid),
    ("UNIQUEIDENTIFIER", FieldType::Uuid),
    // Binary
    ("BLOB", FieldType::ByteArray),
    ("TINYBLOB", FieldType::ByteArray),
    ("MEDIUMBLOB", FieldType::ByteArray),
    ("LONGBLOB", FieldType::ByteArray),
    ("BYTEA", FieldType::ByteArray),
    ("BINARY", FieldType::ByteArray),
    ("VARBINARY", FieldType::ByteArray),
    ("IMAGE", FieldType::ByteArray),
    // Text
    ("CHAR", FieldType::String),
    ("CHARACTER", FieldType::String),
    ("NCHAR", FieldType::String),
    ("VARCHAR", FieldType::String),
    ("VARCHAR2", FieldType::String),
    ("NVARCHAR", FieldType::String),
    ("TEXT", FieldType::String),
    ("TINYTEXT", FieldType::String),
    ("MEDIUMTEXT", FieldType::String),
    ("LONGTEXT", FieldType::String),
    ("CLOB", FieldType::String),
    ("CITEXT", FieldType::String),
    ("STRING", FieldType::String),
    ("JSON", FieldType::String),
    ("JSONB", FieldType::String),
    ("ENUM", FieldType::String),
];

/// A raw column type split into its base name and parenthesized
/// parameters: `decimal(10, 2)` has base `DECIMAL` and params `10`, `2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnType {
    pub base: String,
    pub params: Vec<String>,
}

impl ColumnType {
    pub fn parse(raw: &str) -> Self {
        let (head, params) = match raw.find('(') {
            Some(open) => {
                let inner = raw[open + 1..].trim_end().trim_end_matches(')');
                let params = inner
                    .split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect();
                (&raw[..open], params)
            }
            None => (raw, Vec::new()),
        };

        let base = head.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase();
        Self { base, params }
    }

    /// The declared length, when there is exactly one numeric parameter.
    pub fn length(&self) -> Option<u32> {
        match self.params.as_slice() {
            [single] => single.parse().ok(),
            _ => None,
        }
    }
}

/// Map a raw SQL type to a semantic field type. Unknown types become
/// `String`.
pub fn map_type(raw: &str, dialect: Dialect) -> FieldType {
    let column_type = ColumnType::parse(raw);

    if let Some(special) = map_dialect_specific(&column_type, dialect) {
        return special;
    }

    lookup(&column_type.base).unwrap_or(FieldType::String)
}

fn map_dialect_specific(column_type: &ColumnType, dialect: Dialect) -> Option<FieldType> {
    match (dialect, column_type.base.as_str()) {
        // TINYINT(1) is MySQL's boolean
        (Dialect::MySql, "TINYINT") if column_type.length() == Some(1) => Some(FieldType::Boolean),
        // INTEGER columns are 64-bit in SQLite
        (Dialect::Sqlite, "INTEGER") => Some(FieldType::Long),
        _ => None,
    }
}

/// Whether `name` is exactly one of the known type tokens.
pub fn is_known_type(name: &str) -> bool {
    let name = name.to_uppercase();
    TYPE_TABLE.iter().any(|(token, _)| *token == name)
}

fn lookup(base: &str) -> Option<FieldType> {
    if let Some((_, exact)) = TYPE_TABLE.iter().find(|(token, _)| *token == base) {
        return Some(*exact);
    }

    TYPE_TABLE
        .iter()
        .filter(|(token, _)| base.contains(token))
        .max_by_key(|(token, _)| token.len())
        .map(|(_, field_type)| *field_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matches() {
        assert_eq!(map_type("INT", Dialect::Generic), FieldType::Integer);
        assert_eq!(map_type("bigint", Dialect::Generic), FieldType::Long);
        assert_eq!(map_type("VARCHAR(50)", Dialect::Generic), FieldType::String);
        assert_eq!(map_type("DECIMAL(10,2)", Dialect::Generic), FieldType::BigDecimal);
        assert_eq!(map_type("BOOLEAN", Dialect::Generic), FieldType::Boolean);
        assert_eq!(map_type("TIMESTAMP", Dialect::Generic), FieldType::LocalDateTime);
        assert_eq!(map_type("TIMESTAMPTZ", Dialect::Postgres), FieldType::Instant);
        assert_eq!(map_type("DATE", Dialect::Generic), FieldType::LocalDate);
        assert_eq!(map_type("UUID", Dialect::Postgres), FieldType::Uuid);
        assert_eq!(map_type("BYTEA", Dialect::Postgres), FieldType::ByteArray);
    }

    #[test]
    fn test_substring_fallback_prefers_longest_token() {
        assert_eq!(map_type("DOUBLE PRECISION", Dialect::Postgres), FieldType::Double);
        assert_eq!(map_type("CHARACTER VARYING(100)", Dialect::Postgres), FieldType::String);
        assert_eq!(map_type("INT UNSIGNED", Dialect::MySql), FieldType::Integer);
        assert_eq!(map_type("UNSIGNED_BIGINT", Dialect::Generic), FieldType::Long);
    }

    #[test]
    fn test_unknown_type_defaults_to_string() {
        assert_eq!(map_type("XMLTYPE", Dialect::Generic), FieldType::String);
        assert_eq!(map_type("GEOGRAPHY", Dialect::Generic), FieldType::String);
    }

    #[test]
    fn test_dialect_specific() {
        assert_eq!(map_type("TINYINT(1)", Dialect::MySql), FieldType::Boolean);
        assert_eq!(map_type("TINYINT(4)", Dialect::MySql), FieldType::Integer);
        assert_eq!(map_type("TINYINT(1)", Dialect::Postgres), FieldType::Integer);
        assert_eq!(map_type("INTEGER", Dialect::Sqlite), FieldType::Long);
    }

    #[test]
    fn test_is_known_type() {
        assert!(is_known_type("varchar"));
        assert!(is_known_type("INT"));
        assert!(!is_known_type("idx_name"));
        assert!(!is_known_type("XMLTYPE"));
    }

    #[test]
    fn test_column_type_parse() {
        let t = ColumnType::parse("varchar(50)");
        assert_eq!(t.base, "VARCHAR");
        assert_eq!(t.length(), Some(50));

        let t = ColumnType::parse("DECIMAL( 10 , 2 )");
        assert_eq!(t.params, vec!["10", "2"]);
        assert_eq!(t.length(), None);

        let t = ColumnType::parse("NVARCHAR(MAX)");
        assert_eq!(t.length(), None);

        let t = ColumnType::parse("character  varying");
        assert_eq!(t.base, "CHARACTER VARYING");
        assert!(t.params.is_empty());
    }
}
