//! SQL dialect detection.
//!
//! The parser accepts every supported surface syntax regardless of
//! dialect. The dialect only tweaks type mapping where the same token
//! means different things (`TINYINT(1)` in MySQL, `INTEGER` in SQLite).

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Detect from the input
    #[default]
    Auto,
    Generic,
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
    #[serde(alias = "mariadb")]
    MySql,
    Sqlite,
    #[serde(alias = "mssql")]
    SqlServer,
}

impl Dialect {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "generic" => Some(Self::Generic),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            "mysql" | "mariadb" => Some(Self::MySql),
            "sqlite" => Some(Self::Sqlite),
            "sqlserver" | "mssql" => Some(Self::SqlServer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Generic => "generic",
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
            Self::SqlServer => "sqlserver",
        }
    }

    /// Guess the dialect from dump headers and dialect-only keywords.
    pub fn detect(content: &str) -> Self {
        let lower = content.to_lowercase();

        if lower.contains("postgresql database dump") || lower.contains("pg_dump") {
            return Self::Postgres;
        }
        if lower.contains("mysql dump") || lower.contains("mysqldump") {
            return Self::MySql;
        }

        if lower.contains("serial")
            || lower.contains("timestamptz")
            || lower.contains("bytea")
            || lower.contains("jsonb")
        {
            return Self::Postgres;
        }
        if lower.contains("auto_increment") || lower.contains("engine=") || content.contains('`') {
            return Self::MySql;
        }
        if lower.contains("autoincrement") || lower.contains("without rowid") {
            return Self::Sqlite;
        }
        if lower.contains("identity(") || lower.contains("nvarchar") || content.contains("[dbo]") {
            return Self::SqlServer;
        }

        Self::Generic
    }

    /// Resolve `Auto` to a concrete dialect.
    pub fn resolve(self, content: &str) -> Self {
        match self {
            Self::Auto => Self::detect(content),
            other => other,
        }
    }
}
