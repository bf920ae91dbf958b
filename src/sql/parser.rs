//! DDL parser for CREATE TABLE and ALTER TABLE statements.
//!
//! Parsing is permissive. Anything that does not look like a statement,
//! column or constraint we understand is skipped, never an error. Each
//! step returns an [`Outcome`] so the skip is visible in the types.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use super::lexer::{
    balanced_body, ident_list, split_statements, split_top_level, strip_comments, unqualify,
    unquote_ident,
};
use super::schema::{InlineReference, ParsedColumn, ParsedForeignKey, ParsedTable, TableRegistry};
use super::types::is_known_type;
use crate::design::ReferentialAction;
use crate::error::SkipReason;

/// One quoted or bare identifier.
const IDENT: &str = r#"(?:"(?:[^"]|"")+"|`(?:[^`]|``)+`|'(?:[^']|'')+'|\[[^\]]+\]|[\w$]+)"#;

/// Referential action phrase after `ON DELETE` / `ON UPDATE`.
const ACTION: &str = r"CASCADE|RESTRICT|SET\s+NULL|SET\s+DEFAULT|NO\s+ACTION";

fn qualified() -> String {
    format!(r"{IDENT}(?:\s*\.\s*{IDENT})*")
}

static CREATE_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is)^CREATE\s+(?:OR\s+REPLACE\s+)?(?:(?:GLOBAL|LOCAL)\s+)?(?:(?:TEMPORARY|TEMP|UNLOGGED)\s+)?TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?({})\s*\(",
        qualified()
    ))
    .expect("valid CREATE TABLE pattern")
});

static ALTER_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is)^ALTER\s+TABLE\s+(?:IF\s+EXISTS\s+)?(?:ONLY\s+)?({})",
        qualified()
    ))
    .expect("valid ALTER TABLE pattern")
});

static COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is)^({IDENT})\s+([a-z_]\w*(?:\s+(?:VARYING|PRECISION|UNSIGNED))?(?:\s*\([^)]*\))?)(.*)$"
    ))
    .expect("valid column pattern")
});

static CONSTRAINT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)^CONSTRAINT\s+{IDENT}\s+")).expect("valid constraint name pattern")
});

static PRIMARY_KEY_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^PRIMARY\s+KEY\b").expect("valid primary key pattern"));

static CHECK_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^(?:CHECK\s*\(|EXCLUDE\s+(?:USING\b|\())").expect("valid check clause pattern")
});

/// `UNIQUE (...)`, `KEY name (...)`, `FULLTEXT INDEX name (...)` and the
/// like. Group 1 is the optional index name.
static INDEX_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is)^(?:(?:UNIQUE|FULLTEXT|SPATIAL)(?:\s+(?:KEY|INDEX))?|KEY|INDEX)\s*({IDENT})?\s*\("
    ))
    .expect("valid index clause pattern")
});

static FOREIGN_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)\bFOREIGN\s+KEY\s*(?:{IDENT}\s*)?\(([^)]*)\)"))
        .expect("valid foreign key pattern")
});

static REFERENCES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is)\bREFERENCES\s+({})\s*(?:\(([^)]*)\))?",
        qualified()
    ))
    .expect("valid references pattern")
});

static ON_DELETE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)\bON\s+DELETE\s+({ACTION})\b")).expect("valid ON DELETE pattern")
});

static ON_UPDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)\bON\s+UPDATE\s+({ACTION})\b")).expect("valid ON UPDATE pattern")
});

static NOT_NULL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bNOT\s+NULL\b").expect("valid NOT NULL pattern"));

static UNIQUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bUNIQUE\b").expect("valid UNIQUE pattern"));

static PRIMARY_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bPRIMARY\s+KEY\b").expect("valid PRIMARY KEY pattern"));

/// Group 1 marks the `SET DEFAULT` referential action.
static DEFAULT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(SET\s+)?DEFAULT\s+").expect("valid DEFAULT pattern"));

/// Result of a permissive parse step.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Parsed(T),
    Skipped(SkipReason),
}

/// A table body clause that is not a column.
#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraint {
    PrimaryKey(Vec<String>),
    ForeignKey(ParsedForeignKey),
    /// `UNIQUE`, `CHECK`, index definitions: accepted, no effect
    Ignored,
}

/// Parsed input: every table in declaration order plus what was skipped.
#[derive(Debug, Clone, Default)]
pub struct ParsedSchema {
    pub tables: TableRegistry,
    pub skipped: Vec<SkipReason>,
}

/// Parse DDL text into a table registry.
///
/// CREATE TABLE statements are read first, then ALTER TABLE statements,
/// so foreign keys added after the fact can target any declared table.
pub fn parse_ddl(input: &str) -> ParsedSchema {
    let cleaned = strip_comments(input);
    let statements = split_statements(&cleaned);
    let mut schema = ParsedSchema::default();

    for statement in &statements {
        if ALTER_TABLE.is_match(statement) {
            continue;
        }
        match parse_create_table(statement, &mut schema.skipped) {
            Outcome::Parsed(table) => {
                if schema.tables.insert(table).is_some() {
                    debug!(statement = %snippet(statement), "table redeclared, keeping latest definition");
                }
            }
            Outcome::Skipped(reason) => skip(&mut schema.skipped, reason),
        }
    }

    for statement in &statements {
        if !ALTER_TABLE.is_match(statement) {
            continue;
        }
        if let Outcome::Skipped(reason) = apply_alter_table(statement, &mut schema.tables) {
            skip(&mut schema.skipped, reason);
        }
    }

    schema
}

fn skip(skipped: &mut Vec<SkipReason>, reason: SkipReason) {
    debug!(%reason, "skipped");
    skipped.push(reason);
}

/// Parse one `CREATE TABLE` statement. Column clauses that cannot be
/// parsed are dropped and reported through `skipped`.
pub fn parse_create_table(statement: &str, skipped: &mut Vec<SkipReason>) -> Outcome<ParsedTable> {
    let Some(caps) = CREATE_TABLE.captures(statement) else {
        let upper = statement.trim_start().to_uppercase();
        let reason = if upper.starts_with("CREATE") && upper.contains("TABLE") {
            SkipReason::MalformedCreateTable(snippet(statement))
        } else {
            SkipReason::UnsupportedStatement(snippet(statement))
        };
        return Outcome::Skipped(reason);
    };

    let name = unqualify(&caps[1]);
    // The match ends just past the opening paren of the body
    let body_from = caps.get(0).map_or(0, |m| m.end() - 1);
    let Some((body, _)) = balanced_body(statement, body_from) else {
        return Outcome::Skipped(SkipReason::MalformedCreateTable(snippet(statement)));
    };

    let mut table = ParsedTable::new(name);

    for clause in split_top_level(body) {
        if is_table_constraint(clause) {
            match parse_table_constraint(clause) {
                TableConstraint::PrimaryKey(columns) => table.primary_key = Some(columns),
                TableConstraint::ForeignKey(fk) => table.foreign_keys.push(fk),
                TableConstraint::Ignored => {}
            }
            continue;
        }

        match parse_column(clause) {
            Outcome::Parsed(column) => table.columns.push(column),
            Outcome::Skipped(_) => skip(
                skipped,
                SkipReason::UnparsableColumn {
                    table: table.name.clone(),
                    clause: snippet(clause),
                },
            ),
        }
    }

    Outcome::Parsed(table)
}

fn strip_constraint_name(clause: &str) -> &str {
    match CONSTRAINT_NAME.find(clause) {
        Some(m) => &clause[m.end()..],
        None => clause,
    }
}

fn is_table_constraint(clause: &str) -> bool {
    let clause = strip_constraint_name(clause);
    PRIMARY_KEY_CLAUSE.is_match(clause)
        || FOREIGN_KEY.find(clause).is_some_and(|m| m.start() == 0)
        || CHECK_CLAUSE.is_match(clause)
        || is_index_clause(clause)
}

/// Index clauses look like columns whose name is `key`, `index` or
/// `unique` and whose type takes a length. A bare known type name in the
/// index name slot means it is the column.
fn is_index_clause(clause: &str) -> bool {
    let Some(caps) = INDEX_CLAUSE.captures(clause) else {
        return false;
    };
    match caps.get(1) {
        Some(name) => unquote_ident(name.as_str()) != name.as_str() || !is_known_type(name.as_str()),
        None => true,
    }
}

/// Classify a table-level constraint clause.
pub fn parse_table_constraint(clause: &str) -> TableConstraint {
    let clause = strip_constraint_name(clause);

    if let Some(m) = PRIMARY_KEY_CLAUSE.find(clause) {
        return match balanced_body(clause, m.end()) {
            Some((list, _)) => TableConstraint::PrimaryKey(ident_list(list)),
            None => TableConstraint::Ignored,
        };
    }

    match parse_foreign_key_clause(clause) {
        Some(fk) => TableConstraint::ForeignKey(fk),
        None => TableConstraint::Ignored,
    }
}

fn parse_foreign_key_clause(clause: &str) -> Option<ParsedForeignKey> {
    let columns = FOREIGN_KEY.captures(clause).map(|c| ident_list(&c[1]))?;
    let references = REFERENCES.captures(clause)?;
    let (referenced_table, referenced_columns) = referenced_target(&references);

    Some(ParsedForeignKey {
        columns,
        referenced_table,
        referenced_columns,
        on_delete: action(&ON_DELETE, clause),
        on_update: action(&ON_UPDATE, clause),
    })
}

/// Table and column list from a `REFERENCES` match. A missing column list
/// means the target's `id`.
fn referenced_target(caps: &Captures<'_>) -> (String, Vec<String>) {
    let table = unqualify(&caps[1]);
    let columns = caps
        .get(2)
        .map(|m| ident_list(m.as_str()))
        .filter(|cols| !cols.is_empty())
        .unwrap_or_else(|| vec!["id".to_string()]);
    (table, columns)
}

fn action(pattern: &Regex, text: &str) -> Option<ReferentialAction> {
    pattern
        .captures(text)
        .and_then(|c| ReferentialAction::from_sql(&c[1]))
}

/// Parse one column definition such as
/// `author_id INT NOT NULL REFERENCES authors(id) ON DELETE CASCADE`.
pub fn parse_column(clause: &str) -> Outcome<ParsedColumn> {
    let Some(caps) = COLUMN.captures(clause.trim()) else {
        return Outcome::Skipped(SkipReason::UnparsableColumn {
            table: String::new(),
            clause: snippet(clause),
        });
    };

    let name = unquote_ident(&caps[1]);
    let raw_type = caps[2].trim().to_string();
    let rest = caps.get(3).map_or("", |m| m.as_str());

    let primary_key = PRIMARY_KEY.is_match(rest);
    let nullable = !primary_key && !NOT_NULL.is_match(rest);

    let reference = REFERENCES.captures(rest).map(|refs| {
        let (table, columns) = referenced_target(&refs);
        InlineReference {
            table,
            column: columns.into_iter().next().unwrap_or_else(|| "id".to_string()),
            on_delete: action(&ON_DELETE, rest),
            on_update: action(&ON_UPDATE, rest),
        }
    });

    Outcome::Parsed(ParsedColumn {
        name,
        raw_type,
        nullable,
        unique: UNIQUE.is_match(rest),
        primary_key,
        default: default_value(rest),
        reference,
    })
}

/// Value after `DEFAULT`: a quoted string (unquoted), a parenthesized
/// expression, or the next bare token. `DEFAULT NULL` is no default.
fn default_value(rest: &str) -> Option<String> {
    let start = DEFAULT
        .captures_iter(rest)
        .find(|c| c.get(1).is_none())?
        .get(0)?
        .end();
    let value = &rest[start..];
    let mut chars = value.chars();

    let literal = match chars.next()? {
        quote @ ('\'' | '"') => {
            let mut out = String::new();
            let mut chars = chars.peekable();
            while let Some(c) = chars.next() {
                if c == quote {
                    if chars.peek() == Some(&quote) {
                        out.push(quote);
                        chars.next();
                        continue;
                    }
                    break;
                }
                out.push(c);
            }
            return Some(out);
        }
        '(' => {
            let (_, end) = balanced_body(value, 0)?;
            value[..end].to_string()
        }
        _ => value
            .split(|c: char| c.is_whitespace() || c == ',')
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    if literal.is_empty() || literal.eq_ignore_ascii_case("NULL") {
        None
    } else {
        Some(literal)
    }
}

/// Apply one `ALTER TABLE ... FOREIGN KEY (...) REFERENCES t(...)` to an
/// already registered table.
pub fn apply_alter_table(statement: &str, tables: &mut TableRegistry) -> Outcome<()> {
    let Some(caps) = ALTER_TABLE.captures(statement) else {
        return Outcome::Skipped(SkipReason::UnsupportedStatement(snippet(statement)));
    };
    let name = unqualify(&caps[1]);

    let Some(table) = tables.get_mut(&name) else {
        return Outcome::Skipped(SkipReason::AlterUnknownTable(name));
    };

    let Some(columns) = FOREIGN_KEY.captures(statement).map(|c| ident_list(&c[1])) else {
        return Outcome::Skipped(SkipReason::AlterWithoutForeignKey(name));
    };

    let Some(references) = REFERENCES.captures(statement) else {
        return Outcome::Skipped(SkipReason::AlterWithoutReferences(name));
    };
    let (referenced_table, referenced_columns) = referenced_target(&references);

    table.foreign_keys.push(ParsedForeignKey {
        columns,
        referenced_table,
        referenced_columns,
        on_delete: action(&ON_DELETE, statement),
        on_update: action(&ON_UPDATE, statement),
    });

    Outcome::Parsed(())
}

/// First line of a statement, shortened for log and report messages.
fn snippet(text: &str) -> String {
    const MAX: usize = 60;
    let line = text.trim().lines().next().unwrap_or_default().trim();
    match line.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &line[..cut]),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(clause: &str) -> ParsedColumn {
        match parse_column(clause) {
            Outcome::Parsed(col) => col,
            Outcome::Skipped(reason) => panic!("column skipped: {reason}"),
        }
    }

    #[test]
    fn test_parse_simple_table() {
        let sql = r#"
            CREATE TABLE users (
                id INT PRIMARY KEY,
                email VARCHAR(255) NOT NULL UNIQUE
            );
        "#;

        let schema = parse_ddl(sql);
        assert_eq!(schema.tables.len(), 1);

        let users = schema.tables.get("users").unwrap();
        assert_eq!(users.name, "users");
        assert_eq!(users.columns.len(), 2);

        assert_eq!(users.columns[0].name, "id");
        assert!(users.columns[0].primary_key);
        assert!(!users.columns[0].nullable);

        assert_eq!(users.columns[1].name, "email");
        assert_eq!(users.columns[1].raw_type, "VARCHAR(255)");
        assert!(!users.columns[1].nullable);
        assert!(users.columns[1].unique);
    }

    #[test]
    fn test_column_defaults() {
        let col = column("status VARCHAR(20) DEFAULT 'it''s new'");
        assert_eq!(col.default.as_deref(), Some("it's new"));
        assert!(col.nullable);

        let col = column("created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP NOT NULL");
        assert_eq!(col.default.as_deref(), Some("CURRENT_TIMESTAMP"));
        assert!(!col.nullable);

        let col = column("score INT DEFAULT 0");
        assert_eq!(col.default.as_deref(), Some("0"));

        let col = column("ts TIMESTAMP DEFAULT (now())");
        assert_eq!(col.default.as_deref(), Some("(now())"));

        let col = column("note TEXT DEFAULT NULL");
        assert_eq!(col.default, None);
    }

    #[test]
    fn test_inline_reference_with_actions() {
        let col = column("author_id INT NOT NULL REFERENCES public.authors(id) ON DELETE SET NULL ON UPDATE cascade");
        let reference = col.reference.unwrap();
        assert_eq!(reference.table, "authors");
        assert_eq!(reference.column, "id");
        assert_eq!(reference.on_delete, Some(ReferentialAction::SetNull));
        assert_eq!(reference.on_update, Some(ReferentialAction::Cascade));
    }

    #[test]
    fn test_inline_reference_without_column_defaults_to_id() {
        let col = column("owner_id BIGINT REFERENCES owners");
        let reference = col.reference.unwrap();
        assert_eq!(reference.table, "owners");
        assert_eq!(reference.column, "id");
        assert_eq!(reference.on_delete, None);
    }

    #[test]
    fn test_quoted_identifiers() {
        let sql = r#"CREATE TABLE "User Table" (`column name` INT, [other] TEXT, 'quoted' CHAR(2));"#;
        let schema = parse_ddl(sql);
        let table = schema.tables.get("user table").unwrap();
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["column name", "other", "quoted"]);
    }

    #[test]
    fn test_decimal_precision_not_split() {
        let sql = "CREATE TABLE items (id INT, price DECIMAL(10,2) NOT NULL, qty INT);";
        let schema = parse_ddl(sql);
        let items = schema.tables.get("items").unwrap();
        assert_eq!(items.columns.len(), 3);
        assert_eq!(items.columns[1].raw_type, "DECIMAL(10,2)");
    }

    #[test]
    fn test_multiword_types() {
        assert_eq!(column("ratio DOUBLE PRECISION").raw_type, "DOUBLE PRECISION");
        assert_eq!(column("name CHARACTER VARYING(100) NOT NULL").raw_type, "CHARACTER VARYING(100)");
        assert_eq!(column("n INT(11) UNSIGNED").raw_type, "INT(11)");
    }

    #[test]
    fn test_table_constraints() {
        let sql = r#"
            CREATE TABLE IF NOT EXISTS order_lines (
                order_id INT NOT NULL,
                line_no INT NOT NULL,
                product_id INT,
                CONSTRAINT pk_lines PRIMARY KEY (order_id, line_no),
                CONSTRAINT fk_product FOREIGN KEY (product_id) REFERENCES products (id) ON DELETE CASCADE,
                UNIQUE (product_id, line_no),
                CHECK (line_no > 0),
                KEY idx_product (product_id)
            ) ENGINE=InnoDB;
        "#;

        let schema = parse_ddl(sql);
        let table = schema.tables.get("order_lines").unwrap();
        assert_eq!(table.columns.len(), 3);
        assert_eq!(
            table.primary_key,
            Some(vec!["order_id".to_string(), "line_no".to_string()])
        );
        assert_eq!(table.foreign_keys.len(), 1);

        let fk = &table.foreign_keys[0];
        assert_eq!(fk.columns, vec!["product_id"]);
        assert_eq!(fk.referenced_table, "products");
        assert_eq!(fk.referenced_columns, vec!["id"]);
        assert_eq!(fk.on_delete, Some(ReferentialAction::Cascade));
        assert_eq!(fk.on_update, None);
        assert!(schema.skipped.is_empty());
    }

    #[test]
    fn test_unique_column_name_is_not_a_constraint() {
        let sql = "CREATE TABLE t (unique_code VARCHAR(10), check_number INT, key_name TEXT);";
        let schema = parse_ddl(sql);
        assert_eq!(schema.tables.get("t").unwrap().columns.len(), 3);
    }

    #[test]
    fn test_keyword_named_columns_are_columns() {
        let sql = r#"
            CREATE TABLE settings (
                id INT PRIMARY KEY,
                key VARCHAR(100) NOT NULL,
                index INT(11),
                unique CHAR(8),
                `check` DECIMAL(5, 2),
                value TEXT,
                KEY idx_key (key),
                INDEX `idx_value` (value(10)),
                UNIQUE INDEX (unique)
            );
        "#;
        let schema = parse_ddl(sql);
        let settings = schema.tables.get("settings").unwrap();
        let names: Vec<&str> = settings.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "key", "index", "unique", "check", "value"]);
        assert_eq!(settings.columns[1].raw_type, "VARCHAR(100)");
        assert!(schema.skipped.is_empty());
    }

    #[test]
    fn test_set_default_action_is_not_a_default_value() {
        let col = column("owner_id INT REFERENCES owners(id) ON DELETE SET DEFAULT ON UPDATE CASCADE");
        assert_eq!(col.default, None);
        let reference = col.reference.unwrap();
        assert_eq!(reference.on_delete, Some(ReferentialAction::SetDefault));
        assert_eq!(reference.on_update, Some(ReferentialAction::Cascade));

        let col = column("owner_id INT DEFAULT 1 REFERENCES owners(id) ON DELETE SET DEFAULT");
        assert_eq!(col.default.as_deref(), Some("1"));

        let col = column("owner_id INT REFERENCES owners(id) ON UPDATE SET DEFAULT DEFAULT 7");
        assert_eq!(col.default.as_deref(), Some("7"));
    }

    #[test]
    fn test_single_char_unicode_identifiers() {
        let schema = parse_ddl("CREATE TABLE t (id INT PRIMARY KEY, é INT); CREATE TABLE 表 (名 TEXT);");
        assert_eq!(schema.tables.get("t").unwrap().columns[1].name, "é");
        assert_eq!(schema.tables.get("表").unwrap().columns[0].name, "名");
    }

    #[test]
    fn test_alter_table_adds_forward_reference() {
        let sql = r#"
            ALTER TABLE ONLY public.books
                ADD CONSTRAINT books_author_fk FOREIGN KEY (author_id) REFERENCES public.authors(id) ON UPDATE RESTRICT;
            CREATE TABLE public.books (id INT PRIMARY KEY, author_id INT);
            CREATE TABLE public.authors (id INT PRIMARY KEY);
        "#;

        let schema = parse_ddl(sql);
        let books = schema.tables.get("books").unwrap();
        assert_eq!(books.foreign_keys.len(), 1);
        assert_eq!(books.foreign_keys[0].referenced_table, "authors");
        assert_eq!(books.foreign_keys[0].on_update, Some(ReferentialAction::Restrict));
        assert_eq!(books.foreign_keys[0].on_delete, None);
    }

    #[test]
    fn test_alter_table_skips() {
        let sql = r#"
            CREATE TABLE books (id INT PRIMARY KEY);
            ALTER TABLE ghosts ADD FOREIGN KEY (x) REFERENCES y(id);
            ALTER TABLE books ADD COLUMN title TEXT;
            ALTER TABLE books ADD FOREIGN KEY (author_id);
        "#;

        let schema = parse_ddl(sql);
        assert!(schema.tables.get("books").unwrap().foreign_keys.is_empty());
        assert_eq!(
            schema.skipped,
            vec![
                SkipReason::AlterUnknownTable("ghosts".to_string()),
                SkipReason::AlterWithoutForeignKey("books".to_string()),
                SkipReason::AlterWithoutReferences("books".to_string()),
            ]
        );
    }

    #[test]
    fn test_unsupported_statements_are_skipped() {
        let sql = r#"
            SET client_encoding = 'UTF8';
            CREATE INDEX idx ON t (a);
            CREATE TABLE t AS SELECT 1;
            INSERT INTO t VALUES (1);
            CREATE TABLE t (id INT);
        "#;

        let schema = parse_ddl(sql);
        assert_eq!(schema.tables.len(), 1);
        assert_eq!(schema.skipped.len(), 4);
        assert!(matches!(schema.skipped[2], SkipReason::MalformedCreateTable(_)));
    }

    #[test]
    fn test_unparsable_column_is_dropped() {
        let sql = "CREATE TABLE t (id INT, 42, name TEXT);";
        let schema = parse_ddl(sql);
        let table = schema.tables.get("t").unwrap();
        assert_eq!(table.columns.len(), 2);
        assert!(matches!(
            &schema.skipped[0],
            SkipReason::UnparsableColumn { table, .. } if table == "t"
        ));
    }

    #[test]
    fn test_comments_are_ignored() {
        let sql = r#"
            -- users table
            CREATE TABLE users (
                id INT PRIMARY KEY, -- surrogate key
                /* display name */ name TEXT
            );
        "#;
        let schema = parse_ddl(sql);
        let users = schema.tables.get("users").unwrap();
        assert_eq!(users.columns.len(), 2);
        assert_eq!(users.columns[1].name, "name");
    }
}
