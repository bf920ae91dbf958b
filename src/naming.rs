//! Identifier case conversion for entity and field names.

/// Columns inherited from a common base record. They never become fields.
const BASE_FIELDS: &[&str] = &[
    "id",
    "created_at",
    "updated_at",
    "deleted_at",
    "created_by",
    "updated_by",
    "deleted_by",
    "created_date",
    "last_modified_date",
    "last_modified_by",
    "deleted",
    "is_deleted",
    "version",
];

/// Whether a column belongs to the base/audit set. Matches snake_case and
/// camelCase spellings (`created_at`, `createdAt`).
pub fn is_base_field(column: &str) -> bool {
    let normalized: String = column
        .chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect();
    BASE_FIELDS
        .iter()
        .any(|base| base.replace('_', "") == normalized)
}

fn words(name: &str) -> Vec<String> {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| {
            if w.chars().all(|c| !c.is_lowercase()) {
                w.to_lowercase()
            } else {
                w.to_string()
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn decapitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `first_name` -> `firstName`, `FIRST_NAME` -> `firstName`.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::new();
    for (i, word) in words(name).iter().enumerate() {
        if i == 0 {
            out.push_str(&decapitalize(word));
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// `order_items` -> `OrderItems`.
pub fn to_pascal_case(name: &str) -> String {
    words(name).iter().map(|w| capitalize(w)).collect()
}

/// Drop one trailing `s` unless the word ends in `ss`.
pub fn singularize(name: &str) -> &str {
    let lower = name.to_lowercase();
    if lower.ends_with('s') && !lower.ends_with("ss") {
        &name[..name.len() - 1]
    } else {
        name
    }
}

/// Entity name for a table: `order_items` -> `OrderItem`.
pub fn entity_name(table: &str) -> String {
    to_pascal_case(singularize(table))
}
