//! Text-level scanning for DDL input: comment removal, statement splitting,
//! paren-aware clause splitting and identifier unquoting.
//!
//! Everything here works on plain index scans. None of it uses regular
//! expressions, so adversarial input (thousands of unmatched `/*`) stays
//! linear.

/// Remove `/* ... */` block comments and `--` line comments.
///
/// An unterminated block comment discards everything after its opener.
/// Line comments are cut at the first `--` on the line, even inside a
/// string literal.
pub fn strip_comments(input: &str) -> String {
    let without_blocks = strip_block_comments(input);
    strip_line_comments(&without_blocks)
}

fn strip_block_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find("/*") {
        out.push_str(&rest[..open]);
        match rest[open + 2..].find("*/") {
            Some(close) => {
                // Keep tokens on either side apart
                out.push(' ');
                rest = &rest[open + 2 + close + 2..];
            }
            None => return out,
        }
    }

    out.push_str(rest);
    out
}

fn strip_line_comments(input: &str) -> String {
    input
        .lines()
        .map(|line| match line.find("--") {
            Some(pos) => &line[..pos],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split cleaned text into statements on `;`.
///
/// Semicolons inside string literals are not special; a quoted `;` ends
/// the statement.
pub fn split_statements(input: &str) -> Vec<&str> {
    input
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split on commas at paren depth zero.
///
/// `id INT, price DECIMAL(10,2)` yields two parts. Empty parts are dropped.
pub fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);

    parts
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Find the parenthesised body starting at the first `(` at or after
/// `from`. Returns the inner text and the byte offset just past the
/// matching `)`.
///
/// An unbalanced body runs to the end of the input.
pub fn balanced_body(input: &str, from: usize) -> Option<(&str, usize)> {
    let open = from + input.get(from..)?.find('(')?;
    let mut depth: usize = 0;

    for (i, c) in input[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let close = open + i;
                    return Some((&input[open + 1..close], close + 1));
                }
            }
            _ => {}
        }
    }

    Some((&input[open + 1..], input.len()))
}

/// Strip one layer of identifier quoting (`"x"`, `'x'`, `` `x` ``, `[x]`).
///
/// Doubled quote characters inside the identifier collapse to one.
pub fn unquote_ident(raw: &str) -> String {
    let raw = raw.trim();
    let mut chars = raw.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return raw.to_string();
    };

    let inner = &raw[first.len_utf8()..raw.len() - last.len_utf8()];
    match (first, last) {
        ('[', ']') => inner.to_string(),
        ('"', '"') => inner.replace("\"\"", "\""),
        ('`', '`') => inner.replace("``", "`"),
        ('\'', '\'') => inner.replace("''", "'"),
        _ => raw.to_string(),
    }
}

/// Take the last segment of a possibly schema-qualified name and unquote
/// it: `public."Users"` becomes `Users`.
pub fn unqualify(raw: &str) -> String {
    let mut last_start = 0;
    let mut quote: Option<char> = None;

    for (i, c) in raw.char_indices() {
        match (quote, c) {
            (None, '"' | '`' | '\'') => quote = Some(c),
            (None, '[') => quote = Some(']'),
            (Some(q), c) if c == q => quote = None,
            (None, '.') => last_start = i + 1,
            _ => {}
        }
    }

    unquote_ident(&raw[last_start..])
}

/// Split a parenthesised identifier list (`a_id, "b_id"`) into bare names.
pub fn ident_list(input: &str) -> Vec<String> {
    split_top_level(input)
        .into_iter()
        .map(|part| {
            // `col ASC`, `col(10)` in index-style lists keep only the name
            let name = part
                .split(|c: char| c.is_whitespace() || c == '(')
                .next()
                .unwrap_or(part);
            unquote_ident(name)
        })
        .filter(|name| !name.is_empty())
        .collect()
}
