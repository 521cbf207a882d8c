//! Field-mapping body parsing and format verb inference.

use std::fmt;

/// One `key: expression` entry of a mapping literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Mapping key with surrounding quotes removed.
    pub key: String,
    /// Right-hand side expression, trimmed.
    pub expression: String,
}

/// Format verb emitted for a field placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVerb {
    Integer,
    Boolean,
    String,
}

impl FormatVerb {
    /// Infer the verb from the textual shape of an expression.
    ///
    /// Precedence, first match wins:
    /// 1. length-of-collection calls (`len(...)`) are integers
    /// 2. numeric literals are integers
    /// 3. `true` / `false` are booleans
    /// 4. everything else is a string
    pub fn infer(expression: &str) -> Self {
        if expression.contains("len(") || is_numeric_literal(expression) {
            FormatVerb::Integer
        } else if matches!(expression, "true" | "false") {
            FormatVerb::Boolean
        } else {
            FormatVerb::String
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormatVerb::Integer => "%d",
            FormatVerb::Boolean => "%t",
            FormatVerb::String => "%s",
        }
    }
}

impl fmt::Display for FormatVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// All digits, or digits with a single decimal point.
fn is_numeric_literal(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    let dots = value.chars().filter(|&c| c == '.').count();
    digits > 0 && dots <= 1 && digits + dots == value.len()
}

/// Parse a mapping body into ordered fields.
///
/// The body is split into lines; blank lines and `//` comment lines are skipped.
/// Each line is then split at top-level commas, so both one-entry-per-line and
/// single-line mappings work. An entry is a field only if it contains `:`, and
/// it is split on the first one.
///
/// Returns no fields at all if any line has unbalanced brackets or an
/// unterminated string, since that means an expression continues across lines.
pub fn parse_fields(body: &str) -> Vec<Field> {
    let mut fields = Vec::new();

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let Some(entries) = split_entries(line) else {
            return Vec::new();
        };
        fields.extend(entries.into_iter().filter_map(parse_entry));
    }

    fields
}

fn parse_entry(entry: &str) -> Option<Field> {
    let (key, value) = entry.split_once(':')?;

    let key = key.trim().trim_matches(|c| c == '"' || c == '`');
    let value = value.trim();
    let value = value.strip_suffix(',').unwrap_or(value).trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some(Field {
        key: key.to_string(),
        expression: value.to_string(),
    })
}

/// Split a line at commas outside of brackets and string literals, dropping a
/// trailing `//` comment. `None` if brackets or quotes do not balance.
fn split_entries(line: &str) -> Option<Vec<&str>> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;
    let mut end = line.len();

    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' && q != '`' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                entries.push(&line[start..i]);
                start = i + 1;
            }
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                end = i;
                break;
            }
            _ => {}
        }
    }

    if depth != 0 || quote.is_some() {
        return None;
    }
    entries.push(&line[start..end]);

    Some(
        entries
            .into_iter()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .collect(),
    )
}
