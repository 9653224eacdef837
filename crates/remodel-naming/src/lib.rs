//! Naming helpers for remodel.
//!
//! This crate turns host-supplied identifiers (qualified type paths, option and
//! relationship names) into the forms used in rendered model source. It has no
//! dependencies and can be used by any other remodel crate.

// ============================================================================
// Type Naming
// ============================================================================

/// Strip the module path from a qualified type name.
///
/// Both `::` and `.` are accepted as path separators, so names coming from
/// different metadata layers reduce to the same simple name.
///
/// # Examples
/// ```
/// use remodel_naming::demodulize;
///
/// assert_eq!(demodulize("DataMapper::Property::Serial"), "Serial");
/// assert_eq!(demodulize("DataMapper.Resource"), "Resource");
/// assert_eq!(demodulize("String"), "String");
/// ```
pub fn demodulize(name: &str) -> &str {
    let after_colons = match name.rfind("::") {
        Some(idx) => &name[idx + 2..],
        None => name,
    };
    match after_colons.rfind('.') {
        Some(idx) => &after_colons[idx + 1..],
        None => after_colons,
    }
}

// ============================================================================
// Symbol Naming
// ============================================================================

/// Returns true when `name` can be written as a bare symbol (`:name`).
///
/// A bare name starts with a letter or underscore, continues with
/// alphanumerics or underscores, and may end with a single `?`, `!` or `=`.
///
/// # Examples
/// ```
/// use remodel_naming::is_bare_identifier;
///
/// assert!(is_bare_identifier("unique_index"));
/// assert!(is_bare_identifier("admin?"));
/// assert!(!is_bare_identifier("first-name"));
/// assert!(!is_bare_identifier("1st"));
/// ```
pub fn is_bare_identifier(name: &str) -> bool {
    let body = name
        .strip_suffix(['?', '!', '='])
        .unwrap_or(name);

    let mut chars = body.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Render a name as a symbol literal.
///
/// # Examples
/// ```
/// use remodel_naming::symbol_literal;
///
/// assert_eq!(symbol_literal("project_tasks"), ":project_tasks");
/// assert_eq!(symbol_literal("first-name"), ":\"first-name\"");
/// ```
pub fn symbol_literal(name: &str) -> String {
    if is_bare_identifier(name) {
        format!(":{}", name)
    } else {
        format!(":{}", quote(name))
    }
}

/// Double-quote `value`, escaping characters that would otherwise end or
/// interpolate the literal.
///
/// # Examples
/// ```
/// use remodel_naming::quote;
///
/// assert_eq!(quote("plain"), "\"plain\"");
/// assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
/// assert_eq!(quote("#{x}"), "\"\\#{x}\"");
/// ```
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => out.push_str("\\#"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Type Naming Tests
    // ========================================================================

    #[test]
    fn test_demodulize_qualified() {
        assert_eq!(demodulize("DataMapper::Types::Serial"), "Serial");
        assert_eq!(demodulize("DataMapper::Property::DateTime"), "DateTime");
        assert_eq!(demodulize("::Resource"), "Resource");
    }

    #[test]
    fn test_demodulize_simple() {
        assert_eq!(demodulize("Integer"), "Integer");
        assert_eq!(demodulize(""), "");
    }

    #[test]
    fn test_demodulize_dotted() {
        assert_eq!(demodulize("models.ProjectTask"), "ProjectTask");
    }

    // ========================================================================
    // Symbol Naming Tests
    // ========================================================================

    #[test]
    fn test_is_bare_identifier() {
        assert!(is_bare_identifier("id"));
        assert!(is_bare_identifier("_private"));
        assert!(is_bare_identifier("updated_at"));
        assert!(is_bare_identifier("valid!"));
        assert!(!is_bare_identifier(""));
        assert!(!is_bare_identifier("?"));
        assert!(!is_bare_identifier("with space"));
        assert!(!is_bare_identifier("a??"));
    }

    #[test]
    fn test_symbol_literal_quotes_odd_names() {
        assert_eq!(symbol_literal("key"), ":key");
        assert_eq!(symbol_literal("has space"), ":\"has space\"");
        assert_eq!(symbol_literal(""), ":\"\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote("line\nbreak"), "\"line\\nbreak\"");
        assert_eq!(quote("tab\there"), "\"tab\\there\"");
        assert_eq!(quote("#hash"), "\"#hash\"");
        assert_eq!(quote("#@ivar"), "\"\\#@ivar\"");
    }
}
