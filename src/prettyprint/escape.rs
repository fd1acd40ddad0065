//! Identifier escaping for map keys, node labels, and relationship types.

/// True when `identifier` matches the shell's bare-word rule: a Unicode
/// letter or underscore followed by Unicode letters, digits, or underscores.
fn is_bare(identifier: &str) -> bool {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphabetic() || c.is_ascii_digit() || c == '_')
}

/// Escapes an identifier for output.
///
/// Bare identifiers pass through unchanged; anything else is wrapped in
/// backticks with interior backticks doubled, so the output pastes back
/// into the query language as the same identifier. Applies to identifiers
/// only; property values are handled by [`super::render`] and are never
/// escaped here.
pub fn escape(identifier: &str) -> String {
    if is_bare(identifier) {
        identifier.to_string()
    } else {
        format!("`{}`", identifier.replace('`', "``"))
    }
}
