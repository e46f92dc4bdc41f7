//! DOT label escaping.
//!
//! Node labels in the rendered control flow graph contain statements such as `c0 = x1 < y0`,
//! so comparison operators and quotes must be escaped before Graphviz sees them.

/// Escapes a string for use inside a quoted DOT label.
///
/// Quotes, backslashes, angle brackets, braces and pipes are prefixed with a backslash,
/// newlines become the `\n` escape and carriage returns are dropped.
///
/// # Examples
///
/// ```rust
/// use domssa::utils::escape_dot;
///
/// assert_eq!(escape_dot("c0 = x1 < y0"), "c0 = x1 \\< y0");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' | '"' | '<' | '>' | '{' | '}' | '|' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}
