//! Escape sequence decoding.
//!
//! String literals are captured raw by the parser; callers decode escapes
//! with [`collapse_escape_sequences`] once they know they want the text.

/// Decodes backslash escapes in `raw`.
///
/// `\n`, `\t`, `\r` and `\0` map to their control characters. Any other
/// escaped character stands for itself, so `\"` becomes `"` and `\\` becomes
/// `\`. A trailing lone backslash is kept as is.
#[must_use]
pub fn collapse_escape_sequences(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
