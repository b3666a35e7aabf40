//! # Punctuation Templates
//!
//! Templates use `#` for a digit placeholder; every other character is a
//! literal inserted verbatim (`###.###.###-##` for CPF).

use crate::error::FormatMismatch;

/// Placeholder character in a template.
pub const PLACEHOLDER: char = '#';

/// Number of placeholders in a template.
pub fn placeholder_count(template: &str) -> usize {
    template.chars().filter(|&c| c == PLACEHOLDER).count()
}

/// Render `digits` through `template`.
///
/// # Errors
///
/// Returns [`FormatMismatch`] when the number of characters in `digits`
/// differs from the number of placeholders in `template`.
pub fn format(digits: &str, template: &str) -> Result<String, FormatMismatch> {
    let placeholders = placeholder_count(template);
    let supplied = digits.chars().count();
    if placeholders != supplied {
        return Err(FormatMismatch {
            placeholders,
            digits: supplied,
        });
    }
    Ok(apply_template(digits.chars(), template))
}

/// Remove every character that is not an ASCII digit.
pub fn strip(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Fill placeholders from `chars` in order. Callers guarantee the counts
/// agree; surplus characters are dropped and missing ones leave the
/// template truncated.
pub(crate) fn apply_template(chars: impl IntoIterator<Item = char>, template: &str) -> String {
    let mut chars = chars.into_iter();
    let mut out = String::with_capacity(template.len());
    for t in template.chars() {
        if t == PLACEHOLDER {
            match chars.next() {
                Some(c) => out.push(c),
                None => break,
            }
        } else {
            out.push(t);
        }
    }
    out
}
