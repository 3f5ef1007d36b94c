//! C library parsing rules for plain text tokens.

/// `isspace` in the "C" locale.
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// The text a C string reader sees: everything before the first NUL.
pub(super) fn until_nul(text: &str) -> &str {
    match text.find('\0') {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Decimal integer; leading whitespace and a sign are accepted, nothing may
/// trail the digits. An empty token converts to zero.
pub(super) fn parse_i64(text: &str) -> Option<i64> {
    let text = until_nul(text);
    if text.is_empty() {
        return Some(0);
    }
    let value = text.trim_start_matches(is_c_space).parse::<i64>().ok()?;
    // A saturating parser reports overflow as the extreme values, so those
    // are never trusted.
    if value == i64::MIN || value == i64::MAX {
        return None;
    }
    Some(value)
}

/// Decimal double; overflow to infinity is rejected, NaN is not. An empty
/// token converts to zero.
pub(super) fn parse_f64(text: &str) -> Option<f64> {
    let text = until_nul(text);
    if text.is_empty() {
        return Some(0.0);
    }
    let value = text.trim_start_matches(is_c_space).parse::<f64>().ok()?;
    if value.is_infinite() {
        return None;
    }
    Some(value)
}
