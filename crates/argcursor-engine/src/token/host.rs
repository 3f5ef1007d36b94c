//! Host-managed strings and their strict conversion rules.

use std::fmt;

/// A binary-safe, length-prefixed string owned by a host environment.
///
/// Unlike raw text, a host string carries its own length and may contain
/// interior NUL bytes. Numeric conversion is strict: no surrounding
/// whitespace, no `+` sign and no redundant leading zeros.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct HostString {
    bytes: Vec<u8>,
}

impl HostString {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for HostString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostString({:?})", String::from_utf8_lossy(&self.bytes))
    }
}

impl From<&str> for HostString {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for HostString {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&[u8]> for HostString {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for HostString {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

/// Canonical decimal integers only: `0`, or an optional `-` followed by a
/// non-zero digit and more digits. Overflow is an error, not a saturation.
pub(super) fn parse_i64(bytes: &[u8]) -> Option<i64> {
    if bytes == b"0" {
        return Some(0);
    }
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };
    if !matches!(digits.first(), Some(b'1'..=b'9')) || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    // Accumulate downwards so i64::MIN is representable.
    let mut value: i64 = 0;
    for &digit in digits {
        value = value
            .checked_mul(10)?
            .checked_sub(i64::from(digit - b'0'))?;
    }
    if negative { Some(value) } else { value.checked_neg() }
}

/// Doubles without leading whitespace. NaN, overflow and underflow are
/// rejected; a literal infinity is accepted.
pub(super) fn parse_f64(bytes: &[u8]) -> Option<f64> {
    let text = std::str::from_utf8(bytes).ok()?;
    if text.starts_with(|c: char| c.is_ascii_whitespace()) {
        return None;
    }
    let value = text.parse::<f64>().ok()?;
    if value.is_nan() {
        return None;
    }
    if value.is_infinite() && !names_infinity(text) {
        return None;
    }
    if value == 0.0 && has_nonzero_mantissa(text) {
        return None;
    }
    Some(value)
}

fn names_infinity(text: &str) -> bool {
    let unsigned = text.trim_start_matches(|c: char| c == '+' || c == '-');
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn has_nonzero_mantissa(text: &str) -> bool {
    text.bytes()
        .take_while(|b| !matches!(b, b'e' | b'E'))
        .any(|b| matches!(b, b'1'..=b'9'))
}
