//! Token representations.
//!
//! A cursor is generic over [`Token`], which supplies the text view and the
//! numeric converters for one representation. Raw text (`str`, `String`,
//! `CStr`) is parsed with C library rules; [`HostString`] values are parsed
//! with the stricter rules a host environment applies to its own strings.

mod host;
mod raw;

pub use host::HostString;

use serde::{Deserialize, Serialize};
use std::ffi::{CStr, CString};

/// How tokens are stored and converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Plain text buffers.
    #[default]
    Raw,
    /// Length-prefixed strings owned by a host environment.
    Host,
}

/// Capability a token type provides to the cursor.
pub trait Token {
    const REPRESENTATION: Representation;

    /// The token contents.
    fn as_bytes(&self) -> &[u8];

    /// Parse the whole token as a signed integer.
    fn parse_i64(&self) -> Option<i64>;

    /// Parse the whole token as a double.
    fn parse_f64(&self) -> Option<f64>;
}

/// Raw text ends at the first NUL, as it would for a C reader.
impl Token for str {
    const REPRESENTATION: Representation = Representation::Raw;

    fn as_bytes(&self) -> &[u8] {
        raw::until_nul(self).as_bytes()
    }

    fn parse_i64(&self) -> Option<i64> {
        raw::parse_i64(self)
    }

    fn parse_f64(&self) -> Option<f64> {
        raw::parse_f64(self)
    }
}

impl Token for String {
    const REPRESENTATION: Representation = Representation::Raw;

    fn as_bytes(&self) -> &[u8] {
        Token::as_bytes(self.as_str())
    }

    fn parse_i64(&self) -> Option<i64> {
        raw::parse_i64(self)
    }

    fn parse_f64(&self) -> Option<f64> {
        raw::parse_f64(self)
    }
}

impl Token for CStr {
    const REPRESENTATION: Representation = Representation::Raw;

    fn as_bytes(&self) -> &[u8] {
        self.to_bytes()
    }

    fn parse_i64(&self) -> Option<i64> {
        self.to_str().ok().and_then(raw::parse_i64)
    }

    fn parse_f64(&self) -> Option<f64> {
        self.to_str().ok().and_then(raw::parse_f64)
    }
}

impl Token for CString {
    const REPRESENTATION: Representation = Representation::Raw;

    fn as_bytes(&self) -> &[u8] {
        self.as_c_str().to_bytes()
    }

    fn parse_i64(&self) -> Option<i64> {
        self.as_c_str().parse_i64()
    }

    fn parse_f64(&self) -> Option<f64> {
        self.as_c_str().parse_f64()
    }
}

impl Token for HostString {
    const REPRESENTATION: Representation = Representation::Host;

    fn as_bytes(&self) -> &[u8] {
        HostString::as_bytes(self)
    }

    fn parse_i64(&self) -> Option<i64> {
        host::parse_i64(HostString::as_bytes(self))
    }

    fn parse_f64(&self) -> Option<f64> {
        host::parse_f64(HostString::as_bytes(self))
    }
}

impl<T: Token + ?Sized> Token for &T {
    const REPRESENTATION: Representation = T::REPRESENTATION;

    fn as_bytes(&self) -> &[u8] {
        (**self).as_bytes()
    }

    fn parse_i64(&self) -> Option<i64> {
        (**self).parse_i64()
    }

    fn parse_f64(&self) -> Option<f64> {
        (**self).parse_f64()
    }
}
