//! Typed argument cursor for command dispatchers.
//!
//! ```
//! use argcursor_engine::{ArgsCursor, ArgsError, ExtractFlags};
//!
//! let args = ["LIMIT", "0", "10"];
//! let mut ac = ArgsCursor::new(&args);
//! assert!(ac.advance_if_match("limit"));
//! let offset = ac.get_u64(ExtractFlags::NONE)?;
//! let count = ac.get_u32(ExtractFlags::REQUIRE_AT_LEAST_ONE)?;
//! assert_eq!((offset, count), (0, 10));
//! # Ok::<(), ArgsError>(())
//! ```

pub mod cursor;
pub mod error;
pub mod flags;
pub mod stopwords;
pub mod token;

// Re-export key types for easier usage
pub use cursor::ArgsCursor;
pub use error::{ArgsError, ArgsResult};
pub use flags::ExtractFlags;
pub use stopwords::{DEFAULT_STOPWORDS, StopWordList};
pub use token::{HostString, Representation, Token};
