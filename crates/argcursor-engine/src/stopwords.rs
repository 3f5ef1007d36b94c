use std::collections::HashSet;

use crate::cursor::ArgsCursor;
use crate::error::ArgsResult;
use crate::flags::ExtractFlags;
use crate::token::Token;

/// Terms used when no custom list is configured.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "is", "the", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in",
    "into", "it", "no", "not", "of", "on", "or", "such", "that", "their", "then", "there",
    "these", "they", "this", "to", "was", "will", "with",
];

/// A case-insensitive set of terms.
///
/// Terms are folded to lowercase when inserted and when looked up, so
/// `Hello` in the list matches a query for `hello` and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordList {
    terms: HashSet<String>,
}

impl StopWordList {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: HashSet<String> = terms
            .into_iter()
            .map(|term| term.as_ref().to_lowercase())
            .collect();
        log::trace!("built stopword list with {} terms", terms.len());
        Self { terms }
    }

    /// Builds a list from a count-prefixed group of arguments, e.g.
    /// `3 foo bar baz`.
    pub fn from_cursor<T: Token>(ac: &mut ArgsCursor<'_, T>) -> ArgsResult<Self> {
        let start = ac.position();
        let mut group = ac.get_var_args()?;
        let mut terms = Vec::with_capacity(group.count());
        for _ in 0..group.count() {
            match group.get_str(ExtractFlags::NONE) {
                Ok(term) => terms.push(term),
                Err(err) => {
                    *ac = ArgsCursor::with_position(ac.tokens(), start);
                    return Err(err);
                }
            }
        }
        Ok(Self::new(terms))
    }

    pub fn contains(&self, term: &str) -> bool {
        !term.is_empty() && self.terms.contains(&term.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in lowercase, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl Default for StopWordList {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS)
    }
}
