use crate::error::{ArgsError, ArgsResult};
use crate::flags::ExtractFlags;
use crate::token::{Representation, Token};

/// `[-2^63, 2^63)`: the doubles that truncate into an `i64`.
const I64_TRUNCATABLE: std::ops::Range<f64> =
    -9_223_372_036_854_775_808.0..9_223_372_036_854_775_808.0;

/// A cursor over the positional arguments of one command.
///
/// Tokens are borrowed and never modified; only the position moves. Each
/// extraction reads the current token, converts it and, on success, steps
/// forward unless [`ExtractFlags::no_advance`] is set. A failed extraction
/// never moves the cursor.
///
/// Advancing is refused when it would land exactly on the end, so reading
/// the final token leaves the cursor on it. Exhaustion is therefore only
/// observed on an empty cursor, or after [`ArgsCursor::get_slice`] consumed
/// the remainder.
#[derive(Debug)]
pub struct ArgsCursor<'a, T> {
    tokens: &'a [T],
    position: usize,
}

impl<T> Clone for ArgsCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArgsCursor<'_, T> {}

impl<'a, T> ArgsCursor<'a, T> {
    /// Creates a cursor positioned on the first token.
    pub fn new(tokens: &'a [T]) -> Self {
        Self::with_position(tokens, 0)
    }

    /// Creates a cursor at `position`, which must not exceed `tokens.len()`.
    pub fn with_position(tokens: &'a [T], position: usize) -> Self {
        debug_assert!(position <= tokens.len());
        Self { tokens, position }
    }

    /// Index of the next unread token.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of tokens.
    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    /// Tokens from the current position onwards.
    pub fn remaining(&self) -> usize {
        self.count().saturating_sub(self.position)
    }

    /// True once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.count()
    }

    /// The full token sequence, independent of position.
    pub fn tokens(&self) -> &'a [T] {
        self.tokens
    }

    /// The token under the cursor.
    pub fn current(&self) -> ArgsResult<&'a T> {
        self.tokens.get(self.position).ok_or(ArgsError::NoArgument)
    }

    /// Moves forward by `n` tokens, provided that leaves a token under the
    /// cursor.
    pub fn advance_by(&mut self, n: usize) -> ArgsResult<()> {
        match self.position.checked_add(n) {
            Some(next) if next < self.count() => {
                self.position = next;
                Ok(())
            }
            _ => Err(ArgsError::NoArgument),
        }
    }

    pub fn advance(&mut self) -> ArgsResult<()> {
        self.advance_by(1)
    }

    /// Splits off the next `n` tokens as their own cursor and moves past them.
    pub fn get_slice(&mut self, n: usize) -> ArgsResult<ArgsCursor<'a, T>> {
        let end = self.position.checked_add(n).ok_or(ArgsError::NoArgument)?;
        let tokens = self
            .tokens
            .get(self.position..end)
            .ok_or(ArgsError::NoArgument)?;
        self.position = end;
        Ok(ArgsCursor::new(tokens))
    }

    fn maybe_advance(&mut self, flags: ExtractFlags) {
        if !flags.no_advance && self.advance().is_err() {
            log::trace!(
                "cursor kept on final token ({} of {})",
                self.position + 1,
                self.count()
            );
        }
    }
}

impl<'a, T: Token> ArgsCursor<'a, T> {
    /// Which conversion rules apply to this cursor's tokens.
    pub fn representation(&self) -> Representation {
        T::REPRESENTATION
    }

    /// Reads a signed integer.
    ///
    /// Tokens that are not integers get a second chance as doubles: `3.00`
    /// is accepted as `3`, and `3.14` becomes `3` only with
    /// [`ExtractFlags::coalesce_fractional`].
    pub fn get_i64(&mut self, flags: ExtractFlags) -> ArgsResult<i64> {
        let token = self.current()?;
        let value = match token.parse_i64() {
            Some(value) => value,
            None => integer_from_double(token, flags)?,
        };
        if flags.violates_range(value) {
            return Err(ArgsError::LimitExceeded);
        }
        self.maybe_advance(flags);
        Ok(value)
    }

    /// Reads a non-negative integer; the sign check is always applied.
    pub fn get_u64(&mut self, flags: ExtractFlags) -> ArgsResult<u64> {
        self.get_bounded(flags.require_nonnegative())
    }

    /// Reads a non-negative integer no larger than `u32::MAX`.
    pub fn get_u32(&mut self, flags: ExtractFlags) -> ArgsResult<u32> {
        self.get_bounded(flags.require_nonnegative())
    }

    /// Reads an integer within `i32` range.
    pub fn get_i32(&mut self, flags: ExtractFlags) -> ArgsResult<i32> {
        self.get_bounded(flags)
    }

    fn get_bounded<N: TryFrom<i64>>(&mut self, flags: ExtractFlags) -> ArgsResult<N> {
        let wide = self.get_i64(flags.no_advance())?;
        let value = N::try_from(wide).map_err(|_| ArgsError::LimitExceeded)?;
        self.maybe_advance(flags);
        Ok(value)
    }

    /// Reads a double. Range flags apply to the value as parsed.
    pub fn get_f64(&mut self, flags: ExtractFlags) -> ArgsResult<f64> {
        let token = self.current()?;
        let value = token.parse_f64().ok_or(ArgsError::ParseFailure)?;
        if flags.violates_range(value) {
            return Err(ArgsError::LimitExceeded);
        }
        self.maybe_advance(flags);
        Ok(value)
    }

    /// Borrows the current token's bytes.
    pub fn get_string(&mut self, flags: ExtractFlags) -> ArgsResult<&'a [u8]> {
        let bytes = self.current()?.as_bytes();
        self.maybe_advance(flags);
        Ok(bytes)
    }

    /// Like [`ArgsCursor::get_string`], but the token must be UTF-8.
    pub fn get_str(&mut self, flags: ExtractFlags) -> ArgsResult<&'a str> {
        let text = std::str::from_utf8(self.current()?.as_bytes())
            .map_err(|_| ArgsError::ParseFailure)?;
        self.maybe_advance(flags);
        Ok(text)
    }

    /// Reads the current token and advances; `None` when nothing is left.
    pub fn get_string_nc(&mut self) -> Option<&'a [u8]> {
        self.get_string(ExtractFlags::NONE).ok()
    }

    /// Reads a count followed by that many tokens, returned as a cursor.
    ///
    /// If fewer tokens remain than announced, the position is restored to
    /// the count token.
    pub fn get_var_args(&mut self) -> ArgsResult<ArgsCursor<'a, T>> {
        let start = self.position;
        let n = self.get_u32(ExtractFlags::NO_ADVANCE)?;
        self.position = start + 1;
        let n = usize::try_from(n).unwrap_or(usize::MAX);
        match self.get_slice(n) {
            Ok(slice) => Ok(slice),
            Err(err) => {
                self.position = start;
                Err(err)
            }
        }
    }

    /// Steps over the current token if it equals `keyword`, ignoring ASCII
    /// case.
    pub fn advance_if_match(&mut self, keyword: &str) -> bool {
        match self.current() {
            Ok(token) if token.as_bytes().eq_ignore_ascii_case(keyword.as_bytes()) => {
                self.maybe_advance(ExtractFlags::NONE);
                true
            }
            _ => false,
        }
    }
}

fn integer_from_double<T: Token>(token: &T, flags: ExtractFlags) -> ArgsResult<i64> {
    let value = token.parse_f64().ok_or(ArgsError::ParseFailure)?;
    // Range flags see the unrounded value; a miss here is a parse failure.
    if flags.violates_range(value) || !I64_TRUNCATABLE.contains(&value) {
        return Err(ArgsError::ParseFailure);
    }
    let truncated = value as i64;
    if flags.coalesce_fractional || truncated as f64 == value {
        Ok(truncated)
    } else {
        Err(ArgsError::ParseFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HostString;
    use pretty_assertions::assert_eq;

    #[test]
    fn advance_stops_before_end() {
        let tokens = ["a", "b", "c"];
        let mut ac = ArgsCursor::new(&tokens);
        assert_eq!(ac.advance_by(2), Ok(()));
        assert_eq!(ac.position(), 2);
        assert_eq!(ac.advance(), Err(ArgsError::NoArgument));
        assert_eq!(ac.position(), 2);
    }

    #[test]
    fn advance_by_exact_remaining_is_refused() {
        let tokens = ["a", "b", "c"];
        let mut ac = ArgsCursor::new(&tokens);
        assert_eq!(ac.advance_by(3), Err(ArgsError::NoArgument));
        assert_eq!(ac.position(), 0);
    }

    #[test]
    fn advance_by_zero() {
        let tokens = ["a"];
        let mut ac = ArgsCursor::new(&tokens);
        assert_eq!(ac.advance_by(0), Ok(()));

        let empty: [&str; 0] = [];
        let mut ac = ArgsCursor::new(&empty);
        assert_eq!(ac.advance_by(0), Err(ArgsError::NoArgument));
    }

    #[test]
    fn advance_by_huge_does_not_overflow() {
        let tokens = ["a", "b"];
        let mut ac = ArgsCursor::with_position(&tokens, 1);
        assert_eq!(ac.advance_by(usize::MAX), Err(ArgsError::NoArgument));
        assert_eq!(ac.position(), 1);
    }

    #[test]
    fn final_token_is_read_again() {
        let tokens = ["7"];
        let mut ac = ArgsCursor::new(&tokens);
        assert_eq!(ac.get_i64(ExtractFlags::NONE), Ok(7));
        assert_eq!(ac.position(), 0);
        assert!(!ac.is_at_end());
        assert_eq!(ac.get_i64(ExtractFlags::NONE), Ok(7));
    }

    #[test]
    fn inspection_helpers() {
        let tokens = ["a", "b", "c"];
        let mut ac = ArgsCursor::new(&tokens);
        ac.advance().unwrap();
        assert_eq!(ac.count(), 3);
        assert_eq!(ac.remaining(), 2);
        assert_eq!(ac.current(), Ok(&"b"));
        assert_eq!(ac.tokens(), &tokens);
        assert_eq!(ac.representation(), Representation::Raw);
    }

    #[test]
    fn failed_extraction_does_not_move() {
        let tokens = ["abc", "1"];
        let mut ac = ArgsCursor::new(&tokens);
        assert_eq!(ac.get_i64(ExtractFlags::NONE), Err(ArgsError::ParseFailure));
        assert_eq!(ac.get_f64(ExtractFlags::NONE), Err(ArgsError::ParseFailure));
        assert_eq!(ac.position(), 0);
    }

    #[test]
    fn out_of_range_doubles_do_not_truncate() {
        let tokens = ["1e19", "-1e300", "nan"];
        let mut ac = ArgsCursor::new(&tokens);
        let coalesce = ExtractFlags::COALESCE_FRACTIONAL;
        assert_eq!(ac.get_i64(coalesce), Err(ArgsError::ParseFailure));
        ac.advance().unwrap();
        assert_eq!(ac.get_i64(coalesce), Err(ArgsError::ParseFailure));
        ac.advance().unwrap();
        assert_eq!(ac.get_i64(coalesce), Err(ArgsError::ParseFailure));
    }

    #[test]
    fn coalesce_truncates_toward_zero() {
        let tokens = ["-2.9", "x"];
        let mut ac = ArgsCursor::new(&tokens);
        assert_eq!(ac.get_i64(ExtractFlags::COALESCE_FRACTIONAL), Ok(-2));
    }

    #[test]
    fn fractional_below_one_fails_range_before_coalescing() {
        let tokens = ["0.5"];
        let mut ac = ArgsCursor::new(&tokens);
        let flags = ExtractFlags::COALESCE_FRACTIONAL | ExtractFlags::REQUIRE_AT_LEAST_ONE;
        assert_eq!(ac.get_i64(flags), Err(ArgsError::ParseFailure));
    }

    #[test]
    fn negative_fraction_is_not_coalesced_into_unsigned() {
        let tokens = ["-0.5", "x"];
        let mut ac = ArgsCursor::new(&tokens);
        let coalesce = ExtractFlags::COALESCE_FRACTIONAL;
        assert_eq!(ac.get_u64(coalesce), Err(ArgsError::ParseFailure));
        assert_eq!(ac.get_u32(coalesce), Err(ArgsError::ParseFailure));
        assert_eq!(ac.get_i64(coalesce), Ok(0));
    }

    #[test]
    fn empty_raw_token_reads_as_zero() {
        let tokens = ["", "x"];
        let mut ac = ArgsCursor::new(&tokens);
        assert_eq!(ac.get_i64(ExtractFlags::NO_ADVANCE), Ok(0));
        assert_eq!(ac.get_f64(ExtractFlags::NO_ADVANCE), Ok(0.0));

        let host = [HostString::from(""), HostString::from("x")];
        let mut ac = ArgsCursor::new(&host);
        assert_eq!(ac.get_i64(ExtractFlags::NONE), Err(ArgsError::ParseFailure));
        assert_eq!(ac.get_f64(ExtractFlags::NONE), Err(ArgsError::ParseFailure));
    }

    #[test]
    fn get_slice_consumes_tokens() {
        let tokens = ["a", "b", "c", "d"];
        let mut ac = ArgsCursor::new(&tokens);
        ac.advance().unwrap();
        let slice = ac.get_slice(2).unwrap();
        assert_eq!(slice.tokens(), &["b", "c"]);
        assert_eq!(slice.position(), 0);
        assert_eq!(ac.position(), 3);

        assert_eq!(ac.get_slice(2).err(), Some(ArgsError::NoArgument));
        assert_eq!(ac.position(), 3);

        let rest = ac.get_slice(1).unwrap();
        assert_eq!(rest.tokens(), &["d"]);
        assert!(ac.is_at_end());
    }

    #[test]
    fn var_args() {
        let tokens = ["2", "x", "y", "z"];
        let mut ac = ArgsCursor::new(&tokens);
        let group = ac.get_var_args().unwrap();
        assert_eq!(group.tokens(), &["x", "y"]);
        assert_eq!(ac.current(), Ok(&"z"));
    }

    #[test]
    fn var_args_too_few_restores_position() {
        let tokens = ["3", "x", "y"];
        let mut ac = ArgsCursor::new(&tokens);
        assert_eq!(ac.get_var_args().err(), Some(ArgsError::NoArgument));
        assert_eq!(ac.position(), 0);
    }

    #[test]
    fn var_args_bad_count() {
        let tokens = ["-1", "x"];
        let mut ac = ArgsCursor::new(&tokens);
        assert_eq!(ac.get_var_args().err(), Some(ArgsError::LimitExceeded));
        assert_eq!(ac.position(), 0);
    }

    #[test]
    fn var_args_empty_group_at_end() {
        let tokens = ["0"];
        let mut ac = ArgsCursor::new(&tokens);
        let group = ac.get_var_args().unwrap();
        assert_eq!(group.count(), 0);
        assert!(ac.is_at_end());
    }

    #[test]
    fn advance_if_match_ignores_case() {
        let tokens = ["STOPWORDS", "0"];
        let mut ac = ArgsCursor::new(&tokens);
        assert!(!ac.advance_if_match("schema"));
        assert_eq!(ac.position(), 0);
        assert!(ac.advance_if_match("stopwords"));
        assert_eq!(ac.position(), 1);
    }

    #[test]
    fn get_str_rejects_invalid_utf8() {
        let tokens: [&[u8]; 2] = [b"\xff\xfe", b"ok"];
        let host: Vec<HostString> = tokens.iter().map(|t| HostString::from(*t)).collect();
        let mut ac = ArgsCursor::new(&host);
        assert_eq!(ac.get_str(ExtractFlags::NONE), Err(ArgsError::ParseFailure));
        assert_eq!(ac.position(), 0);
        assert_eq!(ac.get_string(ExtractFlags::NONE), Ok(&b"\xff\xfe"[..]));
        assert_eq!(ac.get_str(ExtractFlags::NONE), Ok("ok"));
    }

    #[test]
    fn string_nc_collapses_exhaustion() {
        let empty: [String; 0] = [];
        let mut ac = ArgsCursor::new(&empty);
        assert_eq!(ac.get_string_nc(), None);

        let tokens = [String::from("x"), String::from("y")];
        let mut ac = ArgsCursor::new(&tokens);
        assert_eq!(ac.get_string_nc(), Some(&b"x"[..]));
        assert_eq!(ac.position(), 1);
    }
}
