use std::ops::BitOr;

/// Per-call extraction policy.
///
/// Flags are passed to each extraction and never stored on the cursor.
/// Combine them with `|` or the builder methods:
///
/// ```
/// use argcursor_engine::ExtractFlags;
///
/// let flags = ExtractFlags::REQUIRE_AT_LEAST_ONE | ExtractFlags::NO_ADVANCE;
/// assert_eq!(flags, ExtractFlags::NONE.require_at_least_one().no_advance());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExtractFlags {
    /// Leave the position unchanged on success.
    pub no_advance: bool,
    /// Reject values below zero.
    pub require_nonnegative: bool,
    /// Reject values below one.
    pub require_at_least_one: bool,
    /// Truncate fractional values into integers instead of rejecting them.
    pub coalesce_fractional: bool,
}

impl ExtractFlags {
    pub const NONE: Self = Self {
        no_advance: false,
        require_nonnegative: false,
        require_at_least_one: false,
        coalesce_fractional: false,
    };

    pub const NO_ADVANCE: Self = Self::NONE.no_advance();
    pub const REQUIRE_NONNEGATIVE: Self = Self::NONE.require_nonnegative();
    pub const REQUIRE_AT_LEAST_ONE: Self = Self::NONE.require_at_least_one();
    pub const COALESCE_FRACTIONAL: Self = Self::NONE.coalesce_fractional();

    pub const fn no_advance(mut self) -> Self {
        self.no_advance = true;
        self
    }

    pub const fn require_nonnegative(mut self) -> Self {
        self.require_nonnegative = true;
        self
    }

    pub const fn require_at_least_one(mut self) -> Self {
        self.require_at_least_one = true;
        self
    }

    pub const fn coalesce_fractional(mut self) -> Self {
        self.coalesce_fractional = true;
        self
    }

    /// Range check shared by the integer and floating-point extractors.
    pub(crate) fn violates_range<N>(self, value: N) -> bool
    where
        N: PartialOrd + From<i8>,
    {
        (self.require_nonnegative && value < N::from(0))
            || (self.require_at_least_one && value < N::from(1))
    }
}

impl BitOr for ExtractFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            no_advance: self.no_advance || rhs.no_advance,
            require_nonnegative: self.require_nonnegative || rhs.require_nonnegative,
            require_at_least_one: self.require_at_least_one || rhs.require_at_least_one,
            coalesce_fractional: self.coalesce_fractional || rhs.coalesce_fractional,
        }
    }
}
