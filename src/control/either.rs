//! Either type - a value that is one of two types.
//!
//! Partial optics report a miss as `Left` and a match as `Right`:
//! `Prism::get_or_modify` returns `Either<T, A>` where the left side is the
//! source handed back unchanged. `Lens::choice` and `Prism::left`/`right`
//! operate on sums expressed as `Either`.
//!
//! # Examples
//!
//! ```rust
//! use opticus::control::Either;
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! let result = right.fold(|n| format!("Number: {n}"), |s| format!("String: {s}"));
//! assert_eq!(result, "String: hello");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant; for partial optics, the unmatched source.
    Left(L),
    /// The right variant; for partial optics, the matched focus.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into `Some(left)` or `None`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Some(right)` or `None`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the left value, leaving a right value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticus::control::Either;
    ///
    /// let left: Either<i32, &str> = Either::Left(2);
    /// assert_eq!(left.map_left(|n| n * 10), Either::Left(20));
    /// ```
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the right value, leaving a left value untouched.
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Maps both sides.
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains a computation on the right value.
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Eliminates the `Either` by handling both cases.
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the sides.
    #[must_use]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<A> Either<A, A> {
    /// Extracts the value when both sides share a type.
    #[inline]
    pub fn merge(self) -> A {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn left_and_right_projections() {
        let left: Either<i32, &str> = Either::Left(1);
        let right: Either<i32, &str> = Either::Right("r");
        assert_eq!(left.left(), Some(1));
        assert_eq!(left.right(), None);
        assert_eq!(right.right(), Some("r"));
        assert!(right.is_right());
    }

    #[rstest]
    fn swap_and_merge() {
        let value: Either<i32, i32> = Either::Left(3);
        assert_eq!(value.swap(), Either::Right(3));
        assert_eq!(value.merge(), 3);
    }

    #[rstest]
    fn flat_map_keeps_left() {
        let left: Either<&str, i32> = Either::Left("miss");
        assert_eq!(left.flat_map(|n| Either::Right(n + 1)), Either::Left("miss"));
        let right: Either<&str, i32> = Either::Right(1);
        assert_eq!(right.flat_map(|n| Either::Right(n + 1)), Either::Right(2));
    }

    #[rstest]
    fn result_conversions() {
        let either: Either<String, i32> = Ok(5).into();
        assert_eq!(either, Either::Right(5));
        let result: Result<i32, String> = Either::Left(String::from("e")).into();
        assert_eq!(result, Err(String::from("e")));
    }

    #[rstest]
    fn debug_format() {
        assert_eq!(format!("{:?}", Either::<i32, ()>::Left(1)), "Left(1)");
    }
}
