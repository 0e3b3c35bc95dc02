//! Newtype wrappers selecting a `Semigroup`/`Monoid` instance.
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`First`]: leftmost present value (identity: `First(None)`)
//! - [`Last`]: rightmost present value (identity: `Last(None)`)
//!
//! `First` and `Last` are what `head_option` and `last_option` fold with.

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A newtype wrapper that represents the additive monoid.
///
/// # Examples
///
/// ```rust
/// use opticus::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapper.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the sum.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// A newtype wrapper that represents the multiplicative monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapper.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the product.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

// =============================================================================
// First / Last Wrappers
// =============================================================================

/// Keeps the leftmost present value.
///
/// # Examples
///
/// ```rust
/// use opticus::typeclass::{First, Monoid};
///
/// let first = First::combine_all(vec![First(None), First(Some('b')), First(Some('c'))]);
/// assert_eq!(first.into_inner(), Some('b'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct First<A>(pub Option<A>);

impl<A> First<A> {
    /// Wraps a present value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(Some(value))
    }

    /// Unwraps the optional value.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}

/// Keeps the rightmost present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Last<A>(pub Option<A>);

impl<A> Last<A> {
    /// Wraps a present value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(Some(value))
    }

    /// Unwraps the optional value.
    #[inline]
    pub fn into_inner(self) -> Option<A> {
        self.0
    }
}
