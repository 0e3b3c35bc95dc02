//! Identity wrapper type - the identity functor.
//!
//! `Identity` is the effect a pure `modify` runs in: instantiating an
//! optic's `modify_f` with `Identity` yields the plain modification.

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use opticus::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_new_and_into_inner() {
        assert_eq!(Identity::new("value").into_inner(), "value");
    }

    #[rstest]
    fn identity_as_inner_borrows() {
        let wrapped = Identity::new(vec![1, 2]);
        assert_eq!(wrapped.as_inner().len(), 2);
    }

    #[rstest]
    fn identity_from_value() {
        let wrapped: Identity<i32> = 7.into();
        assert_eq!(wrapped, Identity(7));
    }
}
