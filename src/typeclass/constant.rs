//! The constant functor - accumulates a monoid and ignores its phantom value.
//!
//! `Const<M, A>` holds only an `M`. Mapping over it changes the phantom `A`
//! without touching `M`, and combining two of them combines their `M`s. This
//! is what turns an effectful traversal into a fold: visiting every focus
//! with `Const` collects a monoidal summary instead of rebuilding the source.
//!
//! # Examples
//!
//! ```rust
//! use opticus::typeclass::{Applicative, Const, Sum};
//!
//! let left: Const<Sum<i32>, i32> = Const::new(Sum::new(2));
//! let right: Const<Sum<i32>, &str> = Const::new(Sum::new(3));
//! let combined = left.map2(right, |_, _| ());
//! assert_eq!(combined.into_value(), Sum::new(5));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::TypeConstructor;

/// A functor that carries a value of type `M` and a phantom `A`.
pub struct Const<M, A> {
    value: M,
    _marker: PhantomData<A>,
}

impl<M, A> Const<M, A> {
    /// Wraps an accumulated value.
    #[inline]
    pub const fn new(value: M) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns the accumulated value.
    #[inline]
    pub fn into_value(self) -> M {
        self.value
    }

    /// Borrows the accumulated value.
    #[inline]
    pub const fn value(&self) -> &M {
        &self.value
    }

    /// Changes the phantom type.
    #[inline]
    pub fn retag<B>(self) -> Const<M, B> {
        Const::new(self.value)
    }
}

impl<M: Clone, A> Clone for Const<M, A> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<M: PartialEq, A> PartialEq for Const<M, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<M: Eq, A> Eq for Const<M, A> {}

impl<M: fmt::Debug, A> fmt::Debug for Const<M, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

impl<M, A> TypeConstructor for Const<M, A> {
    type Inner = A;
    type WithType<B> = Const<M, B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn retag_keeps_value() {
        let constant: Const<String, i32> = Const::new(String::from("kept"));
        let retagged: Const<String, bool> = constant.retag();
        assert_eq!(retagged.value(), "kept");
    }

    #[rstest]
    fn equality_ignores_phantom() {
        assert_eq!(Const::<i32, ()>::new(1), Const::new(1));
        assert_ne!(Const::<i32, ()>::new(1), Const::new(2));
    }

    #[rstest]
    fn debug_shows_value() {
        assert_eq!(format!("{:?}", Const::<i32, String>::new(4)), "Const(4)");
    }
}
