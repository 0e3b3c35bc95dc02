//! Monoid type class - semigroups with an identity element.
//!
//! Folds over optics accumulate into a `Monoid`; an optic with no focus folds
//! to `empty()`.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use opticus::typeclass::{Monoid, Semigroup, Sum};
//!
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! assert_eq!(Sum::combine_all(vec![Sum::new(1), Sum::new(2), Sum::new(3)]), Sum::new(6));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{First, Last, Product, Sum};

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Combines every value of an iterator, starting from `empty()`.
    fn combine_all<I>(iterator: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_monoid!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
);

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}
