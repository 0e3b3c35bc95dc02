//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use opticus::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! assert_eq!(hello.combine(String::from("World!")), "Hello, World!");
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{First, Last, Product, Sum};

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values associatively.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines every value of a non-empty iterator, or returns `None`.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A> Semigroup for First<A> {
    fn combine(self, other: Self) -> Self {
        if self.0.is_some() { self } else { other }
    }
}

impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        if other.0.is_some() { other } else { self }
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}
