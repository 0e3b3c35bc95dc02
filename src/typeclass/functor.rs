//! Functor type class - mapping over container values.
//!
//! A lens only needs a `Functor` to run `modify_f`: the focus is visited
//! exactly once and the effect is mapped back into the rebuilt source.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use opticus::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//! ```

use super::constant::Const;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use opticus::typeclass::Functor;
///
/// let x: Result<i32, String> = Ok(5);
/// assert_eq!(x.fmap(|n| n * 2), Ok(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant.
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor.
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

impl<M, A> Functor for Const<M, A> {
    #[inline]
    fn fmap<B, F>(self, _function: F) -> Const<M, B>
    where
        F: FnOnce(A) -> B,
    {
        self.retag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(2), Some(4))]
    #[case(None, None)]
    fn option_fmap(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn result_fmap_keeps_error() {
        let failed: Result<i32, &str> = Err("boom");
        assert_eq!(failed.fmap(|n| n + 1), Err("boom"));
    }

    #[rstest]
    fn identity_fmap_applies() {
        assert_eq!(Identity(3).fmap(|n| n + 1), Identity(4));
    }

    #[rstest]
    fn const_fmap_never_calls_function() {
        let constant: Const<&str, i32> = Const::new("acc");
        let mapped = constant.fmap(|_: i32| -> i32 { unreachable!("Const never holds a value") });
        assert_eq!(mapped.into_value(), "acc");
    }

    #[rstest]
    fn replace_and_void() {
        assert_eq!(Some(1).replace("x"), Some("x"));
        assert_eq!(Some(1).void(), Some(()));
    }
}
