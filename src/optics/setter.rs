//! Setter optics: modify-only access to any number of foci.
//!
//! A Setter cannot read its foci; it can only run a function over them.
//! Every optic that can write converts to one with `as_setter`.
//!
//! # Laws
//!
//! 1. **ModifyIdentity**: `setter.modify(source, |a| a) == source`
//! 2. **ComposeModify**: `setter.modify(setter.modify(source, f), g) == setter.modify(source, |a| g(f(a)))`
//! 3. **SetIdempotent**: `setter.set(setter.set(source, b), b) == setter.set(source, b)`
//!
//! # Examples
//!
//! ```
//! use opticus::optics::Setter;
//!
//! let every: Setter<Vec<i32>, i32> =
//!     Setter::new(|source: Vec<i32>, function| source.into_iter().map(function).collect());
//! assert_eq!(every.modify(vec![1, 2], |n| n * 2), vec![2, 4]);
//! assert_eq!(every.set(vec![1, 2], 0), vec![0, 0]);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::control::Either;

type ModifyFn<S, T, A, B> = dyn Fn(S, &mut dyn FnMut(A) -> B) -> T;

/// A polymorphic setter: replaces every `A` inside an `S` with a `B`,
/// producing a `T`.
pub struct PSetter<S, T, A, B> {
    modify: Rc<ModifyFn<S, T, A, B>>,
}

/// A setter that preserves the types of source and foci.
pub type Setter<S, A> = PSetter<S, S, A, A>;

impl<S, T, A, B> PSetter<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Creates a setter from a function that maps every focus of a source.
    pub fn new<M>(modify: M) -> Self
    where
        M: Fn(S, &mut dyn FnMut(A) -> B) -> T + 'static,
    {
        Self {
            modify: Rc::new(modify),
        }
    }

    /// Applies `function` to every focus.
    pub fn modify<F>(&self, source: S, mut function: F) -> T
    where
        F: FnMut(A) -> B,
    {
        (self.modify)(source, &mut function)
    }

    /// Replaces every focus with `value`.
    pub fn set(&self, source: S, value: B) -> T
    where
        B: Clone,
    {
        self.modify(source, move |_| value.clone())
    }

    /// Lifts a focus function into a source function.
    pub fn lift<F>(&self, function: F) -> impl Fn(S) -> T + use<S, T, A, B, F>
    where
        F: Fn(A) -> B + 'static,
    {
        let setter = self.clone();
        move |source| setter.modify(source, &function)
    }

    /// Modifies whichever side of an `Either` is present, using this
    /// setter on the left and `other` on the right.
    pub fn choice<S1, T1>(
        &self,
        other: &PSetter<S1, T1, A, B>,
    ) -> PSetter<Either<S, S1>, Either<T, T1>, A, B>
    where
        S1: 'static,
        T1: 'static,
    {
        let left = self.clone();
        let right = other.clone();
        PSetter::new(move |source: Either<S, S1>, function| match source {
            Either::Left(source) => Either::Left(left.modify(source, &mut *function)),
            Either::Right(source) => Either::Right(right.modify(source, &mut *function)),
        })
    }
}

impl<S> PSetter<S, S, S, S>
where
    S: 'static,
{
    /// The setter whose focus is the whole source.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|source, function| function(source))
    }
}

impl<S, T, A, B> Clone for PSetter<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            modify: Rc::clone(&self.modify),
        }
    }
}

impl<S, T, A, B> fmt::Debug for PSetter<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("PSetter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn every() -> Setter<Vec<i32>, i32> {
        Setter::new(|source: Vec<i32>, function| source.into_iter().map(function).collect())
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1], vec![2])]
    #[case(vec![1, 2, 3], vec![2, 3, 4])]
    fn modify_maps_every_focus(#[case] source: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(every().modify(source, |n| n + 1), expected);
    }

    #[rstest]
    fn modify_accepts_stateful_function() {
        let mut seen = 0;
        let result = every().modify(vec![5, 5, 5], |n| {
            seen += 1;
            n * seen
        });
        assert_eq!(result, vec![5, 10, 15]);
        assert_eq!(seen, 3);
    }

    #[rstest]
    fn polymorphic_setter_changes_focus_type() {
        let show: PSetter<Vec<i32>, Vec<String>, i32, String> =
            PSetter::new(|source: Vec<i32>, function| source.into_iter().map(function).collect());
        assert_eq!(show.modify(vec![1, 2], |n| n.to_string()), vec!["1", "2"]);
    }

    #[rstest]
    fn lift_and_identity() {
        let double = every().lift(|n| n * 2);
        assert_eq!(double(vec![1, 2]), vec![2, 4]);
        assert_eq!(Setter::<i32, i32>::identity().set(1, 9), 9);
    }

    #[rstest]
    fn choice_modifies_present_side() {
        let single: Setter<i32, i32> = Setter::identity();
        let either = every().choice(&single);
        assert_eq!(either.set(Either::Left(vec![1, 2]), 0), Either::Left(vec![0, 0]));
        assert_eq!(either.modify(Either::Right(4), |n| n - 1), Either::Right(3));
    }
}
