//! Iso (Isomorphism) optics for lossless conversions between types.
//!
//! An Iso relates two types that carry the same information. It is the
//! strongest optic: every other optic kind can be derived from it with one
//! of the `as_*` conversions.
//!
//! # Laws
//!
//! 1. **RoundTripOneWay**: `iso.reverse_get(iso.get(&source)) == source`
//! 2. **RoundTripOtherWay**: `iso.get(&iso.reverse_get(value)) == value`
//!
//! # Examples
//!
//! ```
//! use opticus::optics::Iso;
//!
//! let chars: Iso<String, Vec<char>> = Iso::new(
//!     |text: &String| text.chars().collect(),
//!     |chars: Vec<char>| chars.into_iter().collect(),
//! );
//!
//! assert_eq!(chars.get(&"abc".to_string()), vec!['a', 'b', 'c']);
//! assert_eq!(chars.modify("abc".to_string(), |mut c| { c.reverse(); c }), "cba");
//! ```

use std::fmt;
use std::rc::Rc;

use super::fold::Fold;
use super::getter::Getter;
use super::lens::PLens;
use super::optional::POptional;
use super::prism::PPrism;
use super::setter::PSetter;
use super::traversal::PTraversal;
use crate::control::Either;
use crate::typeclass::Functor;

/// A polymorphic isomorphism between `S`/`T` and `A`/`B`.
pub struct PIso<S, T, A, B> {
    get: Rc<dyn Fn(&S) -> A>,
    reverse_get: Rc<dyn Fn(B) -> T>,
}

/// An isomorphism that preserves types in both directions.
pub type Iso<S, A> = PIso<S, S, A, A>;

impl<S, T, A, B> PIso<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Creates an Iso from its two directions.
    pub fn new<G, R>(get: G, reverse_get: R) -> Self
    where
        G: Fn(&S) -> A + 'static,
        R: Fn(B) -> T + 'static,
    {
        Self {
            get: Rc::new(get),
            reverse_get: Rc::new(reverse_get),
        }
    }

    /// Converts forward.
    pub fn get(&self, source: &S) -> A {
        (self.get)(source)
    }

    /// Converts backward.
    pub fn reverse_get(&self, value: B) -> T {
        (self.reverse_get)(value)
    }

    /// Replaces the whole source; the old source carries no extra
    /// information, so it is discarded.
    pub fn set(&self, _source: S, value: B) -> T {
        self.reverse_get(value)
    }

    /// Converts forward, applies `function`, and converts back.
    pub fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        self.reverse_get(function(self.get(&source)))
    }

    /// Modifies through an effectful function.
    pub fn modify_f<FB, F>(&self, source: S, function: F) -> FB::WithType<T>
    where
        FB: Functor<Inner = B>,
        F: FnOnce(A) -> FB,
    {
        let reverse_get = Rc::clone(&self.reverse_get);
        function(self.get(&source)).fmap(move |value| reverse_get(value))
    }

    /// Lifts a focus function into a source function.
    pub fn lift<F>(&self, function: F) -> impl Fn(S) -> T + use<S, T, A, B, F>
    where
        F: Fn(A) -> B + 'static,
    {
        let iso = self.clone();
        move |source| iso.modify(source, &function)
    }

    /// Lifts an effectful focus function into an effectful source function.
    pub fn lift_f<FB, F>(&self, function: F) -> impl Fn(S) -> FB::WithType<T> + use<S, T, A, B, FB, F>
    where
        FB: Functor<Inner = B>,
        F: Fn(A) -> FB + 'static,
    {
        let iso = self.clone();
        move |source| iso.modify_f(source, &function)
    }

    /// Returns the converted value if it satisfies `predicate`.
    pub fn find<P>(&self, source: &S, predicate: P) -> Option<A>
    where
        P: FnOnce(&A) -> bool,
    {
        Some(self.get(source)).filter(predicate)
    }

    /// Checks whether the converted value satisfies `predicate`.
    pub fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        predicate(&self.get(source))
    }

    /// Swaps the two directions.
    ///
    /// `reverse_get` consumes its argument, so the reversed `get` clones it.
    pub fn reverse(&self) -> PIso<B, A, T, S>
    where
        B: Clone,
    {
        let get = Rc::clone(&self.get);
        let reverse_get = Rc::clone(&self.reverse_get);
        PIso::new(move |value: &B| reverse_get(value.clone()), move |source: S| get(&source))
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Pairs both directions with a value carried alongside.
    pub fn first<C>(&self) -> PIso<(S, C), (T, C), (A, C), (B, C)>
    where
        C: Clone + 'static,
    {
        let get = Rc::clone(&self.get);
        let reverse_get = Rc::clone(&self.reverse_get);
        PIso::new(
            move |(source, carried): &(S, C)| (get(source), carried.clone()),
            move |(value, carried): (B, C)| (reverse_get(value), carried),
        )
    }

    /// Pairs a value carried alongside with both directions.
    pub fn second<C>(&self) -> PIso<(C, S), (C, T), (C, A), (C, B)>
    where
        C: Clone + 'static,
    {
        let get = Rc::clone(&self.get);
        let reverse_get = Rc::clone(&self.reverse_get);
        PIso::new(
            move |(carried, source): &(C, S)| (carried.clone(), get(source)),
            move |(carried, value): (C, B)| (carried, reverse_get(value)),
        )
    }

    /// Runs two isos side by side.
    pub fn split<S1, T1, A1, B1>(
        &self,
        other: &PIso<S1, T1, A1, B1>,
    ) -> PIso<(S, S1), (T, T1), (A, A1), (B, B1)>
    where
        S1: 'static,
        T1: 'static,
        A1: 'static,
        B1: 'static,
    {
        let (get, other_get) = (Rc::clone(&self.get), Rc::clone(&other.get));
        let (reverse_get, other_reverse_get) =
            (Rc::clone(&self.reverse_get), Rc::clone(&other.reverse_get));
        PIso::new(
            move |(source, other_source): &(S, S1)| (get(source), other_get(other_source)),
            move |(value, other_value): (B, B1)| {
                (reverse_get(value), other_reverse_get(other_value))
            },
        )
    }

    /// Converts the left side of an `Either`, passing the right side through.
    pub fn left<C>(&self) -> PIso<Either<S, C>, Either<T, C>, Either<A, C>, Either<B, C>>
    where
        C: Clone + 'static,
    {
        let get = Rc::clone(&self.get);
        let reverse_get = Rc::clone(&self.reverse_get);
        PIso::new(
            move |source: &Either<S, C>| match source {
                Either::Left(source) => Either::Left(get(source)),
                Either::Right(carried) => Either::Right(carried.clone()),
            },
            move |value: Either<B, C>| value.map_left(|value| reverse_get(value)),
        )
    }

    /// Converts the right side of an `Either`, passing the left side through.
    pub fn right<C>(&self) -> PIso<Either<C, S>, Either<C, T>, Either<C, A>, Either<C, B>>
    where
        C: Clone + 'static,
    {
        let get = Rc::clone(&self.get);
        let reverse_get = Rc::clone(&self.reverse_get);
        PIso::new(
            move |source: &Either<C, S>| match source {
                Either::Left(carried) => Either::Left(carried.clone()),
                Either::Right(source) => Either::Right(get(source)),
            },
            move |value: Either<C, B>| value.map_right(|value| reverse_get(value)),
        )
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Views this iso as a lens.
    pub fn as_lens(&self) -> PLens<S, T, A, B> {
        let get = Rc::clone(&self.get);
        let reverse_get = Rc::clone(&self.reverse_get);
        PLens::new(move |source| get(source), move |_, value| reverse_get(value))
    }

    /// Views this iso as a prism that always matches.
    pub fn as_prism(&self) -> PPrism<S, T, A, B> {
        let get = Rc::clone(&self.get);
        let preview = Rc::clone(&self.get);
        let reverse_get = Rc::clone(&self.reverse_get);
        PPrism::from_parts(
            move |source: S| Either::Right(get(&source)),
            move |source: &S| Some(preview(source)),
            move |value| reverse_get(value),
        )
    }

    /// Views this iso as an optional.
    pub fn as_optional(&self) -> POptional<S, T, A, B> {
        self.as_lens().as_optional()
    }

    /// Views this iso as a traversal with one focus.
    pub fn as_traversal(&self) -> PTraversal<S, T, A, B> {
        self.as_lens().as_traversal()
    }

    /// Views this iso as a setter.
    pub fn as_setter(&self) -> PSetter<S, T, A, B> {
        let iso = self.clone();
        PSetter::new(move |source, function| iso.modify(source, function))
    }

    /// Views the forward direction as a getter.
    pub fn as_getter(&self) -> Getter<S, A> {
        let get = Rc::clone(&self.get);
        Getter::new(move |source| get(source))
    }

    /// Views the forward direction as a fold.
    pub fn as_fold(&self) -> Fold<S, A> {
        let get = Rc::clone(&self.get);
        Fold::new(move |source| vec![get(source)])
    }
}

impl<S> PIso<S, S, S, S>
where
    S: Clone + 'static,
{
    /// The iso from a type to itself.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(S::clone, |value| value)
    }
}

impl<S, T, A, B> Clone for PIso<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            reverse_get: Rc::clone(&self.reverse_get),
        }
    }
}

impl<S, T, A, B> fmt::Debug for PIso<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("PIso").finish_non_exhaustive()
    }
}
