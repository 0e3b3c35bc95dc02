//! Lens optics for focusing on exactly one part of a structure.
//!
//! A Lens pairs a `get` with a `set`. The generalized [`PLens<S, T, A, B>`]
//! may change the type of the focus (`A` to `B`) and thereby the type of the
//! whole (`S` to `T`); [`Lens<S, A>`] is the type-preserving case.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetSet Law**: Setting back what was read yields the original.
//!    ```text
//!    lens.set(source, lens.get(&source)) == source
//!    ```
//!
//! 2. **SetGet Law**: Reading after setting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == value
//!    ```
//!
//! 3. **SetSet Law**: Setting twice is the same as setting once.
//!    ```text
//!    lens.set(lens.set(source, value), value) == lens.set(source, value)
//!    ```
//!
//! # Examples
//!
//! ```
//! use opticus::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens: Lens<Point, i32> = Lens::new(|p: &Point| p.x, |p: Point, x| Point { x, ..p });
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//! assert_eq!(x_lens.modify(point, |x| x * 2), Point { x: 20, y: 20 });
//! ```

use std::fmt;
use std::rc::Rc;

use super::fold::Fold;
use super::getter::Getter;
use super::optional::{Context, POptional};
use super::setter::PSetter;
use super::traversal::{PTraversal, Parts, take_single};
use crate::control::Either;
use crate::typeclass::Functor;

/// A polymorphic lens: reads an `A` out of an `S`, and writes a `B` into an
/// `S` producing a `T`.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The modified source type
/// - `A`: The focus type
/// - `B`: The replacement focus type
pub struct PLens<S, T, A, B> {
    get: Rc<dyn Fn(&S) -> A>,
    set: Rc<dyn Fn(S, B) -> T>,
}

/// A lens that preserves the types of source and focus.
pub type Lens<S, A> = PLens<S, S, A, A>;

impl<S, T, A, B> PLens<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Creates a lens from a getter and a setter.
    ///
    /// # Arguments
    ///
    /// * `get` - Reads the focus out of the source
    /// * `set` - Replaces the focus, consuming the source
    pub fn new<G, F>(get: G, set: F) -> Self
    where
        G: Fn(&S) -> A + 'static,
        F: Fn(S, B) -> T + 'static,
    {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// Reads the focus.
    pub fn get(&self, source: &S) -> A {
        (self.get)(source)
    }

    /// Replaces the focus.
    pub fn set(&self, source: S, value: B) -> T {
        (self.set)(source, value)
    }

    /// Replaces the focus with a function of its current value.
    ///
    /// # Example
    ///
    /// ```
    /// use opticus::optics::PLens;
    ///
    /// // Changes the type of the first component.
    /// let first: PLens<(i32, bool), (String, bool), i32, String> =
    ///     PLens::new(|pair: &(i32, bool)| pair.0, |pair: (i32, bool), text| (text, pair.1));
    /// assert_eq!(first.modify((7, true), |n| n.to_string()), ("7".to_string(), true));
    /// ```
    pub fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        let focus = self.get(&source);
        self.set(source, function(focus))
    }

    /// Modifies the focus with an effectful function and maps the effect
    /// back into the rebuilt source.
    ///
    /// A lens visits exactly one focus, so any [`Functor`] suffices.
    ///
    /// # Example
    ///
    /// ```
    /// use opticus::optics::Lens;
    ///
    /// let first: Lens<(i32, i32), i32> = Lens::new(|pair: &(i32, i32)| pair.0, |pair: (i32, i32), n| (n, pair.1));
    /// let checked = first.modify_f((4, 1), |n| if n > 0 { Some(n - 1) } else { None });
    /// assert_eq!(checked, Some((3, 1)));
    /// assert_eq!(first.modify_f((0, 1), |n| if n > 0 { Some(n - 1) } else { None }), None);
    /// ```
    pub fn modify_f<FB, F>(&self, source: S, function: F) -> FB::WithType<T>
    where
        FB: Functor<Inner = B>,
        F: FnOnce(A) -> FB,
    {
        let focus = self.get(&source);
        let set = Rc::clone(&self.set);
        function(focus).fmap(move |value| set(source, value))
    }

    /// Lifts a focus function into a source function.
    pub fn lift<F>(&self, function: F) -> impl Fn(S) -> T + use<S, T, A, B, F>
    where
        F: Fn(A) -> B + 'static,
    {
        let lens = self.clone();
        move |source| lens.modify(source, &function)
    }

    /// Lifts an effectful focus function into an effectful source function.
    pub fn lift_f<FB, F>(&self, function: F) -> impl Fn(S) -> FB::WithType<T> + use<S, T, A, B, FB, F>
    where
        FB: Functor<Inner = B>,
        F: Fn(A) -> FB + 'static,
    {
        let lens = self.clone();
        move |source| lens.modify_f(source, &function)
    }

    /// Returns the focus if it satisfies `predicate`.
    pub fn find<P>(&self, source: &S, predicate: P) -> Option<A>
    where
        P: FnOnce(&A) -> bool,
    {
        Some(self.get(source)).filter(predicate)
    }

    /// Checks whether the focus satisfies `predicate`.
    pub fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        predicate(&self.get(source))
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Pairs the focus with a value carried alongside the source.
    pub fn first<C>(&self) -> PLens<(S, C), (T, C), (A, C), (B, C)>
    where
        C: Clone + 'static,
    {
        let get = Rc::clone(&self.get);
        let set = Rc::clone(&self.set);
        PLens::new(
            move |(source, carried): &(S, C)| (get(source), carried.clone()),
            move |(source, _): (S, C), (value, carried): (B, C)| (set(source, value), carried),
        )
    }

    /// Pairs a value carried alongside the source with the focus.
    pub fn second<C>(&self) -> PLens<(C, S), (C, T), (C, A), (C, B)>
    where
        C: Clone + 'static,
    {
        let get = Rc::clone(&self.get);
        let set = Rc::clone(&self.set);
        PLens::new(
            move |(carried, source): &(C, S)| (carried.clone(), get(source)),
            move |(_, source): (C, S), (carried, value): (C, B)| (carried, set(source, value)),
        )
    }

    /// Runs two lenses side by side on a pair of sources.
    pub fn split<S1, T1, A1, B1>(
        &self,
        other: &PLens<S1, T1, A1, B1>,
    ) -> PLens<(S, S1), (T, T1), (A, A1), (B, B1)>
    where
        S1: 'static,
        T1: 'static,
        A1: 'static,
        B1: 'static,
    {
        let (get, other_get) = (Rc::clone(&self.get), Rc::clone(&other.get));
        let (set, other_set) = (Rc::clone(&self.set), Rc::clone(&other.set));
        PLens::new(
            move |(source, other_source): &(S, S1)| (get(source), other_get(other_source)),
            move |(source, other_source): (S, S1), (value, other_value): (B, B1)| {
                (set(source, value), other_set(other_source, other_value))
            },
        )
    }

    /// Focuses on the same focus type in either of two sources.
    pub fn choice<S1, T1>(
        &self,
        other: &PLens<S1, T1, A, B>,
    ) -> PLens<Either<S, S1>, Either<T, T1>, A, B>
    where
        S1: 'static,
        T1: 'static,
    {
        let (get, other_get) = (Rc::clone(&self.get), Rc::clone(&other.get));
        let (set, other_set) = (Rc::clone(&self.set), Rc::clone(&other.set));
        PLens::new(
            move |source: &Either<S, S1>| match source {
                Either::Left(source) => get(source),
                Either::Right(source) => other_get(source),
            },
            move |source: Either<S, S1>, value: B| match source {
                Either::Left(source) => Either::Left(set(source, value)),
                Either::Right(source) => Either::Right(other_set(source, value)),
            },
        )
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Views this lens as an optional that always matches.
    pub fn as_optional(&self) -> POptional<S, T, A, B> {
        let get = Rc::clone(&self.get);
        let preview = Rc::clone(&self.get);
        let set = Rc::clone(&self.set);
        POptional::from_focus(
            move |source: S| {
                let focus = get(&source);
                let set = Rc::clone(&set);
                Either::Right(Context::new(focus, move |value| set(source, value)))
            },
            move |source: &S| Some(preview(source)),
        )
    }

    /// Views this lens as a traversal with exactly one focus.
    pub fn as_traversal(&self) -> PTraversal<S, T, A, B> {
        let view = Rc::clone(&self.get);
        let get = Rc::clone(&self.get);
        let set = Rc::clone(&self.set);
        PTraversal::new(
            move |source: &S| vec![view(source)],
            move |source: S| {
                let focus = get(&source);
                let set = Rc::clone(&set);
                Parts::new(vec![focus], move |values| set(source, take_single(values)))
            },
        )
    }

    /// Views this lens as a setter.
    pub fn as_setter(&self) -> PSetter<S, T, A, B> {
        let lens = self.clone();
        PSetter::new(move |source, function| lens.modify(source, function))
    }

    /// Views the read side of this lens as a getter.
    pub fn as_getter(&self) -> Getter<S, A> {
        let get = Rc::clone(&self.get);
        Getter::new(move |source| get(source))
    }

    /// Views the read side of this lens as a fold with one focus.
    pub fn as_fold(&self) -> Fold<S, A> {
        let get = Rc::clone(&self.get);
        Fold::new(move |source| vec![get(source)])
    }
}

impl<S> PLens<S, S, S, S>
where
    S: Clone + 'static,
{
    /// The lens whose focus is the whole source.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(S::clone, |_, value| value)
    }
}

impl<S> PLens<Either<S, S>, Either<S, S>, S, S>
where
    S: Clone + 'static,
{
    /// Focuses on whichever side of an `Either` is present.
    #[must_use]
    pub fn codiagonal() -> Self {
        Self::new(
            |source: &Either<S, S>| source.clone().merge(),
            |source: Either<S, S>, value| match source {
                Either::Left(_) => Either::Left(value),
                Either::Right(_) => Either::Right(value),
            },
        )
    }
}

impl<S, T, A, B> Clone for PLens<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            set: Rc::clone(&self.set),
        }
    }
}

impl<S, T, A, B> fmt::Debug for PLens<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("PLens").finish_non_exhaustive()
    }
}
