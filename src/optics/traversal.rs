//! Traversal optics for focusing on zero or more parts of a structure.
//!
//! A Traversal has two sides. The read side lists the foci of a borrowed
//! source. The write side takes the source apart into [`Parts`]: every focus
//! in structural order, plus a rebuild that accepts exactly one replacement
//! per focus.
//!
//! The single effectful primitive is [`PTraversal::modify_f`]; the bulk
//! operations are instances of it:
//!
//! - `modify` runs it in [`Identity`]
//! - `fold_map`, `size`, `head_option` and `last_option` run it in [`Const`]
//!
//! # Laws
//!
//! 1. **HeadOption**: `head_option(s) == get_all(s).first()`
//! 2. **ModifyGetAll**: `get_all(modify(s, f)) == get_all(s).map(f)`
//! 3. **SetSet**: `set(set(s, a), a) == set(s, a)`
//! 4. **ModifyIdentity**: `modify(s, |a| a) == s`
//! 5. **ComposeModify**: `modify(modify(s, f), g) == modify(s, |a| g(f(a)))`
//!
//! # Examples
//!
//! ```
//! use opticus::optics::{Each, Traversal};
//! use opticus::typeclass::Sum;
//!
//! let each: Traversal<Vec<i32>, i32> = Vec::each();
//! assert_eq!(each.modify(vec![1, 2, 3], |n| n + 1), vec![2, 3, 4]);
//! assert_eq!(each.fold_map(&vec![1, 2, 3], Sum::new), Sum::new(6));
//! assert_eq!(each.find(&vec![1, 2, 3], |n| *n > 1), Some(2));
//! ```

use std::fmt;
use std::rc::Rc;

use super::error::OpticsError;
use super::fold::Fold;
use super::setter::PSetter;
use crate::control::Either;
use crate::typeclass::{Applicative, Const, First, Identity, Last, Monoid, Sum};

/// The foci of a source, in structural order, and the rebuild that puts
/// replacements back.
pub struct Parts<A, B, T> {
    foci: Vec<A>,
    rebuild: Box<dyn FnOnce(Vec<B>) -> T>,
}

impl<A, B, T> Parts<A, B, T> {
    /// Pairs foci with their rebuild.
    ///
    /// `rebuild` receives exactly `foci.len()` values.
    pub fn new<F>(foci: Vec<A>, rebuild: F) -> Self
    where
        F: FnOnce(Vec<B>) -> T + 'static,
    {
        Self {
            foci,
            rebuild: Box::new(rebuild),
        }
    }

    /// Borrows the foci.
    pub fn foci(&self) -> &[A] {
        &self.foci
    }

    /// Number of foci.
    pub fn len(&self) -> usize {
        self.foci.len()
    }

    /// Checks whether there are no foci.
    pub fn is_empty(&self) -> bool {
        self.foci.is_empty()
    }

    /// Discards the rebuild.
    pub fn into_foci(self) -> Vec<A> {
        self.foci
    }

    /// Splits into foci and rebuild.
    pub fn into_parts(self) -> (Vec<A>, Box<dyn FnOnce(Vec<B>) -> T>) {
        (self.foci, self.rebuild)
    }
}

impl<A: fmt::Debug, B, T> fmt::Debug for Parts<A, B, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Parts")
            .field("foci", &self.foci)
            .finish_non_exhaustive()
    }
}

/// Takes the only replacement handed to a single-focus rebuild.
pub(crate) fn take_single<B>(values: Vec<B>) -> B {
    values
        .into_iter()
        .next()
        .unwrap_or_else(|| unreachable!("single-focus rebuild received no replacement"))
}

/// A polymorphic traversal: zero or more `A`s inside an `S`.
pub struct PTraversal<S, T, A, B> {
    view: Rc<dyn Fn(&S) -> Vec<A>>,
    walk: Rc<dyn Fn(S) -> Parts<A, B, T>>,
}

/// A traversal that preserves the types of source and foci.
pub type Traversal<S, A> = PTraversal<S, S, A, A>;

impl<S, T, A, B> PTraversal<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Creates a traversal from its read side and its write side.
    ///
    /// `view` and `walk` must list the same foci in the same order.
    pub fn new<V, W>(view: V, walk: W) -> Self
    where
        V: Fn(&S) -> Vec<A> + 'static,
        W: Fn(S) -> Parts<A, B, T> + 'static,
    {
        Self {
            view: Rc::new(view),
            walk: Rc::new(walk),
        }
    }

    /// Creates a traversal from its write side alone; reading clones the
    /// source and discards the rebuild.
    pub fn from_walk<W>(walk: W) -> Self
    where
        S: Clone,
        W: Fn(S) -> Parts<A, B, T> + 'static,
    {
        let walk = Rc::new(walk);
        let view = Rc::clone(&walk);
        Self::new(move |source: &S| view(source.clone()).into_foci(), move |source| walk(source))
    }

    /// Creates a traversal over two foci of the same source.
    ///
    /// # Example
    ///
    /// ```
    /// use opticus::optics::Traversal;
    ///
    /// let both: Traversal<(i32, i32), i32> = Traversal::both(
    ///     |pair: &(i32, i32)| pair.0,
    ///     |pair: &(i32, i32)| pair.1,
    ///     |first, second, _| (first, second),
    /// );
    /// assert_eq!(both.modify((1, 2), |n| n * 10), (10, 20));
    /// ```
    pub fn both<G1, G2, F>(first: G1, second: G2, set: F) -> Self
    where
        G1: Fn(&S) -> A + 'static,
        G2: Fn(&S) -> A + 'static,
        F: Fn(B, B, S) -> T + 'static,
    {
        let (first, second, set) = (Rc::new(first), Rc::new(second), Rc::new(set));
        let (view_first, view_second) = (Rc::clone(&first), Rc::clone(&second));
        Self::new(
            move |source: &S| vec![view_first(source), view_second(source)],
            move |source: S| {
                let foci = vec![first(&source), second(&source)];
                let set = Rc::clone(&set);
                Parts::new(foci, move |values: Vec<B>| {
                    let mut values = values.into_iter();
                    match (values.next(), values.next()) {
                        (Some(first), Some(second)) => set(first, second, source),
                        _ => unreachable!("two-focus rebuild received fewer than two replacements"),
                    }
                })
            },
        )
    }

    /// Takes the source apart into its foci and rebuild.
    pub fn parts(&self, source: S) -> Parts<A, B, T> {
        (self.walk)(source)
    }

    /// Modifies every focus with an effectful function, sequencing the
    /// effects left to right, and rebuilds the source inside the effect.
    ///
    /// # Example
    ///
    /// ```
    /// use opticus::optics::{PTraversal, vec_each};
    ///
    /// let each: PTraversal<Vec<&str>, Vec<i32>, &str, i32> = vec_each();
    /// let parse = |text: &str| text.parse::<i32>().map_err(|_| text.to_string());
    /// assert_eq!(each.modify_f(vec!["1", "2"], parse), Ok(vec![1, 2]));
    /// assert_eq!(each.modify_f(vec!["1", "x", "y"], parse), Err("x".to_string()));
    /// ```
    pub fn modify_f<FB, F>(&self, source: S, function: F) -> FB::WithType<T>
    where
        FB: Applicative<Inner = B>,
        F: FnMut(A) -> FB,
    {
        let (foci, rebuild) = self.parts(source).into_parts();
        FB::traverse_into(foci, function, rebuild)
    }

    /// Modifies every focus.
    pub fn modify<F>(&self, source: S, mut function: F) -> T
    where
        F: FnMut(A) -> B,
    {
        self.modify_f(source, |focus| Identity(function(focus)))
            .into_inner()
    }

    /// Replaces every focus with `value`.
    pub fn set(&self, source: S, value: B) -> T
    where
        B: Clone,
    {
        self.modify(source, |_| value.clone())
    }

    /// Lifts a focus function into a source function.
    pub fn lift<F>(&self, function: F) -> impl Fn(S) -> T + use<S, T, A, B, F>
    where
        F: Fn(A) -> B + 'static,
    {
        let traversal = self.clone();
        move |source| traversal.modify(source, &function)
    }

    /// Lifts an effectful focus function into an effectful source function.
    pub fn lift_f<FB, F>(&self, function: F) -> impl Fn(S) -> FB::WithType<T> + use<S, T, A, B, FB, F>
    where
        FB: Applicative<Inner = B>,
        F: Fn(A) -> FB + 'static,
    {
        let traversal = self.clone();
        move |source| traversal.modify_f(source, &function)
    }

    // =========================================================================
    // Read side
    // =========================================================================

    /// Lists every focus in order.
    pub fn get_all(&self, source: &S) -> Vec<A> {
        (self.view)(source)
    }

    /// Maps every focus into a monoid and combines the results in order.
    pub fn fold_map<M, F>(&self, source: &S, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(A) -> M,
    {
        Const::<M, ()>::traverse_into(
            self.get_all(source),
            |focus| Const::new(function(focus)),
            |_| (),
        )
        .into_value()
    }

    /// Folds the foci from the left.
    pub fn fold<R, F>(&self, source: &S, initial: R, function: F) -> R
    where
        F: FnMut(R, A) -> R,
    {
        self.get_all(source).into_iter().fold(initial, function)
    }

    /// Combines every focus with its monoid.
    pub fn combine_all(&self, source: &S) -> A
    where
        A: Monoid,
    {
        self.fold_map(source, |focus| focus)
    }

    /// Counts the foci.
    pub fn size(&self, source: &S) -> usize {
        self.fold_map(source, |_| Sum::new(1_usize)).into_inner()
    }

    /// Returns the focus at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`OpticsError::IndexOutOfBounds`] if there are not more than
    /// `index` foci.
    pub fn get(&self, source: &S, index: usize) -> Result<A, OpticsError> {
        let foci = self.get_all(source);
        let length = foci.len();
        foci.into_iter()
            .nth(index)
            .ok_or(OpticsError::IndexOutOfBounds { index, length })
    }

    /// Returns the first focus satisfying `predicate`.
    ///
    /// The read side collects every focus before searching; `predicate` is
    /// not called past the first match. `exists`, `head_option` and
    /// `is_empty` also read every focus.
    pub fn find<P>(&self, source: &S, predicate: P) -> Option<A>
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).into_iter().find(predicate)
    }

    /// Checks whether any focus satisfies `predicate`.
    pub fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.find(source, predicate).is_some()
    }

    /// Checks whether every focus satisfies `predicate`.
    pub fn for_all<P>(&self, source: &S, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.get_all(source).iter().all(|focus| predicate(focus))
    }

    /// Returns the first focus.
    pub fn head_option(&self, source: &S) -> Option<A> {
        self.fold_map(source, First::new).into_inner()
    }

    /// Returns the last focus.
    pub fn last_option(&self, source: &S) -> Option<A> {
        self.fold_map(source, Last::new).into_inner()
    }

    /// Checks whether there are no foci.
    pub fn is_empty(&self, source: &S) -> bool {
        self.get_all(source).is_empty()
    }

    /// Checks whether there is at least one focus.
    pub fn non_empty(&self, source: &S) -> bool {
        !self.is_empty(source)
    }

    // =========================================================================
    // Combinators and conversions
    // =========================================================================

    /// Traverses whichever of two sources is present.
    pub fn choice<S1, T1>(
        &self,
        other: &PTraversal<S1, T1, A, B>,
    ) -> PTraversal<Either<S, S1>, Either<T, T1>, A, B>
    where
        S1: 'static,
        T1: 'static,
    {
        let (view, other_view) = (Rc::clone(&self.view), Rc::clone(&other.view));
        let (walk, other_walk) = (Rc::clone(&self.walk), Rc::clone(&other.walk));
        PTraversal::new(
            move |source: &Either<S, S1>| match source {
                Either::Left(source) => view(source),
                Either::Right(source) => other_view(source),
            },
            move |source: Either<S, S1>| match source {
                Either::Left(source) => {
                    let (foci, rebuild) = walk(source).into_parts();
                    Parts::new(foci, move |values| Either::Left(rebuild(values)))
                }
                Either::Right(source) => {
                    let (foci, rebuild) = other_walk(source).into_parts();
                    Parts::new(foci, move |values| Either::Right(rebuild(values)))
                }
            },
        )
    }

    /// Views this traversal as a setter.
    pub fn as_setter(&self) -> PSetter<S, T, A, B> {
        let traversal = self.clone();
        PSetter::new(move |source, function| traversal.modify(source, function))
    }

    /// Views the read side of this traversal as a fold.
    pub fn as_fold(&self) -> Fold<S, A> {
        let view = Rc::clone(&self.view);
        Fold::new(move |source| view(source))
    }
}

impl<S> PTraversal<S, S, S, S>
where
    S: Clone + 'static,
{
    /// The traversal with the whole source as its only focus.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(
            |source: &S| vec![source.clone()],
            |source: S| Parts::new(vec![source], take_single),
        )
    }
}

impl<S, A, B> PTraversal<S, S, A, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    /// The traversal with no foci.
    #[must_use]
    pub fn void() -> Self {
        Self::new(
            |_: &S| Vec::new(),
            |source: S| Parts::new(Vec::new(), move |_| source),
        )
    }
}

impl<S, T, A, B> Clone for PTraversal<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            view: Rc::clone(&self.view),
            walk: Rc::clone(&self.walk),
        }
    }
}

impl<S, T, A, B> fmt::Debug for PTraversal<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("PTraversal").finish_non_exhaustive()
    }
}
