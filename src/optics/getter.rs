//! Getter optics: read-only access to exactly one focus.
//!
//! # Examples
//!
//! ```
//! use opticus::optics::Getter;
//!
//! let length: Getter<String, usize> = Getter::new(String::len);
//! assert_eq!(length.get(&"four".to_string()), 4);
//! assert!(length.exists(&"four".to_string(), |n| *n > 3));
//! ```

use std::fmt;
use std::rc::Rc;

use super::fold::Fold;
use crate::control::Either;

/// Reads one `A` out of an `S`.
pub struct Getter<S, A> {
    get: Rc<dyn Fn(&S) -> A>,
}

impl<S, A> Getter<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a getter from a read function.
    pub fn new<G>(get: G) -> Self
    where
        G: Fn(&S) -> A + 'static,
    {
        Self { get: Rc::new(get) }
    }

    /// Reads the focus.
    pub fn get(&self, source: &S) -> A {
        (self.get)(source)
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

    /// Reads this focus and `other`'s from the same source.
    ///
    /// # Example
    ///
    /// ```
    /// use opticus::optics::Getter;
    ///
    /// let low: Getter<(i32, i32), i32> = Getter::new(|pair: &(i32, i32)| pair.0.min(pair.1));
    /// let high: Getter<(i32, i32), i32> = Getter::new(|pair: &(i32, i32)| pair.0.max(pair.1));
    /// assert_eq!(low.zip(&high).get(&(5, 2)), (2, 5));
    /// ```
    pub fn zip<A1>(&self, other: &Getter<S, A1>) -> Getter<S, (A, A1)>
    where
        A1: 'static,
    {
        let (first, second) = (Rc::clone(&self.get), Rc::clone(&other.get));
        Getter::new(move |source| (first(source), second(source)))
    }

    /// Reads the focus of the first element, carrying the second.
    pub fn first<C>(&self) -> Getter<(S, C), (A, C)>
    where
        C: Clone + 'static,
    {
        let get = Rc::clone(&self.get);
        Getter::new(move |(source, carried): &(S, C)| (get(source), carried.clone()))
    }

    /// Reads the focus of the second element, carrying the first.
    pub fn second<C>(&self) -> Getter<(C, S), (C, A)>
    where
        C: Clone + 'static,
    {
        let get = Rc::clone(&self.get);
        Getter::new(move |(carried, source): &(C, S)| (carried.clone(), get(source)))
    }

    /// Reads both halves of a pair, one getter each.
    pub fn split<S1, A1>(&self, other: &Getter<S1, A1>) -> Getter<(S, S1), (A, A1)>
    where
        S1: 'static,
        A1: 'static,
    {
        let (first, second) = (Rc::clone(&self.get), Rc::clone(&other.get));
        Getter::new(move |(left, right): &(S, S1)| (first(left), second(right)))
    }

    /// Reads whichever side of an `Either` is present.
    pub fn choice<S1>(&self, other: &Getter<S1, A>) -> Getter<Either<S, S1>, A>
    where
        S1: 'static,
    {
        let (left, right) = (Rc::clone(&self.get), Rc::clone(&other.get));
        Getter::new(move |source: &Either<S, S1>| match source {
            Either::Left(source) => left(source),
            Either::Right(source) => right(source),
        })
    }

    /// Reads the left side with this getter and passes a right side through.
    pub fn left<C>(&self) -> Getter<Either<S, C>, Either<A, C>>
    where
        C: Clone + 'static,
    {
        let get = Rc::clone(&self.get);
        Getter::new(move |source: &Either<S, C>| match source {
            Either::Left(source) => Either::Left(get(source)),
            Either::Right(carried) => Either::Right(carried.clone()),
        })
    }

    /// Reads the right side with this getter and passes a left side through.
    pub fn right<C>(&self) -> Getter<Either<C, S>, Either<C, A>>
    where
        C: Clone + 'static,
    {
        let get = Rc::clone(&self.get);
        Getter::new(move |source: &Either<C, S>| match source {
            Either::Left(carried) => Either::Left(carried.clone()),
            Either::Right(source) => Either::Right(get(source)),
        })
    }

    /// Views this getter as a fold with one focus.
    pub fn as_fold(&self) -> Fold<S, A> {
        let get = Rc::clone(&self.get);
        Fold::new(move |source| vec![get(source)])
    }
}

impl<S> Getter<S, S>
where
    S: Clone + 'static,
{
    /// The getter whose focus is the whole source.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(S::clone)
    }
}

impl<S, A> Clone for Getter<S, A> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
        }
    }
}

impl<S, A> fmt::Debug for Getter<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Getter").finish_non_exhaustive()
    }
}
