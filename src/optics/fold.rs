//! Fold optics: read-only access to zero or more foci.
//!
//! A Fold lists its foci in order. Every read is expressed through
//! [`Fold::fold_map`], which maps each focus into a [`Monoid`] and combines
//! the results left to right.
//!
//! # Examples
//!
//! ```
//! use opticus::optics::Fold;
//!
//! let evens: Fold<Vec<i32>, i32> =
//!     Fold::new(|source: &Vec<i32>| source.iter().copied().filter(|n| n % 2 == 0).collect());
//!
//! let data = vec![1, 2, 3, 4];
//! assert_eq!(evens.get_all(&data), vec![2, 4]);
//! assert_eq!(evens.size(&data), 2);
//! assert_eq!(evens.head_option(&data), Some(2));
//! assert!(evens.for_all(&data, |n| n % 2 == 0));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::control::Either;
use crate::typeclass::{Applicative, Const, First, Last, Monoid, Sum};

/// Reads zero or more `A`s out of an `S`.
pub struct Fold<S, A> {
    view: Rc<dyn Fn(&S) -> Vec<A>>,
}

impl<S, A> Fold<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a fold from a function listing the foci in order.
    pub fn new<V>(view: V) -> Self
    where
        V: Fn(&S) -> Vec<A> + 'static,
    {
        Self { view: Rc::new(view) }
    }

    /// Lists every focus in order.
    pub fn get_all(&self, source: &S) -> Vec<A> {
        (self.view)(source)
    }

    /// Maps every focus into a monoid and combines the results in order.
    ///
    /// # Example
    ///
    /// ```
    /// use opticus::optics::Fold;
    /// use opticus::typeclass::Sum;
    ///
    /// let every: Fold<Vec<i32>, i32> = Fold::new(|source: &Vec<i32>| source.clone());
    /// assert_eq!(every.fold_map(&vec![1, 2, 3], Sum::new).into_inner(), 6);
    /// assert_eq!(every.fold_map(&vec![1, 2], |n| n.to_string()), "12");
    /// ```
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

    /// Returns the first focus satisfying `predicate`.
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

    /// Checks whether every focus satisfies `predicate`. True when there
    /// are none.
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

    /// Reads whichever side of an `Either` is present.
    pub fn choice<S1>(&self, other: &Fold<S1, A>) -> Fold<Either<S, S1>, A>
    where
        S1: 'static,
    {
        let (left, right) = (Rc::clone(&self.view), Rc::clone(&other.view));
        Fold::new(move |source: &Either<S, S1>| match source {
            Either::Left(source) => left(source),
            Either::Right(source) => right(source),
        })
    }
}

impl<S> Fold<S, S>
where
    S: Clone + 'static,
{
    /// The fold whose only focus is the whole source.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|source: &S| vec![source.clone()])
    }
}

impl<S, A> Fold<S, A>
where
    S: 'static,
    A: 'static,
{
    /// The fold with no foci.
    #[must_use]
    pub fn void() -> Self {
        Self::new(|_| Vec::new())
    }
}

impl<S, A> Clone for Fold<S, A> {
    fn clone(&self) -> Self {
        Self {
            view: Rc::clone(&self.view),
        }
    }
}

impl<S, A> fmt::Debug for Fold<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Fold").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Product;
    use rstest::rstest;

    fn every() -> Fold<Vec<i32>, i32> {
        Fold::new(|source: &Vec<i32>| source.clone())
    }

    #[rstest]
    #[case(vec![], 0, None, None)]
    #[case(vec![7], 1, Some(7), Some(7))]
    #[case(vec![1, 2, 3], 3, Some(1), Some(3))]
    fn size_head_last(
        #[case] source: Vec<i32>,
        #[case] size: usize,
        #[case] head: Option<i32>,
        #[case] last: Option<i32>,
    ) {
        assert_eq!(every().size(&source), size);
        assert_eq!(every().head_option(&source), head);
        assert_eq!(every().last_option(&source), last);
    }

    #[rstest]
    fn fold_map_combines_in_order() {
        let data = vec![2, 3, 4];
        assert_eq!(every().fold_map(&data, Product::new).into_inner(), 24);
        assert_eq!(every().fold_map(&data, |n| vec![n, n]), vec![2, 2, 3, 3, 4, 4]);
        assert_eq!(every().fold(&data, String::new(), |acc, n| acc + &n.to_string()), "234");
    }

    #[rstest]
    fn combine_all_uses_focus_monoid() {
        let words: Fold<Vec<String>, String> = Fold::new(|source: &Vec<String>| source.clone());
        assert_eq!(words.combine_all(&vec!["a".into(), "b".into()]), "ab");
        assert_eq!(words.combine_all(&vec![]), "");
    }

    #[rstest]
    fn predicates_on_empty_source() {
        let empty: Vec<i32> = vec![];
        assert!(every().for_all(&empty, |_| false));
        assert!(!every().exists(&empty, |_| true));
        assert!(every().is_empty(&empty));
        assert!(Fold::<i32, i32>::void().is_empty(&1));
    }

    #[rstest]
    fn find_returns_first_match() {
        assert_eq!(every().find(&vec![1, 4, 6], |n| n % 2 == 0), Some(4));
        assert!(every().non_empty(&vec![0]));
    }

    #[rstest]
    fn choice_and_identity() {
        let single: Fold<i32, i32> = Fold::identity();
        let either = every().choice(&single);
        assert_eq!(either.get_all(&Either::Left(vec![1, 2])), vec![1, 2]);
        assert_eq!(either.get_all(&Either::Right(9)), vec![9]);
    }
}
