//! Prism optics for focusing on one case of a sum type.
//!
//! A Prism either matches its case, yielding the focus, or misses and hands
//! the source back as `Either::Left`. In the other direction it can always
//! build a source from a focus with `reverse_get`.
//!
//! # Laws
//!
//! 1. **PartialRoundTripOneWay**: a match rebuilt with `reverse_get` is the
//!    original source; a miss is returned unchanged.
//!    ```text
//!    prism.get_or_modify(source).fold(|s| s, |a| prism.reverse_get(a)) == source
//!    ```
//! 2. **RoundTripOtherWay**: what was built is matched again.
//!    ```text
//!    prism.get_option(&prism.reverse_get(value)) == Some(value)
//!    ```
//!
//! # Examples
//!
//! ```
//! use opticus::optics::{Prism, some_prism};
//!
//! let some: Prism<Option<i32>, i32> = some_prism();
//! assert_eq!(some.get_option(&Some(3)), Some(3));
//! assert_eq!(some.modify(Some(3), |n| n + 1), Some(4));
//! assert_eq!(some.modify(None, |n| n + 1), None);
//! assert_eq!(some.reverse_get(7), Some(7));
//! ```

use std::fmt;
use std::rc::Rc;

use super::fold::Fold;
use super::optional::{Context, POptional};
use super::setter::PSetter;
use super::traversal::{PTraversal, Parts, take_single};
use crate::control::Either;
use crate::typeclass::Applicative;

/// A polymorphic prism: zero or one `A` inside an `S`, and a way to build a
/// `T` from a `B`.
pub struct PPrism<S, T, A, B> {
    get_or_modify: Rc<dyn Fn(S) -> Either<T, A>>,
    preview: Rc<dyn Fn(&S) -> Option<A>>,
    reverse_get: Rc<dyn Fn(B) -> T>,
}

/// A prism that preserves the types of source and focus.
pub type Prism<S, A> = PPrism<S, S, A, A>;

impl<S, A> PPrism<S, S, A, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a prism from a partial getter and a constructor.
    ///
    /// On a miss the source is handed back as it was, without a clone.
    ///
    /// # Example
    ///
    /// ```
    /// use opticus::optics::Prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle: Prism<Shape, f64> = Prism::from_preview(
    ///     |shape: &Shape| match shape { Shape::Circle(r) => Some(*r), _ => None },
    ///     Shape::Circle,
    /// );
    /// assert_eq!(circle.set(Shape::Square(1.0), 2.0), Shape::Square(1.0));
    /// assert_eq!(circle.set(Shape::Circle(1.0), 2.0), Shape::Circle(2.0));
    /// ```
    pub fn from_preview<P, R>(preview: P, reverse_get: R) -> Self
    where
        P: Fn(&S) -> Option<A> + 'static,
        R: Fn(A) -> S + 'static,
    {
        let preview = Rc::new(preview);
        let matcher = Rc::clone(&preview);
        Self::from_parts(
            move |source: S| match matcher(&source) {
                Some(focus) => Either::Right(focus),
                None => Either::Left(source),
            },
            move |source: &S| preview(source),
            reverse_get,
        )
    }
}

impl<S, T, A, B> PPrism<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Creates a prism from `get_or_modify` and `reverse_get`.
    ///
    /// `get_option` runs `get_or_modify` on a clone of the source.
    pub fn new<G, R>(get_or_modify: G, reverse_get: R) -> Self
    where
        S: Clone,
        G: Fn(S) -> Either<T, A> + 'static,
        R: Fn(B) -> T + 'static,
    {
        let get_or_modify = Rc::new(get_or_modify);
        let preview = Rc::clone(&get_or_modify);
        Self::from_parts(
            move |source| get_or_modify(source),
            move |source: &S| preview(source.clone()).right(),
            reverse_get,
        )
    }

    /// Creates a prism from all three of its functions.
    ///
    /// `get_or_modify` and `preview` must agree on which sources match.
    pub fn from_parts<G, P, R>(get_or_modify: G, preview: P, reverse_get: R) -> Self
    where
        G: Fn(S) -> Either<T, A> + 'static,
        P: Fn(&S) -> Option<A> + 'static,
        R: Fn(B) -> T + 'static,
    {
        Self {
            get_or_modify: Rc::new(get_or_modify),
            preview: Rc::new(preview),
            reverse_get: Rc::new(reverse_get),
        }
    }

    /// Returns the focus, or the unmatched source as `T`.
    pub fn get_or_modify(&self, source: S) -> Either<T, A> {
        (self.get_or_modify)(source)
    }

    /// Returns the focus if the source matches.
    pub fn get_option(&self, source: &S) -> Option<A> {
        (self.preview)(source)
    }

    /// Builds a source from a focus.
    pub fn reverse_get(&self, value: B) -> T {
        (self.reverse_get)(value)
    }

    /// Replaces the focus if the source matches.
    pub fn set(&self, source: S, value: B) -> T {
        self.modify(source, move |_| value)
    }

    /// Replaces the focus, or returns `None` on a miss.
    pub fn set_option(&self, source: S, value: B) -> Option<T> {
        self.modify_option(source, move |_| value)
    }

    /// Modifies the focus if the source matches; a miss returns the source
    /// itself.
    pub fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        match self.get_or_modify(source) {
            Either::Left(unmatched) => unmatched,
            Either::Right(focus) => self.reverse_get(function(focus)),
        }
    }

    /// Modifies the focus, or returns `None` on a miss.
    pub fn modify_option<F>(&self, source: S, function: F) -> Option<T>
    where
        F: FnOnce(A) -> B,
    {
        self.get_or_modify(source)
            .right()
            .map(|focus| self.reverse_get(function(focus)))
    }

    /// Modifies the focus with an effectful function; a miss lifts the
    /// source with `pure`.
    pub fn modify_f<FB, F>(&self, source: S, function: F) -> FB::WithType<T>
    where
        FB: Applicative<Inner = B>,
        F: FnOnce(A) -> FB,
    {
        match self.get_or_modify(source) {
            Either::Left(unmatched) => FB::pure(unmatched),
            Either::Right(focus) => {
                let reverse_get = Rc::clone(&self.reverse_get);
                function(focus).fmap(move |value| reverse_get(value))
            }
        }
    }

    /// Lifts a focus function into a source function.
    pub fn lift<F>(&self, function: F) -> impl Fn(S) -> T + use<S, T, A, B, F>
    where
        F: Fn(A) -> B + 'static,
    {
        let prism = self.clone();
        move |source| prism.modify(source, &function)
    }

    /// Lifts an effectful focus function into an effectful source function.
    pub fn lift_f<FB, F>(&self, function: F) -> impl Fn(S) -> FB::WithType<T> + use<S, T, A, B, FB, F>
    where
        FB: Applicative<Inner = B>,
        F: Fn(A) -> FB + 'static,
    {
        let prism = self.clone();
        move |source| prism.modify_f(source, &function)
    }

    /// Returns the focus if it exists and satisfies `predicate`.
    pub fn find<P>(&self, source: &S, predicate: P) -> Option<A>
    where
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).filter(predicate)
    }

    /// Checks whether a focus exists and satisfies `predicate`.
    pub fn exists<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).is_some_and(|focus| predicate(&focus))
    }

    /// Checks that the focus, if any, satisfies `predicate`.
    pub fn all<P>(&self, source: &S, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        self.get_option(source).is_none_or(|focus| predicate(&focus))
    }

    /// Checks whether the source misses.
    pub fn is_empty(&self, source: &S) -> bool {
        self.get_option(source).is_none()
    }

    /// Checks whether the source matches.
    pub fn non_empty(&self, source: &S) -> bool {
        !self.is_empty(source)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Pairs the focus with a value carried alongside the source.
    pub fn first<C>(&self) -> PPrism<(S, C), (T, C), (A, C), (B, C)>
    where
        C: Clone + 'static,
    {
        let get_or_modify = Rc::clone(&self.get_or_modify);
        let preview = Rc::clone(&self.preview);
        let reverse_get = Rc::clone(&self.reverse_get);
        PPrism::from_parts(
            move |(source, carried): (S, C)| match get_or_modify(source) {
                Either::Left(unmatched) => Either::Left((unmatched, carried)),
                Either::Right(focus) => Either::Right((focus, carried)),
            },
            move |(source, carried): &(S, C)| preview(source).map(|focus| (focus, carried.clone())),
            move |(value, carried): (B, C)| (reverse_get(value), carried),
        )
    }

    /// Pairs a value carried alongside the source with the focus.
    pub fn second<C>(&self) -> PPrism<(C, S), (C, T), (C, A), (C, B)>
    where
        C: Clone + 'static,
    {
        let get_or_modify = Rc::clone(&self.get_or_modify);
        let preview = Rc::clone(&self.preview);
        let reverse_get = Rc::clone(&self.reverse_get);
        PPrism::from_parts(
            move |(carried, source): (C, S)| match get_or_modify(source) {
                Either::Left(unmatched) => Either::Left((carried, unmatched)),
                Either::Right(focus) => Either::Right((carried, focus)),
            },
            move |(carried, source): &(C, S)| preview(source).map(|focus| (carried.clone(), focus)),
            move |(carried, value): (C, B)| (carried, reverse_get(value)),
        )
    }

    /// Matches the left side of an `Either` with this prism; a right side
    /// always matches and passes through.
    pub fn left<C>(&self) -> PPrism<Either<S, C>, Either<T, C>, Either<A, C>, Either<B, C>>
    where
        C: Clone + 'static,
    {
        let get_or_modify = Rc::clone(&self.get_or_modify);
        let preview = Rc::clone(&self.preview);
        let reverse_get = Rc::clone(&self.reverse_get);
        PPrism::from_parts(
            move |source: Either<S, C>| match source {
                Either::Left(source) => get_or_modify(source).bimap(Either::Left, Either::Left),
                Either::Right(carried) => Either::Right(Either::Right(carried)),
            },
            move |source: &Either<S, C>| match source {
                Either::Left(source) => preview(source).map(Either::Left),
                Either::Right(carried) => Some(Either::Right(carried.clone())),
            },
            move |value: Either<B, C>| value.map_left(|value| reverse_get(value)),
        )
    }

    /// Matches the right side of an `Either` with this prism; a left side
    /// always matches and passes through.
    pub fn right<C>(&self) -> PPrism<Either<C, S>, Either<C, T>, Either<C, A>, Either<C, B>>
    where
        C: Clone + 'static,
    {
        let get_or_modify = Rc::clone(&self.get_or_modify);
        let preview = Rc::clone(&self.preview);
        let reverse_get = Rc::clone(&self.reverse_get);
        PPrism::from_parts(
            move |source: Either<C, S>| match source {
                Either::Left(carried) => Either::Right(Either::Left(carried)),
                Either::Right(source) => get_or_modify(source).bimap(Either::Right, Either::Right),
            },
            move |source: &Either<C, S>| match source {
                Either::Left(carried) => Some(Either::Left(carried.clone())),
                Either::Right(source) => preview(source).map(Either::Right),
            },
            move |value: Either<C, B>| value.map_right(|value| reverse_get(value)),
        )
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Views this prism as an optional.
    pub fn as_optional(&self) -> POptional<S, T, A, B> {
        let get_or_modify = Rc::clone(&self.get_or_modify);
        let preview = Rc::clone(&self.preview);
        let reverse_get = Rc::clone(&self.reverse_get);
        POptional::from_focus(
            move |source: S| {
                let reverse_get = Rc::clone(&reverse_get);
                get_or_modify(source)
                    .map_right(|focus| Context::new(focus, move |value| reverse_get(value)))
            },
            move |source: &S| preview(source),
        )
    }

    /// Views this prism as a traversal with zero or one focus.
    pub fn as_traversal(&self) -> PTraversal<S, T, A, B> {
        let get_or_modify = Rc::clone(&self.get_or_modify);
        let preview = Rc::clone(&self.preview);
        let reverse_get = Rc::clone(&self.reverse_get);
        PTraversal::new(
            move |source: &S| preview(source).into_iter().collect(),
            move |source: S| match get_or_modify(source) {
                Either::Left(unmatched) => Parts::new(Vec::new(), move |_| unmatched),
                Either::Right(focus) => {
                    let reverse_get = Rc::clone(&reverse_get);
                    Parts::new(vec![focus], move |values| reverse_get(take_single(values)))
                }
            },
        )
    }

    /// Views this prism as a setter.
    pub fn as_setter(&self) -> PSetter<S, T, A, B> {
        let prism = self.clone();
        PSetter::new(move |source, function| prism.modify(source, function))
    }

    /// Views the matching side of this prism as a fold.
    pub fn as_fold(&self) -> Fold<S, A> {
        let preview = Rc::clone(&self.preview);
        Fold::new(move |source| preview(source).into_iter().collect())
    }
}

impl<S> PPrism<S, S, S, S>
where
    S: Clone + 'static,
{
    /// The prism that always matches the whole source.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_parts(Either::Right, |source: &S| Some(source.clone()), |value| value)
    }
}

impl<A> PPrism<A, A, (), ()>
where
    A: PartialEq + Clone + 'static,
{
    /// The prism that matches exactly `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use opticus::optics::Prism;
    ///
    /// let zero: Prism<i32, ()> = Prism::only(0);
    /// assert!(zero.non_empty(&0));
    /// assert!(zero.is_empty(&1));
    /// assert_eq!(zero.reverse_get(()), 0);
    /// ```
    pub fn only(value: A) -> Self {
        let matched = value.clone();
        let previewed = value.clone();
        Self::from_parts(
            move |source: A| if source == matched { Either::Right(()) } else { Either::Left(source) },
            move |source: &A| (*source == previewed).then_some(()),
            move |()| value.clone(),
        )
    }
}

impl<S, T, A, B> Clone for PPrism<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            get_or_modify: Rc::clone(&self.get_or_modify),
            preview: Rc::clone(&self.preview),
            reverse_get: Rc::clone(&self.reverse_get),
        }
    }
}

impl<S, T, A, B> fmt::Debug for PPrism<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("PPrism").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    enum SumType {
        A(String),
        B(i32),
    }

    fn sum_prism() -> Prism<SumType, String> {
        Prism::from_preview(
            |sum: &SumType| match sum {
                SumType::A(text) => Some(text.clone()),
                SumType::B(_) => None,
            },
            SumType::A,
        )
    }

    #[rstest]
    #[case(SumType::A("x".into()), Some("x".to_string()))]
    #[case(SumType::B(1), None)]
    fn get_option(#[case] source: SumType, #[case] expected: Option<String>) {
        assert_eq!(sum_prism().get_option(&source), expected);
    }

    #[rstest]
    fn set_on_miss_returns_source() {
        assert_eq!(sum_prism().set(SumType::B(2), "y".into()), SumType::B(2));
        assert_eq!(sum_prism().set_option(SumType::B(2), "y".into()), None);
        assert_eq!(
            sum_prism().set_option(SumType::A("x".into()), "y".into()),
            Some(SumType::A("y".into()))
        );
    }

    #[rstest]
    fn modify_option_and_modify_f() {
        assert_eq!(sum_prism().modify_option(SumType::B(1), |s| s + "!"), None);
        assert_eq!(
            sum_prism().modify_f(SumType::A("a".into()), |s| Identity(s + "b")),
            Identity(SumType::A("ab".into()))
        );
        assert_eq!(
            sum_prism().modify_f(SumType::B(3), |_| None::<String>),
            Some(SumType::B(3))
        );
    }

    #[rstest]
    fn predicates() {
        let a = SumType::A("text".into());
        assert!(sum_prism().exists(&a, |s| s.len() == 4));
        assert!(sum_prism().all(&SumType::B(0), |_| false));
        assert_eq!(sum_prism().find(&a, |s| s.is_empty()), None);
        assert!(sum_prism().is_empty(&SumType::B(0)));
        assert!(sum_prism().non_empty(&a));
    }

    #[rstest]
    fn new_clones_for_preview() {
        let even: Prism<i32, i32> = PPrism::new(
            |n: i32| if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(n) },
            |half| half * 2,
        );
        assert_eq!(even.get_option(&8), Some(4));
        assert_eq!(even.modify(8, |half| half + 1), 10);
        assert_eq!(even.modify(7, |half| half + 1), 7);
    }

    #[rstest]
    fn first_and_second() {
        let first = sum_prism().first::<i32>();
        assert_eq!(first.get_option(&(SumType::A("a".into()), 1)), Some(("a".to_string(), 1)));
        assert_eq!(first.reverse_get(("b".into(), 2)), (SumType::A("b".into()), 2));
        let second = sum_prism().second::<i32>();
        assert_eq!(second.get_option(&(1, SumType::B(0))), None);
    }

    #[rstest]
    fn left_passes_right_through() {
        let left = sum_prism().left::<u8>();
        assert_eq!(left.get_option(&Either::Right(3)), Some(Either::Right(3)));
        assert_eq!(left.get_option(&Either::Left(SumType::B(1))), None);
        assert_eq!(
            left.modify(Either::Left(SumType::A("a".into())), |e| e.map_left(|s| s + "!")),
            Either::Left(SumType::A("a!".into()))
        );
    }

    #[rstest]
    fn right_passes_left_through() {
        let right = sum_prism().right::<u8>();
        assert_eq!(right.get_option(&Either::Left(3)), Some(Either::Left(3)));
        assert_eq!(right.reverse_get(Either::Right("z".into())), Either::Right(SumType::A("z".into())));
    }

    #[rstest]
    fn identity_and_only() {
        assert_eq!(Prism::<i32, i32>::identity().get_option(&5), Some(5));
        let five = Prism::only(5);
        assert_eq!(five.get_option(&5), Some(()));
        assert_eq!(five.set(4, ()), 4);
    }

    #[rstest]
    fn conversions() {
        let a = SumType::A("a".into());
        assert_eq!(sum_prism().as_optional().get_option(&a), Some("a".to_string()));
        assert_eq!(
            sum_prism().as_optional().set(SumType::B(1), "x".into()),
            SumType::B(1)
        );
        assert_eq!(sum_prism().as_traversal().get_all(&SumType::B(1)), Vec::<String>::new());
        assert_eq!(
            sum_prism().as_traversal().modify(a.clone(), |s| s.to_uppercase()),
            SumType::A("A".into())
        );
        assert_eq!(sum_prism().as_setter().set(a.clone(), "s".into()), SumType::A("s".into()));
        assert_eq!(sum_prism().as_fold().size(&a), 1);
    }

    #[rstest]
    fn lift_modifies_match() {
        let shout = sum_prism().lift(|s: String| s.to_uppercase());
        assert_eq!(shout(SumType::A("a".into())), SumType::A("A".into()));
        assert_eq!(shout(SumType::B(1)), SumType::B(1));
    }
}
