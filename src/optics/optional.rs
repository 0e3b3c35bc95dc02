//! Optional optics for foci that may be absent.
//!
//! An Optional finds zero or one focus. On a match it yields a [`Context`]:
//! the focus together with a one-shot rebuild of the source. On a miss it
//! hands the source back unchanged as `Either::Left`, so modifying through
//! an Optional that does not match is the identity.
//!
//! `Lens` composed with `Prism` produces an Optional, as does any composition
//! with an Optional.
//!
//! # Laws
//!
//! 1. **GetOptionSet**: `get_or_modify(s).fold(|t| t, |a| set(s, a)) == s`
//! 2. **SetGetOption**: `get_option(set(s, a)) == get_option(s).map(|_| a)`
//! 3. **SetSet**: `set(set(s, a), a) == set(s, a)`
//!
//! # Examples
//!
//! ```
//! use opticus::optics::Optional;
//!
//! let head: Optional<Vec<i32>, i32> = Optional::new(
//!     |list: &Vec<i32>| list.first().copied(),
//!     |mut list: Vec<i32>, value| {
//!         if let Some(first) = list.first_mut() {
//!             *first = value;
//!         }
//!         list
//!     },
//! );
//!
//! assert_eq!(head.modify(vec![1, 2, 3], |n| n * 10), vec![10, 2, 3]);
//! assert_eq!(head.modify(Vec::new(), |n| n * 10), Vec::<i32>::new());
//! assert_eq!(head.get_option(&vec![]), None);
//! ```

use std::fmt;
use std::rc::Rc;

use super::fold::Fold;
use super::setter::PSetter;
use super::traversal::{PTraversal, Parts, take_single};
use crate::control::Either;
use crate::typeclass::Applicative;

/// A matched focus together with the function that rebuilds its source.
pub struct Context<A, B, T> {
    focus: A,
    rebuild: Box<dyn FnOnce(B) -> T>,
}

impl<A, B, T> Context<A, B, T> {
    /// Pairs a focus with its rebuild.
    pub fn new<F>(focus: A, rebuild: F) -> Self
    where
        F: FnOnce(B) -> T + 'static,
    {
        Self {
            focus,
            rebuild: Box::new(rebuild),
        }
    }

    /// Borrows the focus.
    pub const fn focus(&self) -> &A {
        &self.focus
    }

    /// Discards the rebuild.
    pub fn into_focus(self) -> A {
        self.focus
    }

    /// Rebuilds the source around a replacement focus.
    pub fn rebuild(self, value: B) -> T {
        (self.rebuild)(value)
    }

    /// Splits into focus and rebuild.
    pub fn into_parts(self) -> (A, Box<dyn FnOnce(B) -> T>) {
        (self.focus, self.rebuild)
    }
}

impl<A: fmt::Debug, B, T> fmt::Debug for Context<A, B, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Context")
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

/// A polymorphic optional: zero or one `A` inside an `S`.
pub struct POptional<S, T, A, B> {
    focus: Rc<dyn Fn(S) -> Either<T, Context<A, B, T>>>,
    preview: Rc<dyn Fn(&S) -> Option<A>>,
}

/// An optional that preserves the types of source and focus.
pub type Optional<S, A> = POptional<S, S, A, A>;

impl<S, A> POptional<S, S, A, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates an optional from a partial getter and a setter.
    ///
    /// `set` is only called when `get_option` matched.
    pub fn new<G, F>(get_option: G, set: F) -> Self
    where
        G: Fn(&S) -> Option<A> + 'static,
        F: Fn(S, A) -> S + 'static,
    {
        let get_option = Rc::new(get_option);
        let preview = Rc::clone(&get_option);
        let set = Rc::new(set);
        Self::from_focus(
            move |source: S| match get_option(&source) {
                Some(focus) => {
                    let set = Rc::clone(&set);
                    Either::Right(Context::new(focus, move |value| set(source, value)))
                }
                None => Either::Left(source),
            },
            move |source: &S| preview(source),
        )
    }
}

impl<S, T, A, B> POptional<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Creates an optional from its match function and a borrowing preview.
    ///
    /// `focus` must agree with `preview`: it returns `Right` exactly when
    /// `preview` returns `Some`, with the same focus.
    pub fn from_focus<F, P>(focus: F, preview: P) -> Self
    where
        F: Fn(S) -> Either<T, Context<A, B, T>> + 'static,
        P: Fn(&S) -> Option<A> + 'static,
    {
        Self {
            focus: Rc::new(focus),
            preview: Rc::new(preview),
        }
    }

    /// Creates an optional from `get_or_modify` and `set`.
    ///
    /// The source is cloned so that `set` can rebuild it after a match.
    pub fn from_get_or_modify<G, F>(get_or_modify: G, set: F) -> Self
    where
        S: Clone,
        G: Fn(S) -> Either<T, A> + 'static,
        F: Fn(S, B) -> T + 'static,
    {
        let get_or_modify = Rc::new(get_or_modify);
        let preview = Rc::clone(&get_or_modify);
        let set = Rc::new(set);
        Self::from_focus(
            move |source: S| match get_or_modify(source.clone()) {
                Either::Left(unmatched) => Either::Left(unmatched),
                Either::Right(focus) => {
                    let set = Rc::clone(&set);
                    Either::Right(Context::new(focus, move |value| set(source, value)))
                }
            },
            move |source: &S| preview(source.clone()).right(),
        )
    }

    /// Matches the source, yielding the focus with its rebuild, or the
    /// unchanged source.
    pub fn focus(&self, source: S) -> Either<T, Context<A, B, T>> {
        (self.focus)(source)
    }

    /// Returns the focus, or the source converted to `T` on a miss.
    pub fn get_or_modify(&self, source: S) -> Either<T, A> {
        self.focus(source).map_right(Context::into_focus)
    }

    /// Returns the focus if there is one.
    pub fn get_option(&self, source: &S) -> Option<A> {
        (self.preview)(source)
    }

    /// Replaces the focus if there is one.
    pub fn set(&self, source: S, value: B) -> T {
        self.modify(source, move |_| value)
    }

    /// Replaces the focus, or returns `None` if there is none.
    pub fn set_option(&self, source: S, value: B) -> Option<T> {
        self.modify_option(source, move |_| value)
    }

    /// Modifies the focus if there is one; otherwise returns the source
    /// unchanged.
    pub fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        match self.focus(source) {
            Either::Left(unmatched) => unmatched,
            Either::Right(context) => {
                let (focus, rebuild) = context.into_parts();
                rebuild(function(focus))
            }
        }
    }

    /// Modifies the focus, or returns `None` if there is none.
    pub fn modify_option<F>(&self, source: S, function: F) -> Option<T>
    where
        F: FnOnce(A) -> B,
    {
        self.focus(source).right().map(|context| {
            let (focus, rebuild) = context.into_parts();
            rebuild(function(focus))
        })
    }

    /// Modifies the focus with an effectful function. A miss lifts the
    /// unchanged source with `pure`.
    pub fn modify_f<FB, F>(&self, source: S, function: F) -> FB::WithType<T>
    where
        FB: Applicative<Inner = B>,
        F: FnOnce(A) -> FB,
    {
        match self.focus(source) {
            Either::Left(unmatched) => FB::pure(unmatched),
            Either::Right(context) => {
                let (focus, rebuild) = context.into_parts();
                function(focus).fmap(rebuild)
            }
        }
    }

    /// Lifts a focus function into a source function.
    pub fn lift<F>(&self, function: F) -> impl Fn(S) -> T + use<S, T, A, B, F>
    where
        F: Fn(A) -> B + 'static,
    {
        let optional = self.clone();
        move |source| optional.modify(source, &function)
    }

    /// Lifts an effectful focus function into an effectful source function.
    pub fn lift_f<FB, F>(&self, function: F) -> impl Fn(S) -> FB::WithType<T> + use<S, T, A, B, FB, F>
    where
        FB: Applicative<Inner = B>,
        F: Fn(A) -> FB + 'static,
    {
        let optional = self.clone();
        move |source| optional.modify_f(source, &function)
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

    /// Checks whether there is no focus.
    pub fn is_empty(&self, source: &S) -> bool {
        self.get_option(source).is_none()
    }

    /// Checks whether there is a focus.
    pub fn non_empty(&self, source: &S) -> bool {
        !self.is_empty(source)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Pairs the focus with a value carried alongside the source.
    pub fn first<C>(&self) -> POptional<(S, C), (T, C), (A, C), (B, C)>
    where
        C: Clone + 'static,
    {
        let focus = Rc::clone(&self.focus);
        let preview = Rc::clone(&self.preview);
        POptional::from_focus(
            move |(source, carried): (S, C)| match focus(source) {
                Either::Left(unmatched) => Either::Left((unmatched, carried)),
                Either::Right(context) => {
                    let (focus, rebuild) = context.into_parts();
                    Either::Right(Context::new(
                        (focus, carried),
                        move |(value, carried): (B, C)| (rebuild(value), carried),
                    ))
                }
            },
            move |(source, carried): &(S, C)| preview(source).map(|focus| (focus, carried.clone())),
        )
    }

    /// Pairs a value carried alongside the source with the focus.
    pub fn second<C>(&self) -> POptional<(C, S), (C, T), (C, A), (C, B)>
    where
        C: Clone + 'static,
    {
        let focus = Rc::clone(&self.focus);
        let preview = Rc::clone(&self.preview);
        POptional::from_focus(
            move |(carried, source): (C, S)| match focus(source) {
                Either::Left(unmatched) => Either::Left((carried, unmatched)),
                Either::Right(context) => {
                    let (focus, rebuild) = context.into_parts();
                    Either::Right(Context::new(
                        (carried, focus),
                        move |(carried, value): (C, B)| (carried, rebuild(value)),
                    ))
                }
            },
            move |(carried, source): &(C, S)| preview(source).map(|focus| (carried.clone(), focus)),
        )
    }

    /// Focuses on the same focus type in either of two sources.
    pub fn choice<S1, T1>(
        &self,
        other: &POptional<S1, T1, A, B>,
    ) -> POptional<Either<S, S1>, Either<T, T1>, A, B>
    where
        S1: 'static,
        T1: 'static,
    {
        let (focus, other_focus) = (Rc::clone(&self.focus), Rc::clone(&other.focus));
        let (preview, other_preview) = (Rc::clone(&self.preview), Rc::clone(&other.preview));
        POptional::from_focus(
            move |source: Either<S, S1>| match source {
                Either::Left(source) => match focus(source) {
                    Either::Left(unmatched) => Either::Left(Either::Left(unmatched)),
                    Either::Right(context) => {
                        let (focus, rebuild) = context.into_parts();
                        Either::Right(Context::new(focus, move |value| Either::Left(rebuild(value))))
                    }
                },
                Either::Right(source) => match other_focus(source) {
                    Either::Left(unmatched) => Either::Left(Either::Right(unmatched)),
                    Either::Right(context) => {
                        let (focus, rebuild) = context.into_parts();
                        Either::Right(Context::new(focus, move |value| Either::Right(rebuild(value))))
                    }
                },
            },
            move |source: &Either<S, S1>| match source {
                Either::Left(source) => preview(source),
                Either::Right(source) => other_preview(source),
            },
        )
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Views this optional as a traversal with zero or one focus.
    pub fn as_traversal(&self) -> PTraversal<S, T, A, B> {
        let focus = Rc::clone(&self.focus);
        let preview = Rc::clone(&self.preview);
        PTraversal::new(
            move |source: &S| preview(source).into_iter().collect(),
            move |source: S| match focus(source) {
                Either::Left(unmatched) => Parts::new(Vec::new(), move |_| unmatched),
                Either::Right(context) => {
                    let (focus, rebuild) = context.into_parts();
                    Parts::new(vec![focus], move |values| rebuild(take_single(values)))
                }
            },
        )
    }

    /// Views this optional as a setter.
    pub fn as_setter(&self) -> PSetter<S, T, A, B> {
        let optional = self.clone();
        PSetter::new(move |source, function| optional.modify(source, function))
    }

    /// Views the read side of this optional as a fold.
    pub fn as_fold(&self) -> Fold<S, A> {
        let preview = Rc::clone(&self.preview);
        Fold::new(move |source| preview(source).into_iter().collect())
    }
}

impl<S, A, B> POptional<S, S, A, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
{
    /// The optional that never matches.
    #[must_use]
    pub fn void() -> Self {
        Self::from_focus(Either::Left, |_| None)
    }
}

impl<S> POptional<S, S, S, S>
where
    S: Clone + 'static,
{
    /// The optional whose focus is always the whole source.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_focus(
            |source: S| Either::Right(Context::new(source, |value| value)),
            |source: &S| Some(source.clone()),
        )
    }
}

impl<S, T, A, B> Clone for POptional<S, T, A, B> {
    fn clone(&self) -> Self {
        Self {
            focus: Rc::clone(&self.focus),
            preview: Rc::clone(&self.preview),
        }
    }
}

impl<S, T, A, B> fmt::Debug for POptional<S, T, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("POptional").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Identity;
    use rstest::rstest;

    fn head() -> Optional<Vec<i32>, i32> {
        Optional::new(
            |list: &Vec<i32>| list.first().copied(),
            |mut list: Vec<i32>, value| {
                list[0] = value;
                list
            },
        )
    }

    #[rstest]
    #[case(vec![1, 2], Some(vec![5, 2]))]
    #[case(vec![], None)]
    fn set_option_reports_miss(#[case] source: Vec<i32>, #[case] expected: Option<Vec<i32>>) {
        assert_eq!(head().set_option(source, 5), expected);
    }

    #[rstest]
    fn modify_on_miss_is_identity() {
        assert_eq!(head().modify(Vec::new(), |n| n + 1), Vec::<i32>::new());
    }

    #[rstest]
    fn get_or_modify_returns_source_on_miss() {
        assert_eq!(head().get_or_modify(Vec::new()), Either::Left(Vec::new()));
        assert_eq!(head().get_or_modify(vec![4]), Either::Right(4));
    }

    #[rstest]
    fn modify_f_with_option_effect() {
        let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
        assert_eq!(head().modify_f(vec![4, 1], halve), Some(vec![2, 1]));
        assert_eq!(head().modify_f(vec![3, 1], halve), None);
        assert_eq!(head().modify_f(Vec::new(), halve), Some(Vec::new()));
    }

    #[rstest]
    fn modify_f_identity_on_match() {
        assert_eq!(head().modify_f(vec![1], |n| Identity(n + 1)), Identity(vec![2]));
    }

    #[rstest]
    fn predicates() {
        assert!(head().exists(&vec![3], |n| *n == 3));
        assert!(head().all(&vec![], |n| *n == 3));
        assert!(!head().all(&vec![4], |n| *n == 3));
        assert!(head().is_empty(&vec![]));
        assert!(head().non_empty(&vec![1]));
        assert_eq!(head().find(&vec![2], |n| *n > 1), Some(2));
    }

    #[rstest]
    fn first_pairs_focus() {
        let paired = head().first::<&str>();
        assert_eq!(paired.get_option(&(vec![1], "c")), Some((1, "c")));
        assert_eq!(paired.set((vec![1], "c"), (9, "d")), (vec![9], "d"));
        assert_eq!(paired.set((vec![], "c"), (9, "d")), (vec![], "c"));
    }

    #[rstest]
    fn second_pairs_focus() {
        let paired = head().second::<u8>();
        assert_eq!(paired.get_option(&(0, vec![7])), Some((0, 7)));
    }

    #[rstest]
    fn choice_dispatches() {
        let either_head = head().choice(&head());
        assert_eq!(
            either_head.modify(Either::Right(vec![1]), |n| n * 3),
            Either::Right(vec![3])
        );
        assert_eq!(
            either_head.modify(Either::Left(vec![]), |n| n * 3),
            Either::Left(vec![])
        );
    }

    #[rstest]
    fn void_never_matches() {
        let never: Optional<i32, String> = Optional::void();
        assert_eq!(never.get_option(&1), None);
        assert_eq!(never.set(1, "x".into()), 1);
    }

    #[rstest]
    fn identity_focuses_whole() {
        let whole = Optional::<i32, i32>::identity();
        assert_eq!(whole.modify(2, |n| n + 1), 3);
    }

    #[rstest]
    fn from_get_or_modify_rebuilds() {
        let even: Optional<i32, i32> = POptional::from_get_or_modify(
            |n: i32| if n % 2 == 0 { Either::Right(n) } else { Either::Left(n) },
            |_, value| value,
        );
        assert_eq!(even.set(4, 10), 10);
        assert_eq!(even.set(3, 10), 3);
        assert_eq!(even.get_option(&3), None);
    }

    #[rstest]
    fn context_accessors() {
        let context: Context<i32, i32, String> = Context::new(1, |n: i32| n.to_string());
        assert_eq!(*context.focus(), 1);
        assert_eq!(context.rebuild(5), "5");
    }

    #[rstest]
    fn conversions() {
        assert_eq!(head().as_traversal().get_all(&vec![1, 2]), vec![1]);
        assert_eq!(head().as_traversal().modify(Vec::new(), |n| n + 1), Vec::<i32>::new());
        assert_eq!(head().as_setter().set(vec![1, 2], 0), vec![0, 2]);
        assert!(head().as_fold().is_empty(&vec![]));
    }
}
