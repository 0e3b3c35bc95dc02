//! Ready-made optics for standard library types.
//!
//! # Examples
//!
//! ```
//! use opticus::control::Either;
//! use opticus::optics::{Prism, left_prism, ok_prism};
//!
//! let ok: Prism<Result<i32, String>, i32> = ok_prism();
//! assert_eq!(ok.modify(Ok(1), |n| n + 1), Ok(2));
//! assert_eq!(ok.modify(Err("boom".into()), |n| n + 1), Err("boom".to_string()));
//!
//! let left: Prism<Either<i32, char>, i32> = left_prism();
//! assert_eq!(left.get_option(&Either::Right('x')), None);
//! ```

use super::iso::{Iso, PIso};
use super::prism::{PPrism, Prism};
use crate::control::Either;

/// Focuses on the value of a `Some`.
#[must_use]
pub fn some_prism<A, B>() -> PPrism<Option<A>, Option<B>, A, B>
where
    A: Clone + 'static,
    B: 'static,
{
    PPrism::from_parts(
        |source: Option<A>| match source {
            Some(focus) => Either::Right(focus),
            None => Either::Left(None),
        },
        Option::clone,
        Some,
    )
}

/// Matches `None`.
#[must_use]
pub fn none_prism<A>() -> Prism<Option<A>, ()>
where
    A: 'static,
{
    PPrism::from_parts(
        |source: Option<A>| match source {
            None => Either::Right(()),
            unmatched @ Some(_) => Either::Left(unmatched),
        },
        |source: &Option<A>| source.is_none().then_some(()),
        |()| None,
    )
}

/// Focuses on the value of an `Ok`.
#[must_use]
pub fn ok_prism<A, B, E>() -> PPrism<Result<A, E>, Result<B, E>, A, B>
where
    A: Clone + 'static,
    B: 'static,
    E: 'static,
{
    PPrism::from_parts(
        |source: Result<A, E>| match source {
            Ok(focus) => Either::Right(focus),
            Err(error) => Either::Left(Err(error)),
        },
        |source: &Result<A, E>| source.as_ref().ok().cloned(),
        Ok,
    )
}

/// Focuses on the error of an `Err`.
#[must_use]
pub fn err_prism<A, E, F>() -> PPrism<Result<A, E>, Result<A, F>, E, F>
where
    A: 'static,
    E: Clone + 'static,
    F: 'static,
{
    PPrism::from_parts(
        |source: Result<A, E>| match source {
            Ok(value) => Either::Left(Ok(value)),
            Err(error) => Either::Right(error),
        },
        |source: &Result<A, E>| source.as_ref().err().cloned(),
        Err,
    )
}

/// Focuses on the left side of an `Either`.
#[must_use]
pub fn left_prism<L, R, M>() -> PPrism<Either<L, R>, Either<M, R>, L, M>
where
    L: Clone + 'static,
    R: 'static,
    M: 'static,
{
    PPrism::from_parts(
        |source: Either<L, R>| match source {
            Either::Left(focus) => Either::Right(focus),
            Either::Right(other) => Either::Left(Either::Right(other)),
        },
        |source: &Either<L, R>| source.as_ref().left().cloned(),
        Either::Left,
    )
}

/// Focuses on the right side of an `Either`.
#[must_use]
pub fn right_prism<L, R, M>() -> PPrism<Either<L, R>, Either<L, M>, R, M>
where
    L: 'static,
    R: Clone + 'static,
    M: 'static,
{
    PPrism::from_parts(
        |source: Either<L, R>| match source {
            Either::Left(other) => Either::Left(Either::Left(other)),
            Either::Right(focus) => Either::Right(focus),
        },
        |source: &Either<L, R>| source.as_ref().right().cloned(),
        Either::Right,
    )
}

/// Swaps the halves of a pair.
///
/// # Example
///
/// ```
/// use opticus::optics::{Iso, iso_swap};
///
/// let swap: Iso<(i32, char), (char, i32)> = iso_swap();
/// assert_eq!(swap.get(&(1, 'a')), ('a', 1));
/// assert_eq!(swap.reverse_get(('b', 2)), (2, 'b'));
/// ```
#[must_use]
pub fn iso_swap<A, B>() -> Iso<(A, B), (B, A)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    PIso::new(
        |(first, second): &(A, B)| (second.clone(), first.clone()),
        |(second, first): (B, A)| (first, second),
    )
}

/// Converts between `Either<A, B>` and `Result<B, A>`.
#[must_use]
pub fn either_result<A, B>() -> Iso<Either<A, B>, Result<B, A>>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    PIso::new(
        |source: &Either<A, B>| Result::from(source.clone()),
        Either::from,
    )
}
