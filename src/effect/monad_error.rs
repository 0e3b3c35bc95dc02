//! `MonadError` type class - raising and recovering from errors.
//!
//! # Laws
//!
//! ## Left Zero
//!
//! ```text
//! throw_error(e).flat_map(f) == throw_error(e)
//! ```
//!
//! ## Ensure Consistency
//!
//! ```text
//! ensure(fa, || e, p) == fa.flat_map(|a| if p(&a) { pure(a) } else { throw_error(e) })
//! ```
//!
//! ## Handle Error
//!
//! ```text
//! handle_error(throw_error(e), f) == pure(f(e))
//! catch_error(throw_error(e), f) == f(e)
//! catch_error(pure(a), f) == pure(a)
//! ```
//!
//! ## Attempt
//!
//! ```text
//! attempt(throw_error(e)) == pure(Err(e))
//! attempt(pure(a)) == pure(Ok(a))
//! ```
//!
//! ## From Result
//!
//! ```text
//! from_result(Ok(a)) == pure(a)
//! from_result(Err(e)) == throw_error(e)
//! ```
//!
//! These laws are checkable with `opticus::laws::monad_error_laws`.
//!
//! # Examples
//!
//! ```rust
//! use opticus::effect::MonadError;
//!
//! let failed: Result<i32, String> = <Result<i32, String>>::throw_error("oops".to_string());
//! let recovered = <Result<i32, String>>::catch_error(failed, |e| Ok(e.len() as i32));
//! assert_eq!(recovered, Ok(4));
//! ```

use crate::typeclass::Monad;

/// A type class for monads that can throw and catch errors of type `E`.
pub trait MonadError<E>: Monad {
    /// Creates a failed computation.
    fn throw_error<A>(error: E) -> Self::WithType<A>;

    /// Recovers from a failure with a handler producing a new computation.
    fn catch_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> Self::WithType<A>;

    /// Recovers from a failure with a pure value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticus::effect::MonadError;
    ///
    /// let failed: Option<i32> = None;
    /// assert_eq!(<Option<i32>>::handle_error(failed, |()| 0), Some(0));
    /// ```
    fn handle_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> A,
    {
        Self::catch_error(computation, |error| Self::pure(handler(error)))
    }

    /// Surfaces the error as a value.
    fn attempt<A>(computation: Self::WithType<A>) -> Self::WithType<Result<A, E>>;

    /// Fails with `error()` when the successful value does not satisfy
    /// `predicate`.
    fn ensure<A, F, P>(computation: Self::WithType<A>, error: F, predicate: P) -> Self::WithType<A>
    where
        F: FnOnce() -> E,
        P: FnOnce(&A) -> bool;

    /// Lifts a `Result` into the monad.
    fn from_result<A>(result: Result<A, E>) -> Self::WithType<A>;
}

impl<T> MonadError<()> for Option<T> {
    #[inline]
    fn throw_error<A>((): ()) -> Option<A> {
        None
    }

    fn catch_error<A, F>(computation: Option<A>, handler: F) -> Option<A>
    where
        F: FnOnce(()) -> Option<A>,
    {
        match computation {
            Some(value) => Some(value),
            None => handler(()),
        }
    }

    fn attempt<A>(computation: Option<A>) -> Option<Result<A, ()>> {
        Some(computation.ok_or(()))
    }

    fn ensure<A, F, P>(computation: Option<A>, error: F, predicate: P) -> Option<A>
    where
        F: FnOnce(),
        P: FnOnce(&A) -> bool,
    {
        match computation {
            Some(value) if predicate(&value) => Some(value),
            Some(_) => {
                error();
                None
            }
            None => None,
        }
    }

    fn from_result<A>(result: Result<A, ()>) -> Option<A> {
        result.ok()
    }
}

impl<T, E> MonadError<E> for Result<T, E> {
    #[inline]
    fn throw_error<A>(error: E) -> Result<A, E> {
        Err(error)
    }

    fn catch_error<A, F>(computation: Result<A, E>, handler: F) -> Result<A, E>
    where
        F: FnOnce(E) -> Result<A, E>,
    {
        computation.or_else(handler)
    }

    fn attempt<A>(computation: Result<A, E>) -> Result<Result<A, E>, E> {
        Ok(computation)
    }

    fn ensure<A, F, P>(computation: Result<A, E>, error: F, predicate: P) -> Result<A, E>
    where
        F: FnOnce() -> E,
        P: FnOnce(&A) -> bool,
    {
        match computation {
            Ok(value) if predicate(&value) => Ok(value),
            Ok(_) => Err(error()),
            Err(existing) => Err(existing),
        }
    }

    #[inline]
    fn from_result<A>(result: Result<A, E>) -> Result<A, E> {
        result
    }
}
