//! Applicative type class - combining independent computations in a context.
//!
//! Traversals visit any number of foci, so they need more than `Functor`:
//! every visit produces an effect, and the effects are sequenced left to right
//! with `map2` before the source is rebuilt.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(()).map2(v, |_, x| x) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(a).map2(pure(b), f) == pure(f(a, b))
//! ```
//!
//! ## Associativity of `product`
//!
//! ```text
//! a.product(b).product(c) ~ a.product(b.product(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use opticus::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
//! ```

use super::constant::Const;
use super::functor::Functor;
use super::identity::Identity;
use super::monoid::Monoid;

/// A type class for functors that can lift values and combine computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticus::typeclass::Applicative;
    ///
    /// let y: Result<String, ()> = <Result<(), ()>>::pure("hello".to_string());
    /// assert_eq!(y, Ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// The effect of `self` happens before the effect of `other`.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values and produces a result
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the values of two applicative computations.
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Visits every item with `function`, sequences the resulting effects left
    /// to right, and hands the collected values to `finish`.
    ///
    /// This is the engine behind every traversal: `modify_f` finishes by
    /// rebuilding the source, folds finish by discarding the values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticus::typeclass::Applicative;
    ///
    /// let parsed = Option::traverse_into(vec!["1", "2"], |s| s.parse::<i32>().ok(), |values| {
    ///     values.iter().sum::<i32>()
    /// });
    /// assert_eq!(parsed, Some(3));
    ///
    /// let failed = Option::traverse_into(vec!["1", "x"], |s| s.parse::<i32>().ok(), |values| values);
    /// assert_eq!(failed, None);
    /// ```
    fn traverse_into<X, R, G, H>(items: Vec<X>, function: G, finish: H) -> Self::WithType<R>
    where
        Self: Sized,
        G: FnMut(X) -> Self,
        H: FnOnce(Vec<Self::Inner>) -> R,
    {
        let mut effects = items.into_iter().map(function).collect::<Vec<_>>().into_iter();
        let Some(head) = effects.next() else {
            return Self::pure(finish(Vec::new()));
        };
        // Folding from the right keeps `self`-before-`other` ordering left to right.
        let tail = effects
            .rev()
            .fold(Self::pure(Vec::<Self::Inner>::new()), |rest, effect| {
                effect.map2::<Vec<Self::Inner>, Vec<Self::Inner>, _>(rest, |value, mut values| {
                    values.push(value);
                    values
                })
            });
        head.map2::<Vec<Self::Inner>, R, _>(tail, move |first, mut values| {
            values.push(first);
            values.reverse();
            finish(values)
        })
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (Ok(_), Err(error)) => Err(error),
        }
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }
}

impl<M: Monoid, A> Applicative for Const<M, A> {
    #[inline]
    fn pure<B>(_value: B) -> Const<M, B> {
        Const::new(M::empty())
    }

    fn map2<B, C, F>(self, other: Const<M, B>, _function: F) -> Const<M, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Const::new(self.into_value().combine(other.into_value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn option_map2_requires_both() {
        assert_eq!(Some(1).map2(None::<i32>, |a, b| a + b), None);
        assert_eq!(Some(1).map2(Some(2), |a, b| a * b), Some(2));
    }

    #[rstest]
    fn result_map2_keeps_first_error() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(first.map2(second, |a, b| a + b), Err("first"));
    }

    #[rstest]
    fn const_pure_is_empty() {
        let constant: Const<Sum<i32>, &str> = <Const<Sum<i32>, ()>>::pure("ignored");
        assert_eq!(constant.into_value(), Sum::new(0));
    }

    #[rstest]
    fn product_pairs_values() {
        assert_eq!(Identity(1).product(Identity("a")), Identity((1, "a")));
    }

    #[rstest]
    fn traverse_into_empty_uses_pure() {
        let result = Option::traverse_into(Vec::<i32>::new(), Some, |values| values.len());
        assert_eq!(result, Some(0));
    }

    #[rstest]
    fn traverse_into_preserves_order() {
        let result = Identity::traverse_into(vec![1, 2, 3], |n| Identity(n * 10), |values| values);
        assert_eq!(result, Identity(vec![10, 20, 30]));
    }

    #[rstest]
    fn traverse_into_const_accumulates_left_to_right() {
        let result = Const::<String, i32>::traverse_into(
            vec!["a", "b", "c"],
            |s| Const::new(s.to_string()),
            |_| (),
        );
        assert_eq!(result.into_value(), "abc");
    }

    #[rstest]
    fn traverse_into_result_reports_first_failure() {
        let result: Result<Vec<i32>, String> = Result::traverse_into(
            vec![1, -2, -3],
            |n| if n > 0 { Ok(n) } else { Err(format!("negative {n}")) },
            |values| values,
        );
        assert_eq!(result, Err("negative -2".to_string()));
    }
}
