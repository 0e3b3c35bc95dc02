//! Generated functions for laws that quantify over functions.
//!
//! Closures have no `Debug`, so a failing law could not print them.
//! [`GeneratedFn`] pairs each closure with a description that is printed
//! instead.

use std::fmt;
use std::rc::Rc;

use proptest::prelude::*;

/// A function together with a printable description of it.
pub struct GeneratedFn<A, B> {
    description: String,
    function: Rc<dyn Fn(A) -> B>,
}

impl<A, B> GeneratedFn<A, B>
where
    A: 'static,
    B: 'static,
{
    /// Describes `function`.
    pub fn new<F>(description: impl Into<String>, function: F) -> Self
    where
        F: Fn(A) -> B + 'static,
    {
        Self {
            description: description.into(),
            function: Rc::new(function),
        }
    }

    /// Applies the function.
    pub fn call(&self, value: A) -> B {
        (self.function)(value)
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `next` after `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticus::laws::GeneratedFn;
    ///
    /// let double = GeneratedFn::new("|n| n * 2", |n: i32| n * 2);
    /// let show = GeneratedFn::new("|n| n.to_string()", |n: i32| n.to_string());
    /// let both = double.then(&show);
    /// assert_eq!(both.call(4), "8");
    /// assert_eq!(both.description(), "|n| n * 2 >> |n| n.to_string()");
    /// ```
    #[must_use]
    pub fn then<C: 'static>(&self, next: &GeneratedFn<B, C>) -> GeneratedFn<A, C> {
        let (first, second) = (Rc::clone(&self.function), Rc::clone(&next.function));
        GeneratedFn::new(
            format!("{} >> {}", self.description, next.description),
            move |value| second(first(value)),
        )
    }
}

impl<A: 'static> GeneratedFn<A, A> {
    /// The identity function.
    pub fn identity() -> Self {
        Self::new("|a| a", |value| value)
    }
}

impl<A, B> Clone for GeneratedFn<A, B> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            function: Rc::clone(&self.function),
        }
    }
}

impl<A, B> fmt::Debug for GeneratedFn<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.description)
    }
}

/// Generates constant functions returning values drawn from `values`.
pub fn constant_function<A, B, G>(values: G) -> BoxedStrategy<GeneratedFn<A, B>>
where
    A: 'static,
    B: Clone + fmt::Debug + 'static,
    G: Strategy<Value = B> + 'static,
{
    values
        .prop_map(|value| {
            let description = format!("|_| {value:?}");
            GeneratedFn::new(description, move |_| value.clone())
        })
        .boxed()
}

/// Generates total `i32 -> i32` functions: identity, negation, constants,
/// and wrapping additions and multiplications.
///
/// # Examples
///
/// ```rust
/// use opticus::laws::i32_endomorphism;
/// use proptest::strategy::{Strategy, ValueTree};
/// use proptest::test_runner::TestRunner;
///
/// let mut runner = TestRunner::deterministic();
/// let function = i32_endomorphism().new_tree(&mut runner).unwrap().current();
/// let _ = function.call(i32::MAX);
/// ```
pub fn i32_endomorphism() -> BoxedStrategy<GeneratedFn<i32, i32>> {
    prop_oneof![
        Just(GeneratedFn::identity()),
        Just(GeneratedFn::new("|n| -n", i32::wrapping_neg)),
        any::<i32>().prop_map(|k| GeneratedFn::new(format!("|_| {k}"), move |_: i32| k)),
        any::<i32>().prop_map(|k| GeneratedFn::new(format!("|n| n + {k}"), move |n: i32| n.wrapping_add(k))),
        (-8_i32..8).prop_map(|k| GeneratedFn::new(format!("|n| n * {k}"), move |n: i32| n.wrapping_mul(k))),
    ]
    .boxed()
}

/// Generates total `String -> String` functions.
pub fn string_endomorphism() -> BoxedStrategy<GeneratedFn<String, String>> {
    prop_oneof![
        Just(GeneratedFn::identity()),
        Just(GeneratedFn::new("|s| s.to_uppercase()", |text: String| text.to_uppercase())),
        Just(GeneratedFn::new("|s| s.chars().rev()", |text: String| text.chars().rev().collect())),
        "[a-z]{0,4}".prop_map(|suffix| {
            let description = format!("|s| s + {suffix:?}");
            GeneratedFn::new(description, move |text: String| text + &suffix)
        }),
        constant_function::<String, String, _>("[a-z]{0,4}"),
    ]
    .boxed()
}
