//! Reader monad for read-only access to a source through getters.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Getters, lenses and isos turn
//! into readers with `to_reader`/`ask`/`asks`, so several reads of one
//! structure can be combined before the structure is supplied.
//!
//! # Examples
//!
//! ```rust
//! use opticus::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     port: u16,
//!     host: String,
//! }
//!
//! let address = Reader::asks(|config: Config| config.host)
//!     .map2(Reader::asks(|config: Config| config.port), |host, port| format!("{host}:{port}"));
//!
//! let config = Config { port: 8080, host: "localhost".to_string() };
//! assert_eq!(address.run(config), "localhost:8080");
//! ```

#![forbid(unsafe_code)]

use std::fmt;
use std::rc::Rc;

/// A computation that reads an environment of type `R` to produce an `A`.
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a reader from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation against `environment`.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// A reader that ignores the environment.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Reads a projection of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Maps a function over the result.
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| function(original_function(environment)))
    }

    /// Chains a reader built from this reader's result, on the same
    /// environment.
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        R: Clone,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment: R| {
            let result = original_function(environment.clone());
            function(result).run(environment)
        })
    }

    /// Alias for [`Reader::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        R: Clone,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Combines two readers of the same environment.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        R: Clone,
        B: 'static,
        C: 'static,
    {
        let (left, right) = (self.run_function, other.run_function);
        Reader::new(move |environment: R| function(left(environment.clone()), right(environment)))
    }

    /// Pairs the results of two readers.
    pub fn product<B>(self, other: Reader<R, B>) -> Reader<R, (A, B)>
    where
        R: Clone,
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Runs `computation` against a modified environment.
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        Self::new(move |environment| computation.run(modifier(environment)))
    }
}

impl<R> Reader<R, R>
where
    R: 'static,
{
    /// Returns the environment itself.
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> fmt::Display for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Reader>")
    }
}
