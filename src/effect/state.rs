//! State monad for threading a source value through optic operations.
//!
//! `IndexedState<S, T, A>` is a computation that, given a state of type `S`,
//! produces a result of type `A` and a new state of type `T`. Polymorphic
//! optics change the state's type (`PLens<S, T, A, B>` turns an `S` into a
//! `T`), so the state adapters on optics return `IndexedState`; the common
//! monomorphic case is [`State<S, A>`].
//!
//! # Examples
//!
//! ```rust
//! use opticus::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment().then(increment()).then(State::get());
//! assert_eq!(computation.run(0), (2, 2));
//! ```

#![forbid(unsafe_code)]

use std::fmt;
use std::rc::Rc;

/// A state transition whose input and output state types may differ.
///
/// # Type Parameters
///
/// - `S`: The incoming state type
/// - `T`: The outgoing state type
/// - `A`: The result type
pub struct IndexedState<S, T, A>
where
    S: 'static,
    T: 'static,
    A: 'static,
{
    /// Uses Rc to allow cloning of the computation for `flat_map`.
    run_function: Rc<dyn Fn(S) -> (A, T)>,
}

/// A state transition that keeps the state type.
pub type State<S, A> = IndexedState<S, S, A>;

impl<S, T, A> IndexedState<S, T, A>
where
    S: 'static,
    T: 'static,
    A: 'static,
{
    /// Creates a computation from a transition function returning
    /// `(result, new_state)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticus::effect::IndexedState;
    ///
    /// let describe: IndexedState<i32, String, bool> =
    ///     IndexedState::new(|n: i32| (n > 0, n.to_string()));
    /// assert_eq!(describe.run(5), (true, "5".to_string()));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, T) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation, returning the result and the final state.
    pub fn run(&self, initial_state: S) -> (A, T) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and returns only the result.
    pub fn eval(&self, initial_state: S) -> A {
        let (result, _) = self.run(initial_state);
        result
    }

    /// Runs the computation and returns only the final state.
    pub fn exec(&self, initial_state: S) -> T {
        let (_, final_state) = self.run(initial_state);
        final_state
    }

    /// Maps a function over the result.
    pub fn fmap<B, F>(self, function: F) -> IndexedState<S, T, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        IndexedState::new(move |state| {
            let (result, new_state) = (original_function)(state);
            (function(result), new_state)
        })
    }

    /// Chains a computation that starts from this computation's final state.
    pub fn flat_map<U, B, F>(self, function: F) -> IndexedState<S, U, B>
    where
        F: Fn(A) -> IndexedState<T, U, B> + 'static,
        U: 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        IndexedState::new(move |state| {
            let (result, intermediate_state) = (original_function)(state);
            function(result).run(intermediate_state)
        })
    }

    /// Alias for [`IndexedState::flat_map`].
    pub fn and_then<U, B, F>(self, function: F) -> IndexedState<S, U, B>
    where
        F: Fn(A) -> IndexedState<T, U, B> + 'static,
        U: 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Runs `next` after this computation, discarding this result.
    #[must_use]
    pub fn then<U, B>(self, next: IndexedState<T, U, B>) -> IndexedState<S, U, B>
    where
        U: 'static,
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Runs both computations in sequence and combines their results.
    pub fn map2<U, B, C, F>(
        self,
        other: IndexedState<T, U, B>,
        function: F,
    ) -> IndexedState<S, U, C>
    where
        F: Fn(A, B) -> C + 'static,
        U: 'static,
        B: 'static,
        C: 'static,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        IndexedState::new(move |state| {
            let (result_a, intermediate_state) = (self_function)(state);
            let (result_b, final_state) = (other_function)(intermediate_state);
            (function(result_a, result_b), final_state)
        })
    }

    /// Pairs the results of two computations run in sequence.
    #[must_use]
    pub fn product<U, B>(self, other: IndexedState<T, U, B>) -> IndexedState<S, U, (A, B)>
    where
        U: 'static,
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// State Operations (as inherent methods)
// =============================================================================

impl<S, A> IndexedState<S, S, A>
where
    S: 'static,
    A: 'static,
{
    /// A computation that returns `value` and leaves the state unchanged.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Reads a projection of the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticus::effect::State;
    ///
    /// let length: State<String, usize> = State::gets(|text: &String| text.len());
    /// assert_eq!(length.eval("four".to_string()), 4);
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }

    /// Runs every computation in order, collecting their results.
    pub fn sequence(computations: Vec<Self>) -> State<S, Vec<A>> {
        State::new(move |initial_state| {
            computations
                .iter()
                .fold((Vec::with_capacity(computations.len()), initial_state), |(mut results, state), computation| {
                    let (result, next_state) = computation.run(state);
                    results.push(result);
                    (results, next_state)
                })
        })
    }
}

impl<S, A, E> IndexedState<S, S, Result<A, E>>
where
    S: 'static,
    A: 'static,
    E: 'static,
{
    /// Runs computations in order until one yields `Err`.
    ///
    /// Computations after the failing one are not run, so their state
    /// changes never happen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticus::effect::State;
    ///
    /// let step = |limit: i32| {
    ///     State::new(move |n: i32| if n < limit { (Ok(n), n + 1) } else { (Err(n), n) })
    /// };
    /// let all = State::try_sequence(vec![step(5), step(1), step(10)]);
    /// assert_eq!(all.run(0), (Err(1), 1));
    /// ```
    pub fn try_sequence(computations: Vec<Self>) -> State<S, Result<Vec<A>, E>> {
        State::new(move |initial_state| {
            let mut results = Vec::with_capacity(computations.len());
            let mut state = initial_state;
            for computation in &computations {
                let (result, next_state) = computation.run(state);
                state = next_state;
                match result {
                    Ok(value) => results.push(value),
                    Err(error) => return (Err(error), state),
                }
            }
            (Ok(results), state)
        })
    }
}

impl<S> IndexedState<S, S, S>
where
    S: Clone + 'static,
{
    /// Returns the current state as the result.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> IndexedState<S, S, ()>
where
    S: 'static,
{
    /// Replaces the state.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Transforms the state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }
}

impl<S, T, A> Clone for IndexedState<S, T, A>
where
    S: 'static,
    T: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, T, A> fmt::Display for IndexedState<S, T, A>
where
    S: 'static,
    T: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}
