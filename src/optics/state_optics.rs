//! State adapters: optic operations as [`IndexedState`] computations.
//!
//! Each adapter treats the whole structure as the state and the optic's
//! focus as the thing being read or written, so a sequence of optic updates
//! can be chained with `then`/`flat_map` instead of threading the value by
//! hand.
//!
//! | adapter          | state             | result            |
//! |------------------|-------------------|-------------------|
//! | `to_state`       | unchanged         | focus             |
//! | `inspect(f)`     | unchanged         | `f(focus)`        |
//! | `modify_and_get` | focus modified    | new focus         |
//! | `get_and_modify` | focus modified    | old focus         |
//! | `modify_state`   | focus modified    | `()`              |
//! | `set_and_get`    | focus replaced    | new focus         |
//! | `get_and_set`    | focus replaced    | old focus         |
//! | `set_state`      | focus replaced    | `()`              |
//!
//! Partial optics report `None` when nothing matched; traversals report one
//! value per focus.
//!
//! # Example
//!
//! ```
//! use opticus::effect::State;
//! use opticus::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Counter { hits: u32, misses: u32 }
//!
//! let hits: Lens<Counter, u32> = Lens::new(|c: &Counter| c.hits, |c, hits| Counter { hits, ..c });
//! let misses: Lens<Counter, u32> = Lens::new(|c: &Counter| c.misses, |c, misses| Counter { misses, ..c });
//!
//! let record = hits
//!     .modify_state(|n| n + 1)
//!     .then(misses.set_state(0))
//!     .then(hits.get_and_modify(|n| n * 10));
//!
//! let (old_hits, counter) = record.run(Counter { hits: 1, misses: 4 });
//! assert_eq!(old_hits, 2);
//! assert_eq!(counter, Counter { hits: 20, misses: 0 });
//! ```

use super::fold::Fold;
use super::getter::Getter;
use super::iso::PIso;
use super::lens::PLens;
use super::optional::POptional;
use super::prism::PPrism;
use super::setter::PSetter;
use super::traversal::PTraversal;
use crate::control::Either;
use crate::effect::{IndexedState, State};

impl<S, T, A, B> PIso<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Reads the focus without changing the state.
    pub fn to_state(&self) -> State<S, A> {
        self.as_lens().to_state()
    }

    /// Same as [`PIso::to_state`].
    pub fn extract(&self) -> State<S, A> {
        self.to_state()
    }

    /// Reads a projection of the focus.
    pub fn inspect<R, F>(&self, function: F) -> State<S, R>
    where
        R: 'static,
        F: Fn(A) -> R + 'static,
    {
        self.as_lens().inspect(function)
    }

    /// Modifies the focus and returns the new value.
    pub fn modify_and_get<F>(&self, function: F) -> IndexedState<S, T, B>
    where
        B: Clone,
        F: Fn(A) -> B + 'static,
    {
        self.as_lens().modify_and_get(function)
    }

    /// Modifies the focus and returns the old value.
    pub fn get_and_modify<F>(&self, function: F) -> IndexedState<S, T, A>
    where
        A: Clone,
        F: Fn(A) -> B + 'static,
    {
        self.as_lens().get_and_modify(function)
    }

    /// Modifies the focus.
    pub fn modify_state<F>(&self, function: F) -> IndexedState<S, T, ()>
    where
        F: Fn(A) -> B + 'static,
    {
        self.as_lens().modify_state(function)
    }

    /// Replaces the focus and returns the new value.
    pub fn set_and_get(&self, value: B) -> IndexedState<S, T, B>
    where
        B: Clone,
    {
        self.as_lens().set_and_get(value)
    }

    /// Replaces the focus and returns the old value.
    pub fn get_and_set(&self, value: B) -> IndexedState<S, T, A>
    where
        B: Clone,
    {
        self.as_lens().get_and_set(value)
    }

    /// Replaces the focus.
    pub fn set_state(&self, value: B) -> IndexedState<S, T, ()>
    where
        B: Clone,
    {
        self.as_lens().set_state(value)
    }
}

impl<S, T, A, B> PLens<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Reads the focus without changing the state.
    pub fn to_state(&self) -> State<S, A> {
        let lens = self.clone();
        State::gets(move |source| lens.get(source))
    }

    /// Same as [`PLens::to_state`].
    pub fn extract(&self) -> State<S, A> {
        self.to_state()
    }

    /// Reads a projection of the focus.
    pub fn inspect<R, F>(&self, function: F) -> State<S, R>
    where
        R: 'static,
        F: Fn(A) -> R + 'static,
    {
        let lens = self.clone();
        State::gets(move |source| function(lens.get(source)))
    }

    /// Modifies the focus and returns the new value.
    pub fn modify_and_get<F>(&self, function: F) -> IndexedState<S, T, B>
    where
        B: Clone,
        F: Fn(A) -> B + 'static,
    {
        let lens = self.clone();
        IndexedState::new(move |source| {
            let value = function(lens.get(&source));
            (value.clone(), lens.set(source, value))
        })
    }

    /// Modifies the focus and returns the old value.
    pub fn get_and_modify<F>(&self, function: F) -> IndexedState<S, T, A>
    where
        A: Clone,
        F: Fn(A) -> B + 'static,
    {
        let lens = self.clone();
        IndexedState::new(move |source| {
            let old = lens.get(&source);
            let value = function(old.clone());
            (old, lens.set(source, value))
        })
    }

    /// Modifies the focus.
    pub fn modify_state<F>(&self, function: F) -> IndexedState<S, T, ()>
    where
        F: Fn(A) -> B + 'static,
    {
        let lens = self.clone();
        IndexedState::new(move |source| ((), lens.modify(source, &function)))
    }

    /// Replaces the focus and returns the new value.
    pub fn set_and_get(&self, value: B) -> IndexedState<S, T, B>
    where
        B: Clone,
    {
        let lens = self.clone();
        IndexedState::new(move |source| (value.clone(), lens.set(source, value.clone())))
    }

    /// Replaces the focus and returns the old value.
    pub fn get_and_set(&self, value: B) -> IndexedState<S, T, A>
    where
        B: Clone,
    {
        let lens = self.clone();
        IndexedState::new(move |source| {
            let old = lens.get(&source);
            (old, lens.set(source, value.clone()))
        })
    }

    /// Replaces the focus.
    pub fn set_state(&self, value: B) -> IndexedState<S, T, ()>
    where
        B: Clone,
    {
        let lens = self.clone();
        IndexedState::new(move |source| ((), lens.set(source, value.clone())))
    }
}

impl<S, T, A, B> PPrism<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Reads the focus, if any, without changing the state.
    pub fn to_state(&self) -> State<S, Option<A>> {
        self.as_optional().to_state()
    }

    /// Same as [`PPrism::to_state`].
    pub fn extract(&self) -> State<S, Option<A>> {
        self.to_state()
    }

    /// Reads a projection of the focus, if any.
    pub fn inspect<R, F>(&self, function: F) -> State<S, Option<R>>
    where
        R: 'static,
        F: Fn(A) -> R + 'static,
    {
        self.as_optional().inspect(function)
    }

    /// Modifies a matching focus and returns the new value.
    pub fn modify_and_get<F>(&self, function: F) -> IndexedState<S, T, Option<B>>
    where
        B: Clone,
        F: Fn(A) -> B + 'static,
    {
        let prism = self.clone();
        IndexedState::new(move |source| match prism.get_or_modify(source) {
            Either::Left(unmatched) => (None, unmatched),
            Either::Right(focus) => {
                let value = function(focus);
                (Some(value.clone()), prism.reverse_get(value))
            }
        })
    }

    /// Modifies a matching focus and returns the old value.
    pub fn get_and_modify<F>(&self, function: F) -> IndexedState<S, T, Option<A>>
    where
        A: Clone,
        F: Fn(A) -> B + 'static,
    {
        let prism = self.clone();
        IndexedState::new(move |source| match prism.get_or_modify(source) {
            Either::Left(unmatched) => (None, unmatched),
            Either::Right(focus) => (Some(focus.clone()), prism.reverse_get(function(focus))),
        })
    }

    /// Modifies a matching focus.
    pub fn modify_state<F>(&self, function: F) -> IndexedState<S, T, ()>
    where
        F: Fn(A) -> B + 'static,
    {
        let prism = self.clone();
        IndexedState::new(move |source| ((), prism.modify(source, &function)))
    }

    /// Replaces a matching focus and returns the new value.
    pub fn set_and_get(&self, value: B) -> IndexedState<S, T, Option<B>>
    where
        B: Clone,
    {
        self.modify_and_get(move |_| value.clone())
    }

    /// Replaces a matching focus and returns the old value.
    pub fn get_and_set(&self, value: B) -> IndexedState<S, T, Option<A>>
    where
        A: Clone,
        B: Clone,
    {
        self.get_and_modify(move |_| value.clone())
    }

    /// Replaces a matching focus.
    pub fn set_state(&self, value: B) -> IndexedState<S, T, ()>
    where
        B: Clone,
    {
        self.modify_state(move |_| value.clone())
    }
}

impl<S, T, A, B> POptional<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Reads the focus, if any, without changing the state.
    pub fn to_state(&self) -> State<S, Option<A>> {
        let optional = self.clone();
        State::gets(move |source| optional.get_option(source))
    }

    /// Same as [`POptional::to_state`].
    pub fn extract(&self) -> State<S, Option<A>> {
        self.to_state()
    }

    /// Reads a projection of the focus, if any.
    pub fn inspect<R, F>(&self, function: F) -> State<S, Option<R>>
    where
        R: 'static,
        F: Fn(A) -> R + 'static,
    {
        let optional = self.clone();
        State::gets(move |source| optional.get_option(source).map(&function))
    }

    /// Modifies a matching focus and returns the new value.
    pub fn modify_and_get<F>(&self, function: F) -> IndexedState<S, T, Option<B>>
    where
        B: Clone,
        F: Fn(A) -> B + 'static,
    {
        let optional = self.clone();
        IndexedState::new(move |source| match optional.focus(source) {
            Either::Left(unmatched) => (None, unmatched),
            Either::Right(context) => {
                let (focus, rebuild) = context.into_parts();
                let value = function(focus);
                (Some(value.clone()), rebuild(value))
            }
        })
    }

    /// Modifies a matching focus and returns the old value.
    pub fn get_and_modify<F>(&self, function: F) -> IndexedState<S, T, Option<A>>
    where
        A: Clone,
        F: Fn(A) -> B + 'static,
    {
        let optional = self.clone();
        IndexedState::new(move |source| match optional.focus(source) {
            Either::Left(unmatched) => (None, unmatched),
            Either::Right(context) => {
                let (focus, rebuild) = context.into_parts();
                (Some(focus.clone()), rebuild(function(focus)))
            }
        })
    }

    /// Modifies a matching focus.
    pub fn modify_state<F>(&self, function: F) -> IndexedState<S, T, ()>
    where
        F: Fn(A) -> B + 'static,
    {
        let optional = self.clone();
        IndexedState::new(move |source| ((), optional.modify(source, &function)))
    }

    /// Replaces a matching focus and returns the new value.
    pub fn set_and_get(&self, value: B) -> IndexedState<S, T, Option<B>>
    where
        B: Clone,
    {
        self.modify_and_get(move |_| value.clone())
    }

    /// Replaces a matching focus and returns the old value.
    pub fn get_and_set(&self, value: B) -> IndexedState<S, T, Option<A>>
    where
        A: Clone,
        B: Clone,
    {
        self.get_and_modify(move |_| value.clone())
    }

    /// Replaces a matching focus.
    pub fn set_state(&self, value: B) -> IndexedState<S, T, ()>
    where
        B: Clone,
    {
        self.modify_state(move |_| value.clone())
    }
}

impl<S, T, A, B> PTraversal<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Reads every focus without changing the state.
    pub fn to_state(&self) -> State<S, Vec<A>> {
        let traversal = self.clone();
        State::gets(move |source| traversal.get_all(source))
    }

    /// Same as [`PTraversal::to_state`].
    pub fn extract(&self) -> State<S, Vec<A>> {
        self.to_state()
    }

    /// Reads a projection of every focus.
    pub fn inspect<R, F>(&self, function: F) -> State<S, Vec<R>>
    where
        R: 'static,
        F: Fn(A) -> R + 'static,
    {
        let traversal = self.clone();
        State::gets(move |source| traversal.get_all(source).into_iter().map(&function).collect())
    }

    /// Modifies every focus and returns the new values.
    pub fn modify_and_get<F>(&self, function: F) -> IndexedState<S, T, Vec<B>>
    where
        B: Clone,
        F: Fn(A) -> B + 'static,
    {
        let traversal = self.clone();
        IndexedState::new(move |source| {
            let (foci, rebuild) = traversal.parts(source).into_parts();
            let values: Vec<B> = foci.into_iter().map(&function).collect();
            (values.clone(), rebuild(values))
        })
    }

    /// Modifies every focus and returns the old values.
    pub fn get_and_modify<F>(&self, function: F) -> IndexedState<S, T, Vec<A>>
    where
        A: Clone,
        F: Fn(A) -> B + 'static,
    {
        let traversal = self.clone();
        IndexedState::new(move |source| {
            let (foci, rebuild) = traversal.parts(source).into_parts();
            let values = foci.iter().cloned().map(&function).collect();
            (foci, rebuild(values))
        })
    }

    /// Modifies every focus.
    pub fn modify_state<F>(&self, function: F) -> IndexedState<S, T, ()>
    where
        F: Fn(A) -> B + 'static,
    {
        let traversal = self.clone();
        IndexedState::new(move |source| ((), traversal.modify(source, &function)))
    }

    /// Replaces every focus and returns the new values.
    pub fn set_and_get(&self, value: B) -> IndexedState<S, T, Vec<B>>
    where
        B: Clone,
    {
        self.modify_and_get(move |_| value.clone())
    }

    /// Replaces every focus and returns the old values.
    pub fn get_and_set(&self, value: B) -> IndexedState<S, T, Vec<A>>
    where
        A: Clone,
        B: Clone,
    {
        self.get_and_modify(move |_| value.clone())
    }

    /// Replaces every focus.
    pub fn set_state(&self, value: B) -> IndexedState<S, T, ()>
    where
        B: Clone,
    {
        self.modify_state(move |_| value.clone())
    }
}

impl<S, T, A, B> PSetter<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
{
    /// Modifies every focus.
    pub fn modify_state<F>(&self, function: F) -> IndexedState<S, T, ()>
    where
        F: Fn(A) -> B + 'static,
    {
        let setter = self.clone();
        IndexedState::new(move |source| ((), setter.modify(source, &function)))
    }

    /// Replaces every focus.
    pub fn set_state(&self, value: B) -> IndexedState<S, T, ()>
    where
        B: Clone,
    {
        let setter = self.clone();
        IndexedState::new(move |source| ((), setter.set(source, value.clone())))
    }
}

impl<S, A> Getter<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Reads the focus without changing the state.
    pub fn to_state(&self) -> State<S, A> {
        let getter = self.clone();
        State::gets(move |source| getter.get(source))
    }

    /// Same as [`Getter::to_state`].
    pub fn extract(&self) -> State<S, A> {
        self.to_state()
    }

    /// Reads a projection of the focus.
    pub fn inspect<R, F>(&self, function: F) -> State<S, R>
    where
        R: 'static,
        F: Fn(A) -> R + 'static,
    {
        let getter = self.clone();
        State::gets(move |source| function(getter.get(source)))
    }
}

impl<S, A> Fold<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Reads every focus without changing the state.
    pub fn to_state(&self) -> State<S, Vec<A>> {
        let fold = self.clone();
        State::gets(move |source| fold.get_all(source))
    }

    /// Same as [`Fold::to_state`].
    pub fn extract(&self) -> State<S, Vec<A>> {
        self.to_state()
    }

    /// Reads a projection of every focus.
    pub fn inspect<R, F>(&self, function: F) -> State<S, Vec<R>>
    where
        R: 'static,
        F: Fn(A) -> R + 'static,
    {
        let fold = self.clone();
        State::gets(move |source| fold.get_all(source).into_iter().map(&function).collect())
    }
}
