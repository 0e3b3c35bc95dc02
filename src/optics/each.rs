//! Element-wise traversals of standard containers.
//!
//! # Examples
//!
//! ```
//! use opticus::optics::{Each, Traversal};
//!
//! let each: Traversal<Vec<i32>, i32> = Vec::each();
//! assert_eq!(each.get_all(&vec![1, 2, 3]), vec![1, 2, 3]);
//! assert_eq!(each.modify(vec![1, 2, 3], |n| n * 2), vec![2, 4, 6]);
//! ```
//!
//! Implementations are provided for:
//!
//! - [`Vec<T>`] and [`VecDeque<T>`], in order
//! - [`Option<T>`]
//! - [`Result<T, E>`] (the `Ok` value)
//! - [`BTreeMap<K, V>`] (the values, in key order)

use std::collections::{BTreeMap, VecDeque};

use super::traversal::{PTraversal, Parts, Traversal, take_single};

/// Containers with a traversal over all of their elements.
pub trait Each: Sized + 'static {
    /// The element type.
    type Focus: 'static;

    /// Returns the traversal over every element.
    fn each() -> Traversal<Self, Self::Focus>;
}

/// Traverses every element of a vector, allowing the element type to change.
///
/// # Example
///
/// ```
/// use opticus::optics::{PTraversal, vec_each};
///
/// let lengths: PTraversal<Vec<&str>, Vec<usize>, &str, usize> = vec_each();
/// assert_eq!(lengths.modify(vec!["a", "abc"], str::len), vec![1, 3]);
/// ```
#[must_use]
pub fn vec_each<A, B>() -> PTraversal<Vec<A>, Vec<B>, A, B>
where
    A: Clone + 'static,
    B: 'static,
{
    PTraversal::new(Vec::clone, |source: Vec<A>| {
        Parts::new(source, |values: Vec<B>| values)
    })
}

/// Returns the element traversal of `T`.
#[must_use]
pub fn each<T: Each>() -> Traversal<T, T::Focus> {
    T::each()
}

impl<A> Each for Vec<A>
where
    A: Clone + 'static,
{
    type Focus = A;

    fn each() -> Traversal<Self, A> {
        vec_each()
    }
}

impl<A> Each for VecDeque<A>
where
    A: Clone + 'static,
{
    type Focus = A;

    fn each() -> Traversal<Self, A> {
        PTraversal::new(
            |source: &Self| source.iter().cloned().collect(),
            |source: Self| {
                Parts::new(source.into_iter().collect(), |values: Vec<A>| {
                    values.into_iter().collect()
                })
            },
        )
    }
}

impl<A> Each for Option<A>
where
    A: Clone + 'static,
{
    type Focus = A;

    fn each() -> Traversal<Self, A> {
        PTraversal::new(
            |source: &Self| source.iter().cloned().collect(),
            |source: Self| match source {
                Some(focus) => Parts::new(vec![focus], |values| Some(take_single(values))),
                None => Parts::new(Vec::new(), |_| None),
            },
        )
    }
}

impl<A, E> Each for Result<A, E>
where
    A: Clone + 'static,
    E: 'static,
{
    type Focus = A;

    fn each() -> Traversal<Self, A> {
        PTraversal::new(
            |source: &Self| source.iter().cloned().collect(),
            |source: Self| match source {
                Ok(focus) => Parts::new(vec![focus], |values| Ok(take_single(values))),
                Err(error) => Parts::new(Vec::new(), move |_| Err(error)),
            },
        )
    }
}

impl<K, V> Each for BTreeMap<K, V>
where
    K: Ord + 'static,
    V: Clone + 'static,
{
    type Focus = V;

    fn each() -> Traversal<Self, V> {
        PTraversal::new(
            |source: &Self| source.values().cloned().collect(),
            |source: Self| {
                let (keys, values): (Vec<K>, Vec<V>) = source.into_iter().unzip();
                Parts::new(values, move |replacements: Vec<V>| {
                    keys.into_iter().zip(replacements).collect()
                })
            },
        )
    }
}
