//! Index-based optionals over existing elements.
//!
//! `index(i)` focuses on the element at position `i` if there is one.
//! Setting a missing position leaves the source unchanged; use
//! [`at`](fn@crate::optics::at) on maps to insert.
//!
//! # Examples
//!
//! ```
//! use opticus::optics::{Optional, index};
//!
//! let second: Optional<Vec<i32>, i32> = index(1_usize);
//! assert_eq!(second.get_option(&vec![1, 2, 3]), Some(2));
//! assert_eq!(second.set(vec![1, 2, 3], 20), vec![1, 20, 3]);
//! assert_eq!(second.set(vec![1], 20), vec![1]);
//! ```

use std::collections::BTreeMap;

use super::error::OpticsError;
use super::optional::{Context, Optional};
use crate::control::Either;

/// Containers whose existing elements can be focused by an index.
pub trait Ixed<I>: Sized + 'static {
    /// The element type.
    type Element: 'static;

    /// Returns the optional onto the element at `index`.
    fn ix(index: I) -> Optional<Self, Self::Element>;
}

/// Returns the optional onto the element of `C` at `index`.
pub fn index<C, I>(index: I) -> Optional<C, C::Element>
where
    C: Ixed<I>,
{
    C::ix(index)
}

/// Reads the element at `position`.
///
/// # Errors
///
/// Returns [`OpticsError::IndexOutOfBounds`] if `source` has no element at
/// `position`.
///
/// # Example
///
/// ```
/// use opticus::optics::{OpticsError, get_index};
///
/// assert_eq!(get_index(&vec!['a', 'b'], 1), Ok('b'));
/// assert_eq!(
///     get_index(&vec!['a', 'b'], 2),
///     Err(OpticsError::IndexOutOfBounds { index: 2, length: 2 })
/// );
/// ```
#[allow(clippy::ptr_arg)]
pub fn get_index<A>(source: &Vec<A>, position: usize) -> Result<A, OpticsError>
where
    A: Clone + 'static,
{
    index::<Vec<A>, usize>(position)
        .get_option(source)
        .ok_or(OpticsError::IndexOutOfBounds {
            index: position,
            length: source.len(),
        })
}

impl<A> Ixed<usize> for Vec<A>
where
    A: Clone + 'static,
{
    type Element = A;

    fn ix(position: usize) -> Optional<Self, A> {
        Optional::from_focus(
            move |mut source: Self| {
                if position < source.len() {
                    let focus = source[position].clone();
                    Either::Right(Context::new(focus, move |value| {
                        source[position] = value;
                        source
                    }))
                } else {
                    Either::Left(source)
                }
            },
            move |source: &Self| source.get(position).cloned(),
        )
    }
}

impl<K, V> Ixed<K> for BTreeMap<K, V>
where
    K: Ord + Clone + 'static,
    V: Clone + 'static,
{
    type Element = V;

    fn ix(key: K) -> Optional<Self, V> {
        let lookup = key.clone();
        Optional::from_focus(
            move |mut source: Self| match source.get(&key).cloned() {
                Some(focus) => {
                    let key = key.clone();
                    Either::Right(Context::new(focus, move |value| {
                        source.insert(key, value);
                        source
                    }))
                }
                None => Either::Left(source),
            },
            move |source: &Self| source.get(&lookup).cloned(),
        )
    }
}
