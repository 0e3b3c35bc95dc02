//! Key-based lenses that can insert and delete.
//!
//! `at(key)` focuses on the *presence* of a key: the focus is
//! `Option<V>`, setting `Some` inserts or replaces, setting `None` removes.
//! Compare [`index`](fn@crate::optics::index), which only reaches values that
//! are already there.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use opticus::optics::{Lens, at};
//!
//! let port: Lens<BTreeMap<String, u16>, Option<u16>> = at("port".to_string());
//!
//! let config = port.set(BTreeMap::new(), Some(8080));
//! assert_eq!(port.get(&config), Some(8080));
//!
//! let config = port.set(config, None);
//! assert!(config.is_empty());
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::lens::Lens;

/// Maps whose entries can be focused by key.
pub trait At<K>: Sized + 'static {
    /// The value stored under a key.
    type Value: 'static;

    /// Returns the lens onto the entry at `key`.
    fn at(key: K) -> Lens<Self, Option<Self::Value>>;
}

/// Returns the lens onto the entry of `M` at `key`.
pub fn at<M, K>(key: K) -> Lens<M, Option<M::Value>>
where
    M: At<K>,
{
    M::at(key)
}

impl<K, V> At<K> for BTreeMap<K, V>
where
    K: Ord + Clone + 'static,
    V: Clone + 'static,
{
    type Value = V;

    fn at(key: K) -> Lens<Self, Option<V>> {
        let lookup = key.clone();
        Lens::new(
            move |source: &Self| source.get(&lookup).cloned(),
            move |mut source: Self, value: Option<V>| {
                match value {
                    Some(value) => source.insert(key.clone(), value),
                    None => source.remove(&key),
                };
                source
            },
        )
    }
}

impl<K, V, H> At<K> for HashMap<K, V, H>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
    H: BuildHasher + 'static,
{
    type Value = V;

    fn at(key: K) -> Lens<Self, Option<V>> {
        let lookup = key.clone();
        Lens::new(
            move |source: &Self| source.get(&lookup).cloned(),
            move |mut source: Self, value: Option<V>| {
                match value {
                    Some(value) => source.insert(key.clone(), value),
                    None => source.remove(&key),
                };
                source
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scores() -> BTreeMap<&'static str, i32> {
        [("alice", 3), ("bob", 5)].into_iter().collect()
    }

    #[rstest]
    #[case("alice", Some(3))]
    #[case("carol", None)]
    fn get_reads_presence(#[case] key: &'static str, #[case] expected: Option<i32>) {
        assert_eq!(at::<BTreeMap<&str, i32>, _>(key).get(&scores()), expected);
    }

    #[rstest]
    fn set_some_inserts_and_set_none_removes() {
        let carol = at::<BTreeMap<&str, i32>, _>("carol");
        let inserted = carol.set(scores(), Some(1));
        assert_eq!(inserted.len(), 3);
        let removed = at::<BTreeMap<&str, i32>, _>("alice").set(inserted, None);
        assert_eq!(removed.keys().copied().collect::<Vec<_>>(), vec!["bob", "carol"]);
    }

    #[rstest]
    fn modify_can_default_missing_entries() {
        let counter = at::<BTreeMap<&str, i32>, _>("dave");
        let bumped = counter.modify(scores(), |count| Some(count.unwrap_or(0) + 1));
        assert_eq!(bumped.get("dave"), Some(&1));
    }

    #[rstest]
    fn hash_map_at() {
        let lens: Lens<HashMap<String, i32>, Option<i32>> = at("k".to_string());
        let map = lens.set(HashMap::new(), Some(2));
        assert_eq!(lens.get(&map), Some(2));
        assert!(lens.set(map, None).is_empty());
    }
}
