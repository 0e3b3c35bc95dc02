//! Traversals over the elements of a vector that pass a test.
//!
//! Both traversals are lawful only while `modify` keeps every focus passing
//! the test: an update that makes an element fail changes which elements a
//! second pass would visit.
//!
//! # Examples
//!
//! ```
//! use opticus::optics::{Traversal, filter_index, filtered};
//!
//! let evens: Traversal<Vec<i32>, i32> = filtered(|n: &i32| n % 2 == 0);
//! assert_eq!(evens.modify(vec![1, 2, 3, 4], |n| n * 10), vec![1, 20, 3, 40]);
//!
//! let odd_positions: Traversal<Vec<char>, char> = filter_index(|position| position % 2 == 1);
//! assert_eq!(odd_positions.get_all(&vec!['a', 'b', 'c', 'd']), vec!['b', 'd']);
//! ```

use std::rc::Rc;

use super::traversal::{Parts, Traversal};

/// Focuses on the elements satisfying `predicate`.
pub fn filtered<A, P>(predicate: P) -> Traversal<Vec<A>, A>
where
    A: Clone + 'static,
    P: Fn(&A) -> bool + 'static,
{
    select(move |_, element| predicate(element))
}

/// Focuses on the elements whose position satisfies `predicate`.
pub fn filter_index<A, P>(predicate: P) -> Traversal<Vec<A>, A>
where
    A: Clone + 'static,
    P: Fn(usize) -> bool + 'static,
{
    select(move |position, _| predicate(position))
}

fn select<A, K>(keep: K) -> Traversal<Vec<A>, A>
where
    A: Clone + 'static,
    K: Fn(usize, &A) -> bool + 'static,
{
    let keep = Rc::new(keep);
    let view_keep = Rc::clone(&keep);
    Traversal::new(
        move |source: &Vec<A>| {
            source
                .iter()
                .enumerate()
                .filter(|(position, element)| view_keep(*position, element))
                .map(|(_, element)| element.clone())
                .collect()
        },
        move |source: Vec<A>| {
            let mut foci = Vec::new();
            let mut slots = Vec::with_capacity(source.len());
            for (position, element) in source.into_iter().enumerate() {
                if keep(position, &element) {
                    foci.push(element);
                    slots.push(None);
                } else {
                    slots.push(Some(element));
                }
            }
            Parts::new(foci, move |replacements: Vec<A>| {
                let mut replacements = replacements.into_iter();
                slots
                    .into_iter()
                    .map(|slot| {
                        slot.unwrap_or_else(|| {
                            replacements
                                .next()
                                .unwrap_or_else(|| unreachable!("filtered rebuild ran out of replacements"))
                        })
                    })
                    .collect()
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1, 3], vec![])]
    #[case(vec![1, 2, 3, 4], vec![2, 4])]
    fn filtered_reads_matching(#[case] source: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(filtered(|n: &i32| n % 2 == 0).get_all(&source), expected);
    }

    #[rstest]
    fn filtered_keeps_others_in_place() {
        let long = filtered(|word: &String| word.len() > 2);
        let source = vec!["a".to_string(), "abc".to_string(), "bc".to_string(), "bcd".to_string()];
        assert_eq!(
            long.modify(source, |word| word.to_uppercase()),
            vec!["a", "ABC", "bc", "BCD"]
        );
    }

    #[rstest]
    fn filter_index_selects_positions() {
        let first_two = filter_index(|position| position < 2);
        assert_eq!(first_two.set(vec![7, 8, 9], 0), vec![0, 0, 9]);
        assert_eq!(first_two.size(&vec![1]), 1);
    }

    #[rstest]
    fn modify_f_short_circuits_with_option() {
        let evens = filtered(|n: &i32| n % 2 == 0);
        let halved = evens.modify_f(vec![1, 4, 6], |n| (n > 0).then_some(n / 2));
        assert_eq!(halved, Some(vec![1, 2, 3]));
        let rejected = evens.modify_f(vec![1, 4, -6], |n| (n > 0).then_some(n / 2));
        assert_eq!(rejected, None);
    }
}
