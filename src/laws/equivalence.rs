//! Pluggable equality for law checks.
//!
//! Laws compare results with an [`Equivalence`] instead of `PartialEq`, so
//! types with no useful structural equality (closures, effects, floats) can
//! still be checked.

use std::fmt::Debug;

use proptest::test_runner::TestCaseError;

/// Decides whether two values count as the same.
pub trait Equivalence<A: ?Sized> {
    /// Returns `true` if `left` and `right` are equivalent.
    fn equivalent(&self, left: &A, right: &A) -> bool;
}

/// Equivalence by `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Structural;

impl<A: PartialEq + ?Sized> Equivalence<A> for Structural {
    fn equivalent(&self, left: &A, right: &A) -> bool {
        left == right
    }
}

/// Equivalence given by a closure. Built with [`equivalence_fn`].
#[derive(Clone, Copy)]
pub struct EquivalenceFn<F>(F);

impl<A, F> Equivalence<A> for EquivalenceFn<F>
where
    F: Fn(&A, &A) -> bool,
{
    fn equivalent(&self, left: &A, right: &A) -> bool {
        (self.0)(left, right)
    }
}

impl<F> Debug for EquivalenceFn<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("EquivalenceFn")
    }
}

/// Wraps a closure as an [`Equivalence`].
///
/// # Examples
///
/// ```rust
/// use opticus::laws::{Equivalence, equivalence_fn};
///
/// let close = equivalence_fn(|a: &f64, b: &f64| (a - b).abs() < 1e-9);
/// assert!(close.equivalent(&0.3, &(0.1 + 0.2)));
/// ```
pub const fn equivalence_fn<A, F>(function: F) -> EquivalenceFn<F>
where
    F: Fn(&A, &A) -> bool,
{
    EquivalenceFn(function)
}

pub(crate) fn check_equivalent<A, Q>(equivalence: &Q, left: &A, right: &A) -> Result<(), TestCaseError>
where
    A: Debug,
    Q: Equivalence<A> + ?Sized,
{
    if equivalence.equivalent(left, right) {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{left:?} is not equivalent to {right:?}"
        )))
    }
}

pub(crate) fn check_options<A, Q>(
    equivalence: &Q,
    left: &Option<A>,
    right: &Option<A>,
) -> Result<(), TestCaseError>
where
    A: Debug,
    Q: Equivalence<A> + ?Sized,
{
    let same = match (left, right) {
        (Some(left), Some(right)) => equivalence.equivalent(left, right),
        (None, None) => true,
        _ => false,
    };
    if same {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{left:?} is not equivalent to {right:?}"
        )))
    }
}

pub(crate) fn check_sequences<A, Q>(equivalence: &Q, left: &[A], right: &[A]) -> Result<(), TestCaseError>
where
    A: Debug,
    Q: Equivalence<A> + ?Sized,
{
    let same = left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(left, right)| equivalence.equivalent(left, right));
    if same {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{left:?} is not equivalent to {right:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn structural_uses_partial_eq() {
        assert!(Structural.equivalent(&vec![1, 2], &vec![1, 2]));
        assert!(!Structural.equivalent("a", "b"));
    }

    #[rstest]
    fn closures_define_custom_equivalence() {
        let case_insensitive = equivalence_fn(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
        assert!(check_equivalent(&case_insensitive, &"Ann".to_string(), &"ANN".to_string()).is_ok());
        assert!(check_equivalent(&case_insensitive, &"Ann".to_string(), &"Bo".to_string()).is_err());
    }

    #[rstest]
    #[case(Some(1), Some(-1), true)]
    #[case(None, None, true)]
    #[case(Some(1), None, false)]
    fn options_compare_through_the_element(
        #[case] left: Option<i32>,
        #[case] right: Option<i32>,
        #[case] expected: bool,
    ) {
        let by_magnitude = equivalence_fn(|a: &i32, b: &i32| a.abs() == b.abs());
        assert_eq!(check_options(&by_magnitude, &left, &right).is_ok(), expected);
    }

    #[rstest]
    fn sequences_must_agree_in_length() {
        assert!(check_sequences(&Structural, &[1, 2], &[1, 2]).is_ok());
        assert!(check_sequences(&Structural, &[1, 2], &[1]).is_err());
    }
}
