//! `MonadError` laws.

use std::fmt::Debug;

use proptest::strategy::Strategy;

use super::equivalence::{Structural, check_equivalent};
use super::law::Law;
use crate::effect::MonadError;
use crate::typeclass::TypeConstructor;

/// Laws relating `throw_error`, `catch_error`, `handle_error`, `attempt`,
/// `ensure` and `from_result` to `pure` and `flat_map`.
///
/// `M` is the computation type applied to `A`; `computations` generates
/// both successful and failed ones.
///
/// # Examples
///
/// ```rust
/// use opticus::laws::{LawConfig, check_laws, monad_error_laws};
/// use proptest::prelude::*;
///
/// let results = prop_oneof![any::<i32>().prop_map(Ok), "[a-z]{0,3}".prop_map(Err)];
/// let laws = monad_error_laws::<Result<i32, String>, _, _, _, _, _>(any::<i32>(), "[a-z]{0,3}", results);
/// check_laws(&laws, &LawConfig::default().with_cases(64)).assert_success();
/// ```
pub fn monad_error_laws<M, A, E, GA, GE, GM>(values: GA, errors: GE, computations: GM) -> Vec<Law>
where
    M: MonadError<E> + TypeConstructor<Inner = A, WithType<A> = M> + Clone + PartialEq + Debug + 'static,
    M::WithType<Result<A, E>>: PartialEq + Debug,
    A: Clone + Debug + 'static,
    E: Clone + Debug + 'static,
    GA: Strategy<Value = A> + Clone + 'static,
    GE: Strategy<Value = E> + Clone + 'static,
    GM: Strategy<Value = M> + Clone + 'static,
{
    vec![
        Law::property(
            "monad error: left zero",
            (errors.clone(), computations.clone()),
            |(error, next): (E, M)| {
                let failed = M::throw_error::<A>(error.clone());
                check_equivalent(&Structural, &failed.flat_map::<A, _>(|_| next), &M::throw_error::<A>(error))
            },
        ),
        Law::property(
            "monad error: ensure consistency",
            (computations.clone(), errors.clone(), proptest::bool::ANY),
            |(computation, error, keep): (M, E, bool)| {
                let ensured = M::ensure::<A, _, _>(computation.clone(), || error.clone(), |_| keep);
                let expected = computation.flat_map::<A, _>(|value| {
                    if keep {
                        M::pure(value)
                    } else {
                        M::throw_error::<A>(error)
                    }
                });
                check_equivalent(&Structural, &ensured, &expected)
            },
        ),
        Law::property(
            "monad error: handle_error of a raise",
            (errors.clone(), values.clone()),
            |(error, recovered): (E, A)| {
                let handled = M::handle_error::<A, _>(M::throw_error::<A>(error), |_| recovered.clone());
                check_equivalent(&Structural, &handled, &M::pure(recovered))
            },
        ),
        Law::property(
            "monad error: handle_error of a pure",
            (values.clone(), values.clone()),
            |(value, recovered): (A, A)| {
                let handled = M::handle_error::<A, _>(M::pure(value.clone()), |_| recovered);
                check_equivalent(&Structural, &handled, &M::pure(value))
            },
        ),
        Law::property(
            "monad error: catch_error of a raise",
            (errors.clone(), computations),
            |(error, fallback): (E, M)| {
                let caught = M::catch_error::<A, _>(M::throw_error::<A>(error), |_| fallback.clone());
                check_equivalent(&Structural, &caught, &fallback)
            },
        ),
        Law::property("monad error: attempt of a raise", errors.clone(), |error: E| {
            let attempted = M::attempt::<A>(M::throw_error::<A>(error.clone()));
            check_equivalent(&Structural, &attempted, &M::pure::<Result<A, E>>(Err(error)))
        }),
        Law::property("monad error: attempt of a pure", values.clone(), |value: A| {
            let attempted = M::attempt::<A>(M::pure(value.clone()));
            check_equivalent(&Structural, &attempted, &M::pure::<Result<A, E>>(Ok(value)))
        }),
        Law::property("monad error: from_result of Ok", values, |value: A| {
            let lifted = M::from_result::<A>(Ok(value.clone()));
            check_equivalent(&Structural, &lifted, &M::pure(value))
        }),
        Law::property("monad error: from_result of Err", errors, |error: E| {
            let lifted = M::from_result::<A>(Err(error.clone()));
            check_equivalent(&Structural, &lifted, &M::throw_error::<A>(error))
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laws::{LawConfig, check_laws};
    use proptest::prelude::*;
    use rstest::rstest;

    fn config() -> LawConfig {
        LawConfig::default().with_cases(64)
    }

    #[rstest]
    fn result_is_lawful() {
        let results = prop_oneof![any::<i32>().prop_map(Ok), "[a-z]{0,3}".prop_map(Err)];
        let laws = monad_error_laws::<Result<i32, String>, _, _, _, _, _>(
            any::<i32>(),
            "[a-z]{0,3}",
            results,
        );
        assert_eq!(laws.len(), 9);
        check_laws(&laws, &config()).assert_success();
    }

    #[rstest]
    fn option_is_lawful() {
        let laws = monad_error_laws::<Option<u8>, _, _, _, _, _>(
            any::<u8>(),
            Just(()),
            proptest::option::of(any::<u8>()),
        );
        check_laws(&laws, &config()).assert_success();
    }
}
