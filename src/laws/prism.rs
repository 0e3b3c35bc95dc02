//! Prism laws.

use std::fmt::Debug;
use std::rc::Rc;

use proptest::strategy::Strategy;

use super::equivalence::{Equivalence, Structural, check_equivalent, check_options};
use super::generators::GeneratedFn;
use super::law::Law;
use crate::optics::Prism;
use crate::typeclass::{Const, First, Identity};

/// Prism laws under structural equality.
///
/// `sources` should produce both matching and non-matching values, or the
/// laws only ever see one branch.
///
/// # Examples
///
/// ```rust
/// use opticus::laws::{LawConfig, check_laws, i32_endomorphism, prism_laws};
/// use opticus::optics::{Prism, some_prism};
/// use proptest::prelude::*;
///
/// let some: Prism<Option<i32>, i32> = some_prism();
/// let laws = prism_laws(&some, any::<Option<i32>>(), any::<i32>(), i32_endomorphism());
/// check_laws(&laws, &LawConfig::default().with_cases(64)).assert_success();
/// ```
pub fn prism_laws<S, A, GS, GA, GF>(prism: &Prism<S, A>, sources: GS, foci: GA, functions: GF) -> Vec<Law>
where
    S: Clone + PartialEq + Debug + 'static,
    A: Clone + PartialEq + Debug + 'static,
    GS: Strategy<Value = S> + Clone + 'static,
    GA: Strategy<Value = A> + Clone + 'static,
    GF: Strategy<Value = GeneratedFn<A, A>> + Clone + 'static,
{
    prism_laws_with(prism, sources, foci, functions, Structural, Structural)
}

/// Prism laws under caller supplied equivalences for sources and foci.
pub fn prism_laws_with<S, A, GS, GA, GF, ES, EA>(
    prism: &Prism<S, A>,
    sources: GS,
    foci: GA,
    functions: GF,
    source_eq: ES,
    focus_eq: EA,
) -> Vec<Law>
where
    S: Clone + Debug + 'static,
    A: Clone + Debug + 'static,
    GS: Strategy<Value = S> + Clone + 'static,
    GA: Strategy<Value = A> + Clone + 'static,
    GF: Strategy<Value = GeneratedFn<A, A>> + Clone + 'static,
    ES: Equivalence<S> + 'static,
    EA: Equivalence<A> + 'static,
{
    let source_eq = Rc::new(source_eq);
    let focus_eq = Rc::new(focus_eq);
    vec![
        {
            let (prism, eq) = (prism.clone(), Rc::clone(&source_eq));
            Law::property("prism: partial round trip one way", sources.clone(), move |source: S| {
                let rebuilt = prism
                    .get_or_modify(source.clone())
                    .fold(|unmatched| unmatched, |focus| prism.reverse_get(focus));
                check_equivalent(&*eq, &rebuilt, &source)
            })
        },
        {
            let (prism, eq) = (prism.clone(), Rc::clone(&focus_eq));
            Law::property("prism: round trip other way", foci.clone(), move |focus: A| {
                let extracted = prism.get_option(&prism.reverse_get(focus.clone()));
                check_options(&*eq, &extracted, &Some(focus))
            })
        },
        {
            let (prism, eq) = (prism.clone(), Rc::clone(&source_eq));
            Law::property("prism: modify identity", sources.clone(), move |source: S| {
                check_equivalent(&*eq, &prism.modify(source.clone(), |focus| focus), &source)
            })
        },
        {
            let (prism, eq) = (prism.clone(), Rc::clone(&source_eq));
            Law::property(
                "prism: compose modify",
                (sources.clone(), functions.clone(), functions.clone()),
                move |(source, f, g): (S, GeneratedFn<A, A>, GeneratedFn<A, A>)| {
                    let stepwise = prism.modify(prism.modify(source.clone(), |a| f.call(a)), |a| g.call(a));
                    let composed = f.then(&g);
                    check_equivalent(&*eq, &stepwise, &prism.modify(source, |a| composed.call(a)))
                },
            )
        },
        {
            let (prism, eq) = (prism.clone(), Rc::clone(&source_eq));
            Law::property(
                "prism: consistent set with modify",
                (sources.clone(), foci),
                move |(source, focus): (S, A)| {
                    let modified = prism.modify(source.clone(), |_| focus.clone());
                    check_equivalent(&*eq, &modified, &prism.set(source, focus))
                },
            )
        },
        {
            let (prism, eq) = (prism.clone(), source_eq);
            Law::property(
                "prism: consistent modify with modify_f Identity",
                (sources.clone(), functions),
                move |(source, f): (S, GeneratedFn<A, A>)| {
                    let effectful = prism.modify_f(source.clone(), |a| Identity(f.call(a)));
                    check_equivalent(&*eq, &effectful.into_inner(), &prism.modify(source, |a| f.call(a)))
                },
            )
        },
        {
            let (prism, eq) = (prism.clone(), focus_eq);
            Law::property(
                "prism: consistent get_option with modify_f Const",
                sources,
                move |source: S| {
                    let collected = prism
                        .modify_f(source.clone(), |a| Const::<First<A>, A>::new(First::new(a)))
                        .into_value()
                        .into_inner();
                    check_options(&*eq, &collected, &prism.get_option(&source))
                },
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use crate::laws::{LawConfig, check_laws, i32_endomorphism};
    use crate::optics::{left_prism, ok_prism};
    use proptest::prelude::*;
    use rstest::rstest;

    fn config() -> LawConfig {
        LawConfig::default().with_cases(64)
    }

    fn either_strategy() -> impl Strategy<Value = Either<String, i32>> + Clone {
        prop_oneof![
            "[a-z]{0,4}".prop_map(Either::Left),
            any::<i32>().prop_map(Either::Right),
        ]
    }

    #[rstest]
    fn standard_prisms_are_lawful() {
        let ok: Prism<Result<i32, String>, i32> = ok_prism();
        let results = prop_oneof![
            any::<i32>().prop_map(Ok),
            "[a-z]{0,4}".prop_map(Err),
        ];
        check_laws(&prism_laws(&ok, results, any::<i32>(), i32_endomorphism()), &config())
            .assert_success();

        let left: Prism<Either<String, i32>, String> = left_prism();
        let laws = prism_laws(
            &left,
            either_strategy(),
            "[a-z]{0,4}",
            crate::laws::string_endomorphism(),
        );
        assert_eq!(laws.len(), 7);
        check_laws(&laws, &config()).assert_success();
    }

    #[rstest]
    fn positive_prism_breaks_round_trip_on_non_positive_foci() {
        let positive: Prism<i32, i32> = Prism::from_preview(
            |n: &i32| (*n > 0).then_some(*n),
            |n| n,
        );
        let report = check_laws(
            &prism_laws(&positive, any::<i32>(), any::<i32>(), i32_endomorphism()),
            &config(),
        );
        let failed: Vec<&str> = report.violations().iter().map(|violation| violation.law()).collect();
        assert!(failed.contains(&"prism: round trip other way"));
        assert!(report.passed().contains(&"prism: partial round trip one way"));
    }
}
