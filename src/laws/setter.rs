//! Setter laws.

use std::fmt::Debug;
use std::rc::Rc;

use proptest::strategy::Strategy;

use super::equivalence::{Equivalence, Structural, check_equivalent};
use super::generators::GeneratedFn;
use super::law::Law;
use crate::optics::Setter;

/// Setter laws under structural equality.
///
/// # Examples
///
/// ```rust
/// use opticus::laws::{LawConfig, check_laws, i32_endomorphism, setter_laws};
/// use opticus::optics::Setter;
/// use proptest::prelude::*;
///
/// let values: Setter<Vec<i32>, i32> =
///     Setter::new(|items: Vec<i32>, function| items.into_iter().map(|n| function(n)).collect());
/// let vectors = proptest::collection::vec(any::<i32>(), 0..6);
/// let laws = setter_laws(&values, vectors, any::<i32>(), i32_endomorphism());
/// check_laws(&laws, &LawConfig::default().with_cases(64)).assert_success();
/// ```
pub fn setter_laws<S, A, GS, GA, GF>(setter: &Setter<S, A>, sources: GS, foci: GA, functions: GF) -> Vec<Law>
where
    S: Clone + PartialEq + Debug + 'static,
    A: Clone + Debug + 'static,
    GS: Strategy<Value = S> + Clone + 'static,
    GA: Strategy<Value = A> + Clone + 'static,
    GF: Strategy<Value = GeneratedFn<A, A>> + Clone + 'static,
{
    setter_laws_with(setter, sources, foci, functions, Structural)
}

/// Setter laws under a caller supplied equivalence for sources.
///
/// A setter cannot read its foci, so only sources are ever compared.
pub fn setter_laws_with<S, A, GS, GA, GF, ES>(
    setter: &Setter<S, A>,
    sources: GS,
    foci: GA,
    functions: GF,
    source_eq: ES,
) -> Vec<Law>
where
    S: Clone + Debug + 'static,
    A: Clone + Debug + 'static,
    GS: Strategy<Value = S> + Clone + 'static,
    GA: Strategy<Value = A> + Clone + 'static,
    GF: Strategy<Value = GeneratedFn<A, A>> + Clone + 'static,
    ES: Equivalence<S> + 'static,
{
    let source_eq = Rc::new(source_eq);
    vec![
        {
            let (setter, eq) = (setter.clone(), Rc::clone(&source_eq));
            Law::property("setter: modify identity", sources.clone(), move |source: S| {
                check_equivalent(&*eq, &setter.modify(source.clone(), |focus| focus), &source)
            })
        },
        {
            let (setter, eq) = (setter.clone(), Rc::clone(&source_eq));
            Law::property(
                "setter: compose modify",
                (sources.clone(), functions.clone(), functions),
                move |(source, f, g): (S, GeneratedFn<A, A>, GeneratedFn<A, A>)| {
                    let stepwise = setter.modify(setter.modify(source.clone(), |a| f.call(a)), |a| g.call(a));
                    let composed = f.then(&g);
                    check_equivalent(&*eq, &stepwise, &setter.modify(source, |a| composed.call(a)))
                },
            )
        },
        {
            let (setter, eq) = (setter.clone(), Rc::clone(&source_eq));
            Law::property(
                "setter: set is idempotent",
                (sources.clone(), foci.clone()),
                move |(source, focus): (S, A)| {
                    let once = setter.set(source, focus.clone());
                    check_equivalent(&*eq, &setter.set(once.clone(), focus), &once)
                },
            )
        },
        {
            let (setter, eq) = (setter.clone(), source_eq);
            Law::property(
                "setter: consistent set with modify",
                (sources, foci),
                move |(source, focus): (S, A)| {
                    let modified = setter.modify(source.clone(), |_| focus.clone());
                    check_equivalent(&*eq, &modified, &setter.set(source, focus))
                },
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laws::{LawConfig, check_laws, i32_endomorphism};
    use crate::optics::{Compose, Each, Lens, Traversal};
    use proptest::prelude::*;
    use rstest::rstest;

    fn config() -> LawConfig {
        LawConfig::default().with_cases(64)
    }

    #[rstest]
    fn setter_from_composition_is_lawful() {
        let first: Lens<(Vec<i32>, bool), Vec<i32>> = Lens::new(
            |pair: &(Vec<i32>, bool)| pair.0.clone(),
            |pair: (Vec<i32>, bool), items| (items, pair.1),
        );
        let each: Traversal<Vec<i32>, i32> = Vec::each();
        let setter = first.as_setter().compose(&each.as_setter());
        let sources = (proptest::collection::vec(any::<i32>(), 0..5), any::<bool>());
        let laws = setter_laws(&setter, sources, any::<i32>(), i32_endomorphism());
        assert_eq!(laws.len(), 4);
        check_laws(&laws, &config()).assert_success();
    }

    #[rstest]
    fn setter_that_applies_twice_breaks_compose_modify() {
        let twice: Setter<i32, i32> = Setter::new(|n: i32, function| {
            let once = function(n);
            function(once)
        });
        let report = check_laws(
            &setter_laws(&twice, any::<i32>(), any::<i32>(), i32_endomorphism()),
            &config(),
        );
        let failed: Vec<&str> = report.violations().iter().map(|violation| violation.law()).collect();
        assert!(failed.contains(&"setter: compose modify"));
        assert!(report.passed().contains(&"setter: modify identity"));
    }
}
