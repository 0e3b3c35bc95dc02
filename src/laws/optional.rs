//! Optional laws: lens laws where the focus exists, no-ops where it does not.

use std::fmt::Debug;
use std::rc::Rc;

use proptest::strategy::Strategy;

use super::equivalence::{Equivalence, Structural, check_equivalent, check_options};
use super::generators::GeneratedFn;
use super::law::Law;
use crate::optics::Optional;
use crate::typeclass::{Const, First, Identity};

/// Optional laws under structural equality.
///
/// # Examples
///
/// ```rust
/// use opticus::laws::{LawConfig, check_laws, i32_endomorphism, optional_laws};
/// use opticus::optics::{Optional, index};
/// use proptest::prelude::*;
///
/// let second: Optional<Vec<i32>, i32> = index(1_usize);
/// let vectors = proptest::collection::vec(any::<i32>(), 0..4);
/// let laws = optional_laws(&second, vectors, any::<i32>(), i32_endomorphism());
/// check_laws(&laws, &LawConfig::default().with_cases(64)).assert_success();
/// ```
pub fn optional_laws<S, A, GS, GA, GF>(
    optional: &Optional<S, A>,
    sources: GS,
    foci: GA,
    functions: GF,
) -> Vec<Law>
where
    S: Clone + PartialEq + Debug + 'static,
    A: Clone + PartialEq + Debug + 'static,
    GS: Strategy<Value = S> + Clone + 'static,
    GA: Strategy<Value = A> + Clone + 'static,
    GF: Strategy<Value = GeneratedFn<A, A>> + Clone + 'static,
{
    optional_laws_with(optional, sources, foci, functions, Structural, Structural)
}

/// Optional laws under caller supplied equivalences for sources and foci.
pub fn optional_laws_with<S, A, GS, GA, GF, ES, EA>(
    optional: &Optional<S, A>,
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
            let (optional, eq) = (optional.clone(), Rc::clone(&source_eq));
            Law::property("optional: set what you get", sources.clone(), move |source: S| {
                let rebuilt = optional
                    .get_or_modify(source.clone())
                    .fold(|unmatched| unmatched, |focus| optional.set(source.clone(), focus));
                check_equivalent(&*eq, &rebuilt, &source)
            })
        },
        {
            let (optional, eq) = (optional.clone(), Rc::clone(&focus_eq));
            Law::property(
                "optional: get what you set",
                (sources.clone(), foci.clone()),
                move |(source, focus): (S, A)| {
                    let expected = optional.get_option(&source).map(|_| focus.clone());
                    check_options(&*eq, &optional.get_option(&optional.set(source, focus)), &expected)
                },
            )
        },
        {
            let (optional, eq) = (optional.clone(), Rc::clone(&source_eq));
            Law::property(
                "optional: set is idempotent",
                (sources.clone(), foci.clone()),
                move |(source, focus): (S, A)| {
                    let once = optional.set(source, focus.clone());
                    check_equivalent(&*eq, &optional.set(once.clone(), focus), &once)
                },
            )
        },
        {
            let (optional, eq) = (optional.clone(), Rc::clone(&source_eq));
            Law::property("optional: modify identity", sources.clone(), move |source: S| {
                check_equivalent(&*eq, &optional.modify(source.clone(), |focus| focus), &source)
            })
        },
        {
            let (optional, eq) = (optional.clone(), Rc::clone(&source_eq));
            Law::property(
                "optional: compose modify",
                (sources.clone(), functions.clone(), functions.clone()),
                move |(source, f, g): (S, GeneratedFn<A, A>, GeneratedFn<A, A>)| {
                    let stepwise =
                        optional.modify(optional.modify(source.clone(), |a| f.call(a)), |a| g.call(a));
                    let composed = f.then(&g);
                    check_equivalent(&*eq, &stepwise, &optional.modify(source, |a| composed.call(a)))
                },
            )
        },
        {
            let (optional, eq) = (optional.clone(), Rc::clone(&source_eq));
            Law::property(
                "optional: consistent set with modify",
                (sources.clone(), foci),
                move |(source, focus): (S, A)| {
                    let modified = optional.modify(source.clone(), |_| focus.clone());
                    check_equivalent(&*eq, &modified, &optional.set(source, focus))
                },
            )
        },
        {
            let (optional, eq) = (optional.clone(), source_eq);
            Law::property(
                "optional: consistent modify with modify_f Identity",
                (sources.clone(), functions),
                move |(source, f): (S, GeneratedFn<A, A>)| {
                    let effectful = optional.modify_f(source.clone(), |a| Identity(f.call(a)));
                    check_equivalent(&*eq, &effectful.into_inner(), &optional.modify(source, |a| f.call(a)))
                },
            )
        },
        {
            let (optional, eq) = (optional.clone(), focus_eq);
            Law::property(
                "optional: consistent get_option with modify_f Const",
                sources,
                move |source: S| {
                    let collected = optional
                        .modify_f(source.clone(), |a| Const::<First<A>, A>::new(First::new(a)))
                        .into_value()
                        .into_inner();
                    check_options(&*eq, &collected, &optional.get_option(&source))
                },
            )
        },
    ]
}
