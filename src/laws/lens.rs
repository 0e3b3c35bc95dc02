//! Lens laws.

use std::fmt::Debug;
use std::rc::Rc;

use proptest::strategy::Strategy;

use super::equivalence::{Equivalence, Structural, check_equivalent, check_options};
use super::generators::GeneratedFn;
use super::law::Law;
use crate::optics::Lens;
use crate::typeclass::{Const, First, Functor, Identity, TypeConstructor};

/// Lens laws under structural equality.
///
/// # Examples
///
/// ```rust
/// use opticus::laws::{LawConfig, check_laws, i32_endomorphism, lens_laws};
/// use opticus::optics::Lens;
/// use proptest::prelude::*;
///
/// let first: Lens<(i32, bool), i32> =
///     Lens::new(|pair: &(i32, bool)| pair.0, |pair: (i32, bool), n| (n, pair.1));
/// let laws = lens_laws(&first, any::<(i32, bool)>(), any::<i32>(), i32_endomorphism());
/// check_laws(&laws, &LawConfig::default().with_cases(64)).assert_success();
/// ```
pub fn lens_laws<S, A, GS, GA, GF>(lens: &Lens<S, A>, sources: GS, foci: GA, functions: GF) -> Vec<Law>
where
    S: Clone + PartialEq + Debug + 'static,
    A: Clone + PartialEq + Debug + 'static,
    GS: Strategy<Value = S> + Clone + 'static,
    GA: Strategy<Value = A> + Clone + 'static,
    GF: Strategy<Value = GeneratedFn<A, A>> + Clone + 'static,
{
    lens_laws_with(lens, sources, foci, functions, Structural, Structural)
}

/// Lens laws under caller supplied equivalences for sources and foci.
pub fn lens_laws_with<S, A, GS, GA, GF, ES, EA>(
    lens: &Lens<S, A>,
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
            let (lens, eq) = (lens.clone(), Rc::clone(&source_eq));
            Law::property("lens: set what you get", sources.clone(), move |source: S| {
                let focus = lens.get(&source);
                check_equivalent(&*eq, &lens.set(source.clone(), focus), &source)
            })
        },
        {
            let (lens, eq) = (lens.clone(), Rc::clone(&focus_eq));
            Law::property(
                "lens: get what you set",
                (sources.clone(), foci.clone()),
                move |(source, focus): (S, A)| {
                    check_equivalent(&*eq, &lens.get(&lens.set(source, focus.clone())), &focus)
                },
            )
        },
        {
            let (lens, eq) = (lens.clone(), Rc::clone(&source_eq));
            Law::property(
                "lens: set is idempotent",
                (sources.clone(), foci.clone(), foci.clone()),
                move |(source, first, second): (S, A, A)| {
                    let twice = lens.set(lens.set(source.clone(), first), second.clone());
                    check_equivalent(&*eq, &twice, &lens.set(source, second))
                },
            )
        },
        {
            let (lens, eq) = (lens.clone(), Rc::clone(&source_eq));
            Law::property("lens: modify identity", sources.clone(), move |source: S| {
                check_equivalent(&*eq, &lens.modify(source.clone(), |focus| focus), &source)
            })
        },
        {
            let (lens, eq) = (lens.clone(), Rc::clone(&source_eq));
            Law::property(
                "lens: compose modify",
                (sources.clone(), functions.clone(), functions.clone()),
                move |(source, f, g): (S, GeneratedFn<A, A>, GeneratedFn<A, A>)| {
                    let stepwise = lens.modify(lens.modify(source.clone(), |a| f.call(a)), |a| g.call(a));
                    let composed = f.then(&g);
                    check_equivalent(&*eq, &stepwise, &lens.modify(source, |a| composed.call(a)))
                },
            )
        },
        {
            let (lens, eq) = (lens.clone(), Rc::clone(&source_eq));
            Law::property(
                "lens: consistent set with modify",
                (sources.clone(), foci.clone()),
                move |(source, focus): (S, A)| {
                    let modified = lens.modify(source.clone(), |_| focus.clone());
                    check_equivalent(&*eq, &modified, &lens.set(source, focus))
                },
            )
        },
        {
            let (lens, eq) = (lens.clone(), Rc::clone(&source_eq));
            Law::property(
                "lens: consistent modify with modify_f Identity",
                (sources.clone(), functions),
                move |(source, f): (S, GeneratedFn<A, A>)| {
                    let effectful = lens.modify_f(source.clone(), |a| Identity(f.call(a)));
                    check_equivalent(&*eq, &effectful.into_inner(), &lens.modify(source, |a| f.call(a)))
                },
            )
        },
        {
            let (lens, eq) = (lens.clone(), Rc::clone(&focus_eq));
            Law::property(
                "lens: consistent get with modify_f Const",
                sources,
                move |source: S| {
                    let collected = lens
                        .modify_f(source.clone(), |a| Const::<First<A>, A>::new(First::new(a)))
                        .into_value()
                        .into_inner();
                    check_options(&*eq, &collected, &Some(lens.get(&source)))
                },
            )
        },
    ]
}

/// Laws tying `modify_f` in a caller supplied functor to `modify`.
///
/// `pure` lifts a focus into the functor; `modify_f` with `pure` must be
/// `pure` of the unchanged source, and `modify_f` with `pure ∘ f` must be
/// `pure` of `modify(f)`.
///
/// # Examples
///
/// ```rust
/// use opticus::laws::{LawConfig, check_laws, i32_endomorphism, lens_modify_f_laws};
/// use opticus::optics::Lens;
/// use proptest::prelude::*;
///
/// let first: Lens<(i32, bool), i32> =
///     Lens::new(|pair: &(i32, bool)| pair.0, |pair: (i32, bool), n| (n, pair.1));
/// let laws = lens_modify_f_laws(&first, any::<(i32, bool)>(), i32_endomorphism(), Some::<i32>, Some);
/// check_laws(&laws, &LawConfig::default().with_cases(64)).assert_success();
/// ```
pub fn lens_modify_f_laws<S, A, FA, GS, GF, P, Q>(
    lens: &Lens<S, A>,
    sources: GS,
    functions: GF,
    pure: P,
    pure_source: Q,
) -> Vec<Law>
where
    S: Clone + Debug + 'static,
    A: 'static,
    FA: Functor + TypeConstructor<Inner = A> + 'static,
    FA::WithType<S>: PartialEq + Debug,
    GS: Strategy<Value = S> + Clone + 'static,
    GF: Strategy<Value = GeneratedFn<A, A>> + 'static,
    P: Fn(A) -> FA + 'static,
    Q: Fn(S) -> FA::WithType<S> + 'static,
{
    let pure = Rc::new(pure);
    let pure_source = Rc::new(pure_source);
    vec![
        {
            let (lens, pure, pure_source) = (lens.clone(), Rc::clone(&pure), Rc::clone(&pure_source));
            Law::property("lens: modify_f pure is pure", sources.clone(), move |source: S| {
                let lifted = lens.modify_f(source.clone(), |a| pure(a));
                check_equivalent(&Structural, &lifted, &pure_source(source))
            })
        },
        {
            let lens = lens.clone();
            Law::property(
                "lens: modify_f pure after f is pure of modify",
                (sources, functions),
                move |(source, f): (S, GeneratedFn<A, A>)| {
                    let lifted = lens.modify_f(source.clone(), |a| pure(f.call(a)));
                    check_equivalent(&Structural, &lifted, &pure_source(lens.modify(source, |a| f.call(a))))
                },
            )
        },
    ]
}
