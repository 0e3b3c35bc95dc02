//! Traversal laws.

use std::fmt::Debug;
use std::rc::Rc;

use proptest::strategy::Strategy;
use proptest::test_runner::TestCaseError;

use super::equivalence::{Equivalence, Structural, check_equivalent, check_options, check_sequences};
use super::generators::GeneratedFn;
use super::law::Law;
use crate::optics::Traversal;
use crate::typeclass::{Applicative, Const, Identity, TypeConstructor};

/// Traversal laws under structural equality.
///
/// # Examples
///
/// ```rust
/// use opticus::laws::{LawConfig, check_laws, i32_endomorphism, traversal_laws};
/// use opticus::optics::{Each, Traversal};
/// use proptest::prelude::*;
///
/// let each: Traversal<Vec<i32>, i32> = Vec::each();
/// let vectors = proptest::collection::vec(any::<i32>(), 0..6);
/// let laws = traversal_laws(&each, vectors, any::<i32>(), i32_endomorphism());
/// check_laws(&laws, &LawConfig::default().with_cases(64)).assert_success();
/// ```
pub fn traversal_laws<S, A, GS, GA, GF>(
    traversal: &Traversal<S, A>,
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
    traversal_laws_with(traversal, sources, foci, functions, Structural, Structural)
}

/// Traversal laws under caller supplied equivalences for sources and foci.
pub fn traversal_laws_with<S, A, GS, GA, GF, ES, EA>(
    traversal: &Traversal<S, A>,
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
            let (traversal, eq) = (traversal.clone(), Rc::clone(&focus_eq));
            Law::property("traversal: head_option is the first focus", sources.clone(), move |source: S| {
                let first = traversal.get_all(&source).into_iter().next();
                check_options(&*eq, &traversal.head_option(&source), &first)
            })
        },
        {
            let (traversal, eq) = (traversal.clone(), Rc::clone(&focus_eq));
            Law::property(
                "traversal: get what you modify",
                (sources.clone(), functions.clone()),
                move |(source, f): (S, GeneratedFn<A, A>)| {
                    let expected: Vec<A> = traversal.get_all(&source).into_iter().map(|a| f.call(a)).collect();
                    let modified = traversal.modify(source, |a| f.call(a));
                    check_sequences(&*eq, &traversal.get_all(&modified), &expected)
                },
            )
        },
        {
            let (traversal, eq) = (traversal.clone(), Rc::clone(&source_eq));
            Law::property(
                "traversal: set is idempotent",
                (sources.clone(), foci),
                move |(source, focus): (S, A)| {
                    let once = traversal.set(source, focus.clone());
                    check_equivalent(&*eq, &traversal.set(once.clone(), focus), &once)
                },
            )
        },
        {
            let (traversal, eq) = (traversal.clone(), Rc::clone(&source_eq));
            Law::property("traversal: modify identity", sources.clone(), move |source: S| {
                check_equivalent(&*eq, &traversal.modify(source.clone(), |focus| focus), &source)
            })
        },
        {
            let (traversal, eq) = (traversal.clone(), Rc::clone(&source_eq));
            Law::property(
                "traversal: compose modify",
                (sources.clone(), functions.clone(), functions.clone()),
                move |(source, f, g): (S, GeneratedFn<A, A>, GeneratedFn<A, A>)| {
                    let stepwise =
                        traversal.modify(traversal.modify(source.clone(), |a| f.call(a)), |a| g.call(a));
                    let composed = f.then(&g);
                    check_equivalent(&*eq, &stepwise, &traversal.modify(source, |a| composed.call(a)))
                },
            )
        },
        {
            let (traversal, eq) = (traversal.clone(), source_eq);
            Law::property(
                "traversal: consistent modify with modify_f Identity",
                (sources.clone(), functions.clone()),
                move |(source, f): (S, GeneratedFn<A, A>)| {
                    let effectful = traversal.modify_f(source.clone(), |a| Identity(f.call(a)));
                    check_equivalent(&*eq, &effectful.into_inner(), &traversal.modify(source, |a| f.call(a)))
                },
            )
        },
        {
            let (traversal, eq) = (traversal.clone(), Rc::clone(&focus_eq));
            Law::property(
                "traversal: consistent get_all with modify_f Const",
                sources.clone(),
                move |source: S| {
                    let collected = traversal
                        .modify_f(source.clone(), |a| Const::<Vec<A>, A>::new(vec![a]))
                        .into_value();
                    check_sequences(&*eq, &collected, &traversal.get_all(&source))
                },
            )
        },
        {
            let (traversal, eq) = (traversal.clone(), Rc::clone(&focus_eq));
            Law::property("traversal: fold_map agrees with get_all", sources.clone(), move |source: S| {
                let folded = traversal.fold_map(&source, |focus| vec![focus]);
                check_sequences(&*eq, &folded, &traversal.get_all(&source))
            })
        },
        {
            let (traversal, eq) = (traversal.clone(), focus_eq);
            Law::property(
                "traversal: find returns the first match",
                (sources.clone(), functions),
                move |(source, f): (S, GeneratedFn<A, A>)| {
                    // Matches the fixed points of `f`.
                    let fixed = |focus: &A| eq.equivalent(&f.call(focus.clone()), focus);
                    let expected = traversal.get_all(&source).into_iter().find(|focus| fixed(focus));
                    check_options(&*eq, &traversal.find(&source, fixed), &expected)
                },
            )
        },
        {
            let traversal = traversal.clone();
            Law::property("traversal: size counts every focus", sources, move |source: S| {
                let (size, listed) = (traversal.size(&source), traversal.get_all(&source).len());
                if size == listed {
                    Ok(())
                } else {
                    Err(TestCaseError::fail(format!("size {size} but {listed} foci")))
                }
            })
        },
    ]
}

/// Laws tying `modify_f` in a caller supplied applicative to `modify`.
///
/// `pure` lifts a focus into the applicative and `pure_source` lifts a
/// source; `modify_f` with `pure` must be `pure_source` of the unchanged
/// source, and `modify_f` with `pure ∘ f` must be `pure_source` of
/// `modify(f)`.
///
/// # Examples
///
/// ```rust
/// use opticus::laws::{LawConfig, check_laws, i32_endomorphism, traversal_modify_f_laws};
/// use opticus::optics::{Each, Traversal};
/// use proptest::prelude::*;
///
/// let each: Traversal<Vec<i32>, i32> = Vec::each();
/// let laws = traversal_modify_f_laws(
///     &each,
///     proptest::collection::vec(any::<i32>(), 0..6),
///     i32_endomorphism(),
///     Ok::<i32, String>,
///     Ok,
/// );
/// check_laws(&laws, &LawConfig::default().with_cases(64)).assert_success();
/// ```
pub fn traversal_modify_f_laws<S, A, FA, GS, GF, P, Q>(
    traversal: &Traversal<S, A>,
    sources: GS,
    functions: GF,
    pure: P,
    pure_source: Q,
) -> Vec<Law>
where
    S: Clone + Debug + 'static,
    A: 'static,
    FA: Applicative + TypeConstructor<Inner = A> + 'static,
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
            let (traversal, pure, pure_source) =
                (traversal.clone(), Rc::clone(&pure), Rc::clone(&pure_source));
            Law::property("traversal: modify_f pure is pure", sources.clone(), move |source: S| {
                let lifted = traversal.modify_f(source.clone(), |a| pure(a));
                check_equivalent(&Structural, &lifted, &pure_source(source))
            })
        },
        {
            let traversal = traversal.clone();
            Law::property(
                "traversal: modify_f pure after f is pure of modify",
                (sources, functions),
                move |(source, f): (S, GeneratedFn<A, A>)| {
                    let lifted = traversal.modify_f(source.clone(), |a| pure(f.call(a)));
                    let expected = pure_source(traversal.modify(source, |a| f.call(a)));
                    check_equivalent(&Structural, &lifted, &expected)
                },
            )
        },
    ]
}
