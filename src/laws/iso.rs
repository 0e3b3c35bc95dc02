//! Iso laws.

use std::fmt::Debug;
use std::rc::Rc;

use proptest::strategy::Strategy;

use super::equivalence::{Equivalence, Structural, check_equivalent};
use super::generators::GeneratedFn;
use super::law::Law;
use crate::optics::Iso;
use crate::typeclass::Identity;

/// Iso laws under structural equality.
///
/// # Examples
///
/// ```rust
/// use opticus::laws::{LawConfig, check_laws, i32_endomorphism, iso_laws};
/// use opticus::optics::Iso;
/// use proptest::prelude::*;
///
/// let negate: Iso<i32, i32> = Iso::new(|n: &i32| n.wrapping_neg(), i32::wrapping_neg);
/// let laws = iso_laws(&negate, any::<i32>(), any::<i32>(), i32_endomorphism());
/// check_laws(&laws, &LawConfig::default().with_cases(64)).assert_success();
/// ```
pub fn iso_laws<S, A, GS, GA, GF>(iso: &Iso<S, A>, sources: GS, foci: GA, functions: GF) -> Vec<Law>
where
    S: Clone + PartialEq + Debug + 'static,
    A: Clone + PartialEq + Debug + 'static,
    GS: Strategy<Value = S> + Clone + 'static,
    GA: Strategy<Value = A> + Clone + 'static,
    GF: Strategy<Value = GeneratedFn<A, A>> + Clone + 'static,
{
    iso_laws_with(iso, sources, foci, functions, Structural, Structural)
}

/// Iso laws under caller supplied equivalences for sources and foci.
pub fn iso_laws_with<S, A, GS, GA, GF, ES, EA>(
    iso: &Iso<S, A>,
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
            let (iso, eq) = (iso.clone(), Rc::clone(&source_eq));
            Law::property("iso: round trip one way", sources.clone(), move |source: S| {
                check_equivalent(&*eq, &iso.reverse_get(iso.get(&source)), &source)
            })
        },
        {
            let (iso, eq) = (iso.clone(), focus_eq);
            Law::property("iso: round trip other way", foci.clone(), move |focus: A| {
                check_equivalent(&*eq, &iso.get(&iso.reverse_get(focus.clone())), &focus)
            })
        },
        {
            let (iso, eq) = (iso.clone(), Rc::clone(&source_eq));
            Law::property("iso: modify identity", sources.clone(), move |source: S| {
                check_equivalent(&*eq, &iso.modify(source.clone(), |focus| focus), &source)
            })
        },
        {
            let (iso, eq) = (iso.clone(), Rc::clone(&source_eq));
            Law::property(
                "iso: compose modify",
                (sources.clone(), functions.clone(), functions.clone()),
                move |(source, f, g): (S, GeneratedFn<A, A>, GeneratedFn<A, A>)| {
                    let stepwise = iso.modify(iso.modify(source.clone(), |a| f.call(a)), |a| g.call(a));
                    let composed = f.then(&g);
                    check_equivalent(&*eq, &stepwise, &iso.modify(source, |a| composed.call(a)))
                },
            )
        },
        {
            let (iso, eq) = (iso.clone(), Rc::clone(&source_eq));
            Law::property(
                "iso: consistent set with modify",
                (sources.clone(), foci),
                move |(source, focus): (S, A)| {
                    let modified = iso.modify(source.clone(), |_| focus.clone());
                    check_equivalent(&*eq, &modified, &iso.set(source, focus))
                },
            )
        },
        {
            let (iso, eq) = (iso.clone(), source_eq);
            Law::property(
                "iso: consistent modify with modify_f Identity",
                (sources, functions),
                move |(source, f): (S, GeneratedFn<A, A>)| {
                    let effectful = iso.modify_f(source.clone(), |a| Identity(f.call(a)));
                    check_equivalent(&*eq, &effectful.into_inner(), &iso.modify(source, |a| f.call(a)))
                },
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laws::{LawConfig, check_laws, string_endomorphism};
    use proptest::prelude::*;
    use rstest::rstest;

    fn chars() -> Iso<String, Vec<char>> {
        Iso::new(|text: &String| text.chars().collect(), |chars: Vec<char>| chars.into_iter().collect())
    }

    fn char_functions() -> impl Strategy<Value = GeneratedFn<Vec<char>, Vec<char>>> + Clone {
        string_endomorphism().prop_map(|f| {
            let description = format!("as string {f:?}");
            GeneratedFn::new(description, move |chars: Vec<char>| {
                f.call(chars.into_iter().collect()).chars().collect()
            })
        })
    }

    #[rstest]
    fn string_chars_iso_is_lawful() {
        let laws = iso_laws(
            &chars(),
            "[a-z ]{0,12}",
            proptest::collection::vec(proptest::char::range('a', 'z'), 0..12),
            char_functions(),
        );
        assert_eq!(laws.len(), 6);
        check_laws(&laws, &LawConfig::default().with_cases(64)).assert_success();
    }

    #[rstest]
    fn lossy_conversion_breaks_a_round_trip() {
        let truncating: Iso<i64, i32> = Iso::new(|n: &i64| *n as i32, i64::from);
        let laws = iso_laws(
            &truncating,
            any::<i64>(),
            any::<i32>(),
            crate::laws::i32_endomorphism(),
        );
        let report = check_laws(&laws, &LawConfig::default().with_cases(64));
        let failed: Vec<&str> = report.violations().iter().map(|violation| violation.law()).collect();
        assert_eq!(failed, vec!["iso: round trip one way", "iso: modify identity"]);
    }
}
