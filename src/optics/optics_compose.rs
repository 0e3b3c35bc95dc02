//! Composition of optics of any two kinds.
//!
//! `outer.compose(&inner)` focuses `inner` on the focus of `outer`. The
//! result is the strongest kind both operands can be viewed as:
//!
//! ```text
//!              Iso
//!            /     \
//!        Lens       Prism
//!        |   \     /   |
//!        |   Optional  |
//!        |       |     |
//!     Getter  Traversal|
//!        \     /   \   |
//!         Fold      Setter
//! ```
//!
//! - `Iso` composed with anything keeps the other kind.
//! - `Lens` with `Prism`, either way round, gives an `Optional`.
//! - Anything writable with a `Setter` gives a `Setter`.
//! - `Getter` with `Iso`, `Lens` or `Getter` stays a `Getter`; any partial or
//!   multi-focus read gives a `Fold`.
//! - `Setter` has no read side and does not compose with `Getter` or `Fold`.
//!
//! # Example
//!
//! ```
//! use opticus::optics::{Compose, Lens, Optional, Prism, some_prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Account { nickname: Option<String> }
//!
//! let nickname: Lens<Account, Option<String>> = Lens::new(
//!     |account: &Account| account.nickname.clone(),
//!     |_, nickname| Account { nickname },
//! );
//! let some: Prism<Option<String>, String> = some_prism();
//!
//! let optional: Optional<Account, String> = nickname.compose(&some);
//! let named = Account { nickname: Some("ann".into()) };
//! assert_eq!(optional.get_option(&named), Some("ann".to_string()));
//! assert_eq!(
//!     optional.modify(Account { nickname: None }, |name| name.to_uppercase()),
//!     Account { nickname: None }
//! );
//! ```

use super::fold::Fold;
use super::getter::Getter;
use super::iso::PIso;
use super::lens::PLens;
use super::optional::{Context, POptional};
use super::prism::PPrism;
use super::setter::PSetter;
use super::traversal::{PTraversal, Parts};
use crate::control::Either;

/// Optics that can be focused further by an optic of kind `Other`.
pub trait Compose<Other> {
    /// The meet of the two kinds.
    type Output;

    /// Focuses `other` on this optic's focus.
    fn compose(&self, other: &Other) -> Self::Output;
}

// =============================================================================
// Same kind
// =============================================================================

impl<S, T, A, B, C, D> Compose<PIso<A, B, C, D>> for PIso<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = PIso<S, T, C, D>;

    fn compose(&self, other: &PIso<A, B, C, D>) -> Self::Output {
        let (outer, inner) = (self.clone(), other.clone());
        let (outer_back, inner_back) = (self.clone(), other.clone());
        PIso::new(
            move |source| inner.get(&outer.get(source)),
            move |value| outer_back.reverse_get(inner_back.reverse_get(value)),
        )
    }
}

impl<S, T, A, B, C, D> Compose<PLens<A, B, C, D>> for PLens<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = PLens<S, T, C, D>;

    fn compose(&self, other: &PLens<A, B, C, D>) -> Self::Output {
        let (outer, inner) = (self.clone(), other.clone());
        let (outer_set, inner_set) = (self.clone(), other.clone());
        PLens::new(
            move |source| inner.get(&outer.get(source)),
            move |source, value| {
                let focus = outer_set.get(&source);
                outer_set.set(source, inner_set.set(focus, value))
            },
        )
    }
}

impl<S, T, A, B, C, D> Compose<PPrism<A, B, C, D>> for PPrism<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = PPrism<S, T, C, D>;

    fn compose(&self, other: &PPrism<A, B, C, D>) -> Self::Output {
        let (outer, inner) = (self.clone(), other.clone());
        let (outer_preview, inner_preview) = (self.clone(), other.clone());
        let (outer_back, inner_back) = (self.clone(), other.clone());
        PPrism::from_parts(
            move |source| match outer.get_or_modify(source) {
                Either::Left(unmatched) => Either::Left(unmatched),
                Either::Right(focus) => inner
                    .get_or_modify(focus)
                    .map_left(|unmatched| outer.reverse_get(unmatched)),
            },
            move |source| {
                outer_preview
                    .get_option(source)
                    .and_then(|focus| inner_preview.get_option(&focus))
            },
            move |value| outer_back.reverse_get(inner_back.reverse_get(value)),
        )
    }
}

impl<S, T, A, B, C, D> Compose<POptional<A, B, C, D>> for POptional<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = POptional<S, T, C, D>;

    fn compose(&self, other: &POptional<A, B, C, D>) -> Self::Output {
        let (outer, inner) = (self.clone(), other.clone());
        let (outer_preview, inner_preview) = (self.clone(), other.clone());
        POptional::from_focus(
            move |source| match outer.focus(source) {
                Either::Left(unmatched) => Either::Left(unmatched),
                Either::Right(context) => {
                    let (focus, rebuild_outer) = context.into_parts();
                    match inner.focus(focus) {
                        Either::Left(unmatched) => Either::Left(rebuild_outer(unmatched)),
                        Either::Right(context) => {
                            let (focus, rebuild_inner) = context.into_parts();
                            Either::Right(Context::new(focus, move |value| {
                                rebuild_outer(rebuild_inner(value))
                            }))
                        }
                    }
                }
            },
            move |source| {
                outer_preview
                    .get_option(source)
                    .and_then(|focus| inner_preview.get_option(&focus))
            },
        )
    }
}

impl<S, T, A, B, C, D> Compose<PTraversal<A, B, C, D>> for PTraversal<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = PTraversal<S, T, C, D>;

    fn compose(&self, other: &PTraversal<A, B, C, D>) -> Self::Output {
        let (outer, inner) = (self.clone(), other.clone());
        let (outer_view, inner_view) = (self.clone(), other.clone());
        PTraversal::new(
            move |source| {
                outer_view
                    .get_all(source)
                    .iter()
                    .flat_map(|focus| inner_view.get_all(focus))
                    .collect()
            },
            move |source| {
                let (outer_foci, rebuild_outer) = outer.parts(source).into_parts();
                let mut foci = Vec::new();
                let mut rebuilds = Vec::with_capacity(outer_foci.len());
                for focus in outer_foci {
                    let (inner_foci, rebuild_inner) = inner.parts(focus).into_parts();
                    rebuilds.push((inner_foci.len(), rebuild_inner));
                    foci.extend(inner_foci);
                }
                Parts::new(foci, move |replacements: Vec<D>| {
                    let mut replacements = replacements.into_iter();
                    let rebuilt = rebuilds
                        .into_iter()
                        .map(|(count, rebuild_inner)| {
                            rebuild_inner(replacements.by_ref().take(count).collect())
                        })
                        .collect();
                    rebuild_outer(rebuilt)
                })
            },
        )
    }
}

impl<S, T, A, B, C, D> Compose<PSetter<A, B, C, D>> for PSetter<S, T, A, B>
where
    S: 'static,
    T: 'static,
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    type Output = PSetter<S, T, C, D>;

    fn compose(&self, other: &PSetter<A, B, C, D>) -> Self::Output {
        let (outer, inner) = (self.clone(), other.clone());
        PSetter::new(move |source, function| {
            outer.modify(source, |focus| inner.modify(focus, &mut *function))
        })
    }
}

impl<S, A, C> Compose<Getter<A, C>> for Getter<S, A>
where
    S: 'static,
    A: 'static,
    C: 'static,
{
    type Output = Getter<S, C>;

    fn compose(&self, other: &Getter<A, C>) -> Self::Output {
        let (outer, inner) = (self.clone(), other.clone());
        Getter::new(move |source| inner.get(&outer.get(source)))
    }
}

impl<S, A, C> Compose<Fold<A, C>> for Fold<S, A>
where
    S: 'static,
    A: 'static,
    C: 'static,
{
    type Output = Fold<S, C>;

    fn compose(&self, other: &Fold<A, C>) -> Self::Output {
        let (outer, inner) = (self.clone(), other.clone());
        Fold::new(move |source| {
            outer
                .get_all(source)
                .iter()
                .flat_map(|focus| inner.get_all(focus))
                .collect()
        })
    }
}

// =============================================================================
// Mixed kinds: view both operands as the meet, then compose
// =============================================================================

macro_rules! compose_writable {
    ($($left:ident . $left_as:ident , $right:ident . $right_as:ident => $output:ident;)*) => {$(
        impl<S, T, A, B, C, D> Compose<$right<A, B, C, D>> for $left<S, T, A, B>
        where
            S: 'static,
            T: 'static,
            A: 'static,
            B: 'static,
            C: 'static,
            D: 'static,
        {
            type Output = $output<S, T, C, D>;

            fn compose(&self, other: &$right<A, B, C, D>) -> Self::Output {
                self.$left_as().compose(&other.$right_as())
            }
        }
    )*};
}

macro_rules! compose_with_read {
    ($($left:ident . $left_as:ident , $right:ident . $right_as:ident => $output:ident;)*) => {$(
        impl<S, T, A, B, C> Compose<$right<A, C>> for $left<S, T, A, B>
        where
            S: 'static,
            T: 'static,
            A: 'static,
            B: 'static,
            C: 'static,
        {
            type Output = $output<S, C>;

            fn compose(&self, other: &$right<A, C>) -> Self::Output {
                self.$left_as().compose(&other.$right_as())
            }
        }
    )*};
}

macro_rules! compose_read_with {
    ($($left:ident . $left_as:ident , $right:ident . $right_as:ident => $output:ident;)*) => {$(
        impl<S, A, B, C, D> Compose<$right<A, B, C, D>> for $left<S, A>
        where
            S: 'static,
            A: 'static,
            B: 'static,
            C: 'static,
            D: 'static,
        {
            type Output = $output<S, C>;

            fn compose(&self, other: &$right<A, B, C, D>) -> Self::Output {
                self.$left_as().compose(&other.$right_as())
            }
        }
    )*};
}

macro_rules! compose_read {
    ($($left:ident . $left_as:ident , $right:ident . $right_as:ident => $output:ident;)*) => {$(
        impl<S, A, C> Compose<$right<A, C>> for $left<S, A>
        where
            S: 'static,
            A: 'static,
            C: 'static,
        {
            type Output = $output<S, C>;

            fn compose(&self, other: &$right<A, C>) -> Self::Output {
                self.$left_as().compose(&other.$right_as())
            }
        }
    )*};
}

compose_writable! {
    PIso.as_lens, PLens.clone => PLens;
    PIso.as_prism, PPrism.clone => PPrism;
    PIso.as_optional, POptional.clone => POptional;
    PIso.as_traversal, PTraversal.clone => PTraversal;
    PIso.as_setter, PSetter.clone => PSetter;

    PLens.clone, PIso.as_lens => PLens;
    PLens.as_optional, PPrism.as_optional => POptional;
    PLens.as_optional, POptional.clone => POptional;
    PLens.as_traversal, PTraversal.clone => PTraversal;
    PLens.as_setter, PSetter.clone => PSetter;

    PPrism.clone, PIso.as_prism => PPrism;
    PPrism.as_optional, PLens.as_optional => POptional;
    PPrism.as_optional, POptional.clone => POptional;
    PPrism.as_traversal, PTraversal.clone => PTraversal;
    PPrism.as_setter, PSetter.clone => PSetter;

    POptional.clone, PIso.as_optional => POptional;
    POptional.clone, PLens.as_optional => POptional;
    POptional.clone, PPrism.as_optional => POptional;
    POptional.as_traversal, PTraversal.clone => PTraversal;
    POptional.as_setter, PSetter.clone => PSetter;

    PTraversal.clone, PIso.as_traversal => PTraversal;
    PTraversal.clone, PLens.as_traversal => PTraversal;
    PTraversal.clone, PPrism.as_traversal => PTraversal;
    PTraversal.clone, POptional.as_traversal => PTraversal;
    PTraversal.as_setter, PSetter.clone => PSetter;

    PSetter.clone, PIso.as_setter => PSetter;
    PSetter.clone, PLens.as_setter => PSetter;
    PSetter.clone, PPrism.as_setter => PSetter;
    PSetter.clone, POptional.as_setter => PSetter;
    PSetter.clone, PTraversal.as_setter => PSetter;
}

compose_with_read! {
    PIso.as_getter, Getter.clone => Getter;
    PLens.as_getter, Getter.clone => Getter;
    PPrism.as_fold, Getter.as_fold => Fold;
    POptional.as_fold, Getter.as_fold => Fold;
    PTraversal.as_fold, Getter.as_fold => Fold;

    PIso.as_fold, Fold.clone => Fold;
    PLens.as_fold, Fold.clone => Fold;
    PPrism.as_fold, Fold.clone => Fold;
    POptional.as_fold, Fold.clone => Fold;
    PTraversal.as_fold, Fold.clone => Fold;
}

compose_read_with! {
    Getter.clone, PIso.as_getter => Getter;
    Getter.clone, PLens.as_getter => Getter;
    Getter.as_fold, PPrism.as_fold => Fold;
    Getter.as_fold, POptional.as_fold => Fold;
    Getter.as_fold, PTraversal.as_fold => Fold;

    Fold.clone, PIso.as_fold => Fold;
    Fold.clone, PLens.as_fold => Fold;
    Fold.clone, PPrism.as_fold => Fold;
    Fold.clone, POptional.as_fold => Fold;
    Fold.clone, PTraversal.as_fold => Fold;
}

compose_read! {
    Getter.as_fold, Fold.clone => Fold;
    Fold.clone, Getter.as_fold => Fold;
}
