//! Property-based law suites.
//!
//! Every writable optic kind comes with a suite of named laws. A suite is a
//! `Vec<Law>` built from [`proptest`] strategies for sources, foci and
//! functions; [`check_laws`] runs every law on its own runner, keeps going
//! past failures, and returns a [`LawReport`] with the shrunk
//! counter-example of each violation.
//!
//! | suite                        | laws |
//! |------------------------------|------|
//! | [`iso_laws`]                 | 6    |
//! | [`lens_laws`]                | 8    |
//! | [`prism_laws`]               | 7    |
//! | [`optional_laws`]            | 8    |
//! | [`traversal_laws`]           | 10   |
//! | [`setter_laws`]              | 4    |
//! | [`monad_error_laws`]         | 9    |
//! | [`lens_modify_f_laws`]       | 2    |
//! | [`traversal_modify_f_laws`]  | 2    |
//!
//! The `*_with` variants compare results with caller supplied
//! [`Equivalence`]s instead of `PartialEq`.
//!
//! Each check emits a `tracing` debug event; violations are logged at warn.
//!
//! # Examples
//!
//! ```rust
//! use opticus::laws::{LawConfig, check_laws, constant_function, i32_endomorphism, lens_laws, traversal_laws};
//! use opticus::optics::{Compose, Each, Lens, Traversal};
//! use proptest::prelude::*;
//!
//! let items: Lens<(Vec<i32>, u8), Vec<i32>> = Lens::new(
//!     |pair: &(Vec<i32>, u8)| pair.0.clone(),
//!     |pair: (Vec<i32>, u8), items| (items, pair.1),
//! );
//! let each: Traversal<Vec<i32>, i32> = Vec::each();
//!
//! let vectors = proptest::collection::vec(any::<i32>(), 0..4);
//! let pairs = (vectors.clone(), any::<u8>());
//! let mut laws = lens_laws(&items, pairs.clone(), vectors.clone(), constant_function(vectors));
//! laws.extend(traversal_laws(&items.compose(&each), pairs, any::<i32>(), i32_endomorphism()));
//!
//! let config = LawConfig::from_env().unwrap_or_default().with_cases(32);
//! let report = check_laws(&laws, &config);
//! assert!(report.is_success(), "{report}");
//! ```

mod config;
mod equivalence;
mod generators;
mod iso;
mod law;
mod lens;
mod monad_error;
mod optional;
mod prism;
mod setter;
mod traversal;

pub use config::{CASES_VARIABLE, ConfigError, DEFAULT_CASES, LawConfig};
pub use equivalence::{Equivalence, EquivalenceFn, Structural, equivalence_fn};
pub use generators::{GeneratedFn, constant_function, i32_endomorphism, string_endomorphism};
pub use iso::{iso_laws, iso_laws_with};
pub use law::{Law, LawOutcome, LawReport, LawViolation, check_laws};
pub use lens::{lens_laws, lens_laws_with, lens_modify_f_laws};
pub use monad_error::monad_error_laws;
pub use optional::{optional_laws, optional_laws_with};
pub use prism::{prism_laws, prism_laws_with};
pub use setter::{setter_laws, setter_laws_with};
pub use traversal::{traversal_laws, traversal_laws_with, traversal_modify_f_laws};
