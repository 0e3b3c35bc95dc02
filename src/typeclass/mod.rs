//! Type class traits the optics are built on.
//!
//! - [`Functor`]: mapping over a context (enough for `Lens::modify_f`)
//! - [`Applicative`]: combining independent effects (enough for `Traversal::modify_f`)
//! - [`Monad`]: sequencing dependent effects
//! - [`Semigroup`] / [`Monoid`]: accumulation for folds
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types so that a value such as
//! `Option<B>` can name `Option<T>` for any other `T`.
//!
//! ## Built-in effects
//!
//! - [`Identity`]: runs `modify_f` as a plain `modify`
//! - [`Const`]: runs `modify_f` as a fold into a monoid
//! - `Option` and `Result`: partial and fallible visits
//!
//! # Examples
//!
//! ```rust
//! use opticus::typeclass::{Applicative, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::combine_all(vec![Sum::new(1), Sum::new(2)]), Sum::new(3));
//! assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
//! ```

mod applicative;
mod constant;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use constant::Const;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{First, Last, Product, Sum};
