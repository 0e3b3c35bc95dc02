//! # opticus
//!
//! Composable optics for immutable data, with the type classes they are
//! built on and property-based law suites to check them.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid over a
//!   GAT-encoded `TypeConstructor`
//! - **Control Structures**: `Either`
//! - **Effects**: `State`/`IndexedState`, `Reader` and `MonadError`
//! - **Optics**: Iso, Lens, Prism, Optional, Traversal, Setter, Getter, Fold,
//!   their composition and their State adapters
//! - **Laws**: property-based law suites for every writable optic and for
//!   `MonadError`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Either`
//! - `effect`: `State`, `Reader` and `MonadError`
//! - `optics`: Optics (Lens, Prism, etc.)
//! - `derive`: `#[derive(Lenses, Prisms)]`
//! - `laws`: Law suites on `proptest`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use opticus::prelude::*;
//!
//! let each: Traversal<Vec<i32>, i32> = Vec::each();
//! assert_eq!(each.modify(vec![1, 2, 3], |n| n * 2), vec![2, 4, 6]);
//! assert_eq!(each.fold_map(&vec![1, 2, 3], Sum::new), Sum::new(6));
//! assert_eq!(each.find(&vec![5, 20, 3, 40], |n| *n > 10), Some(20));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use opticus::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "laws")]
pub mod laws;
