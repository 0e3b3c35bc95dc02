//! Optics for reading and rebuilding immutable data.
//!
//! An optic is a first-class path into a structure: it knows how to find one
//! or more foci inside a source and how to build a new source around
//! replacements for them. Optics are plain values holding `Rc` closures, so
//! they are cheap to clone and compose.
//!
//! # Kinds
//!
//! | optic       | foci  | reads | writes | built from                         |
//! |-------------|-------|-------|--------|------------------------------------|
//! | [`Iso`]     | 1     | yes   | yes    | `get`, `reverse_get`               |
//! | [`Lens`]    | 1     | yes   | yes    | `get`, `set`                       |
//! | [`Prism`]   | 0..1  | yes   | yes    | `get_or_modify`, `reverse_get`     |
//! | [`Optional`]| 0..1  | yes   | yes    | `get_option`, `set`                |
//! | [`Traversal`]| 0..n | yes   | yes    | foci plus a rebuild                |
//! | [`Setter`]  | 0..n  | no    | yes    | `modify`                           |
//! | [`Getter`]  | 1     | yes   | no     | `get`                              |
//! | [`Fold`]    | 0..n  | yes   | no     | `get_all`                          |
//!
//! Each writable kind `X<S, A>` is an alias for `PX<S, S, A, A>`; the
//! four-parameter form lets a write change the focus type `A` to `B` and the
//! source type `S` to `T`.
//!
//! Stronger kinds convert to weaker ones with `as_lens`, `as_prism`,
//! `as_optional`, `as_traversal`, `as_setter`, `as_getter` and `as_fold`.
//! [`Compose`] chains any two kinds into their common weaker kind.
//!
//! # Example
//!
//! ```
//! use opticus::optics::{Compose, Lens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let address: Lens<Person, Address> = Lens::new(
//!     |person: &Person| person.address.clone(),
//!     |person, address| Person { address, ..person },
//! );
//! let city: Lens<Address, String> = Lens::new(
//!     |address: &Address| address.city.clone(),
//!     |address, city| Address { city, ..address },
//! );
//!
//! let person_city = address.compose(&city);
//! let person = Person {
//!     name: "Ann".into(),
//!     address: Address { street: "Main St".into(), city: "Tokyo".into() },
//! };
//!
//! let moved = person_city.set(person, "Paris".into());
//! assert_eq!(moved.address.city, "Paris");
//! assert_eq!(moved.address.street, "Main St");
//! assert_eq!(moved.name, "Ann");
//! ```

mod each;
mod error;
mod filtered;
mod fold;
mod getter;
mod iso;
mod lens;
mod optics_compose;
mod optional;
mod prism;
mod reader_optics;
mod setter;
mod standard_optics;
mod state_optics;
mod traversal;

pub mod at;
pub mod index;

pub use at::{At, at};
pub use each::{Each, each, vec_each};
pub use error::OpticsError;
pub use filtered::{filter_index, filtered};
pub use fold::Fold;
pub use getter::Getter;
pub use index::{Ixed, get_index, index};
pub use iso::{Iso, PIso};
pub use lens::{Lens, PLens};
pub use optics_compose::Compose;
pub use optional::{Context, Optional, POptional};
pub use prism::{PPrism, Prism};
pub use setter::{PSetter, Setter};
pub use standard_optics::{
    either_result, err_prism, iso_swap, left_prism, none_prism, ok_prism, right_prism, some_prism,
};
pub use traversal::{PTraversal, Parts, Traversal};

#[cfg(feature = "derive")]
pub use opticus_derive::{Lenses, Prisms};
