//! Derive macros for opticus optics.
//!
//! - [`Lenses`]: one `Lens` per named struct field
//! - [`Prisms`]: one `Prism` per enum variant
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use opticus::optics::{Compose, Lens, Lenses};
//!
//! #[derive(Clone, Lenses)]
//! struct Address { city: String }
//!
//! #[derive(Clone, Lenses)]
//! struct Person { name: String, address: Address }
//!
//! // Generated:
//! // - Person::name_lens() -> Lens<Person, String>
//! // - Person::address_lens() -> Lens<Person, Address>
//! // - Address::city_lens() -> Lens<Address, String>
//!
//! let city = Person::address_lens().compose(&Address::city_lens());
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use opticus::optics::{Prism, Prisms};
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//!     Empty,
//! }
//!
//! // Generated:
//! // - Shape::circle_prism() -> Prism<Shape, f64>
//! // - Shape::rectangle_prism() -> Prism<Shape, (f64, f64)>
//! // - Shape::empty_prism() -> Prism<Shape, ()>
//!
//! assert_eq!(Shape::circle_prism().get_option(&Shape::Circle(5.0)), Some(5.0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derives `<field>_lens()` associated functions for every named field.
///
/// Fields must be `Clone + 'static`.
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derives `<variant>_prism()` associated functions for every variant.
///
/// Variant names are converted to `snake_case`. Fields must be
/// `Clone + 'static`.
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
