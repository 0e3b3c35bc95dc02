//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! Optics need exactly that: `modify_f` must work for any applicative effect
//! chosen by the caller. A value type like `Option<B>` therefore describes
//! its own constructor: `Inner` names the type it is applied to and
//! `WithType<C>` re-applies the same constructor to another type.
//!
//! # Example
//!
//! ```rust
//! use opticus::typeclass::TypeConstructor;
//!
//! fn reapply<T: TypeConstructor>(_: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = reapply(Some(1));
//! assert_eq!(none, None);
//! ```

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same_constructor<T: TypeConstructor>(_: &T) -> Option<T::WithType<bool>>
    where
        T::WithType<bool>: Default,
    {
        Some(Default::default())
    }

    #[test]
    fn option_reapplies_option() {
        let value: Option<Option<bool>> = same_constructor(&Some(3));
        assert_eq!(value, Some(None));
    }

    #[test]
    fn result_keeps_error_type() {
        fn with_error<E>(_: Result<i32, E>) -> Result<String, E> {
            Ok(String::from("kept"))
        }
        let reapplied: <Result<i32, u8> as TypeConstructor>::WithType<String> =
            with_error(Ok::<i32, u8>(1));
        assert_eq!(reapplied, Ok(String::from("kept")));
    }
}
