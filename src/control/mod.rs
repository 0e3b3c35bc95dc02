//! Control structures shared by the optics.
//!
//! - [`Either`]: the result of a partial match (`Left` = miss, `Right` = focus)

mod either;

pub use either::Either;
