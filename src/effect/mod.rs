//! Effects used around optics.
//!
//! - [`IndexedState`] / [`State`]: thread a source through optic reads and
//!   writes (see the `to_state`, `modify_state`, `set_state` adapters on each
//!   optic)
//! - [`MonadError`]: raising and recovering from errors in `Option`/`Result`
//! - [`Reader`]: read-only access to a source (see `to_reader`, `ask`,
//!   `asks` on getters, lenses and isos)

mod monad_error;
mod reader;
mod state;

pub use monad_error::MonadError;
pub use reader::Reader;
pub use state::{IndexedState, State};
