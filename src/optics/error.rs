//! Errors raised by optic lookups.

use thiserror::Error;

/// Failure of an indexed optic lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpticsError {
    /// The requested focus position does not exist.
    #[error("index {index} is out of bounds for {length} foci")]
    IndexOutOfBounds {
        /// Requested position.
        index: usize,
        /// Number of foci that were available.
        length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_names_index_and_length() {
        let error = OpticsError::IndexOutOfBounds { index: 4, length: 2 };
        assert_eq!(error.to_string(), "index 4 is out of bounds for 2 foci");
    }
}
