//! Run configuration for law checks.

use std::env;

use proptest::test_runner::{Config, TestRng, TestRunner};
use thiserror::Error;

/// Environment variable overriding the number of cases per law.
pub const CASES_VARIABLE: &str = "OPTICUS_LAW_CASES";

/// Number of generated cases per law when nothing overrides it.
pub const DEFAULT_CASES: u32 = 256;

const DEFAULT_MAX_SHRINK_ITERS: u32 = 1024;

/// Errors raised while reading a [`LawConfig`] from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The case count was not a positive integer.
    #[error("{variable} must be a positive integer, got {value:?}")]
    InvalidCases {
        /// The variable that was read.
        variable: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// How each law is exercised.
///
/// # Examples
///
/// ```rust
/// use opticus::laws::LawConfig;
///
/// let config = LawConfig::default().with_cases(32);
/// assert_eq!(config.cases, 32);
/// assert!(config.deterministic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LawConfig {
    /// Generated cases per law.
    pub cases: u32,
    /// Upper bound on shrinking steps after a failure.
    pub max_shrink_iters: u32,
    /// Seeds every law's runner identically, so reruns see the same inputs.
    pub deterministic: bool,
}

impl Default for LawConfig {
    fn default() -> Self {
        Self {
            cases: DEFAULT_CASES,
            max_shrink_iters: DEFAULT_MAX_SHRINK_ITERS,
            deterministic: true,
        }
    }
}

impl LawConfig {
    /// Returns this configuration with a different case count.
    #[must_use]
    pub const fn with_cases(self, cases: u32) -> Self {
        Self { cases, ..self }
    }

    /// Returns this configuration with fresh randomness for every run.
    #[must_use]
    pub const fn randomized(self) -> Self {
        Self {
            deterministic: false,
            ..self
        }
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OPTICUS_LAW_CASES`: cases per law (positive integer)
    ///
    /// Missing variables use default values.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|variable| env::var(variable).ok())
    }

    /// Creates a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let cases = match lookup(CASES_VARIABLE) {
            Some(value) => parse_cases(&value)?,
            None => defaults.cases,
        };
        Ok(defaults.with_cases(cases))
    }

    pub(crate) fn runner(&self) -> TestRunner {
        let config = Config {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            failure_persistence: None,
            ..Config::default()
        };
        if self.deterministic {
            let rng = TestRng::deterministic_rng(config.rng_algorithm);
            TestRunner::new_with_rng(config, rng)
        } else {
            TestRunner::new(config)
        }
    }
}

fn parse_cases(value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|cases| *cases > 0)
        .ok_or_else(|| ConfigError::InvalidCases {
            variable: CASES_VARIABLE,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_variable_uses_defaults() {
        let config = LawConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, LawConfig::default());
    }

    #[rstest]
    #[case(" 64 ", 64)]
    #[case("1", 1)]
    fn valid_case_counts(#[case] raw: &str, #[case] expected: u32) {
        let config = LawConfig::from_lookup(|_| Some(raw.to_string())).unwrap();
        assert_eq!(config.cases, expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("many")]
    fn invalid_case_counts(#[case] raw: &str) {
        let error = LawConfig::from_lookup(|_| Some(raw.to_string())).unwrap_err();
        assert_eq!(
            error,
            ConfigError::InvalidCases {
                variable: CASES_VARIABLE,
                value: raw.to_string(),
            }
        );
        assert!(error.to_string().starts_with(CASES_VARIABLE));
    }

    #[rstest]
    fn runner_uses_configured_cases() {
        let runner = LawConfig::default().with_cases(7).runner();
        assert_eq!(runner.config().cases, 7);
        assert!(runner.config().failure_persistence.is_none());
    }
}
