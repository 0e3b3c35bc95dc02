//! Named laws, their outcomes and the report of a whole suite.

use std::fmt;

use proptest::strategy::Strategy;
use proptest::test_runner::{TestCaseError, TestError};
use thiserror::Error;

use super::config::LawConfig;

type Check = dyn Fn(&LawConfig) -> Result<(), LawViolation>;

/// A failed law.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawViolation {
    /// Some generated input falsified the law.
    #[error("law `{law}` falsified by {counterexample}: {reason}")]
    Falsified {
        /// Name of the law.
        law: String,
        /// The minimal failing input, as printed by `Debug`.
        counterexample: String,
        /// Why the input failed.
        reason: String,
    },
    /// The run stopped before it could decide, e.g. too many rejected inputs.
    #[error("law `{law}` aborted: {reason}")]
    Aborted {
        /// Name of the law.
        law: String,
        /// Why the run stopped.
        reason: String,
    },
}

impl LawViolation {
    /// Returns the name of the violated law.
    pub fn law(&self) -> &str {
        match self {
            Self::Falsified { law, .. } | Self::Aborted { law, .. } => law,
        }
    }

    fn from_test_error<T: fmt::Debug>(law: &str, error: TestError<T>) -> Self {
        match error {
            TestError::Fail(reason, value) => Self::Falsified {
                law: law.to_string(),
                counterexample: format!("{value:?}"),
                reason: reason.message().to_string(),
            },
            TestError::Abort(reason) => Self::Aborted {
                law: law.to_string(),
                reason: reason.message().to_string(),
            },
        }
    }
}

/// A named, independently checked law.
pub struct Law {
    name: String,
    check: Box<Check>,
}

impl Law {
    /// Creates a law from an arbitrary check.
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&LawConfig) -> Result<(), LawViolation> + 'static,
    {
        Self {
            name: name.into(),
            check: Box::new(check),
        }
    }

    /// Creates a law that must hold for every value `strategy` generates.
    ///
    /// Failing inputs are shrunk before they are reported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use opticus::laws::{Law, LawConfig};
    /// use proptest::prelude::*;
    ///
    /// let law = Law::property("abs is non-negative", -1000_i32..1000, |n| {
    ///     prop_assert!(n.abs() >= 0);
    ///     Ok(())
    /// });
    /// assert!(law.check(&LawConfig::default()).is_ok());
    /// ```
    pub fn property<G, F>(name: impl Into<String>, strategy: G, test: F) -> Self
    where
        G: Strategy + 'static,
        F: Fn(G::Value) -> Result<(), TestCaseError> + 'static,
    {
        let name = name.into();
        let law = name.clone();
        Self::new(name, move |config| {
            config
                .runner()
                .run(&strategy, &test)
                .map_err(|error| LawViolation::from_test_error(&law, error))
        })
    }

    /// Returns the name of the law.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the law.
    ///
    /// # Errors
    ///
    /// Returns the violation if the law does not hold.
    pub fn check(&self, config: &LawConfig) -> Result<(), LawViolation> {
        (self.check)(config)
    }
}

impl fmt::Debug for Law {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Law")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The outcome of one law.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawOutcome {
    /// Name of the law.
    pub name: String,
    /// `Ok` when the law held.
    pub result: Result<(), LawViolation>,
}

impl LawOutcome {
    /// Returns `true` if the law held.
    pub const fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of every law in a suite, in suite order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LawReport {
    outcomes: Vec<LawOutcome>,
}

impl LawReport {
    /// Returns every outcome.
    pub fn outcomes(&self) -> &[LawOutcome] {
        &self.outcomes
    }

    /// Returns `true` if every law held.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(LawOutcome::passed)
    }

    /// Returns the names of the laws that held.
    pub fn passed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.passed())
            .map(|outcome| outcome.name.as_str())
            .collect()
    }

    /// Returns every violation.
    pub fn violations(&self) -> Vec<&LawViolation> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err())
            .collect()
    }

    /// Turns the report into its violations.
    ///
    /// # Errors
    ///
    /// Returns every violation if at least one law failed.
    pub fn into_result(self) -> Result<(), Vec<LawViolation>> {
        let violations: Vec<LawViolation> = self
            .outcomes
            .into_iter()
            .filter_map(|outcome| outcome.result.err())
            .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Panics with the whole report if any law failed.
    ///
    /// # Panics
    ///
    /// Panics if at least one law failed.
    #[track_caller]
    pub fn assert_success(&self) {
        assert!(self.is_success(), "{self}");
    }
}

impl fmt::Display for LawReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.outcomes.len() - self.passed().len();
        writeln!(formatter, "{} laws, {failed} failed", self.outcomes.len())?;
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => writeln!(formatter, "  ok    {}", outcome.name)?,
                Err(violation) => writeln!(formatter, "  FAIL  {violation}")?,
            }
        }
        Ok(())
    }
}

/// Checks every law, continuing past failures.
///
/// # Examples
///
/// ```rust
/// use opticus::laws::{Law, LawConfig, check_laws};
///
/// let laws = vec![
///     Law::property("holds", 0_u8..10, |_| Ok(())),
///     Law::property("fails", 0_u8..10, |n| {
///         proptest::prop_assert!(n < 5);
///         Ok(())
///     }),
/// ];
/// let report = check_laws(&laws, &LawConfig::default());
/// assert_eq!(report.passed(), vec!["holds"]);
/// assert_eq!(report.violations()[0].law(), "fails");
/// ```
pub fn check_laws(laws: &[Law], config: &LawConfig) -> LawReport {
    let outcomes = laws
        .iter()
        .map(|law| {
            tracing::debug!(law = law.name(), cases = config.cases, "checking law");
            let result = law.check(config);
            if let Err(violation) = &result {
                tracing::warn!(%violation, "law violated");
            }
            LawOutcome {
                name: law.name().to_string(),
                result,
            }
        })
        .collect();
    LawReport { outcomes }
}
