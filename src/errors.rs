//! Two-tier error taxonomy shared by both validators.
//!
//! Tier 1, [`GuardError`]: the caller supplied a value violating a documented
//! precondition. Always attributable to a specific parameter.
//!
//! Tier 2, [`ExpectationError`]: an internal invariant, postcondition, or
//! "should never happen" branch was reached despite the contract being
//! upheld by callers. Signals a defect in the component, not bad input.
//!
//! Checks that can fail in either tier (`expect::contains`,
//! `expect::of_type`) return this combined type; everything else returns its
//! own leaf error. Failures are returned immediately at detection and
//! propagate via `?` — this library never logs, retries, or suppresses.

use thiserror::Error;

use crate::expect::ExpectationError;
use crate::guard::GuardError;

/// Result type for checks that can fail in either tier
pub type CheckResult<T> = Result<T, Error>;

/// Combined error covering both validation tiers
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A caller-supplied argument violated a documented precondition
    #[error(transparent)]
    InvalidArgument(#[from] GuardError),

    /// An internal invariant or postcondition did not hold
    #[error(transparent)]
    Expectation(#[from] ExpectationError),
}

impl Error {
    /// Returns true when the failure is attributable to caller input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Returns true when the failure signals an internal defect
    pub fn is_expectation(&self) -> bool {
        matches!(self, Error::Expectation(_))
    }
}
