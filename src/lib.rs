//! stricture - precondition and expectation checks with structured diagnostics
//!
//! Two validator families, both stateless collections of pure functions:
//!
//! - [`guard`] checks preconditions on caller-supplied arguments and fails
//!   with [`GuardError`], naming the parameter, the offending value, and the
//!   violated rule.
//! - [`expect`] checks runtime invariants and postconditions not derived from
//!   caller input and fails with [`ExpectationError`], carrying a structured
//!   expected/actual/context message.
//!
//! The distinction is deliberate: a `GuardError` means the caller broke the
//! contract, an `ExpectationError` means the component itself did. Checks
//! that can fail either way return the combined [`Error`].
//!
//! [`testkit`] holds test-harness scaffolding (random fixture data, a
//! logging-to-test-output adapter); the validators never depend on it.

pub mod errors;
pub mod expect;
pub mod guard;
pub mod testkit;

pub use errors::{CheckResult, Error};
pub use expect::{ExpectResult, ExpectationError};
pub use guard::{GuardError, GuardResult};
