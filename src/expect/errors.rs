//! Error type for runtime expectation failures.

use std::fmt;

/// Result type for expectation checks
pub type ExpectResult<T> = Result<T, ExpectationError>;

/// An internal invariant or postcondition did not hold.
///
/// Unlike [`GuardError`](crate::guard::GuardError), this is not attributable
/// to caller input: it signals a defect in the component itself or a violated
/// internal contract. The message has a fixed shape:
///
/// ```text
/// Expected: {expected}
/// Actual: {actual}
/// {each context line, verbatim, in order}
/// ```
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectationError {
    expected: String,
    actual: String,
    context: Vec<String>,
}

impl ExpectationError {
    /// Creates an error stating what should have held and what was observed.
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        debug_assert!(!expected.is_empty());
        debug_assert!(!actual.is_empty());
        Self { expected, actual, context: Vec::new() }
    }

    /// Appends one free-form context line (a failing key, compared values).
    pub fn with_context(mut self, line: impl Into<String>) -> Self {
        self.context.push(line.into());
        self
    }

    /// Returns the condition that should have held
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Returns what was observed instead
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// Returns the context lines, in insertion order
    pub fn context(&self) -> &[String] {
        &self.context
    }
}

impl fmt::Display for ExpectationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected: {}", self.expected)?;
        write!(f, "\nActual: {}", self.actual)?;
        for line in &self.context {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExpectationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_line_form_without_context() {
        let err = ExpectationError::new("cache warm", "cache cold");
        assert_eq!(err.to_string(), "Expected: cache warm\nActual: cache cold");
    }

    #[test]
    fn test_context_lines_render_verbatim_in_order() {
        let err = ExpectationError::new("lookup succeeds", "lookup failed")
            .with_context("key: \"user_42\"")
            .with_context("store: sessions");
        assert_eq!(
            err.to_string(),
            "Expected: lookup succeeds\nActual: lookup failed\nkey: \"user_42\"\nstore: sessions"
        );
    }

    #[test]
    fn test_structured_fields() {
        let err = ExpectationError::new("a", "b").with_context("c");
        assert_eq!(err.expected(), "a");
        assert_eq!(err.actual(), "b");
        assert_eq!(err.context(), ["c".to_string()]);
    }
}
