//! Error type for argument precondition failures.

use std::fmt;

use thiserror::Error;

/// Result type for argument checks
pub type GuardResult<T> = Result<T, GuardError>;

/// A caller-supplied argument violated a documented precondition.
///
/// Carries the parameter name (captured from the call-site expression by the
/// `guard_*!` macros, or supplied explicitly), a rendering of the offending
/// value, and the violated rule. Constructed then returned; never mutated or
/// reused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid argument '{param}': {reason} (value: {value})")]
pub struct GuardError {
    param: String,
    value: String,
    reason: String,
}

impl GuardError {
    /// Creates an error for `param` holding `value`, violating `reason`.
    pub fn new(
        param: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let reason = reason.into();
        debug_assert!(!reason.is_empty());
        Self { param: param.into(), value: value.into(), reason }
    }

    /// Error for a failed caller-described predicate
    pub fn failed_predicate(param: &str, value: &dyn fmt::Debug, description: &str) -> Self {
        Self::new(param, format!("{:?}", value), description)
    }

    /// Error for an absent value
    pub fn absent(param: &str) -> Self {
        Self::new(param, "none", "must be present")
    }

    /// Error for an odd value that must be even
    pub fn not_even(param: &str, value: impl fmt::Display) -> Self {
        Self::new(param, value.to_string(), "must be even")
    }

    /// Error for an even value that must be odd
    pub fn not_odd(param: &str, value: impl fmt::Display) -> Self {
        Self::new(param, value.to_string(), "must be odd")
    }

    /// Error for a value outside inclusive bounds
    pub fn out_of_range(
        param: &str,
        value: impl fmt::Display,
        min: impl fmt::Display,
        max: impl fmt::Display,
    ) -> Self {
        Self::new(
            param,
            value.to_string(),
            format!("must be in range [{}, {}]", min, max),
        )
    }

    /// Error for a sequence below its minimum element count
    pub fn too_short(param: &str, len: usize, min: usize) -> Self {
        Self::new(
            param,
            format!("{} elements", len),
            format!("must have at least {} elements", min),
        )
    }

    /// Error for a negative value
    pub fn negative(param: &str, value: impl fmt::Display) -> Self {
        Self::new(param, value.to_string(), "must not be negative")
    }

    /// Error for a zero value
    pub fn zero(param: &str) -> Self {
        Self::new(param, "0", "must not be zero")
    }

    /// Error for an empty or whitespace-only string
    pub fn blank(param: &str, value: &str) -> Self {
        Self::new(
            param,
            format!("{:?}", value),
            "must not be empty or whitespace-only",
        )
    }

    /// Error for a zero or negative value that must be positive
    pub fn not_positive(param: &str, value: impl fmt::Display) -> Self {
        Self::new(param, value.to_string(), "must be positive")
    }

    /// Returns the parameter name
    pub fn param(&self) -> &str {
        &self.param
    }

    /// Returns the rendering of the offending value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the violated rule
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_param_rule_and_value() {
        let err = GuardError::not_positive("count", -3);
        let rendered = err.to_string();
        assert!(rendered.contains("count"));
        assert!(rendered.contains("must be positive"));
        assert!(rendered.contains("-3"));
    }

    #[test]
    fn test_structured_fields_survive_construction() {
        let err = GuardError::out_of_range("port", 70000, 1, 65535);
        assert_eq!(err.param(), "port");
        assert_eq!(err.value(), "70000");
        assert_eq!(err.reason(), "must be in range [1, 65535]");
    }

    #[test]
    fn test_absent_renders_none_value() {
        let err = GuardError::absent("config");
        assert_eq!(err.value(), "none");
        assert_eq!(err.reason(), "must be present");
    }

    #[test]
    fn test_blank_quotes_the_string() {
        let err = GuardError::blank("name", "   ");
        assert_eq!(err.value(), "\"   \"");
    }
}
