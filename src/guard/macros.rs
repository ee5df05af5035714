//! Call-site expression capture for the argument checks.
//!
//! Rust has no implicit caller-expression capture, so each check gets a
//! declarative macro that passes `stringify!` of the argument expression as
//! the parameter name. An explicit name can still be supplied as the final
//! argument; the macro then forwards it unchanged.

/// [`guard::condition`](crate::guard::condition) with the checked expression
/// captured as the parameter name.
#[macro_export]
macro_rules! guard_condition {
    ($value:expr, $predicate:expr, $description:expr) => {
        $crate::guard::condition(&$value, $predicate, stringify!($value), $description)
    };
    ($value:expr, $predicate:expr, $param:expr, $description:expr) => {
        $crate::guard::condition(&$value, $predicate, $param, $description)
    };
}

/// [`guard::even`](crate::guard::even) with the checked expression captured
/// as the parameter name.
#[macro_export]
macro_rules! guard_even {
    ($value:expr) => {
        $crate::guard::even($value, stringify!($value))
    };
    ($value:expr, $param:expr) => {
        $crate::guard::even($value, $param)
    };
}

/// [`guard::odd`](crate::guard::odd) with the checked expression captured as
/// the parameter name.
#[macro_export]
macro_rules! guard_odd {
    ($value:expr) => {
        $crate::guard::odd($value, stringify!($value))
    };
    ($value:expr, $param:expr) => {
        $crate::guard::odd($value, $param)
    };
}

/// [`guard::in_range`](crate::guard::in_range) with the checked expression
/// captured as the parameter name.
#[macro_export]
macro_rules! guard_in_range {
    ($value:expr, $min:expr, $max:expr) => {
        $crate::guard::in_range($value, $min, $max, stringify!($value))
    };
    ($value:expr, $min:expr, $max:expr, $param:expr) => {
        $crate::guard::in_range($value, $min, $max, $param)
    };
}

/// [`guard::minimum_length`](crate::guard::minimum_length) with the checked
/// expression captured as the parameter name.
#[macro_export]
macro_rules! guard_minimum_length {
    ($sequence:expr, $min:expr) => {
        $crate::guard::minimum_length($sequence, $min, stringify!($sequence))
    };
    ($sequence:expr, $min:expr, $param:expr) => {
        $crate::guard::minimum_length($sequence, $min, $param)
    };
}

/// [`guard::not_negative`](crate::guard::not_negative) with the checked
/// expression captured as the parameter name.
#[macro_export]
macro_rules! guard_not_negative {
    ($value:expr) => {
        $crate::guard::not_negative($value, stringify!($value))
    };
    ($value:expr, $param:expr) => {
        $crate::guard::not_negative($value, $param)
    };
}

/// [`guard::null_or_not_negative`](crate::guard::null_or_not_negative) with
/// the checked expression captured as the parameter name.
#[macro_export]
macro_rules! guard_null_or_not_negative {
    ($value:expr) => {
        $crate::guard::null_or_not_negative($value, stringify!($value))
    };
    ($value:expr, $param:expr) => {
        $crate::guard::null_or_not_negative($value, $param)
    };
}

/// [`guard::not_null`](crate::guard::not_null) with the checked expression
/// captured as the parameter name.
#[macro_export]
macro_rules! guard_not_null {
    ($value:expr) => {
        $crate::guard::not_null($value, stringify!($value))
    };
    ($value:expr, $param:expr) => {
        $crate::guard::not_null($value, $param)
    };
}

/// [`guard::not_null_or_whitespace`](crate::guard::not_null_or_whitespace)
/// with the checked expression captured as the parameter name.
#[macro_export]
macro_rules! guard_not_null_or_whitespace {
    ($value:expr) => {
        $crate::guard::not_null_or_whitespace($value, stringify!($value))
    };
    ($value:expr, $param:expr) => {
        $crate::guard::not_null_or_whitespace($value, $param)
    };
}

/// [`guard::not_zero`](crate::guard::not_zero) with the checked expression
/// captured as the parameter name.
#[macro_export]
macro_rules! guard_not_zero {
    ($value:expr) => {
        $crate::guard::not_zero($value, stringify!($value))
    };
    ($value:expr, $param:expr) => {
        $crate::guard::not_zero($value, $param)
    };
}

/// [`guard::positive`](crate::guard::positive) with the checked expression
/// captured as the parameter name.
#[macro_export]
macro_rules! guard_positive {
    ($value:expr) => {
        $crate::guard::positive($value, stringify!($value))
    };
    ($value:expr, $param:expr) => {
        $crate::guard::positive($value, $param)
    };
}
