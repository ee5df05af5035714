//! Expectation Validator: runtime invariants and postconditions.
//!
//! These checks cover conditions not derived from direct caller input: a
//! mapping that must contain a key, two computed values that must agree, a
//! branch that must never execute. Failures carry a structured
//! expected/actual/context message ([`ExpectationError`]).
//!
//! Where a check first guards its own input — the mapping in [`contains`],
//! the value in [`of_type`] — that guard fails through
//! [`guard::not_null`](crate::guard::not_null) in the Invalid-Argument tier
//! instead, so callers can tell "a bad mapping was passed in" apart from
//! "the key expectation failed". Those two checks return the combined
//! [`Error`]; everything else returns [`ExpectResult`].

mod errors;

pub use errors::{ExpectResult, ExpectationError};

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

use crate::errors::Error;
use crate::guard::{self, Integer};

/// Fails when `result` is false; `description` becomes the context line.
pub fn condition(result: bool, description: &str) -> ExpectResult<()> {
    if result {
        Ok(())
    } else {
        Err(
            ExpectationError::new("condition evaluates to true", "condition evaluates to false")
                .with_context(description),
        )
    }
}

/// Keyed lookup seam for [`contains`].
///
/// `entry` distinguishes three states: key absent (outer `None`), key present
/// but the entry vacant (inner `None`), key present with a value. Plain maps
/// never report a vacant entry; `Option`-valued maps do.
pub trait KeyedLookup<K, V> {
    /// Looks up `key`, reporting entry vacancy separately from key absence.
    fn entry(&self, key: &K) -> Option<Option<&V>>;
}

impl<K: Eq + Hash, V> KeyedLookup<K, V> for HashMap<K, V> {
    fn entry(&self, key: &K) -> Option<Option<&V>> {
        self.get(key).map(Some)
    }
}

impl<K: Eq + Hash, V> KeyedLookup<K, V> for HashMap<K, Option<V>> {
    fn entry(&self, key: &K) -> Option<Option<&V>> {
        self.get(key).map(Option::as_ref)
    }
}

impl<K: Ord, V> KeyedLookup<K, V> for BTreeMap<K, V> {
    fn entry(&self, key: &K) -> Option<Option<&V>> {
        self.get(key).map(Some)
    }
}

impl<K: Ord, V> KeyedLookup<K, V> for BTreeMap<K, Option<V>> {
    fn entry(&self, key: &K) -> Option<Option<&V>> {
        self.get(key).map(Option::as_ref)
    }
}

/// Fails when `mapping` lacks `key` or the entry is vacant; returns the value.
///
/// The mapping itself must be present: an absent mapping is a caller fault
/// and fails through [`guard::not_null`](crate::guard::not_null), so the two
/// failure modes land in different tiers of [`Error`].
pub fn contains<'m, M, K, V>(mapping: Option<&'m M>, key: &K) -> Result<&'m V, Error>
where
    M: KeyedLookup<K, V>,
    K: fmt::Debug,
{
    let mapping = guard::not_null(mapping, "mapping")?;
    match mapping.entry(key) {
        Some(Some(value)) => Ok(value),
        Some(None) => Err(ExpectationError::new(
            format!("mapping holds a value for key {:?}", key),
            "entry is present but vacant",
        )
        .into()),
        None => Err(ExpectationError::new(
            format!("mapping contains key {:?}", key),
            "key is absent",
        )
        .into()),
    }
}

/// Fails when `a != b` per `PartialEq` (the default comparison).
pub fn equal<T: PartialEq + fmt::Debug>(a: &T, b: &T) -> ExpectResult<()> {
    equal_by(a, b, |x, y| x == y)
}

/// Fails when `a` and `b` are not equal per the supplied comparer.
pub fn equal_by<T, F>(a: &T, b: &T, eq: F) -> ExpectResult<()>
where
    T: fmt::Debug,
    F: Fn(&T, &T) -> bool,
{
    if eq(a, b) {
        Ok(())
    } else {
        Err(ExpectationError::new("values compare equal", "values differ")
            .with_context(format!("left: {:?}", a))
            .with_context(format!("right: {:?}", b)))
    }
}

/// Fails when `a` and `b` ARE equal per the supplied comparer.
///
/// Unlike [`equal`], there is no comparer-less form: the comparison used to
/// assert difference must be spelled out at every call site.
pub fn not_equal_by<T, F>(a: &T, b: &T, eq: F) -> ExpectResult<()>
where
    T: fmt::Debug,
    F: Fn(&T, &T) -> bool,
{
    if eq(a, b) {
        Err(
            ExpectationError::new("values compare unequal", "values compare equal")
                .with_context(format!("left: {:?}", a))
                .with_context(format!("right: {:?}", b)),
        )
    } else {
        Ok(())
    }
}

/// Fails when `value < min` or `value > max`; both bounds inclusive.
///
/// Same semantics as [`guard::in_range`](crate::guard::in_range), but the
/// failure is an expectation: a value reaching this check was supposed to
/// have been validated already.
pub fn in_range<T: Integer>(value: T, min: T, max: T) -> ExpectResult<()> {
    if value < min || value > max {
        Err(ExpectationError::new(
            format!("value in range [{}, {}]", min, max),
            format!("value is {}", value),
        ))
    } else {
        Ok(())
    }
}

/// Fails when `value` is absent; success narrows to the contained value.
pub fn not_null<T>(value: Option<T>) -> ExpectResult<T> {
    value.ok_or_else(|| ExpectationError::new("value is present", "value is absent"))
}

/// Runtime-typed value seam for [`of_type`].
///
/// Blanket-implemented for every `'static` type; carries the concrete type
/// name so a failed downcast can report what the value actually was.
pub trait AnyValue: Any {
    /// Upcast for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Concrete type name of the underlying value
    fn type_label(&self) -> &'static str;
}

impl<T: Any> AnyValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_label(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Fails when `value` is not a `T`; returns the downcast reference.
///
/// An absent value is a caller fault and fails through
/// [`guard::not_null`](crate::guard::not_null); a present value of the wrong
/// runtime type is the expectation failure, reported with both type names.
pub fn of_type<'a, T: Any>(value: Option<&'a dyn AnyValue>) -> Result<&'a T, Error> {
    let value = guard::not_null(value, "value")?;
    match value.as_any().downcast_ref::<T>() {
        Some(typed) => Ok(typed),
        None => Err(ExpectationError::new(
            format!("value of type {}", std::any::type_name::<T>()),
            format!("value of type {}", value.type_label()),
        )
        .into()),
    }
}

/// Builds the error for a branch that must never execute.
///
/// Returns rather than fails, so the default arm of an exhaustive match can
/// end with `return Err(expect::unreachable("...").into())` as its
/// terminating expression.
pub fn unreachable(message: &str) -> ExpectationError {
    ExpectationError::new("branch is never reached", "branch was reached").with_context(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_reports_description_as_context() {
        assert!(condition(true, "cache stays warm").is_ok());
        let err = condition(false, "cache stays warm").unwrap_err();
        assert_eq!(err.expected(), "condition evaluates to true");
        assert_eq!(err.actual(), "condition evaluates to false");
        assert_eq!(err.context(), ["cache stays warm".to_string()]);
    }

    #[test]
    fn test_contains_returns_the_value() {
        let mut sessions: HashMap<String, i64> = HashMap::new();
        sessions.insert("a".to_string(), 1);

        let v = contains(Some(&sessions), &"a".to_string()).unwrap();
        assert_eq!(*v, 1);
    }

    #[test]
    fn test_contains_missing_key_is_an_expectation() {
        let sessions: HashMap<String, i64> = HashMap::new();
        let err = contains(Some(&sessions), &"b".to_string()).unwrap_err();
        assert!(err.is_expectation());
        assert!(err.to_string().contains("\"b\""));
    }

    #[test]
    fn test_contains_vacant_entry_is_an_expectation() {
        let mut cache: HashMap<String, Option<i64>> = HashMap::new();
        cache.insert("a".to_string(), None);

        let err = contains::<_, _, i64>(Some(&cache), &"a".to_string()).unwrap_err();
        assert!(err.is_expectation());
        assert!(err.to_string().contains("vacant"));

        cache.insert("b".to_string(), Some(9));
        let v = contains::<_, _, i64>(Some(&cache), &"b".to_string()).unwrap();
        assert_eq!(*v, 9);
    }

    #[test]
    fn test_contains_absent_mapping_is_an_invalid_argument() {
        let err = contains::<HashMap<String, i64>, _, _>(None, &"a".to_string()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_contains_works_over_btree() {
        let mut index: BTreeMap<u32, &str> = BTreeMap::new();
        index.insert(7, "seven");
        assert_eq!(*contains(Some(&index), &7).unwrap(), "seven");
        assert!(contains(Some(&index), &8).unwrap_err().is_expectation());
    }

    #[test]
    fn test_equal_defaults_to_partial_eq() {
        assert!(equal(&1, &1).is_ok());
        let err = equal(&1, &2).unwrap_err();
        assert_eq!(err.context(), ["left: 1".to_string(), "right: 2".to_string()]);
    }

    #[test]
    fn test_comparers() {
        let same_len = |a: &&str, b: &&str| a.len() == b.len();
        assert!(equal_by(&"ab", &"cd", same_len).is_ok());
        assert!(equal_by(&"ab", &"cde", same_len).is_err());

        assert!(not_equal_by(&1, &2, |a, b| a == b).is_ok());
        assert!(not_equal_by(&1, &1, |a, b| a == b).is_err());
    }

    #[test]
    fn test_in_range_is_expectation_tier() {
        assert!(in_range(5, 0, 10).is_ok());
        assert!(in_range(0, 0, 10).is_ok());
        assert!(in_range(10, 0, 10).is_ok());
        let err = in_range(11, 0, 10).unwrap_err();
        assert_eq!(err.expected(), "value in range [0, 10]");
        assert_eq!(err.actual(), "value is 11");
    }

    #[test]
    fn test_not_null_narrows() {
        assert_eq!(not_null(Some("x")).unwrap(), "x");
        let err = not_null(None::<&str>).unwrap_err();
        assert_eq!(err.actual(), "value is absent");
    }

    #[test]
    fn test_of_type_downcasts() {
        let name = String::from("widget");
        let narrowed: &String = of_type::<String>(Some(&name)).unwrap();
        assert_eq!(narrowed, "widget");
    }

    #[test]
    fn test_of_type_wrong_type_names_both_types() {
        let name = String::from("widget");
        let err = of_type::<i64>(Some(&name)).unwrap_err();
        assert!(err.is_expectation());
        let rendered = err.to_string();
        assert!(rendered.contains("i64"));
        assert!(rendered.contains("String"));
    }

    #[test]
    fn test_of_type_absent_is_an_invalid_argument() {
        let err = of_type::<i64>(None).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_unreachable_returns_instead_of_failing() {
        let err = unreachable("state machine case fell through");
        assert_eq!(err.expected(), "branch is never reached");
        assert_eq!(err.context(), ["state machine case fell through".to_string()]);
    }
}
