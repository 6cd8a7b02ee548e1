//! Prop values for block configuration
//!
//! Blocks carry their configuration as an open key-value map. `PropValue` is
//! the self-describing value tree stored in those maps; it round-trips
//! through JSON unchanged, which is what the persistence API requires.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An open props map, as stored on a component instance and in
/// `BlockDefinition::default_props`.
pub type PropMap = HashMap<String, PropValue>;

/// A single prop value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Boolean value
    Boolean(bool),
    /// Integer number
    Integer(i64),
    /// Floating point number
    Number(f64),
    /// String value
    String(String),
    /// Array of values
    Array(Vec<PropValue>),
    /// Object with key-value pairs
    Object(HashMap<String, PropValue>),
    /// Null value
    Null,
}

impl PropValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }

    /// Check if the value is "empty" for required-prop purposes:
    /// null, an empty string, or an empty array.
    pub fn is_empty(&self) -> bool {
        match self {
            PropValue::Null => true,
            PropValue::String(s) => s.is_empty(),
            PropValue::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Try to view the value as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to view the value as a number (integers widen to f64)
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            PropValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to view the value as an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropValue::Integer(i) => Some(*i),
            PropValue::Number(n) => Some(*n as i64),
            _ => None,
        }
    }

    /// Try to view the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to view the value as an array
    pub fn as_array(&self) -> Option<&[PropValue]> {
        match self {
            PropValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to view the value as an object
    pub fn as_object(&self) -> Option<&HashMap<String, PropValue>> {
        match self {
            PropValue::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::String(s)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::String(s.to_string())
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<i64> for PropValue {
    fn from(i: i64) -> Self {
        PropValue::Integer(i)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Boolean(b)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(items: Vec<T>) -> Self {
        PropValue::Array(items.into_iter().map(Into::into).collect())
    }
}

/// Build a `PropMap` from `(key, value)` pairs.
///
/// Convenience for catalog definitions and tests:
/// ```
/// use site_blocks::core::props::props;
///
/// let p = props([("title", "Welcome".into()), ("columns", 3i64.into())]);
/// assert_eq!(p["title"].as_str(), Some("Welcome"));
/// ```
pub fn props<const N: usize>(pairs: [(&str, PropValue); N]) -> PropMap {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(PropValue::from("hi").as_str(), Some("hi"));
        assert_eq!(PropValue::from(3i64).as_integer(), Some(3));
        assert_eq!(PropValue::from(3i64).as_number(), Some(3.0));
        assert_eq!(PropValue::from(2.5).as_number(), Some(2.5));
        assert_eq!(PropValue::from(true).as_bool(), Some(true));
        assert!(PropValue::Null.is_null());
        assert_eq!(PropValue::from("hi").as_bool(), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(PropValue::Null.is_empty());
        assert!(PropValue::from("").is_empty());
        assert!(PropValue::Array(vec![]).is_empty());
        assert!(!PropValue::from("x").is_empty());
        assert!(!PropValue::from(0i64).is_empty());
        assert!(!PropValue::from(false).is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let p = props([
            ("title", "A & B".into()),
            ("count", 4i64.into()),
            ("ratio", 0.5.into()),
            ("visible", true.into()),
            ("tags", vec!["a", "b"].into()),
        ]);

        let json = serde_json::to_string(&p).unwrap();
        let back: PropMap = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn test_integers_stay_integers_through_json() {
        let json = r#"{"columns": 3}"#;
        let map: PropMap = serde_json::from_str(json).unwrap();
        assert_eq!(map["columns"], PropValue::Integer(3));
    }
}
