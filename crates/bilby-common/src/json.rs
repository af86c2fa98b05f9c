//! JSON serialize/deserialize passthrough.
//!
//! Thin wrappers over `serde_json`: `to_json` produces the JSON text of a
//! value, `from_json` reconstructs a typed value from JSON text. The shape
//! of the target type plays the role a prototype object would in a dynamic
//! language — parsed fields are laid onto it during deserialization.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialize a value to its JSON text.
///
/// # Errors
///
/// Returns any `serde_json` serialization error (e.g. a map with
/// non-string keys).
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Reconstruct a typed value from JSON text.
///
/// # Errors
///
/// Returns any `serde_json` parse error, including text that does not
/// match the shape of `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;

    #[test]
    fn test_round_trip_rectangle() {
        let rectangle = Rectangle::new(10.0, 20.0);
        let json = to_json(&rectangle).expect("rectangle serializes");
        let restored: Rectangle = from_json(&json).expect("rectangle deserializes");
        assert_eq!(restored, rectangle);
        assert!((restored.area() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_json_reconstructs_from_literal_text() {
        let rectangle: Rectangle = from_json(r#"{"width":2.0,"height":3.0}"#)
            .expect("literal JSON matches the rectangle shape");
        assert!((rectangle.area() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_json_rejects_mismatched_shape() {
        let result: serde_json::Result<Rectangle> = from_json(r#"{"radius":10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_to_json_of_plain_collections() {
        let json = to_json(&vec![1, 2, 3]).expect("vec serializes");
        assert_eq!(json, "[1,2,3]");
    }
}
