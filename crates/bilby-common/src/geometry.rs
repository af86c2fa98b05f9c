//! Simple geometric value objects.

use serde::{Deserialize, Serialize};

/// A rectangle with a width, a height, and a derived area.
///
/// Plain data: construct it, read its fields, ask for its area. Serializes
/// through `serde` like every other value object in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its two extents.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The area, `width * height`.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area() {
        let rectangle = Rectangle::new(10.0, 20.0);
        assert!((rectangle.area() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fields_are_plain_data() {
        let rectangle = Rectangle::new(3.5, 2.0);
        assert!((rectangle.width - 3.5).abs() < f64::EPSILON);
        assert!((rectangle.height - 2.0).abs() < f64::EPSILON);
    }
}
