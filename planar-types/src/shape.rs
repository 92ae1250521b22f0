//! Collision geometry.

use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The collision geometry of a body.
///
/// A closed sum type: every algorithm in the engine matches on it
/// exhaustively, so a circle can never carry vertices and a polygon can
/// never carry a radius.
///
/// **Important**: polygon vertices are stored **relative to the owning
/// body's position**. Collision and contact routines add the body position
/// to obtain world-space vertices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    /// A circle of the given radius.
    Circle {
        /// Circle radius.
        radius: f64,
    },
    /// A convex polygon.
    Polygon {
        /// Vertices relative to the body position, in winding order
        /// (at least 3).
        vertices: Vec<Vec2>,
    },
}

impl Shape {
    /// Create a circle shape.
    #[must_use]
    pub fn circle(radius: f64) -> Self {
        Self::Circle { radius }
    }

    /// Create a polygon shape from position-relative vertices.
    #[must_use]
    pub fn polygon(vertices: Vec<Vec2>) -> Self {
        Self::Polygon { vertices }
    }

    /// Whether this is a circle.
    #[must_use]
    pub fn is_circle(&self) -> bool {
        matches!(self, Self::Circle { .. })
    }

    /// Whether this is a polygon.
    #[must_use]
    pub fn is_polygon(&self) -> bool {
        matches!(self, Self::Polygon { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_queries() {
        let circle = Shape::circle(1.0);
        assert!(circle.is_circle());
        assert!(!circle.is_polygon());

        let triangle = Shape::polygon(vec![
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
        ]);
        assert!(triangle.is_polygon());
        assert!(!triangle.is_circle());
    }
}
