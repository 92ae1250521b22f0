//! Contact-point generation.
//!
//! Given an overlapping pair, these routines find where the shapes touch.
//! The points are informational: the engine records them per tick but the
//! impulse magnitude never depends on them.

use planar_types::{nearly_equal, Shape, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Up to two world-space contact points for a colliding pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactManifold {
    /// First contact point. Meaningful when `count >= 1`.
    pub point_0: Vec2,
    /// Second contact point. Meaningful when `count == 2`.
    pub point_1: Vec2,
    /// Number of contact points found (0, 1, or 2).
    pub count: usize,
}

impl ContactManifold {
    /// A manifold with a single contact point.
    #[must_use]
    pub fn single(point: Vec2) -> Self {
        Self {
            point_0: point,
            point_1: Vec2::ZERO,
            count: 1,
        }
    }
}

/// Find the contact points for a colliding pair, dispatching on shape kind.
///
/// Circle-circle and circle-polygon pairings always yield exactly one
/// contact; polygon-polygon yields one or two.
#[must_use]
pub fn contact_points(
    position_a: Vec2,
    shape_a: &Shape,
    position_b: Vec2,
    shape_b: &Shape,
) -> ContactManifold {
    match (shape_a, shape_b) {
        (Shape::Polygon { vertices: vertices_a }, Shape::Polygon { vertices: vertices_b }) => {
            polygon_polygon_contacts(position_a, vertices_a, position_b, vertices_b)
        }
        (Shape::Polygon { vertices }, Shape::Circle { .. }) => {
            ContactManifold::single(circle_polygon_contact(position_b, position_a, vertices))
        }
        (Shape::Circle { .. }, Shape::Polygon { vertices }) => {
            ContactManifold::single(circle_polygon_contact(position_a, position_b, vertices))
        }
        (Shape::Circle { radius }, Shape::Circle { .. }) => {
            ContactManifold::single(circle_circle_contact(position_a, *radius, position_b))
        }
    }
}

/// Contact point on circle A's surface along the center-to-center direction.
fn circle_circle_contact(center_a: Vec2, radius_a: f64, center_b: Vec2) -> Vec2 {
    center_a + (center_b - center_a).normalized() * radius_a
}

/// The polygon edge point nearest the circle center, in world space.
fn circle_polygon_contact(circle_center: Vec2, polygon_center: Vec2, vertices: &[Vec2]) -> Vec2 {
    let mut contact = Vec2::ZERO;
    let mut min_distance_squared = f64::INFINITY;

    for i in 0..vertices.len() {
        let va = vertices[i] + polygon_center;
        let vb = vertices[(i + 1) % vertices.len()] + polygon_center;

        let (distance_squared, point) = point_segment_distance(circle_center, va, vb);
        if distance_squared < min_distance_squared {
            min_distance_squared = distance_squared;
            contact = point;
        }
    }

    contact
}

/// Scan every vertex of each polygon against every edge of the other,
/// keeping the nearest edge point(s). A near-tied minimum at a distinct
/// point produces a second contact.
fn polygon_polygon_contacts(
    center_a: Vec2,
    vertices_a: &[Vec2],
    center_b: Vec2,
    vertices_b: &[Vec2],
) -> ContactManifold {
    let mut point_0 = Vec2::ZERO;
    let mut point_1 = Vec2::ZERO;
    let mut count = 0;
    let mut min_distance_squared = f64::INFINITY;

    let passes = [
        (center_a, vertices_a, center_b, vertices_b),
        (center_b, vertices_b, center_a, vertices_a),
    ];

    for (probe_center, probe_vertices, edge_center, edge_vertices) in passes {
        for probe in probe_vertices {
            let p = *probe + probe_center;

            for j in 0..edge_vertices.len() {
                let va = edge_vertices[j] + edge_center;
                let vb = edge_vertices[(j + 1) % edge_vertices.len()] + edge_center;

                let (distance_squared, point) = point_segment_distance(p, va, vb);

                if nearly_equal(distance_squared, min_distance_squared) {
                    if !point.nearly_equal(point_0) {
                        point_1 = point;
                        count = 2;
                    }
                } else if distance_squared < min_distance_squared {
                    min_distance_squared = distance_squared;
                    point_0 = point;
                    count = 1;
                }
            }
        }
    }

    ContactManifold {
        point_0,
        point_1,
        count,
    }
}

/// Squared distance from a point to a segment, and the closest point on it.
///
/// The projection parameter is clamped three ways: at or before the first
/// endpoint, at or past the second, or interpolated between them.
fn point_segment_distance(point: Vec2, first: Vec2, second: Vec2) -> (f64, Vec2) {
    let segment = second - first;
    let to_point = point - first;

    let t = to_point.dot(segment) / segment.length_squared();

    let closest = if t <= 0.0 {
        first
    } else if t >= 1.0 {
        second
    } else {
        first + segment * t
    };

    (closest.distance_squared(point), closest)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn boxy(half_width: f64, half_height: f64) -> Shape {
        Shape::polygon(vec![
            Vec2::new(-half_width, half_height),
            Vec2::new(half_width, half_height),
            Vec2::new(half_width, -half_height),
            Vec2::new(-half_width, -half_height),
        ])
    }

    #[test]
    fn test_point_segment_distance_clamping() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);

        // Before the first endpoint.
        let (d2, p) = point_segment_distance(Vec2::new(-3.0, 4.0), a, b);
        assert_eq!(p, a);
        assert_relative_eq!(d2, 25.0);

        // Past the second endpoint.
        let (d2, p) = point_segment_distance(Vec2::new(13.0, -4.0), a, b);
        assert_eq!(p, b);
        assert_relative_eq!(d2, 25.0);

        // Interior: perpendicular foot.
        let (d2, p) = point_segment_distance(Vec2::new(4.0, 2.0), a, b);
        assert_relative_eq!(p, Vec2::new(4.0, 0.0));
        assert_relative_eq!(d2, 4.0);
    }

    #[test]
    fn test_circle_circle_contact_point() {
        let a = Shape::circle(1.0);
        let b = Shape::circle(1.0);
        let manifold = contact_points(Vec2::ZERO, &a, Vec2::new(1.5, 0.0), &b);

        assert_eq!(manifold.count, 1);
        // On A's surface toward B.
        assert_relative_eq!(manifold.point_0, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_circle_polygon_contact_point() {
        // Circle above a wide box: contact is the foot on the top edge.
        let circle = Shape::circle(0.5);
        let floor = boxy(2.0, 0.5);

        let manifold = contact_points(Vec2::new(0.25, 0.9), &circle, Vec2::ZERO, &floor);
        assert_eq!(manifold.count, 1);
        assert_relative_eq!(manifold.point_0, Vec2::new(0.25, 0.5));

        // Same pair with the polygon first: same single point.
        let swapped = contact_points(Vec2::ZERO, &floor, Vec2::new(0.25, 0.9), &circle);
        assert_eq!(swapped.count, 1);
        assert_relative_eq!(swapped.point_0, Vec2::new(0.25, 0.5));
    }

    #[test]
    fn test_polygon_polygon_two_contacts_on_face_overlap() {
        // Side-by-side boxes overlapping along a face produce two contacts.
        let a = boxy(0.5, 0.5);
        let b = boxy(0.5, 0.5);

        let manifold = contact_points(Vec2::ZERO, &a, Vec2::new(0.9, 0.0), &b);
        assert_eq!(manifold.count, 2);
        assert!(!manifold.point_0.nearly_equal(manifold.point_1));
        // Both points sit in the overlap band.
        for point in [manifold.point_0, manifold.point_1] {
            assert!(point.x >= 0.4 - 1e-9 && point.x <= 0.5 + 1e-9);
        }
    }

    #[test]
    fn test_polygon_polygon_single_contact_at_corner() {
        // An apex-down triangle probing into a box produces one contact:
        // the apex's foot on the box's top edge.
        let a = boxy(1.0, 1.0);
        let b = Shape::polygon(vec![
            Vec2::new(-0.5, 0.5),
            Vec2::new(0.5, 0.5),
            Vec2::new(0.0, -0.5),
        ]);

        let manifold = contact_points(Vec2::ZERO, &a, Vec2::new(0.0, 1.45), &b);
        assert_eq!(manifold.count, 1);
        assert_relative_eq!(manifold.point_0, Vec2::new(0.0, 1.0), epsilon = 1e-9);
    }
}
