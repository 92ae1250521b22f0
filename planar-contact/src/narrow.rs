//! Narrow-phase overlap tests.
//!
//! Separating-axis tests for convex polygons, closed-form tests for circles,
//! and the axis-aligned submersion test for fluid regions. All functions are
//! pure: they take world-space centers plus position-relative vertices and
//! return the penetration (normal + depth) or nothing.
//!
//! Normals always point from the first shape toward the second, so callers
//! can push the pair apart along `normal * depth` without re-deriving
//! orientation.

use planar_types::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a positive overlap test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Penetration {
    /// Unit contact normal, pointing from the first shape toward the second.
    pub normal: Vec2,
    /// Penetration depth along the normal.
    pub depth: f64,
}

/// Test two circles for overlap.
///
/// Collides when the center distance is strictly below the radius sum;
/// `depth` is the radius sum minus the distance. When the centers coincide
/// the normal degenerates to the zero vector.
#[must_use]
pub fn circle_circle(
    center_a: Vec2,
    radius_a: f64,
    center_b: Vec2,
    radius_b: f64,
) -> Option<Penetration> {
    let distance = center_a.distance(center_b);

    if distance >= radius_a + radius_b {
        return None;
    }

    let normal = if distance == 0.0 {
        Vec2::ZERO
    } else {
        (center_b - center_a) / distance
    };

    Some(Penetration {
        normal,
        depth: radius_a + radius_b - distance,
    })
}

/// Test two convex polygons for overlap via the separating-axis theorem.
///
/// Every edge normal of both polygons is a candidate axis; a disjoint
/// projection interval on any axis proves separation. The axis of minimum
/// overlap becomes the contact normal, oriented from A's center toward B's.
///
/// Symmetric up to normal sign: swapping the arguments reports the same
/// depth with the normal negated.
#[must_use]
pub fn polygon_polygon(
    center_a: Vec2,
    vertices_a: &[Vec2],
    center_b: Vec2,
    vertices_b: &[Vec2],
) -> Option<Penetration> {
    let mut normal = Vec2::ZERO;
    let mut depth = f64::INFINITY;

    for vertices in [vertices_a, vertices_b] {
        for i in 0..vertices.len() {
            let va = vertices[i];
            let vb = vertices[(i + 1) % vertices.len()];
            let axis = (vb - va).perp().normalized();

            let (min_a, max_a) = project_vertices(center_a, vertices_a, axis);
            let (min_b, max_b) = project_vertices(center_b, vertices_b, axis);

            if min_a > max_b || min_b > max_a {
                return None;
            }

            let axis_depth = (max_b - min_a).min(max_a - min_b);
            if axis_depth < depth {
                depth = axis_depth;
                normal = axis;
            }
        }
    }

    if normal.dot(center_b - center_a) < 0.0 {
        normal = -normal;
    }

    Some(Penetration { normal, depth })
}

/// Test a circle against a convex polygon.
///
/// SAT over the polygon's edge normals plus one extra axis from the circle
/// center to the closest polygon vertex (the vertex-region case). Per axis,
/// when the overlap sits on the polygon's outward side the edge axis owns
/// the normal; otherwise the vertex-to-circle-center axis does. The final
/// normal points from the circle toward the polygon.
#[must_use]
pub fn circle_polygon(
    circle_center: Vec2,
    circle_radius: f64,
    polygon_center: Vec2,
    vertices: &[Vec2],
) -> Option<Penetration> {
    let mut normal = Vec2::ZERO;
    let mut depth = f64::INFINITY;

    for i in 0..vertices.len() {
        let va = vertices[i];
        let vb = vertices[(i + 1) % vertices.len()];
        let axis = (vb - va).perp().normalized();

        let (min_a, max_a) = project_vertices(polygon_center, vertices, axis);
        let (min_b, max_b) = project_circle(circle_center, circle_radius, axis);

        if min_a > max_b || min_b > max_a {
            return None;
        }

        let axis_depth = (max_b - min_a).min(max_a - min_b);
        if axis_depth < depth {
            depth = axis_depth;
            if axis_depth == max_a - min_b {
                normal = axis;
            } else {
                normal = (va + polygon_center - circle_center).normalized();
            }
        }
    }

    let closest = closest_vertex(circle_center, polygon_center, vertices);
    let axis = (closest - circle_center).normalized();

    let (min_a, max_a) = project_vertices(polygon_center, vertices, axis);
    let (min_b, max_b) = project_circle(circle_center, circle_radius, axis);

    if min_a > max_b || min_b > max_a {
        return None;
    }

    let axis_depth = (max_b - min_a).min(max_a - min_b);
    if axis_depth < depth {
        depth = axis_depth;
        normal = axis;
    }

    if normal.dot(polygon_center - circle_center) < 0.0 {
        normal = -normal;
    }

    Some(Penetration { normal, depth })
}

/// Test whether a circle intersects a liquid region.
///
/// The boundary is treated as the axis-aligned rectangle implied by indices
/// `[0].x`/`[1].x` and `[2].y`/`[1].y` regardless of its actual point count
/// (a rectangle simplification, not a point-in-polygon test). Boundaries
/// with fewer than three points report no intersection.
#[must_use]
pub fn liquid_circle(circle_center: Vec2, circle_radius: f64, boundary: &[Vec2]) -> bool {
    if boundary.len() < 3 {
        return false;
    }

    let closest_x = boundary[0].x.max(circle_center.x.min(boundary[1].x));
    let closest_y = boundary[2].y.max(circle_center.y.min(boundary[1].y));

    let dx = circle_center.x - closest_x;
    let dy = circle_center.y - closest_y;

    dx * dx + dy * dy < circle_radius * circle_radius
}

/// Project position-relative vertices onto an axis, returning the interval.
fn project_vertices(center: Vec2, vertices: &[Vec2], axis: Vec2) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for vertex in vertices {
        let projection = (*vertex + center).dot(axis);
        min = min.min(projection);
        max = max.max(projection);
    }

    (min, max)
}

/// Project a circle onto an axis, returning the interval.
fn project_circle(center: Vec2, radius: f64, axis: Vec2) -> (f64, f64) {
    let reach = axis * radius;
    let p1 = (center + reach).dot(axis);
    let p2 = (center - reach).dot(axis);
    (p1.min(p2), p1.max(p2))
}

/// World-space polygon vertex closest to the circle center.
fn closest_vertex(circle_center: Vec2, polygon_center: Vec2, vertices: &[Vec2]) -> Vec2 {
    let mut closest = Vec2::ZERO;
    let mut min_distance = f64::INFINITY;

    for vertex in vertices {
        let world = *vertex + polygon_center;
        let distance = world.distance(circle_center);
        if distance < min_distance {
            min_distance = distance;
            closest = world;
        }
    }

    closest
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box(half_width: f64, half_height: f64) -> Vec<Vec2> {
        vec![
            Vec2::new(-half_width, half_height),
            Vec2::new(half_width, half_height),
            Vec2::new(half_width, -half_height),
            Vec2::new(-half_width, -half_height),
        ]
    }

    #[test]
    fn test_circle_circle_overlap() {
        let hit = circle_circle(Vec2::ZERO, 1.0, Vec2::new(1.5, 0.0), 1.0)
            .expect("overlapping circles must collide");
        assert_relative_eq!(hit.depth, 0.5);
        assert_relative_eq!(hit.normal, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_circle_circle_separated() {
        assert!(circle_circle(Vec2::ZERO, 1.0, Vec2::new(2.0, 0.0), 1.0).is_none());
        assert!(circle_circle(Vec2::ZERO, 1.0, Vec2::new(3.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn test_circle_circle_coincident_centers() {
        let hit = circle_circle(Vec2::ZERO, 1.0, Vec2::ZERO, 2.0)
            .expect("coincident circles overlap");
        assert_eq!(hit.normal, Vec2::ZERO);
        assert_relative_eq!(hit.depth, 3.0);
    }

    #[test]
    fn test_polygon_polygon_overlap_depth_and_direction() {
        // Two unit boxes overlapping by 0.2 along x.
        let a = unit_box(0.5, 0.5);
        let b = unit_box(0.5, 0.5);

        let hit = polygon_polygon(Vec2::ZERO, &a, Vec2::new(0.8, 0.0), &b)
            .expect("overlapping boxes must collide");
        assert_relative_eq!(hit.depth, 0.2, epsilon = 1e-12);
        assert_relative_eq!(hit.normal, Vec2::new(1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_polygon_polygon_separated() {
        let a = unit_box(0.5, 0.5);
        let b = unit_box(0.5, 0.5);
        assert!(polygon_polygon(Vec2::ZERO, &a, Vec2::new(1.1, 0.0), &b).is_none());
        assert!(polygon_polygon(Vec2::ZERO, &a, Vec2::new(0.0, -1.01), &b).is_none());
    }

    #[test]
    fn test_polygon_polygon_symmetry() {
        let a = unit_box(0.5, 0.5);
        let b = unit_box(1.0, 0.25);
        let center_b = Vec2::new(0.6, 0.4);

        let forward = polygon_polygon(Vec2::ZERO, &a, center_b, &b).expect("collision");
        let reverse = polygon_polygon(center_b, &b, Vec2::ZERO, &a).expect("collision");

        assert_relative_eq!(forward.depth, reverse.depth, epsilon = 1e-12);
        assert_relative_eq!(forward.normal, -reverse.normal, epsilon = 1e-12);
    }

    #[test]
    fn test_circle_polygon_face_contact() {
        // Circle resting into the top face of a wide box.
        let vertices = unit_box(2.0, 0.5);
        let hit = circle_polygon(Vec2::new(0.0, 0.9), 0.5, Vec2::ZERO, &vertices)
            .expect("circle overlaps the box");

        // Normal points from the circle toward the polygon: straight down.
        assert_relative_eq!(hit.normal, Vec2::new(0.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(hit.depth, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_circle_polygon_separated() {
        let vertices = unit_box(2.0, 0.5);
        assert!(circle_polygon(Vec2::new(0.0, 1.1), 0.5, Vec2::ZERO, &vertices).is_none());
        assert!(circle_polygon(Vec2::new(5.0, 0.0), 0.5, Vec2::ZERO, &vertices).is_none());
    }

    #[test]
    fn test_circle_polygon_vertex_region() {
        // Circle approaching the top-right corner diagonally.
        let vertices = unit_box(1.0, 1.0);
        let center = Vec2::new(1.3, 1.3);
        let hit = circle_polygon(center, 0.5, Vec2::ZERO, &vertices)
            .expect("corner overlap");

        // Normal points from the circle toward the corner.
        let expected = (Vec2::new(1.0, 1.0) - center).normalized();
        assert_relative_eq!(hit.normal, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_liquid_circle() {
        let boundary = vec![
            Vec2::new(-20.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(20.0, -15.0),
            Vec2::new(-20.0, -15.0),
        ];

        // Center inside the region.
        assert!(liquid_circle(Vec2::new(0.0, -5.0), 0.5, &boundary));
        // Dipping through the surface from above.
        assert!(liquid_circle(Vec2::new(0.0, 0.3), 0.5, &boundary));
        // Fully above the surface by more than the radius.
        assert!(!liquid_circle(Vec2::new(0.0, 0.6), 0.5, &boundary));
        // Beyond the side wall.
        assert!(!liquid_circle(Vec2::new(21.0, -5.0), 0.5, &boundary));
    }

    #[test]
    fn test_liquid_circle_degenerate_boundary() {
        assert!(!liquid_circle(Vec2::ZERO, 1.0, &[]));
        assert!(!liquid_circle(Vec2::ZERO, 1.0, &[Vec2::ZERO, Vec2::new(1.0, 0.0)]));
    }
}
