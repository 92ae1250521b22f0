//! Fluid and air force application.
//!
//! Circle bodies accumulate buoyancy and quadratic drag into their
//! `fluid_displacement` accumulator; the next [`Body::step`] consumes it.
//! Polygon bodies do not participate in fluid interaction.
//!
//! The submerged-amount computation feeds a nominal sphere volume
//! `(4/3)πr³` through a 2D circular-segment split.

use std::f64::consts::{PI, TAU};

use planar_types::{Liquid, Vec2};

use crate::body::Body;

/// Density of air (kg/m³).
pub const AIR_DENSITY: f64 = 1.293;

/// Drag coefficient of a sphere.
pub const SPHERE_DRAG_COEFFICIENT: f64 = 0.47;

/// Accumulate buoyancy plus quadratic fluid drag on a submerged circle.
pub(crate) fn apply_fluid_forces(body: &mut Body, radius: f64, liquid: &Liquid, gravity: Vec2) {
    let submerged = submerged_volume(body.position.y, radius, liquid.highest_boundary_y);
    let buoyancy = -(gravity * (liquid.density * submerged));

    let speed = body.linear_velocity.length();
    let cross_section = PI * radius * radius;
    let drag = -(body.linear_velocity
        * (0.5 * cross_section * SPHERE_DRAG_COEFFICIENT * liquid.density * speed));

    body.fluid_displacement += buoyancy + drag;
}

/// Accumulate quadratic air drag on a circle that is not submerged.
pub(crate) fn apply_air_drag(body: &mut Body) {
    let speed = body.linear_velocity.length();
    let drag = -(body.linear_velocity
        * (0.5 * AIR_DENSITY * SPHERE_DRAG_COEFFICIENT * speed * body.area));

    body.fluid_displacement += drag;
}

/// Displaced volume of a circle body whose center sits at `center_y`,
/// against a fluid surface at `surface_y`.
///
/// Three regimes on `h = center_y - surface_y`:
///
/// - `h > r`: fully above, nothing displaced.
/// - `h < -r`: fully below, the whole nominal volume.
/// - otherwise: partially submerged; a circular-segment formula built from
///   the central angle `2·acos(|h|/r)` splits the nominal volume.
#[must_use]
pub fn submerged_volume(center_y: f64, radius: f64, surface_y: f64) -> f64 {
    let volume = (4.0 / 3.0) * PI * radius.powi(3);
    let height = center_y - surface_y;

    if height > radius {
        0.0
    } else if height < -radius {
        volume
    } else {
        let central_angle = 2.0 * (height.abs() / radius).acos();
        let triangle_area = 0.5 * radius * radius * central_angle.sin();

        if height < 0.0 {
            let sector = volume * ((TAU - central_angle) / TAU);
            sector + triangle_area
        } else {
            let sector = volume * (central_angle / TAU);
            sector - triangle_area
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use planar_types::Material;

    #[test]
    fn test_submerged_volume_regimes() {
        let radius: f64 = 0.5;
        let volume = (4.0 / 3.0) * PI * radius.powi(3);

        // Fully above the surface by more than the radius.
        assert_eq!(submerged_volume(1.0, radius, 0.0), 0.0);
        // Fully below.
        assert_relative_eq!(submerged_volume(-1.0, radius, 0.0), volume);
        // Half submerged: center exactly at the surface. acos(0) = π/2, so
        // the central angle is π and the triangle term vanishes.
        assert_relative_eq!(submerged_volume(0.0, radius, 0.0), volume / 2.0);
    }

    #[test]
    fn test_submerged_volume_grows_with_depth() {
        let radius: f64 = 0.5;
        let volume = (4.0 / 3.0) * PI * radius.powi(3);

        let shallow = submerged_volume(0.3, radius, 0.0);
        let half = submerged_volume(0.0, radius, 0.0);
        let deep = submerged_volume(-0.25, radius, 0.0);
        let full = submerged_volume(-1.0, radius, 0.0);

        assert!(shallow > 0.0);
        assert!(half > shallow);
        assert!(deep > half);
        assert!(full > deep);
        assert_relative_eq!(full, volume);
    }

    #[test]
    fn test_buoyancy_pushes_up_under_downward_gravity() {
        let mut body =
            Body::circle(Vec2::new(0.0, -2.0), 0.5, 0.5, false, Material::birch()).unwrap();
        let water = Liquid::water(vec![
            Vec2::new(-10.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, -10.0),
            Vec2::new(-10.0, -10.0),
        ]);

        apply_fluid_forces(&mut body, 0.5, &water, Vec2::new(0.0, -9.81));

        assert!(body.fluid_displacement.y > 0.0);
        assert_eq!(body.fluid_displacement.x, 0.0);
    }

    #[test]
    fn test_fluid_drag_opposes_motion() {
        let mut body =
            Body::circle(Vec2::new(0.0, -2.0), 0.5, 0.5, false, Material::steel()).unwrap();
        body.linear_velocity = Vec2::new(3.0, 0.0);
        let water = Liquid::water(vec![
            Vec2::new(-10.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, -10.0),
            Vec2::new(-10.0, -10.0),
        ]);

        apply_fluid_forces(&mut body, 0.5, &water, Vec2::new(0.0, -9.81));

        assert!(body.fluid_displacement.x < 0.0);
    }

    #[test]
    fn test_air_drag_opposes_motion_and_rest_is_free() {
        let mut moving =
            Body::circle(Vec2::ZERO, 0.5, 0.5, false, Material::glass()).unwrap();
        moving.linear_velocity = Vec2::new(0.0, -4.0);
        apply_air_drag(&mut moving);
        assert!(moving.fluid_displacement.y > 0.0);

        let mut resting =
            Body::circle(Vec2::ZERO, 0.5, 0.5, false, Material::glass()).unwrap();
        apply_air_drag(&mut resting);
        assert_eq!(resting.fluid_displacement, Vec2::ZERO);
    }
}
