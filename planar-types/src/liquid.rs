//! Fluid regions.

use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fluid a region contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LiquidKind {
    /// Plain water.
    Water,
}

/// A static fluid region bounded by a polygon.
///
/// The boundary is treated as immutable after construction;
/// `highest_boundary_y` is derived once and must stay consistent with it.
/// Viscosity and surface tension are carried for completeness but do not
/// participate in force computation.
///
/// No boundary validation is performed (it is not required to be convex or
/// closed) — callers are responsible for supplying a valid polygon.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Liquid {
    /// Fluid density (kg/m³).
    pub density: f64,
    /// Dynamic viscosity. Stored, unused by the force model.
    pub viscosity: f64,
    /// Surface tension coefficient (mN/m). Stored, unused by the force model.
    pub surface_tension: f64,
    /// Boundary polygon in world space (at least one point).
    pub boundary: Vec<Vec2>,
    /// Cached maximum y over the boundary points; the fluid surface height.
    pub highest_boundary_y: f64,
    /// Which fluid this is.
    pub kind: LiquidKind,
}

impl Liquid {
    /// Create a body of water: density 997, viscosity 0, surface tension 72.
    #[must_use]
    pub fn water(boundary: Vec<Vec2>) -> Self {
        let highest_boundary_y = boundary.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        Self {
            density: 997.0,
            viscosity: 0.0,
            surface_tension: 72.0,
            boundary,
            highest_boundary_y,
            kind: LiquidKind::Water,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_parameters() {
        let water = Liquid::water(vec![Vec2::new(0.0, 1.0)]);
        assert_eq!(water.density, 997.0);
        assert_eq!(water.viscosity, 0.0);
        assert_eq!(water.surface_tension, 72.0);
        assert_eq!(water.kind, LiquidKind::Water);
    }

    #[test]
    fn test_highest_boundary() {
        let water = Liquid::water(vec![
            Vec2::new(-20.0, 0.0),
            Vec2::new(20.0, 0.0),
            Vec2::new(20.0, -15.0),
            Vec2::new(-20.0, -15.0),
        ]);
        assert_eq!(water.highest_boundary_y, 0.0);

        // A fully submerged region below the origin keeps its true surface.
        let deep = Liquid::water(vec![
            Vec2::new(-1.0, -2.0),
            Vec2::new(1.0, -2.0),
            Vec2::new(1.0, -5.0),
            Vec2::new(-1.0, -5.0),
        ]);
        assert_eq!(deep.highest_boundary_y, -2.0);
    }
}
