//! Rigid bodies and their per-step integration.

use std::f64::consts::{PI, TAU};

use planar_types::{Material, PhysicsError, Result, Shape, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rigid body: collision geometry, mass properties, kinematic state, and
/// the force accumulators consumed by [`step`](Body::step).
///
/// Bodies are constructed only through the validated factories
/// ([`circle`](Body::circle), [`regular_polygon`](Body::regular_polygon),
/// [`box_from_corners`](Body::box_from_corners)) and added to a world by
/// value. Static bodies have `inverse_mass == 0` and never move.
///
/// # Example
///
/// ```
/// use planar_core::Body;
/// use planar_types::{Material, Vec2};
///
/// let ball = Body::circle(Vec2::new(0.0, 5.0), 0.5, 0.8, false, Material::birch())
///     .unwrap();
/// assert!(ball.mass > 0.0);
/// assert_eq!(ball.inverse_mass, 1.0 / ball.mass);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Body {
    /// Collision geometry. Polygon vertices are relative to `position`.
    pub shape: Shape,
    /// Centroid in world space.
    pub position: Vec2,
    /// Linear velocity.
    pub linear_velocity: Vec2,
    /// Orientation in radians.
    pub rotation: f64,
    /// Angular velocity in radians per second.
    pub rotational_velocity: f64,
    /// External force accumulated for the current step.
    pub applied_force: Vec2,
    /// Drag/buoyancy force accumulated for the current step.
    pub fluid_displacement: Vec2,
    /// Shape area, derived at construction.
    pub area: f64,
    /// Material density, copied at construction.
    pub density: f64,
    /// Mass (`area * density`).
    pub mass: f64,
    /// `1 / mass` for dynamic bodies, `0` for static ones.
    pub inverse_mass: f64,
    /// Coefficient of restitution in `[0, 1]`.
    pub restitution: f64,
    /// Whether this body is immovable.
    pub is_static: bool,
    /// The material the body is made of.
    pub material: Material,
}

impl Body {
    fn new(
        shape: Shape,
        position: Vec2,
        area: f64,
        restitution: f64,
        is_static: bool,
        material: Material,
    ) -> Self {
        let mass = area * material.density;
        let inverse_mass = if is_static { 0.0 } else { 1.0 / mass };

        Self {
            shape,
            position,
            linear_velocity: Vec2::ZERO,
            rotation: 0.0,
            rotational_velocity: 0.0,
            applied_force: Vec2::ZERO,
            fluid_displacement: Vec2::ZERO,
            area,
            density: material.density,
            mass,
            inverse_mass,
            restitution,
            is_static,
            material,
        }
    }

    /// Create a circle body.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidArgument`] when `radius` is above 100
    /// or below 0.001.
    pub fn circle(
        position: Vec2,
        radius: f64,
        restitution: f64,
        is_static: bool,
        material: Material,
    ) -> Result<Self> {
        if !(0.001..=100.0).contains(&radius) {
            return Err(PhysicsError::invalid_argument(format!(
                "circle radius {radius} outside [0.001, 100]"
            )));
        }

        let area = PI * radius * radius;
        Ok(Self::new(
            Shape::circle(radius),
            position,
            area,
            restitution,
            is_static,
            material,
        ))
    }

    /// Create a regular polygon body with the given circumradius.
    ///
    /// Vertices are generated evenly spaced around the circumradius circle,
    /// relative to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidArgument`] when `vertex_count < 3` or
    /// `radius` is outside `[0.1, 100]`.
    pub fn regular_polygon(
        vertex_count: usize,
        position: Vec2,
        radius: f64,
        restitution: f64,
        is_static: bool,
        material: Material,
    ) -> Result<Self> {
        if vertex_count < 3 {
            return Err(PhysicsError::invalid_argument(format!(
                "polygon needs at least 3 vertices, got {vertex_count}"
            )));
        }
        if !(0.1..=100.0).contains(&radius) {
            return Err(PhysicsError::invalid_argument(format!(
                "polygon radius {radius} outside [0.1, 100]"
            )));
        }

        #[allow(clippy::cast_precision_loss)]
        let n = vertex_count as f64;
        let area = 0.5 * radius * radius * n * (TAU / n).sin();

        let angle_increment = TAU / n;
        let vertices = (0..vertex_count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let angle = angle_increment * i as f64;
                Vec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();

        Ok(Self::new(
            Shape::polygon(vertices),
            position,
            area,
            restitution,
            is_static,
            material,
        ))
    }

    /// Create an axis-aligned box body from two opposite corners.
    ///
    /// The position is `(first + second) / 4` (the engine's centroid
    /// convention for boxes); the four vertices sit at
    /// `(±width/2, ±height/2)` relative to it.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidArgument`] when the corners are equal
    /// or the area `|Δx|·|Δy|` falls outside `[1, 1500]`.
    pub fn box_from_corners(
        first: Vec2,
        second: Vec2,
        restitution: f64,
        is_static: bool,
        material: Material,
    ) -> Result<Self> {
        if first == second {
            return Err(PhysicsError::invalid_argument(
                "box corners must be distinct",
            ));
        }

        let width = (first.x - second.x).abs();
        let height = (first.y - second.y).abs();
        let area = width * height;

        if !(1.0..=1500.0).contains(&area) {
            return Err(PhysicsError::invalid_argument(format!(
                "box area {area} outside [1, 1500]"
            )));
        }

        let position = (first + second) / 4.0;

        let half_width = width / 2.0;
        let half_height = height / 2.0;
        let vertices = vec![
            Vec2::new(-half_width, half_height),
            Vec2::new(half_width, half_height),
            Vec2::new(half_width, -half_height),
            Vec2::new(-half_width, -half_height),
        ];

        Ok(Self::new(
            Shape::polygon(vertices),
            position,
            area,
            restitution,
            is_static,
            material,
        ))
    }

    /// The circle radius, if this body is a circle.
    #[must_use]
    pub fn radius(&self) -> Option<f64> {
        match &self.shape {
            Shape::Circle { radius } => Some(*radius),
            Shape::Polygon { .. } => None,
        }
    }

    /// The position-relative vertices, if this body is a polygon.
    #[must_use]
    pub fn vertices(&self) -> Option<&[Vec2]> {
        match &self.shape {
            Shape::Circle { .. } => None,
            Shape::Polygon { vertices } => Some(vertices),
        }
    }

    /// The world-space vertices, if this body is a polygon.
    #[must_use]
    pub fn world_vertices(&self) -> Option<Vec<Vec2>> {
        self.vertices()
            .map(|vertices| vertices.iter().map(|v| *v + self.position).collect())
    }

    /// Translate the body. Used by the simulation (positional correction)
    /// and by manual control input.
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Accumulate an external force for the current step.
    pub fn apply_force(&mut self, force: Vec2) {
        if !self.is_static {
            self.applied_force += force;
        }
    }

    /// Rotate polygon vertices about the body position. No-op for circles.
    ///
    /// Vertices are position-relative, so rotating about the body position
    /// means rotating them about the origin.
    pub fn rotate(&mut self, angle: f64) {
        if let Shape::Polygon { vertices } = &mut self.shape {
            let (sin, cos) = angle.sin_cos();
            for vertex in vertices {
                let Vec2 { x, y } = *vertex;
                *vertex = Vec2::new(x * cos - y * sin, x * sin + y * cos);
            }
        }
    }

    /// Advance the body by `dt` seconds under the given gravity.
    ///
    /// No-op for static bodies. Consumes and resets both force
    /// accumulators. The position update carries an `inverse_mass` factor
    /// on the quadratic term.
    pub fn step(&mut self, dt: f64, gravity: Vec2) {
        if self.is_static {
            return;
        }

        let mut acceleration = (self.applied_force + self.fluid_displacement) * self.inverse_mass;
        acceleration += gravity;

        self.linear_velocity += acceleration * dt;
        self.position +=
            self.linear_velocity * dt + acceleration * (0.5 * dt * dt * self.inverse_mass);
        self.rotation += self.rotational_velocity * dt;

        self.fluid_displacement = Vec2::ZERO;
        self.applied_force = Vec2::ZERO;
    }
}
