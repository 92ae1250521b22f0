//! Simulation world container and per-tick state advance.
//!
//! The [`World`] owns every body and liquid and advances them one tick at a
//! time. A tick performs, in order:
//!
//! 1. Integration - every dynamic body runs [`Body::step`]
//! 2. Collision - every unordered pair with a dynamic member is tested,
//!    pushed apart along the contact normal, and velocity-resolved
//! 3. Fluid interaction - every dynamic circle accumulates buoyancy/drag
//!    against every liquid (or air drag when not submerged)
//!
//! The pair scan is deliberately brute force O(n²); the engine targets
//! small scenes and carries no broad phase.

use planar_contact::{
    circle_circle, circle_polygon, contact_points, liquid_circle, polygon_polygon,
    ContactManifold, Penetration,
};
use planar_types::{Liquid, Shape, SimulationConfig, Vec2};

use crate::body::Body;
use crate::fluid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A collision recorded during a tick.
///
/// Informational: the impulse magnitude never depends on the manifold, but
/// consumers (debug overlays, tests) can inspect where bodies touched.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactEvent {
    /// Index of the first body of the pair.
    pub body_a: usize,
    /// Index of the second body of the pair.
    pub body_b: usize,
    /// Contact normal, pointing from `body_a` toward `body_b`.
    pub normal: Vec2,
    /// Penetration depth that was corrected.
    pub depth: f64,
    /// Where the bodies touched.
    pub manifold: ContactManifold,
}

/// The simulation world: all bodies, all liquids, and the tick logic.
///
/// Bodies and liquids are stored in insertion order and addressed by index;
/// the order never changes, so indices are stable external handles. The
/// world itself is single-threaded; [`crate::Simulation`] wraps it for the
/// concurrent loop + render-read model.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct World {
    config: SimulationConfig,
    bodies: Vec<Body>,
    liquids: Vec<Liquid>,
    contacts: Vec<ContactEvent>,
}

impl Default for World {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl World {
    /// Create an empty world with the given configuration.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            liquids: Vec::new(),
            contacts: Vec::new(),
        }
    }

    /// The world configuration.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The global gravity vector.
    #[must_use]
    pub fn gravity(&self) -> Vec2 {
        self.config.gravity
    }

    /// Append a body, returning its index handle.
    pub fn add_body(&mut self, body: Body) -> usize {
        let index = self.bodies.len();
        tracing::debug!(index, is_static = body.is_static, "body added");
        self.bodies.push(body);
        index
    }

    /// Append a liquid, returning its index handle.
    pub fn add_liquid(&mut self, liquid: Liquid) -> usize {
        let index = self.liquids.len();
        tracing::debug!(index, "liquid added");
        self.liquids.push(liquid);
        index
    }

    /// Number of bodies.
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of liquids.
    #[must_use]
    pub fn liquid_count(&self) -> usize {
        self.liquids.len()
    }

    /// The body at `index`, or `None` when out of range.
    #[must_use]
    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Mutable access to the body at `index`, or `None` when out of range.
    pub fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    /// The liquid at `index`, or `None` when out of range.
    #[must_use]
    pub fn liquid(&self, index: usize) -> Option<&Liquid> {
        self.liquids.get(index)
    }

    /// All bodies, in insertion order.
    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// All liquids, in insertion order.
    #[must_use]
    pub fn liquids(&self) -> &[Liquid] {
        &self.liquids
    }

    /// The collisions recorded by the most recent tick.
    #[must_use]
    pub fn contacts(&self) -> &[ContactEvent] {
        &self.contacts
    }

    /// Nudge the body at `index` by `delta` (manual control input).
    ///
    /// Returns false when the index is out of range.
    pub fn move_body(&mut self, index: usize, delta: Vec2) -> bool {
        match self.bodies.get_mut(index) {
            Some(body) => {
                body.move_by(delta);
                true
            }
            None => false,
        }
    }

    /// Advance the whole world by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        let gravity = self.config.gravity;

        for body in &mut self.bodies {
            body.step(dt, gravity);
        }

        self.resolve_pairs();
        self.apply_fluid_pass(gravity);
    }

    /// Detect, correct, and resolve every colliding pair.
    fn resolve_pairs(&mut self) {
        self.contacts.clear();
        let count = self.bodies.len();

        for i in 0..count {
            for j in (i + 1)..count {
                let (head, tail) = self.bodies.split_at_mut(j);
                let body_a = &mut head[i];
                let body_b = &mut tail[0];

                if body_a.is_static && body_b.is_static {
                    continue;
                }

                let Some(Penetration { normal, depth }) = Self::collide(body_a, body_b) else {
                    continue;
                };

                let manifold = contact_points(
                    body_a.position,
                    &body_a.shape,
                    body_b.position,
                    &body_b.shape,
                );
                self.contacts.push(ContactEvent {
                    body_a: i,
                    body_b: j,
                    normal,
                    depth,
                    manifold,
                });

                // Positional correction: static bodies never move, so the
                // full push goes to the dynamic side.
                if body_a.is_static {
                    body_b.move_by(normal * depth);
                } else if body_b.is_static {
                    body_a.move_by(-(normal * depth));
                } else {
                    body_a.move_by(-(normal * depth / 2.0));
                    body_b.move_by(normal * depth / 2.0);
                }

                Self::resolve_collision(body_a, body_b, normal);
            }
        }
    }

    /// Shape-dispatch narrow phase. The normal points from A toward B.
    fn collide(body_a: &Body, body_b: &Body) -> Option<Penetration> {
        match (&body_a.shape, &body_b.shape) {
            (Shape::Polygon { vertices: vertices_a }, Shape::Polygon { vertices: vertices_b }) => {
                polygon_polygon(body_a.position, vertices_a, body_b.position, vertices_b)
            }
            (Shape::Polygon { vertices }, Shape::Circle { radius }) => {
                circle_polygon(body_b.position, *radius, body_a.position, vertices).map(|hit| {
                    Penetration {
                        normal: -hit.normal,
                        depth: hit.depth,
                    }
                })
            }
            (Shape::Circle { radius }, Shape::Polygon { vertices }) => {
                circle_polygon(body_a.position, *radius, body_b.position, vertices)
            }
            (Shape::Circle { radius: radius_a }, Shape::Circle { radius: radius_b }) => {
                circle_circle(body_a.position, *radius_a, body_b.position, *radius_b)
            }
        }
    }

    /// Impulse-based velocity resolution along the contact normal.
    fn resolve_collision(body_a: &mut Body, body_b: &mut Body, normal: Vec2) {
        let relative_velocity = body_b.linear_velocity - body_a.linear_velocity;

        // Already separating.
        if relative_velocity.dot(normal) >= 0.0 {
            return;
        }

        let restitution = body_a.restitution.min(body_b.restitution);
        let magnitude = -(1.0 + restitution) * relative_velocity.dot(normal)
            / (body_a.inverse_mass + body_b.inverse_mass);
        let impulse = normal * magnitude;

        body_a.linear_velocity -= impulse * body_a.inverse_mass;
        body_b.linear_velocity += impulse * body_b.inverse_mass;
    }

    /// Buoyancy / drag accumulation. Only circle bodies participate;
    /// polygons are skipped entirely.
    fn apply_fluid_pass(&mut self, gravity: Vec2) {
        for body in &mut self.bodies {
            if body.is_static {
                continue;
            }
            let radius = match &body.shape {
                Shape::Circle { radius } => *radius,
                Shape::Polygon { .. } => continue,
            };

            for liquid in &self.liquids {
                if liquid_circle(body.position, radius, &liquid.boundary) {
                    fluid::apply_fluid_forces(body, radius, liquid, gravity);
                } else {
                    fluid::apply_air_drag(body);
                }
            }
        }
    }

    /// Total kinetic energy over all bodies.
    #[must_use]
    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .filter(|body| !body.is_static)
            .map(|body| 0.5 * body.mass * body.linear_velocity.length_squared())
            .sum()
    }

    /// Total linear momentum over all bodies.
    #[must_use]
    pub fn total_linear_momentum(&self) -> Vec2 {
        self.bodies
            .iter()
            .filter(|body| !body.is_static)
            .fold(Vec2::ZERO, |sum, body| {
                sum + body.linear_velocity * body.mass
            })
    }
}
