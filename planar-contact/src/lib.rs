//! Narrow-phase collision detection and contact generation.
//!
//! This crate is a stateless algorithm library consumed by the engine crate
//! per candidate body pair. It builds on [`planar_types`] for the geometry
//! vocabulary and carries no simulation state of its own, which keeps every
//! routine trivially testable in isolation.
//!
//! - [`circle_circle`] - closed-form circle overlap test
//! - [`polygon_polygon`] - separating-axis test for convex polygons
//! - [`circle_polygon`] - SAT with a closest-vertex axis for the vertex
//!   region
//! - [`liquid_circle`] - axis-aligned submersion test for fluid regions
//! - [`contact_points`] - world-space contact manifold for a colliding pair
//!
//! All overlap tests report a [`Penetration`] whose normal points from the
//! first shape toward the second, matching the direction the engine pushes
//! the pair apart.
//!
//! # Example
//!
//! ```
//! use planar_contact::circle_circle;
//! use planar_types::Vec2;
//!
//! let hit = circle_circle(Vec2::ZERO, 1.0, Vec2::new(1.5, 0.0), 1.0)
//!     .unwrap();
//! assert_eq!(hit.depth, 0.5);
//! assert_eq!(hit.normal, Vec2::new(1.0, 0.0));
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,   // Float arithmetic keeps most functions non-const
    clippy::suboptimal_flops,       // mul_add style changes aren't always clearer
)]

mod manifold;
mod narrow;

pub use manifold::{contact_points, ContactManifold};
pub use narrow::{circle_circle, circle_polygon, liquid_circle, polygon_polygon, Penetration};
