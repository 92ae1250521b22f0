//! 2D rigid-body dynamics with fluid interaction.
//!
//! This crate is the engine layer: it owns the bodies, advances them, and
//! runs the concurrent simulation loop. It builds on [`planar_types`] for
//! the data vocabulary and [`planar_contact`] for the narrow-phase
//! algorithms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Simulation                             │
//! │  Background loop + thread-safe handle; copy-on-read          │
//! │  snapshots for the render path                               │
//! └─────────────────────────┬───────────────────────────────────┘
//! ┌─────────────────────────▼───────────────────────────────────┐
//! │                         World                                │
//! │  Bodies, liquids, per-tick advance: integrate → collide →    │
//! │  correct → resolve → fluid forces                            │
//! └───────────┬─────────────────────────────────┬───────────────┘
//! ┌───────────▼───────────────┐   ┌─────────────▼───────────────┐
//! │      planar-contact       │   │           Body               │
//! │  SAT, circle tests,       │   │  Factories, integration,     │
//! │  contact manifolds        │   │  force accumulators          │
//! └───────────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use planar_core::{Body, World};
//! use planar_types::{Material, SimulationConfig, Vec2};
//!
//! let mut world = World::new(SimulationConfig::default());
//! world.add_body(
//!     Body::circle(Vec2::new(0.0, 10.0), 0.5, 0.8, false, Material::birch()).unwrap(),
//! );
//!
//! // Deterministic fixed stepping (tests, headless runs):
//! for _ in 0..240 {
//!     world.tick(1.0 / 240.0);
//! }
//! assert!(world.body(0).unwrap().position.y < 10.0);
//! ```
//!
//! For the concurrent two-thread model (simulation + render), wrap the
//! world in a [`Simulation`] and see that type's documentation for the
//! concurrency contract.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,   // Float arithmetic keeps most methods non-const
    clippy::suboptimal_flops,       // mul_add style changes aren't always clearer
)]

mod body;
pub mod fluid;
mod runner;
mod world;

pub use body::Body;
pub use runner::{Simulation, WorldSnapshot};
pub use world::{ContactEvent, World};

// Re-export the lower layers for convenience.
pub use planar_contact::{ContactManifold, Penetration};
pub use planar_types::{
    Liquid, LiquidKind, Material, MaterialKind, PhysicsError, Rgb, Shape, SimulationConfig, Vec2,
};
