//! Core types for the planar 2D physics engine.
//!
//! This crate provides the foundational data types shared by the collision
//! and engine crates:
//!
//! - [`Vec2`] - 2D vector algebra
//! - [`Shape`] - circle / convex-polygon collision geometry
//! - [`Material`] - named physical presets (density + render color)
//! - [`Liquid`] - a static fluid region with a cached surface height
//! - [`SimulationConfig`] - gravity and loop timing
//! - [`PhysicsError`] - the construction-time failure condition
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They have no physics and no integration;
//! they are the common language between the collision routines
//! (planar-contact), the engine (planar-core), and external consumers such
//! as rendering, which reads positions, radii, vertices, and colors.
//!
//! # Coordinate System
//!
//! - X: right
//! - Y: up
//! - Rotations in radians, counter-clockwise
//!
//! Polygon vertices are stored relative to the owning body's position.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,   // Float arithmetic keeps most methods non-const
    clippy::suboptimal_flops,       // mul_add style changes aren't always clearer
)]

mod config;
mod error;
mod liquid;
mod material;
mod shape;
mod vec2;

pub use config::SimulationConfig;
pub use error::PhysicsError;
pub use liquid::{Liquid, LiquidKind};
pub use material::{Material, MaterialKind, Rgb};
pub use shape::Shape;
pub use vec2::{nearly_equal, Vec2};

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, PhysicsError>;
