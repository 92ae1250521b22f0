//! Simulation configuration.

use std::time::Duration;

use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a simulation world and its loop.
///
/// # Example
///
/// ```
/// use planar_types::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// assert_eq!(config.gravity.y, -9.81);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Global gravitational acceleration applied to every dynamic body.
    pub gravity: Vec2,
    /// Sleep inserted between loop iterations. The integration timestep
    /// itself is the measured wall-clock delta, not this interval.
    pub tick_interval: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, -9.81),
            tick_interval: Duration::from_millis(5),
        }
    }
}

impl SimulationConfig {
    /// Set the gravity vector.
    #[must_use]
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Disable gravity.
    #[must_use]
    pub fn zero_gravity(mut self) -> Self {
        self.gravity = Vec2::ZERO;
        self
    }

    /// Set the loop sleep interval.
    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PhysicsError::InvalidArgument`] when gravity is not
    /// finite.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.gravity.is_finite() {
            return Err(crate::PhysicsError::invalid_argument(
                "gravity must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.gravity, Vec2::new(0.0, -9.81));
        assert_eq!(config.tick_interval, Duration::from_millis(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = SimulationConfig::default()
            .zero_gravity()
            .with_tick_interval(Duration::from_millis(1));
        assert_eq!(config.gravity, Vec2::ZERO);
        assert_eq!(config.tick_interval, Duration::from_millis(1));
    }

    #[test]
    fn test_validate_rejects_non_finite_gravity() {
        let config = SimulationConfig::default().with_gravity(Vec2::new(0.0, f64::NAN));
        assert!(config.validate().is_err());
    }
}
