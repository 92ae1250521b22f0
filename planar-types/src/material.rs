//! Named physical material presets.
//!
//! A [`Material`] is purely descriptive: its density feeds the body's mass
//! computation, its color is consumed by rendering. The five presets fix
//! density/color pairs; there is nothing to validate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Rgb {
    /// Create a color from 8-bit channel values.
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }
}

/// The material a preset describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MaterialKind {
    /// Light wood, floats readily.
    Birch,
    /// Dense structural metal.
    Steel,
    /// Heavier wood.
    Oak,
    /// Soda-lime glass.
    Glass,
    /// Light metal.
    Aluminum,
}

/// A physical material: density plus render color.
///
/// Immutable once constructed; obtain one via the presets.
///
/// # Example
///
/// ```
/// use planar_types::Material;
///
/// let steel = Material::steel();
/// assert_eq!(steel.density, 7850.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    /// Mass per unit area (kg/m³ in the reference data).
    pub density: f64,
    /// Render color.
    pub color: Rgb,
    /// Which preset this is.
    pub kind: MaterialKind,
}

impl Material {
    /// Birch wood (density 610).
    #[must_use]
    pub fn birch() -> Self {
        Self {
            density: 610.0,
            color: Rgb::from_u8(222, 184, 135),
            kind: MaterialKind::Birch,
        }
    }

    /// Steel (density 7850).
    #[must_use]
    pub fn steel() -> Self {
        Self {
            density: 7850.0,
            color: Rgb::from_u8(70, 130, 180),
            kind: MaterialKind::Steel,
        }
    }

    /// Oak wood (density 710).
    #[must_use]
    pub fn oak() -> Self {
        Self {
            density: 710.0,
            color: Rgb::from_u8(139, 69, 19),
            kind: MaterialKind::Oak,
        }
    }

    /// Glass (density 2500).
    #[must_use]
    pub fn glass() -> Self {
        Self {
            density: 2500.0,
            color: Rgb::from_u8(0, 191, 255),
            kind: MaterialKind::Glass,
        }
    }

    /// Aluminum (density 2700).
    #[must_use]
    pub fn aluminum() -> Self {
        Self {
            density: 2700.0,
            color: Rgb::from_u8(176, 196, 222),
            kind: MaterialKind::Aluminum,
        }
    }
}
