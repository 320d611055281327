//! Fully resolved scene data produced by the layout engine.

use crate::models::library::MaterialDefinition;
use crate::models::module::{CarcassConfig, HandleConfig, ModuleKind, ModuleStructure};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Cartesian vector in layout units (positions) or radians (rotations).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Whether all components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Concrete size of a module.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Extent along the layout line
    pub width: f64,
    /// Vertical extent
    pub height: f64,
    /// Extent perpendicular to the line
    pub depth: f64,
}

impl Dimensions {
    /// Creates dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Whether every extent is finite and strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|extent| extent.is_finite() && *extent > 0.0)
    }
}

/// Materials attached to a module after key resolution.
///
/// Absent slots mean "use the renderer's fallback", not failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedMaterials {
    /// Facade material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facade: Option<MaterialDefinition>,
    /// Countertop material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countertop: Option<MaterialDefinition>,
    /// Handle material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<MaterialDefinition>,
}

/// A positioned, dimensioned, material-resolved output unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableModule {
    /// Module id (handles use `<parent>-handle`)
    pub id: String,
    /// Module type, used by renderers to pick a builder
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    /// Catalog variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Absolute position
    pub position: Vec3,
    /// Euler rotation in radians
    pub rotation: Vec3,
    /// Concrete size
    pub dimensions: Dimensions,
    /// Resolved materials
    pub materials: ResolvedMaterials,
    /// Internal structure; defaulted for cabinets, absent for handles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<ModuleStructure>,
    /// Carcass panels; defaulted for cabinets, absent for handles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carcass: Option<CarcassConfig>,
    /// Handle descriptor carried over from the config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<HandleConfig>,
    /// Attached sub-modules
    #[serde(default)]
    pub children: Vec<RenderableModule>,
}

impl RenderableModule {
    /// Returns a copy translated by `delta`, with direct children translated too.
    ///
    /// Grandchildren keep their positions.
    #[must_use]
    pub fn translated(&self, delta: Vec3) -> Self {
        let mut moved = self.clone();
        moved.position = self.position + delta;
        for child in &mut moved.children {
            child.position = child.position + delta;
        }
        moved
    }

    /// Minimum corner of the axis-aligned box around this module.
    #[must_use]
    pub fn min_corner(&self) -> Vec3 {
        self.position - self.half_extents()
    }

    /// Maximum corner of the axis-aligned box around this module.
    #[must_use]
    pub fn max_corner(&self) -> Vec3 {
        self.position + self.half_extents()
    }

    // Footprint of the box after its yaw; width and depth swap at 90°.
    fn half_extents(&self) -> Vec3 {
        let (sin, cos) = self.rotation.y.sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let Dimensions {
            width,
            height,
            depth,
        } = self.dimensions;
        Vec3::new(
            (cos * width + sin * depth) / 2.0,
            height / 2.0,
            (sin * width + cos * depth) / 2.0,
        )
    }
}
