//! Declarative kitchen configuration.
//!
//! This is the wire format exchanged with the UI and with an AI agent's
//! tool calls. Every section has a serde default so that a partially
//! authored config still parses; the validator reports what is missing.

use crate::models::module::{HangingModuleConfig, ModuleConfig};
use crate::models::renderable::Vec3;
use serde::{Deserialize, Serialize};

/// Physical room volume.
///
/// The room spans `x ∈ [0, side_a]`, `y ∈ [0, height]` and
/// `z ∈ [-side_b, 0]`, matching layout lines that start at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDimensions {
    /// Extent along X
    pub side_a: f64,
    /// Extent along -Z
    pub side_b: f64,
    /// Floor-to-ceiling height
    pub height: f64,
}

impl RoomDimensions {
    /// Center of the room volume.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.side_a / 2.0, self.height / 2.0, -self.side_b / 2.0)
    }
}

/// Cabinet dimension defaults applied by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CabinetDefaults {
    /// Base cabinet height (without plinth)
    pub base_height: f64,
    /// Plinth height under base and sink cabinets
    pub plinth_height: f64,
    /// Countertop depth, also the depth of floor modules
    pub countertop_depth: f64,
    /// Height of the countertop surface from the floor
    pub countertop_height: f64,
    /// Gap between countertop and the bottom of wall cabinets
    pub wall_gap: f64,
    /// Wall cabinet height
    pub wall_height: f64,
    /// Wall cabinet depth
    pub wall_depth: f64,
}

impl Default for CabinetDefaults {
    fn default() -> Self {
        Self {
            base_height: 720.0,
            plinth_height: 100.0,
            countertop_depth: 600.0,
            countertop_height: 900.0,
            wall_gap: 550.0,
            wall_height: 720.0,
            wall_depth: 350.0,
        }
    }
}

/// How the validator treats a layout line whose modules are wider than the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchPolicy {
    /// Warn and shrink auto modules
    #[default]
    Warn,
    /// Report an error and leave the line untouched
    Error,
    /// Shrink auto modules (reported as a warning)
    AutoFix,
}

/// Kitchen-wide settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    /// Room volume; required for centering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<RoomDimensions>,
    /// Cabinet dimension defaults
    #[serde(default)]
    pub cabinet: CabinetDefaults,
    /// Overflow handling
    #[serde(default)]
    pub mismatch_policy: MismatchPolicy,
    /// Gap left between consecutive modules on a line
    #[serde(default)]
    pub gap_between_modules: f64,
}

/// Global module width bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleConstraints {
    /// Smallest allowed module width
    pub min_width: f64,
    /// Largest allowed module width
    pub max_width: f64,
}

impl Default for ModuleConstraints {
    fn default() -> Self {
        Self {
            min_width: 150.0,
            max_width: 1200.0,
        }
    }
}

/// Handle placement constraints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandleConstraints {
    /// Distance kept between a handle and the front's top or bottom edge
    pub edge_clearance: f64,
}

impl Default for HandleConstraints {
    fn default() -> Self {
        Self {
            edge_clearance: 40.0,
        }
    }
}

/// Constraints the validator enforces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalConstraints {
    /// Module width bounds
    #[serde(default)]
    pub modules: ModuleConstraints,
    /// Handle constraints
    #[serde(default)]
    pub handles: HandleConstraints,
}

/// Kitchen-wide material keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DefaultMaterials {
    /// Facade material key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facade: Option<String>,
    /// Countertop material key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countertop: Option<String>,
    /// Handle material key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
}

/// Unit direction of a layout line in the X/Z plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    /// X component
    pub x: f64,
    /// Z component
    pub z: f64,
}

impl Direction {
    /// Along +X.
    pub const POSITIVE_X: Self = Self { x: 1.0, z: 0.0 };
    /// Along -Z.
    pub const NEGATIVE_Z: Self = Self { x: 0.0, z: -1.0 };

    /// Whether the layout engine has a dedicated rotation for this direction.
    #[must_use]
    pub fn is_canonical(self) -> bool {
        self == Self::POSITIVE_X || self == Self::NEGATIVE_Z
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::POSITIVE_X
    }
}

/// A directed track along a wall on which modules are placed in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutLine {
    /// Physical length of the line
    pub length: f64,
    /// Placement direction
    #[serde(default)]
    pub direction: Direction,
    /// Modules in placement order
    #[serde(default)]
    pub modules: Vec<ModuleConfig>,
}

impl LayoutLine {
    /// Creates a line with no modules.
    #[must_use]
    pub fn new(length: f64, direction: Direction) -> Self {
        Self {
            length,
            direction,
            modules: Vec::new(),
        }
    }

    /// Appends a module.
    pub fn with_module(mut self, module: ModuleConfig) -> Self {
        self.modules.push(module);
        self
    }
}

/// The declarative kitchen description fed to the validator and layout engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenConfig {
    /// Stable identifier
    #[serde(default)]
    pub kitchen_id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Free-form style label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Kitchen-wide settings
    #[serde(default)]
    pub global_settings: GlobalSettings,
    /// Validator constraints
    #[serde(default)]
    pub global_constraints: GlobalConstraints,
    /// Default material keys
    #[serde(default)]
    pub default_materials: DefaultMaterials,
    /// Layout lines in order
    #[serde(default)]
    pub layout_lines: Vec<LayoutLine>,
    /// Wall-mounted modules
    #[serde(default)]
    pub hanging_modules: Vec<HangingModuleConfig>,
}

impl KitchenConfig {
    /// Parses a config from JSON, falling back to JSON5 for hand-written
    /// files with comments or trailing commas.
    pub fn from_json_str(source: &str) -> anyhow::Result<Self> {
        match serde_json::from_str(source) {
            Ok(config) => Ok(config),
            Err(json_err) => json5::from_str(source).map_err(|json5_err| {
                anyhow::anyhow!("Invalid kitchen config: {json_err} (JSON5: {json5_err})")
            }),
        }
    }

    /// Whether any layout line holds a module with this id.
    #[must_use]
    pub fn has_module(&self, id: &str) -> bool {
        self.modules().any(|module| module.id == id)
    }

    /// All modules on all layout lines, in line order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleConfig> {
        self.layout_lines.iter().flat_map(|line| line.modules.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::module::ModuleWidth;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: KitchenConfig = serde_json::from_str("{}").unwrap();
        assert!(config.layout_lines.is_empty());
        assert_eq!(config.global_settings.mismatch_policy, MismatchPolicy::Warn);
        assert_eq!(config.global_settings.cabinet.base_height, 720.0);
        assert_eq!(config.global_constraints.modules.min_width, 150.0);
        assert!(config.global_settings.dimensions.is_none());
    }

    #[test]
    fn test_mismatch_policy_wire_names() {
        let policy: MismatchPolicy = serde_json::from_str("\"auto_fix\"").unwrap();
        assert_eq!(policy, MismatchPolicy::AutoFix);
        assert_eq!(
            serde_json::to_string(&MismatchPolicy::Error).unwrap(),
            "\"error\""
        );
    }

    #[test]
    fn test_json5_fallback() {
        let source = r#"{
            // authored by hand
            kitchenId: "k1",
            layoutLines: [
                { length: 1200, direction: { x: 1, z: 0 }, modules: [
                    { id: "b1", type: "base", width: "auto", },
                ] },
            ],
        }"#;
        let config = KitchenConfig::from_json_str(source).unwrap();
        assert_eq!(config.kitchen_id, "k1");
        assert_eq!(config.layout_lines[0].modules[0].width, ModuleWidth::Auto);
        assert!(config.has_module("b1"));
        assert!(!config.has_module("b2"));
    }

    #[test]
    fn test_room_center() {
        let room = RoomDimensions {
            side_a: 3000.0,
            side_b: 2000.0,
            height: 2500.0,
        };
        assert_eq!(room.center(), Vec3::new(1500.0, 1250.0, -1000.0));
    }

    #[test]
    fn test_direction_canonical() {
        assert!(Direction::POSITIVE_X.is_canonical());
        assert!(Direction::NEGATIVE_Z.is_canonical());
        assert!(!Direction { x: -1.0, z: 0.0 }.is_canonical());
    }
}
