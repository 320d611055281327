//! Module slot definitions placed on layout lines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cabinet category of a module.
///
/// Serialized as its lowercase name. Unknown names survive a round trip
/// through [`ModuleKind::Custom`] so renderers can key on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModuleKind {
    /// Floor-standing base cabinet
    Base,
    /// Upper cabinet
    Upper,
    /// Wall-mounted cabinet
    Wall,
    /// Floor-to-ceiling tall unit
    Tall,
    /// Base cabinet housing a sink
    Sink,
    /// Procedural handle attached to a parent module
    Handle,
    /// Any other module type known only to the catalogs and renderer
    Custom(String),
}

impl ModuleKind {
    /// Returns the catalog/wire name of this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Base => "base",
            Self::Upper => "upper",
            Self::Wall => "wall",
            Self::Tall => "tall",
            Self::Sink => "sink",
            Self::Handle => "handle",
            Self::Custom(name) => name,
        }
    }

    /// Whether this kind stands on a plinth.
    #[must_use]
    pub const fn has_plinth(&self) -> bool {
        matches!(self, Self::Base | Self::Sink)
    }
}

impl From<String> for ModuleKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "base" => Self::Base,
            "upper" => Self::Upper,
            "wall" => Self::Wall,
            "tall" => Self::Tall,
            "sink" => Self::Sink,
            "handle" => Self::Handle,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for ModuleKind {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ModuleKind> for String {
    fn from(kind: ModuleKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested module width: a concrete number or an even share of the
/// line's remaining space.
///
/// On the wire this is either a JSON number or the string `"auto"`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawWidth", into = "RawWidth")]
pub enum ModuleWidth {
    /// Fixed width in layout units
    Fixed(f64),
    /// Width resolved from remaining line space
    #[default]
    Auto,
}

impl ModuleWidth {
    /// Returns the fixed width, or `None` for `Auto`.
    #[must_use]
    pub const fn fixed(self) -> Option<f64> {
        match self {
            Self::Fixed(width) => Some(width),
            Self::Auto => None,
        }
    }

    /// Returns true for `Auto`.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawWidth {
    Number(f64),
    Text(String),
}

impl TryFrom<RawWidth> for ModuleWidth {
    type Error = String;

    fn try_from(raw: RawWidth) -> Result<Self, Self::Error> {
        match raw {
            RawWidth::Number(width) => Ok(Self::Fixed(width)),
            RawWidth::Text(text) if text == "auto" => Ok(Self::Auto),
            RawWidth::Text(text) => Err(format!(
                "invalid module width '{text}': expected a number or \"auto\""
            )),
        }
    }
}

impl From<ModuleWidth> for RawWidth {
    fn from(width: ModuleWidth) -> Self {
        match width {
            ModuleWidth::Fixed(width) => Self::Number(width),
            ModuleWidth::Auto => Self::Text("auto".to_string()),
        }
    }
}

/// Vertical reference a module is positioned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Stands on the floor
    #[default]
    Floor,
    /// Hangs above the countertop
    Countertop,
    /// Spans floor to ceiling
    FloorAndCeiling,
}

/// Vertical offset of a module.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionOffset {
    /// Offset along Y
    #[serde(default)]
    pub y: f64,
}

/// Anchor and offset of a module.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Positioning {
    /// Vertical reference
    #[serde(default)]
    pub anchor: Anchor,
    /// Vertical offset; also read as the module height (see the layout engine)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<PositionOffset>,
    /// Id of the floor module a hanging module aligns with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_with_module: Option<String>,
}

impl Positioning {
    /// Returns the declared Y offset, or 0.
    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset.map_or(0.0, |offset| offset.y)
    }
}

/// Internal layout of a cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ModuleStructure {
    /// Stack of drawers
    #[serde(rename_all = "camelCase")]
    Drawers {
        /// Front height of each drawer, top to bottom
        drawer_heights: Vec<f64>,
        /// Usable drawer depth
        internal_depth: f64,
    },
    /// Doors in front of shelves
    #[serde(rename_all = "camelCase")]
    DoorAndShelf {
        /// Number of doors
        door_count: u32,
        /// Shelf heights measured from the carcass bottom
        shelf_heights: Vec<f64>,
    },
}

impl ModuleStructure {
    /// Structure used when a module declares none: one shelf at half height
    /// behind one door, or two doors when the variant name says so.
    #[must_use]
    pub fn default_for(variant: Option<&str>, height: f64) -> Self {
        let double = variant
            .map(str::to_ascii_lowercase)
            .is_some_and(|name| name.contains("double") || name.contains('2'));

        Self::DoorAndShelf {
            door_count: if double { 2 } else { 1 },
            shelf_heights: vec![height / 2.0],
        }
    }

    /// Number of front panels (doors or drawer fronts).
    #[must_use]
    pub fn front_count(&self) -> usize {
        match self {
            Self::Drawers { drawer_heights, .. } => drawer_heights.len(),
            Self::DoorAndShelf { door_count, .. } => *door_count as usize,
        }
    }
}

/// Panel thicknesses of the cabinet box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarcassConfig {
    /// Side, top and bottom panel thickness
    #[serde(default = "default_panel_thickness")]
    pub thickness: f64,
    /// Back panel thickness
    #[serde(default = "default_back_panel_thickness")]
    pub back_panel_thickness: f64,
}

fn default_panel_thickness() -> f64 {
    18.0
}

fn default_back_panel_thickness() -> f64 {
    4.0
}

impl Default for CarcassConfig {
    fn default() -> Self {
        Self {
            thickness: default_panel_thickness(),
            back_panel_thickness: default_back_panel_thickness(),
        }
    }
}

/// Per-module material keys that take precedence over the kitchen defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaterialOverrides {
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

/// Handle bar orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleOrientation {
    /// Bar runs along the module width
    #[default]
    Horizontal,
    /// Bar runs along the module height
    Vertical,
}

/// Vertical placement of a handle on the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlePlacement {
    /// Near the top edge, inset by the handle edge clearance
    Top,
    /// At the front's center
    #[default]
    Center,
    /// Near the bottom edge, inset by the handle edge clearance
    Bottom,
}

/// Handle descriptor of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HandleConfig {
    /// Bar orientation
    #[serde(default)]
    pub orientation: HandleOrientation,
    /// Vertical placement
    #[serde(default)]
    pub placement: HandlePlacement,
}

/// An abstract cabinet slot on a layout line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConfig {
    /// Unique module id
    pub id: String,
    /// Module type
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    /// Catalog variant; `"default"` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Requested width
    #[serde(default)]
    pub width: ModuleWidth,
    /// Width written by the validator when it shrinks auto modules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_width: Option<f64>,
    /// Anchor and offset
    #[serde(default)]
    pub positioning: Positioning,
    /// Internal structure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<ModuleStructure>,
    /// Carcass panels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carcass: Option<CarcassConfig>,
    /// Material keys overriding the kitchen defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_overrides: Option<MaterialOverrides>,
    /// Handle descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<HandleConfig>,
}

impl ModuleConfig {
    /// Creates a module with default positioning and no optional sections.
    pub fn new(id: impl Into<String>, kind: impl Into<ModuleKind>, width: ModuleWidth) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            variant: None,
            width,
            final_width: None,
            positioning: Positioning::default(),
            structure: None,
            carcass: None,
            material_overrides: None,
            handle: None,
        }
    }

    /// Sets the catalog variant.
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Sets the vertical offset.
    pub fn with_offset_y(mut self, y: f64) -> Self {
        self.positioning.offset = Some(PositionOffset { y });
        self
    }

    /// Sets the material overrides.
    pub fn with_overrides(mut self, overrides: MaterialOverrides) -> Self {
        self.material_overrides = Some(overrides);
        self
    }

    /// Sets the handle descriptor.
    pub fn with_handle(mut self, handle: HandleConfig) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Catalog variant name, falling back to `"default"`.
    #[must_use]
    pub fn variant_name(&self) -> &str {
        self.variant.as_deref().unwrap_or("default")
    }

    /// Width the layout engine treats as fixed: the validator's
    /// `final_width` when set, else a numeric `width`.
    #[must_use]
    pub fn fixed_width(&self) -> Option<f64> {
        self.final_width.or_else(|| self.width.fixed())
    }
}

/// A wall-mounted module aligned with a floor module.
///
/// Shares the module fields; the anchor is always `countertop` and
/// `positioning.alignWithModule` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModuleConfig", into = "ModuleConfig")]
pub struct HangingModuleConfig {
    module: ModuleConfig,
    align_with: String,
}

impl HangingModuleConfig {
    /// Creates a hanging module aligned with `align_with`.
    pub fn new(mut module: ModuleConfig, align_with: impl Into<String>) -> Self {
        let align_with = align_with.into();
        module.positioning.anchor = Anchor::Countertop;
        module.positioning.align_with_module = Some(align_with.clone());
        Self { module, align_with }
    }

    /// Id of the floor module this one hangs above.
    #[must_use]
    pub fn align_with_module(&self) -> &str {
        &self.align_with
    }

    /// The underlying module fields.
    #[must_use]
    pub const fn module(&self) -> &ModuleConfig {
        &self.module
    }
}

impl TryFrom<ModuleConfig> for HangingModuleConfig {
    type Error = String;

    fn try_from(module: ModuleConfig) -> Result<Self, Self::Error> {
        let align_with = module
            .positioning
            .align_with_module
            .clone()
            .ok_or_else(|| {
                format!(
                    "hanging module '{}' is missing positioning.alignWithModule",
                    module.id
                )
            })?;
        Ok(Self::new(module, align_with))
    }
}

impl From<HangingModuleConfig> for ModuleConfig {
    fn from(hanging: HangingModuleConfig) -> Self {
        hanging.module
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_wire_format() {
        let fixed: ModuleWidth = serde_json::from_str("600").unwrap();
        assert_eq!(fixed, ModuleWidth::Fixed(600.0));

        let auto: ModuleWidth = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(auto, ModuleWidth::Auto);

        assert!(serde_json::from_str::<ModuleWidth>("\"wide\"").is_err());
        assert_eq!(serde_json::to_string(&ModuleWidth::Auto).unwrap(), "\"auto\"");
    }

    #[test]
    fn test_module_kind_round_trip_custom() {
        let kind: ModuleKind = serde_json::from_str("\"corner\"").unwrap();
        assert_eq!(kind, ModuleKind::Custom("corner".to_string()));
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"corner\"");
        assert_eq!(ModuleKind::from("sink"), ModuleKind::Sink);
        assert!(ModuleKind::Sink.has_plinth());
        assert!(!ModuleKind::Tall.has_plinth());
    }

    #[test]
    fn test_structure_tagged_union() {
        let json = r#"{"type": "drawers", "drawerHeights": [140, 280], "internalDepth": 480}"#;
        let structure: ModuleStructure = serde_json::from_str(json).unwrap();
        assert_eq!(structure.front_count(), 2);

        let json = r#"{"type": "door-and-shelf", "doorCount": 2, "shelfHeights": [300]}"#;
        let structure: ModuleStructure = serde_json::from_str(json).unwrap();
        assert!(matches!(
            structure,
            ModuleStructure::DoorAndShelf { door_count: 2, .. }
        ));
    }

    #[test]
    fn test_default_structure_door_count() {
        let single = ModuleStructure::default_for(Some("default"), 720.0);
        let double = ModuleStructure::default_for(Some("double"), 720.0);
        assert_eq!(single.front_count(), 1);
        assert_eq!(double.front_count(), 2);
        assert_eq!(ModuleStructure::default_for(None, 720.0).front_count(), 1);
    }

    #[test]
    fn test_hanging_module_requires_alignment() {
        let json = r#"{"id": "w1", "type": "wall", "width": "auto"}"#;
        assert!(serde_json::from_str::<HangingModuleConfig>(json).is_err());

        let json = r#"{"id": "w1", "type": "wall", "width": "auto",
            "positioning": {"anchor": "floor", "alignWithModule": "b1"}}"#;
        let hanging: HangingModuleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(hanging.align_with_module(), "b1");
        assert_eq!(hanging.module().positioning.anchor, Anchor::Countertop);
    }

    #[test]
    fn test_fixed_width_prefers_final_width() {
        let mut module = ModuleConfig::new("m", "base", ModuleWidth::Auto);
        assert_eq!(module.fixed_width(), None);
        module.final_width = Some(250.0);
        assert_eq!(module.fixed_width(), Some(250.0));
    }
}
