//! Material and module catalogs.
//!
//! Both catalogs are read-only inputs to the engines. They are passed
//! explicitly into every entry point rather than read from globals.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Renderer-facing description of a surface material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDefinition {
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Base color as a hex string (e.g. "#f2efe9")
    pub color: String,
    /// PBR roughness (0.0 - 1.0)
    #[serde(default = "default_roughness")]
    pub roughness: f64,
    /// PBR metalness (0.0 - 1.0)
    #[serde(default)]
    pub metalness: f64,
    /// Optional texture asset path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
}

fn default_roughness() -> f64 {
    0.5
}

/// Handle catalog entry: a model source plus its material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleMaterial {
    /// Model asset the renderer loads for this handle
    pub source: String,
    /// Surface material
    pub material: MaterialDefinition,
}

/// Catalog of materials keyed by slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialLibrary {
    /// Facade materials
    #[serde(default)]
    pub facades: BTreeMap<String, MaterialDefinition>,
    /// Countertop materials
    #[serde(default)]
    pub countertops: BTreeMap<String, MaterialDefinition>,
    /// Handle models and materials
    #[serde(default)]
    pub handles: BTreeMap<String, HandleMaterial>,
}

impl MaterialLibrary {
    /// Loads the catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        let json_data = include_str!("../engine/data/materials.json");
        serde_json::from_str(json_data).context("Failed to parse embedded materials.json")
    }

    /// Looks up a facade material.
    #[must_use]
    pub fn facade(&self, key: &str) -> Option<&MaterialDefinition> {
        self.facades.get(key)
    }

    /// Looks up a countertop material.
    #[must_use]
    pub fn countertop(&self, key: &str) -> Option<&MaterialDefinition> {
        self.countertops.get(key)
    }

    /// Looks up a handle's material (the model source is not surfaced).
    #[must_use]
    pub fn handle(&self, key: &str) -> Option<&MaterialDefinition> {
        self.handles.get(key).map(|entry| &entry.material)
    }
}

/// Width bounds and defaults of one module variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantConstraints {
    /// Smallest allowed width
    pub min_width: f64,
    /// Largest allowed width
    pub max_width: f64,
    /// Catalog height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_height: Option<f64>,
    /// Nominal width used when an auto module has to be shrunk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_width: Option<f64>,
}

/// All variants of one module type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModuleTypeDefinition {
    /// Variants keyed by name
    #[serde(default)]
    pub variants: BTreeMap<String, VariantConstraints>,
}

/// Catalog of module types and their variants.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleLibrary {
    /// Module types keyed by type name
    pub types: BTreeMap<String, ModuleTypeDefinition>,
}

impl ModuleLibrary {
    /// Loads the catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        let json_data = include_str!("../engine/data/modules.json");
        serde_json::from_str(json_data).context("Failed to parse embedded modules.json")
    }

    /// Looks up a type/variant pair.
    #[must_use]
    pub fn variant(&self, module_type: &str, variant: &str) -> Option<&VariantConstraints> {
        self.types
            .get(module_type)
            .and_then(|definition| definition.variants.get(variant))
    }

    /// Adds or replaces a variant.
    pub fn insert_variant(
        &mut self,
        module_type: impl Into<String>,
        variant: impl Into<String>,
        constraints: VariantConstraints,
    ) {
        self.types
            .entry(module_type.into())
            .or_default()
            .variants
            .insert(variant.into(), constraints);
    }
}
