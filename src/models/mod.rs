//! Data models for kitchen configurations, catalogs, and resolved scene data.
//!
//! This module contains all the core data structures shared by the engines.
//! Models are independent of the engines and of any rendering concerns.

pub mod kitchen;
pub mod library;
pub mod module;
pub mod renderable;

// Re-export all model types
pub use kitchen::{
    CabinetDefaults, DefaultMaterials, Direction, GlobalConstraints, GlobalSettings,
    HandleConstraints, KitchenConfig, LayoutLine, MismatchPolicy, ModuleConstraints,
    RoomDimensions,
};
pub use library::{
    HandleMaterial, MaterialDefinition, MaterialLibrary, ModuleLibrary, ModuleTypeDefinition,
    VariantConstraints,
};
pub use module::{
    Anchor, CarcassConfig, HandleConfig, HandleOrientation, HandlePlacement,
    HangingModuleConfig, MaterialOverrides, ModuleConfig, ModuleKind, ModuleStructure,
    ModuleWidth, PositionOffset, Positioning,
};
pub use renderable::{Dimensions, RenderableModule, ResolvedMaterials, Vec3};
