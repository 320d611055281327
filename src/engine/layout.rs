//! Layout generation: from a validated config to positioned scene data.
//!
//! Modules are placed edge-to-edge along each layout line, separated by the
//! configured gap. Hanging modules are attached above their base module,
//! handles become child modules, and the whole set can optionally be
//! re-centered in the room.
//!
//! # Coordinate system
//!
//! Every layout line starts at the origin. A `{x: 1, z: 0}` line runs along
//! +X with yaw 0; a `{x: 0, z: -1}` line runs along -Z with yaw 90°. Module
//! positions are the centers of their footprint along the line; Y is the
//! declared vertical offset plus the plinth for base and sink cabinets.

use crate::engine::centering::{apply_centering, CenteringOptions};
use crate::engine::materials::resolve_materials;
use crate::error::{LayoutError, Result};
use crate::models::{
    Dimensions, Direction, HandleConfig, HandleOrientation, HandlePlacement, HangingModuleConfig,
    KitchenConfig, LayoutLine, MaterialDefinition, MaterialLibrary, ModuleConfig, ModuleKind,
    ModuleStructure, ModuleWidth, RenderableModule, ResolvedMaterials, Vec3,
};
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;
use tracing::{debug, warn};

/// Size of a handle bar before rotation (a vertical bar).
pub const HANDLE_DIMENSIONS: Dimensions = Dimensions::new(12.0, 128.0, 25.0);

/// Yaw for a layout line direction.
///
/// Only `{1, 0}` and `{0, -1}` have dedicated rotations; every other vector
/// falls back to 0.
#[must_use]
pub fn rotation_for_direction(direction: Direction) -> f64 {
    if direction == Direction::NEGATIVE_Z {
        FRAC_PI_2
    } else {
        0.0
    }
}

/// Final width of every module on `line`, in line order.
///
/// Fixed widths (the validator's `final_width` first) are kept; auto
/// modules share what remains after fixed widths and gaps.
#[must_use]
pub fn resolve_auto_widths(line: &LayoutLine, gap: f64) -> Vec<f64> {
    let total_fixed: f64 = line
        .modules
        .iter()
        .filter_map(ModuleConfig::fixed_width)
        .sum();
    let total_gaps = line.modules.len().saturating_sub(1) as f64 * gap;
    let remaining = line.length - total_fixed - total_gaps;

    let auto_count = line
        .modules
        .iter()
        .filter(|module| module.fixed_width().is_none())
        .count();
    let auto_width = if auto_count == 0 {
        0.0
    } else {
        remaining / auto_count as f64
    };

    line.modules
        .iter()
        .map(|module| module.fixed_width().unwrap_or(auto_width))
        .collect()
}

/// Width usage of one layout line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSummary {
    /// Line index in the config
    pub index: usize,
    /// Physical line length
    pub length: f64,
    /// Sum of resolved module widths
    pub used_width: f64,
    /// Sum of inter-module gaps
    pub gaps: f64,
    /// Length left over (negative when overflowing)
    pub remaining: f64,
    /// Modules on the line
    pub module_count: usize,
    /// Modules whose width is resolved from remaining space
    pub auto_count: usize,
}

/// Summarizes width usage per layout line.
#[must_use]
pub fn summarize_lines(config: &KitchenConfig) -> Vec<LineSummary> {
    let gap = config.global_settings.gap_between_modules;
    config
        .layout_lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let used_width: f64 = resolve_auto_widths(line, gap).iter().sum();
            let gaps = line.modules.len().saturating_sub(1) as f64 * gap;
            LineSummary {
                index,
                length: line.length,
                used_width,
                gaps,
                remaining: line.length - used_width - gaps,
                module_count: line.modules.len(),
                auto_count: line
                    .modules
                    .iter()
                    .filter(|module| module.fixed_width().is_none())
                    .count(),
            }
        })
        .collect()
}

/// Placement axis and sign of a layout line.
#[derive(Debug, Clone, Copy)]
struct LineAxis {
    along_x: bool,
    sign: f64,
}

impl LineAxis {
    fn for_direction(direction: Direction) -> Self {
        let along_x = direction.x.abs() == 1.0;
        let component = if direction.x == 0.0 {
            direction.z
        } else {
            direction.x
        };
        let sign = if component > 0.0 {
            1.0
        } else if component < 0.0 {
            -1.0
        } else {
            0.0
        };
        Self { along_x, sign }
    }

    fn project(self, distance: f64, y: f64) -> Vec3 {
        let coordinate = self.sign * distance;
        if self.along_x {
            Vec3::new(coordinate, y, 0.0)
        } else {
            Vec3::new(0.0, y, coordinate)
        }
    }
}

/// Generates renderable modules from a validated config.
///
/// The engine borrows the material library; it keeps no state between
/// calls, so the same config always produces the same output.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'a> {
    materials: &'a MaterialLibrary,
}

impl<'a> LayoutEngine<'a> {
    /// Creates an engine over `materials`.
    #[must_use]
    pub const fn new(materials: &'a MaterialLibrary) -> Self {
        Self { materials }
    }

    /// Generates modules without centering.
    pub fn generate(&self, config: &KitchenConfig) -> Result<Vec<RenderableModule>> {
        self.generate_with_centering(config, &CenteringOptions::disabled())
    }

    /// Generates modules and, when enabled, re-centers them in the room.
    ///
    /// # Errors
    ///
    /// Returns an error if centering is enabled without room dimensions, or
    /// if a module resolves to non-finite or non-positive geometry.
    pub fn generate_with_centering(
        &self,
        config: &KitchenConfig,
        centering: &CenteringOptions,
    ) -> Result<Vec<RenderableModule>> {
        let mut modules = Vec::new();

        for (line_idx, line) in config.layout_lines.iter().enumerate() {
            self.place_line(config, line_idx, line, &mut modules)?;
        }

        let hanging: Vec<RenderableModule> = config
            .hanging_modules
            .iter()
            .filter_map(|hanging| self.place_hanging(config, hanging, &modules))
            .collect::<Result<_>>()?;
        modules.extend(hanging);

        if !centering.enabled {
            return Ok(modules);
        }

        let room = config
            .global_settings
            .dimensions
            .ok_or(LayoutError::MissingRoomDimensions)?;
        Ok(apply_centering(&modules, &room, centering))
    }

    fn place_line(
        &self,
        config: &KitchenConfig,
        line_idx: usize,
        line: &LayoutLine,
        placed: &mut Vec<RenderableModule>,
    ) -> Result<()> {
        let settings = &config.global_settings;
        let gap = settings.gap_between_modules;
        let yaw = rotation_for_direction(line.direction);
        let axis = LineAxis::for_direction(line.direction);
        let widths = resolve_auto_widths(line, gap);

        debug!(
            line = line_idx,
            modules = line.modules.len(),
            length = line.length,
            "placing layout line"
        );

        let mut current_offset = 0.0;
        for (module, width) in line.modules.iter().zip(widths) {
            let plinth = if module.kind.has_plinth() {
                settings.cabinet.plinth_height
            } else {
                0.0
            };
            let y = module.positioning.offset_y() + plinth;
            let position = axis.project(current_offset + width / 2.0, y);

            // The vertical offset doubles as the module height when set
            let height = module
                .positioning
                .offset
                .map(|offset| offset.y)
                .filter(|height| *height > 0.0)
                .unwrap_or(settings.cabinet.base_height);
            let dimensions = Dimensions::new(width, height, settings.cabinet.countertop_depth);

            let renderable = self.build_module(config, module, position, yaw, dimensions)?;
            debug!(
                id = %renderable.id,
                x = position.x,
                z = position.z,
                width,
                "placed module"
            );
            placed.push(renderable);

            current_offset += width + gap;
        }

        Ok(())
    }

    fn place_hanging(
        &self,
        config: &KitchenConfig,
        hanging: &HangingModuleConfig,
        placed: &[RenderableModule],
    ) -> Option<Result<RenderableModule>> {
        let module = hanging.module();
        let Some(base) = placed
            .iter()
            .find(|candidate| candidate.id == hanging.align_with_module())
        else {
            warn!(
                id = %module.id,
                base = hanging.align_with_module(),
                "hanging module base not found; skipping"
            );
            return None;
        };

        let cabinet = &config.global_settings.cabinet;
        let width = match module.width {
            ModuleWidth::Auto => module.final_width.unwrap_or(base.dimensions.width),
            ModuleWidth::Fixed(width) => module.final_width.unwrap_or(width),
        };
        let position = Vec3::new(
            base.position.x,
            cabinet.countertop_height + cabinet.wall_gap,
            base.position.z,
        );
        let dimensions = Dimensions::new(width, cabinet.wall_height, cabinet.wall_depth);

        Some(self.build_module(config, module, position, base.rotation.y, dimensions))
    }

    fn build_module(
        &self,
        config: &KitchenConfig,
        module: &ModuleConfig,
        position: Vec3,
        yaw: f64,
        dimensions: Dimensions,
    ) -> Result<RenderableModule> {
        if !position.is_finite() {
            return Err(LayoutError::NonFinitePosition {
                module_id: module.id.clone(),
            });
        }
        if !dimensions.is_positive() {
            return Err(LayoutError::InvalidDimensions {
                module_id: module.id.clone(),
                width: dimensions.width,
                height: dimensions.height,
                depth: dimensions.depth,
            });
        }

        let materials = resolve_materials(
            module.material_overrides.as_ref(),
            &config.default_materials,
            self.materials,
        );
        let structure = module.structure.clone().unwrap_or_else(|| {
            ModuleStructure::default_for(module.variant.as_deref(), dimensions.height)
        });

        let mut renderable = RenderableModule {
            id: module.id.clone(),
            kind: module.kind.clone(),
            variant: module.variant.clone(),
            position,
            rotation: Vec3::new(0.0, yaw, 0.0),
            dimensions,
            materials,
            structure: Some(structure),
            carcass: Some(module.carcass.unwrap_or_default()),
            handle: module.handle,
            children: Vec::new(),
        };

        let handle_material = renderable.materials.handle.clone();
        if let (Some(handle), Some(material)) = (module.handle, handle_material) {
            let clearance = config.global_constraints.handles.edge_clearance;
            let child = build_handle(&renderable, handle, clearance, material);
            renderable.children.push(child);
        }

        Ok(renderable)
    }
}

/// Builds the handle child of `parent` on its front face.
fn build_handle(
    parent: &RenderableModule,
    handle: HandleConfig,
    edge_clearance: f64,
    material: MaterialDefinition,
) -> RenderableModule {
    let yaw = parent.rotation.y;
    let half_depth = parent.dimensions.depth / 2.0;
    let forward = Vec3::new(yaw.sin() * half_depth, 0.0, yaw.cos() * half_depth);

    let inset = parent.dimensions.height / 2.0 - edge_clearance;
    let vertical = match handle.placement {
        HandlePlacement::Top => inset,
        HandlePlacement::Center => 0.0,
        HandlePlacement::Bottom => -inset,
    };

    let mut rotation = parent.rotation;
    if handle.orientation == HandleOrientation::Horizontal {
        rotation.z += FRAC_PI_2;
    }

    RenderableModule {
        id: format!("{}-handle", parent.id),
        kind: ModuleKind::Handle,
        variant: None,
        position: parent.position + forward + Vec3::new(0.0, vertical, 0.0),
        rotation,
        dimensions: HANDLE_DIMENSIONS,
        materials: ResolvedMaterials {
            facade: Some(material),
            countertop: None,
            handle: None,
        },
        structure: None,
        carcass: None,
        handle: None,
        children: Vec::new(),
    }
}
