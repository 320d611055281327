//! Re-centering generated modules inside the room volume.

use crate::models::{RenderableModule, RoomDimensions, Vec3};
use serde::{Deserialize, Serialize};

/// Centering switch and explicit offsets.
///
/// Y only moves by `offset_y` so floor anchoring is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CenteringOptions {
    /// Apply centering at all
    pub enabled: bool,
    /// Extra translation along X
    pub offset_x: f64,
    /// Translation along Y
    pub offset_y: f64,
    /// Extra translation along Z
    pub offset_z: f64,
}

impl CenteringOptions {
    /// Centering turned off.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            offset_x: 0.0,
            offset_y: 0.0,
            offset_z: 0.0,
        }
    }

    /// Centering turned on with no extra offsets.
    #[must_use]
    pub const fn enabled() -> Self {
        Self {
            enabled: true,
            offset_x: 0.0,
            offset_y: 0.0,
            offset_z: 0.0,
        }
    }

    /// Sets the explicit offsets.
    #[must_use]
    pub const fn with_offsets(mut self, x: f64, y: f64, z: f64) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self.offset_z = z;
        self
    }
}

/// Axis-aligned box around a set of modules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl BoundingBox {
    /// Box around the top-level modules, or `None` for an empty slice.
    #[must_use]
    pub fn from_modules(modules: &[RenderableModule]) -> Option<Self> {
        let mut modules = modules.iter();
        let first = modules.next()?;
        let initial = Self {
            min: first.min_corner(),
            max: first.max_corner(),
        };

        Some(modules.fold(initial, |bounds, module| {
            let (low, high) = (module.min_corner(), module.max_corner());
            Self {
                min: Vec3::new(
                    bounds.min.x.min(low.x),
                    bounds.min.y.min(low.y),
                    bounds.min.z.min(low.z),
                ),
                max: Vec3::new(
                    bounds.max.x.max(high.x),
                    bounds.max.y.max(high.y),
                    bounds.max.z.max(high.z),
                ),
            }
        }))
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Translation that moves `bounds` to the room center in X/Z, plus offsets.
#[must_use]
pub fn centering_translation(
    bounds: &BoundingBox,
    room: &RoomDimensions,
    options: &CenteringOptions,
) -> Vec3 {
    let room_center = room.center();
    let box_center = bounds.center();
    Vec3::new(
        room_center.x - box_center.x + options.offset_x,
        options.offset_y,
        room_center.z - box_center.z + options.offset_z,
    )
}

/// Returns centered copies of `modules`.
///
/// Top-level modules and their direct children move; grandchildren keep
/// their positions.
#[must_use]
pub fn apply_centering(
    modules: &[RenderableModule],
    room: &RoomDimensions,
    options: &CenteringOptions,
) -> Vec<RenderableModule> {
    let Some(bounds) = BoundingBox::from_modules(modules) else {
        return modules.to_vec();
    };

    let delta = centering_translation(&bounds, room, options);
    tracing::debug!(
        dx = delta.x,
        dy = delta.y,
        dz = delta.z,
        "centering {} modules",
        modules.len()
    );

    modules.iter().map(|module| module.translated(delta)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dimensions, ModuleKind, ResolvedMaterials};

    fn module(id: &str, x: f64, width: f64) -> RenderableModule {
        RenderableModule {
            id: id.to_string(),
            kind: ModuleKind::Base,
            variant: None,
            position: Vec3::new(x, 100.0, 0.0),
            rotation: Vec3::ZERO,
            dimensions: Dimensions::new(width, 720.0, 600.0),
            materials: ResolvedMaterials::default(),
            structure: None,
            carcass: None,
            handle: None,
            children: Vec::new(),
        }
    }

    fn room() -> RoomDimensions {
        RoomDimensions {
            side_a: 4000.0,
            side_b: 3000.0,
            height: 2500.0,
        }
    }

    #[test]
    fn test_bounding_box() {
        let modules = vec![module("a", 150.0, 300.0), module("b", 450.0, 300.0)];
        let bounds = BoundingBox::from_modules(&modules).unwrap();

        assert_eq!(bounds.min, Vec3::new(0.0, -260.0, -300.0));
        assert_eq!(bounds.max, Vec3::new(600.0, 460.0, 300.0));
        assert_eq!(bounds.size(), Vec3::new(600.0, 720.0, 600.0));
        assert!(BoundingBox::from_modules(&[]).is_none());
    }

    #[test]
    fn test_rotated_module_footprint_swaps_width_and_depth() {
        let mut rotated = module("r", 0.0, 300.0);
        rotated.rotation.y = std::f64::consts::FRAC_PI_2;
        let bounds = BoundingBox::from_modules(&[rotated]).unwrap();
        let size = bounds.size();

        assert!((size.x - 600.0).abs() < 1e-9);
        assert!((size.z - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_centering_moves_box_to_room_center() {
        let modules = vec![module("a", 150.0, 300.0), module("b", 450.0, 300.0)];
        let centered = apply_centering(&modules, &room(), &CenteringOptions::enabled());

        let center = BoundingBox::from_modules(&centered).unwrap().center();
        assert!((center.x - 2000.0).abs() < 1e-9);
        assert!((center.z + 1500.0).abs() < 1e-9);
        // Y untouched without an explicit offset
        assert_eq!(centered[0].position.y, 100.0);
    }

    #[test]
    fn test_offsets_are_added() {
        let modules = vec![module("a", 150.0, 300.0)];
        let options = CenteringOptions::enabled().with_offsets(10.0, 5.0, -20.0);
        let centered = apply_centering(&modules, &room(), &options);

        assert_eq!(centered[0].position, Vec3::new(2010.0, 105.0, -1520.0));
    }

    #[test]
    fn test_only_direct_children_move() {
        let mut grandchild = module("gc", 0.0, 10.0);
        grandchild.position = Vec3::new(1.0, 2.0, 3.0);
        let mut child = module("c", 0.0, 10.0);
        child.children.push(grandchild);
        let mut parent = module("p", 150.0, 300.0);
        parent.children.push(child);

        let centered = apply_centering(&[parent.clone()], &room(), &CenteringOptions::enabled());
        let delta = centered[0].position - parent.position;

        assert_eq!(
            centered[0].children[0].position,
            parent.children[0].position + delta
        );
        assert_eq!(
            centered[0].children[0].children[0].position,
            Vec3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_empty_input_is_unchanged() {
        assert!(apply_centering(&[], &room(), &CenteringOptions::enabled()).is_empty());
    }
}
