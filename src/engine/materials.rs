//! Material key resolution.

use crate::models::{DefaultMaterials, MaterialLibrary, MaterialOverrides, ResolvedMaterials};

/// Resolves a module's facade, countertop and handle materials.
///
/// For each slot the module override wins over the kitchen default. A key
/// missing from the library leaves the slot empty; renderers fall back to
/// their own default.
pub fn resolve_materials(
    overrides: Option<&MaterialOverrides>,
    defaults: &DefaultMaterials,
    library: &MaterialLibrary,
) -> ResolvedMaterials {
    let facade = effective_key(overrides.and_then(|o| o.facade.as_deref()), &defaults.facade);
    let countertop = effective_key(
        overrides.and_then(|o| o.countertop.as_deref()),
        &defaults.countertop,
    );
    let handle = effective_key(overrides.and_then(|o| o.handle.as_deref()), &defaults.handle);

    ResolvedMaterials {
        facade: facade.and_then(|key| library.facade(key).cloned()),
        countertop: countertop.and_then(|key| library.countertop(key).cloned()),
        handle: handle.and_then(|key| library.handle(key).cloned()),
    }
}

fn effective_key<'a>(
    override_key: Option<&'a str>,
    fallback: &'a Option<String>,
) -> Option<&'a str> {
    override_key.or(fallback.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HandleMaterial, MaterialDefinition};

    fn material(color: &str) -> MaterialDefinition {
        MaterialDefinition {
            name: None,
            color: color.to_string(),
            roughness: 0.5,
            metalness: 0.0,
            texture: None,
        }
    }

    fn library() -> MaterialLibrary {
        let mut library = MaterialLibrary::default();
        library.facades.insert("X".to_string(), material("#ff0000"));
        library.facades.insert("Y".to_string(), material("#00ff00"));
        library.countertops.insert("stone".to_string(), material("#cccccc"));
        library.handles.insert(
            "bar".to_string(),
            HandleMaterial {
                source: "models/bar.glb".to_string(),
                material: material("#999999"),
            },
        );
        library
    }

    fn defaults() -> DefaultMaterials {
        DefaultMaterials {
            facade: Some("Y".to_string()),
            countertop: Some("stone".to_string()),
            handle: Some("bar".to_string()),
        }
    }

    #[test]
    fn test_override_wins_over_default() {
        let overrides = MaterialOverrides {
            facade: Some("X".to_string()),
            ..MaterialOverrides::default()
        };
        let resolved = resolve_materials(Some(&overrides), &defaults(), &library());

        assert_eq!(resolved.facade.unwrap().color, "#ff0000");
        assert_eq!(resolved.countertop.unwrap().color, "#cccccc");
        assert_eq!(resolved.handle.unwrap().color, "#999999");
    }

    #[test]
    fn test_default_used_without_override() {
        let resolved = resolve_materials(None, &defaults(), &library());
        assert_eq!(resolved.facade.unwrap().color, "#00ff00");
    }

    #[test]
    fn test_missing_key_leaves_slot_empty() {
        let overrides = MaterialOverrides {
            facade: Some("missing".to_string()),
            ..MaterialOverrides::default()
        };
        let resolved = resolve_materials(Some(&overrides), &defaults(), &library());
        assert!(resolved.facade.is_none());

        let resolved = resolve_materials(None, &DefaultMaterials::default(), &library());
        assert_eq!(resolved, ResolvedMaterials::default());
    }
}
