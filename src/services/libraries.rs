//! Catalog loading service.
//!
//! Catalogs ship embedded in the binary; users can point the application
//! config at their own JSON or JSON5 files to replace either one.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::{
    config::Config,
    models::{MaterialLibrary, ModuleLibrary},
};

/// Service for reading material and module catalogs from disk.
pub struct LibraryService;

impl LibraryService {
    /// Loads a material catalog from a JSON or JSON5 file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use kitchen_layout::services::LibraryService;
    ///
    /// let materials = LibraryService::load_materials(Path::new("materials.json"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load_materials(path: &Path) -> Result<MaterialLibrary> {
        read_catalog(path)
            .with_context(|| format!("Failed to load material library from {}", path.display()))
    }

    /// Loads a module catalog from a JSON or JSON5 file.
    pub fn load_modules(path: &Path) -> Result<ModuleLibrary> {
        read_catalog(path)
            .with_context(|| format!("Failed to load module library from {}", path.display()))
    }
}

fn read_catalog<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match serde_json::from_str(&content) {
        Ok(catalog) => Ok(catalog),
        Err(json_err) => json5::from_str(&content)
            .map_err(|json5_err| anyhow::anyhow!("{json_err} (JSON5: {json5_err})")),
    }
}

/// The pair of catalogs every engine call needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Libraries {
    /// Material catalog
    pub materials: MaterialLibrary,
    /// Module catalog
    pub modules: ModuleLibrary,
}

impl Libraries {
    /// Catalogs embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            materials: MaterialLibrary::builtin()?,
            modules: ModuleLibrary::builtin()?,
        })
    }

    /// Catalogs selected by the application config: a configured path
    /// replaces the embedded catalog of the same kind.
    pub fn resolve(config: &Config) -> Result<Self> {
        let materials = match &config.libraries.materials {
            Some(path) => {
                debug!(path = %path.display(), "using material library from file");
                LibraryService::load_materials(path)?
            }
            None => MaterialLibrary::builtin()?,
        };
        let modules = match &config.libraries.modules {
            Some(path) => {
                debug!(path = %path.display(), "using module library from file");
                LibraryService::load_modules(path)?
            }
            None => ModuleLibrary::builtin()?,
        };

        Ok(Self { materials, modules })
    }
}
