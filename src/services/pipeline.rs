//! Validate-then-generate pipeline.
//!
//! This is the contract an agent tool or a state store consumes: whatever
//! goes wrong, the caller receives a [`PipelineReport`] rather than an
//! error, with the generated modules only when validation passed.

use serde::Serialize;
use tracing::{info, warn};

use crate::engine::{
    summarize_lines, validate_and_fix, CenteringOptions, LayoutEngine, LineSummary,
};
use crate::models::{KitchenConfig, RenderableModule};
use crate::services::libraries::Libraries;

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    /// True when validation passed and generation succeeded
    pub success: bool,
    /// Validator warnings
    pub warnings: Vec<String>,
    /// Validator errors, or the generation/parse failure
    pub errors: Vec<String>,
    /// Generated modules (empty on failure)
    pub modules: Vec<RenderableModule>,
    /// Number of top-level modules
    pub module_count: usize,
    /// Width usage per layout line of the fixed config
    pub lines: Vec<LineSummary>,
}

impl PipelineReport {
    fn failure(warnings: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            warnings,
            errors,
            modules: Vec::new(),
            module_count: 0,
            lines: Vec::new(),
        }
    }
}

/// Runs the validator and the layout engine against one set of catalogs.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    libraries: &'a Libraries,
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline over `libraries`.
    #[must_use]
    pub const fn new(libraries: &'a Libraries) -> Self {
        Self { libraries }
    }

    /// Validates `config` and, when valid, generates the scene.
    #[must_use]
    pub fn run(&self, config: &KitchenConfig, centering: &CenteringOptions) -> PipelineReport {
        let validation = validate_and_fix(
            config,
            &config.global_constraints,
            &self.libraries.modules,
        );

        if !validation.is_valid {
            warn!(
                errors = validation.errors.len(),
                "kitchen config failed validation; skipping generation"
            );
            return PipelineReport::failure(validation.warnings, validation.errors);
        }

        let engine = LayoutEngine::new(&self.libraries.materials);
        match engine.generate_with_centering(&validation.fixed_config, centering) {
            Ok(modules) => {
                info!(modules = modules.len(), "generated kitchen layout");
                PipelineReport {
                    success: true,
                    warnings: validation.warnings,
                    errors: Vec::new(),
                    module_count: modules.len(),
                    modules,
                    lines: summarize_lines(&validation.fixed_config),
                }
            }
            Err(err) => {
                warn!(error = %err, "layout generation failed");
                PipelineReport::failure(validation.warnings, vec![err.to_string()])
            }
        }
    }

    /// Parses a JSON or JSON5 config and runs it.
    #[must_use]
    pub fn run_json(&self, source: &str, centering: &CenteringOptions) -> PipelineReport {
        match KitchenConfig::from_json_str(source) {
            Ok(config) => self.run(&config, centering),
            Err(err) => PipelineReport::failure(Vec::new(), vec![format!("{err:#}")]),
        }
    }
}
