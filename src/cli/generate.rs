//! Generate command: validated config in, renderable modules out.

use crate::cli::common::{load_app_config, load_kitchen, to_json, CliError, CliResult};
use crate::engine::CenteringOptions;
use crate::services::{Libraries, Pipeline, PipelineReport};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Generate positioned modules from a kitchen config
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to kitchen config (JSON or JSON5)
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Center the generated scene in the room
    #[arg(long)]
    pub center: bool,

    /// Extra X translation applied when centering
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    pub offset_x: Option<f64>,

    /// Y translation applied when centering
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    pub offset_y: Option<f64>,

    /// Extra Z translation applied when centering
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    pub offset_z: Option<f64>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the report as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let app_config = load_app_config()?;
        let libraries = Libraries::resolve(&app_config)
            .map_err(|e| CliError::io(format!("Failed to load libraries: {e:#}")))?;
        let kitchen = load_kitchen(&self.config)?;

        let centering = self.centering(app_config.centering.to_options());
        let report = Pipeline::new(&libraries).run(&kitchen, &centering);
        let pretty = app_config.output.pretty;

        if let Some(path) = &self.output {
            fs::write(path, to_json(&report, pretty)?).map_err(|e| {
                CliError::io(format!("Failed to write report to {}: {e}", path.display()))
            })?;
        }

        if self.json {
            println!("{}", to_json(&report, pretty)?);
        } else {
            print_summary(&report);
        }

        if !report.success {
            return Err(CliError::validation("Generation failed"));
        }

        Ok(())
    }

    /// Command-line flags layered over the configured defaults.
    fn centering(&self, defaults: CenteringOptions) -> CenteringOptions {
        CenteringOptions {
            enabled: defaults.enabled || self.center,
            offset_x: self.offset_x.unwrap_or(defaults.offset_x),
            offset_y: self.offset_y.unwrap_or(defaults.offset_y),
            offset_z: self.offset_z.unwrap_or(defaults.offset_z),
        }
    }
}

fn print_summary(report: &PipelineReport) {
    if report.success {
        println!("✓ Generated {} modules", report.module_count);
    } else {
        println!("✗ Generation failed");
    }

    for line in &report.lines {
        println!(
            "  Line {}: {} of {} used ({} modules, {} auto, {} remaining)",
            line.index,
            line.used_width + line.gaps,
            line.length,
            line.module_count,
            line.auto_count,
            line.remaining
        );
    }

    for module in &report.modules {
        println!(
            "  {:<12} {:<8} at ({:.1}, {:.1}, {:.1}) size {}×{}×{}",
            module.id,
            module.kind.as_str(),
            module.position.x,
            module.position.y,
            module.position.z,
            module.dimensions.width,
            module.dimensions.height,
            module.dimensions.depth
        );
    }

    for warning in &report.warnings {
        println!("  ⚠ {warning}");
    }
    for error in &report.errors {
        println!("  ✗ {error}");
    }
}
