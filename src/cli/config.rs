//! Configuration management CLI commands.

use crate::cli::common::{load_app_config, to_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file location
    Path,
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Material catalog file (JSON or JSON5)
    #[arg(long, value_name = "FILE")]
    materials: Option<PathBuf>,

    /// Module catalog file (JSON or JSON5)
    #[arg(long, value_name = "FILE")]
    modules: Option<PathBuf>,

    /// Center generated scenes by default
    #[arg(long, value_name = "BOOL")]
    center: Option<bool>,

    /// Default extra X translation when centering
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    offset_x: Option<f64>,

    /// Default Y translation when centering
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    offset_y: Option<f64>,

    /// Default extra Z translation when centering
    #[arg(long, value_name = "MM", allow_negative_numbers = true)]
    offset_z: Option<f64>,

    /// Pretty-print JSON output
    #[arg(long, value_name = "BOOL")]
    pretty: Option<bool>,

    /// Go back to the embedded catalogs
    #[arg(long, conflicts_with_all = ["materials", "modules"])]
    builtin_libraries: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_app_config()?;

        if self.json {
            println!("{}", to_json(&config, true)?);
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if !self.has_changes() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --materials, --modules, \
                 --builtin-libraries, --center, --offset-x, --offset-y, --offset-z, or --pretty",
            ));
        }

        let mut config = Config::load().unwrap_or_default();
        self.apply(&mut config);

        config.validate().map_err(|e| CliError::validation(format!("{e:#}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }

    fn has_changes(&self) -> bool {
        self.materials.is_some()
            || self.modules.is_some()
            || self.builtin_libraries
            || self.center.is_some()
            || self.offset_x.is_some()
            || self.offset_y.is_some()
            || self.offset_z.is_some()
            || self.pretty.is_some()
    }

    fn apply(&self, config: &mut Config) {
        if self.builtin_libraries {
            config.libraries.materials = None;
            config.libraries.modules = None;
        }
        if let Some(path) = &self.materials {
            config.libraries.materials = Some(path.clone());
        }
        if let Some(path) = &self.modules {
            config.libraries.modules = Some(path.clone());
        }
        if let Some(center) = self.center {
            config.centering.enabled = center;
        }
        if let Some(offset) = self.offset_x {
            config.centering.offset_x = offset;
        }
        if let Some(offset) = self.offset_y {
            config.centering.offset_y = offset;
        }
        if let Some(offset) = self.offset_z {
            config.centering.offset_z = offset;
        }
        if let Some(pretty) = self.pretty {
            config.output.pretty = pretty;
        }
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    if let Ok(path) = Config::config_file_path() {
        if Config::exists() {
            println!("File: {}", path.display());
        } else {
            println!("File: {} (not saved yet, showing defaults)", path.display());
        }
        println!();
    }

    println!("Libraries:");
    match &config.libraries.materials {
        Some(path) => println!("  Materials: {}", path.display()),
        None => println!("  Materials: (built-in)"),
    }
    match &config.libraries.modules {
        Some(path) => println!("  Modules:   {}", path.display()),
        None => println!("  Modules:   (built-in)"),
    }
    println!();

    println!("Centering:");
    println!("  Enabled: {}", config.centering.enabled);
    println!(
        "  Offsets: ({}, {}, {})",
        config.centering.offset_x, config.centering.offset_y, config.centering.offset_z
    );
    println!();

    println!("Output:");
    println!("  Pretty JSON: {}", config.output.pretty);
}
