//! Catalog listing commands.

use crate::cli::common::{load_app_config, to_json, CliError, CliResult};
use crate::services::Libraries;
use clap::{Args, Subcommand};

/// List the active material and module catalogs
#[derive(Args, Debug)]
pub struct LibraryArgs {
    #[command(subcommand)]
    command: LibraryCommand,
}

#[derive(Subcommand, Debug)]
enum LibraryCommand {
    /// List facade, countertop and handle materials
    Materials(ListArgs),
    /// List module types and their variants
    Modules(ListArgs),
}

/// Listing options
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl LibraryArgs {
    /// Execute library subcommand
    pub fn execute(&self) -> CliResult<()> {
        let app_config = load_app_config()?;
        let libraries = Libraries::resolve(&app_config)
            .map_err(|e| CliError::io(format!("Failed to load libraries: {e:#}")))?;
        let pretty = app_config.output.pretty;

        match &self.command {
            LibraryCommand::Materials(args) if args.json => {
                println!("{}", to_json(&libraries.materials, pretty)?);
            }
            LibraryCommand::Materials(_) => print_materials(&libraries),
            LibraryCommand::Modules(args) if args.json => {
                println!("{}", to_json(&libraries.modules, pretty)?);
            }
            LibraryCommand::Modules(_) => print_modules(&libraries),
        }

        Ok(())
    }
}

fn print_materials(libraries: &Libraries) {
    let materials = &libraries.materials;

    println!("Facades:");
    for (key, material) in &materials.facades {
        println!("  {key:<16} {}", material.color);
    }
    println!("\nCountertops:");
    for (key, material) in &materials.countertops {
        println!("  {key:<16} {}", material.color);
    }
    println!("\nHandles:");
    for (key, handle) in &materials.handles {
        println!("  {key:<16} {} ({})", handle.material.color, handle.source);
    }
}

fn print_modules(libraries: &Libraries) {
    for (module_type, definition) in &libraries.modules.types {
        println!("{module_type}:");
        for (variant, constraints) in &definition.variants {
            println!(
                "  {variant:<12} width {}–{}",
                constraints.min_width, constraints.max_width
            );
        }
    }
}
