//! CLI command handlers for Kitchen Layout.
//!
//! This module provides headless, scriptable access to the validator and
//! layout engine for automation, testing, and CI/CD integration.

pub mod common;
pub mod config;
pub mod generate;
pub mod library;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use library::LibraryArgs;
pub use validate::ValidateArgs;
