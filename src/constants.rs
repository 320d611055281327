//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and log filter defaults.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Kitchen Layout";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "kitchen-layout";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with `--verbose` when `RUST_LOG` is unset.
pub const VERBOSE_LOG_FILTER: &str = "kitchen_layout=debug";
