//! Validation and layout engines.
//!
//! - [`validator`] normalizes a kitchen config and reports problems
//! - [`layout`] turns a validated config into positioned modules
//! - [`materials`] resolves material keys against the library
//! - [`centering`] moves a generated scene to the room center

pub mod centering;
pub mod layout;
pub mod materials;
pub mod validator;

pub use centering::{apply_centering, BoundingBox, CenteringOptions};
pub use layout::{
    resolve_auto_widths, rotation_for_direction, summarize_lines, LayoutEngine, LineSummary,
};
pub use materials::resolve_materials;
pub use validator::{validate_and_fix, CheckStatus, ValidationChecks, ValidationResult};
