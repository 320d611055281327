//! Kitchen Layout Library
//!
//! This library turns declarative kitchen configurations into positioned,
//! dimensioned, and material-resolved cabinet modules ready for a 3D
//! renderer. It validates and fixes configurations, places modules along
//! layout lines, and optionally re-centers the result in the room.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;

pub use engine::{validate_and_fix, CenteringOptions, LayoutEngine, ValidationResult};
pub use error::LayoutError;
pub use models::{KitchenConfig, RenderableModule};
