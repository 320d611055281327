//! Service layer for business logic.
//!
//! Services coordinate the engines with file I/O and the application
//! config; the engines themselves stay free of both.

pub mod libraries;
pub mod pipeline;

// Re-export commonly used types
pub use libraries::{Libraries, LibraryService};
pub use pipeline::{Pipeline, PipelineReport};
