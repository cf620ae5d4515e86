//! Wedge generation engine.
//!
//! Orchestrates the component builders in [`geometry_ops`] over a
//! [`kernel_bridge::Kernel`], measures the assembled head, and reports
//! mass, balance, grind, and groove compliance against the targets.

pub mod classify;
pub mod export;
pub mod metrics;
pub mod pipeline;
pub mod report;

pub use classify::{classify, GrindInputs, GrindStyle};
pub use pipeline::{generate, generate_to_file, Generation, GenerationError, GenerationOutcome};
pub use report::{BounceProfile, CgReport, GrooveSummary, QuantityCheck, ValidationReport};
