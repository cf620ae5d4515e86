//! Test harness for the wedge generation pipeline.
//!
//! Provides a scenario bench for running complete generations against
//! either kernel, plus fixtures and assertion helpers shared by the
//! integration scenarios.
//!
//! # Key Components
//!
//! - [`WedgeBench`] — owns a kernel + material table, runs full generations
//! - [`helpers`] — spec builders and configuration fixtures
//! - [`assertions`] — tolerance checks with diagnostic failure text

pub mod assertions;
pub mod helpers;
pub mod workflow;

pub use helpers::HarnessError;
pub use workflow::WedgeBench;
