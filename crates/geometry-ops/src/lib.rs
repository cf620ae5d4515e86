//! Component builders for a wedge head.
//!
//! Each module builds or modifies one component through the
//! [`kernel_bridge::Kernel`] trait. Builders return replacement handles;
//! finishing features that the kernel declines are recorded as warnings
//! on the result instead of failing the build.

pub mod assembly;
pub mod blade;
pub mod grooves;
pub mod hosel;
pub mod sole;
pub mod types;

pub use assembly::{fuse_head, place_hosel, topline_offset};
pub use blade::{blade_profile, build_blade};
pub use grooves::{cut_grooves, plan_grooves, GrooveLayout, GrooveOutcome, USGA_MAX_GROOVE_SPACING};
pub use hosel::build_hosel;
pub use sole::{build_sole, effective_bounce, SolePosition};
pub use types::{BuiltComponent, FeatureWarning, OpError};
