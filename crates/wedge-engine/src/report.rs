//! Validation report assembled after generation.
//!
//! The report never fails a build: targets that miss are recorded with
//! their variance and left for the caller to judge.

use geometry_ops::GrooveLayout;
use serde::Serialize;

use crate::classify::GrindStyle;

/// One measured quantity against its target.
#[derive(Debug, Clone, Serialize)]
pub struct QuantityCheck {
    pub measured: f64,
    pub target: f64,
    /// measured - target.
    pub variance: f64,
    pub tolerance: f64,
    pub passed: bool,
}

impl QuantityCheck {
    pub fn new(measured: f64, target: f64, tolerance: f64) -> Self {
        let variance = measured - target;
        Self {
            measured,
            target,
            variance,
            tolerance,
            passed: variance.abs() <= tolerance,
        }
    }
}

/// Center-of-gravity checks, one per datum axis.
#[derive(Debug, Clone, Serialize)]
pub struct CgReport {
    pub from_face: QuantityCheck,
    pub from_heel: QuantityCheck,
    pub from_sole: QuantityCheck,
}

impl CgReport {
    pub fn all_passed(&self) -> bool {
        self.from_face.passed && self.from_heel.passed && self.from_sole.passed
    }
}

/// Effective bounce across the sole, after relief.
#[derive(Debug, Clone, Serialize)]
pub struct BounceProfile {
    pub heel: f64,
    pub center: f64,
    pub toe: f64,
}

/// Groove layout as applied to the face.
#[derive(Debug, Clone, Serialize)]
pub struct GrooveSummary {
    pub requested: u32,
    pub actual: u32,
    pub spacing: f64,
    pub usga_compliant: bool,
}

impl From<&GrooveLayout> for GrooveSummary {
    fn from(layout: &GrooveLayout) -> Self {
        Self {
            requested: layout.requested,
            actual: layout.actual,
            spacing: layout.spacing,
            usga_compliant: layout.usga_compliant,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub name: String,
    /// Closed-shell check on the assembled head.
    pub solid_valid: bool,
    /// False when metrics were computed on an invalid solid; the numbers
    /// are carried anyway, best effort.
    pub metrics_reliable: bool,
    pub volume_mm3: f64,
    pub mass: QuantityCheck,
    pub cg: CgReport,
    pub grind: GrindStyle,
    pub effective_bounce: BounceProfile,
    pub grooves: GrooveSummary,
    /// Finishing features the kernel declined, in build order.
    pub skipped_features: Vec<String>,
}

impl ValidationReport {
    /// True when the head is sound and hits its mass and balance targets.
    pub fn passed(&self) -> bool {
        self.solid_valid && self.mass.passed && self.cg.all_passed()
    }
}
