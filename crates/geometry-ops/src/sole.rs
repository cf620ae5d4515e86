//! Sole plate: a thin slab under the blade, tilted by the bounce angle,
//! with edge finishing applied where the kernel allows it.
//!
//! True grinds are continuously variable surfaces. The slab-plus-tilt
//! plus two independent edge removals is a deliberate approximation that
//! keeps every step a robust primitive; each finishing cut may fail on
//! its own without losing the sole.

use kernel_bridge::{EdgeSelector, Kernel, SolidHandle};
use tracing::{info, warn};
use wedge_types::SoleParams;

use crate::types::{BuiltComponent, FeatureWarning, OpError};

/// Slab thickness below the sole plane.
const SLAB_THICKNESS: f64 = 3.0;
/// The slab stops this far short of each blade end, keeping its caps off
/// the blade's heel and toe planes.
const END_MARGIN: f64 = 0.5;
/// Forward shift past the face plane, so the leading edge of the sole
/// sits proud of the blade's leading edge line rather than on it.
const LEAD_SHIFT: f64 = 0.3;
/// Linear proxy converting a relief angle into a chamfer distance, mm
/// per degree. Inherited sizing rule; the true angle-to-distance relation
/// would need a reference width the parameters do not carry.
const CHAMFER_MM_PER_RELIEF_DEGREE: f64 = 0.5;

/// Lateral station on the sole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolePosition {
    Heel,
    Center,
    Toe,
}

/// Bounce presented to the turf at a station. Relief grinding steepens
/// the angle away from the center section.
pub fn effective_bounce(base_bounce: f64, params: &SoleParams, position: SolePosition) -> f64 {
    match position {
        SolePosition::Center => base_bounce,
        SolePosition::Heel => base_bounce + params.heel_relief_angle,
        SolePosition::Toe => base_bounce + params.toe_relief_angle,
    }
}

pub fn build_sole(
    kernel: &mut dyn Kernel,
    params: &SoleParams,
    blade_length: f64,
    bounce_deg: f64,
) -> Result<BuiltComponent, OpError> {
    if params.width_center <= 0.0 {
        return Err(OpError::InvalidParameter {
            reason: format!("sole width must be positive, got {}", params.width_center),
        });
    }
    if blade_length <= 2.0 * END_MARGIN {
        return Err(OpError::InvalidParameter {
            reason: format!("blade length {blade_length} leaves no room for a sole"),
        });
    }
    info!(
        width = params.width_center,
        bounce = bounce_deg,
        "building sole"
    );

    let length = blade_length - 2.0 * END_MARGIN;
    let slab = kernel.make_box([length, params.width_center, SLAB_THICKNESS])?;
    let slab = kernel.translate(
        &slab,
        [-length / 2.0, -LEAD_SHIFT, -SLAB_THICKNESS],
    )?;
    // Pivot on the leading edge so bounce lifts the trailing side without
    // dropping the front below the ground line.
    let slab = kernel.rotate(
        &slab,
        [0.0, -LEAD_SHIFT, 0.0],
        [1.0, 0.0, 0.0],
        bounce_deg.to_radians(),
    )?;

    let mut warnings = Vec::new();
    let mut current = slab;

    if params.leading_edge_radius > 0.0 {
        current = attempt(
            kernel,
            current,
            Finishing::Fillet,
            "leading edge rounding",
            EdgeSelector::XParallelFrontmost,
            params.leading_edge_radius,
            &mut warnings,
        );
    }
    if params.heel_relief_angle > 0.0 {
        current = attempt(
            kernel,
            current,
            Finishing::Chamfer,
            "heel relief",
            EdgeSelector::MinXEnd,
            params.heel_relief_angle * CHAMFER_MM_PER_RELIEF_DEGREE,
            &mut warnings,
        );
    }
    if params.toe_relief_angle > 0.0 {
        current = attempt(
            kernel,
            current,
            Finishing::Chamfer,
            "toe relief",
            EdgeSelector::MaxXEnd,
            params.toe_relief_angle * CHAMFER_MM_PER_RELIEF_DEGREE,
            &mut warnings,
        );
    }

    Ok(BuiltComponent {
        solid: current,
        warnings,
    })
}

enum Finishing {
    Fillet,
    Chamfer,
}

fn attempt(
    kernel: &mut dyn Kernel,
    solid: SolidHandle,
    kind: Finishing,
    feature: &str,
    selector: EdgeSelector,
    size: f64,
    warnings: &mut Vec<FeatureWarning>,
) -> SolidHandle {
    let result = match kind {
        Finishing::Fillet => kernel.fillet_edges(&solid, selector, size),
        Finishing::Chamfer => kernel.chamfer_edges(&solid, selector, size),
    };
    match result {
        Ok(finished) => finished,
        Err(err) => {
            warn!(feature, %err, "finishing skipped");
            warnings.push(FeatureWarning::skipped(feature, selector, &err));
            solid
        }
    }
}
