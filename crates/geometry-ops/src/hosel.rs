//! Hosel: an upright barrel with a shaft bore cut from the top face.
//!
//! Built in its own local frame, base centered on the origin and the
//! axis along +Z. Placement onto the head happens in [`crate::assembly`].

use kernel_bridge::{Kernel, SolidHandle};
use tracing::info;
use wedge_types::HoselParams;

use crate::types::OpError;

/// Extra tool length past the hosel top, so the bore's open end never
/// shares a plane with the top face (coplanar inputs break the boolean).
const BORE_TOOL_OVERSHOOT: f64 = 1.0;

pub fn build_hosel(kernel: &mut dyn Kernel, params: &HoselParams) -> Result<SolidHandle, OpError> {
    if params.bore_depth >= params.height {
        return Err(OpError::InvalidParameter {
            reason: format!(
                "bore depth {} must stay short of hosel height {}",
                params.bore_depth, params.height
            ),
        });
    }
    info!(
        height = params.height,
        outer = params.outer_diameter,
        bore = params.bore_diameter,
        "building hosel"
    );

    let barrel = kernel.make_cylinder(params.outer_diameter / 2.0, params.height)?;
    let tool = kernel.make_cylinder(
        params.bore_diameter / 2.0,
        params.bore_depth + BORE_TOOL_OVERSHOOT,
    )?;
    let tool = kernel.translate(&tool, [0.0, 0.0, params.height - params.bore_depth])?;
    let socketed = kernel.subtract(&barrel, &tool)?;
    Ok(socketed)
}
