//! Head assembly: hosel placement and the final fuse.
//!
//! Components are built in their own local frames; this module computes
//! the rigid transforms that carry the hosel into the blade's frame and
//! unions the three solids into one head.

use kernel_bridge::{Kernel, SolidHandle};
use tracing::info;
use wedge_types::BladeParams;

use crate::types::OpError;

/// Hosel axis inset from the heel end of the blade.
const HOSEL_HEEL_INSET: f64 = 8.0;
/// The hosel base seats this far down the face from the topline, so the
/// barrel emerges from blade material instead of resting tangent on the
/// topline ridge.
const HOSEL_SEAT_DEPTH: f64 = 6.0;

/// Where a point `face_height` up the face lands after the loft rotation,
/// as a (back, up) displacement from the leading edge line.
pub fn topline_offset(face_height: f64, loft_deg: f64) -> (f64, f64) {
    let loft = loft_deg.to_radians();
    (face_height * loft.sin(), face_height * loft.cos())
}

/// Move the hosel from its local frame (base on the origin, axis up)
/// onto the heel end of the lofted blade, then tilt it to the lie angle.
/// A lie of 90° leaves it vertical; flatter lies lean it toward the
/// player. The tilt pivots on the hosel's own base point.
pub fn place_hosel(
    kernel: &mut dyn Kernel,
    hosel: SolidHandle,
    blade: &BladeParams,
    loft_deg: f64,
    lie_deg: f64,
) -> Result<SolidHandle, OpError> {
    let heel_x = -blade.length / 2.0 + HOSEL_HEEL_INSET;
    let (back, up) = topline_offset(blade.face_height - HOSEL_SEAT_DEPTH, loft_deg);
    info!(heel_x, back, up, lie = lie_deg, "placing hosel");

    let moved = kernel.translate(&hosel, [heel_x, back, up])?;
    let tilt = -(90.0 - lie_deg).to_radians();
    let placed = kernel.rotate(&moved, [heel_x, back, up], [1.0, 0.0, 0.0], tilt)?;
    Ok(placed)
}

/// Fuse blade, sole, and placed hosel into one head. Computed
/// sequentially as (blade ∪ sole) ∪ hosel; the outcome is order
/// independent up to kernel tolerance.
pub fn fuse_head(
    kernel: &mut dyn Kernel,
    blade: SolidHandle,
    sole: SolidHandle,
    hosel: SolidHandle,
) -> Result<SolidHandle, OpError> {
    let body = kernel.union(&blade, &sole)?;
    let head = kernel.union(&body, &hosel)?;
    Ok(head)
}

#[cfg(test)]
mod tests {
    use super::topline_offset;

    #[test]
    fn topline_offset_matches_the_loft_trig() {
        let (back, up) = topline_offset(49.0, 56.0);
        let loft = 56f64.to_radians();
        assert!((back - 49.0 * loft.sin()).abs() < 1e-12);
        assert!((up - 49.0 * loft.cos()).abs() < 1e-12);
        assert!((back - 40.6).abs() < 0.05, "back {back}");
        assert!((up - 27.4).abs() < 0.05, "up {up}");
    }

    #[test]
    fn zero_loft_keeps_the_topline_overhead() {
        let (back, up) = topline_offset(49.0, 0.0);
        assert!(back.abs() < 1e-12);
        assert!((up - 49.0).abs() < 1e-12);
    }
}
