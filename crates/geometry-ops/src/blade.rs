//! Blade body: a face cross-section swept heel-to-toe, then lofted back.
//!
//! The local frame before the loft rotation: X runs heel-to-toe, the
//! striking face lies in the y = 0 plane and z climbs the face. Rotating
//! by -loft about X leans the face back so its normal gains the upward
//! component a lofted club presents at address.

use kernel_bridge::{EdgeSelector, Kernel};
use tracing::{info, warn};
use wedge_types::BladeParams;

use crate::types::{BuiltComponent, FeatureWarning, OpError};

/// Rounding attempted along the topline after the sweep.
const TOPLINE_FILLET_RADIUS: f64 = 1.0;
/// How far the muscle back sits behind the face at sole level.
const BACK_SOLE_OFFSET: f64 = 7.0;
/// Height fraction where the back shelf starts tapering to the topline.
const BACK_STEP_FRACTION: f64 = 0.3;

/// Cross-section corners in the (y, z) plane, counter-clockwise.
///
/// The face is the segment from (0, 0) up to (0, face_height); the back
/// runs full thickness to 30% of the height, then tapers in to the
/// topline.
pub fn blade_profile(params: &BladeParams) -> Vec<[f64; 2]> {
    let h = params.face_height;
    vec![
        [0.0, 0.0],
        [BACK_SOLE_OFFSET, 0.0],
        [BACK_SOLE_OFFSET, BACK_STEP_FRACTION * h],
        [params.topline_thickness, h],
        [0.0, h],
    ]
}

pub fn build_blade(
    kernel: &mut dyn Kernel,
    params: &BladeParams,
    loft_deg: f64,
) -> Result<BuiltComponent, OpError> {
    if params.length <= 0.0 || params.face_height <= 0.0 || params.topline_thickness <= 0.0 {
        return Err(OpError::InvalidParameter {
            reason: format!(
                "blade dimensions must be positive (length {}, face height {}, topline {})",
                params.length, params.face_height, params.topline_thickness
            ),
        });
    }
    info!(
        length = params.length,
        face_height = params.face_height,
        loft = loft_deg,
        "building blade"
    );

    let profile = blade_profile(params);
    let body = kernel.extrude_profile_yz(&profile, params.length)?;
    let body = kernel.translate(&body, [-params.length / 2.0, 0.0, 0.0])?;
    let body = kernel.rotate(
        &body,
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        (-loft_deg).to_radians(),
    )?;

    let mut warnings = Vec::new();
    let body = match kernel.fillet_edges(&body, EdgeSelector::XParallelTopmost, TOPLINE_FILLET_RADIUS)
    {
        Ok(rounded) => rounded,
        Err(err) => {
            warn!(%err, "topline fillet skipped");
            warnings.push(FeatureWarning::skipped(
                "topline fillet",
                EdgeSelector::XParallelTopmost,
                &err,
            ));
            body
        }
    };

    Ok(BuiltComponent {
        solid: body,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use wedge_types::BladeParams;

    use super::blade_profile;

    fn shoelace(points: &[[f64; 2]]) -> f64 {
        let mut doubled = 0.0;
        for i in 0..points.len() {
            let [y0, z0] = points[i];
            let [y1, z1] = points[(i + 1) % points.len()];
            doubled += y0 * z1 - y1 * z0;
        }
        doubled / 2.0
    }

    #[test]
    fn profile_is_counter_clockwise() {
        let area = shoelace(&blade_profile(&BladeParams::default()));
        assert!(area > 0.0, "winding flipped, area {area}");
    }

    #[test]
    fn default_profile_area() {
        let area = shoelace(&blade_profile(&BladeParams::default()));
        assert!((area - 274.4).abs() < 1e-9, "area {area}");
    }

    #[test]
    fn face_edge_spans_the_full_height() {
        let params = BladeParams::default();
        let profile = blade_profile(&params);
        assert_eq!(profile.first(), Some(&[0.0, 0.0]));
        assert_eq!(profile.last(), Some(&[0.0, params.face_height]));
    }
}
