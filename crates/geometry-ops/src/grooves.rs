//! Scoreline layout and cutting.
//!
//! Grooves are laid out on the unrotated face (z measures height up the
//! face from the sole line), cut by prisms swept heel-to-toe, and the
//! prisms get the same loft rotation as the blade so they land on the
//! leaned-back face.

use kernel_bridge::{Kernel, KernelError, SolidHandle};
use tracing::{info, warn};
use wedge_types::{BladeParams, GrooveParams, GrooveType};

use crate::types::{FeatureWarning, OpError};

/// Maximum conforming groove pitch under the USGA equipment rules.
pub const USGA_MAX_GROOVE_SPACING: f64 = 3.81;
/// Cutter overshoot past each end of the blade.
const CUTTER_END_MARGIN: f64 = 5.0;
/// How far the cutter pokes out in front of the face plane. Keeps the
/// tool's open side off the face itself, which the boolean cannot share.
const CUTTER_FACE_LIP: f64 = 0.3;

/// Where the scorelines land on the face.
#[derive(Debug, Clone, PartialEq)]
pub struct GrooveLayout {
    pub requested: u32,
    /// Count after clamping to what the face can hold.
    pub actual: u32,
    pub spacing: f64,
    /// Height of each groove centerline above the sole line.
    pub offsets: Vec<f64>,
    pub usga_compliant: bool,
}

/// The blade after cutting, with the layout that was applied.
#[derive(Debug)]
pub struct GrooveOutcome {
    pub solid: SolidHandle,
    pub layout: GrooveLayout,
    pub warnings: Vec<FeatureWarning>,
}

/// Fit as many of the requested grooves as the face band allows. The
/// band leaves `edge_clearance` blank at the sole line and the topline;
/// a non-negative band always holds at least the first groove.
pub fn plan_grooves(params: &GrooveParams, face_height: f64) -> GrooveLayout {
    let band = face_height - 2.0 * params.edge_clearance;
    let fit = ((band / params.spacing).floor() + 1.0).max(0.0);
    let actual = (f64::from(params.count)).min(fit) as u32;
    let offsets = (0..actual)
        .map(|i| params.edge_clearance + f64::from(i) * params.spacing)
        .collect();
    GrooveLayout {
        requested: params.count,
        actual,
        spacing: params.spacing,
        offsets,
        usga_compliant: params.spacing <= USGA_MAX_GROOVE_SPACING,
    }
}

pub fn cut_grooves(
    kernel: &mut dyn Kernel,
    blade: SolidHandle,
    params: &GrooveParams,
    blade_params: &BladeParams,
    loft_deg: f64,
) -> Result<GrooveOutcome, OpError> {
    let layout = plan_grooves(params, blade_params.face_height);
    if layout.actual == 0 {
        return Ok(GrooveOutcome {
            solid: blade,
            layout,
            warnings: Vec::new(),
        });
    }
    if params.width <= 0.0 || params.depth <= 0.0 {
        return Err(OpError::InvalidParameter {
            reason: format!(
                "groove section must be positive (width {}, depth {})",
                params.width, params.depth
            ),
        });
    }
    if layout.actual < layout.requested {
        warn!(
            requested = layout.requested,
            actual = layout.actual,
            "groove count clamped to the face"
        );
    }
    if !layout.usga_compliant {
        warn!(
            spacing = layout.spacing,
            limit = USGA_MAX_GROOVE_SPACING,
            "groove spacing exceeds the USGA limit"
        );
    }
    info!(
        count = layout.actual,
        spacing = layout.spacing,
        kind = ?params.groove_type,
        "cutting grooves"
    );

    let cutter_length = blade_params.length + 2.0 * CUTTER_END_MARGIN;
    let mut current = blade;
    let mut warnings = Vec::new();
    for (index, &offset) in layout.offsets.iter().enumerate() {
        let profile = groove_profile(params, offset);
        match cut_one(kernel, &current, &profile, cutter_length, loft_deg) {
            Ok(next) => current = next,
            Err(err) => {
                warn!(groove = index, offset, %err, "groove skipped");
                warnings.push(FeatureWarning {
                    feature: format!("groove {index}"),
                    detail: format!("at {offset:.2} mm up the face: {err}"),
                });
            }
        }
    }

    Ok(GrooveOutcome {
        solid: current,
        layout,
        warnings,
    })
}

/// Cutter cross-section in the blade's (y, z) frame, counter-clockwise.
fn groove_profile(params: &GrooveParams, offset: f64) -> Vec<[f64; 2]> {
    let half = params.width / 2.0;
    match params.groove_type {
        GrooveType::V => {
            // Extend the flanks out to the lip plane so the section still
            // measures `width` exactly where it crosses the face.
            let flare = half * (params.depth + CUTTER_FACE_LIP) / params.depth;
            vec![
                [-CUTTER_FACE_LIP, offset - flare],
                [params.depth, offset],
                [-CUTTER_FACE_LIP, offset + flare],
            ]
        }
        GrooveType::U => vec![
            [-CUTTER_FACE_LIP, offset - half],
            [params.depth, offset - half],
            [params.depth, offset + half],
            [-CUTTER_FACE_LIP, offset + half],
        ],
    }
}

fn cut_one(
    kernel: &mut dyn Kernel,
    blade: &SolidHandle,
    profile: &[[f64; 2]],
    cutter_length: f64,
    loft_deg: f64,
) -> Result<SolidHandle, KernelError> {
    let cutter = kernel.extrude_profile_yz(profile, cutter_length)?;
    let cutter = kernel.translate(&cutter, [-cutter_length / 2.0, 0.0, 0.0])?;
    let cutter = kernel.rotate(
        &cutter,
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        (-loft_deg).to_radians(),
    )?;
    kernel.subtract(blade, &cutter)
}

#[cfg(test)]
mod tests {
    use wedge_types::{GrooveParams, GrooveType};

    use super::{groove_profile, plan_grooves, USGA_MAX_GROOVE_SPACING};

    const FACE_HEIGHT: f64 = 49.0;

    #[test]
    fn default_layout_fills_the_face() {
        let layout = plan_grooves(&GrooveParams::default(), FACE_HEIGHT);
        assert_eq!(layout.actual, 12);
        assert!(layout.usga_compliant);
        assert!((layout.offsets[0] - 3.0).abs() < 1e-9);
        let last = *layout.offsets.last().unwrap();
        assert!(
            last <= FACE_HEIGHT - 3.0,
            "top groove at {last} leaves no clearance"
        );
    }

    #[test]
    fn wide_spacing_fits_fewer_and_flags_the_limit() {
        let params = GrooveParams {
            spacing: 5.0,
            ..GrooveParams::default()
        };
        let layout = plan_grooves(&params, FACE_HEIGHT);
        assert_eq!(layout.actual, 9);
        assert!(!layout.usga_compliant);
        assert!(layout.spacing > USGA_MAX_GROOVE_SPACING);
    }

    #[test]
    fn request_is_clamped_not_padded() {
        let params = GrooveParams {
            count: 99,
            ..GrooveParams::default()
        };
        assert_eq!(plan_grooves(&params, FACE_HEIGHT).actual, 12);

        let few = GrooveParams {
            count: 4,
            ..GrooveParams::default()
        };
        assert_eq!(plan_grooves(&few, FACE_HEIGHT).actual, 4);
    }

    #[test]
    fn zero_width_band_still_holds_one_groove() {
        let params = GrooveParams {
            edge_clearance: FACE_HEIGHT / 2.0,
            ..GrooveParams::default()
        };
        assert_eq!(plan_grooves(&params, FACE_HEIGHT).actual, 1);
    }

    #[test]
    fn negative_band_holds_none() {
        let params = GrooveParams {
            edge_clearance: 25.0,
            ..GrooveParams::default()
        };
        let layout = plan_grooves(&params, FACE_HEIGHT);
        assert_eq!(layout.actual, 0);
        assert!(layout.offsets.is_empty());
    }

    #[test]
    fn v_cutter_measures_full_width_at_the_face_plane() {
        let params = GrooveParams::default();
        let profile = groove_profile(&params, 10.0);
        assert_eq!(profile.len(), 3);

        // Walk the lower flank from the lip to the apex and sample z at y = 0.
        let [y0, z0] = profile[0];
        let [y1, z1] = profile[1];
        let t = (0.0 - y0) / (y1 - y0);
        let z_at_face = z0 + t * (z1 - z0);
        assert!(
            (z_at_face - (10.0 - params.width / 2.0)).abs() < 1e-12,
            "flank crosses the face at {z_at_face}"
        );
    }

    #[test]
    fn u_cutter_is_rectangular() {
        let params = GrooveParams {
            groove_type: GrooveType::U,
            ..GrooveParams::default()
        };
        let profile = groove_profile(&params, 10.0);
        assert_eq!(profile.len(), 4);
        assert!((profile[1][0] - params.depth).abs() < 1e-12);
        assert!((profile[2][1] - profile[1][1] - params.width).abs() < 1e-12);
    }
}
