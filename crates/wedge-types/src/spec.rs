//! Parameter document for a single wedge head.
//!
//! All lengths are millimeters, all angles degrees. Defaults describe a
//! 56° sand wedge with a standard 0.355" taper-tip bore.

use serde::{Deserialize, Serialize};

/// Complete set of parameters driving one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WedgeSpec {
    /// Model name, used for the output artifact stem.
    pub name: String,
    /// Face angle from vertical.
    pub loft: f64,
    /// Shaft-to-ground angle at address.
    pub lie: f64,
    /// Sole angle relative to the ground at address.
    pub bounce: f64,
    pub blade: BladeParams,
    pub hosel: HoselParams,
    pub sole: SoleParams,
    pub grooves: GrooveParams,
    pub weight: WeightTargets,
    pub material: MaterialSpec,
}

impl Default for WedgeSpec {
    fn default() -> Self {
        Self {
            name: "MyWedge".to_string(),
            loft: 56.0,
            lie: 64.0,
            bounce: 8.0,
            blade: BladeParams::default(),
            hosel: HoselParams::default(),
            sole: SoleParams::default(),
            grooves: GrooveParams::default(),
            weight: WeightTargets::default(),
            material: MaterialSpec::default(),
        }
    }
}

/// Blade body parameters. The cross-section is fixed in shape (vertical
/// face, offset topline, stepped back) and scaled by these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BladeParams {
    /// Heel-to-toe length.
    pub length: f64,
    /// Sole plane to topline, measured along the face.
    pub face_height: f64,
    /// Front-to-back thickness at the topline.
    pub topline_thickness: f64,
}

impl Default for BladeParams {
    fn default() -> Self {
        Self {
            length: 74.0,
            face_height: 49.0,
            topline_thickness: 3.0,
        }
    }
}

/// Hosel (shaft socket) parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoselParams {
    pub height: f64,
    pub outer_diameter: f64,
    /// Must match the standard shaft tip; see [`crate::limits`].
    pub bore_diameter: f64,
    /// Measured down from the top face. Must stay short of `height`.
    pub bore_depth: f64,
}

impl Default for HoselParams {
    fn default() -> Self {
        Self {
            height: 42.0,
            outer_diameter: 14.5,
            bore_diameter: 9.4,
            bore_depth: 38.0,
        }
    }
}

/// Sole plate parameters. Relief angles shape the heel and toe chamfers;
/// trailing-edge relief and the rocker/camber radii are accepted and
/// carried for reporting but are not realized as geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoleParams {
    pub width_center: f64,
    pub width_heel: f64,
    pub width_toe: f64,
    pub leading_edge_radius: f64,
    pub trailing_edge_relief: f64,
    pub trailing_edge_start: f64,
    /// Distance from the heel end where heel relief begins.
    pub heel_relief_start: f64,
    pub heel_relief_angle: f64,
    pub toe_relief_start: f64,
    pub toe_relief_angle: f64,
    pub bounce_rocker_radius: f64,
    pub sole_camber_radius: f64,
}

impl Default for SoleParams {
    fn default() -> Self {
        Self {
            width_center: 21.0,
            width_heel: 18.0,
            width_toe: 17.0,
            leading_edge_radius: 0.6,
            trailing_edge_relief: 2.0,
            trailing_edge_start: 15.0,
            heel_relief_start: 12.0,
            heel_relief_angle: 1.5,
            toe_relief_start: 18.0,
            toe_relief_angle: 2.0,
            bounce_rocker_radius: 180.0,
            sole_camber_radius: 200.0,
        }
    }
}

/// Scoreline cross-section shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GrooveType {
    /// Triangular cut, modern conforming profile.
    V,
    /// Rectangular cut, pre-2010 square profile.
    U,
}

/// Face scoreline parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrooveParams {
    /// Center-to-center distance along the face.
    pub spacing: f64,
    pub width: f64,
    pub depth: f64,
    /// Requested number of grooves; the layout clamps to what fits.
    pub count: u32,
    /// Keep-out band from the sole and topline edges of the face.
    pub edge_clearance: f64,
    pub groove_type: GrooveType,
}

impl Default for GrooveParams {
    fn default() -> Self {
        Self {
            spacing: 3.81,
            width: 0.9,
            depth: 0.4,
            count: 12,
            edge_clearance: 3.0,
            groove_type: GrooveType::V,
        }
    }
}

/// Head mass and balance targets checked by the validation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightTargets {
    /// Grams.
    pub target_head_weight: f64,
    /// Allowed mass deviation, grams.
    pub tolerance: f64,
    /// Allowed per-axis CG deviation, millimeters.
    pub cg_tolerance: f64,
    pub center_of_gravity: CgTargets,
}

impl Default for WeightTargets {
    fn default() -> Self {
        Self {
            target_head_weight: 292.0,
            tolerance: 5.0,
            cg_tolerance: 2.0,
            center_of_gravity: CgTargets::default(),
        }
    }
}

/// Target center of gravity, expressed as offsets from the head's own
/// datum planes rather than model coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgTargets {
    /// Behind the face plane.
    pub from_face: f64,
    /// Along the heel-toe axis, from the heel end.
    pub from_heel: f64,
    /// Above the sole plane.
    pub from_sole: f64,
}

impl Default for CgTargets {
    fn default() -> Self {
        Self {
            from_face: 20.0,
            from_heel: 37.0,
            from_sole: 19.0,
        }
    }
}

/// Head material. `density` overrides the table lookup when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub name: String,
    /// g/cm³.
    pub density: Option<f64>,
}

impl Default for MaterialSpec {
    fn default() -> Self {
        Self {
            name: "8620 steel".to_string(),
            density: None,
        }
    }
}
