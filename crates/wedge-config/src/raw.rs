//! Raw document shape as it appears on disk.
//!
//! Every leaf is optional; merging onto [`WedgeSpec::default`] fills the
//! gaps, except loft, lie, and bounce which the document must state.
//! Unknown keys are tolerated so documents can carry annotations.

use serde::Deserialize;
use wedge_types::{GrooveType, WedgeSpec};

use crate::ConfigError;

#[derive(Debug, Deserialize)]
pub(crate) struct RawDocument {
    pub wedge_specs: Option<RawWedgeSpec>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawWedgeSpec {
    pub name: Option<String>,
    pub loft: Option<f64>,
    pub lie: Option<f64>,
    pub bounce: Option<f64>,
    pub blade_length: Option<f64>,
    pub face_height: Option<f64>,
    pub topline_thickness: Option<f64>,
    pub hosel: RawHosel,
    pub sole: RawSole,
    pub face: RawFace,
    pub weight: RawWeight,
    pub material: RawMaterial,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawHosel {
    pub height: Option<f64>,
    pub outer_diameter: Option<f64>,
    pub bore_diameter: Option<f64>,
    pub bore_depth: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawSole {
    pub width_center: Option<f64>,
    pub width_heel: Option<f64>,
    pub width_toe: Option<f64>,
    pub leading_edge_radius: Option<f64>,
    pub trailing_edge_relief: Option<f64>,
    pub trailing_edge_start: Option<f64>,
    pub heel_relief_start: Option<f64>,
    pub heel_relief_angle: Option<f64>,
    pub toe_relief_start: Option<f64>,
    pub toe_relief_angle: Option<f64>,
    pub bounce_rocker_radius: Option<f64>,
    pub sole_camber_radius: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawFace {
    pub grooves: RawGrooves,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawGrooves {
    pub spacing: Option<f64>,
    pub width: Option<f64>,
    pub depth: Option<f64>,
    pub count: Option<u32>,
    pub edge_clearance: Option<f64>,
    #[serde(rename = "type")]
    pub groove_type: Option<GrooveType>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawWeight {
    pub target_head_weight: Option<f64>,
    pub tolerance: Option<f64>,
    pub cg_tolerance: Option<f64>,
    pub center_of_gravity: RawCg,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawCg {
    pub from_face: Option<f64>,
    pub from_heel: Option<f64>,
    pub from_sole: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawMaterial {
    pub name: Option<String>,
    pub density: Option<f64>,
}

fn apply<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

impl RawWedgeSpec {
    pub(crate) fn into_spec(self) -> Result<WedgeSpec, ConfigError> {
        let mut spec = WedgeSpec::default();

        apply(&mut spec.name, self.name);
        spec.loft = self.loft.ok_or(ConfigError::MissingField {
            path: "wedge_specs.loft",
        })?;
        spec.lie = self.lie.ok_or(ConfigError::MissingField {
            path: "wedge_specs.lie",
        })?;
        spec.bounce = self.bounce.ok_or(ConfigError::MissingField {
            path: "wedge_specs.bounce",
        })?;

        apply(&mut spec.blade.length, self.blade_length);
        apply(&mut spec.blade.face_height, self.face_height);
        apply(&mut spec.blade.topline_thickness, self.topline_thickness);

        apply(&mut spec.hosel.height, self.hosel.height);
        apply(&mut spec.hosel.outer_diameter, self.hosel.outer_diameter);
        apply(&mut spec.hosel.bore_diameter, self.hosel.bore_diameter);
        apply(&mut spec.hosel.bore_depth, self.hosel.bore_depth);

        apply(&mut spec.sole.width_center, self.sole.width_center);
        // Heel and toe widths default relative to the center section.
        spec.sole.width_heel = self
            .sole
            .width_heel
            .unwrap_or(spec.sole.width_center - 3.0);
        spec.sole.width_toe = self.sole.width_toe.unwrap_or(spec.sole.width_center - 4.0);
        apply(
            &mut spec.sole.leading_edge_radius,
            self.sole.leading_edge_radius,
        );
        apply(
            &mut spec.sole.trailing_edge_relief,
            self.sole.trailing_edge_relief,
        );
        apply(
            &mut spec.sole.trailing_edge_start,
            self.sole.trailing_edge_start,
        );
        apply(&mut spec.sole.heel_relief_start, self.sole.heel_relief_start);
        apply(&mut spec.sole.heel_relief_angle, self.sole.heel_relief_angle);
        apply(&mut spec.sole.toe_relief_start, self.sole.toe_relief_start);
        apply(&mut spec.sole.toe_relief_angle, self.sole.toe_relief_angle);
        apply(
            &mut spec.sole.bounce_rocker_radius,
            self.sole.bounce_rocker_radius,
        );
        apply(
            &mut spec.sole.sole_camber_radius,
            self.sole.sole_camber_radius,
        );

        apply(&mut spec.grooves.spacing, self.face.grooves.spacing);
        apply(&mut spec.grooves.width, self.face.grooves.width);
        apply(&mut spec.grooves.depth, self.face.grooves.depth);
        apply(&mut spec.grooves.count, self.face.grooves.count);
        apply(
            &mut spec.grooves.edge_clearance,
            self.face.grooves.edge_clearance,
        );
        apply(&mut spec.grooves.groove_type, self.face.grooves.groove_type);

        apply(
            &mut spec.weight.target_head_weight,
            self.weight.target_head_weight,
        );
        apply(&mut spec.weight.tolerance, self.weight.tolerance);
        apply(&mut spec.weight.cg_tolerance, self.weight.cg_tolerance);
        apply(
            &mut spec.weight.center_of_gravity.from_face,
            self.weight.center_of_gravity.from_face,
        );
        apply(
            &mut spec.weight.center_of_gravity.from_heel,
            self.weight.center_of_gravity.from_heel,
        );
        apply(
            &mut spec.weight.center_of_gravity.from_sole,
            self.weight.center_of_gravity.from_sole,
        );

        apply(&mut spec.material.name, self.material.name);
        spec.material.density = self.material.density.or(spec.material.density);

        spec.validate()?;
        Ok(spec)
    }
}
