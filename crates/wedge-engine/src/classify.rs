//! Sole grind classification.
//!
//! A grind is named from the finished sole parameters by an ordered rule
//! table; the first matching rule wins and `Standard` catches the rest.
//! Relief dominates: a head with aggressive heel or toe relief is a
//! relief grind no matter how wide or low-bounce its sole is.

use std::fmt;

use serde::Serialize;
use wedge_types::WedgeSpec;

/// Relief angle beyond which a sole counts as a relief grind.
const HIGH_RELIEF_MIN_ANGLE: f64 = 2.5;
/// Center sole width beyond which a sole counts as wide.
const WIDE_SOLE_MIN_WIDTH: f64 = 23.0;
/// Bounce below which a sole counts as low-bounce.
const LOW_BOUNCE_MAX: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrindStyle {
    HighRelief,
    WideSole,
    LowBounce,
    Standard,
}

impl GrindStyle {
    pub fn label(&self) -> &'static str {
        match self {
            GrindStyle::HighRelief => "High Relief (S-Grind)",
            GrindStyle::WideSole => "Wide Sole (K-Grind)",
            GrindStyle::LowBounce => "Low Bounce (L-Grind)",
            GrindStyle::Standard => "Standard (F/M-Grind)",
        }
    }
}

impl fmt::Display for GrindStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The sole parameters the classification looks at.
#[derive(Debug, Clone, Copy)]
pub struct GrindInputs {
    pub bounce: f64,
    pub sole_width: f64,
    pub heel_relief: f64,
    pub toe_relief: f64,
}

impl GrindInputs {
    pub fn from_spec(spec: &WedgeSpec) -> Self {
        Self {
            bounce: spec.bounce,
            sole_width: spec.sole.width_center,
            heel_relief: spec.sole.heel_relief_angle,
            toe_relief: spec.sole.toe_relief_angle,
        }
    }
}

fn is_high_relief(g: &GrindInputs) -> bool {
    g.heel_relief.max(g.toe_relief) > HIGH_RELIEF_MIN_ANGLE
}

fn is_wide_sole(g: &GrindInputs) -> bool {
    g.sole_width > WIDE_SOLE_MIN_WIDTH
}

fn is_low_bounce(g: &GrindInputs) -> bool {
    g.bounce < LOW_BOUNCE_MAX
}

/// Ordered rule table; earlier rules take priority.
static GRIND_RULES: [(fn(&GrindInputs) -> bool, GrindStyle); 3] = [
    (is_high_relief, GrindStyle::HighRelief),
    (is_wide_sole, GrindStyle::WideSole),
    (is_low_bounce, GrindStyle::LowBounce),
];

pub fn classify(inputs: &GrindInputs) -> GrindStyle {
    for (matches, style) in &GRIND_RULES {
        if matches(inputs) {
            return *style;
        }
    }
    GrindStyle::Standard
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(bounce: f64, width: f64, heel: f64, toe: f64) -> GrindInputs {
        GrindInputs {
            bounce,
            sole_width: width,
            heel_relief: heel,
            toe_relief: toe,
        }
    }

    #[test]
    fn relief_outranks_width_and_bounce() {
        // Narrow sole, healthy bounce: relief alone decides.
        assert_eq!(
            classify(&inputs(10.0, 18.0, 3.0, 0.0)),
            GrindStyle::HighRelief
        );
        // Even when wide-sole and low-bounce rules would also match.
        assert_eq!(
            classify(&inputs(2.0, 26.0, 0.0, 2.6)),
            GrindStyle::HighRelief
        );
    }

    #[test]
    fn width_outranks_bounce() {
        assert_eq!(classify(&inputs(2.0, 24.0, 0.0, 0.0)), GrindStyle::WideSole);
    }

    #[test]
    fn low_bounce_and_standard() {
        assert_eq!(
            classify(&inputs(4.0, 21.0, 1.0, 1.0)),
            GrindStyle::LowBounce
        );
        assert_eq!(
            classify(&inputs(8.0, 21.0, 1.5, 2.0)),
            GrindStyle::Standard
        );
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(
            classify(&inputs(6.0, 23.0, 2.5, 2.5)),
            GrindStyle::Standard,
            "boundary values must not trip the rules"
        );
    }

    #[test]
    fn default_spec_is_standard() {
        let spec = wedge_types::WedgeSpec::default();
        assert_eq!(classify(&GrindInputs::from_spec(&spec)), GrindStyle::Standard);
    }
}
