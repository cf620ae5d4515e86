//! Hard parameter limits and pre-kernel validation.
//!
//! Violations are fatal: nothing here may reach the kernel. Soft targets
//! (mass, CG, groove compliance) are report data and live elsewhere.

use thiserror::Error;

use crate::spec::WedgeSpec;

/// Manufacturable wedge loft range, degrees.
pub const LOFT_RANGE: (f64, f64) = (45.0, 64.0);
/// Playable lie range, degrees.
pub const LIE_RANGE: (f64, f64) = (60.0, 66.0);
/// Bounce range, degrees.
pub const BOUNCE_RANGE: (f64, f64) = (0.0, 16.0);
/// Sole width range at the center section, millimeters.
pub const SOLE_WIDTH_RANGE: (f64, f64) = (15.0, 30.0);
/// Standard 0.355" taper shaft tip, millimeters.
pub const STANDARD_BORE_DIAMETER: f64 = 9.4;
/// Allowed deviation from the standard bore.
pub const BORE_DIAMETER_TOLERANCE: f64 = 0.1;
/// Minimum total wall material around the bore (outer − bore diameter).
pub const MIN_BORE_WALL: f64 = 3.0;

/// A parameter the generator refuses to build from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    #[error("loft {value}° is outside the wedge range {min}°..={max}°")]
    LoftOutOfRange { value: f64, min: f64, max: f64 },

    #[error("lie {value}° is outside the range {min}°..={max}°")]
    LieOutOfRange { value: f64, min: f64, max: f64 },

    #[error("bounce {value}° is outside the range {min}°..={max}°")]
    BounceOutOfRange { value: f64, min: f64, max: f64 },

    #[error("sole width {value} mm is outside the range {min}..={max} mm")]
    SoleWidthOutOfRange { value: f64, min: f64, max: f64 },

    #[error(
        "bore diameter {value} mm does not fit the standard shaft tip \
         {standard} ± {tolerance} mm"
    )]
    NonStandardBore {
        value: f64,
        standard: f64,
        tolerance: f64,
    },

    #[error("bore depth {depth} mm would pierce the hosel base (height {height} mm)")]
    BoreThroughBase { depth: f64, height: f64 },

    #[error(
        "hosel outer diameter {outer} mm leaves less than {min_wall} mm of wall \
         around a {bore} mm bore"
    )]
    HoselWallTooThin { outer: f64, bore: f64, min_wall: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("groove edge clearance must be non-negative, got {value}")]
    NegativeClearance { value: f64 },
}

fn check_range(
    value: f64,
    (min, max): (f64, f64),
    make: impl Fn(f64, f64, f64) -> SpecError,
) -> Result<(), SpecError> {
    if value < min || value > max {
        return Err(make(value, min, max));
    }
    Ok(())
}

fn check_positive(name: &'static str, value: f64) -> Result<(), SpecError> {
    if value <= 0.0 {
        return Err(SpecError::NonPositive { name, value });
    }
    Ok(())
}

impl WedgeSpec {
    /// Check every hard invariant. The first violation wins; callers run
    /// this before any kernel work.
    pub fn validate(&self) -> Result<(), SpecError> {
        check_range(self.loft, LOFT_RANGE, |value, min, max| {
            SpecError::LoftOutOfRange { value, min, max }
        })?;
        check_range(self.lie, LIE_RANGE, |value, min, max| {
            SpecError::LieOutOfRange { value, min, max }
        })?;
        check_range(self.bounce, BOUNCE_RANGE, |value, min, max| {
            SpecError::BounceOutOfRange { value, min, max }
        })?;
        check_range(
            self.sole.width_center,
            SOLE_WIDTH_RANGE,
            |value, min, max| SpecError::SoleWidthOutOfRange { value, min, max },
        )?;

        check_positive("blade length", self.blade.length)?;
        check_positive("face height", self.blade.face_height)?;
        check_positive("topline thickness", self.blade.topline_thickness)?;

        check_positive("hosel height", self.hosel.height)?;
        check_positive("hosel outer diameter", self.hosel.outer_diameter)?;
        check_positive("bore diameter", self.hosel.bore_diameter)?;
        check_positive("bore depth", self.hosel.bore_depth)?;

        if (self.hosel.bore_diameter - STANDARD_BORE_DIAMETER).abs() > BORE_DIAMETER_TOLERANCE {
            return Err(SpecError::NonStandardBore {
                value: self.hosel.bore_diameter,
                standard: STANDARD_BORE_DIAMETER,
                tolerance: BORE_DIAMETER_TOLERANCE,
            });
        }
        if self.hosel.bore_depth >= self.hosel.height {
            return Err(SpecError::BoreThroughBase {
                depth: self.hosel.bore_depth,
                height: self.hosel.height,
            });
        }
        if self.hosel.outer_diameter < self.hosel.bore_diameter + MIN_BORE_WALL {
            return Err(SpecError::HoselWallTooThin {
                outer: self.hosel.outer_diameter,
                bore: self.hosel.bore_diameter,
                min_wall: MIN_BORE_WALL,
            });
        }

        check_positive("groove spacing", self.grooves.spacing)?;
        check_positive("groove width", self.grooves.width)?;
        check_positive("groove depth", self.grooves.depth)?;
        if self.grooves.edge_clearance < 0.0 {
            return Err(SpecError::NegativeClearance {
                value: self.grooves.edge_clearance,
            });
        }

        Ok(())
    }
}
