//! Assertion helpers with diagnostic output.
//!
//! Every failure names the quantity, the expected and actual values, and
//! the tolerance, so a scenario failure reads without a debugger.

use geometry_ops::USGA_MAX_GROOVE_SPACING;
use wedge_engine::ValidationReport;

use crate::helpers::HarnessError;

/// Assert two floats agree within `tol`.
pub fn assert_close(actual: f64, expected: f64, tol: f64, ctx: &str) -> Result<(), HarnessError> {
    if (actual - expected).abs() <= tol {
        Ok(())
    } else {
        Err(HarnessError::failed(format!(
            "[{ctx}] expected {expected:.4}, got {actual:.4} (tol={tol})"
        )))
    }
}

/// Assert two floats agree within a relative fraction of the expected value.
pub fn assert_close_rel(
    actual: f64,
    expected: f64,
    fraction: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    assert_close(actual, expected, expected.abs() * fraction, ctx)
}

/// Assert the report's mass line matches its own volume at the given density.
pub fn assert_mass_consistent(
    report: &ValidationReport,
    density_g_cm3: f64,
) -> Result<(), HarnessError> {
    let expected = report.volume_mm3 / 1000.0 * density_g_cm3;
    assert_close(report.mass.measured, expected, 1e-6, "mass vs volume")
}

/// Assert the groove summary is internally coherent: the cut count never
/// exceeds the request, and the compliance flag matches the spacing.
pub fn assert_groove_summary_sound(report: &ValidationReport) -> Result<(), HarnessError> {
    let g = &report.grooves;
    if g.actual > g.requested {
        return Err(HarnessError::failed(format!(
            "groove summary cut {} grooves but only {} were requested",
            g.actual, g.requested
        )));
    }
    if g.usga_compliant != (g.spacing <= USGA_MAX_GROOVE_SPACING) {
        return Err(HarnessError::failed(format!(
            "groove compliance flag {} disagrees with spacing {:.2} mm",
            g.usga_compliant, g.spacing
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_failure_names_the_context() {
        let err = assert_close(1.0, 2.0, 0.5, "widget width").unwrap_err();
        let text = err.to_string();
        assert!(text.contains("widget width"), "got: {text}");
        assert!(text.contains("2.0000"), "got: {text}");
    }

    #[test]
    fn relative_tolerance_scales_with_expected() {
        assert!(assert_close_rel(102.0, 100.0, 0.05, "ok").is_ok());
        assert!(assert_close_rel(110.0, 100.0, 0.05, "off").is_err());
    }
}
