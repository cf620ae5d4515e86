//! Spec builders and shared fixtures for scenario tests.

use wedge_types::WedgeSpec;

/// Unified error type for harness assertions.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },
}

impl HarnessError {
    pub fn failed(detail: impl Into<String>) -> Self {
        Self::AssertionFailed {
            detail: detail.into(),
        }
    }
}

/// Stock 56/64/8 spec, untouched.
pub fn stock_spec() -> WedgeSpec {
    WedgeSpec::default()
}

/// Stock spec with one tweak applied. Keeps scenario setup on a single line.
pub fn spec_with(mutate: impl FnOnce(&mut WedgeSpec)) -> WedgeSpec {
    let mut spec = WedgeSpec::default();
    mutate(&mut spec);
    spec
}

/// A complete configuration document in the on-disk format: a 58° tour
/// wedge in 431 stainless with a wide sole and U grooves.
pub const SAMPLE_CONFIG: &str = r#"
wedge_specs:
  name: Tour Issue SW
  loft: 58.0
  lie: 63.5
  bounce: 12.0
  blade_length: 75.0
  face_height: 50.0
  sole:
    width_center: 24.0
  face:
    grooves:
      type: U
      count: 14
  material:
    name: 431 stainless
"#;
