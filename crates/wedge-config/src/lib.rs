//! Parameter document loading.
//!
//! Wedge parameters arrive as a YAML document under a `wedge_specs:` root
//! key. Loft, lie, and bounce are required; every other key falls back to
//! the defaults in [`wedge_types`]. Documents are range-checked at load
//! time so a bad angle fails here, before any geometry work starts.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use wedge_types::{SpecError, WedgeSpec};

mod raw;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yml::Error),

    #[error("required key missing: {path}")]
    MissingField { path: &'static str },

    #[error("invalid configuration: {0}")]
    Invalid(#[from] SpecError),
}

/// Load and validate a wedge parameter file.
pub fn load_path(path: &Path) -> Result<WedgeSpec, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_owned(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_owned(),
        source,
    })?;
    let spec = load_str(&content)?;
    info!(path = %path.display(), name = %spec.name, "loaded wedge configuration");
    Ok(spec)
}

/// Parse and validate a wedge parameter document.
pub fn load_str(content: &str) -> Result<WedgeSpec, ConfigError> {
    let document: raw::RawDocument = serde_yml::from_str(content)?;
    let raw = document.wedge_specs.ok_or(ConfigError::MissingField {
        path: "wedge_specs",
    })?;
    raw.into_spec()
}

#[cfg(test)]
mod tests {
    use wedge_types::{GrooveType, SpecError};

    use super::*;

    const MINIMAL: &str = "
wedge_specs:
  loft: 56.0
  lie: 64.0
  bounce: 8.0
";

    #[test]
    fn minimal_document_fills_defaults() {
        let spec = load_str(MINIMAL).unwrap();
        assert_eq!(spec.loft, 56.0);
        assert_eq!(spec.blade.length, 74.0);
        assert_eq!(spec.hosel.bore_diameter, 9.4);
        assert_eq!(spec.grooves.count, 12);
        assert_eq!(spec.material.name, "8620 steel");
        assert_eq!(spec.material.density, None);
    }

    #[test]
    fn heel_and_toe_widths_default_relative_to_center() {
        let spec = load_str(MINIMAL).unwrap();
        assert_eq!(spec.sole.width_heel, spec.sole.width_center - 3.0);
        assert_eq!(spec.sole.width_toe, spec.sole.width_center - 4.0);

        let custom = "
wedge_specs:
  loft: 56.0
  lie: 64.0
  bounce: 8.0
  sole:
    width_center: 25.0
";
        let spec = load_str(custom).unwrap();
        assert_eq!(spec.sole.width_heel, 22.0);
        assert_eq!(spec.sole.width_toe, 21.0);
    }

    #[test]
    fn explicit_widths_win_over_derived_ones() {
        let text = "
wedge_specs:
  loft: 56.0
  lie: 64.0
  bounce: 8.0
  sole:
    width_center: 25.0
    width_heel: 19.0
";
        let spec = load_str(text).unwrap();
        assert_eq!(spec.sole.width_heel, 19.0);
        assert_eq!(spec.sole.width_toe, 21.0);
    }

    #[test]
    fn nested_values_land_in_the_spec() {
        let text = "
wedge_specs:
  name: Lob Wedge
  loft: 60.0
  lie: 64.5
  bounce: 10.0
  blade_length: 75.5
  hosel:
    bore_depth: 36.0
  face:
    grooves:
      count: 14
      type: U
  material:
    name: 431 stainless
    density: 7.75
";
        let spec = load_str(text).unwrap();
        assert_eq!(spec.name, "Lob Wedge");
        assert_eq!(spec.blade.length, 75.5);
        assert_eq!(spec.hosel.bore_depth, 36.0);
        assert_eq!(spec.grooves.count, 14);
        assert_eq!(spec.grooves.groove_type, GrooveType::U);
        assert_eq!(spec.material.density, Some(7.75));
    }

    #[test]
    fn missing_required_keys_name_their_path() {
        let text = "
wedge_specs:
  lie: 64.0
  bounce: 8.0
";
        match load_str(text) {
            Err(ConfigError::MissingField { path }) => assert_eq!(path, "wedge_specs.loft"),
            other => panic!("expected a missing-field error, got {other:?}"),
        }

        match load_str("other_key: 1\n") {
            Err(ConfigError::MissingField { path }) => assert_eq!(path, "wedge_specs"),
            other => panic!("expected a missing-root error, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_angles_fail_at_load() {
        let text = "
wedge_specs:
  loft: 70.0
  lie: 64.0
  bounce: 8.0
";
        match load_str(text) {
            Err(ConfigError::Invalid(SpecError::LoftOutOfRange { value, .. })) => {
                assert_eq!(value, 70.0);
            }
            other => panic!("expected a range error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = load_str("wedge_specs: [not a map").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_reported_by_path() {
        let path = std::env::temp_dir().join("wedgegen-does-not-exist.yaml");
        match load_path(&path) {
            Err(ConfigError::NotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected not-found, got {other:?}"),
        }
    }
}
