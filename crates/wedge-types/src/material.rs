//! Material density lookup.

use std::collections::HashMap;

use thiserror::Error;

/// Density assumed when a material is not in the table, g/cm³.
pub const GENERIC_STEEL_DENSITY: f64 = 7.85;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialError {
    #[error("unknown material '{name}' and the density fallback is disabled")]
    Unknown { name: String },
}

/// Closed map of alloy names to densities, injected into the metrics stage
/// so tests can substitute their own values. Lookup keys are normalized
/// (case, whitespace, hyphens), so "8620 Steel" and "8620_steel" agree.
#[derive(Debug, Clone)]
pub struct MaterialTable {
    densities: HashMap<String, f64>,
    fallback: Option<f64>,
}

impl Default for MaterialTable {
    fn default() -> Self {
        let mut densities = HashMap::new();
        for (name, density) in [
            ("8620_steel", 7.85),
            ("1020_steel", 7.87),
            ("304_stainless", 8.00),
            ("431_stainless", 7.75),
            ("carbon_steel", 7.85),
        ] {
            densities.insert(name.to_string(), density);
        }
        Self {
            densities,
            fallback: Some(GENERIC_STEEL_DENSITY),
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace([' ', '-'], "_")
}

impl MaterialTable {
    /// Disable the generic-steel fallback; unknown names become errors.
    pub fn strict(mut self) -> Self {
        self.fallback = None;
        self
    }

    /// Add or override an alloy.
    pub fn with_density(mut self, name: &str, density: f64) -> Self {
        self.densities.insert(normalize(name), density);
        self
    }

    /// Density in g/cm³ for a named alloy.
    pub fn density(&self, name: &str) -> Result<f64, MaterialError> {
        self.densities
            .get(&normalize(name))
            .copied()
            .or(self.fallback)
            .ok_or_else(|| MaterialError::Unknown {
                name: name.to_string(),
            })
    }

    /// Whether the name resolves without the fallback.
    pub fn contains(&self, name: &str) -> bool {
        self.densities.contains_key(&normalize(name))
    }
}
