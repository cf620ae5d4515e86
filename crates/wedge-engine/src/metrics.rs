//! Mass and balance arithmetic over the kernel's geometric queries.

use wedge_types::{MaterialError, MaterialSpec, MaterialTable};

const MM3_PER_CM3: f64 = 1000.0;

/// Head mass in grams from a volume in mm³ and a density in g/cm³.
pub fn mass_grams(volume_mm3: f64, density_g_cm3: f64) -> f64 {
    volume_mm3 / MM3_PER_CM3 * density_g_cm3
}

/// Density for the head material: an explicit override in the spec wins,
/// otherwise the table decides.
pub fn resolve_density(
    material: &MaterialSpec,
    table: &MaterialTable,
) -> Result<f64, MaterialError> {
    if let Some(density) = material.density {
        return Ok(density);
    }
    table.density(&material.name)
}

/// Center of gravity restated as offsets from the head's datum planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CgOffsets {
    /// Behind the face plane.
    pub from_face: f64,
    /// From the heel end along the heel-toe axis.
    pub from_heel: f64,
    /// Above the sole plane.
    pub from_sole: f64,
}

/// Convert a model-frame centroid into datum offsets. The model frame
/// centers the blade on x = 0 with the face on y = 0 and the sole line
/// on z = 0, so only the heel axis needs shifting.
pub fn cg_offsets(centroid: [f64; 3], blade_length: f64) -> CgOffsets {
    CgOffsets {
        from_face: centroid[1],
        from_heel: centroid[0] + blade_length / 2.0,
        from_sole: centroid[2],
    }
}
