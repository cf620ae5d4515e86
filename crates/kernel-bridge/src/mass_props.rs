//! Volume, centroid and bounds from the triangulated boundary.
//!
//! Integrates signed tetrahedra (each triangle against the origin), so the
//! result is exact for the piecewise-linear approximation and independent
//! of where the body sits. A globally inverted mesh flips the sign of the
//! volume sum; the centroid ratio cancels it, and the volume is reported
//! as the absolute value.

use truck_meshalgo::prelude::*;
use truck_meshalgo::tessellation::{MeshableShape, MeshedShape};
use truck_modeling::{EuclideanSpace, InnerSpace, Vector3};

use crate::types::KernelError;

type TruckSolid = truck_modeling::Solid;

/// Chord tolerance for the measurement mesh. Finer than a preview mesh;
/// keeps cylinder volumes within a fraction of a percent at hosel scale.
pub(crate) const MEASURE_TOLERANCE: f64 = 0.01;

/// Everything the kernel queries report about one solid, computed in a
/// single tessellation pass and cached per handle.
#[derive(Debug, Clone)]
pub(crate) struct SolidMeasure {
    pub volume: f64,
    pub centroid: [f64; 3],
    pub bbox_min: [f64; 3],
    pub bbox_max: [f64; 3],
}

pub(crate) fn measure(solid: &TruckSolid, tolerance: f64) -> Result<SolidMeasure, KernelError> {
    let mesh = solid.triangulation(tolerance).to_polygon();
    let positions = mesh.positions();
    let tris = mesh.tri_faces();

    if tris.is_empty() {
        return Err(KernelError::TessellationFailed {
            reason: "triangulation produced no triangles".to_string(),
        });
    }

    let mut signed_volume = 0.0;
    let mut moment = Vector3::new(0.0, 0.0, 0.0);
    for tri in tris {
        let a = positions[tri[0].pos].to_vec();
        let b = positions[tri[1].pos].to_vec();
        let c = positions[tri[2].pos].to_vec();
        let tet = a.dot(b.cross(c)) / 6.0;
        signed_volume += tet;
        // Tetrahedron centroid with the fourth vertex at the origin.
        moment += (a + b + c) / 4.0 * tet;
    }

    if signed_volume.abs() < 1e-9 {
        return Err(KernelError::TessellationFailed {
            reason: "enclosed volume is degenerate".to_string(),
        });
    }
    let centroid = moment / signed_volume;

    let mut bbox_min = [f64::MAX; 3];
    let mut bbox_max = [f64::MIN; 3];
    for p in positions {
        for i in 0..3 {
            bbox_min[i] = bbox_min[i].min(p[i]);
            bbox_max[i] = bbox_max[i].max(p[i]);
        }
    }

    Ok(SolidMeasure {
        volume: signed_volume.abs(),
        centroid: [centroid.x, centroid.y, centroid.z],
        bbox_min,
        bbox_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives;
    use std::f64::consts::PI;

    #[test]
    fn box_volume_and_centroid_are_exact() {
        let solid = primitives::make_box(2.0, 3.0, 4.0);
        let m = measure(&solid, 0.1).unwrap();

        assert!((m.volume - 24.0).abs() < 1e-9, "volume was {}", m.volume);
        assert!((m.centroid[0] - 1.0).abs() < 1e-9);
        assert!((m.centroid[1] - 1.5).abs() < 1e-9);
        assert!((m.centroid[2] - 2.0).abs() < 1e-9);
        assert!((m.bbox_min[0]).abs() < 1e-9);
        assert!((m.bbox_max[2] - 4.0).abs() < 1e-9);
    }

    #[test]
    fn translated_box_keeps_volume_moves_centroid() {
        use truck_modeling::{builder, Vector3};
        let solid = primitives::make_box(1.0, 1.0, 1.0);
        let moved = builder::translated(&solid, Vector3::new(10.0, -5.0, 2.0));
        let m = measure(&moved, 0.1).unwrap();

        assert!((m.volume - 1.0).abs() < 1e-9);
        assert!((m.centroid[0] - 10.5).abs() < 1e-9);
        assert!((m.centroid[1] + 4.5).abs() < 1e-9);
        assert!((m.centroid[2] - 2.5).abs() < 1e-9);
    }

    #[test]
    fn cylinder_volume_approaches_analytic() {
        let solid = primitives::make_cylinder(5.0, 10.0).unwrap();
        let m = measure(&solid, MEASURE_TOLERANCE).unwrap();

        let exact = PI * 25.0 * 10.0;
        let rel = (m.volume - exact).abs() / exact;
        // Inscribed facets always undershoot; 1% is ample at this tolerance.
        assert!(rel < 0.01, "relative error {} too large", rel);
        assert!((m.centroid[2] - 5.0).abs() < 0.01);
        assert!((m.bbox_min[0] + 5.0).abs() < 0.01);
        assert!((m.bbox_max[1] - 5.0).abs() < 0.01);
    }

    #[test]
    fn prism_volume_matches_profile_area() {
        // Right triangle, area 6, swept 4 deep.
        let profile = [[0.0, 0.0], [3.0, 0.0], [0.0, 4.0]];
        let solid = primitives::extrude_profile_yz(&profile, 4.0).unwrap();
        let m = measure(&solid, 0.1).unwrap();
        assert!((m.volume - 24.0).abs() < 1e-9, "volume was {}", m.volume);
    }
}
