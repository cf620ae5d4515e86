//! Primitive builders on top of truck's sweep API.
//!
//! truck has no built-in box/cylinder — everything is successive sweeps.

use std::f64::consts::PI;

use truck_modeling::builder;
use truck_modeling::geometry::{Curve, Line};
use truck_modeling::topology::{Edge, Solid, Wire};
use truck_modeling::{EuclideanSpace, InnerSpace, Point3, Rad, Vector3};

use crate::types::KernelError;

/// Box via successive translational sweeps, corner at the origin,
/// extending to (w, d, h).
pub fn make_box(w: f64, d: f64, h: f64) -> Solid {
    let v = builder::vertex(Point3::new(0.0, 0.0, 0.0));
    let edge = builder::tsweep(&v, Vector3::new(w, 0.0, 0.0));
    let face = builder::tsweep(&edge, Vector3::new(0.0, d, 0.0));
    builder::tsweep(&face, Vector3::new(0.0, 0.0, h))
}

/// Cylinder: circle wire → planar face → translational sweep.
/// Base centered at the origin in the XY plane, extending along +Z.
pub fn make_cylinder(radius: f64, height: f64) -> Result<Solid, KernelError> {
    let v = builder::vertex(Point3::new(radius, 0.0, 0.0));
    let wire = builder::rsweep(&v, Point3::origin(), Vector3::unit_z(), Rad(2.0 * PI));
    let face = builder::try_attach_plane(&[wire]).map_err(|e| KernelError::GeometryFailed {
        reason: format!("circular face for cylinder: {}", e),
    })?;
    Ok(builder::tsweep(&face, Vector3::new(0.0, 0.0, height)))
}

/// Prism from a closed polygon in the (y, z) plane, swept along +X.
///
/// The polygon must be counter-clockwise viewed from +X so the attached
/// plane's normal matches the sweep direction. The closing edge back to
/// the first corner is added here.
pub fn extrude_profile_yz(profile: &[[f64; 2]], length: f64) -> Result<Solid, KernelError> {
    if profile.len() < 3 {
        return Err(KernelError::GeometryFailed {
            reason: format!("profile has {} points, need at least 3", profile.len()),
        });
    }
    if length <= 0.0 {
        return Err(KernelError::GeometryFailed {
            reason: format!("sweep length must be positive, got {}", length),
        });
    }

    let pts: Vec<Point3> = profile
        .iter()
        .map(|&[y, z]| Point3::new(0.0, y, z))
        .collect();

    // Shared vertices so consecutive edges agree on their endpoints.
    let n = pts.len();
    let vertices: Vec<_> = pts.iter().map(|&p| builder::vertex(p)).collect();
    let mut wire_edges: Vec<Edge> = Vec::new();
    for i in 0..n {
        let j = (i + 1) % n;
        if (pts[i] - pts[j]).magnitude2() < 1e-20 {
            return Err(KernelError::GeometryFailed {
                reason: format!("degenerate profile segment at corner {}", i),
            });
        }
        wire_edges.push(Edge::new(
            &vertices[i],
            &vertices[j],
            Curve::Line(Line(pts[i], pts[j])),
        ));
    }
    let wire = Wire::from_iter(wire_edges);

    let face = builder::try_attach_plane(&[wire]).map_err(|e| KernelError::GeometryFailed {
        reason: format!("planar face for profile: {}", e),
    })?;
    Ok(builder::tsweep(&face, Vector3::new(length, 0.0, 0.0)))
}
