//! MockKernel — deterministic test double implementing [`Kernel`].
//!
//! Tracks analytic shape summaries (volume, centroid, bounds) instead of
//! real geometry, with simplifying contracts: union treats operands as
//! disjoint, subtract treats the tool as fully contained in the base.
//! Finishing operations succeed as recorded no-ops unless the kernel is
//! built to refuse them, which mirrors TruckKernel's NotSupported answers.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::traits::Kernel;
use crate::types::*;

#[derive(Debug, Clone)]
struct MockSolid {
    volume: f64,
    centroid: [f64; 3],
    bbox_min: [f64; 3],
    bbox_max: [f64; 3],
    from_union: bool,
}

/// Deterministic test double for the geometry kernel.
pub struct MockKernel {
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    refuse_finishing: bool,
    invalid_unions: bool,
    /// Finishing operations applied so far: (operation, selector, value).
    pub applied_finishing: Vec<(&'static str, EdgeSelector, f64)>,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
            refuse_finishing: false,
            invalid_unions: false,
            applied_finishing: Vec::new(),
        }
    }

    /// Answer every fillet/chamfer with NotSupported, like TruckKernel.
    pub fn with_refused_finishing(mut self) -> Self {
        self.refuse_finishing = true;
        self
    }

    /// Report solids produced by union as invalid (open shells).
    pub fn with_invalid_unions(mut self) -> Self {
        self.invalid_unions = true;
        self
    }

    fn store(&mut self, solid: MockSolid) -> SolidHandle {
        let handle = SolidHandle(self.next_handle);
        self.next_handle += 1;
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn get(&self, handle: &SolidHandle) -> Result<&MockSolid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::StaleHandle {
                handle: handle.id(),
            })
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

// Small array-vector helpers; enough linear algebra for rigid motions.
fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}
fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}
fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Rodrigues rotation of a point about the axis through `pivot`.
fn rotate_point(p: [f64; 3], pivot: [f64; 3], axis: [f64; 3], angle: f64) -> [f64; 3] {
    let v = sub(p, pivot);
    let (sin, cos) = angle.sin_cos();
    let term1 = scale(v, cos);
    let term2 = scale(cross(axis, v), sin);
    let term3 = scale(axis, dot(axis, v) * (1.0 - cos));
    add(add(add(term1, term2), term3), pivot)
}

/// Signed area (positive when counter-clockwise) and centroid of a closed
/// polygon, by the shoelace formula.
fn polygon_properties(profile: &[[f64; 2]]) -> (f64, [f64; 2]) {
    let n = profile.len();
    let mut twice_area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let [x0, y0] = profile[i];
        let [x1, y1] = profile[(i + 1) % n];
        let w = x0 * y1 - x1 * y0;
        twice_area += w;
        cx += (x0 + x1) * w;
        cy += (y0 + y1) * w;
    }
    let area = twice_area / 2.0;
    if area.abs() < 1e-12 {
        return (area, [0.0, 0.0]);
    }
    (area, [cx / (6.0 * area), cy / (6.0 * area)])
}

impl Kernel for MockKernel {
    fn make_box(&mut self, size: [f64; 3]) -> Result<SolidHandle, KernelError> {
        let [w, d, h] = size;
        if w <= 0.0 || d <= 0.0 || h <= 0.0 {
            return Err(KernelError::GeometryFailed {
                reason: format!("box dimensions must be positive, got {:?}", size),
            });
        }
        Ok(self.store(MockSolid {
            volume: w * d * h,
            centroid: [w / 2.0, d / 2.0, h / 2.0],
            bbox_min: [0.0, 0.0, 0.0],
            bbox_max: size,
            from_union: false,
        }))
    }

    fn make_cylinder(&mut self, radius: f64, height: f64) -> Result<SolidHandle, KernelError> {
        if radius <= 0.0 || height <= 0.0 {
            return Err(KernelError::GeometryFailed {
                reason: format!(
                    "cylinder dimensions must be positive, got r={radius} h={height}"
                ),
            });
        }
        Ok(self.store(MockSolid {
            volume: PI * radius * radius * height,
            centroid: [0.0, 0.0, height / 2.0],
            bbox_min: [-radius, -radius, 0.0],
            bbox_max: [radius, radius, height],
            from_union: false,
        }))
    }

    fn extrude_profile_yz(
        &mut self,
        profile: &[[f64; 2]],
        length: f64,
    ) -> Result<SolidHandle, KernelError> {
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
        let (area, [cy, cz]) = polygon_properties(profile);
        if area <= 0.0 {
            return Err(KernelError::GeometryFailed {
                reason: "profile must be counter-clockwise and non-degenerate".to_string(),
            });
        }

        let mut y_min = f64::MAX;
        let mut y_max = f64::MIN;
        let mut z_min = f64::MAX;
        let mut z_max = f64::MIN;
        for &[y, z] in profile {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
            z_min = z_min.min(z);
            z_max = z_max.max(z);
        }

        Ok(self.store(MockSolid {
            volume: area * length,
            centroid: [length / 2.0, cy, cz],
            bbox_min: [0.0, y_min, z_min],
            bbox_max: [length, y_max, z_max],
            from_union: false,
        }))
    }

    fn translate(
        &mut self,
        solid: &SolidHandle,
        offset: [f64; 3],
    ) -> Result<SolidHandle, KernelError> {
        let s = self.get(solid)?.clone();
        Ok(self.store(MockSolid {
            volume: s.volume,
            centroid: add(s.centroid, offset),
            bbox_min: add(s.bbox_min, offset),
            bbox_max: add(s.bbox_max, offset),
            from_union: s.from_union,
        }))
    }

    fn rotate(
        &mut self,
        solid: &SolidHandle,
        pivot: [f64; 3],
        axis: [f64; 3],
        angle: f64,
    ) -> Result<SolidHandle, KernelError> {
        let len = dot(axis, axis).sqrt();
        if len < 1e-12 {
            return Err(KernelError::GeometryFailed {
                reason: "rotation axis has zero length".to_string(),
            });
        }
        let unit = scale(axis, 1.0 / len);
        let s = self.get(solid)?.clone();

        // Rotate the eight bbox corners and re-wrap; conservative but exact
        // for the axis-aligned cases the pipeline uses.
        let mut bbox_min = [f64::MAX; 3];
        let mut bbox_max = [f64::MIN; 3];
        for xi in [s.bbox_min[0], s.bbox_max[0]] {
            for yi in [s.bbox_min[1], s.bbox_max[1]] {
                for zi in [s.bbox_min[2], s.bbox_max[2]] {
                    let corner = rotate_point([xi, yi, zi], pivot, unit, angle);
                    for i in 0..3 {
                        bbox_min[i] = bbox_min[i].min(corner[i]);
                        bbox_max[i] = bbox_max[i].max(corner[i]);
                    }
                }
            }
        }

        Ok(self.store(MockSolid {
            volume: s.volume,
            centroid: rotate_point(s.centroid, pivot, unit, angle),
            bbox_min,
            bbox_max,
            from_union: s.from_union,
        }))
    }

    fn union(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        let sa = self.get(a)?.clone();
        let sb = self.get(b)?.clone();
        let volume = sa.volume + sb.volume;
        let centroid = scale(
            add(scale(sa.centroid, sa.volume), scale(sb.centroid, sb.volume)),
            1.0 / volume,
        );
        let bbox_min = [
            sa.bbox_min[0].min(sb.bbox_min[0]),
            sa.bbox_min[1].min(sb.bbox_min[1]),
            sa.bbox_min[2].min(sb.bbox_min[2]),
        ];
        let bbox_max = [
            sa.bbox_max[0].max(sb.bbox_max[0]),
            sa.bbox_max[1].max(sb.bbox_max[1]),
            sa.bbox_max[2].max(sb.bbox_max[2]),
        ];
        Ok(self.store(MockSolid {
            volume,
            centroid,
            bbox_min,
            bbox_max,
            from_union: true,
        }))
    }

    fn subtract(
        &mut self,
        base: &SolidHandle,
        tool: &SolidHandle,
    ) -> Result<SolidHandle, KernelError> {
        let sb = self.get(base)?.clone();
        let st = self.get(tool)?.clone();
        let volume = sb.volume - st.volume;
        if volume <= 0.0 {
            return Err(KernelError::BooleanFailed {
                reason: "mock subtract: tool volume exceeds base volume".to_string(),
            });
        }
        let centroid = scale(
            sub(scale(sb.centroid, sb.volume), scale(st.centroid, st.volume)),
            1.0 / volume,
        );
        Ok(self.store(MockSolid {
            volume,
            centroid,
            bbox_min: sb.bbox_min,
            bbox_max: sb.bbox_max,
            from_union: sb.from_union,
        }))
    }

    fn fillet_edges(
        &mut self,
        solid: &SolidHandle,
        edges: EdgeSelector,
        radius: f64,
    ) -> Result<SolidHandle, KernelError> {
        let s = self.get(solid)?.clone();
        if self.refuse_finishing {
            return Err(KernelError::NotSupported {
                operation: "fillet_edges".to_string(),
            });
        }
        self.applied_finishing.push(("fillet", edges, radius));
        Ok(self.store(s))
    }

    fn chamfer_edges(
        &mut self,
        solid: &SolidHandle,
        edges: EdgeSelector,
        distance: f64,
    ) -> Result<SolidHandle, KernelError> {
        let s = self.get(solid)?.clone();
        if self.refuse_finishing {
            return Err(KernelError::NotSupported {
                operation: "chamfer_edges".to_string(),
            });
        }
        self.applied_finishing.push(("chamfer", edges, distance));
        Ok(self.store(s))
    }

    fn volume(&mut self, solid: &SolidHandle) -> Result<f64, KernelError> {
        Ok(self.get(solid)?.volume)
    }

    fn center_of_mass(&mut self, solid: &SolidHandle) -> Result<[f64; 3], KernelError> {
        Ok(self.get(solid)?.centroid)
    }

    fn bounding_box(
        &mut self,
        solid: &SolidHandle,
    ) -> Result<([f64; 3], [f64; 3]), KernelError> {
        let s = self.get(solid)?;
        Ok((s.bbox_min, s.bbox_max))
    }

    fn is_valid(&self, solid: &SolidHandle) -> Result<bool, KernelError> {
        let s = self.get(solid)?;
        Ok(!(s.from_union && self.invalid_unions))
    }

    fn export_step(&self, solid: &SolidHandle) -> Result<String, KernelError> {
        self.get(solid)?;
        Ok(concat!(
            "ISO-10303-21;\n",
            "HEADER;\n",
            "FILE_DESCRIPTION(('mock solid'), '2;1');\n",
            "ENDSEC;\n",
            "DATA;\n",
            "#1 = MANIFOLD_SOLID_BREP('mock', #2);\n",
            "ENDSEC;\n",
            "END-ISO-10303-21;\n"
        )
        .to_string())
    }
}
