//! TruckKernel — real geometry kernel wrapping truck's API.

use std::collections::HashMap;

use truck_modeling::builder;
use truck_modeling::topology::Solid;
use truck_modeling::{InnerSpace, Point3, Rad, Vector3};
use truck_topology::shell::ShellCondition;

use crate::mass_props::{self, SolidMeasure, MEASURE_TOLERANCE};
use crate::primitives;
use crate::step;
use crate::traits::Kernel;
use crate::types::*;

/// Tolerance handed to truck-shapeops boolean algorithms.
const BOOLEAN_TOLERANCE: f64 = 0.05;

/// Real geometry kernel backed by the truck B-rep stack.
///
/// Bodies live in a per-session store keyed by handle id; measurement
/// results are cached per handle since solids are immutable once stored.
pub struct TruckKernel {
    next_handle: u64,
    solids: HashMap<u64, Solid>,
    measures: HashMap<u64, SolidMeasure>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
            measures: HashMap::new(),
        }
    }

    fn store_solid(&mut self, solid: Solid) -> SolidHandle {
        let handle = SolidHandle(self.next_handle);
        self.next_handle += 1;
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn get_solid(&self, handle: &SolidHandle) -> Result<&Solid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::StaleHandle {
                handle: handle.id(),
            })
    }

    fn measure_cached(&mut self, handle: &SolidHandle) -> Result<&SolidMeasure, KernelError> {
        if !self.measures.contains_key(&handle.id()) {
            let solid = self.get_solid(handle)?;
            let measure = mass_props::measure(solid, MEASURE_TOLERANCE)?;
            self.measures.insert(handle.id(), measure);
        }
        Ok(&self.measures[&handle.id()])
    }

    fn unit_axis(axis: [f64; 3]) -> Result<Vector3, KernelError> {
        let v = Vector3::new(axis[0], axis[1], axis[2]);
        if v.magnitude() < 1e-12 {
            return Err(KernelError::GeometryFailed {
                reason: "rotation axis has zero length".to_string(),
            });
        }
        Ok(v.normalize())
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for TruckKernel {
    fn make_box(&mut self, size: [f64; 3]) -> Result<SolidHandle, KernelError> {
        let [w, d, h] = size;
        if w <= 0.0 || d <= 0.0 || h <= 0.0 {
            return Err(KernelError::GeometryFailed {
                reason: format!("box dimensions must be positive, got {:?}", size),
            });
        }
        Ok(self.store_solid(primitives::make_box(w, d, h)))
    }

    fn make_cylinder(&mut self, radius: f64, height: f64) -> Result<SolidHandle, KernelError> {
        if radius <= 0.0 || height <= 0.0 {
            return Err(KernelError::GeometryFailed {
                reason: format!(
                    "cylinder dimensions must be positive, got r={radius} h={height}"
                ),
            });
        }
        let solid = primitives::make_cylinder(radius, height)?;
        Ok(self.store_solid(solid))
    }

    fn extrude_profile_yz(
        &mut self,
        profile: &[[f64; 2]],
        length: f64,
    ) -> Result<SolidHandle, KernelError> {
        let solid = primitives::extrude_profile_yz(profile, length)?;
        Ok(self.store_solid(solid))
    }

    fn translate(
        &mut self,
        solid: &SolidHandle,
        offset: [f64; 3],
    ) -> Result<SolidHandle, KernelError> {
        let body = self.get_solid(solid)?;
        let moved = builder::translated(body, Vector3::new(offset[0], offset[1], offset[2]));
        Ok(self.store_solid(moved))
    }

    fn rotate(
        &mut self,
        solid: &SolidHandle,
        pivot: [f64; 3],
        axis: [f64; 3],
        angle: f64,
    ) -> Result<SolidHandle, KernelError> {
        let axis = Self::unit_axis(axis)?;
        let body = self.get_solid(solid)?;
        let turned = builder::rotated(
            body,
            Point3::new(pivot[0], pivot[1], pivot[2]),
            axis,
            Rad(angle),
        );
        Ok(self.store_solid(turned))
    }

    fn union(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?.clone();
        let solid_b = self.get_solid(b)?.clone();

        let result = truck_shapeops::or(&solid_a, &solid_b, BOOLEAN_TOLERANCE).ok_or_else(
            || KernelError::BooleanFailed {
                reason: "truck or() returned None".to_string(),
            },
        )?;
        Ok(self.store_solid(result))
    }

    fn subtract(
        &mut self,
        base: &SolidHandle,
        tool: &SolidHandle,
    ) -> Result<SolidHandle, KernelError> {
        let solid_base = self.get_solid(base)?.clone();
        let mut solid_tool = self.get_solid(tool)?.clone();

        // Subtraction = base ∩ ¬tool. not() mutates in place.
        solid_tool.not();
        let result = truck_shapeops::and(&solid_base, &solid_tool, BOOLEAN_TOLERANCE)
            .ok_or_else(|| KernelError::BooleanFailed {
                reason: "truck and() returned None for subtraction".to_string(),
            })?;
        Ok(self.store_solid(result))
    }

    fn fillet_edges(
        &mut self,
        solid: &SolidHandle,
        _edges: EdgeSelector,
        _radius: f64,
    ) -> Result<SolidHandle, KernelError> {
        // truck has no local operations yet; callers degrade gracefully.
        self.get_solid(solid)?;
        Err(KernelError::NotSupported {
            operation: "fillet_edges".to_string(),
        })
    }

    fn chamfer_edges(
        &mut self,
        solid: &SolidHandle,
        _edges: EdgeSelector,
        _distance: f64,
    ) -> Result<SolidHandle, KernelError> {
        self.get_solid(solid)?;
        Err(KernelError::NotSupported {
            operation: "chamfer_edges".to_string(),
        })
    }

    fn volume(&mut self, solid: &SolidHandle) -> Result<f64, KernelError> {
        Ok(self.measure_cached(solid)?.volume)
    }

    fn center_of_mass(&mut self, solid: &SolidHandle) -> Result<[f64; 3], KernelError> {
        Ok(self.measure_cached(solid)?.centroid)
    }

    fn bounding_box(
        &mut self,
        solid: &SolidHandle,
    ) -> Result<([f64; 3], [f64; 3]), KernelError> {
        let m = self.measure_cached(solid)?;
        Ok((m.bbox_min, m.bbox_max))
    }

    fn is_valid(&self, solid: &SolidHandle) -> Result<bool, KernelError> {
        let body = self.get_solid(solid)?;
        Ok(body
            .boundaries()
            .iter()
            .all(|shell| shell.shell_condition() == ShellCondition::Closed))
    }

    fn export_step(&self, solid: &SolidHandle) -> Result<String, KernelError> {
        let body = self.get_solid(solid)?;
        Ok(step::solid_to_step(body))
    }
}
