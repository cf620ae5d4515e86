use crate::types::*;

/// Core geometry kernel boundary. Everything the wedge pipeline needs from
/// a B-rep kernel, and nothing else. Implemented by [`crate::TruckKernel`]
/// (real geometry) and [`crate::MockKernel`] (deterministic test double).
///
/// Angles are radians, lengths millimeters. All shape-producing methods
/// return a fresh handle; the inputs count as consumed.
pub trait Kernel {
    /// Axis-aligned box with one corner at the origin, extending to
    /// (x, y, z) = `size`.
    fn make_box(&mut self, size: [f64; 3]) -> Result<SolidHandle, KernelError>;

    /// Cylinder with its base disc centered at the origin in the XY plane,
    /// extending along +Z.
    fn make_cylinder(&mut self, radius: f64, height: f64) -> Result<SolidHandle, KernelError>;

    /// Sweep a closed polygon drawn in the (y, z) plane along +X.
    /// `profile` lists the corners counter-clockwise (normal +X); the
    /// closing segment back to the first point is implied.
    fn extrude_profile_yz(
        &mut self,
        profile: &[[f64; 2]],
        length: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Rigid translation.
    fn translate(
        &mut self,
        solid: &SolidHandle,
        offset: [f64; 3],
    ) -> Result<SolidHandle, KernelError>;

    /// Rigid rotation of `angle` radians about the axis through `pivot`
    /// with direction `axis`.
    fn rotate(
        &mut self,
        solid: &SolidHandle,
        pivot: [f64; 3],
        axis: [f64; 3],
        angle: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Boolean union of two solids.
    fn union(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
    ) -> Result<SolidHandle, KernelError>;

    /// Boolean subtraction: `base` minus `tool`.
    fn subtract(
        &mut self,
        base: &SolidHandle,
        tool: &SolidHandle,
    ) -> Result<SolidHandle, KernelError>;

    /// Round the selected edges with the given radius.
    fn fillet_edges(
        &mut self,
        solid: &SolidHandle,
        edges: EdgeSelector,
        radius: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Bevel the selected edges with the given setback distance.
    fn chamfer_edges(
        &mut self,
        solid: &SolidHandle,
        edges: EdgeSelector,
        distance: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Enclosed volume in mm³.
    fn volume(&mut self, solid: &SolidHandle) -> Result<f64, KernelError>;

    /// Centroid of the enclosed volume, model coordinates.
    fn center_of_mass(&mut self, solid: &SolidHandle) -> Result<[f64; 3], KernelError>;

    /// Axis-aligned bounds as (min, max) corners.
    fn bounding_box(
        &mut self,
        solid: &SolidHandle,
    ) -> Result<([f64; 3], [f64; 3]), KernelError>;

    /// Whether every boundary shell is closed and consistently oriented.
    fn is_valid(&self, solid: &SolidHandle) -> Result<bool, KernelError>;

    /// Serialize the solid as a STEP AP203 text document.
    fn export_step(&self, solid: &SolidHandle) -> Result<String, KernelError>;
}
