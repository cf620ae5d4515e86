//! Scenario driver: one struct that owns a kernel and a material table and
//! runs complete generations against them.

use kernel_bridge::{Kernel, MockKernel, TruckKernel};
use wedge_engine::{generate, Generation, GenerationError};
use wedge_types::{MaterialTable, WedgeSpec};

/// Test bench wrapping a geometry kernel behind the common trait.
///
/// Scenario tests pick a kernel flavor, feed specs (or raw configuration
/// text) through the full pipeline, and assert on the returned reports.
pub struct WedgeBench {
    kernel: Box<dyn Kernel>,
    materials: MaterialTable,
}

impl WedgeBench {
    /// Bench on the analytic mock kernel.
    pub fn mock() -> Self {
        Self::with_kernel(Box::new(MockKernel::new()))
    }

    /// Mock bench whose fillet and chamfer calls are all refused.
    pub fn mock_refusing_finishing() -> Self {
        Self::with_kernel(Box::new(MockKernel::new().with_refused_finishing()))
    }

    /// Mock bench that marks every union result as a non-manifold solid.
    pub fn mock_with_invalid_unions() -> Self {
        Self::with_kernel(Box::new(MockKernel::new().with_invalid_unions()))
    }

    /// Bench on the real B-rep kernel.
    pub fn truck() -> Self {
        Self::with_kernel(Box::new(TruckKernel::new()))
    }

    pub fn with_kernel(kernel: Box<dyn Kernel>) -> Self {
        Self {
            kernel,
            materials: MaterialTable::default(),
        }
    }

    /// Swap in a different material table (e.g. the strict one).
    pub fn with_materials(mut self, materials: MaterialTable) -> Self {
        self.materials = materials;
        self
    }

    /// Run the full generation pipeline against the bench kernel.
    pub fn run(&mut self, spec: &WedgeSpec) -> Result<Generation, GenerationError> {
        generate(self.kernel.as_mut(), spec, &self.materials)
    }

    /// Parse a configuration document first, then run it.
    pub fn run_config(&mut self, document: &str) -> Result<Generation, GenerationError> {
        let spec = wedge_config::load_str(document)?;
        self.run(&spec)
    }

    /// Direct kernel access for geometry-level scenarios.
    pub fn kernel(&mut self) -> &mut dyn Kernel {
        self.kernel.as_mut()
    }
}
