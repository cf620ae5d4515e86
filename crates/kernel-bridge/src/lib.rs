mod mass_props;
pub mod mock_kernel;
pub mod primitives;
mod step;
pub mod traits;
pub mod truck_kernel;
pub mod types;

pub use mock_kernel::MockKernel;
pub use traits::*;
pub use truck_kernel::TruckKernel;
pub use types::*;
