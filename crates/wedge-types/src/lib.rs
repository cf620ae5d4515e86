pub mod limits;
pub mod material;
pub mod spec;

pub use limits::*;
pub use material::*;
pub use spec::*;
