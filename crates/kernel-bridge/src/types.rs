use std::fmt;

/// Opaque handle to a solid owned by the geometry kernel.
/// NEVER persisted. Valid only for the current kernel session.
///
/// Handles are single-owner: every operation that takes one returns a
/// replacement, and the argument must be treated as consumed. The type is
/// deliberately not `Clone` so two live aliases to one body cannot exist
/// outside the kernel.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SolidHandle(pub(crate) u64);

impl SolidHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("geometry construction failed: {reason}")]
    GeometryFailed { reason: String },

    #[error("tessellation failed: {reason}")]
    TessellationFailed { reason: String },

    #[error("no solid stored for handle {handle}")]
    StaleHandle { handle: u64 },

    #[error("operation not supported by this kernel: {operation}")]
    NotSupported { operation: String },
}

/// Geometric query naming a group of edges on the swept bodies this engine
/// builds. Resolution happens inside the kernel; callers carry the selector
/// into warnings as context when a finishing operation is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSelector {
    /// Edges parallel to the X axis with the highest midpoints.
    XParallelTopmost,
    /// Edges parallel to the X axis with the lowest Y midpoints (front).
    XParallelFrontmost,
    /// Edges bounding the minimum-X end of the body.
    MinXEnd,
    /// Edges bounding the maximum-X end of the body.
    MaxXEnd,
}

impl fmt::Display for EdgeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EdgeSelector::XParallelTopmost => "topmost X-parallel edges",
            EdgeSelector::XParallelFrontmost => "frontmost X-parallel edges",
            EdgeSelector::MinXEnd => "min-X end edges",
            EdgeSelector::MaxXEnd => "max-X end edges",
        };
        f.write_str(name)
    }
}
