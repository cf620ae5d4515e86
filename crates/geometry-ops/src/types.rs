use std::fmt;

use kernel_bridge::{EdgeSelector, KernelError};

/// Error from a modeling operation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OpError {
    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),

    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
}

/// A finishing feature the kernel declined, recorded instead of failing
/// the build. The head stays usable without it.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureWarning {
    pub feature: String,
    pub detail: String,
}

impl FeatureWarning {
    pub fn skipped(feature: &str, selector: EdgeSelector, err: &KernelError) -> Self {
        FeatureWarning {
            feature: feature.to_owned(),
            detail: format!("{selector}: {err}"),
        }
    }
}

impl fmt::Display for FeatureWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.feature, self.detail)
    }
}

/// A built solid plus any finishing features that were skipped on it.
#[derive(Debug)]
pub struct BuiltComponent {
    pub solid: kernel_bridge::SolidHandle,
    pub warnings: Vec<FeatureWarning>,
}
