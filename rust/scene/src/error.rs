use thiserror::Error;

/// Result type for scene assembly
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while importing a model
#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unknown deflection type: {0}")]
    InvalidDeflectionType(String),

    #[error("deflection must be a positive number, got {0}")]
    NonPositiveDeflection(f64),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("kernel error: {0}")]
    Kernel(#[from] brep_lite_kernel::Error),
}
