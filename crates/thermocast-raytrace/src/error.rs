//! Error types for ray construction.

use thiserror::Error;

/// Errors that can occur while building rays from a point cloud.
#[derive(Error, Debug)]
pub enum RaytraceError {
    /// A cloud vertex reached the ray builder without a temperature.
    #[error("cloud vertex {0} has no temperature attribute")]
    MissingTemperature(usize),
}

/// Result type for ray operations.
pub type Result<T> = std::result::Result<T, RaytraceError>;
