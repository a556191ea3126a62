//! Error types for the projection pipeline.

use thiserror::Error;

/// Errors that can occur during a projection run.
///
/// Any failure aborts the whole projection; there is no partial result.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// Invalid projection settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The raw mesh or cloud input had the wrong shape.
    #[error("geometry error: {0}")]
    Geom(#[from] thermocast_geom::GeomError),

    /// Ray construction failed.
    #[error("ray construction failed: {0}")]
    Raytrace(#[from] thermocast_raytrace::RaytraceError),
}

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;
