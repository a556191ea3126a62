//! The assembled projection output bundle.

use serde::{Deserialize, Serialize};

/// One projected point ready for export: display-frame coordinates plus
/// the raw source temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportPoint {
    /// X coordinate in the display frame.
    pub x: f64,
    /// Y coordinate in the display frame.
    pub y: f64,
    /// Z coordinate in the display frame.
    pub z: f64,
    /// Temperature of the source sample, untransformed.
    pub temperature: f64,
}

/// Camera placement for external view setup, in the display frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPlacement {
    /// Camera position.
    pub position: [f64; 3],
    /// Point the camera looks at (the mesh bounding-box center).
    pub look_at: [f64; 3],
}

/// Counts describing a finished projection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionStats {
    /// Triangles in the input mesh.
    pub num_triangles: usize,
    /// Rays cast (one per cloud point).
    pub num_rays: usize,
    /// Rays that hit at least one triangle.
    pub num_hits: usize,
    /// Rays that hit nothing.
    pub num_misses: usize,
    /// Intersection batches processed.
    pub num_batches: usize,
}

/// The aggregated, display-frame output of one projection run.
///
/// Hit-derived lists (`hit_coords`, `export_points`, `temperatures`,
/// `source_ids`) are index-aligned with each other in aggregation order,
/// which is not necessarily the input-cloud order; use `source_ids` to
/// correlate entries back to input samples.
#[derive(Debug, Clone)]
pub struct ProjectionResult {
    /// Flattened mesh corner coordinates, `num_triangles * 9` values.
    pub mesh_coords: Vec<f64>,
    /// Flattened projected-hit coordinates, `num_hits * 3` values.
    pub hit_coords: Vec<f64>,
    /// Export tuples: display-frame position plus raw temperature.
    pub export_points: Vec<ExportPoint>,
    /// Raw temperature per hit, for external color-scale computation.
    pub temperatures: Vec<f64>,
    /// Original ray id per hit.
    pub source_ids: Vec<usize>,
    /// Camera placement derived from the mesh bounding box.
    pub camera: CameraPlacement,
    /// Run statistics.
    pub stats: ProjectionStats,
}
