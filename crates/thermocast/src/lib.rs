#![warn(missing_docs)]

//! Thermal point cloud to mesh projection pipeline.
//!
//! Overlays a temperature-tagged point cloud onto a triangulated surface
//! mesh: one ray is cast from the sensor position through every thermal
//! sample, intersected against all mesh triangles in work-bounded
//! batches, and the nearest hit per ray is assembled into a
//! display-frame bundle for rendering and export.
//!
//! # Example
//!
//! ```ignore
//! use thermocast::{project, NullStatusSink, ProjectionSettings};
//! use thermocast_geom::{Mesh, PointCloud};
//! use thermocast_math::Point3;
//!
//! let mesh = Mesh::from_flat(&stl_coords)?;
//! let cloud = PointCloud::from_rows(&ply_rows)?;
//! let sensor = Point3::new(0.5, 0.5, 10.0);
//!
//! let result = project(&mesh, &cloud, sensor, &ProjectionSettings::default(), &NullStatusSink)?;
//! println!("{} of {} rays hit the mesh", result.stats.num_hits, result.stats.num_rays);
//! ```

pub mod error;
pub mod result;
pub mod status;

pub use error::{ProjectionError, Result};
pub use result::{CameraPlacement, ExportPoint, ProjectionResult, ProjectionStats};
pub use status::{NullStatusSink, StatusSink};

use serde::{Deserialize, Serialize};
use thermocast_geom::{Mesh, PointCloud};
use thermocast_math::{Aabb3, FrameMap, Point3, Tolerance};
use thermocast_raytrace::{build_rays, intersect_batch, partition, HitRecord};

/// Projection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSettings {
    /// Maximum ray×triangle products per intersection batch.
    pub batch_ceiling: usize,
    /// Distance added to each axis of the bounding-box max corner to
    /// place the camera.
    pub camera_offset: f64,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            batch_ceiling: 1_000_000,
            camera_offset: 5.0,
        }
    }
}

impl ProjectionSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if self.batch_ceiling == 0 {
            return Err(ProjectionError::InvalidSettings(
                "batch_ceiling must be at least 1".into(),
            ));
        }
        if !self.camera_offset.is_finite() {
            return Err(ProjectionError::InvalidSettings(
                "camera_offset must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// Project a thermal point cloud onto a mesh.
///
/// This is the main entry point. It:
/// 1. Validates settings and short-circuits degenerate inputs
/// 2. Builds one attributed ray per cloud point, aimed from the sensor
///    at that point's position
/// 3. Partitions the rays into work-bounded batches
/// 4. Intersects each batch against the full mesh, reporting progress
/// 5. Assembles the display-frame result bundle
///
/// The cloud must already be positioned in the mesh's coordinate frame;
/// a scan expressed relative to the scanner is relocated first with
/// [`PointCloud::translate`] (offset = the sensor position).
///
/// The pipeline runs to completion synchronously; batches are processed
/// strictly in order and a progress message is sent to `status` after
/// each one. A failure aborts the whole projection and is reported to
/// the sink before being returned.
pub fn project(
    mesh: &Mesh,
    cloud: &PointCloud,
    sensor: Point3,
    settings: &ProjectionSettings,
    status: &dyn StatusSink,
) -> Result<ProjectionResult> {
    settings.validate()?;

    let tol = Tolerance::DEFAULT;
    let frame = FrameMap::scan_to_display();
    let num_triangles = mesh.num_triangles();

    // Degenerate inputs produce an empty-hit result, never an
    // intersection pass.
    if mesh.is_empty() || cloud.is_empty() {
        status.report("Nothing to project: the mesh or the point cloud is empty");
        let stats = ProjectionStats {
            num_triangles,
            num_rays: cloud.len(),
            num_hits: 0,
            num_misses: cloud.len(),
            num_batches: 0,
        };
        return Ok(assemble(mesh, &[], &frame, settings, stats));
    }

    status.report("Converting scan points to rays ...");
    let rays = match build_rays(sensor, cloud) {
        Ok(rays) => rays,
        Err(e) => {
            status.report(&format!("Projection failed: {e}"));
            return Err(e.into());
        }
    };

    let batches = partition(&rays, num_triangles, settings.batch_ceiling);
    let total = rays.len() * num_triangles;
    let total_k = total / 1000;

    status.report(&format!(
        "Projecting {} scan rays onto {} mesh triangles ...",
        rays.len(),
        num_triangles
    ));

    let mut hits: Vec<HitRecord> = Vec::new();
    let mut num_misses = 0;
    let mut rays_done = 0;
    for batch in &batches {
        let outcome = intersect_batch(batch, mesh, &tol);
        rays_done += batch.len();
        num_misses += outcome.misses.len();
        hits.extend(outcome.hits);

        let percentage = rays_done * 100 / rays.len();
        status.report(&format!(
            "Projecting {} scan rays onto {} mesh triangles ...\n\
             {}% of {}k calculations completed\n\
             {} rays intersected, {} rays did not hit any surface",
            rays.len(),
            num_triangles,
            percentage,
            total_k,
            hits.len(),
            num_misses
        ));
    }

    let stats = ProjectionStats {
        num_triangles,
        num_rays: rays.len(),
        num_hits: hits.len(),
        num_misses,
        num_batches: batches.len(),
    };
    Ok(assemble(mesh, &hits, &frame, settings, stats))
}

/// Project from the raw arrays external parsers produce.
///
/// Convenience wrapper around [`project`]: the mesh arrives as a flat
/// `ntriangles * 9` coordinate array, the cloud as rows of at least 4
/// columns (x, y, z, temperature), the sensor as 3 reals. Shape errors
/// fail fast before any computation.
pub fn project_raw(
    mesh_coords: &[f64],
    cloud_rows: &[Vec<f64>],
    sensor: [f64; 3],
    settings: &ProjectionSettings,
    status: &dyn StatusSink,
) -> Result<ProjectionResult> {
    status.report("Reading mesh triangles ...");
    let mesh = match Mesh::from_flat(mesh_coords) {
        Ok(mesh) => mesh,
        Err(e) => {
            status.report(&format!("Projection failed: {e}"));
            return Err(e.into());
        }
    };
    status.report("Reading scan points ...");
    let cloud = match PointCloud::from_rows(cloud_rows) {
        Ok(cloud) => cloud,
        Err(e) => {
            status.report(&format!("Projection failed: {e}"));
            return Err(e.into());
        }
    };
    project(
        &mesh,
        &cloud,
        Point3::new(sensor[0], sensor[1], sensor[2]),
        settings,
        status,
    )
}

/// Build the display-frame output bundle from the aggregated hits.
fn assemble(
    mesh: &Mesh,
    hits: &[HitRecord],
    frame: &FrameMap,
    settings: &ProjectionSettings,
    stats: ProjectionStats,
) -> ProjectionResult {
    let mesh_points = mesh.corner_points();

    // An empty mesh has no extent; its box degenerates to the origin.
    let bbox = Aabb3::from_points(&mesh_points).unwrap_or(Aabb3 {
        min: Point3::origin(),
        max: Point3::origin(),
    });
    let offset = settings.camera_offset;
    let camera_pair = frame.apply_points(&[
        Point3::new(
            bbox.max.x + offset,
            bbox.max.y + offset,
            bbox.max.z + offset,
        ),
        bbox.center(),
    ]);
    let camera = CameraPlacement {
        position: camera_pair[0].coords.into(),
        look_at: camera_pair[1].coords.into(),
    };

    let mesh_coords = flatten(&frame.apply_points(&mesh_points));

    let mut hit_coords = Vec::with_capacity(hits.len() * 3);
    let mut export_points = Vec::with_capacity(hits.len());
    let mut temperatures = Vec::with_capacity(hits.len());
    let mut source_ids = Vec::with_capacity(hits.len());
    for hit in hits {
        let p = frame.apply(&hit.point);
        hit_coords.extend([p.x, p.y, p.z]);
        export_points.push(ExportPoint {
            x: p.x,
            y: p.y,
            z: p.z,
            temperature: hit.attributes.temperature,
        });
        temperatures.push(hit.attributes.temperature);
        source_ids.push(hit.attributes.id);
    }

    ProjectionResult {
        mesh_coords,
        hit_coords,
        export_points,
        temperatures,
        source_ids,
        camera,
        stats,
    }
}

/// Flatten a point list into `[x0, y0, z0, x1, ...]`.
fn flatten(points: &[Point3]) -> Vec<f64> {
    let mut coords = Vec::with_capacity(points.len() * 3);
    for p in points {
        coords.extend([p.x, p.y, p.z]);
    }
    coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::cell::RefCell;

    /// Collects every reported message for inspection.
    struct RecordingSink {
        messages: RefCell<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                messages: RefCell::new(Vec::new()),
            }
        }
    }

    impl StatusSink for RecordingSink {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    /// Two triangles forming the unit square in the XY plane at Z=0.
    fn unit_square_mesh() -> Mesh {
        Mesh::from_triangles(&[
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]],
            [[0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
        ])
    }

    #[test]
    fn test_end_to_end_single_hit() {
        let mesh = unit_square_mesh();
        let cloud = PointCloud::from_rows(&[vec![0.5, 0.5, 5.0, 42.0]]).unwrap();
        let sensor = Point3::new(0.5, 0.5, 10.0);

        let result = project(
            &mesh,
            &cloud,
            sensor,
            &ProjectionSettings::default(),
            &NullStatusSink,
        )
        .unwrap();

        assert_eq!(result.stats.num_hits, 1);
        assert_eq!(result.stats.num_misses, 0);
        assert_eq!(result.stats.num_rays, 1);
        assert_eq!(result.stats.num_batches, 1);

        // Hit at (0.5, 0.5, 0.0) in the scan frame → (0.0, 0.5, 0.5) on display.
        assert_eq!(result.hit_coords.len(), 3);
        assert_relative_eq!(result.hit_coords[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(result.hit_coords[1], 0.5, epsilon = 1e-9);
        assert_relative_eq!(result.hit_coords[2], 0.5, epsilon = 1e-9);

        let export = &result.export_points[0];
        assert_relative_eq!(export.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(export.y, 0.5, epsilon = 1e-9);
        assert_relative_eq!(export.z, 0.5, epsilon = 1e-9);
        assert_relative_eq!(export.temperature, 42.0);

        assert_eq!(result.temperatures, vec![42.0]);
        assert_eq!(result.source_ids, vec![0]);
        assert_eq!(result.mesh_coords.len(), 2 * 9);
    }

    #[test]
    fn test_camera_from_bounding_box() {
        let mesh = unit_square_mesh();
        let cloud = PointCloud::from_rows(&[vec![0.5, 0.5, 5.0, 42.0]]).unwrap();
        let result = project(
            &mesh,
            &cloud,
            Point3::new(0.5, 0.5, 10.0),
            &ProjectionSettings::default(),
            &NullStatusSink,
        )
        .unwrap();

        // Scan-frame camera (1+5, 1+5, 0+5) relabels to (5, 6, 6);
        // look-at (0.5, 0.5, 0) relabels to (0, 0.5, 0.5).
        assert_relative_eq!(result.camera.position[0], 5.0, epsilon = 1e-9);
        assert_relative_eq!(result.camera.position[1], 6.0, epsilon = 1e-9);
        assert_relative_eq!(result.camera.position[2], 6.0, epsilon = 1e-9);
        assert_relative_eq!(result.camera.look_at[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(result.camera.look_at[1], 0.5, epsilon = 1e-9);
        assert_relative_eq!(result.camera.look_at[2], 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_misses_are_dropped_but_counted() {
        let mesh = unit_square_mesh();
        let cloud = PointCloud::from_rows(&[
            vec![0.5, 0.5, 5.0, 42.0],
            vec![50.0, 50.0, 5.0, 13.0], // aims far outside the square
        ])
        .unwrap();
        let result = project(
            &mesh,
            &cloud,
            Point3::new(0.5, 0.5, 10.0),
            &ProjectionSettings::default(),
            &NullStatusSink,
        )
        .unwrap();

        assert_eq!(result.stats.num_rays, 2);
        assert_eq!(result.stats.num_hits, 1);
        assert_eq!(result.stats.num_misses, 1);
        assert_eq!(
            result.stats.num_hits + result.stats.num_misses,
            result.stats.num_rays
        );
        assert_eq!(result.export_points.len(), 1);
        assert_eq!(result.source_ids, vec![0]);
    }

    #[test]
    fn test_empty_cloud_short_circuits() {
        let mesh = unit_square_mesh();
        let cloud = PointCloud::default();
        let sink = RecordingSink::new();
        let result = project(
            &mesh,
            &cloud,
            Point3::origin(),
            &ProjectionSettings::default(),
            &sink,
        )
        .unwrap();

        assert_eq!(result.stats.num_rays, 0);
        assert_eq!(result.stats.num_hits, 0);
        assert_eq!(result.stats.num_batches, 0);
        assert!(result.hit_coords.is_empty());
        // Mesh buffers and camera are still produced for the viewer.
        assert_eq!(result.mesh_coords.len(), 2 * 9);
        assert_eq!(sink.messages.borrow().len(), 1);
    }

    #[test]
    fn test_empty_mesh_short_circuits() {
        let mesh = Mesh::default();
        let cloud = PointCloud::from_rows(&[vec![0.5, 0.5, 5.0, 42.0]]).unwrap();
        let result = project(
            &mesh,
            &cloud,
            Point3::origin(),
            &ProjectionSettings::default(),
            &NullStatusSink,
        )
        .unwrap();

        assert_eq!(result.stats.num_hits, 0);
        assert_eq!(result.stats.num_misses, 1);
        assert!(result.mesh_coords.is_empty());
        // Degenerate bbox at the origin: camera (5,5,5) relabeled.
        assert_relative_eq!(result.camera.position[0], 5.0);
        assert_relative_eq!(result.camera.position[1], 5.0);
        assert_relative_eq!(result.camera.position[2], 5.0);
        assert_relative_eq!(result.camera.look_at[0], 0.0);
    }

    #[test]
    fn test_progress_reported_per_batch() {
        let mesh = unit_square_mesh();
        // 2000 points × 2 triangles with a ceiling of 1000 → 4 batches.
        let rows: Vec<Vec<f64>> = (0..2000)
            .map(|i| vec![(i % 10) as f64 * 0.1, (i / 10 % 10) as f64 * 0.1, -5.0, 20.0])
            .collect();
        let cloud = PointCloud::from_rows(&rows).unwrap();
        let settings = ProjectionSettings {
            batch_ceiling: 1000,
            ..Default::default()
        };
        let sink = RecordingSink::new();
        let result = project(&mesh, &cloud, Point3::new(0.5, 0.5, 10.0), &settings, &sink).unwrap();

        assert_eq!(result.stats.num_batches, 4);
        let messages = sink.messages.borrow();
        // 2 phase messages + one per batch
        assert_eq!(messages.len(), 2 + 4);
        assert!(messages[0].contains("Converting scan points"));
        let last = messages.last().unwrap();
        assert!(last.contains("100%"));
        assert!(last.contains("4k calculations"));
    }

    #[test]
    fn test_null_sink_does_not_change_output() {
        let mesh = unit_square_mesh();
        let cloud = PointCloud::from_rows(&[vec![0.0, 0.0, -5.0, 42.0]]).unwrap();
        let sensor = Point3::new(0.5, 0.5, 10.0);
        let settings = ProjectionSettings::default();

        let silent = project(&mesh, &cloud, sensor, &settings, &NullStatusSink).unwrap();
        let sink = RecordingSink::new();
        let recorded = project(&mesh, &cloud, sensor, &settings, &sink).unwrap();

        assert_eq!(silent.hit_coords, recorded.hit_coords);
        assert_eq!(silent.temperatures, recorded.temperatures);
        assert_eq!(silent.stats, recorded.stats);
    }

    #[test]
    fn test_invalid_settings() {
        let settings = ProjectionSettings {
            batch_ceiling: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_project_raw_shapes() {
        let mesh_coords = [
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
        ];
        let rows = vec![vec![0.0, 0.0, -5.0, 42.0]];
        let result = project_raw(
            &mesh_coords,
            &rows,
            [0.5, 0.5, 10.0],
            &ProjectionSettings::default(),
            &NullStatusSink,
        )
        .unwrap();
        assert_eq!(result.stats.num_hits, 1);

        // Malformed inputs fail fast.
        let err = project_raw(
            &mesh_coords[..7],
            &rows,
            [0.5, 0.5, 10.0],
            &ProjectionSettings::default(),
            &NullStatusSink,
        )
        .unwrap_err();
        assert!(matches!(err, ProjectionError::Geom(_)));
    }
}
