//! Ray representation and construction from a thermal point cloud.

use thermocast_geom::PointCloud;
use thermocast_math::{Dir3, Point3};

use crate::error::{RaytraceError, Result};

/// Attributes carried by every projection ray.
///
/// Both fields are mandatory at creation: the temperature colors the
/// eventual hit point, and the id correlates results back to the source
/// sample after batching reorders or drops rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayAttributes {
    /// Temperature of the source thermal sample.
    pub temperature: f64,
    /// Dense 0-based index of the source sample in input order.
    pub id: usize,
}

/// A projection ray from the sensor position toward a thermal sample.
///
/// The ray is treated as a half-line: it starts at the origin, passes
/// through the target, and extends beyond it as needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Common origin (the sensor position).
    pub origin: Point3,
    /// The thermal sample the ray is aimed at.
    pub target: Point3,
    /// Attached attributes.
    pub attributes: RayAttributes,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Point3, target: Point3, attributes: RayAttributes) -> Self {
        Self {
            origin,
            target,
            attributes,
        }
    }

    /// Unit direction from origin toward target.
    ///
    /// `None` when the target coincides with the origin; such a ray has
    /// no direction and misses everything.
    pub fn direction(&self) -> Option<Dir3> {
        Dir3::try_new(self.target - self.origin, 1e-12)
    }
}

/// Build one ray per cloud vertex, all sharing the sensor origin.
///
/// Ids are assigned as a dense 0-based running index matching the input
/// order, so the ray count always equals the cloud count. A vertex with
/// no temperature is a caller error.
pub fn build_rays(sensor: Point3, cloud: &PointCloud) -> Result<Vec<Ray>> {
    cloud
        .vertices
        .iter()
        .enumerate()
        .map(|(id, v)| {
            let temperature = v
                .attributes
                .temperature
                .ok_or(RaytraceError::MissingTemperature(id))?;
            Ok(Ray::new(
                sensor,
                v.position,
                RayAttributes { temperature, id },
            ))
        })
        .collect()
}
