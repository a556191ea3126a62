//! Per-batch intersection: every ray against every triangle, nearest
//! hit wins.

use thermocast_geom::Mesh;
use thermocast_math::{Point3, Tolerance};

use crate::intersect::ray_triangle;
use crate::ray::{Ray, RayAttributes};

/// A ray that intersected at least one triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Nearest intersection point along the ray.
    pub point: Point3,
    /// Distance from the ray origin to the intersection.
    pub distance: f64,
    /// The originating ray's attributes.
    pub attributes: RayAttributes,
}

/// A ray that intersected no triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissRecord {
    /// The originating ray's attributes.
    pub attributes: RayAttributes,
}

/// Disjoint hit and miss records for one batch.
///
/// `hits.len() + misses.len()` always equals the batch length.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// Rays that hit, in batch order.
    pub hits: Vec<HitRecord>,
    /// Rays that missed, in batch order.
    pub misses: Vec<MissRecord>,
}

/// Test every ray in a batch against every triangle in the mesh.
///
/// For each ray the nearest intersection to the origin wins; exact
/// distance ties keep the first triangle found (strict `<` comparison).
/// Rays with no intersection, including direction-less rays whose target
/// coincides with the origin, are recorded as misses.
pub fn intersect_batch(batch: &[Ray], mesh: &Mesh, tol: &Tolerance) -> BatchResult {
    let mut result = BatchResult {
        hits: Vec::new(),
        misses: Vec::new(),
    };

    for ray in batch {
        let Some(direction) = ray.direction() else {
            result.misses.push(MissRecord {
                attributes: ray.attributes,
            });
            continue;
        };
        let direction = direction.into_inner();

        let mut nearest: Option<f64> = None;
        for face in &mesh.faces {
            if let Some(t) = ray_triangle(&ray.origin, &direction, face, tol) {
                if nearest.map_or(true, |best| t < best) {
                    nearest = Some(t);
                }
            }
        }

        match nearest {
            Some(t) => result.hits.push(HitRecord {
                point: ray.origin + t * direction,
                distance: t,
                attributes: ray.attributes,
            }),
            None => result.misses.push(MissRecord {
                attributes: ray.attributes,
            }),
        }
    }

    result
}
