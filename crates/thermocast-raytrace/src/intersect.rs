//! Ray-triangle intersection (Möller–Trumbore).

use thermocast_geom::TriangleFace;
use thermocast_math::{Point3, Tolerance, Vec3};

/// Intersect a ray with a single triangle.
///
/// Returns `Some(t)` with the parameter along `direction` at which the
/// ray crosses the triangle's plane inside its boundary, or `None` when
/// the ray is parallel to the plane, the crossing lies outside the
/// triangle, or the crossing is behind the origin. With a unit
/// `direction`, `t` is the distance from the origin.
///
/// Degenerate triangles have a near-zero determinant for every direction
/// and are never hit.
pub fn ray_triangle(
    origin: &Point3,
    direction: &Vec3,
    face: &TriangleFace,
    tol: &Tolerance,
) -> Option<f64> {
    let edge1 = face.corners[1] - face.corners[0];
    let edge2 = face.corners[2] - face.corners[0];

    let h = direction.cross(&edge2);
    let det = edge1.dot(&h);

    // Ray parallel to the triangle's plane (or triangle degenerate)
    if det.abs() < tol.parallel {
        return None;
    }

    let inv_det = 1.0 / det;
    let s = origin - face.corners[0];
    let u = inv_det * s.dot(&h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = inv_det * direction.dot(&q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = inv_det * edge2.dot(&q);
    if t >= 0.0 {
        Some(t)
    } else {
        None
    }
}
