//! Batch partitioning bounded by a ray×triangle work ceiling.

use crate::ray::Ray;

/// Split a ray list into contiguous batches whose ray×triangle product
/// stays near the given ceiling.
///
/// The batch count is `(rays.len() * num_triangles) / ceiling`, clamped
/// to the ray count so no batch is empty. A zero quotient means the
/// total work is below the ceiling and the whole list is one batch
/// (degraded granularity, not an error). Batches are borrowed slices:
/// contiguous, near-equal in size (the first `len % count` batches are
/// one ray longer), covering the input in order with no overlap.
pub fn partition(rays: &[Ray], num_triangles: usize, ceiling: usize) -> Vec<&[Ray]> {
    if rays.is_empty() {
        return Vec::new();
    }

    let total = rays.len() * num_triangles;
    let count = (total / ceiling.max(1)).clamp(1, rays.len());

    let base = rays.len() / count;
    let extra = rays.len() % count;

    let mut batches = Vec::with_capacity(count);
    let mut start = 0;
    for i in 0..count {
        let size = if i < extra { base + 1 } else { base };
        batches.push(&rays[start..start + size]);
        start += size;
    }
    batches
}
