#![warn(missing_docs)]

//! Ray construction, batching, and ray/triangle intersection for the
//! thermocast projection kernel.
//!
//! This crate is the computational core of the pipeline: it turns a
//! translated point cloud into attributed rays, splits the ray set into
//! batches bounded by a ray×triangle work ceiling, and intersects each
//! batch against the full mesh, keeping the nearest hit per ray.
//!
//! # Example
//!
//! ```ignore
//! use thermocast_raytrace::{build_rays, partition, intersect_batch};
//!
//! let rays = build_rays(sensor, &cloud)?;
//! for batch in partition(&rays, mesh.num_triangles(), 1_000_000) {
//!     let result = intersect_batch(batch, &mesh, &Tolerance::DEFAULT);
//!     // result.hits / result.misses partition the batch
//! }
//! ```

mod batch;
mod engine;
mod error;
mod intersect;
mod ray;

pub use batch::partition;
pub use engine::{intersect_batch, BatchResult, HitRecord, MissRecord};
pub use error::{RaytraceError, Result};
pub use intersect::ray_triangle;
pub use ray::{build_rays, Ray, RayAttributes};
