#![warn(missing_docs)]

//! Math types for the thermocast projection kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! thermal-scan geometry: points, vectors, named coordinate systems,
//! the fixed display-frame relabel, bounding boxes, and tolerance
//! constants.

use nalgebra::{Matrix3, Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

// =============================================================================
// Coordinate systems and frame relabeling
// =============================================================================

/// An orthonormal coordinate system: an origin and two unit axes.
///
/// The z axis is not stored; it is inferred as `x × y`, completing a
/// right-handed basis.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystem {
    /// Origin of the frame.
    pub origin: Point3,
    /// Unit x axis.
    pub x_axis: Dir3,
    /// Unit y axis.
    pub y_axis: Dir3,
}

impl CoordinateSystem {
    /// Create a coordinate system from an origin and two axis vectors.
    ///
    /// The axes are normalized; they are expected to be orthogonal.
    pub fn new(origin: Point3, x_axis: Vec3, y_axis: Vec3) -> Self {
        Self {
            origin,
            x_axis: Dir3::new_normalize(x_axis),
            y_axis: Dir3::new_normalize(y_axis),
        }
    }

    /// The scan frame: origin at zero, X=(1,0,0), Y=(0,1,0).
    pub fn scan() -> Self {
        Self::new(Point3::origin(), Vec3::x(), Vec3::y())
    }

    /// The display frame: origin at zero, X=(0,0,1), Y=(1,0,0).
    ///
    /// Relabeling scan coordinates into this frame sends (x, y, z) to
    /// (z, x, y), which puts the scan's vertical axis where renderers
    /// expect it.
    pub fn display() -> Self {
        Self::new(Point3::origin(), Vec3::z(), Vec3::x())
    }

    /// The inferred unit z axis (`x × y`).
    pub fn z_axis(&self) -> Dir3 {
        Dir3::new_normalize(self.x_axis.cross(&self.y_axis))
    }
}

/// A precomputed change of basis between two coordinate systems.
///
/// Built once and applied to every point (one matrix multiply per point,
/// never re-derived per call). For orthonormal frames the map is exactly
/// invertible, so `apply` after `inverse().apply` reproduces the input.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameMap {
    matrix: Matrix3<f64>,
    offset: Vec3,
}

impl FrameMap {
    /// Build the map taking points expressed in `src` to points expressed
    /// in `dst`.
    pub fn between(src: &CoordinateSystem, dst: &CoordinateSystem) -> Self {
        let src_basis = Matrix3::from_columns(&[
            src.x_axis.into_inner(),
            src.y_axis.into_inner(),
            src.z_axis().into_inner(),
        ]);
        let dst_basis = Matrix3::from_columns(&[
            dst.x_axis.into_inner(),
            dst.y_axis.into_inner(),
            dst.z_axis().into_inner(),
        ]);
        // Rows of dst_basis^T project world coordinates onto the dst axes.
        let matrix = dst_basis.transpose() * src_basis;
        let offset = dst_basis.transpose() * (src.origin - dst.origin);
        Self { matrix, offset }
    }

    /// The fixed scan-to-display relabel: (x, y, z) → (z, x, y).
    pub fn scan_to_display() -> Self {
        Self::between(&CoordinateSystem::scan(), &CoordinateSystem::display())
    }

    /// Relabel a single point.
    #[inline]
    pub fn apply(&self, p: &Point3) -> Point3 {
        Point3::from(self.matrix * p.coords + self.offset)
    }

    /// Relabel a set of points, producing a new set of the same length.
    pub fn apply_points(&self, points: &[Point3]) -> Vec<Point3> {
        points.iter().map(|p| self.apply(p)).collect()
    }

    /// The reverse map (dst back to src).
    ///
    /// Valid because both bases are orthonormal: the inverse rotation is
    /// the transpose.
    pub fn inverse(&self) -> Self {
        let matrix = self.matrix.transpose();
        Self {
            matrix,
            offset: -(matrix * self.offset),
        }
    }
}

// =============================================================================
// Bounding boxes
// =============================================================================

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Compute the AABB of a point set. `None` for an empty set.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut aabb = Self::empty();
        for p in points {
            aabb.include_point(p);
        }
        Some(aabb)
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }
}

// =============================================================================
// Tolerances
// =============================================================================

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
    /// Determinant cutoff below which a ray counts as parallel to a plane.
    pub parallel: f64,
}

impl Tolerance {
    /// Default projection tolerances.
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        parallel: 1e-12,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
