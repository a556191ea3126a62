#![warn(missing_docs)]

//! Geometry primitives for the thermocast projection kernel.
//!
//! Provides the vertex, triangle-face, mesh, and point-cloud types the
//! projection pipeline works on, plus validated constructors for the raw
//! arrays that external STL/PLY parsers produce. Shape mismatches in the
//! raw input fail fast here, before any computation starts.

use thermocast_math::{Point3, Tolerance, Vec3};
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while building geometry from raw input arrays.
#[derive(Error, Debug)]
pub enum GeomError {
    /// The raw mesh array has the wrong shape.
    #[error("malformed mesh: {0}")]
    MalformedMesh(String),

    /// The raw point-cloud array has the wrong shape.
    #[error("malformed point cloud: {0}")]
    MalformedCloud(String),
}

/// Result type for geometry construction.
pub type Result<T> = std::result::Result<T, GeomError>;

// =============================================================================
// Vertices
// =============================================================================

/// Attributes attached to a point-cloud vertex.
///
/// The original scan data carries an open attribute map per vertex, but
/// only these two keys are ever used, so they are fixed fields here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VertexAttributes {
    /// Sampled temperature at this vertex.
    pub temperature: Option<f64>,
    /// Index correlating this vertex back to its source sample.
    pub id: Option<usize>,
}

/// A 3D position with attached attributes.
///
/// Many vertices may share a position; identity is position plus
/// attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Position in the scan frame.
    pub position: Point3,
    /// Attached attributes.
    pub attributes: VertexAttributes,
}

impl Vertex {
    /// Create a bare vertex with no attributes.
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            attributes: VertexAttributes::default(),
        }
    }

    /// Create a vertex carrying a temperature sample.
    pub fn with_temperature(position: Point3, temperature: f64) -> Self {
        Self {
            position,
            attributes: VertexAttributes {
                temperature: Some(temperature),
                id: None,
            },
        }
    }
}

// =============================================================================
// Triangle faces and meshes
// =============================================================================

/// A single triangle face: exactly three corner points.
///
/// Degenerate (collinear) triangles are accepted; the intersection engine
/// treats them as unhittable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleFace {
    /// The three corners, in input order.
    pub corners: [Point3; 3],
}

impl TriangleFace {
    /// Create a face from three corners.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { corners: [a, b, c] }
    }

    /// True if the corners are collinear within tolerance.
    pub fn is_degenerate(&self, tol: &Tolerance) -> bool {
        let e1 = self.corners[1] - self.corners[0];
        let e2 = self.corners[2] - self.corners[0];
        e1.cross(&e2).norm() < tol.linear
    }
}

/// An ordered sequence of triangle faces in one coordinate frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// The faces, in input order.
    pub faces: Vec<TriangleFace>,
}

impl Mesh {
    /// Build a mesh from an `ntriangles × 3 × 3` array of coordinates.
    pub fn from_triangles(triangles: &[[[f64; 3]; 3]]) -> Self {
        let faces = triangles
            .iter()
            .map(|t| {
                TriangleFace::new(
                    Point3::new(t[0][0], t[0][1], t[0][2]),
                    Point3::new(t[1][0], t[1][1], t[1][2]),
                    Point3::new(t[2][0], t[2][1], t[2][2]),
                )
            })
            .collect();
        Self { faces }
    }

    /// Build a mesh from a flat coordinate array
    /// `[x0, y0, z0, x1, ..., z2]` of length `ntriangles * 9`.
    ///
    /// Fails if the length is not a multiple of 9.
    pub fn from_flat(coords: &[f64]) -> Result<Self> {
        if coords.len() % 9 != 0 {
            return Err(GeomError::MalformedMesh(format!(
                "flat mesh array length {} is not a multiple of 9",
                coords.len()
            )));
        }
        let faces = coords
            .chunks_exact(9)
            .map(|c| {
                TriangleFace::new(
                    Point3::new(c[0], c[1], c[2]),
                    Point3::new(c[3], c[4], c[5]),
                    Point3::new(c[6], c[7], c[8]),
                )
            })
            .collect();
        Ok(Self { faces })
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.faces.len()
    }

    /// True if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// All corner points in face order, `ntriangles * 3` entries.
    ///
    /// This is the flattened point list used for bounding-box and
    /// render-buffer computation.
    pub fn corner_points(&self) -> Vec<Point3> {
        self.faces
            .iter()
            .flat_map(|f| f.corners.iter().copied())
            .collect()
    }
}

// =============================================================================
// Point clouds
// =============================================================================

/// An ordered sequence of attributed vertices, all carrying a temperature.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointCloud {
    /// The vertices, in input order.
    pub vertices: Vec<Vertex>,
}

impl PointCloud {
    /// Build a cloud from raw rows of at least 4 columns
    /// `(x, y, z, temperature, ...)`; extra columns are ignored.
    ///
    /// Fails on the first row with fewer than 4 columns.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let mut vertices = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() < 4 {
                return Err(GeomError::MalformedCloud(format!(
                    "row {} has {} columns, expected at least 4 (x, y, z, temperature)",
                    i,
                    row.len()
                )));
            }
            vertices.push(Vertex::with_temperature(
                Point3::new(row[0], row[1], row[2]),
                row[3],
            ));
        }
        Ok(Self { vertices })
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the cloud has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Rigidly translate every vertex by `offset`, producing a new cloud.
    ///
    /// Attributes are carried over unchanged.
    pub fn translate(&self, offset: Vec3) -> PointCloud {
        PointCloud {
            vertices: self
                .vertices
                .iter()
                .map(|v| Vertex {
                    position: v.position + offset,
                    attributes: v.attributes,
                })
                .collect(),
        }
    }
}
