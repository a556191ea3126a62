#![warn(missing_docs)]

//! ASCII PLY export for projected thermal point clouds.
//!
//! Serializes the export tuples of a projection run into a PLY 1.0
//! document with one `vertex` element of four `float` properties:
//! x, y, z, temperature. The document is produced in memory; callers
//! own the I/O destination (a file, an HTTP response, a download blob).
//!
//! # Example
//!
//! ```ignore
//! use thermocast_ply::render_ascii;
//!
//! let result = thermocast::project(&mesh, &cloud, sensor, &settings, &sink)?;
//! let ply = render_ascii(&result.export_points);
//! std::fs::write("scan_projected.ply", ply)?;
//! ```

use std::io::{self, Write};

use thermocast::ExportPoint;

/// Serialize export points as an ASCII PLY document into `writer`.
pub fn write_ascii(writer: &mut impl Write, points: &[ExportPoint]) -> io::Result<()> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "element vertex {}", points.len())?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    writeln!(writer, "property float temperature")?;
    writeln!(writer, "end_header")?;
    for p in points {
        writeln!(writer, "{} {} {} {}", p.x, p.y, p.z, p.temperature)?;
    }
    Ok(())
}

/// Serialize export points as an ASCII PLY document, returned as a
/// `String`.
pub fn render_ascii(points: &[ExportPoint]) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec<u8> cannot fail.
    write_ascii(&mut buffer, points).expect("in-memory write");
    String::from_utf8(buffer).expect("ASCII output")
}
