//! Binary STL export.
//!
//! ```text
//! UINT8[80]    – Header (free-form ASCII, space padded)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (always 0)
//! end
//! ```
//!
//! All values are little-endian.

use crate::io::{IoError, IoResult};
use crate::mesh::{Mesh, Triangle};
use log::{debug, info, warn};
use nalgebra::Vector3;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::float_types::Real;

/// STL binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of the header plus the triangle count field.
pub const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Size of one triangle in binary STL (normal + 3 vertices + attribute).
pub const TRIANGLE_SIZE: usize = 50;

/// Header used when the caller has nothing better to say.
pub const DEFAULT_HEADER: &str = "STL test file generated for 3D integration testing";

/// Exact byte length of a binary STL holding `triangle_count` triangles.
#[inline]
pub const fn binary_size(triangle_count: usize) -> usize {
    PREAMBLE_SIZE + TRIANGLE_SIZE * triangle_count
}

/// Face normal written for `tri`: the unit right-hand-rule normal, or `(0, 0, 1)`
/// when the vertices are collinear or coincident.
#[inline]
pub fn facet_normal(tri: &Triangle) -> Vector3<Real> {
    tri.normal()
}

/// Fixed 80-byte header from free-form text.
///
/// Non-ASCII bytes become `?`, the text is truncated to 80 bytes and
/// padded with spaces.
pub fn header_bytes(text: &str) -> [u8; HEADER_SIZE] {
    let mut header = [b' '; HEADER_SIZE];
    for (dst, src) in header.iter_mut().zip(text.bytes()) {
        *dst = if src.is_ascii() { src } else { b'?' };
    }

    if header.starts_with(b"solid") {
        warn!("STL header starts with \"solid\"; some readers will mistake the file for ASCII STL");
    }
    header
}

#[allow(clippy::unnecessary_cast)]
fn to_stl_triangle(tri: &Triangle) -> stl_io::Triangle {
    use stl_io::{Normal, Vertex};

    let n = facet_normal(tri);
    stl_io::Triangle {
        normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
        vertices: tri.vertices.map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
    }
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// Triangles are written in order with their vertices verbatim; no
/// validation is done, so NaN or infinite coordinates end up in the output as-is.
///
/// ```rust
/// # use stl_fixtures::{io::stl, mesh::Mesh};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cube  = Mesh::cube(10.0)?;
/// let bytes = stl::encode_stl_binary(&cube, stl::DEFAULT_HEADER)?;
/// assert_eq!(bytes.len(), 84 + 50 * 12);
/// # Ok(())
/// # }
/// ```
pub fn encode_stl_binary(mesh: &Mesh, header: &str) -> IoResult<Vec<u8>> {
    let count = mesh.len();
    if u32::try_from(count).is_err() {
        return Err(IoError::TooManyTriangles { count });
    }

    let mut bytes = Vec::with_capacity(binary_size(count));
    stl_io::write_stl(&mut bytes, mesh.iter().map(to_stl_triangle))?;

    // stl_io always emits a zeroed header
    bytes[..HEADER_SIZE].copy_from_slice(&header_bytes(header));

    debug!("encoded {count} triangles into {} bytes", bytes.len());
    Ok(bytes)
}

/// Encode `mesh` and write it to `path`.
///
/// The parent directory must already exist. If writing fails after the
/// file was created, the partial file is removed before the error is returned.
pub fn write_stl_binary<P: AsRef<Path>>(mesh: &Mesh, path: P, header: &str) -> IoResult<()> {
    let path = path.as_ref();
    let bytes = encode_stl_binary(mesh, header)?;

    let file = File::create(path)?;
    write_or_remove(path, SyncedFile(file), &bytes)?;

    info!("wrote {} ({} triangles, {} bytes)", path.display(), mesh.len(), bytes.len());
    Ok(())
}

/// `File` whose `flush` also syncs data and metadata to disk.
struct SyncedFile(File);

impl Write for SyncedFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()?;
        self.0.sync_all()
    }
}

/// Write and flush `bytes` into `target`, an open handle on `path`.
/// The handle is closed before returning; on failure `path` is cleaned up.
fn write_or_remove<W: Write>(path: &Path, mut target: W, bytes: &[u8]) -> IoResult<()> {
    let written = target.write_all(bytes).and_then(|()| target.flush());
    drop(target);

    if let Err(error) = written {
        remove_partial(path);
        return Err(error.into());
    }
    Ok(())
}

/// Remove a partially written file. Only regular files are removed;
/// device nodes and other special files are left in place.
fn remove_partial(path: &Path) {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_file() => {
            if let Err(error) = fs::remove_file(path) {
                warn!("could not remove partial file {}: {error}", path.display());
            }
        },
        Ok(_) => warn!("failed write to non-regular file {}, leaving it in place", path.display()),
        Err(error) => warn!("could not inspect {} after failed write: {error}", path.display()),
    }
}

impl Mesh {
    pub fn to_stl_binary(&self, header: &str) -> IoResult<Vec<u8>> {
        self::encode_stl_binary(self, header)
    }

    pub fn write_stl<P: AsRef<Path>>(&self, path: P, header: &str) -> IoResult<()> {
        self::write_stl_binary(self, path, header)
    }
}
