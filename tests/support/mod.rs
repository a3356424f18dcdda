//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point3;
use stl_fixtures::{float_types::Real, mesh::Mesh};

/// One decoded 50-byte facet record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub normal: [f32; 3],
    pub vertices: [[f32; 3]; 3],
    pub attribute: u16,
}

/// A binary STL split into its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub header: [u8; 80],
    pub count: u32,
    pub records: Vec<Record>,
}

fn f32_at(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

fn vec3_at(bytes: &[u8], offset: usize) -> [f32; 3] {
    [
        f32_at(bytes, offset),
        f32_at(bytes, offset + 4),
        f32_at(bytes, offset + 8),
    ]
}

/// Decode a binary STL, panicking on anything that does not match the layout
/// exactly (including trailing bytes).
pub fn decode(bytes: &[u8]) -> Decoded {
    assert!(bytes.len() >= 84, "file shorter than the 84-byte preamble");

    let header: [u8; 80] = bytes[..80].try_into().unwrap();
    let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap());
    assert_eq!(
        bytes.len(),
        84 + 50 * count as usize,
        "file size does not match triangle count"
    );

    let records = bytes[84..]
        .chunks_exact(50)
        .map(|rec| Record {
            normal: vec3_at(rec, 0),
            vertices: [vec3_at(rec, 12), vec3_at(rec, 24), vec3_at(rec, 36)],
            attribute: u16::from_le_bytes([rec[48], rec[49]]),
        })
        .collect();

    Decoded { header, count, records }
}

/// Vertices of `mesh` converted to the f32 values the file is expected to hold.
#[allow(clippy::unnecessary_cast)]
pub fn expected_vertices(mesh: &Mesh) -> Vec<[[f32; 3]; 3]> {
    mesh.iter()
        .map(|t| t.vertices.map(|p| [p.x as f32, p.y as f32, p.z as f32]))
        .collect()
}

/// Average of all vertex positions.
pub fn mesh_centroid(mesh: &Mesh) -> Point3<Real> {
    let n = (mesh.len() * 3) as Real;
    let sum = mesh
        .iter()
        .flat_map(|t| t.vertices.iter())
        .fold(Point3::<Real>::origin().coords, |acc, p| acc + p.coords);
    Point3::from(sum / n)
}

/// `true` when every face normal points away from the mesh centroid.
/// Only meaningful for convex solids.
pub fn has_outward_normals(mesh: &Mesh) -> bool {
    if mesh.is_empty() {
        return true; // Empty mesh is trivially correct
    }

    let centroid = mesh_centroid(mesh);
    mesh.iter()
        .all(|t| (t.centroid() - centroid).dot(&t.normal()) > 0.0)
}
