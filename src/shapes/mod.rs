//! Primitive solids used as STL fixtures.
//!
//! Every builder returns a closed triangle soup whose faces are wound
//! counter-clockwise when seen from outside, so each computed normal
//! points away from the solid.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::{Mesh, Triangle};
use nalgebra::Point3;

/// Corner indices of each cube face, two triangles per face.
const CUBE_FACES: [[usize; 3]; 12] = [
    // bottom (-Z)
    [0, 2, 1],
    [0, 3, 2],
    // top (+Z)
    [4, 5, 6],
    [4, 6, 7],
    // front (-Y)
    [0, 1, 5],
    [0, 5, 4],
    // back (+Y)
    [2, 3, 7],
    [2, 7, 6],
    // left (-X)
    [0, 4, 7],
    [0, 7, 3],
    // right (+X)
    [1, 2, 6],
    [1, 6, 5],
];

impl Mesh {
    /// Axis-aligned cube with edge length `size`, centered at the origin.
    ///
    /// Produces 12 triangles (2 per face).
    ///
    /// ```rust
    /// # use stl_fixtures::mesh::Mesh;
    /// let cube = Mesh::cube(10.0).unwrap();
    /// assert_eq!(cube.len(), 12);
    /// ```
    pub fn cube(size: Real) -> Result<Mesh, ValidationError> {
        let s = ValidationError::check_dimension("size", size)? / 2.0;

        let corners = [
            // bottom ring, counter-clockwise from (-, -)
            Point3::new(-s, -s, -s),
            Point3::new(s, -s, -s),
            Point3::new(s, s, -s),
            Point3::new(-s, s, -s),
            // top ring
            Point3::new(-s, -s, s),
            Point3::new(s, -s, s),
            Point3::new(s, s, s),
            Point3::new(-s, s, s),
        ];

        Ok(CUBE_FACES
            .iter()
            .map(|&[a, b, c]| Triangle::new(corners[a], corners[b], corners[c]))
            .collect())
    }

    /// Square pyramid: base of side `base` on the XY plane (z = 0), centered
    /// at the origin, apex at `(0, 0, height)`.
    ///
    /// Produces 6 triangles: 2 for the base and 4 sides.
    pub fn pyramid(base: Real, height: Real) -> Result<Mesh, ValidationError> {
        let s = ValidationError::check_dimension("base", base)? / 2.0;
        let h = ValidationError::check_dimension("height", height)?;

        let b = [
            Point3::new(-s, -s, 0.0),
            Point3::new(s, -s, 0.0),
            Point3::new(s, s, 0.0),
            Point3::new(-s, s, 0.0),
        ];
        let apex = Point3::new(0.0, 0.0, h);

        Ok(Mesh::from_triangles(vec![
            // base, facing -Z
            Triangle::new(b[0], b[2], b[1]),
            Triangle::new(b[0], b[3], b[2]),
            // sides
            Triangle::new(b[0], b[1], apex),
            Triangle::new(b[1], b[2], apex),
            Triangle::new(b[2], b[3], apex),
            Triangle::new(b[3], b[0], apex),
        ]))
    }
}
