//! Struct and functions for working with `Triangle`s from which a `Mesh` is composed.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// An ordered triple of points. The order defines the winding, and with it
/// the direction of the face normal (right-hand rule on `v1 - v0`, `v2 - v0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<Real>; 3],
}

impl Triangle {
    /// Create a new [`Triangle`]. Coordinates are stored verbatim, non-finite values included.
    #[inline]
    pub const fn new(a: Point3<Real>, b: Point3<Real>, c: Point3<Real>) -> Self {
        Triangle { vertices: [a, b, c] }
    }

    /// Unnormalized face normal, `(v1 - v0) × (v2 - v0)`.
    ///
    /// Its length is twice the triangle's area.
    pub fn cross(&self) -> Vector3<Real> {
        let [v0, v1, v2] = &self.vertices;
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        edge1.cross(&edge2)
    }

    /// `true` when the cross product has zero length (collinear or coincident
    /// vertices) or cannot be computed from finite values.
    ///
    /// ```rust
    /// # use nalgebra::Point3;
    /// # use stl_fixtures::mesh::Triangle;
    /// let flat = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 1.0, 1.0),
    ///     Point3::new(2.0, 2.0, 2.0),
    /// );
    /// assert!(flat.is_degenerate());
    /// ```
    pub fn is_degenerate(&self) -> bool {
        let length = self.cross().norm();

        // NaN compares false, so non-finite input lands on the degenerate side
        !(length.is_finite() && length > 0.0)
    }

    /// Unit face normal, or `+Z` for a degenerate triangle.
    pub fn normal(&self) -> Vector3<Real> {
        if self.is_degenerate() {
            Vector3::z()
        } else {
            self.cross().normalize()
        }
    }

    /// Same triangle with the opposite winding.
    pub fn flipped(&self) -> Self {
        let [a, b, c] = self.vertices;
        Triangle { vertices: [a, c, b] }
    }

    /// Average of the three vertices.
    pub fn centroid(&self) -> Point3<Real> {
        let [a, b, c] = &self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// `true` when every coordinate of every vertex is finite.
    pub fn is_finite(&self) -> bool {
        self.vertices
            .iter()
            .all(|p| p.coords.iter().all(|c| c.is_finite()))
    }
}

impl From<[Point3<Real>; 3]> for Triangle {
    fn from(vertices: [Point3<Real>; 3]) -> Self {
        Triangle { vertices }
    }
}

impl From<[[Real; 3]; 3]> for Triangle {
    fn from(points: [[Real; 3]; 3]) -> Self {
        Triangle {
            vertices: points.map(Point3::from),
        }
    }
}
