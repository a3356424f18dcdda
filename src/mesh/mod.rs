//! `Mesh` struct: an ordered triangle soup ready to be serialized.

use crate::errors::ValidationError;
use crate::float_types::Real;
use nalgebra::Point3;

pub mod triangle;

pub use triangle::Triangle;

/// An ordered sequence of [`Triangle`]s.
///
/// No uniqueness or connectivity invariant is enforced: empty, degenerate
/// and non-manifold meshes are all valid input for the writers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create an empty mesh
    #[inline]
    pub const fn new() -> Self {
        Mesh { triangles: Vec::new() }
    }

    /// Build a Mesh from an existing triangle list
    #[inline]
    pub const fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Mesh { triangles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Axis-aligned bounds as `(mins, maxs)`, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let mut points = self.triangles.iter().flat_map(|t| t.vertices.iter());
        let first = *points.next()?;

        Some(points.fold((first, first), |(mins, maxs), p| {
            (mins.inf(p), maxs.sup(p))
        }))
    }

    /// Report the first vertex with a NaN or infinite coordinate.
    ///
    /// The writers never call this; it exists for callers that want to
    /// reject malformed input instead of encoding it as-is.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (triangle, tri) in self.triangles.iter().enumerate() {
            for (vertex, point) in tri.vertices.iter().enumerate() {
                if !point.coords.iter().all(|c| c.is_finite()) {
                    return Err(ValidationError::InvalidCoordinate {
                        triangle,
                        vertex,
                        point: *point,
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of triangles that list `point` (exact comparison) among their vertices.
    pub fn triangles_touching(&self, point: &Point3<Real>) -> usize {
        self.triangles
            .iter()
            .filter(|t| t.vertices.contains(point))
            .count()
    }
}

impl From<Vec<Triangle>> for Mesh {
    fn from(triangles: Vec<Triangle>) -> Self {
        Mesh::from_triangles(triangles)
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Mesh::from_triangles(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

impl IntoIterator for Mesh {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}
