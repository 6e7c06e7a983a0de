//! Vertex type with vertex-group references.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertex in 3D space with its vertex-group memberships.
///
/// `groups` holds the indices of the vertex groups this vertex belongs to,
/// in host iteration order. Indices reference [`crate::VertexGroup::index`]
/// on the owning [`crate::MeshObject`]; duplicates are preserved verbatim.
///
/// # Example
///
/// ```
/// use rj_types::{Point3, Vertex};
///
/// let v1 = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// let v2 = Vertex::from_coords(1.0, 2.0, 3.0);
/// assert_eq!(v1.position, v2.position);
/// assert!(v1.groups.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Vertex-group indices this vertex belongs to.
    pub groups: Vec<u32>,
}

impl Vertex {
    /// Create a vertex with no group memberships.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            groups: Vec::new(),
        }
    }

    /// Create a vertex from raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use rj_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert_eq!(v.position.y, 2.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex with group memberships.
    ///
    /// # Example
    ///
    /// ```
    /// use rj_types::{Point3, Vertex};
    ///
    /// let v = Vertex::with_groups(Point3::origin(), vec![0, 2]);
    /// assert_eq!(v.groups, vec![0, 2]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_groups(position: Point3<f64>, groups: Vec<u32>) -> Self {
        Self { position, groups }
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_from_coords() {
        let v = Vertex::from_coords(1.0, 2.0, 3.0);
        assert!((v.position.x - 1.0).abs() < f64::EPSILON);
        assert!((v.position.y - 2.0).abs() < f64::EPSILON);
        assert!((v.position.z - 3.0).abs() < f64::EPSILON);
        assert!(v.groups.is_empty());
    }

    #[test]
    fn vertex_groups_preserve_order_and_duplicates() {
        let v = Vertex::with_groups(Point3::origin(), vec![3, 1, 3]);
        assert_eq!(v.groups, vec![3, 1, 3]);
    }

    #[test]
    fn vertex_from_array() {
        let v: Vertex = [1.0, 2.0, 3.0].into();
        assert!((v.position.z - 3.0).abs() < f64::EPSILON);
    }
}
