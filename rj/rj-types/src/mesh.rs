//! Editable polygon mesh and render evaluation.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Face, MaterialSlot, MeshSnapshot, UvLayer, Vertex};

/// A polygon in the editable mesh.
///
/// Vertex indices reference the owning [`EditMesh`]'s vertex table and keep
/// the authored winding order. Polygons may be triangles, quads, or n-gons.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    /// Index into the mesh's material slot table.
    pub material_index: u32,

    /// Vertex indices in winding order.
    pub vertices: Vec<u32>,
}

impl Polygon {
    /// Create a polygon from a material index and a vertex loop.
    #[inline]
    #[must_use]
    pub const fn new(material_index: u32, vertices: Vec<u32>) -> Self {
        Self {
            material_index,
            vertices,
        }
    }
}

/// The original, editable polygon mesh.
///
/// This is the mesh the user authors against: polygons may be n-gons, and
/// attachment faces are resolved against this polygon table (by index), not
/// against the tessellated render view. See [`EditMesh::evaluate`].
///
/// Polygon vertex indices must be valid for `vertices`; the mesh provider is
/// responsible for upholding this at the boundary.
///
/// # Example
///
/// ```
/// use rj_types::{EditMesh, Polygon, Vertex};
///
/// let mut mesh = EditMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.polygons.push(Polygon::new(0, vec![0, 1, 2, 3]));
///
/// let center = mesh.polygon_center(&mesh.polygons[0]);
/// assert!((center.x - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditMesh {
    /// Vertex table.
    pub vertices: Vec<Vertex>,

    /// Polygon table. Attachment face indices reference this table.
    pub polygons: Vec<Polygon>,

    /// UV layers; each layer carries one UV list per polygon, parallel to
    /// `polygons`.
    pub uv_layers: Vec<UvLayer>,

    /// Material slots, in slot order.
    pub materials: Vec<MaterialSlot>,
}

impl EditMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            polygons: Vec::new(),
            uv_layers: Vec::new(),
            materials: Vec::new(),
        }
    }

    /// Number of polygons in the editable polygon table.
    #[inline]
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Look up a polygon by its stable index.
    #[must_use]
    pub fn polygon(&self, index: u32) -> Option<&Polygon> {
        self.polygons.get(index as usize)
    }

    /// Center of a polygon: the average of its vertex positions.
    ///
    /// Returns the origin for an empty vertex loop.
    #[must_use]
    pub fn polygon_center(&self, polygon: &Polygon) -> Point3<f64> {
        if polygon.vertices.is_empty() {
            return Point3::origin();
        }

        let mut sum = Vector3::zeros();
        for &i in &polygon.vertices {
            sum += self.vertices[i as usize].position.coords;
        }

        #[allow(clippy::cast_precision_loss)]
        // Polygon loops are tiny; the count is exactly representable
        Point3::from(sum / polygon.vertices.len() as f64)
    }

    /// Unit normal of a polygon, by Newell's method over its vertex loop.
    ///
    /// Returns the zero vector for degenerate loops.
    #[must_use]
    pub fn polygon_normal(&self, polygon: &Polygon) -> Vector3<f64> {
        loop_normal(&self.vertices, &polygon.vertices)
    }

    /// Produce the render-evaluated snapshot of this mesh.
    ///
    /// Triangles and quads pass through unchanged. N-gons (more than four
    /// vertices) are fan-triangulated from their first vertex. UV layers are
    /// re-split per emitted face so that layer face lists stay parallel to
    /// the snapshot face table. Face indices are assigned sequentially in
    /// emission order.
    ///
    /// The snapshot borrows nothing: it is an independent value, safe to
    /// drop as soon as a document has been built from it.
    ///
    /// # Example
    ///
    /// ```
    /// use rj_types::{EditMesh, Polygon, Vertex};
    ///
    /// let mut mesh = EditMesh::new();
    /// for i in 0..5 {
    ///     let a = f64::from(i) * std::f64::consts::TAU / 5.0;
    ///     mesh.vertices.push(Vertex::from_coords(a.cos(), a.sin(), 0.0));
    /// }
    /// mesh.polygons.push(Polygon::new(0, vec![0, 1, 2, 3, 4]));
    ///
    /// // One pentagon fans into three triangles.
    /// assert_eq!(mesh.evaluate().faces.len(), 3);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Face indices are u32 by contract; meshes beyond u32 faces are unsupported
    pub fn evaluate(&self) -> MeshSnapshot {
        let mut faces = Vec::with_capacity(self.polygons.len());
        let mut layer_faces: Vec<Vec<Vec<[f64; 2]>>> =
            vec![Vec::with_capacity(self.polygons.len()); self.uv_layers.len()];

        for (poly_index, polygon) in self.polygons.iter().enumerate() {
            for corners in tessellate_corners(polygon.vertices.len()) {
                let loop_vertices: Vec<u32> =
                    corners.iter().map(|&c| polygon.vertices[c]).collect();
                let normal = loop_normal(&self.vertices, &loop_vertices);

                faces.push(Face {
                    index: faces.len() as u32,
                    material_index: polygon.material_index,
                    normal,
                    vertices: loop_vertices,
                });

                for (layer_index, layer) in self.uv_layers.iter().enumerate() {
                    if let Some(uvs) = layer.faces.get(poly_index) {
                        layer_faces[layer_index].push(
                            corners
                                .iter()
                                .map(|&c| uvs.get(c).copied().unwrap_or_default())
                                .collect(),
                        );
                    }
                }
            }
        }

        let uv_layers = self
            .uv_layers
            .iter()
            .zip(layer_faces)
            .map(|(layer, faces)| UvLayer {
                name: layer.name.clone(),
                faces,
            })
            .collect();

        MeshSnapshot {
            vertices: self.vertices.clone(),
            faces,
            uv_layers,
            materials: self.materials.clone(),
        }
    }
}

/// Corner-index lists for one polygon's tessellation.
///
/// Corners (not vertex indices) are returned so callers can split per-corner
/// data such as UVs with the same selection.
fn tessellate_corners(count: usize) -> Vec<Vec<usize>> {
    if count <= 4 {
        vec![(0..count).collect()]
    } else {
        (1..count - 1).map(|j| vec![0, j, j + 1]).collect()
    }
}

/// Unit normal of a vertex loop by Newell's method.
///
/// Returns the zero vector for loops with no usable area.
fn loop_normal(vertices: &[Vertex], loop_vertices: &[u32]) -> Vector3<f64> {
    let mut normal: Vector3<f64> = Vector3::zeros();

    for (i, &a) in loop_vertices.iter().enumerate() {
        let b = loop_vertices[(i + 1) % loop_vertices.len()];
        let p = &vertices[a as usize].position;
        let q = &vertices[b as usize].position;

        normal.x += (p.y - q.y) * (p.z + q.z);
        normal.y += (p.z - q.z) * (p.x + q.x);
        normal.z += (p.x - q.x) * (p.y + q.y);
    }

    let len = normal.norm();
    if len > f64::EPSILON {
        normal / len
    } else {
        Vector3::zeros()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad_mesh() -> EditMesh {
        let mut mesh = EditMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.polygons.push(Polygon::new(0, vec![0, 1, 2, 3]));
        mesh
    }

    #[test]
    fn polygon_center_is_vertex_average() {
        let mesh = quad_mesh();
        let center = mesh.polygon_center(&mesh.polygons[0]);
        assert_relative_eq!(center.x, 0.5);
        assert_relative_eq!(center.y, 0.5);
        assert_relative_eq!(center.z, 0.0);
    }

    #[test]
    fn polygon_normal_ccw_points_up() {
        let mesh = quad_mesh();
        let normal = mesh.polygon_normal(&mesh.polygons[0]);
        assert_relative_eq!(normal.x, 0.0);
        assert_relative_eq!(normal.y, 0.0);
        assert_relative_eq!(normal.z, 1.0);
    }

    #[test]
    fn degenerate_polygon_normal_is_zero() {
        let mut mesh = EditMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.polygons.push(Polygon::new(0, vec![0, 1, 0]));

        let normal = mesh.polygon_normal(&mesh.polygons[0]);
        assert_eq!(normal, Vector3::zeros());
    }

    #[test]
    fn evaluate_passes_quads_through() {
        let snapshot = quad_mesh().evaluate();
        assert_eq!(snapshot.faces.len(), 1);
        assert_eq!(snapshot.faces[0].vertices, vec![0, 1, 2, 3]);
        assert_eq!(snapshot.faces[0].index, 0);
    }

    #[test]
    fn evaluate_fans_ngons() {
        let mut mesh = EditMesh::new();
        for i in 0..6 {
            let a = f64::from(i) * std::f64::consts::TAU / 6.0;
            mesh.vertices.push(Vertex::from_coords(a.cos(), a.sin(), 0.0));
        }
        mesh.polygons.push(Polygon::new(2, vec![0, 1, 2, 3, 4, 5]));

        let snapshot = mesh.evaluate();
        assert_eq!(snapshot.faces.len(), 4);
        assert_eq!(snapshot.faces[0].vertices, vec![0, 1, 2]);
        assert_eq!(snapshot.faces[3].vertices, vec![0, 4, 5]);

        // Material index and sequential face indices carry through the fan.
        for (i, face) in snapshot.faces.iter().enumerate() {
            assert_eq!(face.index as usize, i);
            assert_eq!(face.material_index, 2);
        }
    }

    #[test]
    fn evaluate_splits_uv_layers_with_faces() {
        let mut mesh = EditMesh::new();
        for i in 0..5 {
            let a = f64::from(i) * std::f64::consts::TAU / 5.0;
            mesh.vertices.push(Vertex::from_coords(a.cos(), a.sin(), 0.0));
        }
        mesh.polygons.push(Polygon::new(0, vec![0, 1, 2, 3, 4]));
        mesh.uv_layers.push(UvLayer {
            name: "UVMap".to_owned(),
            faces: vec![vec![
                [0.0, 0.0],
                [0.1, 0.0],
                [0.2, 0.1],
                [0.1, 0.2],
                [0.0, 0.1],
            ]],
        });

        let snapshot = mesh.evaluate();
        assert_eq!(snapshot.uv_layers.len(), 1);
        assert_eq!(snapshot.uv_layers[0].faces.len(), snapshot.faces.len());
        // Second fan triangle selects corners (0, 2, 3).
        assert_eq!(
            snapshot.uv_layers[0].faces[1],
            vec![[0.0, 0.0], [0.2, 0.1], [0.1, 0.2]]
        );
    }

    #[test]
    fn evaluate_face_normal_matches_polygon_winding() {
        let mut mesh = quad_mesh();
        // Flip winding: normal should point down.
        mesh.polygons[0].vertices.reverse();

        let snapshot = mesh.evaluate();
        assert_relative_eq!(snapshot.faces[0].normal.z, -1.0);
    }

    #[test]
    fn polygon_lookup() {
        let mesh = quad_mesh();
        assert!(mesh.polygon(0).is_some());
        assert!(mesh.polygon(1).is_none());
        assert_eq!(mesh.polygon_count(), 1);
    }
}
