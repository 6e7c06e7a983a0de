//! Render-evaluated mesh snapshot.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Face, MaterialSlot, UvLayer, Vertex};

/// A render-evaluated, tessellated view of a mesh.
///
/// Produced by [`crate::EditMesh::evaluate`]. The vertex order here is the
/// index space referenced by [`Face::vertices`]; neither list may be
/// re-sorted. UV layer face lists are parallel to `faces`.
///
/// A snapshot shares no storage with its source mesh and is meant to be
/// short-lived: acquired immediately before building a document and dropped
/// immediately after.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshSnapshot {
    /// Vertex table, in native order.
    pub vertices: Vec<Vertex>,

    /// Tessellated face table, in emission order.
    pub faces: Vec<Face>,

    /// UV layers, face lists parallel to `faces`.
    pub uv_layers: Vec<UvLayer>,

    /// Material slots, in slot order.
    pub materials: Vec<MaterialSlot>,
}

impl MeshSnapshot {
    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of tessellated faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
