//! Render-tessellated face type.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A face in the render-evaluated, tessellated face table.
///
/// Unlike [`crate::Polygon`], a face carries its stable index within the
/// snapshot and a precomputed unit normal. Vertex indices reference the
/// snapshot's vertex table in winding order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Position of this face within the snapshot's face table.
    pub index: u32,

    /// Index into the snapshot's material slot table.
    pub material_index: u32,

    /// Unit face normal (zero vector for degenerate faces).
    pub normal: Vector3<f64>,

    /// Vertex indices in winding order.
    pub vertices: Vec<u32>,
}
