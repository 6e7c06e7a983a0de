//! UV layer type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named UV layer.
///
/// `faces` carries one UV list per face, parallel to the face table of the
/// mesh that owns the layer: per-polygon on an [`crate::EditMesh`],
/// per-tessellated-face on a [`crate::MeshSnapshot`]. Each UV list holds one
/// raw `[u, v]` pair per corner, in winding order.
///
/// UV coordinates are inherently 2-component and stay that way through the
/// whole pipeline; no third coordinate is ever synthesized.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UvLayer {
    /// Layer name, as authored.
    pub name: String,

    /// One UV list per face, one `[u, v]` pair per corner.
    pub faces: Vec<Vec<[f64; 2]>>,
}

impl UvLayer {
    /// Create an empty layer with the given name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faces: Vec::new(),
        }
    }
}
