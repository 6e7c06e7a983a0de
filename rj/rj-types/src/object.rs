//! Mesh object: a named mesh asset with persistent attachment state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AttachmentRegistry, EditMesh};

/// A named vertex group on a mesh object.
///
/// Vertices reference groups by `index` (see [`crate::Vertex::groups`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexGroup {
    /// Stable group index.
    pub index: u32,

    /// Group name, as authored.
    pub name: String,
}

/// A mesh asset: editable mesh, vertex groups, and the attachment registry.
///
/// The registry lives here rather than in any global state so that both the
/// tagging operation and the document builder receive it explicitly.
///
/// # Example
///
/// ```
/// use rj_types::{EditMesh, MeshObject};
///
/// let mut object = MeshObject::new("Hull", EditMesh::new());
/// object.attachments.tag(&[0], "socket");
/// assert_eq!(object.attachments.get(0), Some("socket"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshObject {
    /// Object name; also the stem of the exported file name.
    pub name: String,

    /// The editable mesh.
    pub mesh: EditMesh,

    /// Vertex groups, in host-defined order.
    pub groups: Vec<VertexGroup>,

    /// Persistent attachment-face registry.
    pub attachments: AttachmentRegistry,
}

impl MeshObject {
    /// Create an object with no groups and an empty registry.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, mesh: EditMesh) -> Self {
        Self {
            name: name.into(),
            mesh,
            groups: Vec::new(),
            attachments: AttachmentRegistry::new(),
        }
    }
}
