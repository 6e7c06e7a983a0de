//! Attachment-face registry.
//!
//! Attachment faces let the user mark polygons of a mesh with an attachment
//! type. The consuming game engine uses them to decide which faces of one
//! shape can attach to which faces of another.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One attachment annotation: a polygon index paired with a type label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttachmentFace {
    /// Index into the original mesh's polygon table.
    pub face_index: u32,

    /// User-chosen attachment type, e.g. `"socket"` or `"door"`.
    pub attachment_type: String,
}

/// Sparse mapping from polygon index to attachment type.
///
/// The registry is persistent state owned by a mesh asset: it survives
/// across export calls and editing sessions, is mutated only by [`tag`]
/// (`tag` = upsert, never remove), and is read-only during export.
///
/// # Invariant
///
/// At most one entry per face index. Re-tagging an already-tagged face
/// overwrites its type in place; entry order is otherwise insertion order,
/// which keeps document output deterministic.
///
/// # Example
///
/// ```
/// use rj_types::AttachmentRegistry;
///
/// let mut registry = AttachmentRegistry::new();
/// registry.tag(&[5, 7], "door");
/// registry.tag(&[5], "hatch");
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.get(5), Some("hatch"));
/// assert_eq!(registry.get(7), Some("door"));
/// ```
///
/// [`tag`]: AttachmentRegistry::tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttachmentRegistry {
    entries: Vec<AttachmentFace>,
}

impl AttachmentRegistry {
    /// Create an empty registry.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Tag a batch of faces with an attachment type.
    ///
    /// For each face index: overwrite the existing entry's type if one is
    /// present, append a new entry otherwise. Never removes entries. An
    /// empty batch is a no-op. Idempotent: repeating a call leaves the
    /// registry unchanged.
    pub fn tag(&mut self, face_indices: &[u32], attachment_type: &str) {
        for &face_index in face_indices {
            if let Some(entry) = self
                .entries
                .iter_mut()
                .find(|e| e.face_index == face_index)
            {
                if entry.attachment_type != attachment_type {
                    entry.attachment_type = attachment_type.to_owned();
                }
            } else {
                self.entries.push(AttachmentFace {
                    face_index,
                    attachment_type: attachment_type.to_owned(),
                });
            }
        }
    }

    /// Attachment type for a face index, if tagged.
    #[must_use]
    pub fn get(&self, face_index: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.face_index == face_index)
            .map(|e| e.attachment_type.as_str())
    }

    /// Iterate entries in insertion order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, AttachmentFace> {
        self.entries.iter()
    }

    /// Number of tagged faces.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no face is tagged.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AttachmentRegistry {
    type Item = &'a AttachmentFace;
    type IntoIter = std::slice::Iter<'a, AttachmentFace>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_appends_new_entries() {
        let mut registry = AttachmentRegistry::new();
        registry.tag(&[2, 7], "socket");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(2), Some("socket"));
        assert_eq!(registry.get(7), Some("socket"));
        assert_eq!(registry.get(3), None);
    }

    #[test]
    fn tag_is_idempotent() {
        let mut registry = AttachmentRegistry::new();
        registry.tag(&[5], "door");
        let once = registry.clone();
        registry.tag(&[5], "door");

        assert_eq!(registry, once);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn tag_overwrites_in_place() {
        let mut registry = AttachmentRegistry::new();
        registry.tag(&[5], "door");
        registry.tag(&[9], "vent");
        registry.tag(&[5], "hatch");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(5), Some("hatch"));
        // Overwrite keeps the original position.
        let order: Vec<u32> = registry.iter().map(|e| e.face_index).collect();
        assert_eq!(order, vec![5, 9]);
    }

    #[test]
    fn empty_batch_is_noop() {
        let mut registry = AttachmentRegistry::new();
        registry.tag(&[], "door");
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_indices_in_one_batch_collapse() {
        let mut registry = AttachmentRegistry::new();
        registry.tag(&[4, 4, 4], "port");
        assert_eq!(registry.len(), 1);
    }
}
