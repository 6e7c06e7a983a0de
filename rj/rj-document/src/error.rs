//! Error types for document building.

use thiserror::Error;

/// Result type for document building.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors that can occur while building a mesh document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// An attachment registry entry references a polygon that no longer
    /// exists in the original mesh, typically because the mesh topology
    /// changed after tagging.
    ///
    /// Attachments carry authored game-logic metadata; dropping one
    /// silently would lose it, so this fails the whole build instead.
    #[error(
        "attachment face {face_index} not found in original mesh \
         (polygon table has {polygon_count} entries)"
    )]
    UnknownAttachmentFace {
        /// The offending registry face index.
        face_index: u32,
        /// Size of the original mesh's polygon table.
        polygon_count: usize,
    },
}
