//! Mesh-to-document conversion for RJ export.
//!
//! This crate turns a mesh object and its render-evaluated snapshot into a
//! [`MeshDocument`], the ordered structure that serializes to an `.rj` file:
//!
//! - [`build_document`] - The pure builder
//! - [`MeshDocument`] and its record types - The document model
//! - [`engine_point`] / [`engine_vector`] - Source-to-engine axis conversion
//! - [`DocumentError`] - Attachment resolution failures
//!
//! # Determinism
//!
//! The builder is a pure function of its inputs: no I/O, no mutation, no
//! ambient state. Building the same inputs twice yields equal documents, and
//! the record types are laid out so their serialization is byte-stable (see
//! [`document`] module docs).
//!
//! # Example
//!
//! ```
//! use rj_document::build_document;
//! use rj_types::{EditMesh, MeshObject, Polygon, Vertex};
//!
//! let mut mesh = EditMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
//! mesh.polygons.push(Polygon::new(0, vec![0, 1, 2]));
//!
//! let object = MeshObject::new("Tri", mesh);
//! let snapshot = object.mesh.evaluate();
//! let document = build_document(&object, &snapshot).unwrap();
//!
//! assert_eq!(document.name, "Tri");
//! assert_eq!(document.mesh.vertices.len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod builder;
pub mod document;
mod engine;
mod error;

pub use builder::build_document;
pub use document::{
    AttachmentRecord, FaceRecord, GroupRecord, MaterialRecord, MeshDocument, MeshRecord,
    PointRecord, UvFaceRecord, UvLayerRecord, UvRecord, VertexRecord,
};
pub use engine::{engine_point, engine_vector};
pub use error::{DocumentError, DocumentResult};
