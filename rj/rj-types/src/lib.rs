//! Core mesh and attachment-face types for RJ export.
//!
//! This crate provides the host-boundary data model shared by the rest of
//! the workspace:
//!
//! - [`Vertex`] - A point in 3D space with vertex-group references
//! - [`Polygon`] and [`EditMesh`] - The original, editable polygon mesh
//! - [`Face`] and [`MeshSnapshot`] - The render-evaluated, tessellated view
//! - [`UvLayer`] and [`MaterialSlot`] - Per-face UV data and material slots
//! - [`AttachmentRegistry`] - Face-index to attachment-type mapping
//! - [`MeshObject`] - A named mesh asset with its persistent registry
//!
//! # Layer 0 Crate
//!
//! This crate has no I/O and no engine dependencies. It can be used in:
//! - CLI tools
//! - Build pipelines
//! - Servers
//! - Editor plugins
//!
//! # Coordinate System
//!
//! Source data uses a **right-handed, Z-up** coordinate system with `f64`
//! coordinates. Conversion into the target engine's axis convention happens
//! downstream, in `rj-document`; nothing in this crate remaps axes.
//!
//! Polygon winding is preserved exactly as authored.
//!
//! # Example
//!
//! ```
//! use rj_types::{EditMesh, Polygon, Vertex};
//!
//! let mut mesh = EditMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
//! mesh.polygons.push(Polygon::new(0, vec![0, 1, 2]));
//!
//! let snapshot = mesh.evaluate();
//! assert_eq!(snapshot.faces.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod attachment;
mod face;
mod material;
mod mesh;
mod object;
mod snapshot;
mod uv;
mod vertex;

pub use attachment::{AttachmentFace, AttachmentRegistry};
pub use face::Face;
pub use material::MaterialSlot;
pub use mesh::{EditMesh, Polygon};
pub use object::{MeshObject, VertexGroup};
pub use snapshot::MeshSnapshot;
pub use uv::UvLayer;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
