//! The mesh document builder.

use tracing::debug;

use rj_types::{MeshObject, MeshSnapshot};

use crate::document::{
    AttachmentRecord, FaceRecord, GroupRecord, MaterialRecord, MeshDocument, MeshRecord,
    PointRecord, UvFaceRecord, UvLayerRecord, UvRecord, VertexRecord,
};
use crate::engine::{engine_point, engine_vector};
use crate::error::{DocumentError, DocumentResult};

/// Build the export document for one mesh object.
///
/// A pure function of its inputs: no I/O, no mutation of either mesh, no
/// ambient state. Geometry, UV, and material data come from the render
/// snapshot, order preserved throughout. Attachment entries are resolved
/// against the **original** mesh's polygon table - the two meshes share
/// index space only for attachment lookups, never for vertex or face lists.
///
/// # Errors
///
/// Returns [`DocumentError::UnknownAttachmentFace`] if a registry entry
/// references a face index with no polygon in the original mesh.
///
/// # Example
///
/// ```
/// use rj_document::build_document;
/// use rj_types::{EditMesh, MeshObject, Polygon, Vertex};
///
/// let mut mesh = EditMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
/// mesh.polygons.push(Polygon::new(0, vec![0, 1, 2]));
///
/// let mut object = MeshObject::new("Tri", mesh);
/// object.attachments.tag(&[0], "socket");
///
/// let snapshot = object.mesh.evaluate();
/// let document = build_document(&object, &snapshot).unwrap();
/// assert_eq!(document.mesh.attachments.len(), 1);
/// ```
pub fn build_document(
    object: &MeshObject,
    render: &MeshSnapshot,
) -> DocumentResult<MeshDocument> {
    let vertices: Vec<VertexRecord> = render
        .vertices
        .iter()
        .map(|v| VertexRecord {
            groups: v.groups.clone(),
            p: engine_point(&v.position),
        })
        .collect();

    let faces: Vec<FaceRecord> = render
        .faces
        .iter()
        .map(|f| FaceRecord {
            index: f.index,
            material_index: f.material_index,
            normal: PointRecord {
                p: engine_vector(&f.normal),
            },
            vertex_indexes: f.vertices.clone(),
        })
        .collect();

    let uv_layers: Vec<UvLayerRecord> = render
        .uv_layers
        .iter()
        .map(|layer| UvLayerRecord {
            faces: layer
                .faces
                .iter()
                .map(|uvs| UvFaceRecord {
                    uv_list: uvs.iter().map(|&p| UvRecord { p }).collect(),
                })
                .collect(),
            name: layer.name.clone(),
        })
        .collect();

    let materials: Vec<MaterialRecord> = render
        .materials
        .iter()
        .map(|m| MaterialRecord {
            name: m.name.clone(),
        })
        .collect();

    let attachments = resolve_attachments(object)?;

    let groups: Vec<GroupRecord> = object
        .groups
        .iter()
        .map(|g| GroupRecord {
            index: g.index,
            name: g.name.clone(),
        })
        .collect();

    debug!(
        object = %object.name,
        vertices = vertices.len(),
        faces = faces.len(),
        attachments = attachments.len(),
        "built mesh document"
    );

    Ok(MeshDocument {
        groups,
        mesh: MeshRecord {
            attachments,
            faces,
            materials,
            uv_layers,
            vertices,
        },
        name: object.name.clone(),
    })
}

/// Resolve registry entries against the original polygon table.
fn resolve_attachments(object: &MeshObject) -> DocumentResult<Vec<AttachmentRecord>> {
    let mut attachments = Vec::with_capacity(object.attachments.len());

    for entry in &object.attachments {
        let polygon = object.mesh.polygon(entry.face_index).ok_or(
            DocumentError::UnknownAttachmentFace {
                face_index: entry.face_index,
                polygon_count: object.mesh.polygon_count(),
            },
        )?;

        attachments.push(AttachmentRecord {
            attachment_type: entry.attachment_type.clone(),
            normal: engine_vector(&object.mesh.polygon_normal(polygon)),
            position: engine_point(&object.mesh.polygon_center(polygon)),
        });
    }

    Ok(attachments)
}
