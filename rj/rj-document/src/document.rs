//! Document record types.
//!
//! These records mirror the `.rj` JSON shape one-to-one. Serde emits struct
//! fields in declaration order, so every record here declares its fields in
//! lexicographic key order; the writer then produces objects with sorted
//! keys without any post-processing. Keep new fields in that order.

use serde::Serialize;

/// A 3D point or direction lifted into the `{"p": [..]}` record shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRecord {
    /// Engine-space coordinates.
    pub p: [f64; 3],
}

/// A UV pair in the same record shape as 3D points.
///
/// UV data is 2-component; the shared `{"p": [..]}` shape exists for
/// document uniformity and the third coordinate is deliberately absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UvRecord {
    /// Raw `[u, v]` pair.
    pub p: [f64; 2],
}

/// One vertex: engine-space position plus vertex-group indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexRecord {
    /// Vertex-group indices, host order, duplicates preserved.
    pub groups: Vec<u32>,

    /// Engine-space position.
    pub p: [f64; 3],
}

/// One render-tessellated face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceRecord {
    /// Stable face index within this document.
    pub index: u32,

    /// Position of the face's material in the document's material list.
    #[serde(rename = "materialIndex")]
    pub material_index: u32,

    /// Engine-space unit normal.
    pub normal: PointRecord,

    /// Indices into the document's vertex list, winding order preserved.
    #[serde(rename = "vertexIndexes")]
    pub vertex_indexes: Vec<u32>,
}

/// Per-face UV list within a layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UvFaceRecord {
    /// One UV record per corner, winding order matching the face.
    #[serde(rename = "uvList")]
    pub uv_list: Vec<UvRecord>,
}

/// A named UV layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UvLayerRecord {
    /// One entry per face, order matching the document's face list.
    pub faces: Vec<UvFaceRecord>,

    /// Layer name.
    pub name: String,
}

/// A material slot. Only the name is exported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialRecord {
    /// Material name.
    pub name: String,
}

/// One resolved attachment face.
///
/// Position and normal come from the *original* mesh's polygon table, not
/// the render snapshot, and are already engine-space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachmentRecord {
    /// User-chosen attachment type.
    #[serde(rename = "attachment_type")]
    pub attachment_type: String,

    /// Engine-space polygon normal.
    pub normal: [f64; 3],

    /// Engine-space polygon center.
    pub position: [f64; 3],
}

/// The `"mesh"` section of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshRecord {
    /// Resolved attachment faces, registry order.
    pub attachments: Vec<AttachmentRecord>,

    /// Tessellated faces, snapshot order.
    pub faces: Vec<FaceRecord>,

    /// Material slots, slot order.
    pub materials: Vec<MaterialRecord>,

    /// UV layers, layer order.
    #[serde(rename = "uvLayers")]
    pub uv_layers: Vec<UvLayerRecord>,

    /// Vertices, snapshot order. This order is the index space referenced
    /// by [`FaceRecord::vertex_indexes`].
    pub vertices: Vec<VertexRecord>,
}

/// A named vertex group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRecord {
    /// Stable group index, referenced by [`VertexRecord::groups`].
    pub index: u32,

    /// Group name.
    pub name: String,
}

/// The root document for one mesh object.
///
/// Serializes to the top-level shape of an `.rj` file:
///
/// ```text
/// { "groups": [...], "mesh": { ... }, "name": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshDocument {
    /// Vertex groups of the object.
    pub groups: Vec<GroupRecord>,

    /// Geometry, materials, UVs, and attachments.
    pub mesh: MeshRecord,

    /// Object name.
    pub name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn face_record_emits_sorted_keys() {
        let record = FaceRecord {
            index: 3,
            material_index: 1,
            normal: PointRecord { p: [0.0, 1.0, 0.0] },
            vertex_indexes: vec![0, 1, 2],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"index":3,"materialIndex":1,"normal":{"p":[0.0,1.0,0.0]},"vertexIndexes":[0,1,2]}"#
        );
    }

    #[test]
    fn attachment_record_emits_sorted_keys() {
        let record = AttachmentRecord {
            attachment_type: "socket".to_owned(),
            normal: [0.0, 1.0, 0.0],
            position: [0.5, 0.5, -0.5],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"attachment_type":"socket","normal":[0.0,1.0,0.0],"position":[0.5,0.5,-0.5]}"#
        );
    }

    #[test]
    fn document_emits_sorted_top_level_keys() {
        let document = MeshDocument {
            groups: Vec::new(),
            mesh: MeshRecord {
                attachments: Vec::new(),
                faces: Vec::new(),
                materials: Vec::new(),
                uv_layers: Vec::new(),
                vertices: Vec::new(),
            },
            name: "Hull".to_owned(),
        };
        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(
            json,
            r#"{"groups":[],"mesh":{"attachments":[],"faces":[],"materials":[],"uvLayers":[],"vertices":[]},"name":"Hull"}"#
        );
    }

    #[test]
    fn uv_record_stays_two_component() {
        let record = UvRecord { p: [0.25, 0.75] };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"p":[0.25,0.75]}"#);
    }
}
