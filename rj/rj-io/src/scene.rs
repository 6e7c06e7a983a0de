//! Scene persistence.
//!
//! A [`Scene`] is the persistent store standing in for a host application's
//! mesh data: every mesh object, including its attachment registry, lives in
//! one JSON scene file and survives across sessions. Tagging mutates the
//! scene and saves it back; export only reads it.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use rj_types::MeshObject;

use crate::error::{IoError, IoResult};
use crate::rj::write_atomic;

/// A collection of mesh objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Mesh objects, in authored order.
    pub objects: Vec<MeshObject>,
}

impl Scene {
    /// Create an empty scene.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Look up an object by name.
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&MeshObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Look up an object by name, mutably.
    pub fn object_mut(&mut self, name: &str) -> Option<&mut MeshObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }
}

/// Load a scene from a JSON file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or a JSON
/// error if the content is malformed.
pub fn load_scene<P: AsRef<Path>>(path: P) -> IoResult<Scene> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let scene: Scene = serde_json::from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), objects = scene.objects.len(), "loaded scene");
    Ok(scene)
}

/// Save a scene to a JSON file, atomically.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem step fails.
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> IoResult<()> {
    let mut bytes = serde_json::to_vec_pretty(scene)?;
    bytes.push(b'\n');
    write_atomic(path.as_ref(), &bytes)?;
    debug!(path = %path.as_ref().display(), objects = scene.objects.len(), "saved scene");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rj_types::{EditMesh, Polygon, Vertex};

    fn small_scene() -> Scene {
        let mut mesh = EditMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
        mesh.polygons.push(Polygon::new(0, vec![0, 1, 2]));

        let mut object = MeshObject::new("Tri", mesh);
        object.attachments.tag(&[0], "socket");

        Scene {
            objects: vec![object],
        }
    }

    #[test]
    fn roundtrip() {
        let scene = small_scene();
        let temp_dir = tempfile::tempdir().ok();

        if let Some(dir) = temp_dir.as_ref() {
            let path = dir.path().join("scene.json");
            save_scene(&scene, &path).unwrap();

            let loaded = load_scene(&path).unwrap();
            assert_eq!(loaded, scene);
            // Registry state survives the roundtrip.
            assert_eq!(loaded.objects[0].attachments.get(0), Some("socket"));
        }
    }

    #[test]
    fn load_missing_file() {
        let result = load_scene("nonexistent_scene_12345.json");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }

    #[test]
    fn object_lookup() {
        let mut scene = small_scene();
        assert!(scene.object("Tri").is_some());
        assert!(scene.object("Hull").is_none());

        scene.object_mut("Tri").unwrap().attachments.tag(&[0], "door");
        assert_eq!(scene.objects[0].attachments.get(0), Some("door"));
    }
}
