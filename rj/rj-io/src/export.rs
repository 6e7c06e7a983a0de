//! Batch export driver.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use rj_document::build_document;
use rj_types::MeshObject;

use crate::error::IoResult;
use crate::rj::save_rj;
use crate::scene::Scene;

/// One failed object in a batch export.
#[derive(Debug)]
pub struct ExportFailure {
    /// Name of the object that failed.
    pub object: String,

    /// What went wrong.
    pub error: crate::IoError,
}

/// Outcome of a batch export.
///
/// A failing object never aborts the batch; it is recorded here and the
/// remaining objects still export.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Paths written, one per successfully exported object.
    pub written: Vec<PathBuf>,

    /// Objects that failed, with their errors.
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    /// Whether every object exported.
    #[inline]
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Export every object in a scene to `<out_dir>/<name>.rj`.
///
/// The output directory is created if absent. Per-object failures
/// (attachment resolution or I/O) are logged and collected into the report;
/// they do not stop the rest of the batch.
///
/// # Errors
///
/// Returns an error only if the output directory cannot be created.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use rj_io::{export_scene, Scene};
///
/// let scene = Scene::new();
/// let report = export_scene(&scene, Path::new("out")).unwrap();
/// assert!(report.all_succeeded());
/// ```
pub fn export_scene(scene: &Scene, out_dir: &Path) -> IoResult<ExportReport> {
    fs::create_dir_all(out_dir)?;

    let mut report = ExportReport::default();
    for object in &scene.objects {
        match export_object(object, out_dir) {
            Ok(path) => {
                info!(object = %object.name, path = %path.display(), "exported");
                report.written.push(path);
            }
            Err(e) => {
                error!(object = %object.name, error = %e, "export failed");
                report.failures.push(ExportFailure {
                    object: object.name.clone(),
                    error: e,
                });
            }
        }
    }

    Ok(report)
}

/// Export one object to `<out_dir>/<name>.rj`.
///
/// The render snapshot is acquired immediately before building and dropped
/// as soon as the document exists, on every exit path.
///
/// # Errors
///
/// Returns an error if document building or writing fails; a failed write
/// leaves no partial file (see [`save_rj`]).
pub fn export_object(object: &MeshObject, out_dir: &Path) -> IoResult<PathBuf> {
    let document = {
        let snapshot = object.mesh.evaluate();
        build_document(object, &snapshot)?
    };

    let path = out_dir.join(format!("{}.rj", object.name));
    save_rj(&document, &path)?;
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rj_types::{EditMesh, Polygon, Vertex};

    fn triangle_object(name: &str) -> MeshObject {
        let mut mesh = EditMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
        mesh.polygons.push(Polygon::new(0, vec![0, 1, 2]));
        MeshObject::new(name, mesh)
    }

    #[test]
    fn batch_continues_past_failing_object() {
        let good = triangle_object("Good");
        let mut bad = triangle_object("Bad");
        bad.attachments.tag(&[99], "socket");

        let scene = Scene {
            objects: vec![bad, good],
        };

        let temp_dir = tempfile::tempdir().ok();
        if let Some(dir) = temp_dir.as_ref() {
            let report = export_scene(&scene, dir.path()).unwrap();

            assert_eq!(report.written.len(), 1);
            assert_eq!(report.failures.len(), 1);
            assert_eq!(report.failures[0].object, "Bad");
            assert!(!report.all_succeeded());

            assert!(dir.path().join("Good.rj").exists());
            assert!(!dir.path().join("Bad.rj").exists());
        }
    }

    #[test]
    fn export_creates_output_directory() {
        let scene = Scene {
            objects: vec![triangle_object("Tri")],
        };

        let temp_dir = tempfile::tempdir().ok();
        if let Some(dir) = temp_dir.as_ref() {
            let out = dir.path().join("shapes").join("exported");
            let report = export_scene(&scene, &out).unwrap();
            assert!(report.all_succeeded());
            assert!(out.join("Tri.rj").exists());
        }
    }
}
