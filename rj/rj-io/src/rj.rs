//! The `.rj` file format: deterministic JSON with sorted keys.
//!
//! An `.rj` file is the pretty-printed JSON serialization of one
//! [`MeshDocument`]:
//!
//! - object keys in lexicographic order (guaranteed by the record types'
//!   field declaration order, see `rj_document::document`),
//! - four-space indentation,
//! - shortest-roundtrip float formatting,
//! - a single trailing newline.
//!
//! The same document always serializes to byte-identical text, which keeps
//! exported files diff-friendly under version control.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use rj_document::MeshDocument;

use crate::error::IoResult;

/// Serialize a document to `.rj` text.
///
/// # Errors
///
/// Returns an error if serialization fails (not expected for well-formed
/// documents).
///
/// # Example
///
/// ```
/// use rj_document::build_document;
/// use rj_io::to_rj_string;
/// use rj_types::{EditMesh, MeshObject};
///
/// let object = MeshObject::new("Empty", EditMesh::new());
/// let snapshot = object.mesh.evaluate();
/// let document = build_document(&object, &snapshot).unwrap();
///
/// let text = to_rj_string(&document).unwrap();
/// assert!(text.starts_with("{\n    \"groups\""));
/// assert!(text.ends_with('\n'));
/// ```
pub fn to_rj_string(document: &MeshDocument) -> IoResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}

/// Save a document as `<path>`, atomically.
///
/// The text is written to a sibling temporary file and renamed into place,
/// so a failed save never leaves a partially-written `.rj` file behind.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem step fails.
pub fn save_rj<P: AsRef<Path>>(document: &MeshDocument, path: P) -> IoResult<()> {
    let text = to_rj_string(document)?;
    write_atomic(path.as_ref(), text.as_bytes())
}

/// Write bytes to `path` via a temporary sibling file plus rename.
///
/// On any failure the temporary file is removed and `path` is untouched.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> IoResult<()> {
    let tmp = temp_path(path);

    let written = (|| -> IoResult<()> {
        let file = File::create(&tmp)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()?;
        Ok(())
    })();

    match written {
        Ok(()) => fs::rename(&tmp, path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            e.into()
        }),
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

/// Temporary sibling path for atomic writes: `<file name>.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("out"), OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}
