//! Scene persistence and `.rj` export.
//!
//! This crate owns every filesystem concern of the workspace:
//!
//! - [`to_rj_string`] / [`save_rj`] - Deterministic `.rj` serialization
//! - [`Scene`], [`load_scene`], [`save_scene`] - The persistent scene store
//! - [`export_scene`] / [`export_object`] - The batch export driver
//!
//! All file writes are atomic (temp file plus rename): a failed export or
//! scene save never leaves a partially-written file in place.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use rj_io::{export_scene, load_scene};
//!
//! let scene = load_scene("station.scene.json").unwrap();
//! let report = export_scene(&scene, Path::new("shapes")).unwrap();
//! println!("wrote {} files", report.written.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod export;
mod rj;
mod scene;

pub use error::{IoError, IoResult};
pub use export::{export_object, export_scene, ExportFailure, ExportReport};
pub use rj::{save_rj, to_rj_string};
pub use scene::{load_scene, save_scene, Scene};
