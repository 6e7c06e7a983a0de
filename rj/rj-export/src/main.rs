//! RJ export command-line tool.
//!
//! Thin adapter over the two core operations:
//!
//! - `rj-export tag` - Tag faces of a scene object with an attachment type
//! - `rj-export export` - Export every mesh object to `.rj` files
//!
//! # Examples
//!
//! ```text
//! rj-export tag --scene station.scene.json --object Hull --faces 2,7 --type socket
//! rj-export export --scene station.scene.json --out shapes/
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rj_io::{export_scene, load_scene, save_scene, IoError};

/// Attachment-face tagging and `.rj` export.
#[derive(Parser)]
#[command(name = "rj-export")]
#[command(about = "Tag attachment faces and export mesh objects as .rj shapes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tag faces of one object with an attachment type
    Tag {
        /// Scene file to read and write back
        #[arg(long)]
        scene: PathBuf,

        /// Name of the mesh object to tag
        #[arg(long)]
        object: String,

        /// Face indices into the object's polygon table
        #[arg(long, value_delimiter = ',')]
        faces: Vec<u32>,

        /// Attachment type to assign, e.g. "socket"
        #[arg(long = "type")]
        attachment_type: String,
    },

    /// Export every mesh object in a scene to .rj files
    Export {
        /// Scene file to read
        #[arg(long)]
        scene: PathBuf,

        /// Output directory (created if absent)
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Tag {
            scene,
            object,
            faces,
            attachment_type,
        } => tag(&scene, &object, &faces, &attachment_type),
        Commands::Export { scene, out } => export(&scene, &out),
    }
}

/// Upsert attachment tags on one object and persist the scene.
fn tag(scene_path: &PathBuf, object: &str, faces: &[u32], attachment_type: &str) -> Result<()> {
    let mut scene = load_scene(scene_path)
        .with_context(|| format!("loading scene {}", scene_path.display()))?;

    let target = scene
        .object_mut(object)
        .ok_or_else(|| IoError::ObjectNotFound {
            name: object.to_owned(),
        })?;
    target.attachments.tag(faces, attachment_type);

    info!(
        object,
        faces = faces.len(),
        attachment_type,
        "tagged attachment faces"
    );

    save_scene(&scene, scene_path)
        .with_context(|| format!("saving scene {}", scene_path.display()))?;
    Ok(())
}

/// Export all objects; finish the batch before reporting any failure.
fn export(scene_path: &PathBuf, out: &PathBuf) -> Result<()> {
    let scene = load_scene(scene_path)
        .with_context(|| format!("loading scene {}", scene_path.display()))?;

    let object_count = scene.objects.len();
    let report = export_scene(&scene, out)?;
    info!(
        written = report.written.len(),
        failed = report.failures.len(),
        "export finished"
    );

    if !report.all_succeeded() {
        bail!(
            "{} of {object_count} objects failed to export",
            report.failures.len()
        );
    }
    Ok(())
}
