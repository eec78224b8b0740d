//! Model loading.
//!
//! Only geometry is read: vertex positions and faces of a Wavefront OBJ file.
//! Normals, texture coordinates and materials are ignored.

mod error;
mod obj;
mod primitives;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::math::Mesh;

pub use error::ObjError;
pub use obj::parse_obj;
pub use primitives::cube;

/// Loads an OBJ model from disk.
pub fn load_model(path: impl AsRef<Path>) -> Result<Mesh> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open model {}", path.display()))?;

    let mesh = parse_obj(BufReader::new(file))
        .with_context(|| format!("failed to parse model {}", path.display()))?;

    log::info!("loaded model {} ({} triangles)", path.display(), mesh.len());
    Ok(mesh)
}

/// Loads an OBJ model, falling back to the built-in cube on any error.
pub fn load_model_or_cube(path: impl AsRef<Path>) -> Mesh {
    match load_model(&path) {
        Ok(mesh) if !mesh.is_empty() => mesh,
        Ok(_) => {
            log::warn!("model {} has no faces; using built-in cube", path.as_ref().display());
            cube()
        }
        Err(e) => {
            log::warn!("{e:#}; using built-in cube");
            cube()
        }
    }
}
