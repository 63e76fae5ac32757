// ===== letterdraw/src/api.rs =====
use crate::catalog::{self, Catalog};
use crate::error::{PickerError, PkResult};
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads and parses the dataset file in one go.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> PkResult<Catalog> {
    let path = path.as_ref();
    info!("Loading items from {}", path.display());

    let raw = fs::read_to_string(path).map_err(|source| PickerError::Load {
        path: path.display().to_string(),
        source,
    })?;

    Ok(catalog::parse(&raw))
}
