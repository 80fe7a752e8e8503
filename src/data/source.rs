use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;

use super::loader;
use super::model::MovieMap;

// ---------------------------------------------------------------------------
// DatasetSource – the injectable loader collaborator
// ---------------------------------------------------------------------------

/// Supplies raw identifier → feature-vector data for a named dataset.
///
/// The catalog takes this as an explicit dependency so tests can substitute
/// an in-memory fake instead of reading files.
pub trait DatasetSource {
    /// Load the full mapping for `dataset_id`.  Fails if the dataset is
    /// missing or unreadable; an empty dataset is valid and yields an
    /// empty map.
    fn load_data(&self, dataset_id: &str) -> Result<MovieMap>;
}

/// Errors callers may want to match on, as opposed to generic parse
/// failures which stay inside `anyhow`.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset '{0}' not found")]
    NotFound(String),
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
}

// ---------------------------------------------------------------------------
// FileDatasetSource – production implementation over a data directory
// ---------------------------------------------------------------------------

/// Resolves dataset ids to files under a data root and parses them.
///
/// A dataset id that names an existing file (relative or absolute) is used
/// as-is; otherwise `<root>/<id>.{csv,json,parquet}` are probed in order.
#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    root: PathBuf,
}

const PROBED_EXTENSIONS: [&str; 3] = ["csv", "json", "parquet"];

impl FileDatasetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileDatasetSource { root: root.into() }
    }

    fn resolve(&self, dataset_id: &str) -> Option<PathBuf> {
        let direct = Path::new(dataset_id);
        if direct.is_file() {
            return Some(direct.to_path_buf());
        }
        for ext in PROBED_EXTENSIONS {
            let candidate = self.root.join(format!("{dataset_id}.{ext}"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        None
    }
}

impl DatasetSource for FileDatasetSource {
    fn load_data(&self, dataset_id: &str) -> Result<MovieMap> {
        let path = self
            .resolve(dataset_id)
            .ok_or_else(|| DatasetError::NotFound(dataset_id.to_string()))?;
        log::debug!("dataset '{dataset_id}' resolved to {}", path.display());
        loader::load_file(&path)
    }
}
