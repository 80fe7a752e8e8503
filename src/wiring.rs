use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::data::source::FileDatasetSource;

/// Assemble the production [`Catalog`] over a file-backed dataset source
/// rooted at `data_root`.
///
/// All object-graph construction lives here so that every collaborator is
/// wired explicitly and checked at compile time.
pub fn catalog(data_root: impl Into<PathBuf>) -> Catalog {
    Catalog::new(Arc::new(FileDatasetSource::new(data_root)))
}
