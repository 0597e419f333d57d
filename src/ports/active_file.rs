use std::path::PathBuf;

use crate::domain::AppError;

/// The file the user is working on, located inside a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFile {
    /// Absolute project root.
    pub root: PathBuf,
    /// File path relative to `root`.
    pub path: PathBuf,
}

/// Port for retrieving the active file from the host.
pub trait ActiveFileProvider {
    /// `Ok(None)` when there is no active file or it lies outside any project root.
    fn current_rel_path(&self) -> Result<Option<ActiveFile>, AppError>;
}
