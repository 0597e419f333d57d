use std::path::Path;

use crate::domain::AppError;

/// Port for creating a missing counterpart file.
pub trait FileCreator {
    /// Create parent directories and an empty file at `path`.
    ///
    /// Leaves an existing file untouched.
    fn create(&self, path: &Path) -> Result<(), AppError>;
}
