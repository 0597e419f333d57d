use std::path::Path;

use crate::domain::AppError;

/// Port for asking the user before a file is created.
pub trait UserConfirmation {
    /// Ask whether the missing root-relative `path` should be created.
    fn prompt_create(&self, path: &Path) -> Result<bool, AppError>;
}
