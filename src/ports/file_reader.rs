use std::path::Path;

use crate::domain::AppError;

/// Port for reading project files such as `.spec-switch.toml`.
pub trait FileReader {
    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;
}
