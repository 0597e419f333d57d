use std::path::Path;

/// Port for read-only existence checks on absolute paths.
pub trait FilesystemProbe {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
