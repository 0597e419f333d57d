//! Root-relative path helpers.
//!
//! Every path handled by the locator and mapper is relative to the project
//! root. These helpers keep them in a canonical component form so prefix
//! checks and joins never produce `.` or `..` segments.

use std::path::{Component, Path, PathBuf};

/// Normalize a root-relative path: drop `.` segments and redundant separators.
///
/// Returns `None` for absolute paths or paths that step outside the root.
pub fn normalize_relative(path: &Path) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(segment) => normalized.push(segment),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(normalized)
}

/// Directory portion of a root-relative file path; empty at the root.
pub fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

/// Path of `path` below `base`, or `None` when `path` is not under `base`.
pub fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(Path::to_path_buf)
}
