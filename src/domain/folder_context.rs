//! Directory Locator: nearest enclosing test folder.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::domain::paths::normalize_relative;
use crate::ports::FilesystemProbe;

/// Where the test tree lives relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderContext {
    /// Root-relative directory holding the test folder; empty for the root itself.
    pub containing_folder: PathBuf,
    /// Which recognized test folder name matched.
    pub test_folder_name: String,
    /// Whether a source folder sits next to the test folder.
    pub has_source_folder: bool,
}

impl FolderContext {
    /// Root-relative path of the test folder.
    pub fn test_root(&self) -> PathBuf {
        self.containing_folder.join(&self.test_folder_name)
    }

    /// Root-relative path that source files are laid out under.
    pub fn source_root(&self, source_folder_name: &str) -> PathBuf {
        if self.has_source_folder {
            self.containing_folder.join(source_folder_name)
        } else {
            self.containing_folder.clone()
        }
    }
}

/// Walk from `root_relative_dirname` up to the project root and return the
/// first directory containing one of `test_folder_names`.
///
/// Deeper ancestors win over shallower ones; at the same depth, earlier
/// names win. Returns `None` when no test folder exists on the way up or
/// when the directory escapes the root.
pub fn locate<P>(
    probe: &P,
    root: &Path,
    root_relative_dirname: &Path,
    test_folder_names: &[String],
    source_folder_name: &str,
) -> Option<FolderContext>
where
    P: FilesystemProbe + ?Sized,
{
    let dirname = normalize_relative(root_relative_dirname)?;
    let segments: Vec<_> = dirname.components().collect();

    for depth in (0..=segments.len()).rev() {
        let prefix: PathBuf = segments[..depth].iter().collect();
        let base = root.join(&prefix);

        for name in test_folder_names {
            if !probe.is_dir(&base.join(name)) {
                continue;
            }
            let has_source_folder = probe.is_dir(&base.join(source_folder_name));
            debug!(
                containing = %prefix.display(),
                test_folder = %name,
                has_source_folder,
                "located test folder"
            );
            return Some(FolderContext {
                containing_folder: prefix,
                test_folder_name: name.clone(),
                has_source_folder,
            });
        }
    }

    debug!(dirname = %dirname.display(), "no enclosing test folder");
    None
}
