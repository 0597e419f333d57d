//! Active file supplied on the command line.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{ActiveFile, ActiveFileProvider};

/// Entries whose presence marks a directory as a project root.
pub const PROJECT_MARKERS: &[&str] = &["package.json", "tsconfig.json", ".git"];

/// Resolves a command-line file argument against an explicit or discovered root.
#[derive(Debug, Clone)]
pub struct CliActiveFile {
    file: PathBuf,
    root: Option<PathBuf>,
    cwd: PathBuf,
}

impl CliActiveFile {
    pub fn new(file: impl Into<PathBuf>, root: Option<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self { file: file.into(), root, cwd: cwd.into() }
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.cwd.join(path) }
    }
}

/// Nearest ancestor of `file` holding a project marker, else `fallback`.
fn discover_root(file: &Path, fallback: PathBuf) -> PathBuf {
    file.ancestors()
        .skip(1)
        .find(|dir| PROJECT_MARKERS.iter().any(|marker| dir.join(marker).exists()))
        .map(Path::to_path_buf)
        .unwrap_or(fallback)
}

/// Canonicalize the parent directory of `path` but keep its final component.
///
/// A symlinked active file therefore maps from where the link sits, not from
/// its target. Returns `None` when the parent does not exist.
fn resolve_link_location(path: &Path) -> Result<Option<PathBuf>, AppError> {
    let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
        return Ok(None);
    };
    let parent = if parent.as_os_str().is_empty() { Path::new(".") } else { parent };
    match fs::canonicalize(parent) {
        Ok(parent) => Ok(Some(parent.join(name))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

impl ActiveFileProvider for CliActiveFile {
    fn current_rel_path(&self) -> Result<Option<ActiveFile>, AppError> {
        let Some(file) = resolve_link_location(&self.absolute(&self.file))? else {
            debug!(file = %self.file.display(), "active file does not exist");
            return Ok(None);
        };
        if !file.is_file() {
            debug!(file = %file.display(), "active path is not a file");
            return Ok(None);
        }

        let root = match &self.root {
            Some(root) => fs::canonicalize(self.absolute(root))?,
            None => discover_root(&file, fs::canonicalize(&self.cwd)?),
        };

        match file.strip_prefix(&root) {
            Ok(rel) => Ok(Some(ActiveFile { root: root.clone(), path: rel.to_path_buf() })),
            Err(_) => {
                debug!(file = %file.display(), root = %root.display(), "file outside project root");
                Ok(None)
            }
        }
    }
}
