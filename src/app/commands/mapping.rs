//! Shared pipeline: active file -> classification -> locator -> mapper.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::app::config::load_layout;
use crate::domain::paths::{normalize_relative, parent_dir};
use crate::domain::{
    AppError, ClassifiedFile, FolderContext, PathCandidateSet, classify, counterpart_candidates,
    locate,
};
use crate::ports::{ActiveFileProvider, FileReader, FilesystemProbe};

/// Why a command did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No active file, or it lies outside any project root.
    NoActiveFile,
    /// The file extension is not a recognized code extension.
    UnrecognizedExtension,
    /// No test folder exists between the file and the project root.
    NoTestFolder,
    /// The file does not sit where the layout expects it.
    UnusablePath,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NoActiveFile => "no active file inside a project root",
            SkipReason::UnrecognizedExtension => "file extension is not recognized",
            SkipReason::NoTestFolder => "no enclosing test folder",
            SkipReason::UnusablePath => "file is outside the mapped source and test trees",
        };
        f.write_str(text)
    }
}

/// Everything known about the active file once candidates are computed.
#[derive(Debug, Clone)]
pub struct Mapped {
    pub root: PathBuf,
    pub path: PathBuf,
    pub file: ClassifiedFile,
    pub folder: FolderContext,
    pub candidates: PathCandidateSet,
}

/// Outcome of the shared pipeline.
#[derive(Debug, Clone)]
pub enum Mapping {
    Mapped(Mapped),
    Skipped(SkipReason),
}

/// Run the shared pipeline, stopping at the first step that has nothing to do.
pub fn map_active_file<A, F>(active_file: &A, files: &F) -> Result<Mapping, AppError>
where
    A: ActiveFileProvider + ?Sized,
    F: FilesystemProbe + FileReader + ?Sized,
{
    let Some(active) = active_file.current_rel_path()? else {
        return Ok(Mapping::Skipped(SkipReason::NoActiveFile));
    };
    let Some(path) = normalize_relative(&active.path) else {
        return Ok(Mapping::Skipped(SkipReason::UnusablePath));
    };

    let layout = load_layout(files, &active.root)?;
    let Some(file) = classify(&path, &layout) else {
        return Ok(Mapping::Skipped(SkipReason::UnrecognizedExtension));
    };

    let Some(folder) = locate(
        files,
        &active.root,
        parent_dir(&path),
        &layout.test_folder_names,
        &layout.source_folder_name,
    ) else {
        return Ok(Mapping::Skipped(SkipReason::NoTestFolder));
    };

    let Some(candidates) = counterpart_candidates(&path, &folder, &layout) else {
        return Ok(Mapping::Skipped(SkipReason::UnusablePath));
    };
    debug!(
        file = %path.display(),
        role = ?file.role,
        first = %candidates.first().display(),
        "computed counterpart candidates"
    );

    Ok(Mapping::Mapped(Mapped { root: active.root, path, file, folder, candidates }))
}
