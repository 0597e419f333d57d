//! Report counterpart candidates without prompting or creating anything.

use std::path::PathBuf;

use serde::Serialize;

use super::mapping::{Mapping, SkipReason, map_active_file};
use crate::domain::{AppError, FileRole, FolderContext};
use crate::ports::{ActiveFileProvider, FileReader, FilesystemProbe};

/// A counterpart candidate and whether it exists on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateStatus {
    pub path: PathBuf,
    pub exists: bool,
}

/// Result of the candidates command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CandidatesOutcome {
    Mapped {
        root: PathBuf,
        file: PathBuf,
        role: FileRole,
        folder: FolderContext,
        candidates: Vec<CandidateStatus>,
    },
    Skipped {
        reason: SkipReason,
    },
}

/// Execute the candidates command.
pub fn execute<A, F>(active_file: &A, files: &F) -> Result<CandidatesOutcome, AppError>
where
    A: ActiveFileProvider + ?Sized,
    F: FilesystemProbe + FileReader + ?Sized,
{
    let mapped = match map_active_file(active_file, files)? {
        Mapping::Mapped(mapped) => mapped,
        Mapping::Skipped(reason) => return Ok(CandidatesOutcome::Skipped { reason }),
    };

    let candidates = mapped
        .candidates
        .iter()
        .map(|path| CandidateStatus {
            path: path.to_path_buf(),
            exists: files.exists(&mapped.root.join(path)),
        })
        .collect();

    Ok(CandidatesOutcome::Mapped {
        root: mapped.root,
        file: mapped.path,
        role: mapped.file.role,
        folder: mapped.folder,
        candidates,
    })
}
