//! Path Mapper: test file <-> source file candidates.

use std::path::{Path, PathBuf};

use crate::domain::file_kind::{ClassifiedFile, FileRole, classify};
use crate::domain::paths::{normalize_relative, parent_dir, relative_to};
use crate::domain::{FolderContext, LayoutConfig, PathCandidateSet};

/// Source candidates for a test file.
///
/// The file's directory below `containing/<test folder>` is replayed below
/// the source root, and the spec marker is removed from the name.
pub fn source_candidates(
    file_path: &Path,
    ctx: &FolderContext,
    layout: &LayoutConfig,
) -> Option<PathCandidateSet> {
    let file_path = normalize_relative(file_path)?;
    let file = classify(&file_path, layout).filter(|f| f.role == FileRole::Test)?;

    let inner = relative_to(parent_dir(&file_path), &ctx.test_root())?;
    let dir = ctx.source_root(&layout.source_folder_name).join(inner);
    build_candidates(&dir, &file, layout)
}

/// Test candidates for a source file.
///
/// The file's directory below the source root is replayed below
/// `containing/<test folder>`, and the spec marker is inserted before the
/// extension.
pub fn test_candidates(
    file_path: &Path,
    ctx: &FolderContext,
    layout: &LayoutConfig,
) -> Option<PathCandidateSet> {
    let file_path = normalize_relative(file_path)?;
    let file = classify(&file_path, layout).filter(|f| f.role == FileRole::Source)?;

    let dirname = parent_dir(&file_path);
    let test_root = ctx.test_root();
    if dirname.starts_with(&test_root) {
        return None;
    }

    let inner = relative_to(dirname, &ctx.source_root(&layout.source_folder_name))?;
    let dir = test_root.join(inner);
    build_candidates(&dir, &file, layout)
}

/// Dispatch on the file's role.
pub fn counterpart_candidates(
    file_path: &Path,
    ctx: &FolderContext,
    layout: &LayoutConfig,
) -> Option<PathCandidateSet> {
    match classify(file_path, layout)?.role {
        FileRole::Test => source_candidates(file_path, ctx, layout),
        FileRole::Source => test_candidates(file_path, ctx, layout),
    }
}

fn build_candidates(
    dir: &Path,
    file: &ClassifiedFile,
    layout: &LayoutConfig,
) -> Option<PathCandidateSet> {
    let paths: Vec<PathBuf> = layout
        .extension_candidates(&file.extension)
        .map(|extension| dir.join(file.counterpart_name(extension, layout)))
        .collect();
    PathCandidateSet::new(paths)
}
