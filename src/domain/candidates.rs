//! Ordered counterpart candidates and the pick-or-create decision.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Non-empty, preference-ordered list of root-relative counterpart paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathCandidateSet(Vec<PathBuf>);

impl PathCandidateSet {
    /// Build a set, or `None` when `paths` is empty.
    pub fn new(paths: Vec<PathBuf>) -> Option<Self> {
        if paths.is_empty() { None } else { Some(Self(paths)) }
    }

    /// Most preferred candidate; the one created when none exists.
    pub fn first(&self) -> &Path {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for PathCandidateSet {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Result of checking a candidate set against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// First candidate that already exists.
    Existing(PathBuf),
    /// Nothing exists; the most preferred candidate should be offered for creation.
    Missing(PathBuf),
}

/// Pick the first existing candidate, falling back to the first one.
///
/// `exists` is called in preference order and stops at the first hit.
pub fn decide<F>(candidates: &PathCandidateSet, mut exists: F) -> Resolution
where
    F: FnMut(&Path) -> bool,
{
    match candidates.iter().find(|candidate| exists(candidate)) {
        Some(found) => Resolution::Existing(found.to_path_buf()),
        None => Resolution::Missing(candidates.first().to_path_buf()),
    }
}
