//! spec-switch: jump between a source file and its spec file in projects that
//! keep implementation and tests in parallel directory trees.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CandidateStatus, CandidatesOutcome, CreateMode, SkipReason, SwitchOptions, SwitchOutcome,
    candidates, candidates_at, switch, switch_at,
};
pub use domain::{
    AppError, FileRole, FolderContext, LayoutConfig, PathCandidateSet, Resolution, decide, locate,
    source_candidates, test_candidates,
};
