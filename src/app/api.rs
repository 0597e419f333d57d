//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{CliActiveFile, CliConfirmation, CliPresenter, LocalFilesystem};
use crate::app::AppContext;
use crate::app::commands::{candidates as candidates_command, switch as switch_command};

pub use crate::adapters::CreateMode;
pub use crate::app::commands::{CandidateStatus, CandidatesOutcome, SkipReason, SwitchOutcome};
pub use crate::domain::AppError;

/// Options for the switch command.
#[derive(Debug, Clone, Default)]
pub struct SwitchOptions {
    /// Active file, absolute or relative to the working directory.
    pub file: PathBuf,
    /// Project root; discovered from project markers when absent.
    pub root: Option<PathBuf>,
    /// How a missing counterpart is handled.
    pub create: CreateMode,
    /// Launch `$VISUAL`/`$EDITOR` instead of printing the path.
    pub open_in_editor: bool,
}

/// Switch from `options.file` to its counterpart, resolving paths against the
/// current directory.
pub fn switch(options: SwitchOptions) -> Result<SwitchOutcome, AppError> {
    switch_at(std::env::current_dir()?, options)
}

/// Switch from `options.file` to its counterpart, resolving paths against `cwd`.
pub fn switch_at(
    cwd: impl Into<PathBuf>,
    options: SwitchOptions,
) -> Result<SwitchOutcome, AppError> {
    let active = CliActiveFile::new(options.file, options.root, cwd);
    let presenter = CliPresenter::new(options.open_in_editor)?;
    let ctx = AppContext::new(
        active,
        LocalFilesystem::new(),
        CliConfirmation::new(options.create),
        presenter,
    );
    switch_command::execute(&ctx)
}

/// List counterpart candidates for `file` without prompting or creating files.
pub fn candidates(file: PathBuf, root: Option<PathBuf>) -> Result<CandidatesOutcome, AppError> {
    candidates_at(std::env::current_dir()?, file, root)
}

/// List counterpart candidates for `file`, resolving paths against `cwd`.
pub fn candidates_at(
    cwd: impl Into<PathBuf>,
    file: PathBuf,
    root: Option<PathBuf>,
) -> Result<CandidatesOutcome, AppError> {
    let active = CliActiveFile::new(file, root, cwd);
    candidates_command::execute(&active, &LocalFilesystem::new())
}
