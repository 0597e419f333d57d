use std::path::Path;

use dialoguer::Confirm;

use crate::domain::AppError;
use crate::ports::UserConfirmation;

/// How a missing counterpart is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateMode {
    /// Ask on the terminal.
    #[default]
    Prompt,
    /// Create without asking (`--yes`).
    Always,
    /// Never create (`--no-create`).
    Never,
}

/// Command-line confirmation backed by `dialoguer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliConfirmation {
    mode: CreateMode,
}

impl CliConfirmation {
    pub fn new(mode: CreateMode) -> Self {
        Self { mode }
    }
}

impl UserConfirmation for CliConfirmation {
    fn prompt_create(&self, path: &Path) -> Result<bool, AppError> {
        match self.mode {
            CreateMode::Always => Ok(true),
            CreateMode::Never => Ok(false),
            CreateMode::Prompt => prompt_on_terminal(path),
        }
    }
}

fn prompt_on_terminal(path: &Path) -> Result<bool, AppError> {
    let answer = Confirm::new()
        .with_prompt(format!("{} does not exist. Create it?", path.display()))
        .default(true)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to confirm file creation: {}", err)))?;

    // Esc or q cancels, same as answering no.
    Ok(answer.unwrap_or(false))
}
