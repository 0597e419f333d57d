use std::env;
use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::domain::AppError;
use crate::ports::DocumentPresenter;

/// Prints the absolute path on stdout so shells and editors can pick it up.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutPresenter;

impl DocumentPresenter for StdoutPresenter {
    fn open_and_show(&self, path: &Path) -> Result<(), AppError> {
        println!("{}", path.display());
        Ok(())
    }
}

/// Launches the user's editor and waits for it to exit.
#[derive(Debug, Clone)]
pub struct EditorPresenter {
    command: String,
}

impl EditorPresenter {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }

    /// Use `$VISUAL`, falling back to `$EDITOR`.
    pub fn from_env() -> Result<Self, AppError> {
        ["VISUAL", "EDITOR"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .find(|value| !value.trim().is_empty())
            .map(Self::new)
            .ok_or(AppError::EditorNotConfigured)
    }
}

impl DocumentPresenter for EditorPresenter {
    fn open_and_show(&self, path: &Path) -> Result<(), AppError> {
        // Editors are often configured with flags, e.g. `code --wait`.
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or(AppError::EditorNotConfigured)?;

        info!(editor = %self.command, path = %path.display(), "opening in editor");
        let status = Command::new(program).args(parts).arg(path).status()?;
        if !status.success() {
            return Err(AppError::EditorFailed {
                editor: self.command.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

/// Presenter chosen on the command line (`--open` selects the editor).
#[derive(Debug, Clone)]
pub enum CliPresenter {
    Stdout(StdoutPresenter),
    Editor(EditorPresenter),
}

impl CliPresenter {
    pub fn new(open_in_editor: bool) -> Result<Self, AppError> {
        if open_in_editor {
            Ok(Self::Editor(EditorPresenter::from_env()?))
        } else {
            Ok(Self::Stdout(StdoutPresenter))
        }
    }
}

impl DocumentPresenter for CliPresenter {
    fn open_and_show(&self, path: &Path) -> Result<(), AppError> {
        match self {
            CliPresenter::Stdout(presenter) => presenter.open_and_show(path),
            CliPresenter::Editor(presenter) => presenter.open_and_show(path),
        }
    }
}
