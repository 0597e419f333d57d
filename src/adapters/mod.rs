//! Concrete host collaborators for the command-line tool.

mod cli_active_file;
mod confirmation;
mod local_filesystem;
mod presenter;

pub use cli_active_file::{CliActiveFile, PROJECT_MARKERS};
pub use confirmation::{CliConfirmation, CreateMode};
pub use local_filesystem::LocalFilesystem;
pub use presenter::{CliPresenter, EditorPresenter, StdoutPresenter};
