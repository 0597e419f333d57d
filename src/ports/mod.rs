//! Host collaborators the orchestrator depends on.

mod active_file;
mod document_presenter;
mod file_creator;
mod file_reader;
mod filesystem_probe;
mod user_confirmation;

pub use active_file::{ActiveFile, ActiveFileProvider};
pub use document_presenter::DocumentPresenter;
pub use file_creator::FileCreator;
pub use file_reader::FileReader;
pub use filesystem_probe::FilesystemProbe;
pub use user_confirmation::UserConfirmation;
