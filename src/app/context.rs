use crate::ports::{
    ActiveFileProvider, DocumentPresenter, FileCreator, FileReader, FilesystemProbe,
    UserConfirmation,
};

/// Application context holding the host collaborators for command execution.
pub struct AppContext<A, F, C, D>
where
    A: ActiveFileProvider,
    F: FilesystemProbe + FileReader + FileCreator,
    C: UserConfirmation,
    D: DocumentPresenter,
{
    active_file: A,
    files: F,
    confirmation: C,
    presenter: D,
}

impl<A, F, C, D> AppContext<A, F, C, D>
where
    A: ActiveFileProvider,
    F: FilesystemProbe + FileReader + FileCreator,
    C: UserConfirmation,
    D: DocumentPresenter,
{
    /// Create a new application context.
    pub fn new(active_file: A, files: F, confirmation: C, presenter: D) -> Self {
        Self { active_file, files, confirmation, presenter }
    }

    /// Get a reference to the active file provider.
    pub fn active_file(&self) -> &A {
        &self.active_file
    }

    /// Get a reference to the filesystem.
    pub fn files(&self) -> &F {
        &self.files
    }

    /// Get a reference to the creation prompt.
    pub fn confirmation(&self) -> &C {
        &self.confirmation
    }

    /// Get a reference to the document presenter.
    pub fn presenter(&self) -> &D {
        &self.presenter
    }
}
