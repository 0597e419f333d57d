use std::path::Path;

use crate::domain::AppError;

/// Port for showing a file to the user.
pub trait DocumentPresenter {
    fn open_and_show(&self, path: &Path) -> Result<(), AppError>;
}
