use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{FileCreator, FileReader, FilesystemProbe};

/// `std::fs` backed probe, reader and creator.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl FilesystemProbe for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

impl FileReader for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(path)?)
    }
}

impl FileCreator for LocalFilesystem {
    fn create(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => {
                debug!(path = %path.display(), "created empty file");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
