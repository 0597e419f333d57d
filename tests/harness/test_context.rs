//! Shared testing harness for `spec-switch` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
pub(crate) struct TestContext {
    _root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated project containing only a `package.json` marker.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        // Canonical so printed paths compare equal on platforms with symlinked temp dirs.
        let work_dir = fs::canonicalize(&work_dir).expect("Failed to canonicalize work directory");
        fs::write(work_dir.join("package.json"), "{}\n").expect("Failed to write package.json");

        Self { _root: root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Absolute path of a project-relative path.
    pub(crate) fn path(&self, rel: &str) -> PathBuf {
        self.work_dir.join(rel)
    }

    /// Build a command for invoking the compiled `spec-switch` binary within the project.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `spec-switch` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd =
            Command::cargo_bin("spec-switch").expect("Failed to locate spec-switch binary");
        cmd.current_dir(dir.as_ref()).env_remove("RUST_LOG");
        cmd
    }

    /// Create empty files (and their parent directories).
    pub(crate) fn touch(&self, files: &[&str]) {
        for file in files {
            self.write_file(file, "");
        }
    }

    /// Create directories.
    pub(crate) fn mkdirs(&self, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(self.path(dir)).expect("Failed to create directory");
        }
    }

    pub(crate) fn write_file(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub(crate) fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("Failed to read file")
    }

    pub(crate) fn assert_file_exists(&self, rel: &str) {
        assert!(self.path(rel).is_file(), "{} should exist", rel);
    }

    pub(crate) fn assert_file_not_exists(&self, rel: &str) {
        assert!(!self.path(rel).exists(), "{} should not exist", rel);
    }

    /// Expected stdout line for an opened project-relative file.
    pub(crate) fn opened_line(&self, rel: &str) -> String {
        format!("{}\n", self.path(rel).display())
    }
}
