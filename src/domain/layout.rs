//! Project layout conventions recognized by the mapper.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// File name of the optional per-project override, read from the project root.
pub const LAYOUT_CONFIG_FILE: &str = ".spec-switch.toml";

/// Top-level shape of `.spec-switch.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.layout.validate()
    }
}

/// Recognized folder names, spec marker and code extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Test folder names in priority order.
    #[serde(default = "default_test_folder_names")]
    pub test_folder_names: Vec<String>,
    /// Name of the implementation source folder.
    #[serde(default = "default_source_folder_name")]
    pub source_folder_name: String,
    /// Marker placed between a test file's stem and its extension.
    #[serde(default = "default_spec_marker")]
    pub spec_marker: String,
    /// Interchangeable code extensions, most preferred first.
    #[serde(default = "default_code_extensions")]
    pub code_extensions: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            test_folder_names: default_test_folder_names(),
            source_folder_name: default_source_folder_name(),
            spec_marker: default_spec_marker(),
            code_extensions: default_code_extensions(),
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.test_folder_names.is_empty() {
            return Err(AppError::InvalidConfig(
                "test_folder_names must list at least one folder".to_string(),
            ));
        }
        for name in &self.test_folder_names {
            validate_folder_name("test_folder_names", name)?;
        }
        reject_duplicates("test_folder_names", &self.test_folder_names)?;
        validate_folder_name("source_folder_name", &self.source_folder_name)?;

        validate_dotted("spec_marker", &self.spec_marker)?;
        if self.code_extensions.is_empty() {
            return Err(AppError::InvalidConfig(
                "code_extensions must list at least one extension".to_string(),
            ));
        }
        for ext in &self.code_extensions {
            validate_dotted("code_extensions", ext)?;
        }
        reject_duplicates("code_extensions", &self.code_extensions)?;
        Ok(())
    }

    /// Pairs each code extension with its full test-file suffix, e.g. `.spec.ts`.
    pub fn spec_suffixes(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.code_extensions
            .iter()
            .map(|ext| (ext.as_str(), format!("{}{}", self.spec_marker, ext)))
    }

    /// Extensions to try for a counterpart of a file with `extension`:
    /// the same extension first, then the alternates in configured order.
    pub fn extension_candidates<'a>(&'a self, extension: &'a str) -> impl Iterator<Item = &'a str> {
        std::iter::once(extension)
            .chain(self.code_extensions.iter().map(String::as_str).filter(move |e| *e != extension))
    }
}

fn validate_folder_name(field: &str, name: &str) -> Result<(), AppError> {
    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || name.contains(['/', '\\']) {
        return Err(AppError::InvalidConfig(format!(
            "{} entry '{}' must be a single folder name",
            field, name
        )));
    }
    Ok(())
}

fn reject_duplicates(field: &str, values: &[String]) -> Result<(), AppError> {
    for (index, value) in values.iter().enumerate() {
        if values[..index].contains(value) {
            return Err(AppError::InvalidConfig(format!(
                "{} lists '{}' more than once",
                field, value
            )));
        }
    }
    Ok(())
}

fn validate_dotted(field: &str, value: &str) -> Result<(), AppError> {
    if value.len() < 2 || !value.starts_with('.') || value.contains(['/', '\\']) {
        return Err(AppError::InvalidConfig(format!(
            "{} entry '{}' must start with '.' and contain no separators",
            field, value
        )));
    }
    Ok(())
}

fn default_test_folder_names() -> Vec<String> {
    vec!["tests".to_string(), "test".to_string()]
}

fn default_source_folder_name() -> String {
    "src".to_string()
}

fn default_spec_marker() -> String {
    ".spec".to_string()
}

fn default_code_extensions() -> Vec<String> {
    vec![".ts".to_string(), ".js".to_string()]
}
