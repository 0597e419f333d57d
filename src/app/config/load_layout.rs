//! Layout configuration loading from the project root.

use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, LAYOUT_CONFIG_FILE, LayoutConfig, ProjectConfig};
use crate::ports::{FileReader, FilesystemProbe};

/// Load the layout for `root`, falling back to the built-in conventions
/// when `.spec-switch.toml` is absent.
pub fn load_layout<F>(files: &F, root: &Path) -> Result<LayoutConfig, AppError>
where
    F: FileReader + FilesystemProbe + ?Sized,
{
    let config_path = root.join(LAYOUT_CONFIG_FILE);
    if !files.exists(&config_path) {
        debug!(root = %root.display(), "no layout config, using defaults");
        return Ok(LayoutConfig::default());
    }

    let content = files.read_to_string(&config_path)?;
    let config = parse_config_content(&content).map_err(|err| match err {
        AppError::TomlParseError(parse) => AppError::config_error(format!(
            "Failed to parse {}: {}",
            config_path.display(),
            parse
        )),
        other => other,
    })?;
    debug!(path = %config_path.display(), "loaded layout config");
    Ok(config.layout)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ProjectConfig, AppError> {
    let config: ProjectConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
