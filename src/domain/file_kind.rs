//! Test/source classification of an active file.

use std::path::Path;

use serde::Serialize;

use crate::domain::LayoutConfig;

/// Which side of the src/test split a file sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Test,
    Source,
}

/// A recognized file name split into stem and code extension.
///
/// For `foo.spec.ts` the stem is `foo`; for `foo.ts` it is also `foo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedFile {
    pub role: FileRole,
    pub stem: String,
    pub extension: String,
}

impl ClassifiedFile {
    /// File name of the counterpart carrying `extension`.
    pub fn counterpart_name(&self, extension: &str, layout: &LayoutConfig) -> String {
        match self.role {
            FileRole::Test => format!("{}{}", self.stem, extension),
            FileRole::Source => format!("{}{}{}", self.stem, layout.spec_marker, extension),
        }
    }
}

/// Classify `path` by its file name.
///
/// Spec suffixes are checked before plain extensions. Unrecognized
/// extensions, non UTF-8 names and names with an empty stem yield `None`.
pub fn classify(path: &Path, layout: &LayoutConfig) -> Option<ClassifiedFile> {
    let name = path.file_name()?.to_str()?;

    for (extension, suffix) in layout.spec_suffixes() {
        if let Some(stem) = name.strip_suffix(suffix.as_str()) {
            return non_empty(stem).map(|stem| ClassifiedFile {
                role: FileRole::Test,
                stem: stem.to_string(),
                extension: extension.to_string(),
            });
        }
    }

    layout.code_extensions.iter().find_map(|extension| {
        let stem = non_empty(name.strip_suffix(extension.as_str())?)?;
        Some(ClassifiedFile {
            role: FileRole::Source,
            stem: stem.to_string(),
            extension: extension.clone(),
        })
    })
}

fn non_empty(stem: &str) -> Option<&str> {
    if stem.is_empty() { None } else { Some(stem) }
}
