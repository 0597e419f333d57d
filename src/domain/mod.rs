//! Pure path-resolution logic.

pub mod candidates;
pub mod error;
pub mod file_kind;
pub mod folder_context;
pub mod layout;
pub mod path_mapper;
pub mod paths;

pub use candidates::{PathCandidateSet, Resolution, decide};
pub use error::AppError;
pub use file_kind::{ClassifiedFile, FileRole, classify};
pub use folder_context::{FolderContext, locate};
pub use layout::{LAYOUT_CONFIG_FILE, LayoutConfig, ProjectConfig};
pub use path_mapper::{counterpart_candidates, source_candidates, test_candidates};
