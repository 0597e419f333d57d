//! Project-backed configuration loading.
//!
//! Pure schema parsing and validation lives in `domain::layout`.

mod load_layout;

pub use load_layout::{load_layout, parse_config_content};
