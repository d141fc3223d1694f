//! Startup configuration for the editor state.

use sb_uri::DEFAULT_URI;

/// Inputs used once when the editor state is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub initial_uri: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_uri: DEFAULT_URI.to_owned(),
        }
    }
}

impl EditorConfig {
    pub fn with_initial_uri(initial_uri: impl Into<String>) -> Self {
        Self {
            initial_uri: initial_uri.into(),
        }
    }
}
