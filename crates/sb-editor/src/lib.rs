//! Editable URI state kept in sync between a flat string and base + parameters.

pub mod config;
pub mod state;

pub use config::EditorConfig;
pub use sb_uri::Param;
pub use sb_uri::ParamField;
pub use state::EditorState;
pub use state::SyncMode;
pub use state::Validity;
