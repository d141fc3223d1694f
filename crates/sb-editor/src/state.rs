//! Editor state machine.
//!
//! `uri_string` and the structured fields (`uri_base`, `params`) are updated by
//! different rules. Structured edits that change a value recompose
//! `uri_string`; writing a value that is already held changes nothing. A direct
//! edit of `uri_string` is stored verbatim and only overwrites the structured
//! fields when it parses, so an invalid string leaves them at their last valid
//! value.

use crate::config::EditorConfig;
use sb_core::SchemeError;
use sb_core::SchemeResult;
use sb_uri::Param;
use sb_uri::ParamField;
use sb_uri::ParsedUri;
use std::sync::Arc;
use tracing::debug;
use tracing::trace;

/// Whether a URI string parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    pub fn of(uri: &str) -> Self {
        if sb_uri::is_valid_uri(uri) {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Relationship between `uri_string` and the structured fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncMode {
    /// All three fields describe the same URI.
    Synced,
    /// `uri_string` was typed by hand and does not parse; base and params are stale.
    Divergent,
}

/// Canonical editable state for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    uri_string: String,
    uri_base: String,
    params: Arc<Vec<Param>>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl EditorState {
    /// Starts from `initial` as if it had been typed into the URI field.
    pub fn new(initial: impl Into<String>) -> Self {
        let mut state = Self {
            uri_string: String::new(),
            uri_base: String::new(),
            params: Arc::new(Vec::new()),
        };
        state.edit_uri_string(initial);
        state
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.initial_uri.clone())
    }

    pub fn uri_string(&self) -> &str {
        &self.uri_string
    }

    pub fn uri_base(&self) -> &str {
        &self.uri_base
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Shared handle to the current parameter list. Later edits never show
    /// through a snapshot that is still held.
    pub fn params_snapshot(&self) -> Arc<Vec<Param>> {
        Arc::clone(&self.params)
    }

    /// Recomputed from the current `uri_string` on every call.
    pub fn validity(&self) -> Validity {
        Validity::of(&self.uri_string)
    }

    pub fn sync_mode(&self) -> SyncMode {
        if self.validity().is_valid() {
            SyncMode::Synced
        } else {
            SyncMode::Divergent
        }
    }

    /// Stores `text` as typed. Base and params follow only when it parses.
    pub fn edit_uri_string(&mut self, text: impl Into<String>) -> Validity {
        self.uri_string = text.into();

        match sb_uri::parse_uri(&self.uri_string) {
            Ok(ParsedUri { base, params }) => {
                debug!(base = %base, params = params.len(), "uri string parsed");
                self.uri_base = base;
                self.params = Arc::new(params);
                Validity::Valid
            }
            Err(failure) => {
                debug!(reason = %failure.reason(), "uri string diverged from structured fields");
                Validity::Invalid
            }
        }
    }

    /// Writing the base it already holds is a no-op and keeps `uri_string` as is.
    pub fn edit_base(&mut self, base: impl Into<String>) {
        let base = base.into();
        if self.uri_base == base {
            return;
        }

        self.uri_base = base;
        debug!(base = %self.uri_base, "base edited");
        self.recompose();
    }

    pub fn edit_param(
        &mut self,
        index: usize,
        field: ParamField,
        text: impl Into<String>,
    ) -> SchemeResult<()> {
        self.check_index(index)?;

        let text = text.into();
        if self.params.get(index).is_some_and(|param| param.get(field) == text) {
            return Ok(());
        }

        let params = Arc::make_mut(&mut self.params);
        if let Some(param) = params.get_mut(index) {
            param.set(field, text);
        }
        debug!(index, field = field.as_str(), "param edited");
        self.recompose();
        Ok(())
    }

    pub fn add_param(&mut self) {
        Arc::make_mut(&mut self.params).push(Param::blank());
        debug!(len = self.params.len(), "param added");
        self.recompose();
    }

    /// Removes the parameter at `index`, shifting later entries down.
    pub fn remove_param(&mut self, index: usize) -> SchemeResult<Param> {
        self.check_index(index)?;

        let removed = Arc::make_mut(&mut self.params).remove(index);
        debug!(index, len = self.params.len(), "param removed");
        self.recompose();
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> SchemeResult<()> {
        if index < self.params.len() {
            return Ok(());
        }

        Err(SchemeError::new(
            "editor.param.out_of_range",
            format!(
                "parameter index {index} is out of range for {} parameters",
                self.params.len()
            ),
        ))
    }

    fn recompose(&mut self) {
        self.uri_string = sb_uri::compose_uri(&self.uri_base, &self.params);
        trace!(uri = %self.uri_string, "recomposed");
    }
}
