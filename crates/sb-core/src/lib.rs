//! Shared primitives used across scheme-builder crates.

use core::fmt;

/// Result alias used across the workspace.
pub type SchemeResult<T> = Result<T, SchemeError>;

/// Workspace error carrying a namespaced code and a human readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeError {
    pub code: &'static str,
    pub message: String,
}

impl SchemeError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Returns true if the error was raised under the given code namespace
    /// (`"uri"` matches `uri.parse.invalid`).
    pub fn is_in(&self, namespace: &str) -> bool {
        self.code
            .strip_prefix(namespace)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
    }
}

impl fmt::Display for SchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for SchemeError {}

#[cfg(test)]
mod tests {
    use super::SchemeError;

    #[test]
    fn displays_code_and_message() {
        let error = SchemeError::new("uri.parse.invalid", "relative URL without a base");
        assert_eq!(error.to_string(), "uri.parse.invalid: relative URL without a base");
    }

    #[test]
    fn namespace_match_respects_segment_boundaries() {
        let error = SchemeError::new("editor.param.out_of_range", "index 3, len 1");
        assert!(error.is_in("editor"));
        assert!(error.is_in("editor.param"));
        assert!(!error.is_in("edit"));
        assert!(!error.is_in("uri"));
    }
}
