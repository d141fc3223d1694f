//! URI parsing into a verbatim base and ordered query parameters.

use core::fmt;
use sb_core::SchemeError;
use url::Url;

/// One query parameter. Identity is its position in the owning list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Param {
    pub key: String,
    pub value: String,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A parameter with an empty key and value, as appended by the editor.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Only parameters with a non-empty key and a non-empty value reach the query string.
    /// Whitespace counts as content.
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }

    pub fn get(&self, field: ParamField) -> &str {
        match field {
            ParamField::Key => &self.key,
            ParamField::Value => &self.value,
        }
    }

    pub fn set(&mut self, field: ParamField, text: impl Into<String>) {
        match field {
            ParamField::Key => self.key = text.into(),
            ParamField::Value => self.value = text.into(),
        }
    }
}

/// Editable half of a [`Param`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    Key,
    Value,
}

impl ParamField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Value => "value",
        }
    }
}

/// Decomposed view of a URI string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUri {
    pub base: String,
    pub params: Vec<Param>,
}

/// Input that is not a well-formed absolute URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    input: String,
    reason: url::ParseError,
}

impl ParseFailure {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> url::ParseError {
        self.reason
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI `{}`: {}", self.input, self.reason)
    }
}

impl std::error::Error for ParseFailure {}

impl From<ParseFailure> for SchemeError {
    fn from(failure: ParseFailure) -> Self {
        SchemeError::new("uri.parse.invalid", failure.to_string())
    }
}

/// Parses `input` as an absolute URI with any scheme.
///
/// The base is `input` up to the first `?`, kept byte for byte rather than
/// re-serialized. Parameters are form-decoded in query order with repeated
/// keys kept.
pub fn parse_uri(input: &str) -> Result<ParsedUri, ParseFailure> {
    let parsed = Url::parse(input).map_err(|reason| ParseFailure {
        input: input.to_owned(),
        reason,
    })?;

    let params = parsed
        .query_pairs()
        .map(|(key, value)| Param::new(key, value))
        .collect();

    Ok(ParsedUri {
        base: base_of(input).to_owned(),
        params,
    })
}

/// Everything before the first `?` of `input`.
pub fn base_of(input: &str) -> &str {
    input.split_once('?').map_or(input, |(base, _)| base)
}

pub fn is_valid_uri(input: &str) -> bool {
    Url::parse(input).is_ok()
}
