//! URI contracts: parsing into base + parameters, query building, and share links.

pub mod parser;
pub mod query;
pub mod share;

pub use parser::Param;
pub use parser::ParamField;
pub use parser::ParseFailure;
pub use parser::ParsedUri;
pub use parser::base_of;
pub use parser::is_valid_uri;
pub use parser::parse_uri;
pub use query::build_query;
pub use query::compose_uri;
pub use share::share_location;
pub use share::uri_from_location;

/// URI shown when nothing else was supplied at startup.
pub const DEFAULT_URI: &str = "supertoss://main?referrer=test";
