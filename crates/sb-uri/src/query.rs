//! Query string building and URI recomposition.

use crate::parser::Param;
use url::form_urlencoded;

/// Form-encodes the complete parameters in order, joined with `&`.
///
/// Parameters with an empty key or an empty value are skipped. Returns an
/// empty string when nothing qualifies.
pub fn build_query(params: &[Param]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for param in params.iter().filter(|param| param.is_complete()) {
        serializer.append_pair(&param.key, &param.value);
    }
    serializer.finish()
}

/// `base`, followed by `?` and the built query when it is non-empty.
pub fn compose_uri(base: &str, params: &[Param]) -> String {
    let query = build_query(params);
    if query.is_empty() {
        base.to_owned()
    } else {
        format!("{base}?{query}")
    }
}
