//! Shareable locations that carry a URI in their `uri` query parameter.

use url::form_urlencoded;

pub const LOCATION_URI_PARAM: &str = "uri";

/// Appends the form-encoded `uri` parameter to `prefix`.
pub fn share_location(prefix: &str, uri: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(LOCATION_URI_PARAM, uri)
        .finish();
    let separator = if prefix.contains('?') { '&' } else { '?' };
    format!("{prefix}{separator}{query}")
}

/// Decoded value of the first `uri` parameter in `location`'s query, if any.
pub fn uri_from_location(location: &str) -> Option<String> {
    let (_, query) = location.split_once('?')?;
    let query = query.split_once('#').map_or(query, |(query, _)| query);

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == LOCATION_URI_PARAM)
        .map(|(_, value)| value.into_owned())
}
