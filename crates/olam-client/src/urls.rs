use olam_types::Language;

use crate::{TransportError, Url};

/// `{base}/{from}/{to}/{text}` with the text encoded as one path segment
fn lookup_url(base: &str, from: Language, to: Language, text: &str) -> Result<Url, TransportError> {
    let mut url = Url::parse(base)
        .map_err(|e| TransportError::InvalidRequest(format!("bad base url {base}: {e}")))?;

    url.path_segments_mut()
        .map_err(|_| TransportError::InvalidRequest(format!("base url cannot have a path: {base}")))?
        .pop_if_empty()
        .extend([from.as_str(), to.as_str(), text]);

    Ok(url)
}

/// JSON lookup endpoint
pub fn api_url(base: &str, from: Language, to: Language, text: &str) -> Result<Url, TransportError> {
    lookup_url(base, from, to, text)
}

/// "View full details" page
pub fn dictionary_url(
    base: &str,
    from: Language,
    to: Language,
    text: &str,
) -> Result<Url, TransportError> {
    lookup_url(base, from, to, text)
}
