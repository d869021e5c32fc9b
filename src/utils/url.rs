pub use url::Url;

/// URL schemes an image has to use for its size to be probed
pub const HTTP_SCHEMES: &[&str] = &["http", "https"];

/// Checks whether the given value is an absolute HTTP(S) URL
///
/// Scheme matching happens on the parsed URL, so `HTTP://example.com` counts
/// as `http` the same way the URL parser lowercases it.
pub fn is_absolute_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(parsed_url) => is_http_url(&parsed_url),
        Err(_) => false,
    }
}

/// Checks whether an already parsed URL uses one of the HTTP schemes
pub fn is_http_url(url: &Url) -> bool {
    HTTP_SCHEMES.contains(&url.scheme())
}

/// Derives `scheme://hostname` from a document URL
///
/// Path, query, fragment and port are dropped. Returns `None` for non-HTTP
/// URLs and for URLs without a hostname.
pub fn derive_base_url(document_url: &Url) -> Option<Url> {
    if !is_http_url(document_url) {
        return None;
    }

    let hostname = document_url.host_str().filter(|host| !host.is_empty())?;
    Url::parse(&format!("{}://{}", document_url.scheme(), hostname)).ok()
}

/// Resolves `to` against `from`
///
/// Absolute references are returned as parsed, relative ones are joined.
pub fn resolve_url(from: &Url, to: &str) -> Option<Url> {
    match Url::parse(to) {
        Ok(parsed_url) => Some(parsed_url),
        Err(_) => from.join(to).ok(),
    }
}

/// Returns the text following the last `/` of a URL
pub fn get_filename(url: &str) -> String {
    url.rsplit('/').next().unwrap_or_default().to_string()
}
