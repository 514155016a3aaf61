use url::Url;

const RECOGNIZED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Trim user input and make sure it carries an http(s) scheme.
///
/// Returns `None` when nothing but whitespace was entered.
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if RECOGNIZED_SCHEMES
        .iter()
        .any(|scheme| trimmed.starts_with(scheme))
    {
        Some(trimmed.to_string())
    } else {
        Some(format!("http://{}", trimmed))
    }
}

/// Build the shortening request URL for an already normalized link.
///
/// The link travels as the percent-encoded `url` query parameter, so reserved
/// characters such as `&` or `#` reach the service intact.
pub fn build_endpoint(api_base: &str, normalized: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(api_base, &[("url", normalized)])
}
