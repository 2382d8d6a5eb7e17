//! Validation of user-submitted URLs.

use url::Url;

use crate::ValidationError;

/// Trim and validate a submitted URL.
///
/// Returns the trimmed string unchanged (not the parser's normalized form) so
/// the stored `url` is what the user typed.
///
/// # Errors
/// `EmptyUrl` for blank input, `InvalidUrl` when it does not parse as an
/// absolute URL, `UnsupportedScheme` for anything but http/https.
pub fn validate_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    let parsed = Url::parse(trimmed).map_err(|e| ValidationError::InvalidUrl {
        url: trimmed.to_owned(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => {},
        other => return Err(ValidationError::UnsupportedScheme(other.to_owned())),
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::InvalidUrl {
            url: trimmed.to_owned(),
            reason: "missing host".to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

/// Hostname of `url`, if it parses and has one.
#[must_use]
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url).ok()?.host_str().map(ToOwned::to_owned)
}
