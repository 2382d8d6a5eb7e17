use thiserror::Error;

/// Malformed caller input. Terminal: surfaced to the caller with its message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("URL is required")]
    EmptyUrl,

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("too many tags: {got} (max {max})")]
    TooManyTags { got: usize, max: usize },

    #[error("invalid bookmarks data: {0}")]
    InvalidOrder(String),

    #[error("duplicate bookmark id in order: {0}")]
    DuplicateId(String),
}
