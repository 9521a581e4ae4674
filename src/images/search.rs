use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Search API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Anything that can turn a free-text query into an image URL.
pub trait ImageSearch: Send + Sync {
    /// First image URL the search yields, or `None` when it finds nothing.
    fn first_image(&self, query: &str) -> Result<Option<String>, SearchError>;
}

/// Stand-in used when no API credentials are configured.
pub struct DisabledSearch;

impl ImageSearch for DisabledSearch {
    fn first_image(&self, _query: &str) -> Result<Option<String>, SearchError> {
        Ok(None)
    }
}
