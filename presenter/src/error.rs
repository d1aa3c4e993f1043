use thiserror::Error;

/// Raised by [`render`](crate::render) for the enclosing error boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresenterError {
    #[error("astronaut list unavailable: {0}")]
    Offline(String),
}

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
}
