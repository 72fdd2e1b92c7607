//! Error types for the deck session engine.

use thiserror::Error;

/// A single content source failed during a fetch.
///
/// Providers never retry internally; retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The endpoint URL could not be constructed from the search term
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure (connect, timeout, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response status outside the success range
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Response body did not decode into the expected shape
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// A deck refresh aborted because one of the two concurrent fetches
/// failed. All-or-nothing: no partial deck is produced even when the
/// other fetch succeeded.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("artwork source failed: {0}")]
    Artworks(#[source] ProviderError),

    #[error("poem source failed: {0}")]
    Poems(#[source] ProviderError),
}

impl RefreshError {
    /// The underlying provider failure, whichever source it came from.
    pub fn provider_error(&self) -> &ProviderError {
        match self {
            RefreshError::Artworks(e) | RefreshError::Poems(e) => e,
        }
    }
}

/// A front-card operation was issued when no front card was available
/// for interaction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("no deck is present")]
    EmptyDeck,

    #[error("a refresh is in progress")]
    RefreshInFlight,
}
