//! Art Institute of Chicago search client (visual works)

use std::time::Duration;

use serde::Deserialize;

use crate::error::ProviderError;
use super::content::Artwork;

const ARTIC_SEARCH_URL: &str = "https://api.artic.edu/api/v1/artworks/search";
const USER_AGENT: &str = "muse-rs/0.1.0";
/// Server-side result cap requested per search
const RESULT_LIMIT: u32 = 5;
/// Only the fields the deck needs
const REQUEST_FIELDS: &str = "id,title,artist_display,image_id";

/// Search response envelope.
#[derive(Debug, Deserialize)]
struct ArtSearchResponse {
    data: Vec<Artwork>,
}

/// Client for the artwork search endpoint.
#[derive(Clone)]
pub struct ArticClient {
    http: reqwest::Client,
}

impl ArticClient {
    pub fn new() -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http })
    }

    /// Search artworks for a term. Records lacking an image reference
    /// are dropped before returning: a card with no renderable image is
    /// not a valid deck entry.
    pub async fn search_artworks(&self, search_term: &str) -> Result<Vec<Artwork>, ProviderError> {
        let url = search_url(search_term)?;

        tracing::debug!(search_term, url = %url, "Querying artwork search");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let artworks = decode_artworks(&body)?;

        tracing::info!(search_term, count = artworks.len(), "Artwork search completed");
        Ok(artworks)
    }
}

fn search_url(search_term: &str) -> Result<reqwest::Url, ProviderError> {
    let limit = RESULT_LIMIT.to_string();
    reqwest::Url::parse_with_params(
        ARTIC_SEARCH_URL,
        [
            ("q", search_term),
            ("limit", limit.as_str()),
            ("fields", REQUEST_FIELDS),
        ],
    )
    .map_err(|e| ProviderError::InvalidUrl(e.to_string()))
}

/// Decode the search envelope and keep only records with an image.
fn decode_artworks(body: &str) -> Result<Vec<Artwork>, ProviderError> {
    let response: ArtSearchResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))?;
    Ok(response
        .data
        .into_iter()
        .filter(|artwork| artwork.image_id.is_some())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "pagination": { "total": 3, "limit": 5 },
        "data": [
            { "id": 1, "title": "Storm at Sea", "artist_display": "Unknown", "image_id": "aaa" },
            { "id": 2, "title": "Untitled", "artist_display": null, "image_id": null },
            { "id": 3, "title": "The Tempest", "artist_display": "G. Romney", "image_id": "ccc" }
        ],
        "info": { "license_text": "..." }
    }"#;

    #[test]
    fn client_creation() {
        assert!(ArticClient::new().is_ok());
    }

    #[test]
    fn search_url_carries_query_limit_and_fields() {
        let url = search_url("storm").unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("q=storm"));
        assert!(query.contains("limit=5"));
        assert!(query.contains("fields=id%2Ctitle%2Cartist_display%2Cimage_id"));
    }

    #[test]
    fn decode_drops_records_without_image_reference() {
        let artworks = decode_artworks(SAMPLE_RESPONSE).unwrap();
        assert_eq!(artworks.len(), 2);
        assert!(artworks.iter().all(|a| a.image_id.is_some()));
        assert_eq!(artworks[0].title, "Storm at Sea");
        assert_eq!(artworks[1].title, "The Tempest");
    }

    #[test]
    fn decode_rejects_unexpected_shape() {
        let result = decode_artworks(r#"{ "status": 404, "reason": "Not found" }"#);
        assert!(matches!(result, Err(ProviderError::Decode(_))));
    }
}
