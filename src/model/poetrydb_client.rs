//! PoetryDB line-search client (text works)

use std::time::Duration;

use crate::error::ProviderError;
use super::content::Poem;

const POETRYDB_BASE_URL: &str = "https://poetrydb.org";
const USER_AGENT: &str = "muse-rs/0.1.0";
/// The endpoint has no limit parameter, so results are truncated
/// client-side
const RESULT_LIMIT: usize = 5;

/// Client for the poem line-search endpoint.
#[derive(Clone)]
pub struct PoetryDbClient {
    http: reqwest::Client,
}

impl PoetryDbClient {
    pub fn new() -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http })
    }

    /// Search poems whose lines contain the term, truncated to at most
    /// five entries.
    pub async fn search_poems(&self, search_term: &str) -> Result<Vec<Poem>, ProviderError> {
        let url = search_url(search_term)?;

        tracing::debug!(search_term, url = %url, "Querying poem search");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let poems = decode_poems(&body)?;

        tracing::info!(search_term, count = poems.len(), "Poem search completed");
        Ok(poems)
    }
}

fn search_url(search_term: &str) -> Result<reqwest::Url, ProviderError> {
    reqwest::Url::parse(&format!("{}/lines/{}", POETRYDB_BASE_URL, search_term))
        .map_err(|e| ProviderError::InvalidUrl(e.to_string()))
}

/// Decode the response array and apply the client-side cap.
fn decode_poems(body: &str) -> Result<Vec<Poem>, ProviderError> {
    let mut poems: Vec<Poem> =
        serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))?;
    poems.truncate(RESULT_LIMIT);
    Ok(poems)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_poem(title: &str) -> String {
        format!(
            r#"{{ "title": "{}", "author": "Emily Dickinson", "lines": ["line one", "line two"], "linecount": "2" }}"#,
            title
        )
    }

    #[test]
    fn client_creation() {
        assert!(PoetryDbClient::new().is_ok());
    }

    #[test]
    fn search_url_keys_the_lines_endpoint_by_term() {
        let url = search_url("sorrow").unwrap();
        assert_eq!(url.as_str(), "https://poetrydb.org/lines/sorrow");
    }

    #[test]
    fn decode_parses_the_response_array() {
        let body = format!("[{}, {}]", sample_poem("One"), sample_poem("Two"));
        let poems = decode_poems(&body).unwrap();
        assert_eq!(poems.len(), 2);
        assert_eq!(poems[0].title, "One");
        assert_eq!(poems[0].author, "Emily Dickinson");
        assert_eq!(poems[0].lines.len(), 2);
    }

    #[test]
    fn decode_truncates_to_five_entries() {
        let entries: Vec<String> = (0..8).map(|i| sample_poem(&format!("P{}", i))).collect();
        let body = format!("[{}]", entries.join(", "));
        let poems = decode_poems(&body).unwrap();
        assert_eq!(poems.len(), 5);
        assert_eq!(poems[4].title, "P4");
    }

    #[test]
    fn decode_rejects_the_not_found_object() {
        // PoetryDB answers misses with an object, not an array
        let result = decode_poems(r#"{ "status": 404, "reason": "Not found" }"#);
        assert!(matches!(result, Err(ProviderError::Decode(_))));
    }
}
