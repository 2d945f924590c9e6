/// TVmaze show search provider
///
/// Uses the public `/search/shows` endpoint, which needs no API key. The
/// redis-backed search cache is consulted before any HTTP call so repeated
/// keystrokes for the same fragment do not re-hit the API.
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::Show,
    services::providers::ShowProvider,
    store::{SearchCache, StoreKey},
};

const SEARCH_CACHE_TTL: u64 = 3600; // 1 hour

pub struct TvMazeProvider {
    http_client: HttpClient,
    api_url: String,
    cache: SearchCache,
}

/// One entry of the TVmaze search response: a relevance score plus the show
#[derive(Debug, Deserialize)]
struct TvMazeSearchResult {
    show: TvMazeShow,
}

#[derive(Debug, Deserialize)]
struct TvMazeShow {
    id: u64,
    name: String,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl From<TvMazeShow> for Show {
    fn from(raw: TvMazeShow) -> Self {
        Show {
            id: raw.id.to_string(),
            name: raw.name,
            metadata: raw.rest,
        }
    }
}

impl TvMazeProvider {
    pub fn new(cache: SearchCache, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            cache,
        }
    }

    async fn call_api(&self, query: &str) -> AppResult<Vec<Show>> {
        let url = format!("{}/search/shows", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TVmaze returned status {}: {}",
                status, body
            )));
        }

        let results: Vec<TvMazeSearchResult> = response.json().await?;

        Ok(results.into_iter().map(|r| Show::from(r.show)).collect())
    }
}

#[async_trait::async_trait]
impl ShowProvider for TvMazeProvider {
    async fn search_shows(&self, query: &str, limit: usize) -> AppResult<Vec<Show>> {
        let key = StoreKey::ShowSearch {
            query: query.to_string(),
            limit,
        };

        if let Some(cached) = self.cache.get::<Vec<Show>>(&key).await? {
            tracing::debug!(query, "Search cache hit");
            return Ok(cached);
        }

        let mut shows = self.call_api(query).await?;
        shows.truncate(limit);

        tracing::debug!(query, results = shows.len(), "Fetched shows from TVmaze");
        self.cache.set_in_background(&key, &shows, SEARCH_CACHE_TTL);

        Ok(shows)
    }

    fn name(&self) -> &'static str {
        "tvmaze"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_payload_maps_to_shows() {
        let payload = r#"[
            {"score": 0.91, "show": {"id": 169, "name": "Breaking Bad", "language": "English"}},
            {"score": 0.62, "show": {"id": 618, "name": "Better Call Saul"}}
        ]"#;

        let results: Vec<TvMazeSearchResult> = serde_json::from_str(payload).unwrap();
        let shows: Vec<Show> = results.into_iter().map(|r| Show::from(r.show)).collect();

        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].id, "169");
        assert_eq!(shows[0].name, "Breaking Bad");
        assert_eq!(shows[0].metadata.get("language").unwrap(), "English");
        assert_eq!(shows[1].id, "618");
        assert!(shows[1].metadata.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_preserved_as_metadata() {
        let payload = r#"{"id": 82, "name": "Game of Thrones", "premiered": "2011-04-17", "rating": {"average": 9.0}}"#;
        let raw: TvMazeShow = serde_json::from_str(payload).unwrap();
        let show = Show::from(raw);

        assert_eq!(show.metadata.get("premiered").unwrap(), "2011-04-17");
        assert_eq!(show.metadata.get("rating").unwrap()["average"], 9.0);
    }
}
