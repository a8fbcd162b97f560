//! Jackett search backend adapter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::BackendConfig;

use super::{ContentKind, Indexer, RawCandidate, SearchBackend, SearchError};

/// HTTP client for a Jackett server.
pub struct JackettClient {
    client: Client,
    config: BackendConfig,
}

impl JackettClient {
    /// Create a new client with the given configuration.
    pub fn new(config: BackendConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_secs)))
            .build()
            .map_err(|e| SearchError::Internal(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn indexers_url(&self) -> String {
        format!(
            "{}/api/v2.0/indexers?apikey={}&configured=true",
            self.config.url.trim_end_matches('/'),
            urlencoding::encode(&self.config.api_key),
        )
    }

    fn search_url(&self, indexer_id: &str, query: &str, kind: ContentKind) -> String {
        let mut url = format!(
            "{}/api/v2.0/indexers/{}/results?apikey={}&Query={}",
            self.config.url.trim_end_matches('/'),
            urlencoding::encode(indexer_id),
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(query),
        );
        for id in category_ids(kind) {
            url.push_str(&format!("&Category[]={id}"));
        }
        url
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, SearchError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout
            } else if e.is_connect() {
                SearchError::ConnectionFailed(e.to_string())
            } else {
                SearchError::ApiError(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SearchError::ApiError(format!("Failed to parse response: {e}")))
    }
}

#[async_trait]
impl SearchBackend for JackettClient {
    fn name(&self) -> &str {
        "jackett"
    }

    async fn indexers(&self) -> Result<Vec<Indexer>, SearchError> {
        let listed: Vec<JackettIndexer> = self.get_json(&self.indexers_url()).await?;
        debug!(count = listed.len(), "Fetched configured indexers");
        Ok(listed
            .into_iter()
            .enumerate()
            .map(|(priority, ix)| Indexer {
                id: ix.id,
                title: ix.name,
                priority,
            })
            .collect())
    }

    async fn search(
        &self,
        indexer: &Indexer,
        query: &str,
        kind: ContentKind,
    ) -> Result<Vec<RawCandidate>, SearchError> {
        let url = self.search_url(&indexer.id, query, kind);
        debug!(indexer = %indexer.title, query = query, "Searching Jackett");

        let parsed: JackettResponse = self.get_json(&url).await?;
        debug!(
            indexer = %indexer.title,
            results = parsed.Results.len(),
            "Jackett search complete"
        );

        Ok(map_results(indexer, parsed.Results))
    }
}

/// Map a content kind to Jackett (Torznab) category IDs.
fn category_ids(kind: ContentKind) -> &'static [u32] {
    match kind {
        ContentKind::Movie => &[2000],
        ContentKind::Tv => &[5000],
    }
}

fn map_results(indexer: &Indexer, results: Vec<JackettResult>) -> Vec<RawCandidate> {
    results
        .into_iter()
        .map(|r| RawCandidate {
            guid: r.Guid,
            title: r.Title,
            indexer: indexer.clone(),
            size_bytes: r.Size.unwrap_or(0).max(0) as u64,
            seeders: r.Seeders.unwrap_or(-1),
            peers: r.Peers.unwrap_or(-1),
            link: r.Link,
            magnet_uri: r.MagnetUri,
            publish_date: r.PublishDate.as_deref().and_then(parse_publish_date),
        })
        .collect()
}

/// Parse Jackett's date format: RFC 3339, or a naive timestamp without
/// timezone (assumed UTC).
fn parse_publish_date(date_str: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(date_str)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|ndt| ndt.and_utc())
        })
}

// Jackett API response types
#[derive(Debug, Deserialize)]
struct JackettIndexer {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct JackettResponse {
    Results: Vec<JackettResult>,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct JackettResult {
    Guid: String,
    Title: String,
    MagnetUri: Option<String>,
    Link: Option<String>,
    Size: Option<i64>,
    Seeders: Option<i64>,
    Peers: Option<i64>,
    PublishDate: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn make_client(url: &str) -> JackettClient {
        JackettClient::new(BackendConfig {
            kind: crate::config::BackendKind::Jackett,
            url: url.to_string(),
            api_key: "test-key".to_string(),
            timeout_secs: 30,
        })
        .unwrap()
    }

    fn make_indexer() -> Indexer {
        Indexer {
            id: "rutor".to_string(),
            title: "Rutor".to_string(),
            priority: 0,
        }
    }

    #[test]
    fn test_search_url() {
        let client = make_client("http://localhost:9117");
        let url = client.search_url("test", "silo s02", ContentKind::Tv);

        assert!(url.contains("http://localhost:9117/api/v2.0/indexers/test/results"));
        assert!(url.contains("apikey=test-key"));
        assert!(url.contains("Query=silo%20s02"));
        assert!(url.contains("Category[]=5000"));
    }

    #[test]
    fn test_search_url_movie_category_and_trailing_slash() {
        let client = make_client("http://localhost:9117/");
        let url = client.search_url("test", "matrix 1999", ContentKind::Movie);

        assert!(url.contains("http://localhost:9117/api/v2.0/indexers/test/results"));
        assert!(url.contains("Category[]=2000"));
    }

    #[test]
    fn test_indexers_url() {
        let client = make_client("http://localhost:9117");
        let url = client.indexers_url();
        assert!(url.contains("/api/v2.0/indexers?apikey=test-key&configured=true"));
    }

    #[test]
    fn test_parse_publish_date_rfc3339() {
        let date = parse_publish_date("2024-06-15T10:30:00Z").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_publish_date_with_offset() {
        assert!(parse_publish_date("2024-06-15T10:30:00+02:00").is_some());
    }

    #[test]
    fn test_parse_publish_date_no_timezone() {
        assert!(parse_publish_date("2024-06-15T10:30:00").is_some());
    }

    #[test]
    fn test_parse_publish_date_invalid() {
        assert!(parse_publish_date("yesterday").is_none());
    }

    #[test]
    fn test_map_results_defaults() {
        let json = r#"{
            "Results": [
                {
                    "Guid": "g1",
                    "Title": "Show S02 1080p",
                    "Link": "http://example.org/dl/1"
                },
                {
                    "Guid": "g2",
                    "Title": "Show S02 720p",
                    "MagnetUri": "magnet:?xt=urn:btih:abc",
                    "Size": 734003200,
                    "Seeders": 12,
                    "Peers": 3,
                    "PublishDate": "2024-06-15T10:30:00Z"
                }
            ]
        }"#;
        let parsed: JackettResponse = serde_json::from_str(json).unwrap();
        let mapped = map_results(&make_indexer(), parsed.Results);

        assert_eq!(mapped.len(), 2);
        // Missing counts stay signed-unknown, missing size collapses to 0.
        assert_eq!(mapped[0].seeders, -1);
        assert_eq!(mapped[0].peers, -1);
        assert_eq!(mapped[0].size_bytes, 0);
        assert!(mapped[0].magnet_uri.is_none());

        assert_eq!(mapped[1].seeders, 12);
        assert_eq!(mapped[1].size_bytes, 734_003_200);
        assert!(mapped[1].publish_date.is_some());
        assert_eq!(mapped[1].indexer.title, "Rutor");
    }

    #[test]
    fn test_map_results_keeps_linkless_hits_for_normalizer() {
        // Dropping link-less hits is the normalizer's call, not the wire
        // adapter's.
        let json = r#"{"Results": [{"Guid": "g1", "Title": "Show"}]}"#;
        let parsed: JackettResponse = serde_json::from_str(json).unwrap();
        let mapped = map_results(&make_indexer(), parsed.Results);

        assert_eq!(mapped.len(), 1);
        assert!(mapped[0].link.is_none() && mapped[0].magnet_uri.is_none());
    }
}
