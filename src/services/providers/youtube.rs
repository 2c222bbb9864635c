/// YouTube Data API v3 provider
///
/// Implements [`CatalogProvider`] against the hosted Data API. The API key is
/// passed as a query parameter on every request; counts and durations come
/// back as strings inside `statistics`/`contentDetails`.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::raw::{PagedResponse, RawCatalogItem, RawChannelItem, RawVideoRecord},
    services::providers::CatalogProvider,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// The transport default is no timeout at all; cap requests explicitly.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct DataApiProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    region: String,
    page_size: u32,
}

/// Error envelope the Data API wraps non-success responses in
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: UpstreamErrorDetail,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: String,
}

impl DataApiProvider {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http_client,
            api_key: config.youtube_api_key.clone(),
            api_url: config.youtube_api_url.clone(),
            region: config.region.clone(),
            page_size: config.page_size,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}/{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_upstream(status.as_u16(), &body));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(error = %e, endpoint = %path, "Failed to deserialize catalog response");
            AppError::Shape(e.to_string())
        })
    }
}

/// Builds the Upstream error for a non-success response, surfacing the
/// message from the API's error envelope (quota exceeded, bad key) when it
/// parses and the raw body otherwise.
fn classify_upstream(status: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<UpstreamErrorBody>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());

    AppError::Upstream { status, message }
}

#[async_trait::async_trait]
impl CatalogProvider for DataApiProvider {
    async fn list_popular(
        &self,
        page_token: Option<String>,
    ) -> AppResult<PagedResponse<RawCatalogItem>> {
        let page_size = self.page_size.to_string();
        let mut query = vec![
            ("part", "snippet,contentDetails,statistics"),
            ("chart", "mostPopular"),
            ("regionCode", self.region.as_str()),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = page_token.as_deref() {
            query.push(("pageToken", token));
        }

        let page = self.get_json("videos", &query).await?;
        tracing::debug!(provider = "youtube", "Popular listing fetched");
        Ok(page)
    }

    async fn search_videos(
        &self,
        query_text: &str,
        page_token: Option<String>,
    ) -> AppResult<PagedResponse<RawCatalogItem>> {
        if query_text.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let page_size = self.page_size.to_string();
        let mut query = vec![
            ("part", "snippet"),
            ("type", "video"),
            ("q", query_text),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = page_token.as_deref() {
            query.push(("pageToken", token));
        }

        let page: PagedResponse<RawCatalogItem> = self.get_json("search", &query).await?;
        tracing::info!(
            query = %query_text,
            results = page.items.len(),
            provider = "youtube",
            "Video search completed"
        );
        Ok(page)
    }

    async fn list_channel_videos(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> AppResult<PagedResponse<RawCatalogItem>> {
        let limit = limit.to_string();
        let query = [
            ("part", "snippet"),
            ("type", "video"),
            ("channelId", channel_id),
            ("maxResults", limit.as_str()),
        ];

        self.get_json("search", &query).await
    }

    async fn videos_by_ids(&self, ids: &[String]) -> AppResult<Vec<RawVideoRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids.join(",");
        let query = [
            ("part", "contentDetails,statistics"),
            ("id", joined.as_str()),
        ];

        let page: PagedResponse<RawVideoRecord> = self.get_json("videos", &query).await?;
        Ok(page.items)
    }

    async fn channels_by_ids(&self, ids: &[String]) -> AppResult<Vec<RawChannelItem>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids.join(",");
        let query = [("part", "snippet,statistics"), ("id", joined.as_str())];

        let page: PagedResponse<RawChannelItem> = self.get_json("channels", &query).await?;
        Ok(page.items)
    }

    async fn fetch_video(&self, id: &str) -> AppResult<Option<RawCatalogItem>> {
        let query = [("part", "snippet,contentDetails,statistics"), ("id", id)];

        let page: PagedResponse<RawCatalogItem> = self.get_json("videos", &query).await?;
        Ok(page.items.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_classification_surfaces_envelope_message() {
        let body = r#"{
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{ "reason": "quotaExceeded", "message": "quota" }]
            }
        }"#;

        let err = classify_upstream(403, body);
        match err {
            AppError::Upstream { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("exceeded your quota"));
            }
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[test]
    fn upstream_classification_falls_back_to_raw_body() {
        let err = classify_upstream(502, "<html>bad gateway</html>");
        match err {
            AppError::Upstream { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "<html>bad gateway</html>");
            }
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[test]
    fn paged_listing_deserializes_into_catalog_items() {
        let json = r#"{
            "items": [{
                "id": "v1",
                "snippet": {
                    "title": "Popular video",
                    "channelId": "UC1",
                    "channelTitle": "Channel",
                    "publishedAt": "2024-05-01T12:00:00Z"
                },
                "contentDetails": { "duration": "PT4M13S" },
                "statistics": { "viewCount": "100" }
            }],
            "nextPageToken": "T1"
        }"#;

        let page: PagedResponse<RawCatalogItem> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id.as_str(), "v1");
        assert_eq!(page.next_page_token.as_deref(), Some("T1"));
    }
}
