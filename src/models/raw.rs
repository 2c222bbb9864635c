//! Raw shapes returned by the video-catalog API.
//!
//! The listing/detail endpoints and the search endpoint describe the same
//! logical items with different id forms (flat string vs. nested object).
//! [`RawItemId`] resolves that divergence once, here, so nothing downstream
//! ever branches on the source endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Paged response envelope shared by every listing endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Opaque continuation token; absent on the final page
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Item id as the source sends it: search responses nest it in an object,
/// listing/detail responses send the bare string.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawItemId {
    Nested {
        #[serde(rename = "videoId")]
        video_id: String,
    },
    Flat(String),
}

impl RawItemId {
    /// The canonical id regardless of source shape
    pub fn as_str(&self) -> &str {
        match self {
            RawItemId::Nested { video_id } => video_id,
            RawItemId::Flat(id) => id,
        }
    }
}

/// A snippet-bearing item from the listing, search, or detail endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalogItem {
    pub id: RawItemId,
    pub snippet: RawSnippet,
    #[serde(default, rename = "contentDetails")]
    pub content_details: Option<RawContentDetails>,
    #[serde(default)]
    pub statistics: Option<RawVideoStatistics>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub channel_id: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub thumbnails: RawThumbnails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawThumbnails {
    #[serde(default)]
    pub default: Option<RawThumbnail>,
    #[serde(default)]
    pub medium: Option<RawThumbnail>,
    #[serde(default)]
    pub high: Option<RawThumbnail>,
}

impl RawThumbnails {
    /// Preferred display thumbnail for a video card
    pub fn display_url(&self) -> Option<&str> {
        self.medium
            .as_ref()
            .or(self.default.as_ref())
            .or(self.high.as_ref())
            .map(|t| t.url.as_str())
    }

    /// Preferred avatar image for channel attribution
    pub fn avatar_url(&self) -> Option<&str> {
        self.default
            .as_ref()
            .or(self.medium.as_ref())
            .or(self.high.as_ref())
            .map(|t| t.url.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawThumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContentDetails {
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
}

/// Statistics/duration batch record (no snippet; flat id only)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVideoRecord {
    pub id: String,
    #[serde(default)]
    pub content_details: Option<RawContentDetails>,
    #[serde(default)]
    pub statistics: Option<RawVideoStatistics>,
}

/// Channel metadata batch record
#[derive(Debug, Clone, Deserialize)]
pub struct RawChannelItem {
    pub id: String,
    pub snippet: RawChannelSnippet,
    #[serde(default)]
    pub statistics: Option<RawChannelStatistics>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawChannelSnippet {
    pub title: String,
    #[serde(default)]
    pub thumbnails: RawThumbnails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChannelStatistics {
    #[serde(default)]
    pub subscriber_count: Option<String>,
}
