//! Shared fixtures for unit tests.

use crate::models::raw::{
    RawCatalogItem, RawChannelItem, RawChannelSnippet, RawChannelStatistics, RawContentDetails,
    RawItemId, RawSnippet, RawThumbnail, RawThumbnails, RawVideoRecord, RawVideoStatistics,
};
use chrono::{Duration, Utc};

fn snippet(channel_id: &str) -> RawSnippet {
    RawSnippet {
        title: format!("Video by {}", channel_id),
        description: "a test video".to_string(),
        channel_id: channel_id.to_string(),
        channel_title: format!("Channel {}", channel_id),
        published_at: Utc::now() - Duration::days(3),
        thumbnails: RawThumbnails {
            default: None,
            medium: Some(RawThumbnail {
                url: "https://img.example/thumb.jpg".to_string(),
            }),
            high: None,
        },
    }
}

/// Search-endpoint item: nested id object, snippet only.
pub fn search_item(id: &str, channel_id: &str) -> RawCatalogItem {
    RawCatalogItem {
        id: RawItemId::Nested {
            video_id: id.to_string(),
        },
        snippet: snippet(channel_id),
        content_details: None,
        statistics: None,
    }
}

/// Listing-endpoint item: flat id, stats embedded alongside the snippet.
pub fn listing_item(id: &str, channel_id: &str) -> RawCatalogItem {
    RawCatalogItem {
        id: RawItemId::Flat(id.to_string()),
        snippet: snippet(channel_id),
        content_details: Some(RawContentDetails {
            duration: Some("PT5M9S".to_string()),
        }),
        statistics: Some(RawVideoStatistics {
            view_count: Some("1500".to_string()),
            like_count: None,
        }),
    }
}

/// Detail-endpoint item: flat id with duration, views, and likes embedded.
pub fn detail_item(id: &str, channel_id: &str) -> RawCatalogItem {
    RawCatalogItem {
        id: RawItemId::Flat(id.to_string()),
        snippet: snippet(channel_id),
        content_details: Some(RawContentDetails {
            duration: Some("PT5M9S".to_string()),
        }),
        statistics: Some(RawVideoStatistics {
            view_count: Some("1500".to_string()),
            like_count: Some("120".to_string()),
        }),
    }
}

/// Statistics/duration batch record for `id`.
pub fn video_record(id: &str) -> RawVideoRecord {
    RawVideoRecord {
        id: id.to_string(),
        content_details: Some(RawContentDetails {
            duration: Some("PT5M9S".to_string()),
        }),
        statistics: Some(RawVideoStatistics {
            view_count: Some("1500".to_string()),
            like_count: None,
        }),
    }
}

/// Channel batch record for `id`.
pub fn channel_record(id: &str) -> RawChannelItem {
    RawChannelItem {
        id: id.to_string(),
        snippet: RawChannelSnippet {
            title: format!("Channel {}", id),
            thumbnails: RawThumbnails {
                default: Some(RawThumbnail {
                    url: "https://img.example/avatar.jpg".to_string(),
                }),
                medium: None,
                high: None,
            },
        },
        statistics: Some(RawChannelStatistics {
            subscriber_count: Some("1500000".to_string()),
        }),
    }
}
