/// Page enrichment and item normalization
///
/// A page of raw items references channels and per-video statistics the
/// listing itself does not carry. Enrichment resolves both with exactly two
/// batch lookups (deduplicated ids, issued concurrently, joined by id in
/// input order) and hands every surviving item to the normalizer.
///
/// Error policy: if either batch lookup fails the whole page fails; there is
/// no partially enriched page. Within a successful page, an item whose
/// channel record is absent is dropped (a video is never rendered without
/// attribution), while a missing statistics record only defaults that item's
/// duration and view count.
use crate::{
    error::AppResult,
    format::{
        format_age, format_count, format_duration, format_subscriber_count, parse_raw_count,
    },
    models::{
        raw::{RawCatalogItem, RawChannelItem, RawVideoRecord},
        ChannelInfo, Video,
    },
    services::providers::CatalogProvider,
};
use std::collections::{HashMap, HashSet};

const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// Enriches one page of raw items into canonical videos, preserving input order.
pub async fn enrich_page(
    provider: &dyn CatalogProvider,
    items: &[RawCatalogItem],
) -> AppResult<Vec<Video>> {
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let video_ids = distinct(items.iter().map(|item| item.id.as_str()));
    let channel_ids = distinct(items.iter().map(|item| item.snippet.channel_id.as_str()));

    // Independent lookups; both must land before the join step proceeds.
    let (channels, records) = tokio::join!(
        provider.channels_by_ids(&channel_ids),
        provider.videos_by_ids(&video_ids),
    );
    let channels = channels?;
    let records = records?;

    let channel_map: HashMap<&str, &RawChannelItem> =
        channels.iter().map(|c| (c.id.as_str(), c)).collect();
    let record_map: HashMap<&str, &RawVideoRecord> =
        records.iter().map(|r| (r.id.as_str(), r)).collect();

    let mut videos = Vec::with_capacity(items.len());
    for item in items {
        let Some(channel) = channel_map.get(item.snippet.channel_id.as_str()) else {
            tracing::debug!(
                video_id = item.id.as_str(),
                channel_id = %item.snippet.channel_id,
                "Dropping item with no channel record"
            );
            continue;
        };

        let record = record_map.get(item.id.as_str()).copied();
        videos.push(normalize_item(item, channel, record));
    }

    tracing::debug!(
        input = items.len(),
        enriched = videos.len(),
        "Page enrichment completed"
    );

    Ok(videos)
}

/// Distinct ids in first-seen order; many items on a page share a channel.
fn distinct<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect()
}

/// Maps one raw item plus its channel record and optional statistics record
/// into exactly one [`Video`]. Missing optional fields get fixed defaults;
/// this never fails.
pub fn normalize_item(
    item: &RawCatalogItem,
    channel: &RawChannelItem,
    record: Option<&RawVideoRecord>,
) -> Video {
    let id = item.id.as_str();

    // Batch-record fields win over whatever the listing item embedded.
    let duration = record
        .and_then(|r| r.content_details.as_ref())
        .or(item.content_details.as_ref())
        .and_then(|c| c.duration.as_deref())
        .unwrap_or("");
    let statistics = record
        .and_then(|r| r.statistics.as_ref())
        .or(item.statistics.as_ref());

    let views = statistics
        .and_then(|s| s.view_count.as_deref())
        .unwrap_or("0");
    let likes = statistics.and_then(|s| s.like_count.as_deref());

    Video {
        id: id.to_string(),
        title: item.snippet.title.clone(),
        description: item.snippet.description.clone(),
        thumbnail: item
            .snippet
            .thumbnails
            .display_url()
            .unwrap_or_default()
            .to_string(),
        watch_url: format!("{}{}", WATCH_URL_BASE, id),
        duration: format_duration(duration),
        views: format_count(parse_raw_count(views)),
        likes: likes.map(|l| format_count(parse_raw_count(l))),
        age: format_age(item.snippet.published_at),
        channel: ChannelInfo {
            id: item.snippet.channel_id.clone(),
            name: item.snippet.channel_title.clone(),
            image: channel
                .snippet
                .thumbnails
                .avatar_url()
                .unwrap_or_default()
                .to_string(),
            subscribers: channel
                .statistics
                .as_ref()
                .and_then(|s| s.subscriber_count.as_deref())
                .map(|c| format_subscriber_count(parse_raw_count(c))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::providers::MockCatalogProvider;
    use crate::test_support::{channel_record, search_item, video_record};

    #[tokio::test]
    async fn enrichment_preserves_input_order() {
        let items = vec![
            search_item("v1", "UC1"),
            search_item("v2", "UC2"),
            search_item("v3", "UC1"),
        ];

        let mut provider = MockCatalogProvider::new();
        provider
            .expect_channels_by_ids()
            .returning(|_| Ok(vec![channel_record("UC1"), channel_record("UC2")]));
        provider
            .expect_videos_by_ids()
            .returning(|_| Ok(vec![video_record("v2"), video_record("v1"), video_record("v3")]));

        let videos = enrich_page(&provider, &items).await.unwrap();
        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["v1", "v2", "v3"]);
    }

    #[tokio::test]
    async fn enrichment_deduplicates_ids_before_querying() {
        let items = vec![
            search_item("v1", "UC1"),
            search_item("v2", "UC1"),
            search_item("v1", "UC1"),
        ];

        let mut provider = MockCatalogProvider::new();
        provider
            .expect_channels_by_ids()
            .withf(|ids| ids == ["UC1".to_string()])
            .times(1)
            .returning(|_| Ok(vec![channel_record("UC1")]));
        provider
            .expect_videos_by_ids()
            .withf(|ids| ids == ["v1".to_string(), "v2".to_string()])
            .times(1)
            .returning(|_| Ok(vec![video_record("v1"), video_record("v2")]));

        let videos = enrich_page(&provider, &items).await.unwrap();
        assert_eq!(videos.len(), 3);
    }

    #[tokio::test]
    async fn item_without_channel_record_is_dropped() {
        let items = vec![search_item("v1", "UC1"), search_item("v2", "UC-gone")];

        let mut provider = MockCatalogProvider::new();
        provider
            .expect_channels_by_ids()
            .returning(|_| Ok(vec![channel_record("UC1")]));
        provider
            .expect_videos_by_ids()
            .returning(|_| Ok(vec![video_record("v1"), video_record("v2")]));

        let videos = enrich_page(&provider, &items).await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "v1");
        assert!(!videos[0].channel.image.is_empty());
    }

    #[tokio::test]
    async fn item_without_stats_record_keeps_defaults() {
        let items = vec![search_item("v1", "UC1")];

        let mut provider = MockCatalogProvider::new();
        provider
            .expect_channels_by_ids()
            .returning(|_| Ok(vec![channel_record("UC1")]));
        provider.expect_videos_by_ids().returning(|_| Ok(vec![]));

        let videos = enrich_page(&provider, &items).await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].duration, "N/A");
        assert_eq!(videos[0].views, "0");
        assert_eq!(videos[0].likes, None);
    }

    #[tokio::test]
    async fn failed_batch_lookup_fails_the_whole_page() {
        let items = vec![search_item("v1", "UC1")];

        let mut provider = MockCatalogProvider::new();
        provider.expect_channels_by_ids().returning(|_| {
            Err(AppError::Upstream {
                status: 403,
                message: "quota exceeded".to_string(),
            })
        });
        provider
            .expect_videos_by_ids()
            .returning(|_| Ok(vec![video_record("v1")]));

        let result = enrich_page(&provider, &items).await;
        assert!(matches!(result, Err(AppError::Upstream { status: 403, .. })));
    }

    #[tokio::test]
    async fn empty_page_issues_no_lookups() {
        let provider = MockCatalogProvider::new();
        let videos = enrich_page(&provider, &[]).await.unwrap();
        assert!(videos.is_empty());
    }

    #[test]
    fn normalize_formats_display_fields() {
        let item = search_item("v1", "UC1");
        let channel = channel_record("UC1");
        let record = video_record("v1");

        let video = normalize_item(&item, &channel, Some(&record));
        assert_eq!(video.id, "v1");
        assert_eq!(video.watch_url, "https://www.youtube.com/watch?v=v1");
        assert_eq!(video.duration, "5:09");
        assert_eq!(video.views, "1.5K");
        assert_eq!(video.channel.id, "UC1");
        assert_eq!(video.channel.subscribers.as_deref(), Some("2M"));
    }
}
