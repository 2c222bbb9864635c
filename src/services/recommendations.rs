/// Recommendation resolver for the watch page
///
/// Primary path: other videos from the focal video's channel. A channel with
/// no other uploads falls back to the generic popular listing. Both branches
/// converge on the shared enrichment path, and every failure is swallowed:
/// recommendations are supplementary content and never block the primary
/// render.
use crate::{
    error::AppResult,
    models::Video,
    services::{enrichment::enrich_page, providers::CatalogProvider},
};

/// Returns enriched recommendations for a focal video's channel, or an empty
/// sequence when anything along the way fails.
pub async fn related_videos(
    provider: &dyn CatalogProvider,
    channel_id: &str,
    limit: u32,
) -> Vec<Video> {
    match try_related(provider, channel_id, limit).await {
        Ok(videos) => videos,
        Err(e) => {
            tracing::warn!(
                error = %e,
                channel_id = %channel_id,
                "Recommendation lookup failed; rendering none"
            );
            Vec::new()
        }
    }
}

async fn try_related(
    provider: &dyn CatalogProvider,
    channel_id: &str,
    limit: u32,
) -> AppResult<Vec<Video>> {
    let page = provider.list_channel_videos(channel_id, limit).await?;

    let items = if page.items.is_empty() {
        tracing::debug!(
            channel_id = %channel_id,
            "Channel has no other uploads; falling back to popular listing"
        );
        provider.list_popular(None).await?.items
    } else {
        page.items
    };

    enrich_page(provider, &items).await
}
