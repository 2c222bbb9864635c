/// Watch-page detail lookup
///
/// Fetches one video with its statistics attached, then its channel record,
/// and normalizes the pair. This is the only path that surfaces like and
/// subscriber counts to the UI.
use crate::{
    error::{AppError, AppResult},
    models::Video,
    services::{enrichment::normalize_item, providers::CatalogProvider},
};

pub async fn video_details(provider: &dyn CatalogProvider, id: &str) -> AppResult<Video> {
    let item = provider
        .fetch_video(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("video {} not found", id)))?;

    let channel_id = item.snippet.channel_id.clone();
    let channels = provider.channels_by_ids(&[channel_id.clone()]).await?;
    let channel = channels
        .into_iter()
        .find(|c| c.id == channel_id)
        .ok_or_else(|| {
            AppError::Shape(format!("channel {} missing from batch response", channel_id))
        })?;

    // The detail item already embeds contentDetails/statistics.
    let video = normalize_item(&item, &channel, None);

    tracing::info!(video_id = %video.id, channel_id = %channel_id, "Video details fetched");

    Ok(video)
}
