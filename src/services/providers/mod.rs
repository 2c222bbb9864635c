/// Video-catalog data source abstraction
///
/// One seam over the catalog's four logical read operations (popular listing,
/// text search, video statistics batch, channel metadata batch) plus the two
/// scoped variants the watch page needs. Everything above this trait works in
/// raw shapes and is exercised against mocks in tests.
use crate::{
    error::AppResult,
    models::raw::{PagedResponse, RawCatalogItem, RawChannelItem, RawVideoRecord},
};

pub mod youtube;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// List popular videos for the configured region, one page at a time
    async fn list_popular(
        &self,
        page_token: Option<String>,
    ) -> AppResult<PagedResponse<RawCatalogItem>>;

    /// Search videos by text query, one page at a time
    async fn search_videos(
        &self,
        query: &str,
        page_token: Option<String>,
    ) -> AppResult<PagedResponse<RawCatalogItem>>;

    /// Search videos uploaded by a single channel (bounded result count)
    async fn list_channel_videos(
        &self,
        channel_id: &str,
        limit: u32,
    ) -> AppResult<PagedResponse<RawCatalogItem>>;

    /// Fetch statistics/duration records for a set of distinct video ids
    async fn videos_by_ids(&self, ids: &[String]) -> AppResult<Vec<RawVideoRecord>>;

    /// Fetch metadata/statistics records for a set of distinct channel ids
    async fn channels_by_ids(&self, ids: &[String]) -> AppResult<Vec<RawChannelItem>>;

    /// Fetch one video with snippet, duration, and statistics attached
    async fn fetch_video(&self, id: &str) -> AppResult<Option<RawCatalogItem>>;
}
