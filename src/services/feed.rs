/// Feed pagination orchestrator
///
/// Owns the accumulated video sequence and the continuation token for one
/// feed view. State lives behind an `Arc<RwLock<_>>` so the session can be
/// handed to the UI layer and cloned across views; the lock is never held
/// across a network call.
///
/// The caller contract is single-flight: one fetch outstanding at a time.
/// What the session does guard against is staleness: a fetch completing
/// after `reset()` or after a newer first page landed finds the epoch
/// advanced and discards its result instead of applying it.
use crate::{
    error::{AppError, AppResult},
    models::Video,
    services::{enrichment::enrich_page, providers::CatalogProvider},
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Which listing a feed view shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedQuery {
    /// Region-scoped popular videos (home feed)
    Popular,
    /// Text search results
    Search(String),
}

#[derive(Clone)]
pub struct FeedSession {
    provider: Arc<dyn CatalogProvider>,
    inner: Arc<RwLock<FeedState>>,
}

struct FeedState {
    query: FeedQuery,
    videos: Vec<Video>,
    next_page_token: Option<String>,
    /// Bumped whenever the view is replaced (reset, first page landing);
    /// completed fetches from an older epoch are discarded on arrival.
    epoch: u64,
}

impl FeedSession {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            provider,
            inner: Arc::new(RwLock::new(FeedState {
                query: FeedQuery::Popular,
                videos: Vec::new(),
                next_page_token: None,
                epoch: 0,
            })),
        }
    }

    /// Loads the first page of `query`, replacing the accumulated state only
    /// once the page arrives. A failed load leaves the previous view intact.
    /// Returns the accumulated sequence (the freshly loaded page).
    pub async fn load_first_page(&self, query: FeedQuery) -> AppResult<Vec<Video>> {
        let epoch = self.inner.read().await.epoch;

        let (token, videos) = self.fetch_page(&query, None).await?;

        let mut state = self.inner.write().await;
        if state.epoch != epoch {
            tracing::debug!("First-page result superseded; discarding");
            return Ok(state.videos.clone());
        }
        state.query = query;
        state.videos = videos;
        state.next_page_token = token;
        state.epoch += 1;

        tracing::info!(
            accumulated = state.videos.len(),
            has_next_page = state.next_page_token.is_some(),
            "First feed page loaded"
        );

        Ok(state.videos.clone())
    }

    /// Loads the page after the last one, appending to the accumulated
    /// sequence. Fails fast, without issuing a request, when no continuation
    /// token is held.
    pub async fn load_next_page(&self) -> AppResult<Vec<Video>> {
        let (query, token, epoch) = {
            let state = self.inner.read().await;
            let token = state.next_page_token.clone().ok_or_else(|| {
                AppError::InvalidInput(
                    "No continuation token; load a first page before requesting the next"
                        .to_string(),
                )
            })?;
            (state.query.clone(), token, state.epoch)
        };

        let (next_token, videos) = self.fetch_page(&query, Some(token)).await?;

        let mut state = self.inner.write().await;
        if state.epoch != epoch {
            tracing::debug!("Next-page result superseded; discarding");
            return Ok(state.videos.clone());
        }
        state.videos.extend(videos);
        state.next_page_token = next_token;

        tracing::info!(
            accumulated = state.videos.len(),
            has_next_page = state.next_page_token.is_some(),
            "Next feed page loaded"
        );

        Ok(state.videos.clone())
    }

    /// Navigation-away lifecycle: drops accumulated state and invalidates any
    /// fetch still in flight.
    pub async fn reset(&self) {
        let mut state = self.inner.write().await;
        state.videos.clear();
        state.next_page_token = None;
        state.query = FeedQuery::Popular;
        state.epoch += 1;
    }

    /// Snapshot of the accumulated sequence
    pub async fn videos(&self) -> Vec<Video> {
        self.inner.read().await.videos.clone()
    }

    /// Current continuation token, None when no further pages exist
    pub async fn next_page_token(&self) -> Option<String> {
        self.inner.read().await.next_page_token.clone()
    }

    async fn fetch_page(
        &self,
        query: &FeedQuery,
        page_token: Option<String>,
    ) -> AppResult<(Option<String>, Vec<Video>)> {
        let page = match query {
            FeedQuery::Popular => self.provider.list_popular(page_token).await?,
            FeedQuery::Search(text) => self.provider.search_videos(text, page_token).await?,
        };

        let videos = enrich_page(self.provider.as_ref(), &page.items).await?;
        Ok((page.next_page_token, videos))
    }
}
