//! Client core for a third-party video-catalog API: feed pagination, search,
//! batch enrichment into one canonical [`models::Video`] view-model, watch-page
//! details, best-effort recommendations, and an identity session. The UI layer
//! consumes this crate through [`services::feed::FeedSession`],
//! [`services::recommendations::related_videos`],
//! [`services::details::video_details`], and the [`format`] helpers.

pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
