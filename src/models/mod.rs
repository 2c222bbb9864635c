pub mod raw;

use serde::{Deserialize, Serialize};

/// Canonical view-model for a playable item, independent of which source
/// endpoint produced the raw data. Everything downstream of enrichment sees
/// only this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    /// Source-assigned id, stable across endpoints describing the same item
    pub id: String,
    pub title: String,
    pub description: String,
    /// Thumbnail URL; empty string when the source supplied none
    pub thumbnail: String,
    pub watch_url: String,
    /// Display string, "N/A" when unavailable
    pub duration: String,
    /// Display string, e.g. "1.5K"
    pub views: String,
    pub likes: Option<String>,
    /// Relative-age display string computed at normalization time
    pub age: String,
    pub channel: ChannelInfo,
}

/// Channel attribution for a video
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelInfo {
    pub id: String,
    pub name: String,
    /// Avatar image URL; empty string when the source supplied none
    pub image: String,
    pub subscribers: Option<String>,
}

/// Session-scoped authenticated user, produced by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub avatar_url: String,
}
