use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Video catalog API key (required, supplied out of band)
    pub youtube_api_key: String,

    /// Video catalog API base URL
    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,

    /// Region code for popular-video listings
    #[serde(default = "default_region")]
    pub region: String,

    /// Page size for feed listings
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Result cap for recommendation lookups
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: u32,
}

fn default_youtube_api_url() -> String {
    "https://youtube.googleapis.com/youtube/v3".to_string()
}

fn default_region() -> String {
    "US".to_string()
}

fn default_page_size() -> u32 {
    20
}

fn default_recommendation_limit() -> u32 {
    25
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
