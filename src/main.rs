use std::sync::Arc;

use tubefeed::config::Config;
use tubefeed::services::feed::{FeedQuery, FeedSession};
use tubefeed::services::providers::youtube::DataApiProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let provider = Arc::new(DataApiProvider::new(&config)?);
    let session = FeedSession::new(provider);

    // With an argument, search; otherwise show the popular home feed.
    let query = match std::env::args().nth(1) {
        Some(text) => FeedQuery::Search(text),
        None => FeedQuery::Popular,
    };

    let videos = session.load_first_page(query).await?;
    for video in &videos {
        println!(
            "[{}] {} | {} | {} views | {}",
            video.duration, video.title, video.channel.name, video.views, video.age
        );
    }

    if session.next_page_token().await.is_some() {
        println!("(more pages available)");
    }

    Ok(())
}
