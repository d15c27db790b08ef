use crate::{
    client::ApiClient,
    config::Config,
    twitter::{fetch_bearer_token, fetch_search, TimelineRequest},
};
use anyhow::{anyhow, Context, Result};
use tracing::{info, instrument};

/// Application entry.
pub struct App {
    client: ApiClient,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            client: ApiClient::new(),
            config,
        }
    }

    #[instrument(skip_all)]
    pub async fn token(&self) -> Result<()> {
        let token = self.bearer_token().await?;
        println!("{token}");
        Ok(())
    }

    #[instrument(skip_all)]
    pub async fn timeline(
        &self,
        screen_name: &str,
        count: u32,
        exclude_replies: bool,
        include_rts: bool,
    ) -> Result<()> {
        let token = self.bearer_token().await?;
        info!("Fetching timeline of user: {}", screen_name);
        let request = TimelineRequest::new(screen_name)
            .count(count)
            .exclude_replies(exclude_replies)
            .include_rts(include_rts);
        if let Some(json) = request.fetch(&self.client, &token).await? {
            println!("{json}");
        }
        Ok(())
    }

    #[instrument(skip_all)]
    pub async fn search(&self, query: &str) -> Result<()> {
        let token = self.bearer_token().await?;
        info!("Searching tweets with query: {}", query);
        if let Some(json) = fetch_search(&self.client, &token, query).await? {
            println!("{json}");
        }
        Ok(())
    }

    // The token is valid for about 15 minutes; it is fetched per command
    // and never cached.
    async fn bearer_token(&self) -> Result<String> {
        fetch_bearer_token(
            &self.client,
            &self.config.consumer_key,
            &self.config.consumer_secret,
        )
        .await
        .with_context(|| "Failed to fetch bearer token")?
        .ok_or_else(|| anyhow!("Token request was not successful"))
    }
}
