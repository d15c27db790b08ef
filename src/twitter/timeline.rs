use anyhow::Result;
use tracing::info;
use url::Url;

use crate::client::ApiClient;

const TIMELINE_PATH: &str = "1.1/statuses/user_timeline.json";

/// Builds and sends a user timeline request.
///
/// Defaults mirror the API recommendations: replies are kept and retweets
/// included, since the API strips both after collecting the requested
/// count, which makes result counts unpredictable otherwise.
#[derive(Debug, Clone)]
pub struct TimelineRequest {
    screen_name: String,
    count: u32,
    exclude_replies: bool,
    include_rts: bool,
}

impl TimelineRequest {
    pub fn new(screen_name: impl Into<String>) -> Self {
        Self {
            screen_name: screen_name.into(),
            count: 10,
            exclude_replies: false,
            include_rts: true,
        }
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn exclude_replies(mut self, exclude_replies: bool) -> Self {
        self.exclude_replies = exclude_replies;
        self
    }

    pub fn include_rts(mut self, include_rts: bool) -> Self {
        self.include_rts = include_rts;
        self
    }

    /// Returns the raw JSON timeline on success, `None` on any
    /// non-success response status.
    pub async fn fetch(&self, client: &ApiClient, bearer_token: &str) -> Result<Option<String>> {
        let url = self.endpoint(client)?;
        info!("Fetching timeline: {}", url);
        client.get(url, bearer_token).await
    }

    // Query parameter order is fixed: screen_name, count, exclude_replies, include_rts.
    fn endpoint(&self, client: &ApiClient) -> Result<Url> {
        let mut url = client.endpoint(TIMELINE_PATH)?;
        url.query_pairs_mut()
            .append_pair("screen_name", &self.screen_name)
            .append_pair("count", &self.count.to_string())
            .append_pair("exclude_replies", &self.exclude_replies.to_string())
            .append_pair("include_rts", &self.include_rts.to_string());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::TimelineRequest;
    use crate::client::ApiClient;

    #[test]
    fn url_queries() {
        let client = ApiClient::new();
        let url = TimelineRequest::new("exampleUser")
            .count(5)
            .exclude_replies(false)
            .include_rts(true)
            .endpoint(&client)
            .unwrap();
        assert_eq!(
            "screen_name=exampleUser&count=5&exclude_replies=false&include_rts=true",
            url.query().unwrap()
        );
    }

    #[test]
    fn default_queries() {
        let client = ApiClient::new();
        let url = TimelineRequest::new("twitterapi").endpoint(&client).unwrap();
        assert_eq!(
            "screen_name=twitterapi&count=10&exclude_replies=false&include_rts=true",
            url.query().unwrap()
        );
    }

    /// Identical inputs must produce byte-identical request URLs.
    #[test]
    fn endpoint_is_pure() {
        let client = ApiClient::new();
        let request = TimelineRequest::new("exampleUser").count(5);
        let first = request.endpoint(&client).unwrap();
        let second = request.endpoint(&client).unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }

    // To test this function:
    // RUST_LOG=debug cargo test live_timeline -- --ignored '[bearer_token]'
    #[test_log::test(tokio::test)]
    #[ignore = "require command line input"]
    async fn live_timeline() {
        let mut args = std::env::args().rev();
        let bearer_token = args.next().unwrap();

        let client = ApiClient::new();
        let timeline = TimelineRequest::new("twitterapi")
            .count(5)
            .fetch(&client, &bearer_token)
            .await
            .unwrap();
        assert!(timeline.is_some());
    }
}
