use anyhow::Result;
use tracing::info;
use url::Url;

use crate::client::ApiClient;

const SEARCH_PATH: &str = "1.1/search/tweets.json";

/// Runs a tweet search and returns the raw JSON result, or `None` on any
/// non-success response status.
///
/// `raw_query` is appended to the search path verbatim and must already be
/// percent-encoded by the caller, including the leading `?`,
/// e.g. `"?q=from%3Atwitterapi"`.
pub async fn fetch_search(
    client: &ApiClient,
    bearer_token: &str,
    raw_query: &str,
) -> Result<Option<String>> {
    let url = endpoint(client, raw_query)?;
    info!("Searching tweets: {}", url);
    client.get(url, bearer_token).await
}

fn endpoint(client: &ApiClient, raw_query: &str) -> Result<Url> {
    client.endpoint(format!("{SEARCH_PATH}{raw_query}").as_str())
}
