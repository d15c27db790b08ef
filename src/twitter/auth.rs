use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;

use crate::client::ApiClient;

const TOKEN_PATH: &str = "oauth2/token";
const GRANT_TYPE_BODY: &str = "grant_type=client_credentials";

/// Response from the oauth2/token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Fetches a bearer token for application-only authentication.
///
/// The remote API keeps the token valid for about 15 minutes; expiry is
/// not tracked here, refreshing is up to the caller.
///
/// Returns `Ok(None)` when the token request is not successful. A success
/// response whose body lacks the `access_token` field is malformed and
/// fails with an error.
pub async fn fetch_bearer_token(
    client: &ApiClient,
    consumer_key: &str,
    consumer_secret: &str,
) -> Result<Option<String>> {
    let url = client.endpoint(TOKEN_PATH)?;
    let authorization = basic_auth_value(consumer_key, consumer_secret);
    let Some(body) = client.post_form(url, &authorization, GRANT_TYPE_BODY).await? else {
        return Ok(None);
    };
    let token: TokenResponse =
        serde_json::from_str(&body).with_context(|| "Failed to deserialize token response")?;
    Ok(Some(token.access_token))
}

/// Basic auth header value used only for the token request, never for
/// subsequent API calls.
fn basic_auth_value(consumer_key: &str, consumer_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{consumer_key}:{consumer_secret}"))
    )
}
