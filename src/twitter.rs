mod auth;
mod search;
mod timeline;

pub use auth::fetch_bearer_token;
pub use search::fetch_search;
pub use timeline::TimelineRequest;

pub(crate) const API_ENDPOINT_BASE: &str = "https://api.twitter.com/";
