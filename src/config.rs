use serde::Deserialize;

/// Twitter app credentials loaded from a toml config file.
///
/// Only the consumer key and secret take part in the application-only
/// flow; the user access token pair is optional and carried for
/// completeness.
#[derive(Deserialize, Debug)]
pub struct Config {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: Option<String>,
    pub access_token_secret: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn decode() {
        let toml_str = r#"
        consumer_key = "xxx"
        consumer_secret = "yyy"
        access_token = "zzz"
        access_token_secret = "www"
        "#;
        let decoded = toml::from_str::<Config>(toml_str);
        assert!(decoded.is_ok());
    }

    #[test]
    fn decode_without_access_tokens() {
        let toml_str = r#"
        consumer_key = "xxx"
        consumer_secret = "yyy"
        "#;
        let decoded = toml::from_str::<Config>(toml_str).unwrap();
        assert!(decoded.access_token.is_none());
        assert!(decoded.access_token_secret.is_none());
    }
}
