use std::env;
use std::time::Duration;

use crate::domain::entities::Lang;

const DEFAULT_API_URL: &str = "http://localhost:8283/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the blog API, including the `/api` prefix
    pub api_base_url: String,
    /// Language used when a request does not name one
    pub default_lang: Lang,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base_url: env::var("LINGOPOST_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            default_lang: Lang::from_query(env::var("LINGOPOST_LANG").ok().as_deref()),
            request_timeout: Duration::from_secs(
                env::var("LINGOPOST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }

    /// Language from an optional request value, or the configured default
    pub fn lang_or_default(&self, value: Option<&str>) -> Lang {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| self.default_lang.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            default_lang: Lang::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
