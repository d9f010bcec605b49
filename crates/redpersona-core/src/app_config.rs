/// Credentials and endpoints for the Reddit API.
///
/// Empty credentials are allowed; they surface later as an authentication
/// failure inside the fetcher rather than as a startup error.
#[derive(Clone)]
pub struct RedditConfig {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    /// OAuth token endpoint, e.g. `"https://www.reddit.com/api/v1/access_token"`.
    pub token_url: String,
    /// Base URL for authenticated API calls, e.g. `"https://oauth.reddit.com"`.
    pub api_base_url: String,
    /// Whole-request timeout. `None` leaves the HTTP client's default in place.
    pub request_timeout_secs: Option<u64>,
}

impl std::fmt::Debug for RedditConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedditConfig")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &if self.client_secret.is_empty() {
                    ""
                } else {
                    "[redacted]"
                },
            )
            .field("user_agent", &self.user_agent)
            .field("token_url", &self.token_url)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Text-generation server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Base URL of a text-generation-inference server, e.g. `"http://localhost:8080"`.
    pub url: String,
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub reddit: RedditConfig,
    pub generator: GeneratorConfig,
    /// Number of posts and of comments to request.
    pub fetch_limit: usize,
    /// Fallback `tracing` filter used when `RUST_LOG` is not set.
    pub log_level: String,
}
