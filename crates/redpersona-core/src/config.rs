use crate::app_config::{AppConfig, GeneratorConfig, RedditConfig};
use crate::ConfigError;

pub(crate) const DEFAULT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
pub(crate) const DEFAULT_API_BASE_URL: &str = "https://oauth.reddit.com";
pub(crate) const DEFAULT_GENERATOR_URL: &str = "http://localhost:8080";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Nothing is required: every variable has a default, and the Reddit
/// credentials default to empty strings.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| invalid(var, e.to_string())),
            _ => Ok(None),
        }
    };

    let temperature = {
        let var = "REDPERSONA_GENERATOR_TEMPERATURE";
        let value = or_default(var, "0.7")
            .parse::<f32>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(invalid(var, format!("must be a positive number, got {value}")));
        }
        value
    };

    let request_timeout_secs = parse_optional_u64("REDPERSONA_HTTP_TIMEOUT_SECS")?;

    let reddit = RedditConfig {
        client_id: or_default("REDDIT_CLIENT_ID", ""),
        client_secret: or_default("REDDIT_CLIENT_SECRET", ""),
        user_agent: or_default("REDDIT_USER_AGENT", ""),
        token_url: or_default("REDDIT_TOKEN_URL", DEFAULT_TOKEN_URL),
        api_base_url: or_default("REDDIT_API_BASE_URL", DEFAULT_API_BASE_URL),
        request_timeout_secs,
    };

    let generator = GeneratorConfig {
        url: or_default("REDPERSONA_GENERATOR_URL", DEFAULT_GENERATOR_URL),
        max_new_tokens: parse_u32("REDPERSONA_GENERATOR_MAX_NEW_TOKENS", "500")?,
        temperature,
        request_timeout_secs,
    };

    Ok(AppConfig {
        reddit,
        generator,
        fetch_limit: parse_usize("REDPERSONA_FETCH_LIMIT", "25")?,
        log_level: or_default("REDPERSONA_LOG_LEVEL", "warn"),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
