//! Shared data model and configuration for redpersona.

pub mod app_config;
pub mod config;
pub mod outcome;
pub mod profile;

pub use app_config::{AppConfig, GeneratorConfig, RedditConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use outcome::Outcome;
pub use profile::{
    distinct_subreddits, truncate_chars, ProfileComment, ProfileData, ProfilePost,
    COMMENT_BODY_CHARS, DEFAULT_FETCH_LIMIT, POST_TEXT_CHARS,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
