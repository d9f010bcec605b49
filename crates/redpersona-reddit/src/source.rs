//! Profile fetching with fail-to-empty semantics.

use async_trait::async_trait;

use redpersona_core::{Outcome, ProfileData, RedditConfig};

use crate::client::RedditClient;
use crate::error::RedditError;
use crate::progress::{FetchProgress, ListingKind};
use crate::username::resolve_username;

/// Something that can list a user's recent posts and comments.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetches up to `limit` posts and up to `limit` comments for `username`.
    ///
    /// # Errors
    ///
    /// Any failure aborts the whole fetch; implementations do not return
    /// partial data.
    async fn fetch(
        &self,
        username: &str,
        limit: usize,
        progress: &mut dyn FetchProgress,
    ) -> Result<ProfileData, RedditError>;
}

/// [`ProfileSource`] backed by the Reddit OAuth API.
///
/// Authentication happens per fetch, so bad or missing credentials surface as
/// a fetch error rather than at construction.
#[derive(Debug, Clone)]
pub struct RedditSource {
    config: RedditConfig,
}

impl RedditSource {
    #[must_use]
    pub fn new(config: RedditConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProfileSource for RedditSource {
    async fn fetch(
        &self,
        username: &str,
        limit: usize,
        progress: &mut dyn FetchProgress,
    ) -> Result<ProfileData, RedditError> {
        let client = RedditClient::connect(&self.config).await?;

        let posts = client.submissions(username, limit, progress).await;
        progress.finish(ListingKind::Posts);
        let posts = posts?;

        let comments = client.comments(username, limit, progress).await;
        progress.finish(ListingKind::Comments);
        let comments = comments?;

        Ok(ProfileData {
            username: username.to_owned(),
            posts,
            comments,
        })
    }
}

/// Resolves `input` to a username and fetches that user's profile.
///
/// Never fails. Any error from `source` is logged and replaced by an empty
/// profile for the resolved username; partial results are discarded. A
/// `limit` of zero skips the source entirely.
pub async fn fetch_profile<S>(
    source: &S,
    input: &str,
    limit: usize,
    progress: &mut dyn FetchProgress,
) -> Outcome<ProfileData, RedditError>
where
    S: ProfileSource + ?Sized,
{
    let username = resolve_username(input);

    if limit == 0 {
        return Outcome::Complete(ProfileData::empty(&username));
    }

    match source.fetch(&username, limit, progress).await {
        Ok(mut data) => {
            data.posts.truncate(limit);
            data.comments.truncate(limit);
            tracing::info!(
                username = %username,
                posts = data.posts.len(),
                comments = data.comments.len(),
                "fetched Reddit profile"
            );
            Outcome::Complete(data)
        }
        Err(e) => {
            tracing::warn!(
                username = %username,
                error = %e,
                "Reddit fetch failed; continuing with an empty profile"
            );
            Outcome::Degraded {
                value: ProfileData::empty(&username),
                cause: e,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use redpersona_core::{ProfileComment, ProfilePost};

    use super::*;
    use crate::progress::NoProgress;

    /// Records the username it was asked for and replays a canned result.
    struct StubSource {
        requested: Mutex<Vec<String>>,
        fail: bool,
        posts: usize,
    }

    impl StubSource {
        fn ok(posts: usize) -> Self {
            Self {
                requested: Mutex::new(Vec::new()),
                fail: false,
                posts,
            }
        }

        fn failing() -> Self {
            Self {
                requested: Mutex::new(Vec::new()),
                fail: true,
                posts: 0,
            }
        }
    }

    #[async_trait]
    impl ProfileSource for StubSource {
        async fn fetch(
            &self,
            username: &str,
            _limit: usize,
            _progress: &mut dyn FetchProgress,
        ) -> Result<ProfileData, RedditError> {
            self.requested.lock().unwrap().push(username.to_owned());
            if self.fail {
                return Err(RedditError::Auth("401 Unauthorized".to_string()));
            }
            Ok(ProfileData {
                username: username.to_owned(),
                posts: (0..self.posts)
                    .map(|i| ProfilePost::new(&i.to_string(), "rust", "title", "text"))
                    .collect(),
                comments: vec![ProfileComment::new("c1", "rust", "body")],
            })
        }
    }

    #[tokio::test]
    async fn url_input_is_resolved_before_fetching() {
        let source = StubSource::ok(1);
        let outcome =
            fetch_profile(&source, "https://reddit.com/user/alice/", 25, &mut NoProgress).await;
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.value().username, "alice");
        assert_eq!(*source.requested.lock().unwrap(), vec!["alice".to_string()]);
    }

    #[tokio::test]
    async fn source_error_degrades_to_empty_profile() {
        let source = StubSource::failing();
        let outcome =
            fetch_profile(&source, "https://reddit.com/user/alice/", 25, &mut NoProgress).await;
        assert!(matches!(outcome.cause(), Some(RedditError::Auth(_))));
        let data = outcome.into_value();
        assert_eq!(data, ProfileData::empty("alice"));
    }

    #[tokio::test]
    async fn zero_limit_skips_the_source() {
        let source = StubSource::ok(3);
        let outcome = fetch_profile(&source, "alice", 0, &mut NoProgress).await;
        assert!(!outcome.is_degraded());
        assert!(outcome.value().is_empty());
        assert!(source.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn over_long_source_results_are_bounded_by_limit() {
        let source = StubSource::ok(10);
        let outcome = fetch_profile(&source, "alice", 4, &mut NoProgress).await;
        assert_eq!(outcome.value().posts.len(), 4);
        assert_eq!(outcome.value().comments.len(), 1);
    }
}
