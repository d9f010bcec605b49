//! Reddit API client (client-credentials OAuth).

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use redpersona_core::{ProfileComment, ProfilePost, RedditConfig};

use crate::error::RedditError;
use crate::progress::{FetchProgress, ListingKind};
use crate::types::{CommentData, Listing, SubmissionData, TokenResponse};

/// Reddit caps listing pages at 100 items.
const PAGE_LIMIT: usize = 100;

/// Reddit API client holding a valid bearer token.
pub struct RedditClient {
    client: Client,
    token: String,
    user_agent: String,
    api_base_url: Url,
}

impl RedditClient {
    /// Creates a client by exchanging the configured credentials for a token.
    ///
    /// # Errors
    ///
    /// - [`RedditError::Auth`] if the token endpoint rejects the credentials.
    /// - [`RedditError::InvalidUrl`] if `api_base_url` cannot be parsed.
    /// - [`RedditError::Http`] on network failure.
    pub async fn connect(config: &RedditConfig) -> Result<Self, RedditError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let api_base_url =
            Url::parse(&config.api_base_url).map_err(|e| RedditError::InvalidUrl {
                url: config.api_base_url.clone(),
                reason: e.to_string(),
            })?;

        let token = Self::fetch_token(&client, config).await?;

        Ok(Self {
            client,
            token,
            user_agent: config.user_agent.clone(),
            api_base_url,
        })
    }

    async fn fetch_token(client: &Client, config: &RedditConfig) -> Result<String, RedditError> {
        let response = client
            .post(&config.token_url)
            .header(reqwest::header::USER_AGENT, &config.user_agent)
            .basic_auth(&config.client_id, Some(&config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RedditError::Auth(format!(
                "token exchange failed with status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| RedditError::Deserialize {
                context: "access_token".to_string(),
                source: e,
            })?;

        match (token.access_token, token.error) {
            (Some(access_token), _) if !access_token.is_empty() => Ok(access_token),
            (_, Some(error)) => Err(RedditError::Auth(error)),
            _ => Err(RedditError::Auth(
                "token response had no access_token".to_string(),
            )),
        }
    }

    /// Fetches up to `limit` of the user's newest submissions.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError`] if any page request fails. Pages already
    /// fetched are discarded.
    pub async fn submissions(
        &self,
        username: &str,
        limit: usize,
        progress: &mut dyn FetchProgress,
    ) -> Result<Vec<ProfilePost>, RedditError> {
        self.paginate(username, ListingKind::Posts, limit, progress, |s: SubmissionData| {
            ProfilePost::new(
                &s.id,
                &s.subreddit,
                &s.title,
                s.selftext.as_deref().unwrap_or_default(),
            )
        })
        .await
    }

    /// Fetches up to `limit` of the user's newest comments.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError`] if any page request fails. Pages already
    /// fetched are discarded.
    pub async fn comments(
        &self,
        username: &str,
        limit: usize,
        progress: &mut dyn FetchProgress,
    ) -> Result<Vec<ProfileComment>, RedditError> {
        self.paginate(username, ListingKind::Comments, limit, progress, |c: CommentData| {
            ProfileComment::new(&c.id, &c.subreddit, c.body.as_deref().unwrap_or_default())
        })
        .await
    }

    async fn paginate<T, R, F>(
        &self,
        username: &str,
        kind: ListingKind,
        limit: usize,
        progress: &mut dyn FetchProgress,
        normalize: F,
    ) -> Result<Vec<R>, RedditError>
    where
        T: DeserializeOwned,
        F: Fn(T) -> R,
    {
        let url = self.listing_url(username, kind)?;
        let mut records = Vec::with_capacity(limit);
        let mut after: Option<String> = None;

        while records.len() < limit {
            let page_limit = (limit - records.len()).min(PAGE_LIMIT);
            let mut params: Vec<(&str, String)> = vec![
                ("sort", "new".to_string()),
                ("limit", page_limit.to_string()),
                ("raw_json", "1".to_string()),
            ];
            if let Some(cursor) = &after {
                params.push(("after", cursor.clone()));
            }

            let listing: Listing<T> = self.get_json(url.clone(), &params, kind).await?;
            let page_len = listing.data.children.len();
            let remaining = limit - records.len();

            records.extend(
                listing
                    .data
                    .children
                    .into_iter()
                    .take(remaining)
                    .map(|thing| normalize(thing.data)),
            );
            progress.advance(kind, records.len(), limit);

            after = listing.data.after;
            if after.is_none() || page_len == 0 {
                break;
            }
        }

        tracing::debug!(username, listing = %kind, count = records.len(), "fetched listing");
        Ok(records)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
        kind: ListingKind,
    ) -> Result<T, RedditError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RedditError::UnexpectedStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RedditError::Deserialize {
            context: format!("{kind} listing"),
            source: e,
        })
    }

    /// `{api_base}/user/{username}/submitted` or `.../comments`, with the
    /// username percent-encoded as a single path segment.
    fn listing_url(&self, username: &str, kind: ListingKind) -> Result<Url, RedditError> {
        let listing = match kind {
            ListingKind::Posts => "submitted",
            ListingKind::Comments => "comments",
        };
        let mut url = self.api_base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RedditError::InvalidUrl {
                url: self.api_base_url.to_string(),
                reason: "cannot be a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(["user", username, listing]);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_base(base: &str) -> RedditClient {
        RedditClient {
            client: Client::new(),
            token: "token".to_string(),
            user_agent: "redpersona-test/0.1".to_string(),
            api_base_url: Url::parse(base).expect("valid base URL"),
        }
    }

    #[test]
    fn listing_url_for_posts_and_comments() {
        let client = client_with_base("https://oauth.reddit.com");
        assert_eq!(
            client.listing_url("alice", ListingKind::Posts).unwrap().as_str(),
            "https://oauth.reddit.com/user/alice/submitted"
        );
        assert_eq!(
            client.listing_url("alice", ListingKind::Comments).unwrap().as_str(),
            "https://oauth.reddit.com/user/alice/comments"
        );
    }

    #[test]
    fn listing_url_tolerates_trailing_slash_on_base() {
        let client = client_with_base("https://oauth.reddit.com/");
        assert_eq!(
            client.listing_url("bob", ListingKind::Posts).unwrap().as_str(),
            "https://oauth.reddit.com/user/bob/submitted"
        );
    }

    #[test]
    fn listing_url_encodes_username_as_one_segment() {
        let client = client_with_base("https://oauth.reddit.com");
        let url = client.listing_url("a/b c", ListingKind::Posts).unwrap();
        assert_eq!(url.as_str(), "https://oauth.reddit.com/user/a%2Fb%20c/submitted");
    }
}
