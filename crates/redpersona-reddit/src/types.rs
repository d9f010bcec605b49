//! Wire types for Reddit OAuth and listing responses.

use serde::Deserialize;

/// Reddit OAuth token response.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: Option<String>,
    pub(crate) error: Option<String>,
}

/// Reddit listing wrapper: `{"kind": "Listing", "data": {...}}`.
#[derive(Debug, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
pub struct ListingData<T> {
    pub children: Vec<Thing<T>>,
    /// Cursor for the next page; `None` on the last page.
    pub after: Option<String>,
}

/// A listing child: `{"kind": "t3", "data": {...}}`.
#[derive(Debug, Deserialize)]
pub struct Thing<T> {
    pub data: T,
}

/// Fields of a `t3` (submission) we keep.
#[derive(Debug, Deserialize)]
pub struct SubmissionData {
    pub id: String,
    pub subreddit: String,
    #[serde(default)]
    pub title: String,
    /// Empty for link posts.
    #[serde(default)]
    pub selftext: Option<String>,
}

/// Fields of a `t1` (comment) we keep.
#[derive(Debug, Deserialize)]
pub struct CommentData {
    pub id: String,
    pub subreddit: String,
    #[serde(default)]
    pub body: Option<String>,
}
