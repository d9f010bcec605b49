use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Maximum number of characters kept from a post's self-text.
pub const POST_TEXT_CHARS: usize = 300;

/// Maximum number of characters kept from a comment body.
pub const COMMENT_BODY_CHARS: usize = 200;

/// Number of posts and of comments requested when the caller does not say.
pub const DEFAULT_FETCH_LIMIT: usize = 25;

/// A submission made by the profiled user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePost {
    /// Reddit base-36 ID, e.g. `"1abc2d"`.
    pub id: String,
    /// Subreddit display name without the `r/` prefix.
    pub subreddit: String,
    pub title: String,
    /// Self-text excerpt, at most [`POST_TEXT_CHARS`] characters.
    pub text: String,
}

impl ProfilePost {
    /// Builds a post, truncating `text` to [`POST_TEXT_CHARS`].
    #[must_use]
    pub fn new(id: &str, subreddit: &str, title: &str, text: &str) -> Self {
        Self {
            id: id.to_owned(),
            subreddit: subreddit.to_owned(),
            title: title.to_owned(),
            text: truncate_chars(text, POST_TEXT_CHARS),
        }
    }
}

/// A comment made by the profiled user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileComment {
    pub id: String,
    pub subreddit: String,
    /// Body excerpt, at most [`COMMENT_BODY_CHARS`] characters.
    pub body: String,
}

impl ProfileComment {
    /// Builds a comment, truncating `body` to [`COMMENT_BODY_CHARS`].
    #[must_use]
    pub fn new(id: &str, subreddit: &str, body: &str) -> Self {
        Self {
            id: id.to_owned(),
            subreddit: subreddit.to_owned(),
            body: truncate_chars(body, COMMENT_BODY_CHARS),
        }
    }
}

/// Everything collected for one user.
///
/// `posts` and `comments` are in retrieval order (newest first). An empty
/// profile means either "nothing posted" or "retrieval failed"; callers that
/// need the difference get it from the [`crate::Outcome`] the fetcher returns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileData {
    /// Resolved handle, never a URL.
    pub username: String,
    pub posts: Vec<ProfilePost>,
    pub comments: Vec<ProfileComment>,
}

impl ProfileData {
    /// A profile with no posts and no comments.
    #[must_use]
    pub fn empty(username: &str) -> Self {
        Self {
            username: username.to_owned(),
            posts: Vec::new(),
            comments: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.comments.is_empty()
    }
}

/// Distinct subreddit names referenced by `posts` and `comments`.
///
/// Order is first-seen: all posts in order, then all comments in order.
#[must_use]
pub fn distinct_subreddits(posts: &[ProfilePost], comments: &[ProfileComment]) -> Vec<String> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .map(|p| p.subreddit.as_str())
        .chain(comments.iter().map(|c| c.subreddit.as_str()))
        .filter(|sub| seen.insert(*sub))
        .map(str::to_owned)
        .collect()
}

/// Returns at most `max_chars` characters of `input`.
///
/// Counts `char`s rather than bytes so multi-byte text is never split.
#[must_use]
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => input[..byte_idx].to_owned(),
        None => input.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_chars_boundaries() {
        assert_eq!(truncate_chars(&"a".repeat(79), 80).chars().count(), 79);
        assert_eq!(truncate_chars(&"a".repeat(80), 80).chars().count(), 80);
        assert_eq!(truncate_chars(&"a".repeat(81), 80).chars().count(), 80);
    }

    #[test]
    fn truncate_chars_does_not_split_multibyte() {
        let input = "é".repeat(5);
        assert_eq!(truncate_chars(&input, 3), "ééé");
    }

    #[test]
    fn post_text_is_truncated_to_300_chars() {
        for (len, expected) in [(299, 299), (300, 300), (301, 300)] {
            let post = ProfilePost::new("p1", "rust", "title", &"x".repeat(len));
            assert_eq!(post.text.chars().count(), expected, "input length {len}");
        }
    }

    #[test]
    fn post_title_is_not_truncated() {
        let title = "t".repeat(400);
        let post = ProfilePost::new("p1", "rust", &title, "");
        assert_eq!(post.title, title);
    }

    #[test]
    fn comment_body_is_truncated_to_200_chars() {
        for (len, expected) in [(199, 199), (200, 200), (201, 200)] {
            let comment = ProfileComment::new("c1", "rust", &"y".repeat(len));
            assert_eq!(comment.body.chars().count(), expected, "input length {len}");
        }
    }

    #[test]
    fn distinct_subreddits_keeps_first_seen_order() {
        let posts = vec![
            ProfilePost::new("1", "rust", "a", ""),
            ProfilePost::new("2", "golang", "b", ""),
            ProfilePost::new("3", "rust", "c", ""),
        ];
        let comments = vec![
            ProfileComment::new("4", "linux", "x"),
            ProfileComment::new("5", "golang", "y"),
        ];
        assert_eq!(
            distinct_subreddits(&posts, &comments),
            vec!["rust", "golang", "linux"]
        );
    }

    #[test]
    fn empty_profile_has_no_records() {
        let data = ProfileData::empty("alice");
        assert_eq!(data.username, "alice");
        assert!(data.is_empty());
        assert!(distinct_subreddits(&data.posts, &data.comments).is_empty());
    }
}
