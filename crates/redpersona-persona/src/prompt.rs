//! Prompt composition for the generative path.

use redpersona_core::{distinct_subreddits, truncate_chars, ProfileData};

use crate::sections::{citation_lines, interest_lines, most_active};

/// Posts included in the prompt.
pub const MAX_PROMPT_POSTS: usize = 5;

/// Comments included in the prompt.
pub const MAX_PROMPT_COMMENTS: usize = 8;

/// Comment bodies are re-truncated to this many characters in the prompt.
pub const PROMPT_COMMENT_CHARS: usize = 80;

/// Marks where the model's continuation starts.
pub const COMPLETION_CUE: &str = "\n\nPERSONA:";

/// Builds the model prompt for `data`.
///
/// Only the first [`MAX_PROMPT_POSTS`] posts and [`MAX_PROMPT_COMMENTS`]
/// comments are used, and every derived figure (subreddits, counts,
/// citations) comes from that reduced subset. Ends with [`COMPLETION_CUE`].
#[must_use]
pub fn compose_prompt(data: &ProfileData) -> String {
    let username = &data.username;
    let posts = &data.posts[..data.posts.len().min(MAX_PROMPT_POSTS)];
    let comments = &data.comments[..data.comments.len().min(MAX_PROMPT_COMMENTS)];
    let subreddits = distinct_subreddits(posts, comments);

    let post_lines: String = posts
        .iter()
        .enumerate()
        .map(|(idx, post)| {
            format!("Post {} (r/{}): {}\n", idx + 1, post.subreddit, post.title)
        })
        .collect();

    let comment_lines: String = comments
        .iter()
        .enumerate()
        .map(|(idx, comment)| {
            format!(
                "Comment {} (r/{}): {}\n",
                idx + 1,
                comment.subreddit,
                truncate_chars(&comment.body, PROMPT_COMMENT_CHARS)
            )
        })
        .collect();

    format!(
        "Create a marketing persona for Reddit user \"{username}\" based on the following data.

{post_lines}
{comment_lines}
FORMAT:
## Basic Information
- **Age**: Adult Redditor
- **Location**: United States (likely)
- **Occupation**: Tech industry professional

## Background & Story
{username} is an active Reddit user who participates in various communities and is knowledgeable about technology and internet culture.

## Interests & Hobbies
{interests}
## Personality Traits
- Engaged in online discussions
- Knowledgeable about Reddit and internet culture
- Expresses opinions confidently

## Online Behavior
- Actively participates in {subreddit_count} subreddits
- Made {post_count} posts and {comment_count} comments
- Most active in: {most_active}

## Citations
{citations}{COMPLETION_CUE}",
        interests = interest_lines(&subreddits),
        subreddit_count = subreddits.len(),
        post_count = posts.len(),
        comment_count = comments.len(),
        most_active = most_active(&subreddits),
        citations = citation_lines(posts, comments),
    )
}
