//! Deterministic template persona.

use redpersona_core::{distinct_subreddits, ProfileData};

use crate::sections::{citation_lines, interest_lines, most_active};

/// Subreddits listed under "Interests & Hobbies".
const TOP_SUBREDDITS: usize = 7;

/// Renders the fallback persona document for `data`.
///
/// Pure and infallible. An empty profile yields zero counts and an empty
/// citation list.
#[must_use]
pub fn build_template_persona(data: &ProfileData) -> String {
    let username = &data.username;
    let subreddits = distinct_subreddits(&data.posts, &data.comments);
    let top: Vec<String> = subreddits.iter().take(TOP_SUBREDDITS).cloned().collect();

    format!(
        "# PERSONA: {upper}

## Basic Information
- **Age**: Adult Redditor
- **Location**: United States (likely)
- **Occupation**: Tech industry professional (based on Reddit interests)

## Background & Story
{username} is an active Reddit user who participates in various communities. They appear knowledgeable about technology and internet culture, and have been on Reddit long enough to understand the platform's culture and norms.

## Interests & Hobbies
{interests}
## Personality Traits
- Engaged in online discussions
- Knowledgeable about Reddit and internet culture
- Expresses opinions confidently in various communities

## Online Behavior
- Actively participates in {subreddit_count} different subreddits
- Has made {post_count} posts and {comment_count} comments in recent history
- Most active in: {most_active}

## Citations
{citations}",
        upper = username.to_uppercase(),
        interests = interest_lines(&top),
        subreddit_count = subreddits.len(),
        post_count = data.posts.len(),
        comment_count = data.comments.len(),
        most_active = most_active(&top),
        citations = citation_lines(&data.posts, &data.comments),
    )
}
