//! Reddit profile fetcher.
//!
//! Resolves a username (or profile URL), authenticates with client-credentials
//! OAuth, and pages through the user's newest submissions and comments. The
//! top-level [`fetch_profile`] never fails: any error degrades to an empty
//! profile for the resolved username.

pub mod client;
pub mod error;
pub mod progress;
pub mod source;
pub mod types;
pub mod username;

pub use client::RedditClient;
pub use error::RedditError;
pub use progress::{FetchProgress, ListingKind, NoProgress};
pub use source::{fetch_profile, ProfileSource, RedditSource};
pub use username::resolve_username;
