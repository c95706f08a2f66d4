//! Archive data model: posts with embedded comments, serialized with the
//! field names the collection format has always used.

use serde::{Deserialize, Serialize};

/// Author placeholder the platform substitutes for deleted accounts.
pub const DELETED_AUTHOR: &str = "[deleted]";

/// Body sentinels for content removed after posting. Rows whose whole text
/// is one of these never reach the combined table.
pub const DELETED_BODY: &str = "[deleted]";
pub const REMOVED_BODY: &str = "[removed]";

/// One submission matched by a keyword search, plus its collected comments.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    /// Self-text body; empty for link posts.
    pub selftext: String,
    pub url: String,
    /// `[deleted]` when the account no longer exists.
    pub author: String,
    pub created_utc: i64,
    pub score: i64,
    pub num_comments: u64,
    pub subreddit: String,
    pub permalink: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// One comment under a collected post. Only comments with a live author are
/// collected, so `comment_author` is never the deleted placeholder here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "comment_id")]
    pub id: String,
    #[serde(rename = "comment_body")]
    pub body: String,
    #[serde(rename = "comment_author")]
    pub author: String,
    #[serde(rename = "comment_score")]
    pub score: i64,
    #[serde(rename = "comment_created_utc")]
    pub created_utc: i64,
    /// Fullname of the parent: the post (`t3_*`) or another comment (`t1_*`).
    pub parent_id: String,
    /// Id of the post this comment belongs to.
    pub submission_id: String,
}

/// True when the account behind `author` still exists.
pub fn has_live_author(author: &str) -> bool {
    !author.is_empty() && author != DELETED_AUTHOR
}
