//! Flattening: one row per text (post or comment) under a shared schema.

use crate::models::{Comment, Post, DELETED_BODY, REMOVED_BODY};
use serde::{Deserialize, Serialize};

/// Row kind marker in the combined table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Post,
    Comment,
}

/// One row of the combined table. Fields that do not apply to a kind are
/// `None` and serialize as empty CSV cells.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextRecord {
    pub text_id: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub title: Option<String>,
    /// Trimmed raw text: title + body for posts, the body for comments.
    pub text_content: String,
    pub created_utc: i64,
    pub score: i64,
    pub subreddit: Option<String>,
    pub parent_id: Option<String>,
    pub submission_id: String,
    /// Filled by the cleaning pass; empty until then.
    pub cleaned_text: String,
}

impl TextRecord {
    fn from_post(post: &Post) -> Self {
        let text = format!("{} {}", post.title, post.selftext);
        Self {
            text_id: post.id.clone(),
            kind: RecordKind::Post,
            title: Some(post.title.clone()),
            text_content: text.trim().to_string(),
            created_utc: post.created_utc,
            score: post.score,
            subreddit: Some(post.subreddit.clone()),
            parent_id: None,
            submission_id: post.id.clone(),
            cleaned_text: String::new(),
        }
    }

    fn from_comment(comment: &Comment) -> Self {
        Self {
            text_id: comment.id.clone(),
            kind: RecordKind::Comment,
            title: None,
            text_content: comment.body.trim().to_string(),
            created_utc: comment.created_utc,
            score: comment.score,
            subreddit: None,
            parent_id: Some(comment.parent_id.clone()),
            submission_id: comment.submission_id.clone(),
            cleaned_text: String::new(),
        }
    }

    /// True when the trimmed raw text is worth keeping: non-empty and not a
    /// deletion sentinel left behind by the platform.
    pub fn has_usable_content(&self) -> bool {
        let text = self.text_content.as_str();
        !text.is_empty() && text != DELETED_BODY && text != REMOVED_BODY
    }
}

/// Flatten an archive into rows: every post, then that post's comments.
/// No filtering happens here — N posts with C total comments always yield
/// exactly N + C rows.
pub fn flatten_archive(posts: &[Post]) -> Vec<TextRecord> {
    let mut rows = Vec::with_capacity(posts.iter().map(|p| 1 + p.comments.len()).sum());
    for post in posts {
        rows.push(TextRecord::from_post(post));
        for comment in &post.comments {
            rows.push(TextRecord::from_comment(comment));
        }
    }
    rows
}

/// Drop rows with empty or sentinel text content.
pub fn drop_unusable(rows: Vec<TextRecord>) -> Vec<TextRecord> {
    rows.into_iter().filter(TextRecord::has_usable_content).collect()
}
