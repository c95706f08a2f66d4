//! Blocking Reddit API client: app-only authentication, paged keyword
//! search, and comment-tree retrieval with "more" placeholder expansion.

use crate::config::RedditCredentials;
use crate::models::{has_live_author, Comment, Post, DELETED_AUTHOR};
use anyhow::{anyhow, bail, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::time::Duration;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_BASE: &str = "https://oauth.reddit.com";

/// Listing endpoints page out at 100 items per request.
const PAGE_SIZE: usize = 100;
/// The morechildren endpoint accepts at most 100 ids per call.
const MORE_BATCH: usize = 100;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

pub struct RedditClient {
    http: Client,
    token: String,
}

impl RedditClient {
    /// Authenticate with the app-only `client_credentials` grant.
    /// A rejected exchange is the fatal initialization error: nothing else
    /// in a run can work without the token, so the caller should halt.
    pub fn connect(creds: &RedditCredentials) -> Result<Self> {
        let http = Client::builder()
            .user_agent(creds.user_agent.as_str())
            .timeout(Duration::from_secs(30))
            .build()
            .context("building HTTP client")?;

        let resp = http
            .post(TOKEN_URL)
            .basic_auth(&creds.client_id, Some(&creds.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .context("requesting access token")?;
        let status = resp.status();
        if !status.is_success() {
            bail!("access token request rejected with HTTP {status}; check reddit credentials");
        }
        let tok: TokenResponse = resp.json().context("decoding access token response")?;
        tracing::info!("Authenticated with Reddit (token valid for {}s).", tok.expires_in);

        Ok(Self { http, token: tok.access_token })
    }

    fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{API_BASE}{path}");
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .with_context(|| format!("GET {path}"))?;
        let status = resp.status();
        if !status.is_success() {
            bail!("GET {path} returned HTTP {status}");
        }
        resp.json().with_context(|| format!("decoding response body for {path}"))
    }

    /// Relevance-ranked search for `query` in one subreddit. Fetches up to
    /// `limit` results (following `after` cursors across pages) and keeps
    /// those created at or after `min_created_utc`. Returned posts carry no
    /// comments yet.
    pub fn search_posts(
        &self,
        subreddit: &str,
        query: &str,
        limit: usize,
        min_created_utc: i64,
    ) -> Result<Vec<Post>> {
        let path = format!("/r/{subreddit}/search");
        let mut posts = Vec::new();
        let mut fetched = 0usize;
        let mut after: Option<String> = None;

        while fetched < limit {
            let page = (limit - fetched).min(PAGE_SIZE);
            let mut q: Vec<(&str, String)> = vec![
                ("q", query.to_string()),
                ("restrict_sr", "on".to_string()),
                ("sort", "relevance".to_string()),
                ("t", "all".to_string()),
                ("limit", page.to_string()),
                ("raw_json", "1".to_string()),
            ];
            if let Some(cursor) = &after {
                q.push(("after", cursor.clone()));
            }

            let listing = self.get_json(&path, &q)?;
            let children = listing_children(&listing);
            if children.is_empty() {
                break;
            }
            fetched += children.len();
            for child in &children {
                if let Some(post) = post_from_thing(child) {
                    if post.created_utc >= min_created_utc {
                        posts.push(post);
                    }
                }
            }

            after = listing
                .pointer("/data/after")
                .and_then(Value::as_str)
                .map(|s| s.to_string());
            if after.is_none() {
                break;
            }
        }

        Ok(posts)
    }

    /// Retrieve up to `limit` comments for one post, breadth-first, keeping
    /// only comments whose author still exists. Truncated branches arrive as
    /// `more` placeholder nodes; their child ids are expanded through the
    /// morechildren endpoint until the cap is hit or nothing is left.
    pub fn post_comments(&self, post_id: &str, limit: usize) -> Result<Vec<Comment>> {
        let payload = self.get_json(
            &format!("/comments/{post_id}"),
            &[("limit", "500".to_string()), ("raw_json", "1".to_string())],
        )?;
        // The endpoint returns a two-element array: the post listing, then
        // the top-level comment listing.
        let comment_listing = payload
            .get(1)
            .ok_or_else(|| anyhow!("comment payload for {post_id} is missing its second listing"))?;

        let mut queue: VecDeque<Value> = listing_children(comment_listing).into();
        let mut pending_more: Vec<String> = Vec::new();
        // The expansion endpoint may hand back placeholders repeating ids we
        // already asked for; each id is requested at most once.
        let mut requested: std::collections::HashSet<String> = std::collections::HashSet::new();
        let mut comments = Vec::new();

        while comments.len() < limit {
            let Some(node) = queue.pop_front() else {
                if pending_more.is_empty() {
                    break;
                }
                let take = pending_more.len().min(MORE_BATCH);
                let batch: Vec<String> = pending_more.drain(..take).collect();
                queue.extend(self.more_children(post_id, &batch)?);
                continue;
            };

            match node.get("kind").and_then(Value::as_str) {
                Some("t1") => {
                    let Some(data) = node.get("data") else { continue };
                    // Nested replies go to the back of the queue so the
                    // traversal stays level-ordered under the cap.
                    if let Some(replies) = data.get("replies") {
                        queue.extend(listing_children(replies));
                    }
                    if let Some(comment) = comment_from_data(data, post_id) {
                        if has_live_author(&comment.author) {
                            comments.push(comment);
                        }
                    }
                }
                Some("more") => {
                    if let Some(ids) = data_children_ids(&node) {
                        pending_more.extend(ids.into_iter().filter(|id| requested.insert(id.clone())));
                    }
                }
                _ => {}
            }
        }

        Ok(comments)
    }

    fn more_children(&self, post_id: &str, ids: &[String]) -> Result<Vec<Value>> {
        let q: Vec<(&str, String)> = vec![
            ("api_type", "json".to_string()),
            ("link_id", format!("t3_{post_id}")),
            ("children", ids.join(",")),
            ("raw_json", "1".to_string()),
        ];
        let resp = self.get_json("/api/morechildren", &q)?;
        Ok(resp
            .pointer("/json/data/things")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }
}

/// Children of a `Listing` envelope. Reddit encodes "no replies" as an empty
/// string instead of a listing, so anything non-conforming yields `[]`.
fn listing_children(listing: &Value) -> Vec<Value> {
    listing
        .pointer("/data/children")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Child ids carried by a `more` placeholder node.
fn data_children_ids(node: &Value) -> Option<Vec<String>> {
    let ids = node.pointer("/data/children")?.as_array()?;
    Some(
        ids.iter()
            .filter_map(Value::as_str)
            .map(|s| s.to_string())
            .collect(),
    )
}

fn str_field(v: &Value, key: &str) -> String {
    v.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Numeric fields arrive as floats on some endpoints and integers on
/// others; both collapse to whole seconds / whole scores.
fn i64_field(v: &Value, key: &str) -> i64 {
    v.get(key).and_then(Value::as_f64).map(|f| f as i64).unwrap_or(0)
}

fn author_field(v: &Value) -> String {
    match v.get("author").and_then(Value::as_str) {
        Some(a) if !a.is_empty() => a.to_string(),
        _ => DELETED_AUTHOR.to_string(),
    }
}

/// Build a `Post` from one `t3` search-listing child. Returns `None` for
/// malformed children (no id), which the search loop just skips.
fn post_from_thing(thing: &Value) -> Option<Post> {
    let data = thing.get("data")?;
    let id = data.get("id").and_then(Value::as_str)?.to_string();
    Some(Post {
        id,
        title: str_field(data, "title"),
        selftext: str_field(data, "selftext"),
        url: str_field(data, "url"),
        author: author_field(data),
        created_utc: i64_field(data, "created_utc"),
        score: i64_field(data, "score"),
        num_comments: i64_field(data, "num_comments").max(0) as u64,
        subreddit: str_field(data, "subreddit"),
        permalink: str_field(data, "permalink"),
        comments: Vec::new(),
    })
}

/// Build a `Comment` from a `t1` node's data object.
fn comment_from_data(data: &Value, post_id: &str) -> Option<Comment> {
    let id = data.get("id").and_then(Value::as_str)?.to_string();
    Some(Comment {
        id,
        body: str_field(data, "body"),
        author: author_field(data),
        score: i64_field(data, "score"),
        created_utc: i64_field(data, "created_utc"),
        parent_id: str_field(data, "parent_id"),
        submission_id: post_id.to_string(),
    })
}
