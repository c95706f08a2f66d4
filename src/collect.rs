//! Collector entry point: run every configured keyword × subreddit search,
//! dedupe the matches, attach each unique post's comments, and write one
//! JSON archive.

use crate::archive::save_archive;
use crate::config::AppConfig;
use crate::models::Post;
use crate::progress::ProgressScope;
use crate::reddit::RedditClient;
use crate::stamp::ArchiveStamp;
use crate::throttle::Throttle;
use crate::util::init_tracing_once;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Fixed pauses between API calls. Rate-limit accommodation, not scheduling.
const SEARCH_DELAY: Duration = Duration::from_secs(1);
const COMMENT_DELAY: Duration = Duration::from_millis(500);

/// Run one collection pass and return the path of the written archive.
///
/// Failure semantics: a failed token exchange aborts the run; a failed
/// search or comment fetch is logged and contributes nothing, and the run
/// continues.
pub fn run_collector(cfg: &AppConfig, progress: bool) -> Result<PathBuf> {
    init_tracing_once();

    let client = RedditClient::connect(&cfg.reddit)?;

    let mut collected: Vec<Post> = Vec::new();
    let mut search_pause = Throttle::new(SEARCH_DELAY);
    for keyword in &cfg.search.keywords {
        for subreddit in &cfg.search.subreddits {
            search_pause.wait();
            match client.search_posts(
                subreddit,
                keyword,
                cfg.search.max_posts_per_query,
                cfg.search.min_created_utc,
            ) {
                Ok(posts) => {
                    tracing::info!(
                        "Found {} relevant posts for '{}' in r/{}.",
                        posts.len(),
                        keyword,
                        subreddit
                    );
                    collected.extend(posts);
                }
                Err(err) => {
                    tracing::warn!(
                        "Search for '{}' in r/{} failed (treated as zero results): {:#}",
                        keyword,
                        subreddit,
                        err
                    );
                }
            }
        }
    }

    tracing::info!("Collected {} posts before deduplication.", collected.len());
    let mut unique = dedupe_last_wins(collected);
    tracing::info!("Processing {} unique posts for comment collection.", unique.len());

    let pb = ProgressScope::count("Collecting comments", unique.len() as u64, progress);
    let mut comment_pause = Throttle::new(COMMENT_DELAY);
    let mut total_comments = 0usize;
    for post in unique.iter_mut() {
        comment_pause.wait();
        match client.post_comments(&post.id, cfg.search.max_comments_per_post) {
            Ok(comments) => {
                total_comments += comments.len();
                post.comments = comments;
            }
            Err(err) => {
                tracing::warn!(
                    "Comment fetch for post {} failed (kept without comments): {:#}",
                    post.id,
                    err
                );
            }
        }
        pb.inc();
    }
    pb.finish("comments collected");

    let path = save_archive(&cfg.raw_dir(), &cfg.identifier, ArchiveStamp::now(), &unique)?;
    tracing::info!(
        "Archive with {} posts and {} comments written to {}.",
        unique.len(),
        total_comments,
        path.display()
    );
    Ok(path)
}

/// Deduplicate posts by id. The last-seen occurrence of an id wins, and ids
/// keep the order in which they were first encountered.
pub fn dedupe_last_wins(posts: Vec<Post>) -> Vec<Post> {
    let mut slot: ahash::AHashMap<String, usize> = ahash::AHashMap::with_capacity(posts.len());
    let mut ordered: Vec<Post> = Vec::with_capacity(posts.len());
    for post in posts {
        match slot.get(&post.id) {
            Some(&i) => ordered[i] = post,
            None => {
                slot.insert(post.id.clone(), ordered.len());
                ordered.push(post);
            }
        }
    }
    ordered
}
