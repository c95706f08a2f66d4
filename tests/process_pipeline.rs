#[path = "common/mod.rs"]
mod common;

use common::{col, make_comment, make_post, read_csv};
use rcorpus::{
    run_normalizer, save_archive, AppConfig, ArchiveStamp, RedditCredentials, SearchConfig,
};
use std::path::Path;

fn test_config(root: &Path) -> AppConfig {
    AppConfig {
        reddit: RedditCredentials {
            client_id: "cid".to_string(),
            client_secret: "secret".to_string(),
            user_agent: "rcorpus integration tests".to_string(),
        },
        identifier: "agatha".to_string(),
        data_root: root.to_path_buf(),
        search: SearchConfig::default(),
    }
}

fn stamp(s: &str) -> ArchiveStamp {
    s.parse().unwrap()
}

/// End-to-end over a two-post archive: one post with an empty body (its
/// title carries the text), one removed post with a stop-word-only comment.
/// Exactly one row must survive into the CSV.
#[test]
fn two_post_archive_yields_single_csv_row() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(dir.path());

    let keeper = make_post("p1", "Funding cuts hit health programs", "");
    let mut removed = make_post("p2", "", "[removed]");
    removed.comments = vec![make_comment("c1", "p2", "it was the of and")];

    save_archive(&cfg.raw_dir(), &cfg.identifier, stamp("20250401_120000"), &[keeper, removed])
        .unwrap();

    let out = run_normalizer(&cfg).unwrap().expect("a CSV should be produced");
    let (header, rows) = read_csv(&out);

    assert_eq!(
        header,
        [
            "text_id",
            "type",
            "title",
            "text_content",
            "created_utc",
            "score",
            "subreddit",
            "parent_id",
            "submission_id",
            "cleaned_text",
        ]
    );
    assert_eq!(rows.len(), 1, "only the titled post survives cleaning");

    let row = &rows[0];
    assert_eq!(row[col(&header, "text_id")], "p1");
    assert_eq!(row[col(&header, "type")], "post");
    assert_eq!(row[col(&header, "text_content")], "Funding cuts hit health programs");
    assert_eq!(row[col(&header, "cleaned_text")], "funding cut hit health program");
    // fields that don't apply to posts stay empty
    assert_eq!(row[col(&header, "parent_id")], "");
}

/// Cleaned text in the output carries no URLs, hashtags, mentions, digits,
/// or uppercase, and comment rows keep their parentage columns.
#[test]
fn cleaning_is_applied_per_row() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(dir.path());

    let mut post = make_post("p1", "Kenya aid", "");
    post.comments = vec![make_comment(
        "c1",
        "p1",
        "Check https://x.co NOW!!! #aid @bob 123",
    )];
    save_archive(&cfg.raw_dir(), &cfg.identifier, stamp("20250401_120000"), &[post]).unwrap();

    let out = run_normalizer(&cfg).unwrap().unwrap();
    let (header, rows) = read_csv(&out);
    assert_eq!(rows.len(), 2);

    let comment_row = rows
        .iter()
        .find(|r| r[col(&header, "type")] == "comment")
        .unwrap();
    let cleaned = &comment_row[col(&header, "cleaned_text")];
    assert_eq!(cleaned, "check");
    assert!(!cleaned.contains("http"));
    assert!(!cleaned.chars().any(|c| c.is_ascii_digit() || c.is_uppercase()));
    assert_eq!(comment_row[col(&header, "parent_id")], "t3_p1");
    assert_eq!(comment_row[col(&header, "submission_id")], "p1");
}

/// The normalizer reads the newest archive for the identifier, not an older
/// one sitting in the same directory.
#[test]
fn newest_archive_feeds_the_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(dir.path());

    let stale = make_post("old1", "Stale era coverage", "");
    let fresh = make_post("new1", "Fresh development coverage", "");
    save_archive(&cfg.raw_dir(), &cfg.identifier, stamp("20250101_090000"), &[stale]).unwrap();
    save_archive(&cfg.raw_dir(), &cfg.identifier, stamp("20250102_080000"), &[fresh]).unwrap();

    let out = run_normalizer(&cfg).unwrap().unwrap();
    let (header, rows) = read_csv(&out);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][col(&header, "text_id")], "new1");
}

/// Missing input is reported, not fatal: no archive means no output file.
#[test]
fn missing_archive_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(dir.path());

    let outcome = run_normalizer(&cfg).unwrap();
    assert!(outcome.is_none());
    assert!(!cfg.processed_dir().exists());
}
