#[path = "common/mod.rs"]
mod common;

use common::{make_comment, make_post};
use rcorpus::{find_latest_archive, load_archive, save_archive, ArchiveStamp};
use std::fs;

fn stamp(s: &str) -> ArchiveStamp {
    s.parse().unwrap()
}

/// Save/load round trip, and the on-disk field names the archive format has
/// always used.
#[test]
fn archive_round_trips_with_stable_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let mut post = make_post("p1", "Aid news", "body");
    post.comments = vec![make_comment("c1", "p1", "reply")];

    let path = save_archive(dir.path(), "agatha", stamp("20250401_120000"), &[post]).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "agatha_reddit_data_with_comments_20250401_120000.json"
    );

    let raw = fs::read_to_string(&path).unwrap();
    for field in [
        "\"selftext\"",
        "\"created_utc\"",
        "\"permalink\"",
        "\"comments\"",
        "\"comment_id\"",
        "\"comment_body\"",
        "\"comment_author\"",
        "\"comment_score\"",
        "\"comment_created_utc\"",
        "\"parent_id\"",
        "\"submission_id\"",
    ] {
        assert!(raw.contains(field), "archive JSON missing {field}");
    }

    let posts = load_archive(&path).unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].comments.len(), 1);
    assert_eq!(posts[0].comments[0].body, "reply");
}

/// Newest-archive selection compares parsed stamps and ignores files that
/// belong to other identifiers or don't match the naming scheme.
#[test]
fn latest_archive_is_selected_by_parsed_stamp() {
    let dir = tempfile::tempdir().unwrap();
    let old = save_archive(dir.path(), "agatha", stamp("20250101_090000"), &[]).unwrap();
    let new = save_archive(dir.path(), "agatha", stamp("20250102_080000"), &[]).unwrap();
    save_archive(dir.path(), "someone_else", stamp("20250301_000000"), &[]).unwrap();
    fs::write(dir.path().join("agatha_notes.json"), "{}").unwrap();

    let found = find_latest_archive(dir.path(), "agatha").unwrap();
    assert_eq!(found, new);
    assert_ne!(found, old);
}

#[test]
fn missing_directory_or_no_match_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(find_latest_archive(&dir.path().join("absent"), "agatha").is_none());
    assert!(find_latest_archive(dir.path(), "agatha").is_none());
}
