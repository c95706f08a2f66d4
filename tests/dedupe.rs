#[path = "common/mod.rs"]
mod common;

use common::make_post;
use rcorpus::dedupe_last_wins;

/// Two collected entries sharing an id merge to exactly one entry — the one
/// seen later in collection order.
#[test]
fn last_occurrence_wins_for_duplicate_ids() {
    let posts = vec![
        make_post("p1", "first sighting", ""),
        make_post("p2", "unrelated", ""),
        make_post("p1", "second sighting", "with body"),
    ];

    let unique = dedupe_last_wins(posts);

    assert_eq!(unique.len(), 2);
    let p1 = unique.iter().find(|p| p.id == "p1").unwrap();
    assert_eq!(p1.title, "second sighting");
    assert_eq!(p1.selftext, "with body");
}

/// Ids keep the order they were first encountered in, even when a later
/// duplicate replaces the payload.
#[test]
fn first_seen_order_is_preserved() {
    let posts = vec![
        make_post("a", "a1", ""),
        make_post("b", "b1", ""),
        make_post("c", "c1", ""),
        make_post("a", "a2", ""),
    ];

    let ids: Vec<String> = dedupe_last_wins(posts).into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn distinct_ids_pass_through_untouched() {
    let posts = vec![make_post("x", "x", ""), make_post("y", "y", "")];
    assert_eq!(dedupe_last_wins(posts).len(), 2);
}
