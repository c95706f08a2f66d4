use rcorpus::{Comment, Post};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A post with sensible defaults for fields the tests don't care about.
pub fn make_post(id: &str, title: &str, selftext: &str) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        selftext: selftext.to_string(),
        url: format!("https://reddit.com/r/news/comments/{id}"),
        author: "bob".to_string(),
        created_utc: 1_710_000_000,
        score: 10,
        num_comments: 0,
        subreddit: "news".to_string(),
        permalink: format!("/r/news/comments/{id}/"),
        comments: Vec::new(),
    }
}

/// A top-level comment on `post_id` by a live author.
pub fn make_comment(id: &str, post_id: &str, body: &str) -> Comment {
    Comment {
        id: id.to_string(),
        body: body.to_string(),
        author: "alice".to_string(),
        score: 2,
        created_utc: 1_710_000_500,
        parent_id: format!("t3_{post_id}"),
        submission_id: post_id.to_string(),
    }
}

/// Read a CSV file into (header, data rows) as plain strings.
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let f = File::open(path).unwrap();
    let mut rdr = csv::Reader::from_reader(BufReader::new(f));
    let header = rdr
        .headers()
        .unwrap()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = rdr
        .records()
        .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
        .collect();
    (header, rows)
}

/// Index of a named column in the header, panicking with the name on miss.
pub fn col(header: &[String], name: &str) -> usize {
    header
        .iter()
        .position(|h| h == name)
        .unwrap_or_else(|| panic!("column {name} not found in {header:?}"))
}
