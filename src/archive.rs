//! Archive file layout: naming, JSON save/load, and newest-file discovery.

use crate::models::Post;
use crate::stamp::ArchiveStamp;
use anyhow::{Context, Result};
use regex::Regex;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// `<identifier>_reddit_data_with_comments_<stamp>.json`
pub fn archive_file_name(identifier: &str, stamp: ArchiveStamp) -> String {
    format!("{identifier}_reddit_data_with_comments_{stamp}.json")
}

/// `<identifier>_reddit_processed_data_<stamp>.csv`
pub fn processed_file_name(identifier: &str, stamp: ArchiveStamp) -> String {
    format!("{identifier}_reddit_processed_data_{stamp}.csv")
}

/// Write the collected posts (with embedded comments) as one pretty-printed
/// JSON array. Creates the directory if needed and returns the full path.
pub fn save_archive(
    raw_dir: &Path,
    identifier: &str,
    stamp: ArchiveStamp,
    posts: &[Post],
) -> Result<PathBuf> {
    fs::create_dir_all(raw_dir)
        .with_context(|| format!("creating {}", raw_dir.display()))?;
    let path = raw_dir.join(archive_file_name(identifier, stamp));
    let w = BufWriter::new(
        File::create(&path).with_context(|| format!("creating {}", path.display()))?,
    );
    serde_json::to_writer_pretty(w, posts)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn load_archive(path: &Path) -> Result<Vec<Post>> {
    let r = BufReader::new(
        File::open(path).with_context(|| format!("opening {}", path.display()))?,
    );
    serde_json::from_reader(r).with_context(|| format!("parsing {}", path.display()))
}

/// Find the newest archive for `identifier` in `raw_dir`.
///
/// The stamp in each matching filename is parsed and the maximum parsed
/// stamp wins; selection does not rely on the directory's string ordering.
/// Returns `None` when no archive matches (including a missing directory).
pub fn find_latest_archive(raw_dir: &Path, identifier: &str) -> Option<PathBuf> {
    let re = Regex::new(&format!(
        r"^{}_reddit_data_with_comments_(\d{{8}}_\d{{6}})\.json$",
        regex::escape(identifier)
    ))
    .expect("valid archive name regex");

    let mut newest: Option<(ArchiveStamp, PathBuf)> = None;
    for entry in WalkDir::new(raw_dir).min_depth(1).max_depth(1) {
        let Ok(ent) = entry else { continue };
        let Some(name) = ent.file_name().to_str() else { continue };
        let Some(caps) = re.captures(name) else { continue };
        let Ok(stamp) = caps[1].parse::<ArchiveStamp>() else { continue };
        if newest.as_ref().map_or(true, |(best, _)| stamp > *best) {
            newest = Some((stamp, ent.path().to_path_buf()));
        }
    }
    newest.map(|(_, path)| path)
}
