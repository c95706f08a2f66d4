//! Normalizer entry point: newest archive → flattened table → content
//! filtering → text cleaning → processed CSV.

use crate::archive::{find_latest_archive, load_archive, processed_file_name};
use crate::clean::clean_text;
use crate::config::AppConfig;
use crate::flatten::{drop_unusable, flatten_archive, TextRecord};
use crate::stamp::ArchiveStamp;
use crate::util::init_tracing_once;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Run one processing pass over the newest archive for the configured
/// identifier. Returns the path of the written CSV, or `None` when there is
/// no matching archive (or nothing usable in it) — reported, but not an
/// error of the process.
pub fn run_normalizer(cfg: &AppConfig) -> Result<Option<PathBuf>> {
    init_tracing_once();

    let raw_dir = cfg.raw_dir();
    let Some(archive_path) = find_latest_archive(&raw_dir, &cfg.identifier) else {
        tracing::error!(
            "No archive found for identifier '{}' in {}; nothing to process.",
            cfg.identifier,
            raw_dir.display()
        );
        return Ok(None);
    };

    tracing::info!("Loading archive {}.", archive_path.display());
    let posts = load_archive(&archive_path)?;

    let rows = flatten_archive(&posts);
    tracing::info!("Flattened {} posts into {} rows.", posts.len(), rows.len());

    let mut rows = drop_unusable(rows);
    tracing::info!("{} rows remain after content filtering.", rows.len());
    if rows.is_empty() {
        tracing::error!("Archive contains no usable text; nothing to process.");
        return Ok(None);
    }

    for row in rows.iter_mut() {
        row.cleaned_text = clean_text(&row.text_content);
    }
    rows.retain(|row| !row.cleaned_text.is_empty());
    tracing::info!("{} rows remain after cleaning.", rows.len());

    let processed_dir = cfg.processed_dir();
    fs::create_dir_all(&processed_dir)
        .with_context(|| format!("creating {}", processed_dir.display()))?;
    let out_path = processed_dir.join(processed_file_name(&cfg.identifier, ArchiveStamp::now()));
    write_rows_csv(&out_path, &rows)?;

    tracing::info!("Processed table with {} rows written to {}.", rows.len(), out_path.display());
    Ok(Some(out_path))
}

fn write_rows_csv(path: &Path, rows: &[TextRecord]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        w.serialize(row)
            .with_context(|| format!("writing row {} to {}", row.text_id, path.display()))?;
    }
    w.flush().with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
