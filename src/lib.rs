mod archive;
mod clean;
mod collect;
mod config;
mod flatten;
mod models;
mod process;
mod progress;
mod reddit;
mod stamp;
mod throttle;
mod util;

pub use crate::config::{AppConfig, RedditCredentials, SearchConfig};
pub use crate::models::{has_live_author, Comment, Post, DELETED_AUTHOR, DELETED_BODY, REMOVED_BODY};
pub use crate::stamp::ArchiveStamp;

// Pipeline entry points.
pub use crate::collect::{dedupe_last_wins, run_collector};
pub use crate::process::run_normalizer;

// Archive layout helpers (naming, save/load, newest-file discovery).
pub use crate::archive::{
    archive_file_name, find_latest_archive, load_archive, processed_file_name, save_archive,
};

// Flattening and text cleaning.
pub use crate::clean::{clean_text, lemmatize};
pub use crate::flatten::{drop_unusable, flatten_archive, RecordKind, TextRecord};

// Expose the API client and pacing/progress helpers for binaries.
pub use crate::progress::ProgressScope;
pub use crate::reddit::RedditClient;
pub use crate::throttle::Throttle;
pub use crate::util::init_tracing_once;
