use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Study configuration the original data collection ran with. Used as
/// defaults so a minimal config file only needs credentials + identifier.
const DEFAULT_KEYWORDS: &[&str] = &[
    "USAID Kenya funding cuts",
    "USAID Kenya aid",
    "US aid Kenya",
    "American aid Kenya",
    "Kenya development aid",
    "foreign aid Kenya cuts",
    "USAID Kenya health",
    "USAID Kenya education",
];

const DEFAULT_SUBREDDITS: &[&str] = &[
    "news",
    "worldnews",
    "politics",
    "africa",
    "kenya",
    "globaldevelopment",
    "internationalrelations",
];

/// API credentials for a Reddit script application.
#[derive(Clone, Debug, Deserialize)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

/// Search-plan knobs with defaults matching the original collection run.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Keywords crossed with `subreddits` to form the search plan.
    pub keywords: Vec<String>,
    pub subreddits: Vec<String>,
    /// Cap on posts retained per (keyword, subreddit) search.
    pub max_posts_per_query: usize,
    /// Cap on comments retained per post.
    pub max_comments_per_post: usize,
    /// Posts created before this Unix timestamp are discarded client-side.
    pub min_created_utc: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            subreddits: DEFAULT_SUBREDDITS.iter().map(|s| s.to_string()).collect(),
            max_posts_per_query: 150,
            max_comments_per_post: 200,
            min_created_utc: 1_701_561_600, // 2023-12-03T00:00:00Z
        }
    }
}

/// Explicit configuration value handed to both pipeline entry points.
///
/// Nothing reads ambient process state after this is built; tests construct
/// one directly with synthetic paths.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub reddit: RedditCredentials,
    /// Operator-chosen string namespacing output filenames.
    pub identifier: String,
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,
    #[serde(default)]
    pub search: SearchConfig,
}

fn default_data_root() -> PathBuf {
    PathBuf::from("./data")
}

impl AppConfig {
    /// Load and validate a TOML config file. Missing or blank required
    /// fields are fatal here, before any network or filesystem work starts.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let cfg: AppConfig = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("reddit.client_id", &self.reddit.client_id),
            ("reddit.client_secret", &self.reddit.client_secret),
            ("reddit.user_agent", &self.reddit.user_agent),
            ("identifier", &self.identifier),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                bail!("config field `{name}` is required and must be non-empty");
            }
        }
        if self.search.keywords.is_empty() {
            bail!("config field `search.keywords` must list at least one keyword");
        }
        if self.search.subreddits.is_empty() {
            bail!("config field `search.subreddits` must list at least one subreddit");
        }
        Ok(())
    }

    pub fn with_data_root(mut self, root: impl AsRef<Path>) -> Self {
        self.data_root = root.as_ref().to_path_buf();
        self
    }

    /// `<data_root>/raw` — collector output, normalizer input.
    pub fn raw_dir(&self) -> PathBuf {
        self.data_root.join("raw")
    }

    /// `<data_root>/processed` — normalizer output.
    pub fn processed_dir(&self) -> PathBuf {
        self.data_root.join("processed")
    }
}
