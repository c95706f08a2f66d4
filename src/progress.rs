//! Progress reporting: a count-style bar over the per-post comment loop.

use indicatif::{ProgressBar, ProgressStyle};

/// Small ergonomic wrapper around an `indicatif` count bar.
/// - `inc()` advances by one item
/// - `finish(msg)` finalizes the bar with a message
///
/// Construct with `enabled: false` to get an inert bar (tests, quiet runs).
pub struct ProgressScope {
    pb: ProgressBar,
}

impl ProgressScope {
    pub fn count(label: &str, total: u64, enabled: bool) -> Self {
        if !enabled {
            return Self { pb: ProgressBar::hidden() };
        }
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::with_template(
            "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] {percent:>3}%  \
             it/s: {per_sec}  elapsed: {elapsed_precise}  eta: {eta_precise}",
        )
        .unwrap()
        .progress_chars("█▉▊▋▌▍▎▏  ");
        pb.set_style(style);
        if !label.is_empty() {
            pb.set_message(label.to_string());
        }
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb }
    }

    #[inline]
    pub fn inc(&self) {
        self.pb.inc(1);
    }

    pub fn finish<T: Into<String>>(&self, msg: T) {
        self.pb.finish_with_message(msg.into());
    }
}
