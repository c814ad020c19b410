// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Everything one synchronization run needs to know about its environment.
/// Paths are taken as given; nothing is looked up from the working directory
/// behind the caller's back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncOptions {
    pub listing: PathBuf,
    pub article_root: PathBuf,
    /// Resolve and report, but never write the listing.
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            listing: PathBuf::from(DEFAULT_LISTING),
            article_root: PathBuf::from(DEFAULT_ARTICLE_ROOT),
            dry_run: false,
        }
    }
}

impl SyncOptions {
    pub fn new(listing: impl Into<PathBuf>, article_root: impl Into<PathBuf>) -> Self {
        Self {
            listing: listing.into(),
            article_root: article_root.into(),
            ..Self::default()
        }
    }

    /// Default file layout (`news.html` next to `news/`) under `site_root`.
    pub fn in_dir(site_root: &Path) -> Self {
        Self::new(
            site_root.join(DEFAULT_LISTING),
            site_root.join(DEFAULT_ARTICLE_ROOT),
        )
    }

    pub fn dry_run(mut self, on: bool) -> Self {
        self.dry_run = on;
        self
    }
}
