// src/resolver.rs
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::consts::{ATTR_DATE_FMT, LABEL_DATE_FMT, LABEL_PARSE_FMT};
use crate::core::sanitize::normalize_ws;
use crate::patterns::PatternLibrary;
use crate::report::SkipReason;

/// Looks up the authoritative publication date of an article page.
#[derive(Debug)]
pub struct ArticleResolver {
    root: PathBuf,
    patterns: PatternLibrary,
}

impl ArticleResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_patterns(root, PatternLibrary::articles())
    }

    pub fn with_patterns(root: impl Into<PathBuf>, patterns: PatternLibrary) -> Self {
        Self { root: root.into(), patterns }
    }

    /// `reference` is the decoded card href, relative to the article root.
    pub fn article_path(&self, reference: &str) -> PathBuf {
        self.root.join(reference)
    }

    pub fn resolve(&self, reference: &str) -> Result<NaiveDate, SkipReason> {
        let path = self.article_path(reference);
        if !path.exists() {
            return Err(SkipReason::ArticleNotFound { path });
        }
        let bytes = fs::read(&path).map_err(|e| SkipReason::ArticleUnreadable {
            message: e.to_string(),
            path: path.clone(),
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let date = date_from_text(&self.patterns, &text)?;
        logd!("{}: {}", path.display(), date);
        Ok(date)
    }
}

/// Run the pattern library over an article's text and parse what the
/// first matching pattern captured. A bad capture is final; lower-priority
/// patterns are not tried.
pub fn date_from_text(patterns: &PatternLibrary, text: &str) -> Result<NaiveDate, SkipReason> {
    let found = patterns.first_match(text).ok_or(SkipReason::DateExtractionFailure)?;
    logd!("pattern '{}' captured '{}'", found.pattern, found.text);
    parse_label_date(found.text).ok_or_else(|| SkipReason::DateParseFailure {
        captured: found.text.to_string(),
    })
}

/// `February 3, 2024` (also `February 03, 2024`, odd spacing) to a date.
/// The month must be spelled out; `Feb 3, 2024` is rejected.
pub fn parse_label_date(s: &str) -> Option<NaiveDate> {
    let s = normalize_ws(s);
    let date = NaiveDate::parse_from_str(&s, LABEL_PARSE_FMT).ok()?;
    // %B also accepts the abbreviation when parsing
    let month = s.split_whitespace().next()?;
    month
        .eq_ignore_ascii_case(&date.format("%B").to_string())
        .then_some(date)
}

/// `2024-02-03`
pub fn canonical_attr(date: NaiveDate) -> String {
    date.format(ATTR_DATE_FMT).to_string()
}

/// `February 3, 2024`
pub fn canonical_label(date: NaiveDate) -> String {
    date.format(LABEL_DATE_FMT).to_string()
}
