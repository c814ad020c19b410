// src/patterns.rs
//! Ordered date matchers for the "calendar icon followed by a date" markup
//! used across article pages and listing cards.

use std::fmt;
use std::ops::Range;

use crate::config::consts::{ARTICLE_ICONS, LABEL_ICON, SPAN_CLOSE};
use crate::core::html::{date_shape_at, expect_at, find_from, skip_ws};

/// A date string found by a matcher. `span` covers only the date text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateMatch<'a> {
    pub pattern: &'static str,
    pub span: Range<usize>,
    pub text: &'a str,
}

pub trait DateMatcher {
    fn name(&self) -> &'static str;

    /// Leftmost structural match in `text`, if any.
    fn find<'a>(&self, text: &'a str) -> Option<DateMatch<'a>>;
}

/// What may sit between the icon and the date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gap {
    /// Date starts right after the icon.
    None,
    /// Any amount of whitespace, including none.
    Whitespace,
}

/// `<icon>` + gap + `Month D, YYYY` + optional whitespace + `</span>`.
#[derive(Clone, Debug)]
pub struct IconDate {
    name: &'static str,
    icon: &'static str,
    gap: Gap,
}

impl IconDate {
    pub const fn new(name: &'static str, icon: &'static str, gap: Gap) -> Self {
        Self { name, icon, gap }
    }

    /// The display label inside a listing card.
    pub const fn listing_label() -> Self {
        Self::new("listing-label", LABEL_ICON, Gap::Whitespace)
    }

    fn match_after_icon(&self, text: &str, icon_at: usize) -> Option<Range<usize>> {
        let after_icon = icon_at + self.icon.len();
        let start = match self.gap {
            Gap::None => after_icon,
            Gap::Whitespace => skip_ws(text, after_icon),
        };
        let end = date_shape_at(text, start)?;
        expect_at(text, skip_ws(text, end), SPAN_CLOSE)?;
        Some(start..end)
    }
}

impl DateMatcher for IconDate {
    fn name(&self) -> &'static str {
        self.name
    }

    fn find<'a>(&self, text: &'a str) -> Option<DateMatch<'a>> {
        let mut from = 0;
        while let Some(at) = find_from(text, self.icon, from) {
            if let Some(span) = self.match_after_icon(text, at) {
                return Some(DateMatch { pattern: self.name, text: &text[span.clone()], span });
            }
            // icons start with '<', so one byte on is still a char boundary
            from = at + 1;
        }
        None
    }
}

/// Matchers tried strictly in order. The first one that matches wins and
/// nothing after it is consulted.
pub struct PatternLibrary {
    matchers: Vec<Box<dyn DateMatcher>>,
}

impl PatternLibrary {
    pub fn new(matchers: Vec<Box<dyn DateMatcher>>) -> Self {
        Self { matchers }
    }

    /// The article page renderings seen so far, newest markup first.
    pub fn articles() -> Self {
        let [far_mr1, solid, far] = ARTICLE_ICONS;
        Self::new(vec![
            Box::new(IconDate::new("far-calendar-alt-mr-1", far_mr1, Gap::None)),
            Box::new(IconDate::new("fa-solid-calendar-alt", solid, Gap::None)),
            Box::new(IconDate::new("far-calendar-alt", far, Gap::None)),
        ])
    }

    pub fn first_match<'a>(&self, text: &'a str) -> Option<DateMatch<'a>> {
        self.matchers.iter().find_map(|m| m.find(text))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::articles()
    }
}

impl fmt::Debug for PatternLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
