// src/cards.rs
use std::ops::Range;

use crate::config::consts::*;
use crate::core::html::{expect_at, find_all, find_from, is_iso_date_shape};
use crate::core::sanitize::decode_reference;

/// One linked entry on the listing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// `YYYY-MM-DD` as stored in `data-date`.
    pub stored_date: String,
    /// Decoded path relative to the article root.
    pub reference: String,
    /// The href tail exactly as written (may be percent-encoded).
    pub raw_reference: String,
    /// Offsets of `stored_date` in the listing.
    pub date_span: Range<usize>,
    /// Where this card's display label may be. Starts after the date
    /// attribute, ends where the next card block starts.
    pub label_window: Range<usize>,
}

/// Scan the listing once, left to right.
///
/// A block runs from one `<div class="news-card"` to the next (or the end of
/// the document). Blocks whose opening tag does not carry a well-formed
/// `data-date`/`data-type` pair, or that have no article anchor yet, are
/// skipped without error.
pub fn extract_cards(doc: &str) -> Vec<Card> {
    let starts = find_all(doc, CARD_PREFIX);
    let mut cards = Vec::with_capacity(starts.len());

    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(doc.len());
        match parse_block(doc, start, end) {
            Some(card) => cards.push(card),
            None => logd!("Skipping card-like block at offset {start}: no date or article link"),
        }
    }
    cards
}

/// `<div class="news-card" data-date="YYYY-MM-DD" data-type="kind">` then,
/// anywhere before `end`, `<a href="news/REF" class="btn-accent btn-news">`.
fn parse_block(doc: &str, start: usize, end: usize) -> Option<Card> {
    let date_start = expect_at(doc, start + CARD_PREFIX.len(), CARD_DATE_ATTR)?;
    let date_end = date_start + 10;
    let stored_date = doc.get(date_start..date_end)?;
    if !is_iso_date_shape(stored_date) { return None; }

    let type_start = expect_at(doc, date_end, CARD_TYPE_ATTR)?;
    let type_end = type_start
        + doc[type_start..]
            .bytes()
            .take_while(u8::is_ascii_lowercase)
            .count();
    if type_end == type_start { return None; }
    let body_start = expect_at(doc, type_end, CARD_OPEN_END)?;

    let raw = find_anchor(&doc[..end], body_start)?;

    Some(Card {
        stored_date: stored_date.to_string(),
        reference: decode_reference(raw),
        raw_reference: raw.to_string(),
        date_span: date_start..date_end,
        label_window: date_end..end,
    })
}

/// First `<a href="news/REF" class="btn-accent btn-news">` at or after `from`.
/// REF never contains a quote.
fn find_anchor(doc: &str, from: usize) -> Option<&str> {
    let mut pos = from;
    while let Some(at) = find_from(doc, ANCHOR_OPEN, pos) {
        let href_start = at + ANCHOR_OPEN.len();
        let href_end = find_from(doc, "\"", href_start)?;
        if expect_at(doc, href_end, ANCHOR_CLOSE).is_some() {
            return Some(&doc[href_start..href_end]);
        }
        pos = href_start;
    }
    None
}
