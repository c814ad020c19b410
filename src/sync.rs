// src/sync.rs
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::{
    cards::{extract_cards, Card},
    config::options::SyncOptions,
    patch::{Edit, Patcher},
    patterns::{DateMatcher, IconDate},
    progress::Progress,
    report::{CardEntry, CardOutcome, SyncReport},
    resolver::{canonical_attr, canonical_label, ArticleResolver},
};

/// Conditions that stop a run. Per-card problems never end up here.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("article directory {} does not exist or is not a directory", path.display())]
    ArticleRootMissing { path: PathBuf },
    #[error("could not read listing {}", path.display())]
    ListingUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write listing {}", path.display())]
    ListingWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Full run against the filesystem: read the listing, sync every card,
/// write the listing back only if something changed.
pub fn run(
    options: &SyncOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<SyncReport, SyncError> {
    let text = fs::read_to_string(&options.listing).map_err(|source| {
        SyncError::ListingUnreadable { path: options.listing.clone(), source }
    })?;
    if !options.article_root.is_dir() {
        return Err(SyncError::ArticleRootMissing { path: options.article_root.clone() });
    }

    logf!(
        "Syncing {} against {}",
        options.listing.display(),
        options.article_root.display()
    );
    let resolver = ArticleResolver::new(&options.article_root);
    let (updated, mut report) = sync_text(&text, &resolver, progress);
    report.dry_run = options.dry_run;

    if !report.has_changes() {
        logf!("{} is up to date", options.listing.display());
    } else if options.dry_run {
        logf!("Dry run: {} edits not written", report.edits);
    } else {
        fs::write(&options.listing, updated).map_err(|source| SyncError::ListingWrite {
            path: options.listing.clone(),
            source,
        })?;
        report.written = true;
        logf!("Wrote {} ({} edits)", options.listing.display(), report.edits);
    }

    Ok(report)
}

/// Sync one listing held in memory. Returns the new text (identical to
/// `doc` when nothing changed) and the per-card report.
///
/// Cards are handled last to first, and inside a card the label goes
/// before the attribute, so every edit lands left of the previous one and
/// the offsets taken from the original scan never go stale.
pub fn sync_text(
    doc: &str,
    resolver: &ArticleResolver,
    mut progress: Option<&mut dyn Progress>,
) -> (String, SyncReport) {
    let cards = extract_cards(doc);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(cards.len());
    }
    if cards.is_empty() {
        logw!("No cards found in listing");
        if let Some(p) = progress.as_deref_mut() {
            p.log("No cards found");
        }
    }

    let label = IconDate::listing_label();
    let mut patcher = Patcher::new(doc.to_owned());
    let mut entries = Vec::with_capacity(cards.len());

    for card in cards.iter().rev() {
        let outcome = sync_card(card, resolver, &label, &mut patcher);
        let entry = CardEntry {
            reference: card.reference.clone(),
            stored_date: card.stored_date.clone(),
            outcome,
        };
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&entry);
        }
        entries.push(entry);
    }
    entries.reverse();

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let report = SyncReport {
        entries,
        edits: patcher.edits(),
        written: false,
        dry_run: false,
    };
    (patcher.into_text(), report)
}

fn sync_card(
    card: &Card,
    resolver: &ArticleResolver,
    label: &impl DateMatcher,
    patcher: &mut Patcher,
) -> CardOutcome {
    let date = match resolver.resolve(&card.reference) {
        Ok(date) => date,
        Err(reason) => {
            logw!("{}: {}", card.reference, reason);
            return CardOutcome::Skipped(reason);
        }
    };

    let attr = canonical_attr(date);
    if attr == card.stored_date {
        return CardOutcome::Unchanged;
    }

    // Window text is untouched so far: every earlier edit was to its right.
    let label_span = patcher
        .text()
        .get(card.label_window.clone())
        .and_then(|window| label.find(window))
        .map(|m| card.label_window.start + m.span.start..card.label_window.start + m.span.end);

    let mut edits = Vec::with_capacity(2);
    if let Some(span) = &label_span {
        edits.push(Edit::new(span.clone(), canonical_label(date)));
    }
    edits.push(Edit::new(card.date_span.clone(), attr.clone()));

    match patcher.replace_all(&edits) {
        Ok(delta) => logd!("{}: {} -> {} ({delta:+} bytes)", card.reference, card.stored_date, attr),
        Err(e) => {
            loge!("{}: {}", card.reference, e);
            return CardOutcome::Skipped(e.into());
        }
    }

    let from = card.stored_date.clone();
    if label_span.is_some() {
        CardOutcome::Updated { from, to: attr }
    } else {
        logw!("{}: date label not found, only data-date was updated", card.reference);
        CardOutcome::LabelNotFound { from, to: attr }
    }
}
