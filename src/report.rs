// src/report.rs
use std::fmt;
use std::path::PathBuf;

use crate::patch::PatchError;

/// Why a card was left alone. None of these stop the run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("article not found: {}", path.display())]
    ArticleNotFound { path: PathBuf },
    #[error("could not read {}: {message}", path.display())]
    ArticleUnreadable { path: PathBuf, message: String },
    #[error("could not extract a date from the article")]
    DateExtractionFailure,
    #[error("article date '{captured}' is not a valid date")]
    DateParseFailure { captured: String },
    #[error("edit rejected: {0}")]
    PatchRejected(#[from] PatchError),
}

impl SkipReason {
    pub fn kind(&self) -> &'static str {
        match self {
            SkipReason::ArticleNotFound { .. } => "ArticleNotFound",
            SkipReason::ArticleUnreadable { .. } => "ArticleUnreadable",
            SkipReason::DateExtractionFailure => "DateExtractionFailure",
            SkipReason::DateParseFailure { .. } => "DateParseFailure",
            SkipReason::PatchRejected(_) => "PatchRejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardOutcome {
    /// Stored date already matches the article.
    Unchanged,
    /// Attribute and label both rewritten.
    Updated { from: String, to: String },
    /// Attribute rewritten, label not found in the card. The attribute edit
    /// is kept.
    LabelNotFound { from: String, to: String },
    Skipped(SkipReason),
}

impl CardOutcome {
    /// Whether this card changed the listing text.
    pub fn wrote(&self) -> bool {
        matches!(self, CardOutcome::Updated { .. } | CardOutcome::LabelNotFound { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CardOutcome::Unchanged => "Unchanged",
            CardOutcome::Updated { .. } => "Updated",
            CardOutcome::LabelNotFound { .. } => "LabelNotFound",
            CardOutcome::Skipped(reason) => reason.kind(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardEntry {
    pub reference: String,
    pub stored_date: String,
    pub outcome: CardOutcome,
}

impl fmt::Display for CardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: ", self.outcome.kind(), self.reference)?;
        match &self.outcome {
            CardOutcome::Unchanged => write!(f, "{} is current", self.stored_date),
            CardOutcome::Updated { from, to } => write!(f, "{from} -> {to}"),
            CardOutcome::LabelNotFound { from, to } => {
                write!(f, "{from} -> {to}, display label not found (left as is)")
            }
            CardOutcome::Skipped(reason) => write!(f, "{reason}"),
        }
    }
}

/// Result of one synchronization run. Entries are in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub entries: Vec<CardEntry>,
    /// Text substitutions applied to the working copy.
    pub edits: usize,
    /// The listing file was rewritten.
    pub written: bool,
    pub dry_run: bool,
}

impl SyncReport {
    pub fn scanned(&self) -> usize {
        self.entries.len()
    }

    /// Cards whose attribute was rewritten, including partial updates.
    pub fn updated(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.wrote()).count()
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, CardOutcome::Unchanged))
    }

    pub fn partial(&self) -> usize {
        self.count(|o| matches!(o, CardOutcome::LabelNotFound { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, CardOutcome::Skipped(_)))
    }

    pub fn has_changes(&self) -> bool {
        self.edits > 0
    }

    /// Skips and partial updates, for the summary.
    pub fn issues(&self) -> impl Iterator<Item = &CardEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, CardOutcome::Skipped(_) | CardOutcome::LabelNotFound { .. }))
    }

    pub fn skip_reasons(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            CardOutcome::Skipped(reason) => Some((e.reference.as_str(), reason)),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&CardOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let updated = if self.dry_run { "to update" } else { "updated" };
        writeln!(
            f,
            "Scanned {} cards: {} {updated}, {} unchanged, {} skipped",
            self.scanned(),
            self.updated(),
            self.unchanged(),
            self.skipped(),
        )?;
        for entry in self.issues() {
            writeln!(f, "  {entry}")?;
        }
        Ok(())
    }
}
