// src/progress.rs
use crate::report::CardEntry;

/// Per-card status hooks for a synchronization run. The CLI prints through
/// this; tests record through it. Every hook is optional.
pub trait Progress {
    /// Cards have been extracted; `total` of them will be processed.
    fn begin(&mut self, _total: usize) {}

    /// Status line worth showing a human (e.g. "no cards found").
    fn log(&mut self, _msg: &str) {}

    /// One card finished. Called in processing order, so the last card in
    /// the listing comes first.
    fn item_done(&mut self, _entry: &CardEntry) {}

    fn finish(&mut self) {}
}
