// src/lib.rs

#[macro_use]
pub mod log;

pub mod config;
pub mod core;

pub mod cards;
pub mod patch;
pub mod patterns;
pub mod progress;
pub mod report;
pub mod resolver;
pub mod sync;

#[cfg(feature = "cli")]
pub mod cli;

pub use cards::{extract_cards, Card};
pub use config::options::SyncOptions;
pub use report::{CardOutcome, SkipReason, SyncReport};
pub use sync::{run, sync_text, SyncError};
