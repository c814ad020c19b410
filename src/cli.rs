// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::cards::extract_cards;
use crate::config::consts::{DEFAULT_ARTICLE_ROOT, DEFAULT_LISTING};
use crate::config::options::SyncOptions;
use crate::progress::Progress;
use crate::report::{CardEntry, CardOutcome};
use crate::sync;

#[derive(Parser, Debug)]
#[command(name = "card_sync", version)]
#[command(about = "Update news card dates from the article pages they link to")]
pub struct Args {
    /// Listing page with the news cards
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LISTING)]
    pub listing: PathBuf,

    /// Directory the card links point into
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ARTICLE_ROOT)]
    pub articles: PathBuf,

    /// Report what would change without writing the listing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the cards found in the listing and exit
    #[arg(long)]
    pub list: bool,

    /// Debug logging and one line per card
    #[arg(short, long)]
    pub verbose: bool,

    /// Also write a debug log to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn options(&self) -> SyncOptions {
        SyncOptions::new(&self.listing, &self.articles).dry_run(self.dry_run)
    }
}

/// Per-card lines on stdout when `--verbose` is on.
struct ConsoleProgress {
    verbose: bool,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        if self.verbose {
            println!("Checking {total} cards…");
        }
    }

    fn item_done(&mut self, entry: &CardEntry) {
        if self.verbose && entry.outcome != CardOutcome::Unchanged {
            println!("  {entry}");
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose, args.log_file.as_deref())
        .map_err(|e| eyre!("could not set up logging: {e}"))?;

    let options = args.options();
    if args.list {
        return list_cards(&options);
    }

    let mut progress = ConsoleProgress { verbose: args.verbose };
    let report = sync::run(&options, Some(&mut progress))?;

    if report.scanned() == 0 {
        println!("No news cards found in {}", options.listing.display());
        return Ok(());
    }

    print!("{report}");
    if report.dry_run {
        println!(
            "Dry run: {} of {} cards would be updated in {}",
            report.updated(),
            report.scanned(),
            options.listing.display()
        );
    } else {
        println!(
            "Updated {} of {} cards in {}",
            report.updated(),
            report.scanned(),
            options.listing.display()
        );
    }
    Ok(())
}

fn list_cards(options: &SyncOptions) -> Result<()> {
    let text = std::fs::read_to_string(&options.listing)
        .wrap_err_with(|| format!("could not read listing {}", options.listing.display()))?;
    for card in extract_cards(&text) {
        println!("{},{}", card.stored_date, card.reference);
    }
    Ok(())
}
