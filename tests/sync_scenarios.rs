// tests/sync_scenarios.rs
mod common;

use std::fs;
use std::time::{Duration, SystemTime};

use card_sync::progress::Progress;
use card_sync::report::CardEntry;
use card_sync::{run, CardOutcome, SkipReason, SyncError};
use common::*;

fn pin_mtime(site: &Site) -> SystemTime {
    let when = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
    fs::File::options()
        .write(true)
        .open(site.listing_path())
        .unwrap()
        .set_modified(when)
        .unwrap();
    when
}

fn mtime(site: &Site) -> SystemTime {
    fs::metadata(site.listing_path()).unwrap().modified().unwrap()
}

#[test]
fn stale_card_gets_attribute_and_label() {
    let site = Site::new();
    site.write_listing(&listing(&[card("2024-01-01", "alpha.html", "January 1, 2024")]));
    site.write_article("alpha.html", &article("February 3, 2024"));

    let report = run(&site.options(), None).unwrap();

    assert_eq!(
        site.read_listing(),
        listing(&[card("2024-02-03", "alpha.html", "February 3, 2024")])
    );
    assert_eq!(report.scanned(), 1);
    assert_eq!(report.updated(), 1);
    assert_eq!(report.edits, 2);
    assert!(report.written);
    assert_eq!(
        report.entries[0].outcome,
        CardOutcome::Updated { from: "2024-01-01".into(), to: "2024-02-03".into() }
    );
}

#[test]
fn missing_article_is_reported_and_listing_untouched() {
    let site = Site::new();
    let text = listing(&[card("2024-01-01", "gone.html", "January 1, 2024")]);
    site.write_listing(&text);
    let before = pin_mtime(&site);

    let report = run(&site.options(), None).unwrap();

    assert_eq!(site.read_listing(), text);
    assert_eq!(mtime(&site), before);
    assert!(!report.written);
    let reasons: Vec<_> = report.skip_reasons().collect();
    assert_eq!(reasons.len(), 1);
    assert_eq!(reasons[0].0, "gone.html");
    assert_eq!(
        reasons[0].1,
        &SkipReason::ArticleNotFound { path: site.article_dir().join("gone.html") }
    );
}

#[test]
fn impossible_article_date_is_a_parse_failure() {
    let site = Site::new();
    let text = listing(&[card("2024-01-01", "odd.html", "January 1, 2024")]);
    site.write_listing(&text);
    site.write_article("odd.html", &article("Febtober 40, 2024"));

    let report = run(&site.options(), None).unwrap();

    assert_eq!(site.read_listing(), text);
    assert_eq!(
        report.entries[0].outcome,
        CardOutcome::Skipped(SkipReason::DateParseFailure { captured: "Febtober 40, 2024".into() })
    );
    assert!(!report.written);
}

#[test]
fn abbreviated_month_in_article_leaves_card_alone() {
    let site = Site::new();
    let text = listing(&[card("2024-01-01", "short.html", "January 1, 2024")]);
    site.write_listing(&text);
    site.write_article("short.html", &article("Feb 3, 2024"));

    let report = run(&site.options(), None).unwrap();

    assert_eq!(site.read_listing(), text);
    assert_eq!(
        report.entries[0].outcome,
        CardOutcome::Skipped(SkipReason::DateParseFailure { captured: "Feb 3, 2024".into() })
    );
    assert_eq!(report.edits, 0);
    assert!(!report.written);
}

#[derive(Default)]
struct Tally {
    total: usize,
    done: Vec<String>,
}

impl Progress for Tally {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, entry: &CardEntry) { self.done.push(entry.reference.clone()); }
}

#[test]
fn run_reports_each_card_to_progress() {
    let site = Site::new();
    site.write_listing(&listing(&[
        card("2024-01-01", "a.html", "January 1, 2024"),
        card("2024-01-01", "b.html", "January 1, 2024"),
    ]));
    site.write_article("a.html", &article("January 2, 2024"));
    site.write_article("b.html", &article("January 1, 2024"));

    let mut tally = Tally::default();
    let report = run(&site.options(), Some(&mut tally)).unwrap();

    assert_eq!(tally.total, 2);
    assert_eq!(tally.done, vec!["b.html", "a.html"]);
    assert_eq!(report.updated(), 1);
    assert!(report.written);
}

#[test]
fn card_already_in_sync_is_not_touched() {
    let site = Site::new();
    // Stale label on purpose: it must not be searched or rewritten when
    // the attribute already matches.
    let text = listing(&[card("2024-02-03", "alpha.html", "March 9, 1999")]);
    site.write_listing(&text);
    site.write_article("alpha.html", &article("February 3, 2024"));
    let before = pin_mtime(&site);

    let report = run(&site.options(), None).unwrap();

    assert_eq!(site.read_listing(), text);
    assert_eq!(mtime(&site), before);
    assert_eq!(report.unchanged(), 1);
    assert_eq!(report.edits, 0);
    assert!(!report.written);
}

#[test]
fn article_without_date_markup() {
    let site = Site::new();
    site.write_listing(&listing(&[card("2024-01-01", "plain.html", "January 1, 2024")]));
    site.write_article("plain.html", "<html><p>Published February 3, 2024</p></html>");

    let report = run(&site.options(), None).unwrap();
    assert_eq!(
        report.entries[0].outcome,
        CardOutcome::Skipped(SkipReason::DateExtractionFailure)
    );
}

#[test]
fn unreadable_article_is_skipped() {
    let site = Site::new();
    site.write_listing(&listing(&[card("2024-01-01", "folder.html", "January 1, 2024")]));
    fs::create_dir(site.article_dir().join("folder.html")).unwrap();

    let report = run(&site.options(), None).unwrap();
    assert_eq!(report.entries[0].outcome.kind(), "ArticleUnreadable");
    assert!(!report.written);
}

#[test]
fn missing_label_keeps_attribute_update() {
    let site = Site::new();
    let text = listing(&[card("2024-01-01", "alpha.html", "Coming soon")]);
    site.write_listing(&text);
    site.write_article("alpha.html", &article("February 3, 2024"));

    let report = run(&site.options(), None).unwrap();

    assert_eq!(site.read_listing(), listing(&[card("2024-02-03", "alpha.html", "Coming soon")]));
    assert_eq!(report.partial(), 1);
    assert_eq!(report.updated(), 1);
    assert_eq!(report.edits, 1);
    assert!(report.written);
}

#[test]
fn percent_encoded_links_resolve() {
    let site = Site::new();
    site.write_listing(&listing(&[card("2024-01-01", "patch%20notes%201.2.html", "January 1, 2024")]));
    site.write_article("patch notes 1.2.html", &article("June 30, 2024"));

    let report = run(&site.options(), None).unwrap();

    assert_eq!(report.updated(), 1);
    assert_eq!(report.entries[0].reference, "patch notes 1.2.html");
    assert_eq!(
        site.read_listing(),
        listing(&[card("2024-06-30", "patch%20notes%201.2.html", "June 30, 2024")])
    );
}

#[test]
fn one_bad_card_does_not_stop_the_others() {
    let site = Site::new();
    site.write_listing(&listing(&[
        card("2024-01-01", "a.html", "January 1, 2024"),
        card("2024-01-01", "missing.html", "January 1, 2024"),
        card("2024-01-01", "c.html", "January 1, 2024"),
    ]));
    site.write_article("a.html", &article("April 4, 2024"));
    site.write_article("c.html", &article("May 5, 2024"));

    let report = run(&site.options(), None).unwrap();

    assert_eq!(report.updated(), 2);
    assert_eq!(report.skipped(), 1);
    assert_eq!(
        site.read_listing(),
        listing(&[
            card("2024-04-04", "a.html", "April 4, 2024"),
            card("2024-01-01", "missing.html", "January 1, 2024"),
            card("2024-05-05", "c.html", "May 5, 2024"),
        ])
    );
}

#[test]
fn dry_run_reports_but_does_not_write() {
    let site = Site::new();
    let text = listing(&[card("2024-01-01", "alpha.html", "January 1, 2024")]);
    site.write_listing(&text);
    site.write_article("alpha.html", &article("February 3, 2024"));
    let before = pin_mtime(&site);

    let report = run(&site.options().dry_run(true), None).unwrap();

    assert_eq!(report.updated(), 1);
    assert!(report.dry_run);
    assert!(!report.written);
    assert_eq!(site.read_listing(), text);
    assert_eq!(mtime(&site), before);
    assert!(report.to_string().contains("1 to update"));
}

#[test]
fn listing_without_cards() {
    let site = Site::new();
    site.write_listing("<html><body><p>No news yet</p></body></html>");

    let report = run(&site.options(), None).unwrap();
    assert_eq!(report.scanned(), 0);
    assert!(!report.written);
}

#[test]
fn missing_article_root_is_fatal() {
    let site = Site::new();
    site.write_listing(&listing(&[card("2024-01-01", "alpha.html", "January 1, 2024")]));
    fs::remove_dir_all(site.article_dir()).unwrap();

    let err = run(&site.options(), None).unwrap_err();
    assert!(matches!(err, SyncError::ArticleRootMissing { .. }));
}

#[test]
fn missing_listing_is_fatal() {
    let site = Site::new();
    let err = run(&site.options(), None).unwrap_err();
    assert!(matches!(err, SyncError::ListingUnreadable { .. }));
}
