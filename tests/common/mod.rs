// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use card_sync::SyncOptions;
use tempfile::TempDir;

/// A throwaway site: `news.html` next to a `news/` article directory.
pub struct Site {
    dir: TempDir,
}

impl Site {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("news")).unwrap();
        Self { dir }
    }

    pub fn options(&self) -> SyncOptions {
        SyncOptions::in_dir(self.dir.path())
    }

    pub fn listing_path(&self) -> PathBuf {
        self.dir.path().join("news.html")
    }

    pub fn write_listing(&self, text: &str) {
        fs::write(self.listing_path(), text).unwrap();
    }

    pub fn read_listing(&self) -> String {
        fs::read_to_string(self.listing_path()).unwrap()
    }

    pub fn write_article(&self, name: &str, body: &str) {
        fs::write(self.dir.path().join("news").join(name), body).unwrap();
    }

    pub fn article_dir(&self) -> PathBuf {
        self.dir.path().join("news")
    }
}

pub const FAR_MR1: &str = r#"<i class="far fa-calendar-alt mr-1"></i>"#;
pub const SOLID_ALT: &str = r#"<i class="fa-solid fa-calendar-alt"></i>"#;
pub const FAR: &str = r#"<i class="far fa-calendar-alt"></i>"#;

/// One listing card as the site renders it.
pub fn card(date: &str, href: &str, label: &str) -> String {
    format!(
        r#"    <div class="news-card" data-date="{date}" data-type="update">
        <img src="assets/images/news/{href}.webp" alt="">
        <div class="news-card-content">
            <span class="news-date"><i class="fa-solid fa-calendar"></i> {label}</span>
            <h3>Title for {href}</h3>
            <a href="news/{href}" class="btn-accent btn-news">Read More</a>
        </div>
    </div>
"#
    )
}

pub fn listing(cards: &[String]) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<body>\n<div class=\"news-grid\">\n{}</div>\n</body>\n</html>\n",
        cards.concat()
    )
}

/// Article page using the given date icon markup.
pub fn article_with(icon: &str, date: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<body>
    <header class="article-header">
        <h1>Some Article</h1>
        <div class="article-meta">
            <span class="article-date">{icon}{date}</span>
            <span class="article-author"><i class="far fa-user"></i>Dev Team</span>
        </div>
    </header>
    <p>Body text mentioning March 1, 2020 in passing.</p>
</body>
</html>
"#
    )
}

pub fn article(date: &str) -> String {
    article_with(FAR_MR1, date)
}
