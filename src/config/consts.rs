// src/config/consts.rs

// Default paths, relative to where the tool is run
pub const DEFAULT_LISTING: &str = "news.html";
pub const DEFAULT_ARTICLE_ROOT: &str = "news";

// Listing card markup
pub const CARD_PREFIX: &str = r#"<div class="news-card""#;
pub const CARD_DATE_ATTR: &str = r#" data-date=""#;
pub const CARD_TYPE_ATTR: &str = r#"" data-type=""#;
pub const CARD_OPEN_END: &str = r#"">"#;
pub const ANCHOR_OPEN: &str = r#"<a href="news/"#;
pub const ANCHOR_CLOSE: &str = r#"" class="btn-accent btn-news">"#;
pub const LABEL_ICON: &str = r#"<i class="fa-solid fa-calendar"></i>"#;

// Article date markup, highest priority first
pub const ARTICLE_ICONS: [&str; 3] = [
    r#"<i class="far fa-calendar-alt mr-1"></i>"#,
    r#"<i class="fa-solid fa-calendar-alt"></i>"#,
    r#"<i class="far fa-calendar-alt"></i>"#,
];

pub const SPAN_CLOSE: &str = "</span>";

// Date formats (chrono strftime)
pub const ATTR_DATE_FMT: &str = "%Y-%m-%d";
pub const LABEL_PARSE_FMT: &str = "%B %d, %Y";
pub const LABEL_DATE_FMT: &str = "%B %-d, %Y";
