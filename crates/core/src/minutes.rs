//! Naming of meeting-minutes pages.
//!
//! Minutes are published as one page per day under a configured parent
//! page. The page title and its URL slug are both derived from the date:
//!
//! ```rust
//! use notesync_core::MinutesPage;
//! use time::macros::date;
//!
//! let page = MinutesPage::for_date(date!(2026 - 10 - 07), "/team/minutes").unwrap();
//! assert_eq!(page.title, "Minutes for Oct 07, 2026");
//! assert_eq!(page.path, "/team/minutes/minutes-for-oct-07-2026");
//! ```

use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::Result;

/// Title, slug and site path of the minutes page for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinutesPage {
    /// Human-readable page title.
    pub title: String,
    /// Last URL segment of the page.
    pub slug: String,
    /// Site-relative path: the parent page followed by the slug.
    pub path: String,
}

impl MinutesPage {
    /// The minutes page for `date`, placed under `parent`.
    pub fn for_date(date: Date, parent: &str) -> Result<Self> {
        let title = format!(
            "Minutes for {}",
            date.format(format_description!("[month repr:short] [day], [year]"))?
        );
        let slug = format!(
            "minutes-for-{}",
            date.format(format_description!("[month repr:short]-[day]-[year]"))?
        )
        .to_lowercase();
        let path = format!("{}/{}", parent.trim_end_matches('/'), slug);

        Ok(Self { title, slug, path })
    }

    /// The minutes page for today.
    pub fn today(parent: &str) -> Result<Self> {
        Self::for_date(today(), parent)
    }

    /// File name used when staging the page locally.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// Today's date in the local time zone, or in UTC when the offset is unknown.
pub fn today() -> Date {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()).date()
}

/// Interprets an answer to a yes/no question.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
