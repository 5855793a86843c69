//! Top chart (`/chart/top/`) parsing

use super::BASE_URL;
use crate::extract::{selector, ScrapeError};
use crate::models::RankedEntry;
use regex::Regex;
use scraper::Html;
use std::sync::OnceLock;

/// Class present on every chart row once the list has rendered
pub const SUMMARY_ITEM_CLASS: &str = "ipc-metadata-list-summary-item";

const ITEM_SELECTOR: &str = "li.ipc-metadata-list-summary-item";
const LINK_SELECTOR: &str = "a.ipc-lockup-overlay";
const TITLE_LABEL_PREFIX: &str = "View title page for ";
const UNKNOWN_TITLE: &str = "Unknown";

fn tracking_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\?ref_=chttp_.*$").expect("static regex"))
}

/// Turn a chart href into an absolute title URL
///
/// `/title/tt0133093/?ref_=chttp_i_1` becomes
/// `https://www.imdb.com/title/tt0133093/`.
pub fn title_url(href: &str) -> String {
    let path = match tracking_suffix().find(href) {
        Some(m) => &href[..m.start()],
        None => href,
    };
    format!("{}{}", BASE_URL, path)
}

/// Title from the overlay link's `aria-label`, or "Unknown" without one
pub fn title_from_label(aria_label: Option<&str>) -> String {
    match aria_label {
        Some(label) => label.replace(TITLE_LABEL_PREFIX, ""),
        None => UNKNOWN_TITLE.to_string(),
    }
}

/// Extract the ranked entries from a rendered chart page.
///
/// Rows without an overlay link, or whose link has no `href`, are skipped
/// and do not consume a ranking.
pub fn parse_top_chart(html: &str) -> Result<Vec<RankedEntry>, ScrapeError> {
    let document = Html::parse_document(html);
    let item_sel = selector(ITEM_SELECTOR)?;
    let link_sel = selector(LINK_SELECTOR)?;

    let mut entries = Vec::new();

    for (position, item) in document.select(&item_sel).enumerate() {
        let Some(link) = item.select(&link_sel).next() else {
            log::debug!("Chart row {} has no title link, skipping", position + 1);
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            log::debug!("Chart row {} link has no href, skipping", position + 1);
            continue;
        };

        entries.push(RankedEntry {
            ranking: entries.len() as u32 + 1,
            title: title_from_label(link.value().attr("aria-label")),
            url: title_url(href),
        });
    }

    Ok(entries)
}
