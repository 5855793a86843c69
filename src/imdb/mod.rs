//! IMDb page scraper
//!
//! Every page is handled the same way: navigate, wait for a marker class
//! (bounded, a timeout is only logged), pause for late rendering, then
//! parse the captured HTML with the pure parsers in [`chart`], [`title`]
//! and [`credits`].

pub mod chart;
pub mod credits;
pub mod title;

use crate::browser::{BrowserScraper, PageDriver};
use crate::config::Config;
use crate::extract::ScrapeError;
use crate::models::{MovieDetails, RankedEntry};
use std::time::Duration;

pub const BASE_URL: &str = "https://www.imdb.com";
pub const TOP_CHART_URL: &str = "https://www.imdb.com/chart/top/";

/// Wait ceiling and per-page settle pauses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub load_timeout: Duration,
    pub list_settle: Duration,
    pub detail_settle: Duration,
    pub credits_settle: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            load_timeout: Duration::from_secs(10),
            list_settle: Duration::from_secs(5),
            detail_settle: Duration::from_secs(1),
            credits_settle: Duration::from_secs(3),
        }
    }
}

pub struct ImdbScraper<D: PageDriver> {
    driver: D,
    timings: Timings,
    top_chart_url: String,
}

impl ImdbScraper<BrowserScraper> {
    /// Start a Chrome session configured from `config`
    pub fn launch(config: &Config) -> Result<Self, ScrapeError> {
        let driver = BrowserScraper::launch(config.browser.browser_config())?;
        Ok(Self::with_driver(driver, config.scraper.timings())
            .with_top_chart_url(&config.scraper.top_chart_url))
    }
}

impl<D: PageDriver> ImdbScraper<D> {
    pub fn with_driver(driver: D, timings: Timings) -> Self {
        Self {
            driver,
            timings,
            top_chart_url: TOP_CHART_URL.to_string(),
        }
    }

    pub fn with_top_chart_url(mut self, url: &str) -> Self {
        self.top_chart_url = url.to_string();
        self
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Navigate, wait up to the load timeout for `marker_class`, then settle
    /// for `settle` and return the rendered HTML. A wait timeout is logged
    /// and whatever has rendered so far is returned.
    fn fetch(&mut self, url: &str, marker_class: &str, settle: Duration) -> Result<String, ScrapeError> {
        self.driver.navigate(url)?;

        if self.driver.wait_for_class(marker_class, self.timings.load_timeout) {
            log::info!("{} loaded successfully", url);
        } else {
            log::warn!(
                "Loading {} took too much time (no .{} after {:?}), continuing",
                url,
                marker_class,
                self.timings.load_timeout
            );
        }

        self.driver.settle(settle);

        let html = self.driver.page_source()?;
        log::debug!("Captured {} bytes from {}", html.len(), url);
        Ok(html)
    }

    /// Load a list-style page and return its HTML
    pub fn load_page(&mut self, marker_class: &str, url: &str) -> Result<String, ScrapeError> {
        let settle = self.timings.list_settle;
        self.fetch(url, marker_class, settle)
    }

    /// Load the configured top chart
    pub fn load_top_chart(&mut self) -> Result<String, ScrapeError> {
        let url = self.top_chart_url.clone();
        self.load_page(chart::SUMMARY_ITEM_CLASS, &url)
    }

    /// Ranked entries from a page returned by [`load_page`](Self::load_page)
    pub fn scrape_top_movies_titles(&self, page_source: &str) -> Result<Vec<RankedEntry>, ScrapeError> {
        chart::parse_top_chart(page_source)
    }

    /// Load the top chart and extract its entries
    pub fn scrape_top_chart(&mut self) -> Result<Vec<RankedEntry>, ScrapeError> {
        let html = self.load_top_chart()?;
        let entries = self.scrape_top_movies_titles(&html)?;
        log::info!("Found {} chart entries", entries.len());
        Ok(entries)
    }

    /// Scrape a title page and its full credits
    pub fn scrape_movie_details(&mut self, url: &str) -> Result<MovieDetails, ScrapeError> {
        let settle = self.timings.detail_settle;
        let html = self.fetch(url, title::PRIMARY_TITLE_CLASS, settle)?;
        let page = title::parse_title_page(&html)?;

        let cast = self.scrape_full_cast(url)?;

        Ok(MovieDetails {
            title: page.title,
            release_date: page.release_date,
            imdb_rating: page.imdb_rating,
            imdb_number_of_ratings: page.imdb_number_of_ratings,
            popularity: page.popularity,
            genres: page.genres,
            directors: page.directors,
            cast,
        })
    }

    /// Actor names from the title's full credits page
    pub fn scrape_full_cast(&mut self, url: &str) -> Result<Vec<String>, ScrapeError> {
        let credits_url = credits::full_credits_url(url);
        let settle = self.timings.credits_settle;
        let html = self.fetch(&credits_url, credits::CAST_LIST_CLASS, settle)?;
        credits::parse_cast(&html)
    }
}
