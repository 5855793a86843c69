// Library interface for imdb_scraper
// The binary and the integration tests both go through these modules

pub mod browser;
pub mod config;
pub mod extract;
pub mod imdb;
pub mod models;

pub use extract::ScrapeError;
pub use imdb::ImdbScraper;
pub use models::{MovieDetails, RankedEntry, ScrapedMovie};
