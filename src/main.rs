use imdb_scraper::browser::PageDriver;
use imdb_scraper::config::Config;
use imdb_scraper::{ImdbScraper, ScrapedMovie};
use log::{error, info, warn};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Logging disabled, could not load log4rs.yml: {}", e);
    }

    let cfg = Config::load();

    let mut scraper = match ImdbScraper::launch(&cfg) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to start browser: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&mut scraper, cfg.scraper.max_titles) {
        Ok(movies) => match serde_json::to_string_pretty(&movies) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to serialize results: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("Scrape failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run<D: PageDriver>(
    scraper: &mut ImdbScraper<D>,
    max_titles: usize,
) -> Result<Vec<ScrapedMovie>, imdb_scraper::ScrapeError> {
    let entries = scraper.scrape_top_chart()?;
    let mut movies = Vec::new();

    for entry in entries.into_iter().take(max_titles) {
        info!("[{}] {}", entry.ranking, entry.title);

        // One title page drifting out of shape should not lose the whole run
        match scraper.scrape_movie_details(&entry.url) {
            Ok(details) => movies.push(ScrapedMovie { entry, details }),
            Err(e) => warn!("Skipping {} ({}): {}", entry.title, entry.url, e),
        }
    }

    info!("Scraped {} titles", movies.len());
    Ok(movies)
}
