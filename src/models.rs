use serde::{Deserialize, Serialize};

/// One row of the top chart, before detail enrichment
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// 1-based position among the successfully extracted rows
    pub ranking: u32,
    pub title: String,
    /// Absolute link to the title page, tracking suffix removed
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MovieDetails {
    pub title: String,
    pub release_date: String,
    pub imdb_rating: String,
    pub imdb_number_of_ratings: String,
    /// Empty when the title page has no popularity meter
    pub popularity: String,
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub cast: Vec<String>,
}

/// A chart entry together with its scraped details, as printed by the binary
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScrapedMovie {
    #[serde(flatten)]
    pub entry: RankedEntry,
    pub details: MovieDetails,
}
