//! Title page (`/title/tt…/`) parsing
//!
//! The hashed `sc-…` class names are tied to the site's current build and
//! change whenever IMDb redeploys its frontend; update them here when a
//! required field starts failing.

use crate::extract::{element_text, first_text, selector, Extracted, ScrapeError};
use scraper::{ElementRef, Html};

/// Class on the title heading, present once the hero section has rendered
pub const PRIMARY_TITLE_CLASS: &str = "hero__primary-text";

const TITLE: &str = "span.hero__primary-text";
const RELEASE_DATE: &str =
    "div.sc-9a2a0028-3.bwWOiy a.ipc-link.ipc-link--baseAlt.ipc-link--inherit-color";
const RATING: &str = "span.sc-d541859f-1.imUuxf";
const RATING_COUNT: &str = "div.sc-d541859f-3.dwhNqC";
const POPULARITY: &str = "div.sc-39d285cf-1.dxqvqi";
const GENRE_CHIP: &str = "a.ipc-chip.ipc-chip--on-baseAlt";
const CREDITS_BLOCK: &str = "div.sc-70a366cc-2.bscNnP";
const CREDIT_ITEM: &str = "li.ipc-metadata-list__item.ipc-metadata-list__item--align-end";
const CREDIT_LABEL: &str = "span.ipc-metadata-list-item__label";
const CREDIT_NAME: &str = "a.ipc-metadata-list-item__list-content-item";

const DIRECTOR_LABEL: &str = "Director";

/// Everything the title page itself provides; cast comes from the credits page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlePage {
    pub title: String,
    pub release_date: String,
    pub imdb_rating: String,
    pub imdb_number_of_ratings: String,
    pub popularity: String,
    pub genres: Vec<String>,
    pub directors: Vec<String>,
}

pub fn parse_title_page(html: &str) -> Result<TitlePage, ScrapeError> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let title = first_text(root, &selector(TITLE)?).required("title", TITLE)?;
    let release_date =
        first_text(root, &selector(RELEASE_DATE)?).required("release_date", RELEASE_DATE)?;
    let imdb_rating = first_text(root, &selector(RATING)?).required("imdb_rating", RATING)?;
    let imdb_number_of_ratings = first_text(root, &selector(RATING_COUNT)?)
        .required("imdb_number_of_ratings", RATING_COUNT)?;

    // Missing on some titles, e.g. tt0986264
    let popularity = first_text(root, &selector(POPULARITY)?)
        .optional("popularity")?
        .unwrap_or_default();

    let genre_sel = selector(GENRE_CHIP)?;
    let genres = root.select(&genre_sel).map(element_text).collect();

    let credits_sel = selector(CREDITS_BLOCK)?;
    let credits = Extracted::from(root.select(&credits_sel).next())
        .required("principal_credits", CREDITS_BLOCK)?;
    let directors = directors(credits)?;

    Ok(TitlePage {
        title,
        release_date,
        imdb_rating,
        imdb_number_of_ratings,
        popularity,
        genres,
        directors,
    })
}

/// Names listed under the "Director"/"Directors" credit item.
///
/// Items without a label are ignored. Should several labels mention
/// directors, the last one wins.
fn directors(credits: ElementRef<'_>) -> Result<Vec<String>, ScrapeError> {
    let item_sel = selector(CREDIT_ITEM)?;
    let label_sel = selector(CREDIT_LABEL)?;
    let name_sel = selector(CREDIT_NAME)?;

    let mut directors = Vec::new();

    for item in credits.select(&item_sel) {
        let Extracted::Found(label) = first_text(item, &label_sel) else {
            continue;
        };

        if label.contains(DIRECTOR_LABEL) {
            directors = item.select(&name_sel).map(element_text).collect();
        }
    }

    Ok(directors)
}
