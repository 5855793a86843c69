//! Full credits (`/title/tt…/fullcredits`) parsing

use crate::extract::{selector, Extracted, ScrapeError};
use scraper::{ElementRef, Html};

/// Class on the cast table
pub const CAST_LIST_CLASS: &str = "cast_list";

/// Path segment appended to a title URL to reach its credits page
pub const FULL_CREDITS_SUFFIX: &str = "fullcredits";

const CAST_TABLE: &str = "table.cast_list";
// Actor rows alternate between these two classes; headers and
// "rest of cast" separators carry neither.
const CAST_ROW: &str = "tr.odd, tr.even";
const PHOTO_CELL: &str = "td.primary_photo";
const PHOTO_IMG: &str = "img";

/// Credits page URL for a title URL ending in `/`
pub fn full_credits_url(title_url: &str) -> String {
    format!("{}{}", title_url, FULL_CREDITS_SUFFIX)
}

/// Actor names in billing order.
///
/// A page without a cast table yields an empty list, as does a table
/// without actor rows. An actor row without a photo cell, image or alt
/// text fails the whole parse.
pub fn parse_cast(html: &str) -> Result<Vec<String>, ScrapeError> {
    let document = Html::parse_document(html);
    let table_sel = selector(CAST_TABLE)?;

    let Some(table) = document.select(&table_sel).next() else {
        log::debug!("No cast table on credits page");
        return Ok(Vec::new());
    };

    let row_sel = selector(CAST_ROW)?;
    let mut cast = Vec::new();

    for row in table.select(&row_sel) {
        cast.push(actor_name(row)?.required("cast", PHOTO_CELL)?);
    }

    Ok(cast)
}

fn actor_name(row: ElementRef<'_>) -> Result<Extracted<String>, ScrapeError> {
    let cell_sel = selector(PHOTO_CELL)?;
    let img_sel = selector(PHOTO_IMG)?;

    let Some(cell) = row.select(&cell_sel).next() else {
        return Ok(Extracted::Absent);
    };
    let Some(img) = cell.select(&img_sel).next() else {
        return Ok(Extracted::Malformed("photo cell without image".to_string()));
    };

    Ok(match img.value().attr("alt") {
        Some(alt) => Extracted::Found(alt.to_string()),
        None => Extracted::Malformed("photo without alt text".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor_row(class: &str, name: &str) -> String {
        format!(
            r#"<tr class="{}"><td class="primary_photo"><a href="/name/x"><img alt="{}" src="p.jpg"></a></td><td><a href="/name/x">{}</a></td><td class="character">Someone</td></tr>"#,
            class, name, name
        )
    }

    #[test]
    fn test_full_credits_url() {
        assert_eq!(
            full_credits_url("https://www.imdb.com/title/tt0133093/"),
            "https://www.imdb.com/title/tt0133093/fullcredits"
        );
    }

    #[test]
    fn test_rows_in_order_headers_skipped() {
        let html = format!(
            r#"<table class="cast_list"><tr><td colspan="4">Cast overview</td></tr>{}{}<tr><td colspan="4">Rest of cast listed alphabetically:</td></tr>{}</table>"#,
            actor_row("odd", "Keanu Reeves"),
            actor_row("even", "Laurence Fishburne"),
            actor_row("odd", "Carrie-Anne Moss"),
        );

        assert_eq!(
            parse_cast(&html).unwrap(),
            vec!["Keanu Reeves", "Laurence Fishburne", "Carrie-Anne Moss"]
        );
    }

    #[test]
    fn test_no_table_and_empty_table_agree() {
        let no_table = parse_cast("<html><body><p>nothing</p></body></html>").unwrap();
        let empty_table =
            parse_cast(r#"<table class="cast_list"><tr><td>Cast</td></tr></table>"#).unwrap();

        assert!(no_table.is_empty());
        assert_eq!(no_table, empty_table);
    }

    #[test]
    fn test_row_without_photo_cell_fails() {
        let html = r#"<table class="cast_list"><tr class="odd"><td>Name only</td></tr></table>"#;
        assert!(matches!(
            parse_cast(html).unwrap_err(),
            ScrapeError::MissingElement { field: "cast", .. }
        ));
    }

    #[test]
    fn test_image_without_alt_fails() {
        let html = r#"<table class="cast_list"><tr class="even"><td class="primary_photo"><img src="p.jpg"></td></tr></table>"#;
        assert!(matches!(
            parse_cast(html).unwrap_err(),
            ScrapeError::Malformed { field: "cast", .. }
        ));
    }
}
