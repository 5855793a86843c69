//! Typed outcome of pulling one field out of a page.
//!
//! Every extraction step reports whether the element was found, absent, or
//! present but unusable. The page parsers then decide per field whether
//! absence is fatal, instead of that policy being implied by which lookups
//! happen to be guarded.

use crate::browser::BrowserError;
use scraper::{ElementRef, Selector};

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Browser(#[from] BrowserError),

    #[error("Required element for {field} not found ({selector})")]
    MissingElement {
        field: &'static str,
        selector: &'static str,
    },

    #[error("Malformed {field}: {reason}")]
    Malformed { field: &'static str, reason: String },

    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector {
        selector: &'static str,
        reason: String,
    },
}

/// Result of looking up a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted<T> {
    Found(T),
    Absent,
    Malformed(String),
}

impl<T> Extracted<T> {
    /// Absence and malformation are both fatal
    pub fn required(self, field: &'static str, selector: &'static str) -> Result<T, ScrapeError> {
        match self {
            Extracted::Found(value) => Ok(value),
            Extracted::Absent => Err(ScrapeError::MissingElement { field, selector }),
            Extracted::Malformed(reason) => Err(ScrapeError::Malformed { field, reason }),
        }
    }

    /// Absence is tolerated, malformation is not
    pub fn optional(self, field: &'static str) -> Result<Option<T>, ScrapeError> {
        match self {
            Extracted::Found(value) => Ok(Some(value)),
            Extracted::Absent => Ok(None),
            Extracted::Malformed(reason) => Err(ScrapeError::Malformed { field, reason }),
        }
    }
}

impl<T> From<Option<T>> for Extracted<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Extracted::Found(v),
            None => Extracted::Absent,
        }
    }
}

/// Parse a CSS selector, reporting bad syntax as an error instead of panicking
pub fn selector(css: &'static str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector {
        selector: css,
        reason: e.to_string(),
    })
}

/// Concatenated, trimmed text content of an element
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first match of `sel` below `scope`
pub fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Extracted<String> {
    scope.select(sel).next().map(element_text).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_required_reports_field() {
        let err = Extracted::<String>::Absent
            .required("title", "span.hero__primary-text")
            .unwrap_err();
        assert!(matches!(err, ScrapeError::MissingElement { field: "title", .. }));
        assert!(err.to_string().contains("span.hero__primary-text"));
    }

    #[test]
    fn test_optional_tolerates_absence_only() {
        assert_eq!(Extracted::<u8>::Absent.optional("x").unwrap(), None);
        assert_eq!(Extracted::Found(3u8).optional("x").unwrap(), Some(3));
        assert!(Extracted::<u8>::Malformed("bad".into()).optional("x").is_err());
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(matches!(
            selector("li[").unwrap_err(),
            ScrapeError::InvalidSelector { selector: "li[", .. }
        ));
    }

    #[test]
    fn test_first_text_trims() {
        let doc = Html::parse_fragment("<div><span class=\"a\">  Hi there \n</span></div>");
        let sel = selector("span.a").unwrap();
        assert_eq!(
            first_text(doc.root_element(), &sel),
            Extracted::Found("Hi there".to_string())
        );

        let missing = selector("span.b").unwrap();
        assert_eq!(first_text(doc.root_element(), &missing), Extracted::Absent);
    }
}
