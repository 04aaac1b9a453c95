use crate::constants::DEFAULT_RELEASE_YEAR;
use crate::domain::GenreId;
use crate::models::movie::MovieSummary;
use serde::{Deserialize, Serialize};

/// Which catalog endpoint a page load goes to.
///
/// Search has no genre or year filter on the catalog side, so the two modes
/// are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieQuery {
    Search { text: String },
    Discover { year: i32, genre: Option<GenreId> },
}

impl MovieQuery {
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::Discover { .. } => "discover",
        }
    }
}

/// User-controlled listing parameters plus pagination progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub search_text: String,
    pub genre: Option<GenreId>,
    pub year: i32,
    pub page: u32,
    pub loading: bool,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::with_year(DEFAULT_RELEASE_YEAR)
    }
}

impl QueryState {
    #[must_use]
    pub const fn with_year(year: i32) -> Self {
        Self {
            search_text: String::new(),
            genre: None,
            year,
            page: 1,
            loading: false,
        }
    }

    /// Non-blank search text selects search mode; otherwise discover with the
    /// current year and genre.
    #[must_use]
    pub fn query(&self) -> MovieQuery {
        let text = self.search_text.trim();
        if text.is_empty() {
            MovieQuery::Discover {
                year: self.year,
                genre: self.genre,
            }
        } else {
            MovieQuery::Search {
                text: text.to_string(),
            }
        }
    }
}

/// One page of listing results.
///
/// `total_pages` is `None` when the page could not be fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePage {
    pub page: u32,
    pub total_pages: Option<u32>,
    pub results: Vec<MovieSummary>,
}

impl MoviePage {
    #[must_use]
    pub const fn empty(page: u32) -> Self {
        Self {
            page,
            total_pages: None,
            results: Vec::new(),
        }
    }
}
