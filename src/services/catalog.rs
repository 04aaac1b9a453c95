//! Catalog access with a soft-failure boundary.
//!
//! [`MovieCatalog`] is the fallible transport-facing side, implemented by the
//! TMDB client. [`CatalogService`] wraps it and absorbs every failure: errors
//! are logged and counted, and callers receive empty or neutral data instead.

use crate::domain::MovieId;
use crate::models::{DetailFragment, Genre, MovieDetail, MovieLookup, MoviePage, MovieQuery};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    /// No response was received (connect failure, timeout, reset).
    #[error("Network error: {0}")]
    Network(String),

    #[error("Catalog API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The service answered with a body that could not be decoded.
    #[error("Malformed catalog response: {0}")]
    Decode(String),

    #[error("Invalid catalog request: {0}")]
    InvalidRequest(String),
}

impl CatalogError {
    /// Which side of the exchange failed, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "request",
            Self::Api { .. } | Self::Decode(_) => "response",
            Self::InvalidRequest(_) => "general",
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        let err = err.without_url();

        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Api {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Read-only queries against a remote movie catalog.
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn genres(&self) -> Result<Vec<Genre>, CatalogError>;

    async fn movies(&self, query: &MovieQuery, page: u32) -> Result<MoviePage, CatalogError>;

    /// Detail and credits for one movie, fetched in a single request.
    async fn lookup_movie(&self, id: MovieId) -> Result<MovieLookup, CatalogError>;
}

#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn MovieCatalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }

    /// All catalog genres, or an empty list if they could not be fetched.
    pub async fn list_genres(&self) -> Vec<Genre> {
        match self.catalog.genres().await {
            Ok(genres) => {
                record("genres", "success");
                debug!(count = genres.len(), "Fetched catalog genres");
                genres
            }
            Err(e) => {
                report("genres", None, &e);
                Vec::new()
            }
        }
    }

    /// One page of search or discover results, or an empty page on failure.
    pub async fn list_movies(&self, query: &MovieQuery, page: u32) -> MoviePage {
        let endpoint = query.endpoint();
        match self.catalog.movies(query, page).await {
            Ok(movies) => {
                record(endpoint, "success");
                debug!(
                    endpoint,
                    page,
                    count = movies.results.len(),
                    total_pages = ?movies.total_pages,
                    "Fetched movie page"
                );
                movies
            }
            Err(e) => {
                report(endpoint, None, &e);
                MoviePage::empty(page)
            }
        }
    }

    /// Genres, top cast and director for a movie.
    ///
    /// Returns the neutral fragment when the lookup fails; this is "unknown",
    /// not an error.
    pub async fn movie_detail(&self, id: MovieId) -> DetailFragment {
        match self.catalog.lookup_movie(id).await {
            Ok(lookup) => {
                record("movie", "success");
                DetailFragment::from(lookup)
            }
            Err(e) => {
                report("movie", Some(id), &e);
                DetailFragment::default()
            }
        }
    }

    /// A single movie with its detail, or `None` if it could not be fetched.
    pub async fn movie(&self, id: MovieId) -> Option<MovieDetail> {
        match self.catalog.lookup_movie(id).await {
            Ok(lookup) => {
                record("movie", "success");
                MovieDetail::try_from(lookup)
                    .inspect_err(|_| warn!(movie_id = %id, "Detail response carried no movie"))
                    .ok()
            }
            Err(e) => {
                report("movie", Some(id), &e);
                None
            }
        }
    }
}

fn record(endpoint: &'static str, outcome: &'static str) {
    metrics::counter!("catalog_requests_total", "endpoint" => endpoint, "outcome" => outcome)
        .increment(1);
}

fn report(endpoint: &'static str, movie_id: Option<MovieId>, error: &CatalogError) {
    record(endpoint, error.kind());
    warn!(
        endpoint,
        movie_id = movie_id.map(|id| id.value()),
        kind = error.kind(),
        error = %error,
        "Catalog request failed"
    );
}
