//! Listing controller: query parameters, pagination and list accumulation.
//!
//! Every load is stamped with a generation number when it is issued. When the
//! load resolves, its results are applied only if no newer load has been
//! issued in the meantime, so a slow response can never overwrite the results
//! of a later parameter change.

use crate::config::Enrichment;
use crate::constants::catalog::MAX_PAGE;
use crate::domain::GenreId;
use crate::models::{Genre, MovieDetail, MovieQuery, QueryState};
use crate::services::catalog::CatalogService;
use crate::services::enricher::MovieEnricher;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// What happened to a requested load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Results were merged into the list.
    Applied { page: u32, count: usize },

    /// A newer load was issued before this one resolved; results dropped.
    Stale { generation: u64 },

    /// Nothing to load: no parameter change, a load already in flight, or the
    /// last page was already reached.
    Skipped,
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingSnapshot {
    pub query: QueryState,
    pub genres: Vec<Genre>,
    pub loading_genres: bool,
    pub movies: Vec<MovieDetail>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Merge {
    Replace,
    Append,
}

#[derive(Debug)]
struct LoadTicket {
    generation: u64,
    query: MovieQuery,
    page: u32,
    merge: Merge,
}

#[derive(Debug, Default)]
struct ListingState {
    query: QueryState,
    genres: Vec<Genre>,
    loading_genres: bool,
    movies: Vec<MovieDetail>,
    total_pages: Option<u32>,
    generation: u64,
}

impl ListingState {
    fn issue(&mut self, merge: Merge) -> LoadTicket {
        self.generation += 1;
        self.query.loading = true;

        LoadTicket {
            generation: self.generation,
            query: self.query.query(),
            page: self.query.page,
            merge,
        }
    }
}

pub struct ListingController {
    catalog: CatalogService,
    enricher: MovieEnricher,
    enrichment: Enrichment,
    state: RwLock<ListingState>,
}

impl ListingController {
    #[must_use]
    pub fn new(catalog: CatalogService, enrichment: Enrichment, default_year: i32) -> Self {
        Self::with_query(catalog, enrichment, QueryState::with_year(default_year))
    }

    /// Starts from `query` instead of the defaults, so the first load already
    /// uses the caller's search text, genre and year.
    #[must_use]
    pub fn with_query(catalog: CatalogService, enrichment: Enrichment, query: QueryState) -> Self {
        let enricher = MovieEnricher::new(catalog.clone());

        Self {
            catalog,
            enricher,
            enrichment,
            state: RwLock::new(ListingState {
                query: QueryState {
                    page: 1,
                    loading: false,
                    ..query
                },
                ..ListingState::default()
            }),
        }
    }

    /// Session startup: genres and the first page of the current listing.
    pub async fn start(&self) -> LoadOutcome {
        let ((), outcome) = tokio::join!(self.load_genres(), self.reload());
        outcome
    }

    /// Fetches the genre set once; later calls reuse the cached list.
    pub async fn load_genres(&self) {
        {
            let mut state = self.state.write().await;
            if !state.genres.is_empty() || state.loading_genres {
                return;
            }
            state.loading_genres = true;
        }

        let genres = self.catalog.list_genres().await;

        let mut state = self.state.write().await;
        state.loading_genres = false;
        if state.genres.is_empty() {
            state.genres = genres;
        }
    }

    pub async fn on_search_text_changed(&self, text: &str) -> LoadOutcome {
        self.change_parameters(|query| {
            if query.search_text == text {
                return false;
            }
            query.search_text = text.to_string();
            true
        })
        .await
    }

    /// Selects `genre` as the only active genre filter.
    pub async fn on_genre_selected(&self, genre: GenreId) -> LoadOutcome {
        self.change_parameters(|query| query.genre.replace(genre) != Some(genre))
            .await
    }

    pub async fn clear_genre_filter(&self) -> LoadOutcome {
        self.change_parameters(|query| query.genre.take().is_some())
            .await
    }

    pub async fn on_year_changed(&self, year: i32) -> LoadOutcome {
        self.change_parameters(|query| std::mem::replace(&mut query.year, year) != year)
            .await
    }

    /// Loads the next page and appends it, unless a load is in flight or the
    /// last page was reached. The catalog serves at most [`MAX_PAGE`] pages
    /// whatever `total_pages` it reports.
    pub async fn on_end_reached(&self) -> LoadOutcome {
        let ticket = {
            let mut state = self.state.write().await;
            if state.query.loading {
                debug!("Load in flight, ignoring end of list");
                return LoadOutcome::Skipped;
            }
            let last = state.total_pages.map_or(MAX_PAGE, |total| total.min(MAX_PAGE));
            if state.query.page >= last {
                debug!(page = state.query.page, last, "No more pages");
                return LoadOutcome::Skipped;
            }

            state.query.page += 1;
            state.issue(Merge::Append)
        };

        self.run(ticket).await
    }

    /// Reloads page 1 of the current parameters, replacing the list.
    pub async fn reload(&self) -> LoadOutcome {
        let ticket = {
            let mut state = self.state.write().await;
            state.query.page = 1;
            state.total_pages = None;
            state.issue(Merge::Replace)
        };

        self.run(ticket).await
    }

    pub async fn snapshot(&self) -> ListingSnapshot {
        let state = self.state.read().await;
        ListingSnapshot {
            query: state.query.clone(),
            genres: state.genres.clone(),
            loading_genres: state.loading_genres,
            movies: state.movies.clone(),
        }
    }

    pub async fn movies(&self) -> Vec<MovieDetail> {
        self.state.read().await.movies.clone()
    }

    pub async fn genres(&self) -> Vec<Genre> {
        self.state.read().await.genres.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.query.loading
    }

    pub async fn query_state(&self) -> QueryState {
        self.state.read().await.query.clone()
    }

    /// Applies `change` and, if the resulting catalog query differs, starts
    /// over from page 1 with an empty list.
    ///
    /// Edits that leave the query as is (trailing whitespace in the search
    /// text, a genre or year picked while searching) are kept in the state but
    /// issue no load.
    async fn change_parameters(&self, change: impl FnOnce(&mut QueryState) -> bool) -> LoadOutcome {
        let ticket = {
            let mut state = self.state.write().await;
            let before = state.query.query();
            if !change(&mut state.query) || state.query.query() == before {
                return LoadOutcome::Skipped;
            }

            state.query.page = 1;
            state.total_pages = None;
            state.movies.clear();
            state.issue(Merge::Replace)
        };

        info!(
            query = ?ticket.query,
            generation = ticket.generation,
            "Listing parameters changed"
        );

        self.run(ticket).await
    }

    async fn run(&self, ticket: LoadTicket) -> LoadOutcome {
        let page = self.catalog.list_movies(&ticket.query, ticket.page).await;
        let total_pages = page.total_pages;

        let movies = if self.enrichment.is_enabled() {
            self.enricher.enrich_page(page.results).await
        } else {
            page.results.into_iter().map(MovieDetail::from).collect()
        };

        let mut state = self.state.write().await;
        if state.generation != ticket.generation {
            debug!(
                generation = ticket.generation,
                latest = state.generation,
                page = ticket.page,
                "Discarding stale listing results"
            );
            return LoadOutcome::Stale {
                generation: ticket.generation,
            };
        }

        state.query.loading = false;
        if total_pages.is_some() {
            state.total_pages = total_pages;
        }

        let count = movies.len();
        match ticket.merge {
            Merge::Replace => state.movies = movies,
            Merge::Append => state.movies.extend(movies),
        }

        debug!(
            page = ticket.page,
            count,
            total = state.movies.len(),
            "Applied listing results"
        );

        LoadOutcome::Applied {
            page: ticket.page,
            count,
        }
    }
}
