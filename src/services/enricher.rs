use crate::models::{MovieDetail, MovieSummary};
use crate::services::catalog::CatalogService;
use futures::future::join_all;
use tracing::debug;

/// Resolves genres, top cast and director for movie summaries.
#[derive(Clone)]
pub struct MovieEnricher {
    catalog: CatalogService,
}

impl MovieEnricher {
    #[must_use]
    pub const fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }

    pub async fn enrich(&self, summary: MovieSummary) -> MovieDetail {
        let fragment = self.catalog.movie_detail(summary.id).await;
        MovieDetail::new(summary, fragment)
    }

    /// Enriches a whole page, issuing every detail lookup at once.
    ///
    /// Resolves only after all lookups have settled; output order matches
    /// input order.
    pub async fn enrich_page(&self, summaries: Vec<MovieSummary>) -> Vec<MovieDetail> {
        let count = summaries.len();
        let details = join_all(summaries.into_iter().map(|summary| self.enrich(summary))).await;
        debug!(count, "Enriched movie page");
        details
    }
}
