use crate::config::CatalogConfig;
use crate::constants::catalog::SORT_BY_POPULARITY;
use crate::domain::MovieId;
use crate::models::{
    CastMember, CrewMember, Genre, MovieLookup, MoviePage, MovieQuery, MovieSummary,
};
use crate::services::catalog::{CatalogError, MovieCatalog};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

#[derive(Debug, Deserialize)]
struct PagedResponse {
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default)]
    results: Vec<MovieSummary>,
}

#[derive(Debug, Deserialize)]
struct MovieDetailsResponse {
    #[serde(flatten)]
    movie: Option<MovieSummary>,
    #[serde(default)]
    genres: Vec<Genre>,
    #[serde(default)]
    credits: Option<CreditsResponse>,
}

#[derive(Debug, Default, Deserialize)]
struct CreditsResponse {
    #[serde(default)]
    cast: Vec<CastMember>,
    #[serde(default)]
    crew: Vec<CrewMember>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    status_message: Option<String>,
}

/// HTTP client for the TMDB v3 API.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: Url,
    api_key: String,
    language: Option<String>,
    min_vote_count: u32,
}

impl TmdbClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(concat!("MovieFix/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                CatalogError::InvalidRequest(format!("Failed to build HTTP client: {e}"))
            })?;

        Self::with_client(client, config)
    }

    pub fn with_client(client: Client, config: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            CatalogError::InvalidRequest(format!("Invalid base URL {}: {e}", config.base_url))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidRequest(format!(
                "Base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        let language = Some(config.language.trim())
            .filter(|lang| !lang.is_empty())
            .map(str::to_string);

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
            language,
            min_vote_count: config.min_vote_count,
        })
    }

    /// Base URL extended with `segments`, carrying the API key and language.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.api_key);
            if let Some(language) = &self.language {
                query.append_pair("language", language);
            }
        }

        url
    }

    #[must_use]
    pub fn genres_url(&self) -> Url {
        self.endpoint(&["genre", "movie", "list"])
    }

    #[must_use]
    pub fn movies_url(&self, query: &MovieQuery, page: u32) -> Url {
        match query {
            MovieQuery::Search { text } => {
                let mut url = self.endpoint(&["search", "movie"]);
                url.query_pairs_mut()
                    .append_pair("query", text)
                    .append_pair("page", &page.to_string());
                url
            }
            MovieQuery::Discover { year, genre } => {
                let mut url = self.endpoint(&["discover", "movie"]);
                {
                    let mut pairs = url.query_pairs_mut();
                    pairs
                        .append_pair("sort_by", SORT_BY_POPULARITY)
                        .append_pair("primary_release_year", &year.to_string())
                        .append_pair("page", &page.to_string());
                    if let Some(genre) = genre {
                        pairs.append_pair("with_genres", &genre.to_string());
                    }
                    pairs.append_pair("vote_count.gte", &self.min_vote_count.to_string());
                }
                url
            }
        }
    }

    #[must_use]
    pub fn movie_url(&self, id: MovieId) -> Url {
        let id = id.to_string();
        let mut url = self.endpoint(&["movie", id.as_str()]);
        url.query_pairs_mut()
            .append_pair("append_to_response", "credits");
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.status_message)
                .unwrap_or(body);
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbClient {
    async fn genres(&self) -> Result<Vec<Genre>, CatalogError> {
        debug!("Fetching TMDB genre list");
        let response: GenreListResponse = self.get_json(self.genres_url()).await?;
        Ok(response.genres)
    }

    async fn movies(&self, query: &MovieQuery, page: u32) -> Result<MoviePage, CatalogError> {
        debug!(endpoint = query.endpoint(), page, "Fetching TMDB movie page");
        let response: PagedResponse = self.get_json(self.movies_url(query, page)).await?;

        Ok(MoviePage {
            page: response.page.unwrap_or(page),
            total_pages: response.total_pages,
            results: response.results,
        })
    }

    async fn lookup_movie(&self, id: MovieId) -> Result<MovieLookup, CatalogError> {
        debug!(movie_id = %id, "Fetching TMDB movie details with credits");
        let response: MovieDetailsResponse = self.get_json(self.movie_url(id)).await?;
        let credits = response.credits.unwrap_or_default();

        Ok(MovieLookup {
            movie: response.movie,
            genres: response.genres,
            cast: credits.cast,
            crew: credits.crew,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GenreId;
    use std::collections::HashMap;

    fn client() -> TmdbClient {
        let config = CatalogConfig {
            api_key: "secret".to_string(),
            ..CatalogConfig::default()
        };
        TmdbClient::new(&config).unwrap()
    }

    fn params(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn discover_url_applies_year_genre_and_vote_floor() {
        let url = client().movies_url(
            &MovieQuery::Discover {
                year: 2012,
                genre: Some(GenreId::new(28)),
            },
            1,
        );

        assert_eq!(url.path(), "/3/discover/movie");
        let params = params(&url);
        assert_eq!(params["api_key"], "secret");
        assert_eq!(params["sort_by"], "popularity.desc");
        assert_eq!(params["primary_release_year"], "2012");
        assert_eq!(params["with_genres"], "28");
        assert_eq!(params["page"], "1");
        assert_eq!(params["vote_count.gte"], "100");
    }

    #[test]
    fn discover_url_without_genre_omits_filter() {
        let url = client().movies_url(
            &MovieQuery::Discover {
                year: 2012,
                genre: None,
            },
            3,
        );

        let params = params(&url);
        assert!(!params.contains_key("with_genres"));
        assert_eq!(params["page"], "3");
    }

    #[test]
    fn search_url_has_no_discover_filters() {
        let url = client().movies_url(
            &MovieQuery::Search {
                text: "The Matrix".to_string(),
            },
            2,
        );

        assert_eq!(url.path(), "/3/search/movie");
        let params = params(&url);
        assert_eq!(params["query"], "The Matrix");
        assert_eq!(params["page"], "2");
        assert!(!params.contains_key("primary_release_year"));
        assert!(!params.contains_key("with_genres"));
        assert!(!params.contains_key("vote_count.gte"));
    }

    #[test]
    fn movie_url_appends_credits() {
        let url = client().movie_url(MovieId::new(603));

        assert_eq!(url.path(), "/3/movie/603");
        assert_eq!(params(&url)["append_to_response"], "credits");
    }

    #[test]
    fn detail_response_carries_movie_and_credits() {
        let body = r#"{
            "id": 603,
            "title": "The Matrix",
            "release_date": "1999-03-30",
            "vote_average": 8.2,
            "genres": [{"id": 28, "name": "Action"}],
            "credits": {
                "cast": [{"id": 6384, "name": "Keanu Reeves", "character": "Neo"}],
                "crew": [{"id": 9340, "name": "Lana Wachowski", "job": "Director"}]
            }
        }"#;

        let response: MovieDetailsResponse = serde_json::from_str(body).unwrap();
        let movie = response.movie.unwrap();
        assert_eq!(movie.id, MovieId::new(603));
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(response.genres.len(), 1);
        assert_eq!(response.credits.unwrap().crew[0].job, "Director");
    }

    #[test]
    fn trailing_slash_base_url_is_tolerated() {
        let config = CatalogConfig {
            base_url: "http://127.0.0.1:9000/3/".to_string(),
            language: String::new(),
            ..CatalogConfig::default()
        };
        let url = TmdbClient::new(&config).unwrap().genres_url();

        assert_eq!(url.path(), "/3/genre/movie/list");
        assert!(!params(&url).contains_key("language"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = CatalogConfig {
            base_url: "mailto:someone@example.com".to_string(),
            ..CatalogConfig::default()
        };
        assert!(matches!(
            TmdbClient::new(&config),
            Err(CatalogError::InvalidRequest(_))
        ));
    }
}
