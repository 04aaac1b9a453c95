use crate::constants::{NOT_AVAILABLE, credits};
use crate::domain::{GenreId, MovieId};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub character: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job: String,
}

/// A movie as listed by discover and search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub overview: String,
}

impl MovieSummary {
    #[must_use]
    pub fn poster_url(&self, image_base: &str, size: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{}/{size}{path}", image_base.trim_end_matches('/')))
    }

    /// Rating rounded to one decimal, or "N/A" when the catalog has none.
    #[must_use]
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(rating) if rating > 0.0 => format!("{:.1}", (rating * 10.0).round() / 10.0),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    /// Release date as `dd/mm/yyyy`, or "N/A" when absent or unparsable.
    #[must_use]
    pub fn release_date_label(&self) -> String {
        self.release_date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
            .map_or_else(
                || NOT_AVAILABLE.to_string(),
                |date| date.format("%d/%m/%Y").to_string(),
            )
    }
}

/// Raw result of a single detail lookup: the movie's own listing fields when
/// the catalog returned them, plus its genres and full credits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieLookup {
    pub movie: Option<MovieSummary>,
    pub genres: Vec<Genre>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

/// The enrichment part of a [`MovieDetail`].
///
/// `DetailFragment::default()` is the neutral fragment used when a lookup
/// fails: callers treat it as "unknown", not as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailFragment {
    pub genres: Vec<Genre>,
    pub cast: Vec<CastMember>,
    pub director: Option<String>,
}

impl From<MovieLookup> for DetailFragment {
    fn from(raw: MovieLookup) -> Self {
        let director = raw
            .crew
            .into_iter()
            .find(|member| member.job == credits::DIRECTOR_JOB)
            .map(|member| member.name);

        let mut cast = raw.cast;
        cast.truncate(credits::MAX_CAST);

        Self {
            genres: raw.genres,
            cast,
            director,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    pub genres: Vec<Genre>,
    pub cast: Vec<CastMember>,
    pub director: Option<String>,
}

impl MovieDetail {
    #[must_use]
    pub fn new(summary: MovieSummary, fragment: DetailFragment) -> Self {
        Self {
            summary,
            genres: fragment.genres,
            cast: fragment.cast,
            director: fragment.director,
        }
    }

    #[must_use]
    pub fn genres_label(&self) -> String {
        join_or_na(self.genres.iter().map(|g| g.name.as_str()))
    }

    #[must_use]
    pub fn cast_label(&self) -> String {
        join_or_na(self.cast.iter().map(|c| c.name.as_str()))
    }

    #[must_use]
    pub fn director_label(&self) -> &str {
        self.director
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }
}

/// Fails, handing the lookup back, when the catalog did not return the
/// movie's own fields.
impl TryFrom<MovieLookup> for MovieDetail {
    type Error = MovieLookup;

    fn try_from(mut lookup: MovieLookup) -> Result<Self, Self::Error> {
        match lookup.movie.take() {
            Some(summary) => Ok(Self::new(summary, DetailFragment::from(lookup))),
            None => Err(lookup),
        }
    }
}

/// A summary surfaced without enrichment carries empty genres and cast.
impl From<MovieSummary> for MovieDetail {
    fn from(summary: MovieSummary) -> Self {
        Self::new(summary, DetailFragment::default())
    }
}

fn join_or_na<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let joined = names.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
