//! Strongly typed identifiers for catalog entities.
//!
//! Movie and genre ids are both plain integers on the wire; the newtypes keep
//! them from being swapped when building catalog queries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier of a movie in the catalog.
///
/// # Examples
///
/// ```rust
/// use moviefix::domain::MovieId;
///
/// let id = MovieId::new(603);
/// assert_eq!(id.value(), 603);
/// assert_eq!(id.to_string(), "603");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(i64);

impl MovieId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

impl FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Unique identifier of a catalog genre.
///
/// # Examples
///
/// ```rust
/// use moviefix::domain::GenreId;
///
/// let action = GenreId::new(28);
/// assert_eq!(action.to_string(), "28");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(i64);

impl GenreId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for GenreId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}
