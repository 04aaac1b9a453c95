pub mod movie;
pub mod query;

pub use movie::{
    CastMember, CrewMember, DetailFragment, Genre, MovieDetail, MovieLookup, MovieSummary,
};
pub use query::{MoviePage, MovieQuery, QueryState};
