pub const DEFAULT_RELEASE_YEAR: i32 = 2012;

pub const NOT_AVAILABLE: &str = "N/A";

pub mod catalog {

    pub const TMDB_API: &str = "https://api.themoviedb.org/3";

    pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

    pub const POSTER_SIZE: &str = "w500";

    pub const DEFAULT_LANGUAGE: &str = "en-US";

    pub const MIN_VOTE_COUNT: u32 = 100;

    pub const SORT_BY_POPULARITY: &str = "popularity.desc";

    /// Highest page number the catalog accepts.
    pub const MAX_PAGE: u32 = 500;
}

pub mod credits {

    pub const MAX_CAST: usize = 5;

    pub const DIRECTOR_JOB: &str = "Director";
}

pub mod limits {

    pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;

    pub const MIN_RELEASE_YEAR: i32 = 1874;

    pub const MAX_RELEASE_YEAR: i32 = 2100;
}
