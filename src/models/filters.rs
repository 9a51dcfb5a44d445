/// Catalog search filters accumulated from user answers
///
/// The mappers in `services::mapping` build this record; the TMDB
/// provider turns it into discover query parameters. `Default` is the
/// lenient fallback query: popularity-sorted, nothing else constrained.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFilters {
    /// Comma-joined TMDB genre codes to include
    pub genres_include: Option<String>,
    /// Comma-joined TMDB genre codes to exclude
    pub genres_exclude: Option<String>,
    pub sort_by: SortOrder,
    pub vote_average_gte: Option<f64>,
    pub vote_average_lte: Option<f64>,
    pub vote_count_gte: Option<u32>,
    pub vote_count_lte: Option<u32>,
    /// Comma-joined TMDB keyword ids
    pub keywords: Option<String>,
    pub media_type: MediaTarget,
    pub certification: Option<Certification>,
}

impl Default for QueryFilters {
    fn default() -> Self {
        Self {
            genres_include: None,
            genres_exclude: None,
            sort_by: SortOrder::PopularityDesc,
            vote_average_gte: None,
            vote_average_lte: None,
            vote_count_gte: None,
            vote_count_lte: None,
            keywords: None,
            media_type: MediaTarget::All,
            certification: None,
        }
    }
}

impl QueryFilters {
    /// Appends genre codes to the include list, keeping earlier codes first
    pub fn append_genres(&mut self, codes: &str) {
        self.genres_include = Some(match self.genres_include.take() {
            Some(existing) => format!("{},{}", existing, codes),
            None => codes.to_string(),
        });
    }

    /// Replaces the whole inclusion selection with the given genre codes
    ///
    /// Invariant: genre and keyword inclusion form one selection group;
    /// setting either side clears the other.
    pub fn select_genres(&mut self, codes: &str) {
        self.keywords = None;
        self.genres_include = Some(codes.to_string());
    }

    /// Replaces the whole inclusion selection with the given keyword ids
    pub fn select_keywords(&mut self, ids: &str) {
        self.genres_include = None;
        self.keywords = Some(ids.to_string());
    }
}

/// Catalog result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    PopularityDesc,
    VoteCountAsc,
    VoteAverageDesc,
}

impl SortOrder {
    /// TMDB `sort_by` parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::PopularityDesc => "popularity.desc",
            SortOrder::VoteCountAsc => "vote_count.asc",
            SortOrder::VoteAverageDesc => "vote_average.desc",
        }
    }
}

/// Which side of the catalog a query targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaTarget {
    Movie,
    Tv,
    #[default]
    All,
}

/// Certification constraint, e.g. US "G|PG"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub country: String,
    /// Pipe-joined list of acceptable ratings
    pub ratings: String,
}
