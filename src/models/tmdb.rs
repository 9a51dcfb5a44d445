use serde::Deserialize;

use super::content::{ContentKind, ContentSummary};

/// Raw TMDB discover response page
#[derive(Debug, Deserialize)]
pub struct TmdbDiscoverPage {
    #[serde(default)]
    pub results: Vec<TmdbMovieRow>,
}

/// One row of a TMDB discover response
///
/// Discover rows carry genre ids only; names come from the detail fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieRow {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
}

impl From<TmdbMovieRow> for ContentSummary {
    fn from(row: TmdbMovieRow) -> Self {
        ContentSummary {
            id: row.id,
            title: row.title,
            poster_path: row.poster_path,
            overview: row.overview.unwrap_or_default(),
            vote_average: row.vote_average,
            vote_count: row.vote_count,
            genres: Vec::new(),
            kind: ContentKind::Movie,
        }
    }
}

/// Raw TMDB movie detail response
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
}

/// Genre entry on a TMDB detail record
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    pub id: u64,
    pub name: String,
}

impl From<TmdbMovieDetail> for ContentSummary {
    fn from(detail: TmdbMovieDetail) -> Self {
        ContentSummary {
            id: detail.id,
            title: detail.title,
            poster_path: detail.poster_path,
            overview: detail.overview.unwrap_or_default(),
            vote_average: detail.vote_average,
            vote_count: detail.vote_count,
            genres: detail.genres.into_iter().map(|g| g.name).collect(),
            kind: ContentKind::Movie,
        }
    }
}
