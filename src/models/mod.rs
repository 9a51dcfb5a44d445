pub mod answers;
pub mod content;
pub mod filters;
pub mod tmdb;

pub use answers::{quick_axis, DeepResponses, ResponseValue, QUICK_ANSWER_COUNT};
pub use content::{ContentKind, ContentSummary, Recommendation};
pub use filters::{Certification, MediaTarget, QueryFilters, SortOrder};
pub use tmdb::{TmdbDiscoverPage, TmdbGenre, TmdbMovieDetail, TmdbMovieRow};
