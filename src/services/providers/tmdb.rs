/// TMDB API provider
///
/// Provides filtered discovery search and per-item detail lookup against
/// The Movie Database v3 API.
///
/// API Flow:
/// 1. Search: /discover/movie with filter-derived query parameters
/// 2. Detail: /movie/{id} for genre names and authoritative fields
use crate::{
    error::{AppError, AppResult},
    models::{ContentSummary, QueryFilters, TmdbDiscoverPage, TmdbMovieDetail},
    services::providers::CatalogProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Builds the discover query string pairs for a filter set
    ///
    /// Only constrained fields emit a parameter; the baseline pairs are
    /// always present so an unconstrained filter set is still a valid
    /// popularity-sorted query.
    fn discover_params(&self, filters: &QueryFilters) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("api_key", self.api_key.clone()),
            ("language", "en-US".to_string()),
            ("include_adult", "false".to_string()),
            ("sort_by", filters.sort_by.as_str().to_string()),
        ];

        if let Some(genres) = &filters.genres_include {
            params.push(("with_genres", genres.clone()));
        }
        if let Some(genres) = &filters.genres_exclude {
            params.push(("without_genres", genres.clone()));
        }
        if let Some(keywords) = &filters.keywords {
            params.push(("with_keywords", keywords.clone()));
        }
        if let Some(gte) = filters.vote_average_gte {
            params.push(("vote_average.gte", gte.to_string()));
        }
        if let Some(lte) = filters.vote_average_lte {
            params.push(("vote_average.lte", lte.to_string()));
        }
        if let Some(gte) = filters.vote_count_gte {
            params.push(("vote_count.gte", gte.to_string()));
        }
        if let Some(lte) = filters.vote_count_lte {
            params.push(("vote_count.lte", lte.to_string()));
        }
        if let Some(certification) = &filters.certification {
            params.push(("certification_country", certification.country.clone()));
            params.push(("certification", certification.ratings.clone()));
        }

        params
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn search(&self, filters: &QueryFilters) -> AppResult<Vec<ContentSummary>> {
        let url = format!("{}/discover/movie", self.api_url);
        let params = self.discover_params(filters);

        let response = self.http_client.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let page: TmdbDiscoverPage = response.json().await?;
        let summaries: Vec<ContentSummary> =
            page.results.into_iter().map(ContentSummary::from).collect();

        tracing::info!(
            results = summaries.len(),
            sort_by = filters.sort_by.as_str(),
            provider = "tmdb",
            "Discover search completed"
        );

        Ok(summaries)
    }

    async fn fetch_detail(&self, content_id: u64) -> AppResult<ContentSummary> {
        let url = format!("{}/movie/{}", self.api_url, content_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let detail: TmdbMovieDetail = response.json().await?;

        tracing::debug!(
            content_id,
            title = %detail.title,
            provider = "tmdb",
            "Detail fetched"
        );

        Ok(detail.into())
    }

    fn clone_for_task(&self) -> Box<dyn CatalogProvider> {
        Box::new(self.clone())
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
