/// Catalog data provider abstraction
///
/// This module provides a pluggable architecture for content catalog
/// backends. Each provider implements filtered discovery search and
/// per-item detail lookup; the assembler only ever talks to the trait.
use crate::{
    error::AppResult,
    models::{ContentSummary, QueryFilters},
};

pub mod tmdb;

/// Trait for content catalog providers
///
/// Providers must implement both discovery search (by filters) and detail
/// lookup (by content ID). Using the same provider for both keeps IDs
/// consistent between the candidate list and the detail fetches.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search the catalog with structured filters
    ///
    /// Returns summary rows in the provider's ranking order. Summaries
    /// carry no genre names; those come from `fetch_detail`.
    async fn search(&self, filters: &QueryFilters) -> AppResult<Vec<ContentSummary>>;

    /// Fetch the full detail record for one item
    async fn fetch_detail(&self, content_id: u64) -> AppResult<ContentSummary>;

    /// Fetch detail records for multiple items in parallel
    ///
    /// Default implementation calls fetch_detail for each ID in parallel,
    /// preserving input order. Items whose fetch fails are skipped rather
    /// than failing the batch; an all-failure batch is an empty result.
    async fn fetch_detail_batch(&self, content_ids: Vec<u64>) -> AppResult<Vec<ContentSummary>> {
        let mut tasks = Vec::new();

        for content_id in content_ids {
            let provider = self.clone_for_task();
            let task = tokio::spawn(async move { provider.fetch_detail(content_id).await });
            tasks.push((content_id, task));
        }

        let mut results = Vec::new();
        let mut error_count = 0usize;

        for (content_id, task) in tasks {
            match task.await {
                Ok(Ok(detail)) => results.push(detail),
                Ok(Err(e)) => {
                    tracing::error!(content_id, error = %e, "Detail fetch failed for content");
                    error_count += 1;
                }
                Err(e) => {
                    tracing::error!(content_id, error = %e, "Task join error");
                    error_count += 1;
                }
            }
        }

        if error_count > 0 {
            tracing::warn!(
                success_count = results.len(),
                error_count,
                "Partial detail fetch failure"
            );
        }

        Ok(results)
    }

    /// Clone provider for parallel task execution
    ///
    /// Required because providers need to be moved into tokio tasks.
    fn clone_for_task(&self) -> Box<dyn CatalogProvider>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
