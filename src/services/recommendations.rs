/// Recommendation Assembler
///
/// Orchestrates one full recommendation cycle: validate the answer set,
/// map it to catalog filters, search (with a one-shot lenient retry when
/// the filtered search comes back empty), bound the candidate list, fetch
/// details in parallel, and compose a justification per surviving item.
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{ContentSummary, DeepResponses, QueryFilters, Recommendation, QUICK_ANSWER_COUNT},
    services::{explain, mapping, providers::CatalogProvider},
};

/// Upper bound on recommendations per response; never padded up to it
const MAX_RECOMMENDATIONS: usize = 3;

/// Produces recommendations for the Quick Peek flow
pub async fn quick_recommendations(
    provider: Arc<dyn CatalogProvider>,
    answers: &[String],
) -> AppResult<Vec<Recommendation>> {
    if answers.len() != QUICK_ANSWER_COUNT {
        return Err(AppError::InvalidInput(
            "Invalid input. Please provide answers to all six questions.".to_string(),
        ));
    }

    let filters = mapping::map_quick_answers(answers);
    let candidates = search_with_fallback(provider.as_ref(), filters).await;
    let details = fetch_top_details(provider.as_ref(), candidates).await;

    Ok(details
        .into_iter()
        .map(|detail| {
            let explanation = explain::explain_quick(&detail, answers);
            Recommendation::from_summary(detail, explanation, false)
        })
        .collect())
}

/// Produces recommendations for the Deep Down flow
pub async fn deep_recommendations(
    provider: Arc<dyn CatalogProvider>,
    responses: &DeepResponses,
) -> AppResult<Vec<Recommendation>> {
    if responses.is_empty() {
        return Err(AppError::InvalidInput(
            "Invalid input. Please provide conversation responses.".to_string(),
        ));
    }

    let filters = mapping::map_deep_responses(responses);
    let candidates = search_with_fallback(provider.as_ref(), filters).await;
    let details = fetch_top_details(provider.as_ref(), candidates).await;

    Ok(details
        .into_iter()
        .map(|detail| {
            let explanation = explain::explain_deep(&detail, responses);
            Recommendation::from_summary(detail, explanation, true)
        })
        .collect())
}

/// Runs the filtered search, retrying once with lenient defaults
///
/// The retry happens exactly once, only when the filtered search comes
/// back empty. Transport errors reduce to an empty candidate list, so
/// an unreachable catalog yields an empty response instead of a failure.
async fn search_with_fallback(
    provider: &dyn CatalogProvider,
    filters: QueryFilters,
) -> Vec<ContentSummary> {
    match provider.search(&filters).await {
        Ok(candidates) if !candidates.is_empty() => return candidates,
        Ok(_) => {
            tracing::info!(
                provider = provider.name(),
                "Filtered search returned no candidates, retrying leniently"
            );
        }
        Err(e) => {
            tracing::error!(
                provider = provider.name(),
                error = %e,
                "Filtered search failed, retrying leniently"
            );
        }
    }

    match provider.search(&QueryFilters::default()).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!(
                provider = provider.name(),
                error = %e,
                "Lenient search failed"
            );
            Vec::new()
        }
    }
}

/// Bounds candidates to the top slots and fetches their detail records
///
/// Detail order follows candidate order; candidates whose detail fetch
/// fails are dropped, so the result may be shorter than the cutoff.
async fn fetch_top_details(
    provider: &dyn CatalogProvider,
    candidates: Vec<ContentSummary>,
) -> Vec<ContentSummary> {
    let ids: Vec<u64> = candidates
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|candidate| candidate.id)
        .collect();

    if ids.is_empty() {
        return Vec::new();
    }

    match provider.fetch_detail_batch(ids).await {
        Ok(details) => details,
        Err(e) => {
            tracing::error!(
                provider = provider.name(),
                error = %e,
                "Detail batch failed"
            );
            Vec::new()
        }
    }
}
