use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{DeepResponses, Recommendation},
    services::recommendations,
};

use super::AppState;

/// Quick Peek request body
///
/// `answers` defaults to empty when absent so a missing field reports the
/// same validation error as a wrong-length one.
#[derive(Debug, Deserialize)]
pub struct QuickRequest {
    #[serde(default)]
    pub answers: Vec<String>,
}

/// Deep Down request body
#[derive(Debug, Deserialize)]
pub struct DeepRequest {
    #[serde(default)]
    pub responses: DeepResponses,
}

/// Handler for the Quick Peek recommendations endpoint
pub async fn quick(
    State(state): State<AppState>,
    Json(request): Json<QuickRequest>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let recommendations =
        recommendations::quick_recommendations(state.catalog.clone(), &request.answers).await?;
    Ok(Json(recommendations))
}

/// Handler for the Deep Down recommendations endpoint
pub async fn deep(
    State(state): State<AppState>,
    Json(request): Json<DeepRequest>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let recommendations =
        recommendations::deep_recommendations(state.catalog.clone(), &request.responses).await?;
    Ok(Json(recommendations))
}
