//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::profile::CandidateProfile;
use crate::recommendation::{recommend, Recommendation};
use crate::state::AppState;

/// POST /api/jobs/recommendations
///
/// Scores the corpus against the submitted profile and attaches the two
/// narrative documents. A missing `category` field or a `skills` payload
/// that does not decode as a sequence is rejected by JSON extraction before
/// this handler runs — a client error, distinct from provider fallback.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(profile): Json<CandidateProfile>,
) -> Result<Json<Recommendation>, AppError> {
    let recommendation = recommend(
        &state.corpus,
        state.provider.as_ref(),
        state.config.provider_timeout(),
        &profile,
    )
    .await;

    Ok(Json(recommendation))
}
