use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use stake_delegation_sdk::models::validator::ValidatorInfo;

use super::RouterState;

/// Returns the name, vote account and explorer link of the validator stake is delegated to.
///
/// # Example
/// ```text
/// GET /api/v1/validator
/// ```
pub(crate) async fn get_validator_info(
    State(state): State<Arc<RouterState>>,
) -> impl IntoResponse {
    Json(ValidatorInfo::from_config(&state.stake_config))
}

/// Renders the validator card as HTML.
pub(crate) async fn get_validator_card(
    State(state): State<Arc<RouterState>>,
) -> impl IntoResponse {
    Html(ValidatorInfo::from_config(&state.stake_config).to_html())
}
