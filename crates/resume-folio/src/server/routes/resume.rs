//! Resume JSON endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::Profile;

/// GET /api/resume - Profile as JSON
pub async fn get_resume(State(state): State<AppState>) -> Result<Json<Profile>> {
    let profile = state.service().get_profile().await?;
    Ok(Json(profile))
}
