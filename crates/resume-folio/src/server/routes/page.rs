//! Portfolio HTML page

use axum::{extract::State, response::Html};

use crate::error::Result;
use crate::render::render_portfolio;
use crate::server::state::AppState;

/// GET / - Rendered portfolio page
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let profile = state.service().get_profile().await?;
    let photo_url = state.photo_url();
    Ok(Html(render_portfolio(&profile, &photo_url)))
}
