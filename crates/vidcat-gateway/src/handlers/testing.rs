use crate::error::Result;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

/// Wipes the catalog. Only meant for resetting state between test runs.
pub async fn clear_all_handler(State(state): State<AppState>) -> Result<StatusCode> {
    state.catalog().clear().await?;
    info!("catalog cleared");
    Ok(StatusCode::NO_CONTENT)
}
