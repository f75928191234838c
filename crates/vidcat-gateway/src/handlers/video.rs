use crate::error::{AppError, Result};
use crate::model::VideoResponse;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use tracing::debug;
use vidcat_core::validation::{validate_create, validate_update};
use vidcat_core::VideoId;

type Payload = std::result::Result<Json<Value>, JsonRejection>;

/// Unwraps a JSON body. A missing or unparsable body counts as an empty
/// payload, so validation reports every required field.
fn payload_value(payload: Payload) -> Value {
    match payload {
        Ok(Json(value)) => value,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "unreadable request body");
            Value::Null
        }
    }
}

/// Ids that don't parse can never match a record.
fn parse_id(raw: &str) -> Result<VideoId> {
    raw.parse().map_err(|_| AppError::NotFound)
}

pub async fn list_videos_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<VideoResponse>>> {
    let videos = state.catalog().list().await?;
    Ok(Json(videos.into_iter().map(VideoResponse::from).collect()))
}

pub async fn create_video_handler(
    State(state): State<AppState>,
    payload: Payload,
) -> Result<(StatusCode, Json<VideoResponse>)> {
    let video = validate_create(&payload_value(payload))?;
    let record = state.catalog().create(video).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

pub async fn get_video_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VideoResponse>> {
    let id = parse_id(&id)?;
    let record = state.catalog().get(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(record.into()))
}

pub async fn update_video_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Payload,
) -> Result<StatusCode> {
    let update = validate_update(&payload_value(payload))?;
    let id = parse_id(&id)?;
    state.catalog().update(id, update).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_video_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    if state.catalog().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
