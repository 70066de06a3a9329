use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use crate::error::Result;
use crate::model::{CreateLinkRequest, CreateLinkResponse};
use crate::state::AppState;

pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>)> {
    let code = state
        .shortener()
        .create_short_link(&request.long_url)
        .await?;

    info!(code = %code, long_url = %request.long_url, "short link created");
    let response = CreateLinkResponse {
        short_url: code.to_url(state.base_url()),
        short_code: code.into_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let long_url = state
        .shortener()
        .get_and_track_long_url(&short_code)
        .await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
}
