use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::fs;
use std::sync::Arc;

use crate::lookup::{LookupFailure, LookupReport};
use crate::mapgen;

use super::state::AppState;
use super::static_files;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── Static file handlers ────────────────────────────────────────

pub async fn index() -> Html<&'static str> {
    Html(static_files::INDEX_HTML)
}

pub async fn style() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        static_files::STYLE_CSS,
    )
        .into_response()
}

pub async fn script() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        static_files::APP_JS,
    )
        .into_response()
}

// ─── GET /api/lookup ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LookupQuery {
    pub number: Option<String>,
}

pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupQuery>,
) -> Result<Json<LookupReport>, ApiError> {
    let number = params.number.as_deref().unwrap_or("").trim();
    if number.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Missing 'number' parameter"));
    }

    let result = {
        let pipeline = state.pipeline.lock().unwrap();
        pipeline.lookup(number)
    };

    let result = result.map_err(|e| match e {
        LookupFailure::InvalidFormat(_) | LookupFailure::InvalidNumber(_) => {
            api_error(StatusCode::BAD_REQUEST, e.to_string())
        }
        LookupFailure::Unexpected(_) => {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    })?;

    // Refresh the artifact so /map reflects this lookup. A write failure is
    // not a lookup failure; the report is still returned.
    if let Err(e) = mapgen::write_map(result.coordinates.as_ref(), &state.map_path) {
        if !matches!(e, mapgen::MapError::NoCoordinates) {
            eprintln!("Warning: {}", e);
        }
    }

    Ok(Json(result.report()))
}

// ─── GET /map ────────────────────────────────────────────────────

pub async fn map_artifact(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    match fs::read_to_string(&state.map_path) {
        Ok(html) => Ok(Html(html)),
        Err(_) => Err(api_error(
            StatusCode::NOT_FOUND,
            "No map generated yet. Run a lookup with coordinates first.",
        )),
    }
}
