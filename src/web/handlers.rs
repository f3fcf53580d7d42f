//! Request handlers for the image discovery API.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::AppState;
use crate::images::NamedFolder;

/// Query parameters of `GET /api/images`.
///
/// All three are optional at the wire level; which combination is present
/// selects the lookup mode, in the priority order of [`images_handler`].
#[derive(Debug, Deserialize)]
pub struct ImageParams {
    /// `professional`, `personal`, or `projects`
    folder: Option<String>,
    /// `background` switches to single-image mode, overriding `folder`
    #[serde(rename = "type")]
    kind: Option<String>,
    /// Project slug; required alongside `folder=projects`
    project: Option<String>,
}

#[derive(Serialize)]
struct ImagesResponse {
    images: Vec<String>,
}

#[derive(Serialize)]
struct BackgroundResponse {
    image: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "portfolio-assets",
    }))
}

/// Image discovery endpoint. First matching mode wins:
///
/// 1. `type=background` — single image or `null`, always 200
/// 2. `folder=projects` with a non-empty `project` — gallery listing, 200
/// 3. `folder=professional|personal` — named listing, 200
/// 4. anything else — 400 `Invalid folder`
///
/// Filesystem trouble never surfaces here; the library degrades to an
/// empty result and the pages fall back to their hardcoded lists.
pub async fn images_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ImageParams>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    if params.kind.as_deref() == Some("background") {
        let image = state.library.background();
        return Ok(Json(BackgroundResponse { image }).into_response());
    }

    if params.folder.as_deref() == Some("projects") {
        if let Some(project) = params.project.as_deref().filter(|p| !p.is_empty()) {
            let images = state.library.project_gallery(project);
            return Ok(Json(ImagesResponse { images }).into_response());
        }
    }

    match params.folder.as_deref().and_then(NamedFolder::from_param) {
        Some(folder) => {
            let images = state.library.collection(folder);
            Ok(Json(ImagesResponse { images }).into_response())
        }
        None => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid folder".to_string(),
            }),
        )),
    }
}
