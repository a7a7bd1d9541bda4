//! HTTP API: liveness and recipe generation routes.

use axum::{
    extract::{rejection::JsonRejection, MatchedPath, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::client::GeminiClient;
use crate::recipe::{self, RecipeError, RecipeRequest};

pub type AppState = Arc<GeminiClient>;

/// Error body shared by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(ErrorResponse {
                detail: self.public_message(),
            }),
        )
            .into_response()
    }
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World".to_string(),
    })
}

pub async fn generate_recipe(
    State(client): State<AppState>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!("Rejected recipe request: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(ErrorResponse {
                    detail: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    match recipe::generate_recipe(&client, &request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Routes with request tracing, ready to be served or merged.
pub fn router(client: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/generate-recipe", post(generate_recipe))
        .with_state(client)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str)
                    .unwrap_or(request.uri().path());

                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %matched_path,
                )
            }),
        )
}
