pub mod recipes;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use recipebox_core::ValidationErrors;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::store::StoreError;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Per-field validation errors, when the request body was rejected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldErrorResponse>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldErrorResponse {
    pub field: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn response(status: StatusCode, error: &str) -> Response {
        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                fields: Vec::new(),
            }),
        )
            .into_response()
    }

    pub fn validation(errors: &ValidationErrors) -> Response {
        let fields = errors
            .errors()
            .iter()
            .map(|e| FieldErrorResponse {
                field: e.field.to_string(),
                message: e.message.clone(),
            })
            .collect();

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Validation failed".to_string(),
                fields,
            }),
        )
            .into_response()
    }
}

/// Map a store failure to a response; `action` names what was being attempted.
pub fn store_error(err: StoreError, action: &str) -> Response {
    match err {
        StoreError::Validation(errors) => ErrorResponse::validation(&errors),
        StoreError::NotFound => ErrorResponse::response(StatusCode::NOT_FOUND, "Recipe not found"),
        StoreError::Database(e) => {
            tracing::error!("Failed to {}: {}", action, e);
            ErrorResponse::response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Failed to {}", action),
            )
        }
    }
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "recipebox", description = "Recipe catalogue API"),
        components(schemas(ErrorResponse, FieldErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();
    spec.merge(recipes::ApiDoc::openapi());
    spec
}
