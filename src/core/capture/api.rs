//! Lead-capture API endpoint
//!
//! REST endpoint the email form posts to:
//! - POST /api/subscribe - Register an address for the download link
//!
//! The address is acknowledged and logged with a capture id; fulfilment
//! (sending the actual download link) happens out of band.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::validation::validate_email;

/// Capture request body
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

/// Capture acknowledgement
#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub status: &'static str,
    pub capture_id: Uuid,
}

/// API error response body
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

/// Capture API error types
#[derive(Debug, thiserror::Error)]
pub enum CaptureApiError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

impl IntoResponse for CaptureApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            CaptureApiError::InvalidEmail(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_EMAIL"),
        };

        let body = ApiError {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// POST /api/subscribe - register an address for the download link
async fn subscribe(
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, CaptureApiError> {
    let email = req.email.trim();
    validate_email(email).map_err(|e| CaptureApiError::InvalidEmail(e.to_string()))?;

    let capture_id = Uuid::new_v4();
    tracing::info!(%capture_id, email, "lead captured");

    Ok(Json(SubscribeResponse {
        status: "ok",
        capture_id,
    }))
}

/// Build the capture API router
pub fn capture_router() -> Router {
    Router::new().route("/api/subscribe", post(subscribe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_a_valid_address() {
        let result = subscribe(Json(SubscribeRequest {
            email: "a@b.com".to_string(),
        }))
        .await;

        let body = result.expect("valid address refused");
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn trims_before_validating() {
        let result = subscribe(Json(SubscribeRequest {
            email: "  a@b.com  ".to_string(),
        }))
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn refuses_an_invalid_address() {
        let result = subscribe(Json(SubscribeRequest {
            email: "not-an-address".to_string(),
        }))
        .await;

        assert!(matches!(result, Err(CaptureApiError::InvalidEmail(_))));
    }
}
