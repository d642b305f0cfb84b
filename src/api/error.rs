use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

/// Endpoints advertised by the not-found fallback.
pub const AVAILABLE_ENDPOINTS: [&str; 9] = [
    "POST /api/auth/login",
    "POST /api/auth/register",
    "GET /api/user/profile/:id",
    "GET /api/user/donations/:id",
    "GET /api/user/rewards/:id",
    "GET /api/leaderboard",
    "GET /api/leaderboard/user/:id",
    "GET /api/analytics/summary",
    "GET /api/health",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("User already exists")]
    UserExists,
    #[error("API endpoint not found")]
    EndpointNotFound,
    /// Unhandled failure. The detail is only set in development mode.
    #[error("Internal server error")]
    Internal(Option<String>),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserNotFound | Self::EndpointNotFound => StatusCode::NOT_FOUND,
            Self::UserExists => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> Value {
        let mut body = json!({
            "success": false,
            "message": self.to_string(),
        });

        match self {
            Self::EndpointNotFound => {
                body["availableEndpoints"] = json!(AVAILABLE_ENDPOINTS);
            }
            Self::Internal(detail) => {
                body["error"] = detail.as_ref().map_or_else(|| json!({}), |detail| json!(detail));
            }
            _ => {}
        }

        body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::UserExists.status(), StatusCode::CONFLICT);
        assert_eq!(ApiError::EndpointNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal(None).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn client_error_body() {
        assert_eq!(
            ApiError::UserNotFound.body(),
            json!({ "success": false, "message": "User not found" })
        );
    }

    #[test]
    fn not_found_lists_endpoints() {
        let body = ApiError::EndpointNotFound.body();
        assert_eq!(body["message"], "API endpoint not found");
        assert_eq!(body["availableEndpoints"].as_array().map(Vec::len), Some(9));
        assert_eq!(body["availableEndpoints"][0], "POST /api/auth/login");
    }

    #[test]
    fn internal_detail_is_optional() {
        let hidden = ApiError::Internal(None).body();
        assert_eq!(hidden["message"], "Internal server error");
        assert_eq!(hidden["error"], json!({}));

        let shown = ApiError::Internal(Some("boom".to_string())).body();
        assert_eq!(shown["error"], "boom");
    }
}
