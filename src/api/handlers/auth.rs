//! Mock login and registration.
//!
//! Passwords are only checked for presence and the issued token is a fixed
//! prefix plus the user id. No route ever validates it.

use crate::{
    api::error::ApiError,
    store::{NewUser, Store, StoreError, User},
};
use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

const TOKEN_PREFIX: &str = "dummy_jwt_token_";

// Untyped fields: presence is judged by truthiness, not by JSON type.
#[derive(ToSchema, Deserialize, Debug, Default)]
pub struct LoginRequest {
    #[schema(value_type = Option<String>)]
    email: Option<Value>,
    #[schema(value_type = Option<String>)]
    password: Option<Value>,
}

#[derive(ToSchema, Deserialize, Debug, Default)]
pub struct RegisterRequest {
    #[schema(value_type = Option<String>)]
    name: Option<Value>,
    #[schema(value_type = Option<String>)]
    email: Option<Value>,
    #[schema(value_type = Option<String>)]
    password: Option<Value>,
}

#[derive(ToSchema, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    id: u64,
    name: String,
    email: String,
    referral_code: String,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct AuthResponse {
    success: bool,
    message: String,
    user: AuthUser,
    token: String,
}

impl AuthResponse {
    fn new(message: &str, user: User) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            token: token_for(user.id),
            user: AuthUser {
                id: user.id,
                name: user.name,
                email: user.email,
                referral_code: user.referral_code,
            },
        }
    }
}

#[must_use]
pub fn token_for(id: u64) -> String {
    format!("{TOKEN_PREFIX}{id}")
}

/// JavaScript truthiness: `null`, `false`, `0`, `NaN` and `""` count as absent.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn provided(value: Option<Value>) -> Option<Value> {
    value.filter(truthy)
}

/// A provided value that is also a string.
fn provided_text(value: Option<Value>) -> Option<String> {
    match provided(value) {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

fn payload_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            debug!("Ignoring request body: {}", rejection);
            T::default()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful", body = AuthResponse, content_type = "application/json"),
        (status = 401, description = "Unknown email or missing password"),
    ),
    tag = "auth"
)]
#[instrument(skip(store, payload))]
pub async fn login(
    store: Extension<Arc<Store>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let credentials = payload_or_default(payload);

    let user = match provided_text(credentials.email) {
        Some(email) => store.find_user_by_email(&email).await,
        None => None,
    };

    match (user, provided(credentials.password)) {
        (Some(user), Some(_)) => {
            debug!(id = user.id, "login accepted");
            Ok(Json(AuthResponse::new("Login successful", user)))
        }
        _ => {
            warn!("login rejected");
            Err(ApiError::InvalidCredentials)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses (
        (status = 201, description = "User created successfully", body = AuthResponse, content_type = "application/json"),
        (status = 400, description = "Name, email or password missing"),
        (status = 409, description = "A user with the specified email already exists"),
    ),
    tag = "auth"
)]
#[instrument(skip(store, payload))]
pub async fn register(
    store: Extension<Arc<Store>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = payload_or_default(payload);

    let (Some(name), Some(email), Some(_password)) = (
        provided_text(request.name),
        provided_text(request.email),
        provided(request.password),
    ) else {
        return Err(ApiError::MissingFields);
    };

    let user = store
        .register(NewUser { name, email }, Utc::now().date_naive())
        .await
        .map_err(|err| match err {
            StoreError::EmailTaken(email) => {
                warn!(email = %email, "registration rejected: email already registered");
                ApiError::UserExists
            }
        })?;

    info!(id = user.id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new("User created successfully", user)),
    ))
}
