use super::{now_timestamp, parse_id, DataResponse, CURRENCY};
use crate::{
    api::error::ApiError,
    store::{
        rewards::{rewards_for_user, RewardStatus},
        Store, User,
    },
};
use axum::{
    extract::{rejection::PathRejection, Extension, Path},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub department: String,
    pub join_date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Donations {
    pub user_id: u64,
    pub total_donations: u64,
    pub monthly_donations: u64,
    pub currency: String,
    pub last_updated: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rewards {
    pub user_id: u64,
    pub total_donations: u64,
    pub rewards: Vec<RewardStatus>,
    pub unlocked_count: usize,
    pub total_rewards: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub total_donations: u64,
    pub department: String,
}

/// Resolve a raw path id to a user or fail with `404`. A segment axum cannot
/// decode is treated like any other id that matches nobody.
pub(crate) async fn lookup(
    store: &Store,
    id: Result<Path<String>, PathRejection>,
) -> Result<User, ApiError> {
    let raw_id = match id {
        Ok(Path(raw_id)) => raw_id,
        Err(rejection) => {
            debug!("Unreadable user id: {}", rejection);
            return Err(ApiError::UserNotFound);
        }
    };

    let Some(id) = parse_id(&raw_id) else {
        return Err(ApiError::UserNotFound);
    };

    store.find_user(id).await.ok_or(ApiError::UserNotFound)
}

#[utoipa::path(
    get,
    path = "/api/user/profile/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User profile.", body = DataResponse<Profile>),
        (status = 404, description = "User not found."),
    ),
    tag = "users"
)]
pub async fn profile(
    id: Result<Path<String>, PathRejection>,
    store: Extension<Arc<Store>>,
) -> Result<Json<DataResponse<Profile>>, ApiError> {
    let user = lookup(&store, id).await?;

    Ok(Json(DataResponse::ok(Profile {
        id: user.id,
        name: user.name,
        email: user.email,
        referral_code: user.referral_code,
        department: user.department,
        join_date: user.join_date,
    })))
}

#[utoipa::path(
    get,
    path = "/api/user/donations/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Donation figures for the user.", body = DataResponse<Donations>),
        (status = 404, description = "User not found."),
    ),
    tag = "users"
)]
pub async fn donations(
    id: Result<Path<String>, PathRejection>,
    store: Extension<Arc<Store>>,
) -> Result<Json<DataResponse<Donations>>, ApiError> {
    let user = lookup(&store, id).await?;

    Ok(Json(DataResponse::ok(Donations {
        user_id: user.id,
        total_donations: user.total_donations,
        monthly_donations: user.monthly_donations,
        currency: CURRENCY.to_string(),
        last_updated: now_timestamp(),
    })))
}

#[utoipa::path(
    get,
    path = "/api/user/rewards/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Every reward tier with its unlock state.", body = DataResponse<Rewards>),
        (status = 404, description = "User not found."),
    ),
    tag = "users"
)]
pub async fn rewards(
    id: Result<Path<String>, PathRejection>,
    store: Extension<Arc<Store>>,
) -> Result<Json<DataResponse<Rewards>>, ApiError> {
    let user = lookup(&store, id).await?;
    let rewards = rewards_for_user(user.total_donations);

    Ok(Json(DataResponse::ok(Rewards {
        user_id: user.id,
        total_donations: user.total_donations,
        unlocked_count: rewards.iter().filter(|reward| reward.unlocked).count(),
        total_rewards: rewards.len(),
        rewards,
    })))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Every user.", body = DataResponse<Vec<UserSummary>>),
    ),
    tag = "users"
)]
pub async fn list_users(store: Extension<Arc<Store>>) -> Json<DataResponse<Vec<UserSummary>>> {
    let users = store
        .users()
        .await
        .iter()
        .map(|user| UserSummary {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            referral_code: user.referral_code.clone(),
            total_donations: user.total_donations,
            department: user.department.clone(),
        })
        .collect();

    Json(DataResponse::ok(users))
}
