use super::{now_timestamp, parse_int, users::lookup, DataResponse};
use crate::{
    api::error::ApiError,
    store::{
        leaderboard::{self as ranking, SortKey, DEFAULT_LIMIT},
        Store,
    },
};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LeaderboardQuery {
    /// Maximum number of entries; missing, unparsable or `0` means 10.
    limit: Option<String>,
    /// `totalDonations` (default) or `monthlyDonations`.
    sort_by: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub id: u64,
    pub name: String,
    pub department: String,
    pub total_donations: u64,
    pub monthly_donations: u64,
    pub referral_code: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Echo of the requested sort key.
    pub sort_by: String,
    pub total_users: usize,
    pub generated_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRank {
    pub user_id: u64,
    pub name: String,
    pub rank: usize,
    pub total_users: usize,
    pub total_donations: u64,
    pub monthly_donations: u64,
}

impl LeaderboardQuery {
    /// Pick the known keys out of the decoded query string. When a key is
    /// repeated the first value wins.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut query.limit,
                "sortBy" => &mut query.sort_by,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// `limit` query value, defaulting to [`DEFAULT_LIMIT`] when missing,
/// unparsable or zero.
fn limit(raw: Option<&str>) -> i64 {
    raw.and_then(parse_int)
        .filter(|limit| *limit != 0)
        .unwrap_or(DEFAULT_LIMIT)
}

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Users ranked by the chosen donation metric.", body = DataResponse<Leaderboard>),
    ),
    tag = "leaderboard"
)]
pub async fn leaderboard(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    store: Extension<Arc<Store>>,
) -> Json<DataResponse<Leaderboard>> {
    let query = match query {
        Ok(Query(pairs)) => LeaderboardQuery::from_pairs(pairs),
        Err(rejection) => {
            debug!("Ignoring query string: {}", rejection);
            LeaderboardQuery::default()
        }
    };

    let sort_by = query
        .sort_by
        .filter(|sort_by| !sort_by.is_empty())
        .unwrap_or_else(|| SortKey::default().as_str().to_string());
    let key = SortKey::parse(&sort_by);
    let limit = limit(query.limit.as_deref());

    debug!(?key, limit, "building leaderboard");

    let users = store.users().await;
    let leaderboard = ranking::leaderboard(&users, key, limit)
        .into_iter()
        .map(|standing| LeaderboardEntry {
            rank: standing.rank,
            id: standing.user.id,
            name: standing.user.name.clone(),
            department: standing.user.department.clone(),
            total_donations: standing.user.total_donations,
            monthly_donations: standing.user.monthly_donations,
            referral_code: standing.user.referral_code.clone(),
        })
        .collect();

    Json(DataResponse::ok(Leaderboard {
        leaderboard,
        sort_by,
        total_users: users.len(),
        generated_at: now_timestamp(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/leaderboard/user/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Position of the user by total donations.", body = DataResponse<UserRank>),
        (status = 404, description = "User not found."),
    ),
    tag = "leaderboard"
)]
pub async fn user_rank(
    id: Result<Path<String>, PathRejection>,
    store: Extension<Arc<Store>>,
) -> Result<Json<DataResponse<UserRank>>, ApiError> {
    let user = lookup(&store, id).await?;

    let users = store.users().await;
    let rank = ranking::rank_of(&users, user.id).ok_or(ApiError::UserNotFound)?;

    Ok(Json(DataResponse::ok(UserRank {
        user_id: user.id,
        name: user.name,
        rank,
        total_users: users.len(),
        total_donations: user.total_donations,
        monthly_donations: user.monthly_donations,
    })))
}
