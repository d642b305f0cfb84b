use super::{DataResponse, CURRENCY};
use crate::store::{analytics::summarize, Store};
use axum::{extract::Extension, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_users: usize,
    pub total_donations_raised: u64,
    pub total_monthly_donations: u64,
    pub average_donations_per_user: u64,
    pub currency: String,
    /// `null` when there are no users.
    pub top_performer: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/analytics/summary",
    responses(
        (status = 200, description = "Totals and averages over every user.", body = DataResponse<AnalyticsSummary>),
    ),
    tag = "analytics"
)]
pub async fn summary(store: Extension<Arc<Store>>) -> Json<DataResponse<AnalyticsSummary>> {
    let summary = summarize(&store.users().await);

    Json(DataResponse::ok(AnalyticsSummary {
        total_users: summary.total_users,
        total_donations_raised: summary.total_donations,
        total_monthly_donations: summary.total_monthly_donations,
        average_donations_per_user: summary.average_donations,
        currency: CURRENCY.to_string(),
        top_performer: summary.top_performer,
    }))
}
