use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use intern_portal::{
    api::app,
    cli::globals::{Environment, GlobalArgs},
    store::Store,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn call(app: &Router, request: Request<Body>) -> Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

fn get(uri: &str) -> Result<Request<Body>> {
    Ok(Request::builder().uri(uri).body(Body::empty())?)
}

fn post(uri: &str, body: &Value) -> Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?)
}

#[tokio::test]
async fn registered_user_joins_every_view() -> Result<()> {
    let app = app(
        Arc::new(Store::seeded()),
        &GlobalArgs::new(Environment::Development),
    );

    let (status, created) = call(
        &app,
        post(
            "/api/auth/register",
            &json!({ "name": "Priya Patel", "email": "priya@company.com", "password": "pw" }),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["user"]["id"], 6);
    assert_eq!(created["user"]["referralCode"], "PRIYAPATEL2025");

    let (status, login) = call(
        &app,
        post(
            "/api/auth/login",
            &json!({ "email": "priya@company.com", "password": "anything" }),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["token"], "dummy_jwt_token_6");

    let (_, users) = call(&app, get("/api/users")?).await?;
    assert_eq!(users["data"].as_array().map(Vec::len), Some(6));

    let (_, rank) = call(&app, get("/api/leaderboard/user/6")?).await?;
    assert_eq!(rank["data"]["rank"], 6);
    assert_eq!(rank["data"]["totalUsers"], 6);

    let (_, rewards) = call(&app, get("/api/user/rewards/6")?).await?;
    assert_eq!(rewards["data"]["unlockedCount"], 0);
    assert_eq!(rewards["data"]["totalRewards"], 6);

    let (_, summary) = call(&app, get("/api/analytics/summary")?).await?;
    assert_eq!(summary["data"]["totalUsers"], 6);
    assert_eq!(summary["data"]["totalDonationsRaised"], 77900);
    // 77900 / 6 = 12983.33
    assert_eq!(summary["data"]["averageDonationsPerUser"], 12983);
    assert_eq!(summary["data"]["topPerformer"], "David Brown");

    let (status, _) = call(
        &app,
        post(
            "/api/auth/register",
            &json!({ "name": "Priya Again", "email": "priya@company.com", "password": "pw" }),
        )?,
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn concurrent_registrations_get_distinct_ids() -> Result<()> {
    let app = app(Arc::new(Store::seeded()), &GlobalArgs::default());

    let mut handles = Vec::new();
    for n in 0..8 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let body = json!({
                "name": format!("Intern {n}"),
                "email": format!("intern{n}@company.com"),
                "password": "pw",
            });
            call(&app, post("/api/auth/register", &body)?).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        let (status, body) = handle.await??;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["user"]["id"].as_u64().unwrap_or_default());
    }
    ids.sort_unstable();

    assert_eq!(ids, (6..14).collect::<Vec<u64>>());
    Ok(())
}

#[tokio::test]
async fn openapi_document_matches_served_routes() -> Result<()> {
    let doc = intern_portal::api::openapi();
    let app = app(Arc::new(Store::seeded()), &GlobalArgs::default());

    for path in doc.paths.paths.keys() {
        let uri = path.replace("{id}", "1");
        let is_post = path.starts_with("/api/auth/");
        let request = if is_post {
            post(&uri, &json!({}))?
        } else {
            get(&uri)?
        };
        let (status, body) = call(&app, request).await?;

        assert_ne!(
            body["message"], "API endpoint not found",
            "{path} fell through to the fallback"
        );
        if !is_post {
            assert_eq!(status, StatusCode::OK, "{path}");
        }
    }
    Ok(())
}
