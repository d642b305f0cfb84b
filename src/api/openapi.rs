use crate::api::handlers::{analytics, auth, health, leaderboard, users};
use utoipa::openapi::{Contact, InfoBuilder, License, OpenApiBuilder, Tag};
use utoipa_axum::{router::OpenApiRouter, routes};

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Reuse the same router wiring and only return the generated document.
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Build the router that also drives the `OpenAPI` document.
///
/// Add new endpoints here via `.routes(routes!(...))` so they are both served
/// and included in the generated `OpenAPI` document. The not-found fallback is
/// attached later and is not documented.
pub(crate) fn api_router() -> OpenApiRouter {
    let mut router = OpenApiRouter::with_openapi(cargo_openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::register))
        .routes(routes!(users::profile))
        .routes(routes!(users::donations))
        .routes(routes!(users::rewards))
        .routes(routes!(users::list_users))
        .routes(routes!(leaderboard::leaderboard))
        .routes(routes!(leaderboard::user_rank))
        .routes(routes!(analytics::summary))
        .routes(routes!(health::health));

    router.get_openapi_mut().tags = Some(vec![
        tag("auth", "Mock login and registration"),
        tag("users", "Profiles, donations and rewards"),
        tag("leaderboard", "Donation rankings"),
        tag("analytics", "Aggregate figures"),
        tag("health", "Service status"),
    ]);

    router
}

fn tag(name: &str, description: &str) -> Tag {
    let mut tag = Tag::new(name);
    tag.description = Some(description.to_string());
    tag
}

fn cargo_openapi() -> utoipa::openapi::OpenApi {
    // Use Cargo.toml metadata instead of the utoipa-axum crate info defaults.
    let mut info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(optional_str(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    info.contact = cargo_contact();
    info.license = cargo_license();

    OpenApiBuilder::new().info(info).build()
}

fn cargo_contact() -> Option<Contact> {
    // Cargo authors are `;` separated and may include "Name <email>".
    let authors = env!("CARGO_PKG_AUTHORS");
    let primary = authors.split(';').next().map(str::trim)?;
    if primary.is_empty() {
        return None;
    }

    let (name, email) = parse_author(primary);
    if name.is_none() && email.is_none() {
        return None;
    }

    let mut contact = Contact::new();
    contact.name = name.map(str::to_string);
    contact.email = email.map(str::to_string);
    Some(contact)
}

fn cargo_license() -> Option<License> {
    let identifier = optional_str(env!("CARGO_PKG_LICENSE"))?;
    let mut license = License::new(identifier);
    license.identifier = Some(identifier.to_string());
    Some(license)
}

fn optional_str(value: &'static str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn parse_author(author: &str) -> (Option<&str>, Option<&str>) {
    if let Some(start) = author.find('<') {
        let name = author[..start].trim();
        let email = author[start + 1..].trim_end_matches('>').trim();
        let name = if name.is_empty() { None } else { Some(name) };
        let email = if email.is_empty() { None } else { Some(email) };
        (name, email)
    } else {
        let name = author.trim();
        (if name.is_empty() { None } else { Some(name) }, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_author_with_email() {
        assert_eq!(
            parse_author("Intern Portal Team <team@intern-portal.dev>"),
            (Some("Intern Portal Team"), Some("team@intern-portal.dev"))
        );
        assert_eq!(parse_author("<only@mail.dev>"), (None, Some("only@mail.dev")));
        assert_eq!(parse_author("Solo"), (Some("Solo"), None));
        assert_eq!(parse_author("  "), (None, None));
    }

    #[test]
    fn document_lists_every_route() {
        let doc = openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/auth/login",
            "/api/auth/register",
            "/api/user/profile/{id}",
            "/api/user/donations/{id}",
            "/api/user/rewards/{id}",
            "/api/users",
            "/api/leaderboard",
            "/api/leaderboard/user/{id}",
            "/api/analytics/summary",
            "/api/health",
        ] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }

        assert_eq!(doc.info.title, env!("CARGO_PKG_NAME"));
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));
    }
}
