//! # Intern Portal
//!
//! `intern-portal` is a small HTTP API backing the intern portal gamification
//! demo. It serves user profiles, donation figures, reward tiers, leaderboards
//! and an analytics summary out of an in-memory store seeded at startup.
//!
//! ## Data
//!
//! Nothing is persisted. Users are seeded when the process starts and new ones
//! can be appended through registration; records are never updated or removed.
//! Reward tiers are static and "unlocked" is computed on every read from a
//! user's total donations.
//!
//! ## Authentication
//!
//! Login and registration are mock endpoints. The password is only checked for
//! presence and the returned token is never validated by any route, so none of
//! this is fit for a real deployment.
//!
//! ## Responses
//!
//! Every response is JSON with a top-level `success` boolean. Unknown routes
//! return `404` with the list of available endpoints, and a panic while serving
//! a request is turned into a generic `500` envelope.

pub mod api;
pub mod cli;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}
