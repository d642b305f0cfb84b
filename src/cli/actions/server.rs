use crate::{
    api,
    cli::{
        globals::{Environment, GlobalArgs},
        telemetry,
    },
};
use anyhow::Result;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub environment: Environment,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the server fails to bind or serve.
pub async fn execute(args: Args) -> Result<()> {
    let globals = GlobalArgs::new(args.environment);

    info!(
        "{} {} - {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        short_commit(crate::GIT_COMMIT_HASH)
    );

    let result = api::new(args.port, &globals).await;

    telemetry::shutdown_tracer();

    result
}

fn short_commit(hash: &str) -> &str {
    let trimmed = hash.trim();
    trimmed.get(..7).unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_commit() {
        assert_eq!(short_commit("0123456789abcdef"), "0123456");
        assert_eq!(short_commit(" abc "), "abc");
        assert_eq!(short_commit(""), "");
    }
}
