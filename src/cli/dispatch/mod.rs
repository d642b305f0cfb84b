use crate::cli::{
    actions::{server::Args, Action},
    commands::{ARG_ENVIRONMENT, ARG_PORT},
    globals::Environment,
};
use anyhow::Result;

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(3000);
    let environment = matches
        .get_one::<String>(ARG_ENVIRONMENT)
        .map(|raw| raw.parse::<Environment>())
        .transpose()?
        .unwrap_or_default();

    Ok(Action::Server(Args { port, environment }))
}
