//! Map validated CLI matches to an [`Action`].

use crate::cli::actions::{hash, issue, mask, verify, Action};
use crate::cli::commands::{
    invite, ARG_EMAIL, ARG_EXPIRES_AT, ARG_HASH, ARG_TOKEN, CMD_HASH, CMD_ISSUE, CMD_MASK,
    CMD_VERIFY,
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: {id}"))
}

/// # Errors
/// Returns an error if the subcommand is unknown or a required argument is missing.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((CMD_ISSUE, sub_m)) => Ok(Action::Issue(issue::Args {
            email: required(sub_m, ARG_EMAIL)?,
            policy: invite::Options::parse(sub_m)?.into(),
        })),
        Some((CMD_HASH, sub_m)) => Ok(Action::Hash(hash::Args {
            token: required(sub_m, ARG_TOKEN)?,
        })),
        Some((CMD_VERIFY, sub_m)) => Ok(Action::Verify(verify::Args {
            token: required(sub_m, ARG_TOKEN)?,
            hash: required(sub_m, ARG_HASH)?,
            expires_at: required(sub_m, ARG_EXPIRES_AT)?,
        })),
        Some((CMD_MASK, sub_m)) => Ok(Action::Mask(mask::Args {
            email: required(sub_m, ARG_EMAIL)?,
        })),
        Some((other, _)) => Err(anyhow!("unknown subcommand: {other}")),
        None => Err(anyhow!("missing subcommand")),
    }
}
