use crate::invitation::{issue::DEFAULT_BASE_URL, InvitationPolicy};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

pub const ARG_BASE_URL: &str = "base-url";
pub const ARG_HOURS_VALID: &str = "hours-valid";

pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_BASE_URL)
                .long("base-url")
                .help("Frontend base URL used for invitation links")
                .env("TRIPGATE_INVITE_BASE_URL")
                .default_value(DEFAULT_BASE_URL),
        )
        .arg(
            Arg::new(ARG_HOURS_VALID)
                .long("hours-valid")
                .help("Hours until the invitation expires")
                .env("TRIPGATE_INVITE_HOURS_VALID")
                .default_value("48")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub base_url: String,
    pub hours_valid: i64,
}

impl Options {
    /// # Errors
    /// Returns an error if a defaulted argument is somehow missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let base_url = matches
            .get_one::<String>(ARG_BASE_URL)
            .cloned()
            .context("missing required argument: --base-url")?;
        let hours_valid = matches
            .get_one::<i64>(ARG_HOURS_VALID)
            .copied()
            .context("missing required argument: --hours-valid")?;
        Ok(Self {
            base_url,
            hours_valid,
        })
    }
}

impl From<Options> for InvitationPolicy {
    fn from(options: Options) -> Self {
        Self {
            hours_valid: options.hours_valid,
            base_url: options.base_url,
        }
    }
}
