pub mod invite;
pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const CMD_ISSUE: &str = "issue";
pub const CMD_HASH: &str = "hash";
pub const CMD_VERIFY: &str = "verify";
pub const CMD_MASK: &str = "mask";

pub const ARG_EMAIL: &str = "email";
pub const ARG_TOKEN: &str = "token";
pub const ARG_HASH: &str = "hash";
pub const ARG_EXPIRES_AT: &str = "expires-at";

fn issue() -> Command {
    let command = Command::new(CMD_ISSUE)
        .about("Mint an invitation and print it as JSON")
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long("email")
                .help("Invitee email address")
                .required(true),
        );
    invite::with_args(command)
}

fn hash() -> Command {
    Command::new(CMD_HASH)
        .about("Print the storable hash of a token")
        .arg(
            Arg::new(ARG_TOKEN)
                .help("Token to hash")
                .required(true),
        )
}

fn verify() -> Command {
    Command::new(CMD_VERIFY)
        .about("Check a presented token against a stored hash and expiry")
        .arg(
            Arg::new(ARG_TOKEN)
                .short('t')
                .long("token")
                .help("Token taken from the acceptance link")
                .required(true),
        )
        .arg(
            Arg::new(ARG_HASH)
                .long("hash")
                .help("Stored token hash")
                .required(true),
        )
        .arg(
            Arg::new(ARG_EXPIRES_AT)
                .long("expires-at")
                .help("Stored expiry, RFC 3339")
                .required(true),
        )
}

fn mask() -> Command {
    Command::new(CMD_MASK)
        .about("Print an email address masked for display")
        .arg(
            Arg::new(ARG_EMAIL)
                .help("Email address to mask")
                .required(true),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("tripgate")
        .about("Agency invitation tokens")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(issue())
        .subcommand(hash())
        .subcommand(verify())
        .subcommand(mask());

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "tripgate");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Agency invitation tokens".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_issue_args() {
        temp_env::with_vars(
            [
                ("TRIPGATE_INVITE_BASE_URL", None::<&str>),
                ("TRIPGATE_INVITE_HOURS_VALID", None::<&str>),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "tripgate",
                    "issue",
                    "--email",
                    "agent@example.com",
                    "--hours-valid",
                    "72",
                ]);
                let sub = matches.subcommand_matches(CMD_ISSUE);
                assert!(sub.is_some());
                if let Some(sub) = sub {
                    assert_eq!(
                        sub.get_one::<String>(ARG_EMAIL).cloned(),
                        Some("agent@example.com".to_string())
                    );
                    assert_eq!(sub.get_one::<i64>(invite::ARG_HOURS_VALID).copied(), Some(72));
                    assert_eq!(
                        sub.get_one::<String>(invite::ARG_BASE_URL).cloned(),
                        Some("https://tripgate.app".to_string())
                    );
                }
            },
        );
    }

    #[test]
    fn test_issue_env() {
        temp_env::with_vars(
            [
                ("TRIPGATE_INVITE_BASE_URL", Some("https://acme.tripgate.app")),
                ("TRIPGATE_INVITE_HOURS_VALID", Some("12")),
            ],
            || {
                let matches =
                    new().get_matches_from(vec!["tripgate", "issue", "-e", "agent@example.com"]);
                let sub = matches.subcommand_matches(CMD_ISSUE);
                assert!(sub.is_some());
                if let Some(sub) = sub {
                    assert_eq!(sub.get_one::<i64>(invite::ARG_HOURS_VALID).copied(), Some(12));
                    assert_eq!(
                        sub.get_one::<String>(invite::ARG_BASE_URL).cloned(),
                        Some("https://acme.tripgate.app".to_string())
                    );
                }
            },
        );
    }

    #[test]
    fn test_negative_hours_reach_the_parser() {
        let matches = new().try_get_matches_from(vec![
            "tripgate",
            "issue",
            "--email",
            "agent@example.com",
            "--hours-valid",
            "-3",
        ]);
        assert!(matches.is_ok());
    }

    #[test]
    fn test_verify_requires_all_args() {
        let result =
            new().try_get_matches_from(vec!["tripgate", "verify", "--token", "abc", "--hash", "def"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_required() {
        let result = new().try_get_matches_from(vec!["tripgate"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("TRIPGATE_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["tripgate", "mask", "a@example.com"]);
                assert_eq!(
                    matches
                        .get_one::<u8>(logging::ARG_VERBOSITY)
                        .copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("TRIPGATE_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["tripgate".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }
                args.push("mask".to_string());
                args.push("a@example.com".to_string());

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches
                        .get_one::<u8>(logging::ARG_VERBOSITY)
                        .copied(),
                    Some(u8::try_from(index).unwrap_or(u8::MAX))
                );
            });
        }
    }

    #[test]
    fn test_log_format_rejects_unknown() {
        let result =
            new().try_get_matches_from(vec!["tripgate", "--log-format", "xml", "mask", "a@b.c"]);
        assert!(result.is_err());
    }
}
