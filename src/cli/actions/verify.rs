use crate::invitation::{verify_invitation, InvitationTokenHash, RedeemError};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub token: String,
    pub hash: String,
    pub expires_at: String,
}

/// Outcome label printed on stdout.
#[must_use]
pub fn status(result: Result<(), RedeemError>) -> &'static str {
    match result {
        Ok(()) => "valid",
        Err(RedeemError::Malformed) => "malformed",
        Err(RedeemError::Mismatch) => "mismatch",
        Err(RedeemError::Expired) => "expired",
    }
}

/// Execute the verify action.
/// # Errors
/// Returns an error if the stored values cannot be parsed or the token is refused.
pub fn execute(args: &Args) -> Result<()> {
    let stored_hash = InvitationTokenHash::from_hex(&args.hash).context("invalid --hash")?;
    let expires_at = DateTime::parse_from_rfc3339(&args.expires_at)
        .context("invalid --expires-at, expected RFC 3339")?
        .with_timezone(&Utc);

    let result = verify_invitation(&args.token, &stored_hash, expires_at, Utc::now());
    let label = status(result);
    info!(status = label, "invitation verified");
    println!("{label}");

    if let Err(err) = result {
        bail!(err);
    }
    Ok(())
}
