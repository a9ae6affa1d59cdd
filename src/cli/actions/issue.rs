use crate::invitation::{issue_invitation, InvitationPolicy, IssuedInvitation, OsEntropy};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug)]
pub struct Args {
    pub email: String,
    pub policy: InvitationPolicy,
}

/// JSON shape printed by `tripgate issue`. This is the only place the raw token
/// leaves the process.
#[derive(Debug, Serialize)]
pub struct Output {
    pub email: String,
    pub masked_email: String,
    pub token: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub link: String,
}

impl From<IssuedInvitation> for Output {
    fn from(issued: IssuedInvitation) -> Self {
        Self {
            token: issued.token.expose_secret().to_string(),
            email: issued.email,
            masked_email: issued.masked_email,
            token_hash: issued.token_hash.into(),
            created_at: issued.created_at,
            expires_at: issued.expires_at,
            link: issued.link.into(),
        }
    }
}

/// Execute the issue action.
/// # Errors
/// Returns an error if the invitation cannot be issued or serialized.
pub fn execute(args: Args) -> Result<()> {
    let issued = issue_invitation(&args.email, &args.policy, &OsEntropy, Utc::now())
        .context("failed to issue invitation")?;
    let output = serde_json::to_string_pretty(&Output::from(issued))?;
    println!("{output}");
    Ok(())
}
