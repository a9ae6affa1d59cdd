use crate::invitation::hash_invitation_token;
use anyhow::{Context, Result};

#[derive(Debug)]
pub struct Args {
    pub token: String,
}

/// Execute the hash action.
/// # Errors
/// Returns an error if the token is empty.
pub fn execute(args: &Args) -> Result<()> {
    let hash = hash_invitation_token(&args.token).context("failed to hash token")?;
    println!("{hash}");
    Ok(())
}
