//! Issuance workflow: everything the inviting side needs in one call.

use super::{
    expiry::{expiry_from, DEFAULT_HOURS_VALID},
    generate_invitation_token_with, mask_email, EntropySource, Error, InvitationToken,
    InvitationTokenHash,
};
use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://tripgate.app";

const ACCEPT_PATH: &str = "invitations/accept";

/// Normalize an email for lookup/uniqueness checks.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic email format check on already-normalized input.
#[must_use]
pub fn valid_email(email_normalized: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email_normalized))
}

/// Build the acceptance link embedded in the invitation email.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `base_url` is not an absolute URL.
pub fn invitation_link(base_url: &str, token: &str) -> Result<Url, Error> {
    let base = base_url.trim_end_matches('/');
    let mut link = Url::parse(&format!("{base}/{ACCEPT_PATH}"))
        .map_err(|err| Error::InvalidArgument(format!("invalid base url {base_url}: {err}")))?;
    link.query_pairs_mut().append_pair("token", token);
    Ok(link)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationPolicy {
    pub hours_valid: i64,
    pub base_url: String,
}

impl Default for InvitationPolicy {
    fn default() -> Self {
        Self {
            hours_valid: DEFAULT_HOURS_VALID,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// A freshly minted invitation. Persist `token_hash` and `expires_at`, email `link`,
/// then drop the value so the raw token goes with it.
#[derive(Debug)]
pub struct IssuedInvitation {
    pub email: String,
    pub masked_email: String,
    pub token: InvitationToken,
    pub token_hash: InvitationTokenHash,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub link: Url,
}

/// Mint an invitation for `email` at `now`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] for an invalid email, non-positive validity or a
/// bad base URL, and [`Error::EntropySource`] if no random bytes are available.
pub fn issue_invitation(
    email: &str,
    policy: &InvitationPolicy,
    source: &dyn EntropySource,
    now: DateTime<Utc>,
) -> Result<IssuedInvitation, Error> {
    let email = normalize_email(email);
    let masked_email = mask_email(&email);
    if !valid_email(&email) {
        debug!(email = %masked_email, "rejecting invitation for invalid email");
        return Err(Error::InvalidArgument("invalid email address".to_string()));
    }

    let expires_at = expiry_from(now, policy.hours_valid)?;
    let token = generate_invitation_token_with(source)?;
    let token_hash = token.hash();
    let link = invitation_link(&policy.base_url, token.expose_secret())?;

    info!(email = %masked_email, %expires_at, "invitation issued");

    Ok(IssuedInvitation {
        email,
        masked_email,
        token,
        token_hash,
        created_at: now,
        expires_at,
        link,
    })
}
