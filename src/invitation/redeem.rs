use super::{expiry::is_expired, InvitationToken, InvitationTokenHash, RedeemError};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Check a token presented on an acceptance link against the stored invitation.
///
/// Shape is checked first, then the hash, then the deadline, so an expired
/// invitation is only reported to someone holding the right token. Marking the
/// invitation accepted is left to the caller.
///
/// # Errors
/// Returns the [`RedeemError`] describing why the token was refused.
pub fn verify_invitation(
    presented: &str,
    stored_hash: &InvitationTokenHash,
    expires_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), RedeemError> {
    let token = InvitationToken::parse(presented).map_err(|_| RedeemError::Malformed)?;

    if !stored_hash.matches(token.expose_secret()) {
        debug!("invitation token hash mismatch");
        return Err(RedeemError::Mismatch);
    }

    if is_expired(expires_at, now) {
        debug!(%expires_at, "invitation token expired");
        return Err(RedeemError::Expired);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invitation::{generate_invitation_token, hash_invitation_token};
    use chrono::TimeDelta;

    fn stored(token: &str) -> Option<InvitationTokenHash> {
        hash_invitation_token(token).ok()
    }

    #[test]
    fn accepts_matching_unexpired_token() {
        let token = generate_invitation_token();
        assert!(token.is_ok());
        if let Ok(token) = token {
            let now = Utc::now();
            assert_eq!(
                verify_invitation(
                    token.expose_secret(),
                    &token.hash(),
                    now + TimeDelta::hours(1),
                    now
                ),
                Ok(())
            );
        }
    }

    #[test]
    fn rejects_malformed_token() {
        let hash = stored(&"a".repeat(64));
        assert!(hash.is_some());
        if let Some(hash) = hash {
            let now = Utc::now();
            let expires_at = now + TimeDelta::hours(1);
            let presented = [
                String::new(),
                "not-a-token".to_string(),
                "A".repeat(64),
                "a".repeat(65),
            ];
            for token in &presented {
                assert_eq!(
                    verify_invitation(token, &hash, expires_at, now),
                    Err(RedeemError::Malformed)
                );
            }
        }
    }

    #[test]
    fn rejects_wrong_token() {
        let hash = stored(&"a".repeat(64));
        assert!(hash.is_some());
        if let Some(hash) = hash {
            let now = Utc::now();
            assert_eq!(
                verify_invitation(&"b".repeat(64), &hash, now + TimeDelta::hours(1), now),
                Err(RedeemError::Mismatch)
            );
        }
    }

    #[test]
    fn mismatch_wins_over_expiry() {
        let hash = stored(&"a".repeat(64));
        assert!(hash.is_some());
        if let Some(hash) = hash {
            let now = Utc::now();
            assert_eq!(
                verify_invitation(&"b".repeat(64), &hash, now - TimeDelta::hours(1), now),
                Err(RedeemError::Mismatch)
            );
        }
    }

    #[test]
    fn rejects_expired_token() {
        let token = "c".repeat(64);
        let hash = stored(&token);
        assert!(hash.is_some());
        if let Some(hash) = hash {
            let now = Utc::now();
            assert_eq!(
                verify_invitation(&token, &hash, now, now),
                Err(RedeemError::Expired)
            );
        }
    }
}
