use super::Error;
use chrono::{DateTime, TimeDelta, Utc};

pub const DEFAULT_HOURS_VALID: i64 = 48;

/// Expiry `hours_valid` hours after `now`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `hours_valid` is not positive or the result
/// falls outside the representable time range.
pub fn expiry_from(now: DateTime<Utc>, hours_valid: i64) -> Result<DateTime<Utc>, Error> {
    if hours_valid <= 0 {
        return Err(Error::InvalidArgument(format!(
            "hours valid must be positive, got {hours_valid}"
        )));
    }
    TimeDelta::try_hours(hours_valid)
        .and_then(|offset| now.checked_add_signed(offset))
        .ok_or_else(|| {
            Error::InvalidArgument(format!("hours valid out of range: {hours_valid}"))
        })
}

/// Expiry `hours_valid` hours from the current time.
///
/// # Errors
/// See [`expiry_from`].
pub fn invitation_expiry(hours_valid: i64) -> Result<DateTime<Utc>, Error> {
    expiry_from(Utc::now(), hours_valid)
}

/// Expiry [`DEFAULT_HOURS_VALID`] hours from the current time.
///
/// # Errors
/// See [`expiry_from`].
pub fn default_invitation_expiry() -> Result<DateTime<Utc>, Error> {
    invitation_expiry(DEFAULT_HOURS_VALID)
}

#[must_use]
pub fn is_expired(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now >= expires_at
}
