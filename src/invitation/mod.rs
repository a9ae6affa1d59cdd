//! Invitation token lifecycle: generation, hashing, expiry, masking, and the
//! issuance/redemption helpers built on top of them.
//!
//! All functions are synchronous and keep no state between calls.

mod entropy;
mod error;
pub mod expiry;
pub mod issue;
mod mask;
pub mod redeem;
mod token;

pub use self::entropy::{EntropySource, FixedEntropy, OsEntropy};
pub use self::error::{Error, RedeemError};
pub use self::expiry::{default_invitation_expiry, invitation_expiry, DEFAULT_HOURS_VALID};
pub use self::issue::{issue_invitation, InvitationPolicy, IssuedInvitation};
pub use self::mask::mask_email;
pub use self::redeem::verify_invitation;
pub use self::token::{
    generate_invitation_token, generate_invitation_token_with, hash_invitation_token,
    InvitationToken, InvitationTokenHash, TOKEN_BYTES, TOKEN_HEX_LEN,
};
