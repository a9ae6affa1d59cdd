use super::{EntropySource, Error, OsEntropy};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;

/// Random bytes per token.
pub const TOKEN_BYTES: usize = 32;

/// Hex length shared by tokens and their SHA-256 hashes.
pub const TOKEN_HEX_LEN: usize = TOKEN_BYTES * 2;

fn is_lower_hex(value: &str) -> bool {
    value.len() == TOKEN_HEX_LEN && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Single-use invitation secret. Shown to the invitee once, never stored.
#[derive(Debug)]
pub struct InvitationToken(SecretString);

impl InvitationToken {
    /// Accept a token presented by a client.
    ///
    /// # Errors
    /// Returns [`Error::MalformedToken`] unless `value` is 64 lowercase hex characters.
    pub fn parse(value: &str) -> Result<Self, Error> {
        if !is_lower_hex(value) {
            return Err(Error::MalformedToken);
        }
        Ok(Self(SecretString::from(value)))
    }

    #[must_use]
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    #[must_use]
    pub fn hash(&self) -> InvitationTokenHash {
        InvitationTokenHash(digest_hex(self.expose_secret()))
    }
}

/// Lowercase hex SHA-256 of a token; the value that gets persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvitationTokenHash(String);

impl InvitationTokenHash {
    /// Load a previously stored hash.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] unless `value` is 64 lowercase hex characters.
    pub fn from_hex(value: &str) -> Result<Self, Error> {
        if !is_lower_hex(value) {
            return Err(Error::InvalidArgument(
                "token hash must be 64 lowercase hex characters".to_string(),
            ));
        }
        Ok(Self(value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Re-hash `presented` and compare against this hash in constant time.
    #[must_use]
    pub fn matches(&self, presented: &str) -> bool {
        let candidate = digest_hex(presented);
        candidate.as_bytes().ct_eq(self.0.as_bytes()).into()
    }
}

impl fmt::Display for InvitationTokenHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for InvitationTokenHash {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<InvitationTokenHash> for String {
    fn from(hash: InvitationTokenHash) -> Self {
        hash.0
    }
}

fn digest_hex(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Create a new invitation token from the OS random source.
///
/// # Errors
/// Returns [`Error::EntropySource`] if the OS random source fails.
pub fn generate_invitation_token() -> Result<InvitationToken, Error> {
    generate_invitation_token_with(&OsEntropy)
}

/// Create a new invitation token from `source`.
///
/// # Errors
/// Returns [`Error::EntropySource`] if `source` cannot produce bytes.
pub fn generate_invitation_token_with(
    source: &dyn EntropySource,
) -> Result<InvitationToken, Error> {
    let mut bytes = [0u8; TOKEN_BYTES];
    source.fill_bytes(&mut bytes)?;
    Ok(InvitationToken(SecretString::from(hex::encode(bytes))))
}

/// Hash any presented token string, including ones this crate did not mint.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `token` is empty.
pub fn hash_invitation_token(token: &str) -> Result<InvitationTokenHash, Error> {
    if token.is_empty() {
        return Err(Error::InvalidArgument("token must not be empty".to_string()));
    }
    Ok(InvitationTokenHash(digest_hex(token)))
}
