//! # Tripgate (agency invitation tokens)
//!
//! `tripgate` owns the invitation token lifecycle used to provision travel
//! agency accounts by email.
//!
//! ## Issuance
//!
//! An invitation is a 32-byte random token rendered as 64 lowercase hex
//! characters. Only its SHA-256 hash and expiry are meant to be persisted; the
//! raw token is embedded once in the emailed acceptance link and then dropped.
//!
//! ## Redemption
//!
//! The token presented on the acceptance link is re-hashed and compared in
//! constant time against the stored hash. Callers get a distinct error for a
//! malformed token, a hash mismatch, and an expired invitation so the UI can
//! word each case.
//!
//! ## Display
//!
//! Invitee addresses shown in pages and audit logs go through
//! [`invitation::mask_email`], which keeps the domain and at most the first and
//! last character of the local part.

pub mod cli;
pub mod invitation;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
