use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use hearth_core::{HouseholdId, UserId};

use crate::Role;

/// Identity token claims (transport-agnostic).
///
/// This is the minimal set of claims the core expects once a token has been
/// decoded/verified by whatever transport/security layer is in use. Tokens
/// are immutable once issued: changing the household binding requires
/// re-issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityToken {
    /// Subject / user identifier.
    pub subject_id: UserId,

    /// Role granted to the subject.
    pub role: Role,

    /// Household binding. `None` is legal only for `SUPER_ADMIN`.
    pub household_id: Option<HouseholdId>,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,

    #[error("role '{0}' requires a household binding")]
    MissingHouseholdBinding(Role),
}

/// Deterministically validate an identity token.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// is intentionally outside this crate.
pub fn validate_token(
    token: &IdentityToken,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    if token.expires_at <= token.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < token.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= token.expires_at {
        return Err(TokenValidationError::Expired);
    }
    if token.role.is_household_scoped() && token.household_id.is_none() {
        return Err(TokenValidationError::MissingHouseholdBinding(token.role));
    }
    Ok(())
}
