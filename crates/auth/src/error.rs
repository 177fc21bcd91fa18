use thiserror::Error;

/// Access-control error.
///
/// Every variant is an expected, locally recoverable outcome surfaced at the
/// point of violation and propagated unchanged to the request boundary. The
/// core never retries and never swallows these; each maps to a distinct
/// user-facing message at whatever boundary wraps it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// No household could be determined for the request. The caller must
    /// prompt the operator for an explicit household selection.
    #[error("no household context could be resolved; select a household first")]
    MissingTenant,

    /// Actor lacks the role required for the attempted operation.
    #[error("not authorized for this operation")]
    NotAuthorized,

    /// Operator already has an active impersonation session.
    #[error("an impersonation session is already active for this operator")]
    AlreadyImpersonating,

    /// Operator attempted to impersonate themselves.
    #[error("cannot impersonate yourself")]
    SelfImpersonation,

    /// The impersonation target does not exist.
    #[error("impersonation target user not found")]
    TargetNotFound,

    /// No active impersonation session to end.
    #[error("no active impersonation session for this operator")]
    NoActiveSession,

    /// Write blocked because the acting household is suspended. Carries the
    /// optional human-readable suspension reason for display.
    #[error("household is suspended: {}", reason.as_deref().unwrap_or("no reason given"))]
    HouseholdSuspended { reason: Option<String> },
}

pub type AccessResult<T> = Result<T, AccessError>;
