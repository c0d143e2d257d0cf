use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque payload the worker needs to open its capture session.
///
/// Serializable only so it can cross the worker's bootstrap channel; it is
/// never written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantToken(pub String);

impl GrantToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One-time screen-capture authorization.
///
/// Consumed by value when the worker is started, so a grant cannot be
/// replayed into a second start.
#[derive(Debug, PartialEq, Eq)]
pub struct CaptureGrant {
    token: GrantToken,
}

impl CaptureGrant {
    /// Mints a grant with a fresh token. Called by an authorizer once the
    /// OS has said yes.
    pub fn issue() -> Self {
        Self {
            token: GrantToken(Uuid::new_v4().to_string()),
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: GrantToken(token.into()),
        }
    }

    pub fn into_token(self) -> GrantToken {
        self.token
    }
}

/// Outcome of one authorization request. A dismissed prompt or a torn-down
/// session is reported as `Denied`; there is no separate cancelled state.
#[derive(Debug, PartialEq, Eq)]
pub enum CaptureDecision {
    Granted(CaptureGrant),
    Denied,
}
