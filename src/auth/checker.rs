// src/auth/checker.rs
use crate::probe::{ProbeError, ProbeResponse};
use reqwest::StatusCode;

/// Result of calling the protected endpoint without credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Rejected with 401 or 403.
    Enforced(u16),
    /// Anything else got through (or failed in an unexpected way).
    Permissive(u16),
    RequestFailed(String),
}

impl AuthOutcome {
    pub fn is_enforced(&self) -> bool {
        matches!(self, AuthOutcome::Enforced(_))
    }
}

pub fn evaluate(result: &Result<ProbeResponse, ProbeError>) -> AuthOutcome {
    match result {
        Ok(response) => match StatusCode::from_u16(response.status) {
            Ok(StatusCode::UNAUTHORIZED) | Ok(StatusCode::FORBIDDEN) => {
                AuthOutcome::Enforced(response.status)
            }
            _ => AuthOutcome::Permissive(response.status),
        },
        Err(e) => AuthOutcome::RequestFailed(e.to_string()),
    }
}
