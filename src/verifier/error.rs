// src/verifier/error.rs
use crate::probe::ProbeError;
use url::Url;

/// The only condition that stops a verification run early.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("Backend unreachable at {url}: {source}")]
    Unreachable {
        url: Url,
        #[source]
        source: ProbeError,
    },
}

impl VerifyError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            VerifyError::Unreachable { .. } => 1,
        }
    }
}
