// src/verifier/runner.rs
use super::error::VerifyError;
use crate::auth::{self, AuthOutcome};
use crate::config::Target;
use crate::health::{self, DatabaseStatus, HealthOutcome};
use crate::probe::Probe;
use crate::report::Console;
use anyhow::Result;
use tracing::debug;
use url::Url;

/// Runs the health check, then the authentication check, against one backend.
pub struct Verifier {
    probe: Probe,
    port: u16,
    health_url: Url,
    protected_url: Url,
}

impl Verifier {
    pub fn new(target: Target) -> Result<Self> {
        Ok(Self {
            probe: Probe::new()?,
            port: target.port(),
            health_url: target.health_url()?,
            protected_url: target.protected_url()?,
        })
    }

    /// Returns `Err` only when the health request cannot reach the backend;
    /// every other failure is reported to `console` and the run continues.
    pub async fn run<C: Console>(&self, console: &mut C) -> Result<(), VerifyError> {
        console.info("🔍 Verifying Phase 2: Core Setup...");

        self.check_health(console).await?;
        self.check_auth(console).await;

        console.info("");
        console.info("🎉 Phase 2 Verification Complete.");
        Ok(())
    }

    async fn check_health<C: Console>(&self, console: &mut C) -> Result<(), VerifyError> {
        console.info("👉 Testing Database Connection (Health Check)...");

        let response = match self.probe.get(&self.health_url).await {
            Ok(response) => response,
            Err(source) => {
                console.error(format!(
                    "❌ Connection refused. Is the Spring Boot backend running on port {}?",
                    self.port
                ));
                return Err(VerifyError::Unreachable {
                    url: self.health_url.clone(),
                    source,
                });
            }
        };

        let outcome = health::evaluate(&response);
        debug!(?outcome, "health check evaluated");

        match outcome {
            HealthOutcome::Up(database) => {
                console.info("✅ Backend is UP");
                match database {
                    DatabaseStatus::Connected => console.info("✅ Database is CONNECTED"),
                    DatabaseStatus::Unexpected(payload) => {
                        console.error(format!("❌ Database status unknown: {}", payload))
                    }
                    DatabaseStatus::Unparsable => {
                        console.warn("⚠️ Could not parse health response json")
                    }
                }
            }
            HealthOutcome::UnexpectedStatus(status) => {
                console.error(format!("❌ Health check failed with status {}", status))
            }
        }

        Ok(())
    }

    async fn check_auth<C: Console>(&self, console: &mut C) {
        console.info("");
        console.info("👉 Testing Authentication Security...");

        let outcome = auth::evaluate(&self.probe.get(&self.protected_url).await);
        debug!(enforced = outcome.is_enforced(), "authentication check evaluated");

        match outcome {
            AuthOutcome::Enforced(_) => console.info(
                "✅ Authentication Security is ACTIVE (Protected endpoint rejected unauthorized request)",
            ),
            AuthOutcome::Permissive(status) => console.error(format!(
                "❌ Authentication check failed. Expected 401/403, got {}",
                status
            )),
            AuthOutcome::RequestFailed(message) => {
                console.error(format!("❌ Auth check request failed: {}", message))
            }
        }
    }
}
