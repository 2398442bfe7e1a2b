// src/config/mod.rs
use anyhow::{Context, Result};
use url::Url;

/// The backend is always expected on this address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";
pub const DEFAULT_PORT: u16 = 8080;

pub const HEALTH_PATH: &str = "/api/health";
pub const PROTECTED_PATH: &str = "/api/stores/me";

/// Where the verifier sends its two requests.
#[derive(Debug, Clone)]
pub struct Target {
    base: Url,
}

impl Target {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Parse a base such as `http://127.0.0.1:1234` (mock servers in tests).
    pub fn parse(base: &str) -> Result<Self> {
        let base = Url::parse(base).with_context(|| format!("Invalid base URL: {}", base))?;
        Ok(Self::new(base))
    }

    pub fn port(&self) -> u16 {
        self.base.port_or_known_default().unwrap_or(DEFAULT_PORT)
    }

    pub fn health_url(&self) -> Result<Url> {
        self.join(HEALTH_PATH)
    }

    pub fn protected_url(&self) -> Result<Url> {
        self.join(PROTECTED_PATH)
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .with_context(|| format!("Failed to build URL for {}", path))
    }
}

impl Default for Target {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL must be a valid URL"),
        }
    }
}
