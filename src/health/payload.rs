// src/health/payload.rs
use serde::Deserialize;

pub const DATABASE_CONNECTED: &str = "connected";

/// Body of `GET /api/health`: `{ "data": { "database": "connected" } }`.
///
/// Every field is optional so that valid JSON of another shape still
/// deserializes and can be reported as an unexpected payload.
#[derive(Debug, Default, Deserialize)]
pub struct HealthPayload {
    #[serde(default)]
    pub data: Option<HealthData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HealthData {
    #[serde(default)]
    pub database: Option<String>,
}

impl HealthPayload {
    pub fn database_connected(&self) -> bool {
        self.data
            .as_ref()
            .and_then(|data| data.database.as_deref())
            == Some(DATABASE_CONNECTED)
    }
}
