// src/health/mod.rs
mod checker;
mod payload;

pub use checker::{evaluate, DatabaseStatus, HealthOutcome};
pub use payload::HealthPayload;
