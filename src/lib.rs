// src/lib.rs
pub mod auth;
pub mod config;
pub mod health;
pub mod probe;
pub mod report;
pub mod verifier;

pub use config::Target;
pub use report::{Console, Stdio, Transcript};
pub use verifier::{Verifier, VerifyError};
