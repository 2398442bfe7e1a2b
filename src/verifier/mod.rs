// src/verifier/mod.rs
mod error;
mod runner;

pub use error::VerifyError;
pub use runner::Verifier;
