// src/auth/mod.rs
mod checker;

pub use checker::{evaluate, AuthOutcome};
