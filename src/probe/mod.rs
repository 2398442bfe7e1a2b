// src/probe/mod.rs
mod client;

pub use client::{Probe, ProbeError, ProbeResponse};
