// src/report/mod.rs
mod console;

pub use console::{Console, Level, Line, Stdio, Transcript};
