// src/main.rs
use anyhow::Result;
use backend_verifier::{Stdio, Target, Verifier};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Diagnostics only; the report itself goes through the console
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("backend_verifier=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let verifier = Verifier::new(Target::default())?;
    let mut console = Stdio;

    match verifier.run(&mut console).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            debug!(error = %e, "verification aborted");
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
