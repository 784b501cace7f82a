//! Attendance report server.
//!
//! Serves `POST /report` on `ATTENDANCE_ADDR` (default `127.0.0.1:3000`)
//! using the policy at `ATTENDANCE_POLICY` (default `./config/policy.yaml`,
//! built-in defaults when that file is absent).

use std::env;
use std::error::Error;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::calculation::AttendanceEngine;
use attendance_engine::config::PolicyLoader;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_POLICY_PATH: &str = "./config/policy.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let policy_path = env::var("ATTENDANCE_POLICY").unwrap_or_else(|_| DEFAULT_POLICY_PATH.to_string());
    let addr = env::var("ATTENDANCE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let policy = PolicyLoader::load_or_default(&policy_path)?;
    tracing::info!(
        policy = %policy_path,
        required_hours = %policy.required_hours,
        "attendance policy ready"
    );

    let engine = AttendanceEngine::new(policy)?;
    let router = create_router(AppState::new(engine));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router).await?;

    Ok(())
}
