//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST endpoint that computes an attendance report
//! from a calendar feed snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CellRequest, ReportRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
