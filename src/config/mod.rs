//! Policy configuration for the Attendance Engine.
//!
//! This module provides the fixed attendance policy (daily quota, monthly
//! buffer, remark thresholds and calendar text markers) together with a loader
//! for overriding it from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::PolicyLoader;
//!
//! let policy = PolicyLoader::load("./config/policy.yaml").unwrap();
//! println!("Daily quota: {}h", policy.required_hours);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    ALLOWED_MONTHLY_DEFICIT, AttendancePolicy, EARLY_GO_MINUTE, LATE_MARK_MINUTE,
    MAX_DAILY_HOURS, MarkerPatterns, REQUIRED_HOURS,
};
