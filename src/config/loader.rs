//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the attendance
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::AttendancePolicy;

/// Loads and validates an attendance policy.
///
/// Every field of the policy file is optional; anything left out keeps the
/// built-in default.
///
/// ```text
/// config/
/// └── policy.yaml   # quota, buffer, remark thresholds, marker patterns
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::PolicyLoader;
///
/// let policy = PolicyLoader::load("./config/policy.yaml")?;
/// println!("Daily quota: {}h", policy.required_hours);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PolicyLoader;

impl PolicyLoader {
    /// Loads the policy file at `path`.
    ///
    /// # Returns
    ///
    /// Returns the validated policy, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A value is out of range (`InvalidPolicy`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<AttendancePolicy> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy = Self::parse(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })?;

        tracing::debug!(path = %path.display(), "loaded attendance policy");
        Ok(policy)
    }

    /// Loads the policy file at `path`, or the defaults when it does not exist.
    ///
    /// A file that exists but is malformed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<AttendancePolicy> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "policy file not found, using defaults");
            return Ok(AttendancePolicy::default());
        }
        Self::load(path)
    }

    /// Parses and validates policy YAML.
    pub fn parse(content: &str) -> EngineResult<AttendancePolicy> {
        let policy: AttendancePolicy =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        policy.validate()?;
        Ok(policy)
    }
}
