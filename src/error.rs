//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building an attendance report.

use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// Data-shape anomalies in the calendar feed (unparsable day numbers, missing
/// punch intervals, an empty feed) are absorbed by the engine and never show
/// up here. Only policy problems and collaborator contract violations do.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::FormatError {
///     text: "9h10".to_string(),
///     message: "expected HH:MM".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid clock time '9h10': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock-time token could not be parsed as `HH:MM`.
    #[error("Invalid clock time '{text}': {message}")]
    FormatError {
        /// The offending token.
        text: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A feed entry violated the input contract (e.g. it carried no text).
    #[error("Invalid feed entry at index {index}: {message}")]
    InvalidFeedEntry {
        /// Position of the entry in the feed.
        index: usize,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A policy value was out of range or a marker pattern did not compile.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field at fault.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
