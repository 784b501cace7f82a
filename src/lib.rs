//! Attendance Engine
//!
//! This crate classifies a month of calendar attendance cells into typed daily
//! records and answers "how much more must I work today and this month to hit
//! my quota", exposed both as a library and over a small JSON HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
