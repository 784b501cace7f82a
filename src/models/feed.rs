//! Input feed models.
//!
//! The calendar widget, the live timer and the wall clock all live outside the
//! engine. This module defines the snapshot shapes the engine consumes and the
//! [`AttendanceSource`] seam collaborators implement.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One visible calendar cell, in document order.
///
/// # Example
///
/// ```
/// use attendance_engine::models::FeedCell;
///
/// let cell = FeedCell::new("14", "09:05 - 18:40\nPresent");
/// assert_eq!(cell.day_text, "14");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedCell {
    /// The raw day-number label of the cell.
    pub day_text: String,
    /// The full text content of the cell.
    pub cell_text: String,
}

impl FeedCell {
    /// Creates a feed cell from its day label and text.
    pub fn new(day_text: impl Into<String>, cell_text: impl Into<String>) -> Self {
        Self {
            day_text: day_text.into(),
            cell_text: cell_text.into(),
        }
    }
}

/// Supplies the point-in-time inputs of one report.
pub trait AttendanceSource {
    /// The calendar cells in document order.
    fn daily_cells(&self) -> Vec<FeedCell>;

    /// Hours worked so far today (0 when the timer is unavailable).
    fn live_today_hours(&self) -> Decimal;

    /// The local wall-clock instant the report is computed for.
    fn current_instant(&self) -> NaiveDateTime;
}

/// An in-memory [`AttendanceSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    /// The calendar cells in document order.
    pub cells: Vec<FeedCell>,
    /// Hours worked so far today.
    pub live_hours: Decimal,
    /// The instant the snapshot was taken.
    pub captured_at: NaiveDateTime,
}

impl AttendanceSource for FeedSnapshot {
    fn daily_cells(&self) -> Vec<FeedCell> {
        self.cells.clone()
    }

    fn live_today_hours(&self) -> Decimal {
        self.live_hours
    }

    fn current_instant(&self) -> NaiveDateTime {
        self.captured_at
    }
}
