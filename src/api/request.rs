//! Request types for the Attendance Engine API.
//!
//! This module defines the JSON request structure for the `/report` endpoint.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_live_timer;
use crate::models::{FeedCell, FeedSnapshot};

/// Request body for the `/report` endpoint.
///
/// Carries one snapshot of the calendar widget. The live hours may be given
/// directly or as the raw timer texts scraped from the page; `live_hours`
/// wins when both are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The calendar cells in document order.
    pub cells: Vec<CellRequest>,
    /// Hours worked so far today.
    #[serde(default)]
    pub live_hours: Option<Decimal>,
    /// Raw live timer texts such as `"4:05 hrs"`.
    #[serde(default)]
    pub live_timer_texts: Vec<String>,
    /// The local instant to compute the report for; defaults to now.
    #[serde(default)]
    pub current_instant: Option<NaiveDateTime>,
}

/// One calendar cell in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellRequest {
    /// The raw day-number label.
    pub day: String,
    /// The full text content of the cell.
    pub text: String,
}

impl From<CellRequest> for FeedCell {
    fn from(req: CellRequest) -> Self {
        FeedCell {
            day_text: req.day,
            cell_text: req.text,
        }
    }
}

impl ReportRequest {
    /// Resolves the request into a feed snapshot.
    ///
    /// `fallback_now` is used when the request does not pin the instant.
    pub fn into_snapshot(self, fallback_now: NaiveDateTime) -> FeedSnapshot {
        let live_hours = self
            .live_hours
            .unwrap_or_else(|| parse_live_timer(&self.live_timer_texts));

        FeedSnapshot {
            cells: self.cells.into_iter().map(Into::into).collect(),
            live_hours,
            captured_at: self.current_instant.unwrap_or(fallback_now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_deserialize_report_request() {
        let json = r#"{
            "cells": [
                {"day": "1", "text": "09:10 - 18:30"},
                {"day": "2", "text": "Week Off"}
            ],
            "live_hours": "4.0",
            "current_instant": "2026-01-03T13:00:00"
        }"#;

        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.cells.len(), 2);
        assert_eq!(request.cells[1].text, "Week Off");
        assert_eq!(request.live_hours, Some(Decimal::from_str("4.0").unwrap()));
        assert!(request.live_timer_texts.is_empty());
        assert_eq!(
            request.current_instant,
            Some(make_datetime("2026-01-03 13:00:00"))
        );
    }

    #[test]
    fn test_optional_fields_default() {
        let request: ReportRequest = serde_json::from_str(r#"{"cells": []}"#).unwrap();
        assert!(request.live_hours.is_none());
        assert!(request.current_instant.is_none());
    }

    #[test]
    fn test_snapshot_prefers_explicit_live_hours() {
        let request = ReportRequest {
            cells: vec![],
            live_hours: Some(Decimal::new(3, 0)),
            live_timer_texts: vec!["5:00 hrs".to_string()],
            current_instant: None,
        };
        let snapshot = request.into_snapshot(make_datetime("2026-01-03 13:00:00"));
        assert_eq!(snapshot.live_hours, Decimal::new(3, 0));
        assert_eq!(snapshot.captured_at, make_datetime("2026-01-03 13:00:00"));
    }

    #[test]
    fn test_snapshot_parses_timer_texts() {
        let request = ReportRequest {
            cells: vec![CellRequest {
                day: "3".to_string(),
                text: "Present".to_string(),
            }],
            live_hours: None,
            live_timer_texts: vec!["Today".to_string(), "5:30 hrs".to_string()],
            current_instant: Some(make_datetime("2026-01-03 15:00:00")),
        };
        let snapshot = request.into_snapshot(make_datetime("2000-01-01 00:00:00"));
        assert_eq!(snapshot.live_hours, Decimal::new(55, 1));
        assert_eq!(snapshot.captured_at, make_datetime("2026-01-03 15:00:00"));
        assert_eq!(snapshot.cells[0], FeedCell::new("3", "Present"));
    }
}
