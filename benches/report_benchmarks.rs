//! Performance benchmarks for the Attendance Engine.
//!
//! Covers the library entry point on feeds of growing size, and the
//! `/report` endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::calculation::{AttendanceEngine, parse_live_timer};
use attendance_engine::config::PolicyLoader;
use attendance_engine::models::FeedCell;

use axum::{body::Body, http::Request};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates an engine from the shipped policy.
fn create_engine() -> AttendanceEngine {
    let policy = PolicyLoader::load("./config/policy.yaml").expect("Failed to load policy");
    AttendanceEngine::new(policy).expect("Failed to build engine")
}

/// Text of a typical calendar cell for `day`, cycling through every kind of day.
fn cell_text(day: u32) -> &'static str {
    match day % 7 {
        0 | 6 => "Week Off",
        1 => "09:05 - 18:40\nPresent",
        2 => "11:20 - 19:30\n13:00 - 13:30",
        3 => "Half Day\n09:00 - 13:15",
        4 => "Sick Leave",
        _ => "09:30 - 18:45",
    }
}

/// Creates a feed with `days` cells starting from day 1.
fn create_feed(days: u32) -> Vec<FeedCell> {
    (1..=days)
        .map(|day| FeedCell::new(day.to_string(), cell_text(day)))
        .collect()
}

fn mid_month() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2026-01-15 13:30:00", "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Benchmark: Full month report through the library.
fn bench_full_month(c: &mut Criterion) {
    let engine = create_engine();
    let feed = create_feed(31);
    let live = Decimal::new(425, 2);

    c.bench_function("full_month", |b| {
        b.iter(|| black_box(engine.compute_report(black_box(&feed), live, mid_month())))
    });
}

/// Benchmark: Live timer parsing over a page's worth of texts.
fn bench_live_timer(c: &mut Criterion) {
    let texts: Vec<String> = (0..50)
        .map(|i| match i % 3 {
            0 => "Today".to_string(),
            1 => format!("{}:{:02} hrs", i % 10, i % 60),
            _ => "09:00 - 18:00".to_string(),
        })
        .collect();

    c.bench_function("live_timer_50_texts", |b| {
        b.iter(|| black_box(parse_live_timer(black_box(&texts))))
    });
}

/// Benchmark: Various feed sizes to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let engine = create_engine();
    let mut group = c.benchmark_group("scaling");

    for days in [1u32, 7, 14, 31].iter() {
        let feed = create_feed(*days);
        group.throughput(Throughput::Elements(*days as u64));
        group.bench_with_input(BenchmarkId::new("days", days), days, |b, _| {
            b.iter(|| black_box(engine.compute_report(&feed, Decimal::ZERO, mid_month())))
        });
    }

    group.finish();
}

/// Benchmark: Full month report through the HTTP endpoint.
fn bench_report_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(create_engine()));

    let cells: Vec<serde_json::Value> = (1..=31)
        .map(|day| serde_json::json!({ "day": day.to_string(), "text": cell_text(day) }))
        .collect();
    let body = serde_json::json!({
        "cells": cells,
        "live_timer_texts": ["Today", "4:15 hrs"],
        "current_instant": "2026-01-15T13:30:00"
    })
    .to_string();

    c.bench_function("report_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/report")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_full_month,
    bench_live_timer,
    bench_scaling,
    bench_report_endpoint,
);
criterion_main!(benches);
