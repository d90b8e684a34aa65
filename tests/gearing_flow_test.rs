// ABOUTME: End-to-end flow tests from validated input to stored summaries
// ABOUTME: Covers boundary validation, gear math, and lap-time parsing together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Piste Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use piste::storage::StorageProvider;
use piste_core::errors::ErrorCode;
use piste_core::models::{EventType, GearKind, NewLapSession};
use piste_core::validation;
use piste_gearing::{parse_time_strict, GearCalculator, SessionSummary};

#[tokio::test]
async fn test_validated_gear_drives_the_calculator() {
    validation::chainring_teeth(50).unwrap();
    validation::sprocket_teeth(14).unwrap();
    validation::wheel_diameter_mm(668.0).unwrap();

    let calculator = GearCalculator::new();
    let metrics = calculator.metrics(50, 14);
    assert!((metrics.ratio - 50.0 / 14.0).abs() < 1e-9);
    assert!((metrics.gear_inches - 93.93).abs() < 0.01);
    assert!((metrics.development_m - 7.495).abs() < 0.01);
}

#[tokio::test]
async fn test_out_of_range_input_never_reaches_the_calculator() {
    let err = validation::chainring_teeth(75).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let err = validation::wheel_diameter_mm(f64::NAN).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn test_parsed_laps_to_stored_session_summary() {
    let entered = ["18.2", "17.95", "1:02.430"];
    let laps: Vec<u64> = entered
        .iter()
        .map(|text| parse_time_strict(text).unwrap())
        .collect();
    assert_eq!(laps, vec![18_200, 17_950, 62_430]);

    let user_id = common::test_user_id();
    let storage = common::seeded_storage(user_id).await;
    let session = storage
        .create_session(
            user_id,
            &NewLapSession::for_event(EventType::IndividualPursuit),
            &laps,
        )
        .await
        .unwrap();

    let details = storage.get_session(session.id).await.unwrap().unwrap();
    let summary = SessionSummary::from_laps(&details.lap_times_ms());
    assert_eq!(summary.lap_count, 3);
    assert_eq!(summary.best_ms, Some(17_950));
    assert_eq!(summary.formatted_best().as_deref(), Some("17.950"));
    assert_eq!(summary.total_ms, 98_580);
}

#[tokio::test]
async fn test_malformed_lap_entry_is_rejected_with_format_error() {
    let err = parse_time_strict("1:2:3").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
    assert!(err.message.contains("1:2:3"));
}

#[tokio::test]
async fn test_gear_teeth_validated_before_storage() {
    let user_id = common::test_user_id();
    let storage = common::seeded_storage(user_id).await;

    // The form boundary validates before the record is created
    assert!(validation::teeth(GearKind::Sprocket, 26).is_err());
    let gears = storage.list_gears(user_id, GearKind::Sprocket).await.unwrap();
    assert!(gears.is_empty());

    validation::teeth(GearKind::Sprocket, 15).unwrap();
    common::add_gear(&storage, user_id, GearKind::Sprocket, 15, false).await;
    let gears = storage.list_gears(user_id, GearKind::Sprocket).await.unwrap();
    assert_eq!(gears.len(), 1);
}
