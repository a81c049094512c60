//! Timestamp and stitch integration tests.

use std::sync::Arc;

use chrono::TimeDelta;
use tempfile::TempDir;
use tokio_test::assert_ok;

use fxphoto_core::{
    classify, discover, parse_base_datetime,
    testing::{fixtures::touch, CapturingReporter, MockConverter, MockMetadataWriter, MockStitcher},
    DiscoveryFilter, OrderingRule, OutcomeStatus, StitchDirection, StitchPlanner,
    TimestampAssigner, TimestampError, TimestampPlan,
};

fn filter() -> DiscoveryFilter {
    DiscoveryFilter::new(["jpg", "jpeg", "png", "heic", "tiff"], OrderingRule::NumericSuffix)
}

#[tokio::test]
async fn test_numeric_suffix_order_gets_monotonic_timestamps() {
    let dir = TempDir::new().unwrap();
    for name in ["trip-10.jpg", "trip-2.heic", "trip-1.png", "readme.md"] {
        touch(dir.path(), name);
    }
    let items = discover(&assert_ok!(classify(dir.path())), &filter());
    let failing = dir.path().join("trip-2.heic").canonicalize().unwrap();

    let writer = MockMetadataWriter::new().fail_on(&failing);
    let assigner = TimestampAssigner::new(
        Arc::new(writer.clone()),
        Arc::new(CapturingReporter::new()),
    );
    let base = parse_base_datetime("2023-12-31 23:59:58").unwrap();
    let plan = TimestampPlan::new(base, 1).unwrap();

    let summary = assert_ok!(assigner.assign(items, &plan).await);

    assert_eq!(summary.total, 3);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.outcomes[1].status, OutcomeStatus::Failed);

    let writes = writer.writes().await;
    let names: Vec<_> = writes
        .iter()
        .map(|(p, _)| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["trip-1.png", "trip-2.heic", "trip-10.jpg"]);

    for (i, (_, ts)) in writes.iter().enumerate() {
        assert_eq!(*ts, base + TimeDelta::try_seconds(i as i64).unwrap());
    }
    assert!(writes.windows(2).all(|w| w[0].1 < w[1].1));
}

#[tokio::test]
async fn test_zero_step_is_rejected_before_writing() {
    let base = parse_base_datetime("2024-01-01 00:00:00").unwrap();
    assert!(matches!(
        TimestampPlan::new(base, 0),
        Err(TimestampError::InvalidStep(0))
    ));
}

#[tokio::test]
async fn test_bad_datetime_is_fatal() {
    let err = parse_base_datetime("2024/01/01 10:00").unwrap_err();
    assert!(matches!(err, TimestampError::InvalidDatetime { .. }));
}

#[tokio::test]
async fn test_stitch_mixed_formats_in_one_directory() {
    let dir = TempDir::new().unwrap();
    let left = touch(dir.path(), "left.jpg");
    let right = touch(dir.path(), "right.heic");
    let fallback = TempDir::new().unwrap();

    let converter = MockConverter::new();
    let stitcher = MockStitcher::new();
    let planner = StitchPlanner::new(
        Arc::new(converter.clone()),
        Arc::new(stitcher.clone()),
        fallback.path(),
    );

    let output = assert_ok!(
        planner
            .stitch_images(&[left.clone(), right.clone()], StitchDirection::Horizontal)
            .await
    );

    assert_eq!(output, dir.path().join("left_right.heic"));
    assert!(output.exists());
    assert!(left.exists());
    assert_eq!(converter.conversion_count().await, 1);

    let calls = stitcher.calls().await;
    assert_eq!(
        calls[0].inputs,
        vec![dir.path().join("left.heic"), right]
    );
}
