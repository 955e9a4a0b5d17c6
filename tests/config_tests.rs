use chrono::NaiveDate;
use fleetline::core::ViewMode;
use fleetline::{TimelineEngineConfig, TimelineError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn builders_compose() {
    let config = TimelineEngineConfig::new(ViewMode::Month, date(2025, 3, 1))
        .with_hour_subdivision(true)
        .with_day_width_px(56.0)
        .with_trip_no("T100");

    assert_eq!(config.view, ViewMode::Month);
    assert!(config.hour_subdivision);
    assert_eq!(config.day_width_px, 56.0);
    assert_eq!(config.trip_no.as_deref(), Some("T100"));
    assert!(config.validate().is_ok());
}

#[test]
fn non_positive_day_width_fails_validation() {
    let config = TimelineEngineConfig::new(ViewMode::Week, date(2025, 3, 10)).with_day_width_px(0.0);
    assert!(matches!(
        config.validate(),
        Err(TimelineError::InvalidData(_))
    ));

    let config =
        TimelineEngineConfig::new(ViewMode::Week, date(2025, 3, 10)).with_day_width_px(f64::NAN);
    assert!(config.validate().is_err());
}

#[test]
fn config_round_trips_through_json() {
    let config = TimelineEngineConfig::new(ViewMode::Week, date(2025, 3, 10))
        .with_hour_subdivision(true)
        .with_trip_no("T7");

    let raw = config.to_json_pretty().expect("serializable config");
    let back = TimelineEngineConfig::from_json_str(&raw).expect("parseable config");
    assert_eq!(back, config);
}

#[test]
fn missing_optional_fields_take_defaults() {
    let raw = r#"{ "view": "Week", "anchor": "2025-03-10" }"#;
    let config = TimelineEngineConfig::from_json_str(raw).expect("parseable config");

    assert!(!config.hour_subdivision);
    assert_eq!(config.day_width_px, 40.0);
    assert_eq!(config.trip_no, None);
}

#[test]
fn garbage_input_is_an_invalid_data_error() {
    let error = TimelineEngineConfig::from_json_str("not json").expect_err("parse failure");
    assert!(matches!(error, TimelineError::InvalidData(_)));
}
