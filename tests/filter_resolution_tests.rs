use chrono::NaiveDate;
use fleetline::api::{
    FilterField, FilterPayload, RetainedFilterState, resolve_dates, wire_value,
};
use fleetline::core::{DateSpan, ViewMode, ViewWindow};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn both_payload_dates_win_and_persist() {
    let payload = FilterPayload::default().with_dates(date(2025, 3, 1), date(2025, 3, 7));
    let retained = Some(DateSpan::new(date(2025, 1, 1), date(2025, 1, 31)));
    let window = ViewWindow::new(ViewMode::Week, date(2025, 3, 10));

    let resolution = resolve_dates(&payload, retained, window);
    assert_eq!(resolution.span, DateSpan::new(date(2025, 3, 1), date(2025, 3, 7)));
    assert!(resolution.persist);
    assert_eq!(resolution.anchor_override, None);
}

#[test]
fn single_payload_date_moves_anchor_without_persisting() {
    let payload = FilterPayload::default().with_from_date(date(2025, 6, 4));
    let window = ViewWindow::new(ViewMode::Week, date(2025, 3, 10));

    let resolution = resolve_dates(&payload, None, window);
    // 2025-06-04 is a Wednesday; the week recomputes around it.
    assert_eq!(resolution.span, DateSpan::new(date(2025, 6, 2), date(2025, 6, 8)));
    assert!(!resolution.persist);
    assert_eq!(resolution.anchor_override, Some(date(2025, 6, 4)));
}

#[test]
fn single_to_date_behaves_like_single_from_date() {
    let payload = FilterPayload::default().with_to_date(date(2025, 6, 4));
    let window = ViewWindow::new(ViewMode::Day, date(2025, 3, 10));

    let resolution = resolve_dates(&payload, None, window);
    assert_eq!(resolution.span, DateSpan::new(date(2025, 6, 4), date(2025, 6, 4)));
    assert_eq!(resolution.anchor_override, Some(date(2025, 6, 4)));
}

#[test]
fn retained_dates_beat_computed_window() {
    let payload = FilterPayload::default();
    let retained = Some(DateSpan::new(date(2025, 1, 1), date(2025, 1, 31)));
    let window = ViewWindow::new(ViewMode::Week, date(2025, 3, 10));

    let resolution = resolve_dates(&payload, retained, window);
    assert_eq!(resolution.span, DateSpan::new(date(2025, 1, 1), date(2025, 1, 31)));
    assert!(resolution.persist);
}

#[test]
fn computed_window_is_the_transient_fallback() {
    let payload = FilterPayload::default();
    let window = ViewWindow::new(ViewMode::Week, date(2025, 3, 10));

    let resolution = resolve_dates(&payload, None, window);
    assert_eq!(resolution.span, DateSpan::new(date(2025, 3, 10), date(2025, 3, 16)));
    assert!(!resolution.persist);
    assert_eq!(resolution.anchor_override, None);
}

#[test]
fn piped_values_reduce_to_the_field_relevant_half() {
    assert_eq!(wire_value(FilterField::Owner, "OWN1 || Acme Logistics"), "OWN1");
    assert_eq!(wire_value(FilterField::Status, "ST01 || Available"), "Available");
    assert_eq!(wire_value(FilterField::Code, "plain-code"), "plain-code");
    assert_eq!(wire_value(FilterField::Type, "  TR01 || Trailer "), "TR01");
}

#[test]
fn merge_overwrites_declared_keys_and_keeps_the_rest() {
    let mut retained = RetainedFilterState::default();
    retained.merge_payload(
        &FilterPayload::default()
            .with_field(FilterField::Owner, "OWN1")
            .with_field(FilterField::Type, "TR01"),
    );
    retained.merge_payload(&FilterPayload::default().with_field(FilterField::Owner, "OWN2"));

    assert_eq!(retained.field(FilterField::Owner), Some("OWN2"));
    assert_eq!(retained.field(FilterField::Type), Some("TR01"));
}

#[test]
fn explicit_empty_string_clears_a_retained_field() {
    let mut retained = RetainedFilterState::default();
    retained.merge_payload(&FilterPayload::default().with_field(FilterField::Owner, "OWN1"));
    retained.merge_payload(&FilterPayload::default().with_field(FilterField::Owner, ""));

    assert_eq!(retained.field(FilterField::Owner), None);
    assert!(retained.fields().is_empty());
}

#[test]
fn absent_keys_leave_retained_values_alone() {
    let mut retained = RetainedFilterState::default();
    retained.merge_payload(&FilterPayload::default().with_field(FilterField::Status, "Available"));
    retained.merge_payload(&FilterPayload::default().with_field(FilterField::Group, "G1"));

    assert_eq!(retained.field(FilterField::Status), Some("Available"));
    assert_eq!(retained.field(FilterField::Group), Some("G1"));
}
