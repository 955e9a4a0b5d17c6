use chrono::NaiveDate;
use fleetline::api::{FetchGuard, FilterPayload, RangeFilterController};
use fleetline::core::{DateSpan, ViewMode, ViewWindow};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn controller(view: ViewMode, anchor: NaiveDate) -> RangeFilterController {
    RangeFilterController::new(ViewWindow::new(view, anchor), None)
}

#[test]
fn identical_window_notification_after_filter_is_suppressed_once() {
    let mut controller = controller(ViewMode::Week, date(2025, 3, 3));

    let payload = FilterPayload::default().with_dates(date(2025, 3, 1), date(2025, 3, 7));
    let plan = controller.apply_filter(&payload, false);
    assert_eq!(plan.span, DateSpan::new(date(2025, 3, 1), date(2025, 3, 7)));
    assert_eq!(
        controller.fetch_guard(),
        FetchGuard::Suppress(DateSpan::new(date(2025, 3, 1), date(2025, 3, 7)))
    );

    // The layout surface echoes the same visible window back.
    let params = fleetline::core::DateRangeParams {
        view: ViewMode::Day,
        start_date: date(2025, 3, 1),
        end_date: date(2025, 3, 7),
    };
    assert!(controller.handle_date_range_change(params).is_none());
    assert_eq!(controller.fetch_guard(), FetchGuard::Idle);

    // A second identical notification is no longer covered.
    assert!(controller.handle_date_range_change(params).is_some());
}

#[test]
fn different_window_clears_guard_and_plans_one_fetch() {
    let mut controller = controller(ViewMode::Week, date(2025, 3, 3));

    let payload = FilterPayload::default().with_dates(date(2025, 3, 1), date(2025, 3, 7));
    controller.apply_filter(&payload, false);

    let params = fleetline::core::DateRangeParams {
        view: ViewMode::Week,
        start_date: date(2025, 3, 10),
        end_date: date(2025, 3, 16),
    };
    let plan = controller
        .handle_date_range_change(params)
        .expect("mismatched window must refetch");
    assert_eq!(plan.span, DateSpan::new(date(2025, 3, 10), date(2025, 3, 16)));
    assert_eq!(controller.fetch_guard(), FetchGuard::Idle);
}

#[test]
fn navigation_dates_are_not_persisted() {
    let mut controller = controller(ViewMode::Week, date(2025, 3, 3));

    let params = fleetline::core::DateRangeParams {
        view: ViewMode::Week,
        start_date: date(2025, 3, 10),
        end_date: date(2025, 3, 16),
    };
    controller.handle_date_range_change(params);
    assert_eq!(controller.retained().dates(), None);

    // Explicit payload dates persist and survive later navigation.
    let payload = FilterPayload::default().with_dates(date(2025, 4, 1), date(2025, 4, 30));
    controller.apply_filter(&payload, false);
    let params = fleetline::core::DateRangeParams {
        view: ViewMode::Month,
        start_date: date(2025, 5, 1),
        end_date: date(2025, 5, 31),
    };
    controller.handle_date_range_change(params);
    assert_eq!(
        controller.retained().dates(),
        Some(DateSpan::new(date(2025, 4, 1), date(2025, 4, 30)))
    );
}

#[test]
fn window_follows_reported_range_params() {
    let mut controller = controller(ViewMode::Week, date(2025, 3, 3));
    let params = fleetline::core::DateRangeParams {
        view: ViewMode::Month,
        start_date: date(2025, 5, 1),
        end_date: date(2025, 5, 31),
    };
    controller.handle_date_range_change(params);

    assert_eq!(controller.window().view(), ViewMode::Month);
    assert_eq!(controller.window().start_date(), date(2025, 5, 1));
    assert_eq!(controller.window().end_date(), date(2025, 5, 31));
}

#[test]
fn generations_increase_monotonically() {
    let mut controller = controller(ViewMode::Week, date(2025, 3, 3));

    let first = controller.apply_filter(&FilterPayload::default(), true);
    let params = fleetline::core::DateRangeParams {
        view: ViewMode::Week,
        start_date: date(2025, 3, 10),
        end_date: date(2025, 3, 16),
    };
    let second = controller
        .handle_date_range_change(params)
        .expect("new window plans a fetch");
    assert!(second.generation > first.generation);
}

#[test]
fn planned_request_carries_dates_then_retained_filters() {
    let mut controller = controller(ViewMode::Week, date(2025, 3, 3));
    let payload = FilterPayload::default()
        .with_field(fleetline::api::FilterField::Owner, "OWN1 || Acme")
        .with_dates(date(2025, 3, 1), date(2025, 3, 7));
    let plan = controller.apply_filter(&payload, false);

    let filters = &plan.request.request_header.additional_filter;
    assert_eq!(filters[0].name, "FromDate");
    assert_eq!(filters[0].value, "2025-03-01");
    assert_eq!(filters[1].name, "ToDate");
    assert_eq!(filters[1].value, "2025-03-07");
    assert_eq!(filters[2].name, "EquipmentOwner");
    assert_eq!(filters[2].value, "OWN1");
    assert_eq!(plan.request.trip_no, None);
}

#[test]
fn configured_trip_no_is_carried_on_every_request() {
    let mut controller = RangeFilterController::new(
        ViewWindow::new(ViewMode::Week, date(2025, 3, 3)),
        Some("T100".to_owned()),
    );
    let plan = controller.apply_filter(&FilterPayload::default(), true);
    assert_eq!(plan.request.trip_no.as_deref(), Some("T100"));
}

#[test]
fn cleared_retained_dates_fall_back_to_the_view_window() {
    let mut controller = controller(ViewMode::Week, date(2025, 3, 3));
    let payload = FilterPayload::default().with_dates(date(2025, 4, 1), date(2025, 4, 30));
    controller.apply_filter(&payload, false);
    assert!(controller.retained().dates().is_some());

    controller.clear_retained_dates();
    let plan = controller.apply_filter(&FilterPayload::default(), false);
    assert_eq!(plan.span, DateSpan::new(date(2025, 3, 3), date(2025, 3, 9)));
}
