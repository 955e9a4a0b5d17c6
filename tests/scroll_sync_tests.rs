use fleetline::interaction::{ScrollAxis, ScrollCoordinator, ScrollDirective, ScrollPane};

#[test]
fn vertical_body_scroll_drives_equipment_list() {
    let mut coordinator = ScrollCoordinator::default();
    let directives = coordinator.report_scroll(ScrollPane::Body, ScrollAxis::Vertical, 120.0);
    assert_eq!(
        directives,
        vec![ScrollDirective {
            pane: ScrollPane::EquipmentList,
            axis: ScrollAxis::Vertical,
            offset: 120.0,
        }]
    );
}

#[test]
fn vertical_list_scroll_drives_body() {
    let mut coordinator = ScrollCoordinator::default();
    let directives =
        coordinator.report_scroll(ScrollPane::EquipmentList, ScrollAxis::Vertical, 48.0);
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].pane, ScrollPane::Body);
}

#[test]
fn horizontal_body_scroll_drives_header() {
    let mut coordinator = ScrollCoordinator::default();
    let directives = coordinator.report_scroll(ScrollPane::Body, ScrollAxis::Horizontal, 300.0);
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].pane, ScrollPane::Header);
    assert_eq!(directives[0].axis, ScrollAxis::Horizontal);
}

#[test]
fn header_drag_drives_body() {
    let mut coordinator = ScrollCoordinator::default();
    let directives = coordinator.report_scroll(ScrollPane::Header, ScrollAxis::Horizontal, 10.0);
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].pane, ScrollPane::Body);
}

#[test]
fn unpaired_pane_axis_combinations_are_ignored() {
    let mut coordinator = ScrollCoordinator::default();
    assert!(
        coordinator
            .report_scroll(ScrollPane::Header, ScrollAxis::Vertical, 50.0)
            .is_empty()
    );
    assert!(
        coordinator
            .report_scroll(ScrollPane::EquipmentList, ScrollAxis::Horizontal, 50.0)
            .is_empty()
    );
    assert_eq!(coordinator.pending_echo_count(), 0);
}

#[test]
fn instructed_offset_echo_is_consumed_once() {
    let mut coordinator = ScrollCoordinator::default();
    coordinator.report_scroll(ScrollPane::Body, ScrollAxis::Vertical, 120.0);
    assert_eq!(coordinator.pending_echo_count(), 1);

    // The equipment list fires its own event after the host applies the
    // directive; that echo must not bounce back to the body.
    let echo = coordinator.report_scroll(ScrollPane::EquipmentList, ScrollAxis::Vertical, 120.0);
    assert!(echo.is_empty());
    assert_eq!(coordinator.pending_echo_count(), 0);

    // A genuine follow-up scroll at the same offset propagates again.
    let followup =
        coordinator.report_scroll(ScrollPane::EquipmentList, ScrollAxis::Vertical, 120.0);
    assert_eq!(followup.len(), 1);
}

#[test]
fn echo_matching_tolerates_subpixel_drift() {
    let mut coordinator = ScrollCoordinator::default();
    coordinator.report_scroll(ScrollPane::Body, ScrollAxis::Horizontal, 300.0);

    let echo = coordinator.report_scroll(ScrollPane::Header, ScrollAxis::Horizontal, 300.4);
    assert!(echo.is_empty());
}

#[test]
fn offset_outside_tolerance_is_a_new_scroll() {
    let mut coordinator = ScrollCoordinator::default();
    coordinator.report_scroll(ScrollPane::Body, ScrollAxis::Horizontal, 300.0);

    let directives = coordinator.report_scroll(ScrollPane::Header, ScrollAxis::Horizontal, 310.0);
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].pane, ScrollPane::Body);
}
