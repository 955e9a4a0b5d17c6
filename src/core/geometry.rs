use chrono::NaiveDateTime;

use crate::core::types::CalendarEvent;
use crate::core::view_window::{ViewMode, ViewWindow};

/// Minimum percentage width of a bar in week view with hour subdivision.
pub const MIN_WIDTH_PCT_WEEK_HOURS: f64 = 0.5;
/// Minimum percentage width of a bar in week view at day granularity.
pub const MIN_WIDTH_PCT_WEEK_DAYS: f64 = 2.0;
/// Minimum percentage width of a bar in day view with hour subdivision.
pub const MIN_WIDTH_PCT_DAY_HOURS: f64 = 1.0;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;
const MINUTES_PER_WEEK: f64 = 7.0 * MINUTES_PER_DAY;

/// Horizontal placement of one event bar.
///
/// Month view uses pixel placement so bars align exactly to fixed-width day
/// columns regardless of column count; day and week views use percentages of
/// the visible span. Percent lefts are not clamped: events that start before
/// the window overhang to the left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarGeometry {
    Pixels { left: f64, width: f64 },
    Percent { left: f64, width: f64 },
}

/// Inclusive overlap of the event interval with the visible window.
///
/// Overlap, not containment: an event is laid out as soon as any part of
/// `[start, end]` touches `[view_start, view_end]`.
#[must_use]
pub fn event_overlaps_window(event: &CalendarEvent, window: ViewWindow) -> bool {
    let (view_start, view_end) = window.datetime_bounds();
    event.start <= view_end && event.end >= view_start
}

/// Computes the bar placement for `event`, or `None` when it misses the
/// visible window entirely.
#[must_use]
pub fn bar_geometry(
    event: &CalendarEvent,
    window: ViewWindow,
    hour_subdivision: bool,
    day_width_px: f64,
) -> Option<BarGeometry> {
    if !event_overlaps_window(event, window) {
        return None;
    }

    let (view_start, _) = window.datetime_bounds();
    Some(match (window.view(), hour_subdivision) {
        (ViewMode::Month, _) => month_geometry(event, window, day_width_px),
        (ViewMode::Week, true) => minute_percent_geometry(
            event,
            view_start,
            MINUTES_PER_WEEK,
            MIN_WIDTH_PCT_WEEK_HOURS,
        ),
        (ViewMode::Week, false) => week_day_geometry(event, window),
        (ViewMode::Day, true) => minute_percent_geometry(
            event,
            view_start,
            MINUTES_PER_DAY,
            MIN_WIDTH_PCT_DAY_HOURS,
        ),
        // Single-day view without hours: the event occupies the full row.
        (ViewMode::Day, false) => BarGeometry::Percent {
            left: 0.0,
            width: 100.0,
        },
    })
}

fn month_geometry(event: &CalendarEvent, window: ViewWindow, day_width_px: f64) -> BarGeometry {
    let month_start = window.start_date();
    let days_from_start = event
        .start
        .date()
        .signed_duration_since(month_start)
        .num_days()
        .max(0);
    let duration_days = event
        .end
        .date()
        .signed_duration_since(event.start.date())
        .num_days()
        + 1;

    BarGeometry::Pixels {
        left: days_from_start as f64 * day_width_px,
        width: duration_days.max(1) as f64 * day_width_px,
    }
}

fn week_day_geometry(event: &CalendarEvent, window: ViewWindow) -> BarGeometry {
    let week_start = window.start_date();
    let days_from_start = event
        .start
        .date()
        .signed_duration_since(week_start)
        .num_days();
    let duration_days = event
        .end
        .date()
        .signed_duration_since(event.start.date())
        .num_days()
        + 1;

    BarGeometry::Percent {
        left: days_from_start as f64 / 7.0 * 100.0,
        width: (duration_days as f64 / 7.0 * 100.0).max(MIN_WIDTH_PCT_WEEK_DAYS),
    }
}

fn minute_percent_geometry(
    event: &CalendarEvent,
    view_start: NaiveDateTime,
    span_minutes: f64,
    min_width_pct: f64,
) -> BarGeometry {
    let minutes_from_start = event.start.signed_duration_since(view_start).num_minutes() as f64;
    let duration_minutes = event.end.signed_duration_since(event.start).num_minutes() as f64;

    BarGeometry::Percent {
        left: minutes_from_start / span_minutes * 100.0,
        width: (duration_minutes / span_minutes * 100.0).max(min_width_pct),
    }
}
