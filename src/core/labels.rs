use chrono::{Datelike, NaiveDate};

use crate::core::view_window::{ViewMode, ViewWindow};

/// One axis slot on the timeline header.
///
/// `date` always names the calendar day the slot belongs to, so hosts can
/// align fixed-width columns without re-parsing `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineLabel {
    pub text: String,
    pub date: NaiveDate,
    /// Day name carried by the first hour slot of each day in hour views
    /// and by whole-day slots.
    pub day_name: Option<String>,
    /// Marks where a day divider should be drawn in hour-subdivided views.
    pub is_day_start: bool,
}

/// Generates the axis labels for the current window.
///
/// - Month view: one numeric label per calendar day of the anchor month.
/// - Day view: one whole-day label, or 24 hourly labels with the first one
///   carrying the day name when hour subdivision is on.
/// - Week view: 7 daily labels, or 7x24 hourly labels with `is_day_start`
///   on the first hour of each day when hour subdivision is on.
#[must_use]
pub fn timeline_labels(window: ViewWindow, hour_subdivision: bool) -> Vec<TimelineLabel> {
    let start = window.start_date();
    let end = window.end_date();

    match window.view() {
        ViewMode::Month => days_inclusive(start, end)
            .map(|date| TimelineLabel {
                text: date.day().to_string(),
                date,
                day_name: None,
                is_day_start: false,
            })
            .collect(),
        ViewMode::Day if !hour_subdivision => vec![whole_day_label(start)],
        ViewMode::Day => hour_labels_for_day(start),
        ViewMode::Week if !hour_subdivision => days_inclusive(start, end)
            .map(whole_day_label)
            .collect(),
        ViewMode::Week => days_inclusive(start, end)
            .flat_map(hour_labels_for_day)
            .collect(),
    }
}

fn whole_day_label(date: NaiveDate) -> TimelineLabel {
    TimelineLabel {
        text: date.format("%a %d").to_string(),
        date,
        day_name: Some(date.format("%a").to_string()),
        is_day_start: true,
    }
}

fn hour_labels_for_day(date: NaiveDate) -> Vec<TimelineLabel> {
    (0..24)
        .map(|hour| TimelineLabel {
            text: format!("{hour:02}:00"),
            date,
            day_name: (hour == 0).then(|| date.format("%a").to_string()),
            is_day_start: hour == 0,
        })
        .collect()
}

fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |date| *date <= end)
}
