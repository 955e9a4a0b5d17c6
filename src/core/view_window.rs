use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Day,
    Week,
    Month,
}

/// Inclusive date span as it travels to the network boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateSpan {
    #[must_use]
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    /// Formats the lower bound as `yyyy-MM-dd` for the wire.
    #[must_use]
    pub fn wire_from(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    /// Formats the upper bound as `yyyy-MM-dd` for the wire.
    #[must_use]
    pub fn wire_to(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}

/// Visible-window notification payload handed back by the layout surface.
///
/// Derived from the anchor date; never persisted independently of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeParams {
    pub view: ViewMode,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRangeParams {
    #[must_use]
    pub fn span(&self) -> DateSpan {
        DateSpan::new(self.start_date, self.end_date)
    }
}

/// Current view mode plus the anchor date the visible window derives from.
///
/// Weeks start on Monday; month windows cover the anchor's calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewWindow {
    view: ViewMode,
    anchor: NaiveDate,
}

impl ViewWindow {
    #[must_use]
    pub fn new(view: ViewMode, anchor: NaiveDate) -> Self {
        Self { view, anchor }
    }

    #[must_use]
    pub fn view(self) -> ViewMode {
        self.view
    }

    #[must_use]
    pub fn anchor(self) -> NaiveDate {
        self.anchor
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn set_anchor(&mut self, anchor: NaiveDate) {
        self.anchor = anchor;
    }

    #[must_use]
    pub fn with_anchor(self, anchor: NaiveDate) -> Self {
        Self { anchor, ..self }
    }

    #[must_use]
    pub fn start_date(self) -> NaiveDate {
        match self.view {
            ViewMode::Day => self.anchor,
            ViewMode::Week => start_of_week(self.anchor),
            ViewMode::Month => start_of_month(self.anchor),
        }
    }

    #[must_use]
    pub fn end_date(self) -> NaiveDate {
        match self.view {
            ViewMode::Day => self.anchor,
            ViewMode::Week => start_of_week(self.anchor)
                .checked_add_days(Days::new(6))
                .unwrap_or(self.anchor),
            ViewMode::Month => end_of_month(self.anchor),
        }
    }

    #[must_use]
    pub fn span(self) -> DateSpan {
        DateSpan::new(self.start_date(), self.end_date())
    }

    /// Inclusive datetime bounds of the visible window.
    #[must_use]
    pub fn datetime_bounds(self) -> (NaiveDateTime, NaiveDateTime) {
        (
            self.start_date().and_time(NaiveTime::MIN),
            end_of_day(self.end_date()),
        )
    }

    #[must_use]
    pub fn date_range_params(self) -> DateRangeParams {
        DateRangeParams {
            view: self.view,
            start_date: self.start_date(),
            end_date: self.end_date(),
        }
    }

    /// Moves the anchor one window earlier (day, week, or month).
    pub fn navigate_prev(&mut self) {
        self.anchor = match self.view {
            ViewMode::Day => self
                .anchor
                .checked_sub_days(Days::new(1))
                .unwrap_or(self.anchor),
            ViewMode::Week => self
                .anchor
                .checked_sub_days(Days::new(7))
                .unwrap_or(self.anchor),
            ViewMode::Month => self
                .anchor
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.anchor),
        };
    }

    /// Moves the anchor one window later (day, week, or month).
    pub fn navigate_next(&mut self) {
        self.anchor = match self.view {
            ViewMode::Day => self
                .anchor
                .checked_add_days(Days::new(1))
                .unwrap_or(self.anchor),
            ViewMode::Week => self
                .anchor
                .checked_add_days(Days::new(7))
                .unwrap_or(self.anchor),
            ViewMode::Month => self
                .anchor
                .checked_add_months(Months::new(1))
                .unwrap_or(self.anchor),
        };
    }

    pub fn navigate_to(&mut self, date: NaiveDate) {
        self.anchor = date;
    }
}

/// Monday of the week containing `date`.
#[must_use]
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[must_use]
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(date)
}

/// Last representable second of `date`, used for inclusive window bounds.
#[must_use]
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}
