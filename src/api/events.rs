use serde::{Deserialize, Serialize};

use crate::core::view_window::{DateRangeParams, DateSpan, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Destructive,
}

/// User-visible notification raised by the data layer. The crate only
/// emits these; toast presentation belongs to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Event stream exposed to host observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    ViewChanged { view: ViewMode },
    HourSubdivisionChanged { enabled: bool },
    StatusFilterChanged { value: String },
    SelectionChanged { ids: Vec<String> },
    AddToTrip { ids: Vec<String> },
    BarClicked { event_id: String },
    EquipmentClicked { equipment_id: String },
    VisibleRangeChanged { params: DateRangeParams },
    DataRefreshed { equipment_len: usize, events_len: usize },
    Notification(Notification),
}

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineContext {
    pub view: ViewMode,
    pub window: DateSpan,
    pub hour_subdivision: bool,
    pub equipment_len: usize,
    pub events_len: usize,
    pub loading: bool,
}

/// Observer hook interface for the hosting container.
///
/// Observers read engine context and react to events without mutating
/// engine internals directly.
pub trait TimelineObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &HostEvent, context: TimelineContext);
}
