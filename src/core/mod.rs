pub mod geometry;
pub mod labels;
pub mod selection;
pub mod types;
pub mod view_window;
pub mod windowing;

pub use geometry::{BarGeometry, bar_geometry, event_overlaps_window};
pub use labels::{TimelineLabel, timeline_labels};
pub use selection::SelectionSet;
pub use types::{CalendarEvent, EquipmentItem, EquipmentStatus, EventAnnotation, EventKind};
pub use view_window::{DateRangeParams, DateSpan, ViewMode, ViewWindow};
pub use windowing::{events_for_equipment, events_in_window};
