use crate::core::geometry::event_overlaps_window;
use crate::core::types::CalendarEvent;
use crate::core::view_window::ViewWindow;

/// Returns the events that land on one equipment row inside the visible window.
#[must_use]
pub fn events_for_equipment<'a>(
    events: &'a [CalendarEvent],
    equipment_id: &str,
    window: ViewWindow,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| event.equipment_id == equipment_id)
        .filter(|event| event_overlaps_window(event, window))
        .collect()
}

/// Returns all events that overlap the visible window, regardless of row.
#[must_use]
pub fn events_in_window<'a>(
    events: &'a [CalendarEvent],
    window: ViewWindow,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| event_overlaps_window(event, window))
        .collect()
}
