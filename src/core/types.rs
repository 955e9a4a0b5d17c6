use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{TimelineError, TimelineResult};

/// Availability state reported by the fleet master data.
///
/// Unknown wire strings round-trip through `Other` instead of failing the
/// whole refresh; the legend filter still matches them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentStatus {
    Available,
    Occupied,
    Workshop,
    Hold,
    Other(String),
}

impl EquipmentStatus {
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "Available" => Self::Available,
            "Occupied" => Self::Occupied,
            // The origin system emits this one lowercased.
            "workshop" => Self::Workshop,
            "Hold" => Self::Hold,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Workshop => "workshop",
            Self::Hold => "Hold",
            Self::Other(raw) => raw,
        }
    }
}

/// One fleet-equipment row on the timeline.
///
/// Rows are created from a network response batch and replaced wholesale on
/// each successful refresh; they are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: String,
    pub title: String,
    pub status: EquipmentStatus,
    pub supplier: String,
    pub owner: String,
    pub owner_desc: String,
    pub contract_expire_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Trip,
    Maintenance,
    Hold,
    WorkOrder,
}

/// Read-only name/value annotation attached to an event bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAnnotation {
    pub name: String,
    pub value: String,
}

/// A scheduled occupation of one equipment row.
///
/// `equipment_id` is a weak reference into the equipment collection, not
/// ownership; orphaned events simply never land on a rendered row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub equipment_id: String,
    pub kind: EventKind,
    pub label: String,
    pub status: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub annotations: SmallVec<[EventAnnotation; 4]>,
}

impl CalendarEvent {
    /// Builds an event, enforcing `end >= start`.
    pub fn new(
        id: impl Into<String>,
        equipment_id: impl Into<String>,
        kind: EventKind,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> TimelineResult<Self> {
        if end < start {
            return Err(TimelineError::InvalidData(format!(
                "event end {end} must be >= start {start}"
            )));
        }
        Ok(Self {
            id: id.into(),
            equipment_id: equipment_id.into(),
            kind,
            label: String::new(),
            status: String::new(),
            start,
            end,
            annotations: SmallVec::new(),
        })
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.push(EventAnnotation {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}
