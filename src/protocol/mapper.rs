use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use serde_json::Value;
use smallvec::SmallVec;
use tracing::warn;

use crate::core::types::{
    CalendarEvent, EquipmentItem, EquipmentStatus, EventAnnotation, EventKind,
};
use crate::core::view_window::end_of_day;
use crate::error::TimelineResult;

/// Output contract of the response-shape transformation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MappedResources {
    pub equipment: Vec<EquipmentItem>,
    pub events: Vec<CalendarEvent>,
}

/// External collaborator turning raw `ResourceDetails` rows into equipment
/// and events. The engine only consumes the output contract; hosts with a
/// different upstream shape supply their own implementation.
pub trait ResourceMapper {
    fn map_rows(&self, rows: &[Value]) -> TimelineResult<MappedResources>;
}

/// Default mapper for the conventional wire shape.
///
/// Mapping is tolerant: rows or trips that fail to deserialize are skipped
/// with a warning instead of failing the refresh, matching how an empty
/// result set degrades.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonResourceMapper;

#[derive(Debug, Deserialize)]
struct WireResource {
    #[serde(rename = "EquipmentId")]
    id: String,
    #[serde(rename = "EquipmentTitle", default)]
    title: String,
    #[serde(rename = "EquipmentStatus", default)]
    status: String,
    #[serde(rename = "Supplier", default)]
    supplier: String,
    #[serde(rename = "Owner", default)]
    owner: String,
    #[serde(rename = "OwnerDesc", default)]
    owner_desc: String,
    #[serde(rename = "ContractExpireDate", default)]
    contract_expire_date: Option<String>,
    #[serde(rename = "TripDetails", default)]
    trips: Vec<WireTrip>,
}

#[derive(Debug, Deserialize)]
struct WireTrip {
    #[serde(rename = "TripNo")]
    id: String,
    #[serde(rename = "TripType", default)]
    kind: String,
    #[serde(rename = "Description", default)]
    label: String,
    #[serde(rename = "Status", default)]
    status: String,
    #[serde(rename = "StartDate")]
    start: String,
    #[serde(rename = "EndDate")]
    end: String,
    #[serde(rename = "AdditionalData", default)]
    additional: Vec<WireNameValue>,
}

#[derive(Debug, Deserialize)]
struct WireNameValue {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Value", default)]
    value: String,
}

impl ResourceMapper for JsonResourceMapper {
    fn map_rows(&self, rows: &[Value]) -> TimelineResult<MappedResources> {
        let mut mapped = MappedResources::default();

        for row in rows {
            let resource: WireResource = match serde_json::from_value(row.clone()) {
                Ok(resource) => resource,
                Err(error) => {
                    warn!(%error, "skipping unmappable resource row");
                    continue;
                }
            };

            for trip in &resource.trips {
                match map_trip(&resource.id, trip) {
                    Some(event) => mapped.events.push(event),
                    None => warn!(
                        equipment_id = %resource.id,
                        trip_no = %trip.id,
                        "skipping unmappable trip entry"
                    ),
                }
            }

            mapped.equipment.push(EquipmentItem {
                id: resource.id,
                title: resource.title,
                status: EquipmentStatus::from_wire(&resource.status),
                supplier: resource.supplier,
                owner: resource.owner,
                owner_desc: resource.owner_desc,
                contract_expire_date: resource
                    .contract_expire_date
                    .as_deref()
                    .and_then(parse_wire_date),
            });
        }

        Ok(mapped)
    }
}

fn map_trip(equipment_id: &str, trip: &WireTrip) -> Option<CalendarEvent> {
    let kind = event_kind_from_wire(&trip.kind)?;
    let start = parse_wire_datetime(&trip.start, false)?;
    let end = parse_wire_datetime(&trip.end, true)?;

    let mut event = CalendarEvent::new(trip.id.clone(), equipment_id, kind, start, end)
        .ok()?
        .with_label(trip.label.clone())
        .with_status(trip.status.clone());
    event.annotations = trip
        .additional
        .iter()
        .map(|pair| EventAnnotation {
            name: pair.name.clone(),
            value: pair.value.clone(),
        })
        .collect::<SmallVec<[EventAnnotation; 4]>>();
    Some(event)
}

fn event_kind_from_wire(raw: &str) -> Option<EventKind> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trip" => Some(EventKind::Trip),
        "maintenance" => Some(EventKind::Maintenance),
        "hold" => Some(EventKind::Hold),
        "workorder" | "work_order" => Some(EventKind::WorkOrder),
        _ => None,
    }
}

fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Accepts the datetime spellings seen on the wire; a bare date expands to
/// the start of day for starts and the end of day for ends.
fn parse_wire_datetime(raw: &str, is_end: bool) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    let date = parse_wire_date(raw)?;
    Some(if is_end {
        end_of_day(date)
    } else {
        date.and_time(NaiveTime::MIN)
    })
}
