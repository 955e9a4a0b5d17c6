use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{TimelineError, TimelineResult};

/// Resource fetch request as it goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequest {
    #[serde(rename = "TripNo")]
    pub trip_no: Option<String>,
    #[serde(rename = "RequestHeader")]
    pub request_header: RequestHeader,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestHeader {
    #[serde(rename = "AdditionalFilter")]
    pub additional_filter: Vec<WireFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireFilter {
    #[serde(rename = "FilterName")]
    pub name: String,
    #[serde(rename = "FilterValue")]
    pub value: String,
}

impl WireFilter {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Response envelope: `ResponseData` carries a JSON-encoded string, not a
/// nested object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEnvelope {
    #[serde(rename = "ResponseData")]
    pub response_data: Option<String>,
}

/// Extracts the `ResourceDetails` rows from an envelope.
///
/// An absent `ResponseData`, an absent `ResourceDetails` key, or a
/// non-array `ResourceDetails` all mean "no results", not an error. Only an
/// unparseable `ResponseData` string is a malformed envelope.
pub fn parse_resource_details(envelope: &ResourceEnvelope) -> TimelineResult<Vec<Value>> {
    let Some(raw) = envelope.response_data.as_deref() else {
        debug!("envelope carries no response data, treating as empty result");
        return Ok(Vec::new());
    };

    let body: Value = serde_json::from_str(raw)
        .map_err(|e| TimelineError::MalformedEnvelope(format!("response data is not JSON: {e}")))?;

    match body.get("ResourceDetails") {
        Some(Value::Array(rows)) => Ok(rows.clone()),
        Some(_) | None => {
            debug!("resource details absent or not an array, treating as empty result");
            Ok(Vec::new())
        }
    }
}

/// One `{id, name}` pair from the master-data status lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterDataEntry {
    pub id: String,
    pub name: String,
}

/// Status dropdown option as consumed by the host's filter control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOption {
    pub label: String,
    pub value: String,
}

/// The built-in "all" option the dropdown always carries.
#[must_use]
pub fn builtin_all_option() -> StatusOption {
    StatusOption {
        label: "All".to_owned(),
        value: String::new(),
    }
}

/// Maps master-data entries to dropdown options, dropping empty names.
#[must_use]
pub fn status_options_from_master_data(entries: &[MasterDataEntry]) -> Vec<StatusOption> {
    entries
        .iter()
        .filter(|entry| !entry.name.trim().is_empty())
        .map(|entry| StatusOption {
            label: entry.name.clone(),
            value: entry.id.clone(),
        })
        .collect()
}
