use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::view_window::{DateSpan, ViewWindow};

/// Equipment attribute filters the host can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterField {
    Type,
    Code,
    Status,
    Group,
    Contract,
    ContractAgent,
    Owner,
    Category,
}

impl FilterField {
    pub const ALL: [FilterField; 8] = [
        FilterField::Type,
        FilterField::Code,
        FilterField::Status,
        FilterField::Group,
        FilterField::Contract,
        FilterField::ContractAgent,
        FilterField::Owner,
        FilterField::Category,
    ];

    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Type => "EquipmentType",
            Self::Code => "EquipmentCode",
            Self::Status => "EquipmentStatus",
            Self::Group => "EquipmentGroup",
            Self::Contract => "EquipmentContract",
            Self::ContractAgent => "ContractAgent",
            Self::Owner => "EquipmentOwner",
            Self::Category => "EquipmentCategory",
        }
    }
}

/// Partial filter action from the host.
///
/// A key present in `fields` is an explicit declaration; an empty string
/// means "clear this filter". Absent keys leave the retained value alone.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPayload {
    #[serde(default)]
    pub fields: IndexMap<FilterField, String>,
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
}

impl FilterPayload {
    #[must_use]
    pub fn with_field(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.fields.insert(field, value.into());
        self
    }

    #[must_use]
    pub fn with_dates(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from_date = Some(from);
        self.to_date = Some(to);
        self
    }

    #[must_use]
    pub fn with_from_date(mut self, from: NaiveDate) -> Self {
        self.from_date = Some(from);
        self
    }

    #[must_use]
    pub fn with_to_date(mut self, to: NaiveDate) -> Self {
        self.to_date = Some(to);
        self
    }
}

/// Reduces a possibly piped `"ID || Name"` value to the half this field
/// sends on the wire.
///
/// Status filters by name; every other field filters by ID. The asymmetry
/// is preserved origin behavior, not a deliberate contract of this crate.
#[must_use]
pub fn wire_value(field: FilterField, raw: &str) -> String {
    match raw.split_once(" || ") {
        Some((id, name)) => {
            if field == FilterField::Status {
                name.trim().to_owned()
            } else {
                id.trim().to_owned()
            }
        }
        None => raw.trim().to_owned(),
    }
}

/// Last-known-good merge of filter fields and explicit date bounds.
///
/// Lives as long as the mounted view. Dates computed purely from view
/// navigation never land here.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RetainedFilterState {
    fields: IndexMap<FilterField, String>,
    dates: Option<DateSpan>,
}

impl RetainedFilterState {
    /// Applies one payload: declared keys overwrite, an explicit empty
    /// string clears, absent keys keep their previous value.
    pub fn merge_payload(&mut self, payload: &FilterPayload) {
        for (&field, value) in &payload.fields {
            if value.trim().is_empty() {
                self.fields.shift_remove(&field);
            } else {
                self.fields.insert(field, value.clone());
            }
        }
    }

    #[must_use]
    pub fn fields(&self) -> &IndexMap<FilterField, String> {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, field: FilterField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn dates(&self) -> Option<DateSpan> {
        self.dates
    }

    pub fn set_dates(&mut self, span: DateSpan) {
        self.dates = Some(span);
    }

    pub fn clear_dates(&mut self) {
        self.dates = None;
    }
}

/// Outcome of the date-precedence resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateResolution {
    pub span: DateSpan,
    /// Whether the resolved span is written back into retained state.
    /// Spans computed from the view's default window are transient.
    pub persist: bool,
    /// Set when a single payload date moves the anchor.
    pub anchor_override: Option<NaiveDate>,
}

/// Resolves the fetch window from payload dates, retained dates, and the
/// current view's default window, in that precedence order.
///
/// - Both payload dates: used verbatim and persisted.
/// - Exactly one payload date: the anchor moves to it and the window is
///   recomputed from the view; nothing persists.
/// - Neither: previously retained dates when present (persisted again),
///   otherwise the view's default window (transient).
#[must_use]
pub fn resolve_dates(
    payload: &FilterPayload,
    retained: Option<DateSpan>,
    window: ViewWindow,
) -> DateResolution {
    match (payload.from_date, payload.to_date) {
        (Some(from), Some(to)) => DateResolution {
            span: DateSpan::new(from, to),
            persist: true,
            anchor_override: None,
        },
        (Some(single), None) | (None, Some(single)) => DateResolution {
            span: window.with_anchor(single).span(),
            persist: false,
            anchor_override: Some(single),
        },
        (None, None) => match retained {
            Some(span) => DateResolution {
                span,
                persist: true,
                anchor_override: None,
            },
            None => DateResolution {
                span: window.span(),
                persist: false,
                anchor_override: None,
            },
        },
    }
}
