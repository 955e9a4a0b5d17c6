use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::view_window::ViewMode;
use crate::error::{TimelineError, TimelineResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load timeline
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub view: ViewMode,
    pub anchor: NaiveDate,
    #[serde(default)]
    pub hour_subdivision: bool,
    #[serde(default = "default_day_width_px")]
    pub day_width_px: f64,
    #[serde(default)]
    pub trip_no: Option<String>,
}

impl TimelineEngineConfig {
    /// Creates a minimal config with the default day-column width.
    #[must_use]
    pub fn new(view: ViewMode, anchor: NaiveDate) -> Self {
        Self {
            view,
            anchor,
            hour_subdivision: false,
            day_width_px: default_day_width_px(),
            trip_no: None,
        }
    }

    /// Enables or disables hour subdivision at mount.
    #[must_use]
    pub fn with_hour_subdivision(mut self, enabled: bool) -> Self {
        self.hour_subdivision = enabled;
        self
    }

    /// Sets the fixed day-column width used by month-view pixel layout.
    #[must_use]
    pub fn with_day_width_px(mut self, day_width_px: f64) -> Self {
        self.day_width_px = day_width_px;
        self
    }

    /// Scopes every resource fetch to one trip number.
    #[must_use]
    pub fn with_trip_no(mut self, trip_no: impl Into<String>) -> Self {
        self.trip_no = Some(trip_no.into());
        self
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.day_width_px.is_finite() || self.day_width_px <= 0.0 {
            return Err(TimelineError::InvalidData(
                "day column width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_day_width_px() -> f64 {
    40.0
}
