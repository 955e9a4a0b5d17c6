use chrono::NaiveDate;
use tracing::{debug, trace, warn};

use crate::api::filter::{FilterPayload, RetainedFilterState, resolve_dates, wire_value};
use crate::core::types::{CalendarEvent, EquipmentItem};
use crate::core::view_window::{DateRangeParams, DateSpan, ViewMode, ViewWindow};
use crate::protocol::mapper::MappedResources;
use crate::protocol::wire::{RequestHeader, ResourceRequest, WireFilter};

/// Single-shot suppression guard left behind by an applied filter.
///
/// Consumed exactly once by the next visible-window notification: a match
/// suppresses the duplicate fetch, a mismatch merely clears the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchGuard {
    #[default]
    Idle,
    Suppress(DateSpan),
}

/// One fetch the controller decided to issue.
///
/// The generation stamp lets the host resolve requests out of order; only
/// the latest generation is ever applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    pub generation: u64,
    pub span: DateSpan,
    pub request: ResourceRequest,
}

/// Terminal result of one fetch, as interpreted by the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(MappedResources),
    Empty,
    TransportFailed(String),
    Malformed(String),
}

/// What happened when a response was ingested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    /// False when the response was stale and discarded.
    pub applied: bool,
    /// Message for a user-visible destructive notification, when warranted.
    pub failure_message: Option<String>,
}

/// Owns the current view window, the reconciled filter state, and the
/// decision of when a network refresh is actually needed.
///
/// The controller is the sole origin of fetches. It never talks to the
/// network itself; it hands out `FetchPlan`s and ingests outcomes.
#[derive(Debug)]
pub struct RangeFilterController {
    window: ViewWindow,
    retained: RetainedFilterState,
    guard: FetchGuard,
    generation: u64,
    loading: bool,
    trip_no: Option<String>,
    equipment: Vec<EquipmentItem>,
    events: Vec<CalendarEvent>,
}

impl RangeFilterController {
    #[must_use]
    pub fn new(window: ViewWindow, trip_no: Option<String>) -> Self {
        Self {
            window,
            retained: RetainedFilterState::default(),
            guard: FetchGuard::Idle,
            generation: 0,
            loading: false,
            trip_no,
            equipment: Vec::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn window(&self) -> ViewWindow {
        self.window
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn fetch_guard(&self) -> FetchGuard {
        self.guard
    }

    #[must_use]
    pub fn retained(&self) -> &RetainedFilterState {
        &self.retained
    }

    #[must_use]
    pub fn equipment(&self) -> &[EquipmentItem] {
        &self.equipment
    }

    #[must_use]
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.window.set_view(view);
    }

    pub fn navigate_prev(&mut self) {
        self.window.navigate_prev();
    }

    pub fn navigate_next(&mut self) {
        self.window.navigate_next();
    }

    pub fn navigate_to(&mut self, date: NaiveDate) {
        self.window.navigate_to(date);
    }

    /// Forgets previously persisted filter dates; the next resolution falls
    /// back to the view's computed window.
    pub fn clear_retained_dates(&mut self) {
        self.retained.clear_dates();
    }

    /// Applies a user-supplied filter action and plans exactly one fetch.
    ///
    /// Date precedence: explicit payload dates, then previously retained
    /// dates, then the current view's default window. Only the first two
    /// persist. The resolved span is recorded as a single-shot guard so the
    /// layout's own window notification for the same span is skipped once.
    pub fn apply_filter(&mut self, payload: &FilterPayload, is_initial_load: bool) -> FetchPlan {
        self.retained.merge_payload(payload);

        let resolution = resolve_dates(payload, self.retained.dates(), self.window);
        if let Some(anchor) = resolution.anchor_override {
            self.window.set_anchor(anchor);
        }
        if resolution.persist {
            self.retained.set_dates(resolution.span);
        }
        self.guard = FetchGuard::Suppress(resolution.span);

        debug!(
            span_from = %resolution.span.wire_from(),
            span_to = %resolution.span.wire_to(),
            persist = resolution.persist,
            is_initial_load,
            "apply filter"
        );
        self.plan_fetch(resolution.span)
    }

    /// Reacts to the layout surface reporting a new visible window
    /// (navigation, view switch, or mount).
    ///
    /// Returns `None` when the just-applied filter already covered the
    /// identical span; otherwise plans a fetch with retained filters and
    /// the new dates. Navigation dates are never written into retained
    /// state.
    pub fn handle_date_range_change(&mut self, params: DateRangeParams) -> Option<FetchPlan> {
        self.window.set_view(params.view);
        self.window.navigate_to(params.start_date);

        let candidate = params.span();
        let guard = std::mem::take(&mut self.guard);
        if guard == FetchGuard::Suppress(candidate) {
            debug!(
                span_from = %candidate.wire_from(),
                span_to = %candidate.wire_to(),
                "window already covered by applied filter, skipping fetch"
            );
            return None;
        }

        Some(self.plan_fetch(candidate))
    }

    /// Ingests a fetch outcome, discarding stale generations.
    ///
    /// On any applied outcome the loading flag clears and the collections
    /// are either replaced (non-empty load) or cleared (everything else);
    /// no partial or stale display survives a failed refresh.
    pub fn ingest_response(&mut self, generation: u64, outcome: FetchOutcome) -> IngestReport {
        if generation != self.generation {
            trace!(
                generation,
                current = self.generation,
                "discarding stale fetch response"
            );
            return IngestReport {
                applied: false,
                failure_message: None,
            };
        }

        self.loading = false;
        let failure_message = match outcome {
            FetchOutcome::Loaded(mapped) if !mapped.equipment.is_empty() => {
                debug!(
                    equipment_len = mapped.equipment.len(),
                    events_len = mapped.events.len(),
                    "replacing timeline collections"
                );
                self.equipment = mapped.equipment;
                self.events = mapped.events;
                None
            }
            FetchOutcome::Loaded(_) | FetchOutcome::Empty => {
                debug!("empty resource result, clearing timeline collections");
                self.equipment.clear();
                self.events.clear();
                None
            }
            FetchOutcome::TransportFailed(message) => {
                warn!(%message, "resource fetch transport failure");
                self.equipment.clear();
                self.events.clear();
                Some(message)
            }
            FetchOutcome::Malformed(message) => {
                warn!(%message, "resource response could not be parsed");
                self.equipment.clear();
                self.events.clear();
                Some(message)
            }
        };

        IngestReport {
            applied: true,
            failure_message,
        }
    }

    fn plan_fetch(&mut self, span: DateSpan) -> FetchPlan {
        self.generation += 1;
        self.loading = true;

        let mut additional_filter = vec![
            WireFilter::new("FromDate", span.wire_from()),
            WireFilter::new("ToDate", span.wire_to()),
        ];
        for (&field, raw) in self.retained.fields() {
            let value = wire_value(field, raw);
            if !value.is_empty() {
                additional_filter.push(WireFilter::new(field.wire_name(), value));
            }
        }

        trace!(
            generation = self.generation,
            filters = additional_filter.len(),
            "planned resource fetch"
        );
        FetchPlan {
            generation: self.generation,
            span,
            request: ResourceRequest {
                trip_no: self.trip_no.clone(),
                request_header: RequestHeader { additional_filter },
            },
        }
    }
}
