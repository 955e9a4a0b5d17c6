use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::api::config::TimelineEngineConfig;
use crate::api::controller::{FetchOutcome, FetchPlan, RangeFilterController};
use crate::api::events::{HostEvent, Notification, Severity, TimelineContext, TimelineObserver};
use crate::api::filter::{FilterField, FilterPayload};
use crate::core::geometry::{BarGeometry, bar_geometry};
use crate::core::labels::{TimelineLabel, timeline_labels};
use crate::core::selection::SelectionSet;
use crate::core::types::{CalendarEvent, EquipmentItem, EventKind};
use crate::core::view_window::{DateRangeParams, ViewMode, ViewWindow};
use crate::core::windowing::events_for_equipment;
use crate::error::TimelineResult;
use crate::interaction::{ScrollAxis, ScrollCoordinator, ScrollDirective, ScrollPane};
use crate::protocol::gateway::ResourceGateway;
use crate::protocol::mapper::{JsonResourceMapper, ResourceMapper};
use crate::protocol::wire::{
    ResourceRequest, StatusOption, builtin_all_option, parse_resource_details,
    status_options_from_master_data,
};

/// One laid-out event bar on an equipment row.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBar {
    pub event_id: String,
    pub kind: EventKind,
    pub geometry: BarGeometry,
}

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` coordinates the range/filter controller, layout
/// computation, selection, scroll synchronization, and gateway calls.
pub struct TimelineEngine<G: ResourceGateway> {
    gateway: G,
    mapper: Box<dyn ResourceMapper>,
    controller: RangeFilterController,
    selection: SelectionSet,
    scroll: ScrollCoordinator,
    observers: Vec<Box<dyn TimelineObserver>>,
    status_options: Vec<StatusOption>,
    hour_subdivision: bool,
    day_width_px: f64,
}

impl<G: ResourceGateway> TimelineEngine<G> {
    pub fn new(gateway: G, config: TimelineEngineConfig) -> TimelineResult<Self> {
        config.validate()?;
        let window = ViewWindow::new(config.view, config.anchor);
        Ok(Self {
            gateway,
            mapper: Box::new(JsonResourceMapper),
            controller: RangeFilterController::new(window, config.trip_no.clone()),
            selection: SelectionSet::default(),
            scroll: ScrollCoordinator::default(),
            observers: Vec::new(),
            status_options: vec![builtin_all_option()],
            hour_subdivision: config.hour_subdivision,
            day_width_px: config.day_width_px,
        })
    }

    /// Swaps the response-shape mapper for hosts with a different upstream.
    pub fn set_mapper(&mut self, mapper: Box<dyn ResourceMapper>) {
        self.mapper = mapper;
    }

    /// Mount-time bootstrap: loads the status legend (non-fatal) and issues
    /// the initial refresh for the configured window.
    pub fn mount(&mut self) {
        self.load_status_options();
        self.range_changed();
    }

    /// Imperative filter entry point for the hosting container.
    pub fn apply_filter(&mut self, payload: &FilterPayload, is_initial_load: bool) {
        let plan = self.controller.apply_filter(payload, is_initial_load);
        self.run_plan(plan);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.controller.set_view(view);
        self.emit(HostEvent::ViewChanged { view });
        self.range_changed();
    }

    pub fn navigate_prev(&mut self) {
        self.controller.navigate_prev();
        self.range_changed();
    }

    pub fn navigate_next(&mut self) {
        self.controller.navigate_next();
        self.range_changed();
    }

    pub fn navigate_today(&mut self, today: NaiveDate) {
        self.controller.navigate_to(today);
        self.range_changed();
    }

    /// Toggles hour subdivision. Pure view change: the visible dates stay
    /// identical, so no refresh is issued.
    pub fn set_hour_subdivision(&mut self, enabled: bool) {
        self.hour_subdivision = enabled;
        self.emit(HostEvent::HourSubdivisionChanged { enabled });
    }

    /// Applies the status legend filter and refreshes.
    pub fn set_status_filter(&mut self, value: &str) {
        self.emit(HostEvent::StatusFilterChanged {
            value: value.to_owned(),
        });
        let payload = FilterPayload::default().with_field(FilterField::Status, value);
        self.apply_filter(&payload, false);
    }

    /// Axis labels for the current window.
    #[must_use]
    pub fn timeline_labels(&self) -> Vec<TimelineLabel> {
        timeline_labels(self.controller.window(), self.hour_subdivision)
    }

    /// Laid-out bars for one equipment row inside the visible window.
    #[must_use]
    pub fn row_layout(&self, equipment_id: &str) -> Vec<EventBar> {
        let window = self.controller.window();
        events_for_equipment(self.controller.events(), equipment_id, window)
            .into_iter()
            .filter_map(|event| {
                bar_geometry(event, window, self.hour_subdivision, self.day_width_px).map(
                    |geometry| EventBar {
                        event_id: event.id.clone(),
                        kind: event.kind,
                        geometry,
                    },
                )
            })
            .collect()
    }

    /// Forwards a bar click verbatim. Never mutates selection.
    pub fn click_bar(&mut self, event_id: &str) {
        self.emit(HostEvent::BarClicked {
            event_id: event_id.to_owned(),
        });
    }

    /// Forwards an equipment-label click verbatim.
    pub fn click_equipment(&mut self, equipment_id: &str) {
        self.emit(HostEvent::EquipmentClicked {
            equipment_id: equipment_id.to_owned(),
        });
    }

    pub fn toggle_selection(&mut self, equipment_id: &str) {
        self.selection.toggle(equipment_id);
        self.emit_selection_changed();
    }

    /// Select-all over the currently filtered rows, or clear everything.
    pub fn set_select_all(&mut self, enabled: bool) {
        let ids: Vec<String> = self
            .controller
            .equipment()
            .iter()
            .map(|item| item.id.clone())
            .collect();
        if enabled {
            self.selection.select_all(ids);
        } else {
            for id in &ids {
                self.selection.set(id, false);
            }
        }
        self.emit_selection_changed();
    }

    /// Asks the host to add the selected rows to a trip.
    pub fn request_add_to_trip(&mut self) {
        let ids = self.selection.ids();
        self.emit(HostEvent::AddToTrip { ids });
    }

    /// Routes one native scroll event through the coordinator.
    pub fn report_scroll(
        &mut self,
        pane: ScrollPane,
        axis: ScrollAxis,
        offset: f64,
    ) -> Vec<ScrollDirective> {
        self.scroll.report_scroll(pane, axis, offset)
    }

    pub fn register_observer(&mut self, observer: Box<dyn TimelineObserver>) {
        if self
            .observers
            .iter()
            .any(|existing| existing.id() == observer.id())
        {
            warn!(id = observer.id(), "ignoring duplicate observer id");
            return;
        }
        self.observers.push(observer);
    }

    /// On-demand read of the current equipment list for the container.
    #[must_use]
    pub fn equipment(&self) -> &[EquipmentItem] {
        self.controller.equipment()
    }

    #[must_use]
    pub fn events(&self) -> &[CalendarEvent] {
        self.controller.events()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.controller.loading()
    }

    #[must_use]
    pub fn view(&self) -> ViewMode {
        self.controller.window().view()
    }

    #[must_use]
    pub fn date_range_params(&self) -> DateRangeParams {
        self.controller.window().date_range_params()
    }

    #[must_use]
    pub fn hour_subdivision(&self) -> bool {
        self.hour_subdivision
    }

    #[must_use]
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.ids()
    }

    #[must_use]
    pub fn status_options(&self) -> &[StatusOption] {
        &self.status_options
    }

    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    #[must_use]
    pub fn into_gateway(self) -> G {
        self.gateway
    }

    fn range_changed(&mut self) {
        let params = self.controller.window().date_range_params();
        self.emit(HostEvent::VisibleRangeChanged { params });
        if let Some(plan) = self.controller.handle_date_range_change(params) {
            self.run_plan(plan);
        }
    }

    fn run_plan(&mut self, plan: FetchPlan) {
        let outcome = resolve_outcome(&mut self.gateway, self.mapper.as_ref(), &plan.request);
        let report = self.controller.ingest_response(plan.generation, outcome);
        if !report.applied {
            return;
        }

        if let Some(message) = report.failure_message {
            self.emit(HostEvent::Notification(Notification {
                severity: Severity::Destructive,
                message,
            }));
        }

        let known: Vec<&str> = self
            .controller
            .equipment()
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        self.selection.retain_known(&known);

        self.emit(HostEvent::DataRefreshed {
            equipment_len: self.controller.equipment().len(),
            events_len: self.controller.events().len(),
        });
    }

    /// Loads the status legend options. Failures only affect a non-critical
    /// dropdown, so they are logged and the built-in "all" option remains.
    fn load_status_options(&mut self) {
        match self.gateway.fetch_status_options() {
            Ok(entries) => {
                let mut options = vec![builtin_all_option()];
                options.extend(status_options_from_master_data(&entries));
                debug!(options = options.len(), "loaded status legend options");
                self.status_options = options;
            }
            Err(error) => {
                warn!(%error, "status legend lookup failed, keeping built-in option");
                self.status_options = vec![builtin_all_option()];
            }
        }
    }

    fn emit_selection_changed(&mut self) {
        let ids = self.selection.ids();
        self.emit(HostEvent::SelectionChanged { ids });
    }

    fn emit(&mut self, event: HostEvent) {
        let context = self.context();
        for observer in &mut self.observers {
            observer.on_event(&event, context);
        }
    }

    fn context(&self) -> TimelineContext {
        let window = self.controller.window();
        TimelineContext {
            view: window.view(),
            window: window.span(),
            hour_subdivision: self.hour_subdivision,
            equipment_len: self.controller.equipment().len(),
            events_len: self.controller.events().len(),
            loading: self.controller.loading(),
        }
    }
}

fn resolve_outcome<G: ResourceGateway>(
    gateway: &mut G,
    mapper: &dyn ResourceMapper,
    request: &ResourceRequest,
) -> FetchOutcome {
    let envelope = match gateway.fetch_resources(request) {
        Ok(envelope) => envelope,
        Err(error) => return FetchOutcome::TransportFailed(error.to_string()),
    };

    let rows = match parse_resource_details(&envelope) {
        Ok(rows) => rows,
        Err(error) => return FetchOutcome::Malformed(error.to_string()),
    };
    if rows.is_empty() {
        return FetchOutcome::Empty;
    }

    match mapper.map_rows(&rows) {
        Ok(mapped) => FetchOutcome::Loaded(mapped),
        Err(error) => FetchOutcome::Malformed(error.to_string()),
    }
}
