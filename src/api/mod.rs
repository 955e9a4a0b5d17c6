pub mod config;
pub mod controller;
pub mod engine;
pub mod events;
pub mod filter;

pub use config::TimelineEngineConfig;
pub use controller::{FetchGuard, FetchOutcome, FetchPlan, IngestReport, RangeFilterController};
pub use engine::{EventBar, TimelineEngine};
pub use events::{HostEvent, Notification, Severity, TimelineContext, TimelineObserver};
pub use filter::{
    DateResolution, FilterField, FilterPayload, RetainedFilterState, resolve_dates, wire_value,
};
