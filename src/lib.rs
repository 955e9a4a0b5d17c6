//! fleetline: equipment scheduling timeline engine.
//!
//! The crate pairs a range/filter controller with a pure timeline layout
//! engine for fleet-equipment availability and trip/maintenance events.
//! Hosts own the actual rendering surface and the network transport; both
//! are consumed through seams (`ResourceGateway`, scroll directives).

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod protocol;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
