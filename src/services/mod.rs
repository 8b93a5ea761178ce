//! Service layer for the pricing engine and background processing.
//!
//! The engine modules are stateless, fail-open functions over registry
//! snapshots: registries go in as plain slices, derived results come out.
//! Nothing in here touches the repository; orchestration of snapshot
//! fetching and persistence lives in [`crate::db::services`].

pub mod airport_codes;

pub mod alternatives;

pub mod conversion;

pub mod flight_resolver;

pub mod rate_matcher;

pub mod segmentation;

pub mod transit_options;

#[cfg(feature = "http-server")]
pub mod job_tracker;
#[cfg(feature = "http-server")]
pub mod manifest_processor;

pub use airport_codes::normalize_airport_code;
pub use alternatives::find_alternatives;
pub use conversion::validate_conversion;
pub use flight_resolver::{flight_label, resolve_flight, ResolvedFlight};
pub use rate_matcher::match_rates;
pub use segmentation::segment;
pub use transit_options::generate_transit_options;
