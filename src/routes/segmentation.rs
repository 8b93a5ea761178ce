use serde::{Deserialize, Serialize};

// =========================================================
// Segmentation types
// =========================================================

/// A directed leg between two canonical airport codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub origin: String,
    pub destination: String,
}

impl RouteLeg {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl std::fmt::Display for RouteLeg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.origin, self.destination)
    }
}

/// Render a possibly-absent leg the way the console shows it.
pub fn leg_text(leg: Option<&RouteLeg>) -> String {
    leg.map(|l| l.to_string()).unwrap_or_else(|| "-".to_string())
}

/// A flight number together with its resolved endpoints, when known.
///
/// The rendered form is the display contract the console relies on:
/// `"<flightNumber>, <origin> → <destination>"` when resolved, the bare
/// flight number otherwise. Consumers read the fields, never re-parse the
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLabel {
    pub flight_number: String,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

impl FlightLabel {
    pub fn resolved(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            origin: Some(origin.into()),
            destination: Some(destination.into()),
        }
    }

    pub fn unresolved(flight_number: impl Into<String>) -> Self {
        Self {
            flight_number: flight_number.into(),
            origin: None,
            destination: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.origin.is_some() && self.destination.is_some()
    }

    /// The leg this flight covers, when resolved.
    pub fn leg(&self) -> Option<RouteLeg> {
        match (&self.origin, &self.destination) {
            (Some(o), Some(d)) => Some(RouteLeg::new(o.clone(), d.clone())),
            _ => None,
        }
    }
}

impl std::fmt::Display for FlightLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.origin, &self.destination) {
            (Some(o), Some(d)) => write!(f, "{}, {} → {}", self.flight_number, o, d),
            _ => write!(f, "{}", self.flight_number),
        }
    }
}

/// The four derived legs of a journey.
///
/// Leg evaluation order is fixed (`before_bt`, `inbound`, `outbound`,
/// `after_bt`) and preserved by [`SegmentedRoute::legs`]; rate matching
/// depends on it for deduplication-order determinism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedRoute {
    /// Canonical record origin.
    pub origin: String,
    /// Canonical record destination.
    pub destination: String,
    pub before_bt: Option<RouteLeg>,
    pub inbound: Option<RouteLeg>,
    pub outbound: Option<RouteLeg>,
    pub after_bt: Option<RouteLeg>,
}

impl SegmentedRoute {
    /// The legs in fixed evaluation order.
    pub fn legs(&self) -> [Option<&RouteLeg>; 4] {
        [
            self.before_bt.as_ref(),
            self.inbound.as_ref(),
            self.outbound.as_ref(),
            self.after_bt.as_ref(),
        ]
    }
}

/// Presentation view of a record's segmentation.
///
/// For converted records the recomputed legs are suppressed in favor of
/// the persisted override fields, and the flight labels are omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationView {
    pub record_id: crate::api::CargoRecordId,
    pub origin: String,
    pub destination: String,
    pub before_bt: Option<RouteLeg>,
    pub inbound: Option<RouteLeg>,
    pub outbound: Option<RouteLeg>,
    pub after_bt: Option<RouteLeg>,
    pub inbound_flight: Option<FlightLabel>,
    pub outbound_flight: Option<FlightLabel>,
    pub converted: bool,
}
