//! Flight number resolution against the flight registry.

use crate::models::Flight;
use crate::routes::segmentation::FlightLabel;

use super::airport_codes::normalize_airport_code;

/// A flight number resolved to its canonical endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFlight {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
}

/// Look up a flight number with a case-insensitive exact match.
///
/// The endpoints of a hit are normalized to canonical codes; a miss is not
/// an error, the caller treats the leg as absent.
pub fn resolve_flight(flight_number: &str, flights: &[Flight]) -> Option<ResolvedFlight> {
    flights
        .iter()
        .find(|f| f.flight_number.eq_ignore_ascii_case(flight_number))
        .map(|f| ResolvedFlight {
            flight_number: f.flight_number.clone(),
            origin: normalize_airport_code(&f.origin),
            destination: normalize_airport_code(&f.destination),
        })
}

/// Build the display label for a flight number.
///
/// Degrades to the bare flight number when the registry has no match; the
/// raw number is still shown to the user even though the leg contributes
/// nothing to segmentation.
pub fn flight_label(flight_number: &str, flights: &[Flight]) -> FlightLabel {
    match resolve_flight(flight_number, flights) {
        Some(resolved) => FlightLabel::resolved(
            resolved.flight_number,
            resolved.origin,
            resolved.destination,
        ),
        None => FlightLabel::unresolved(flight_number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FlightId;

    fn flights() -> Vec<Flight> {
        vec![
            Flight {
                id: FlightId::new(1),
                flight_number: "BT234".to_string(),
                origin: "DEFRAX".to_string(),
                destination: "LVRIXX".to_string(),
                is_active: true,
            },
            Flight {
                id: FlightId::new(2),
                flight_number: "BT341".to_string(),
                origin: "LVRIXX".to_string(),
                destination: "LTVNOX".to_string(),
                is_active: true,
            },
        ]
    }

    #[test]
    fn test_resolve_hit_normalizes_endpoints() {
        let resolved = resolve_flight("BT234", &flights()).unwrap();
        assert_eq!(resolved.origin, "FRA");
        assert_eq!(resolved.destination, "RIX");
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let resolved = resolve_flight("bt234", &flights()).unwrap();
        assert_eq!(resolved.flight_number, "BT234");
    }

    #[test]
    fn test_resolve_miss() {
        assert!(resolve_flight("BT999", &flights()).is_none());
    }

    #[test]
    fn test_label_resolved() {
        let label = flight_label("BT234", &flights());
        assert!(label.is_resolved());
        assert_eq!(label.to_string(), "BT234, FRA → RIX");
    }

    #[test]
    fn test_label_uses_registry_casing() {
        let label = flight_label("bt234", &flights());
        assert_eq!(label.to_string(), "BT234, FRA → RIX");
    }

    #[test]
    fn test_label_degrades_to_bare_number() {
        let label = flight_label("BT999", &flights());
        assert!(!label.is_resolved());
        assert_eq!(label.to_string(), "BT999");
    }
}
