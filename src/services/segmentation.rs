//! Route segmentation: deriving the implicit connecting legs of a record.

use crate::models::Flight;
use crate::routes::segmentation::{RouteLeg, SegmentedRoute};

use super::airport_codes::normalize_airport_code;
use super::flight_resolver::resolve_flight;

/// Derive the four legs of a journey from a raw record.
///
/// Rules, in order:
/// 1. The inbound/outbound legs are the resolved flight endpoints; an
///    absent or unresolvable flight number leaves the leg absent.
/// 2. `before_bt` connects the record origin to the inbound flight's
///    origin when they differ. Without a resolved inbound the comparison
///    falls back to the outbound flight's origin.
/// 3. `after_bt` connects the outbound flight's destination to the record
///    destination when they differ. There is no inbound fallback here.
///
/// Equal endpoints collapse a connecting leg to absent; a degenerate
/// `X → X` leg is never produced. With neither flight resolved both
/// connecting legs are absent and no leg yields a route pair.
pub fn segment(
    origin_raw: &str,
    destination_raw: &str,
    inbound: Option<&str>,
    outbound: Option<&str>,
    flights: &[Flight],
) -> SegmentedRoute {
    let origin = normalize_airport_code(origin_raw);
    let destination = normalize_airport_code(destination_raw);

    let inbound_flight = inbound.and_then(|number| resolve_flight(number, flights));
    let outbound_flight = outbound.and_then(|number| resolve_flight(number, flights));

    let before_bt = match (&inbound_flight, &outbound_flight) {
        (Some(inbound), _) => connecting_leg(&origin, &inbound.origin),
        (None, Some(outbound)) => connecting_leg(&origin, &outbound.origin),
        (None, None) => None,
    };

    let after_bt = outbound_flight
        .as_ref()
        .and_then(|outbound| connecting_leg(&outbound.destination, &destination));

    SegmentedRoute {
        origin,
        destination,
        before_bt,
        inbound: inbound_flight.map(|f| RouteLeg::new(f.origin, f.destination)),
        outbound: outbound_flight.map(|f| RouteLeg::new(f.origin, f.destination)),
        after_bt,
    }
}

fn connecting_leg(from: &str, to: &str) -> Option<RouteLeg> {
    if from != to {
        Some(RouteLeg::new(from, to))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FlightId;

    fn flight(id: i64, number: &str, origin: &str, destination: &str) -> Flight {
        Flight {
            id: FlightId::new(id),
            flight_number: number.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            is_active: true,
        }
    }

    fn registry() -> Vec<Flight> {
        vec![
            flight(1, "BT234", "DEFRAX", "LVRIXX"),
            flight(2, "BT341", "LVRIXX", "LTVNOX"),
        ]
    }

    #[test]
    fn test_same_origin_collapses_before_bt() {
        // Record origin FRA equals the inbound flight's origin: no
        // before-connection leg.
        let seg = segment("USFRAT", "USRIXT", Some("BT234"), None, &registry());
        assert_eq!(seg.origin, "FRA");
        assert_eq!(seg.destination, "RIX");
        assert_eq!(seg.before_bt, None);
        assert_eq!(seg.inbound, Some(RouteLeg::new("FRA", "RIX")));
        assert_eq!(seg.outbound, None);
        assert_eq!(seg.after_bt, None);
    }

    #[test]
    fn test_before_bt_from_differing_inbound_origin() {
        let seg = segment("USVNOT", "USRIXT", Some("BT234"), None, &registry());
        assert_eq!(seg.before_bt, Some(RouteLeg::new("VNO", "FRA")));
    }

    #[test]
    fn test_before_bt_falls_back_to_outbound_origin() {
        // No inbound: before_bt compares against the outbound origin.
        let seg = segment("USFRAT", "USVNOT", None, Some("BT341"), &registry());
        assert_eq!(seg.before_bt, Some(RouteLeg::new("FRA", "RIX")));
        assert_eq!(seg.outbound, Some(RouteLeg::new("RIX", "VNO")));
        assert_eq!(seg.after_bt, None);
    }

    #[test]
    fn test_after_bt_from_differing_outbound_destination() {
        let seg = segment("USRIXT", "USTLLT", None, Some("BT341"), &registry());
        assert_eq!(seg.before_bt, None);
        assert_eq!(seg.after_bt, Some(RouteLeg::new("VNO", "TLL")));
    }

    #[test]
    fn test_after_bt_has_no_inbound_fallback() {
        // An inbound whose destination differs from the record destination
        // does not produce an after-connection leg.
        let seg = segment("USFRAT", "USTLLT", Some("BT234"), None, &registry());
        assert_eq!(seg.after_bt, None);
    }

    #[test]
    fn test_unresolved_flight_number_is_fail_open() {
        // BT999 is not in the registry: the leg is absent, not an error.
        let seg = segment("USFRAT", "USRIXT", Some("BT999"), None, &registry());
        assert_eq!(seg.inbound, None);
        assert_eq!(seg.before_bt, None);
        assert_eq!(seg.after_bt, None);
    }

    #[test]
    fn test_no_flights_at_all() {
        let seg = segment("USFRAT", "USRIXT", None, None, &registry());
        assert_eq!(seg.before_bt, None);
        assert_eq!(seg.inbound, None);
        assert_eq!(seg.outbound, None);
        assert_eq!(seg.after_bt, None);
    }

    #[test]
    fn test_full_four_leg_journey() {
        let seg = segment("USVNOT", "USTLLT", Some("BT234"), Some("BT341"), &registry());
        assert_eq!(seg.before_bt, Some(RouteLeg::new("VNO", "FRA")));
        assert_eq!(seg.inbound, Some(RouteLeg::new("FRA", "RIX")));
        assert_eq!(seg.outbound, Some(RouteLeg::new("RIX", "VNO")));
        assert_eq!(seg.after_bt, Some(RouteLeg::new("VNO", "TLL")));
    }

    #[test]
    fn test_determinism() {
        let a = segment("USVNOT", "USTLLT", Some("BT234"), Some("BT341"), &registry());
        let b = segment("USVNOT", "USTLLT", Some("BT234"), Some("BT341"), &registry());
        assert_eq!(a, b);
    }
}
