//! Alternative route discovery for informational display.

use crate::models::SectorRate;
use crate::routes::alternatives::AlternativeRoute;

/// Find the priced segments sharing an endpoint with a direct pair.
///
/// The direct rate, when one exists, is emitted first. Every other active
/// rate departing from the same origin or arriving at the same destination
/// follows, deduplicated by rendered route string and sorted ascending by
/// rate. Single-hop only: alternatives are not composed transitively.
pub fn find_alternatives(
    origin: &str,
    destination: &str,
    rates: &[SectorRate],
) -> Vec<AlternativeRoute> {
    let active: Vec<&SectorRate> = rates.iter().filter(|r| r.is_active).collect();

    let mut result: Vec<AlternativeRoute> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    if let Some(direct) = active
        .iter()
        .find(|r| r.origin == origin && r.destination == destination)
    {
        let route = render_route(direct);
        seen.push(route.clone());
        result.push(AlternativeRoute {
            route,
            rate: direct.sector_rate,
            is_direct: true,
        });
    }

    let mut others: Vec<AlternativeRoute> = Vec::new();
    let shares_endpoint =
        |r: &SectorRate| r.origin == origin || r.destination == destination;
    for rate in active.iter().filter(|r| shares_endpoint(r)) {
        let route = render_route(rate);
        if seen.contains(&route) {
            continue;
        }
        seen.push(route.clone());
        others.push(AlternativeRoute {
            route,
            rate: rate.sector_rate,
            is_direct: false,
        });
    }
    others.sort_by(|a, b| a.rate.cmp(&b.rate));

    result.extend(others);
    result
}

fn render_route(rate: &SectorRate) -> String {
    format!("{} → {}", rate.origin, rate.destination)
}
