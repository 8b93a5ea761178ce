//! Sector rate matching: pricing a segmented route.

use rust_decimal::Decimal;

use crate::models::SectorRate;
use crate::routes::breakdown::PricedBreakdown;
use crate::routes::segmentation::SegmentedRoute;

/// Find the active sector rates covering a segmented route.
///
/// Each present leg is matched against active rates by exact directional
/// `(origin, destination)` equality. Matches are unioned in fixed leg order
/// (`before_bt`, `inbound`, `outbound`, `after_bt`), deduplicated by rate
/// id with the first occurrence winning, and summed. A record with zero
/// matches yields an empty rate list and a zero total, never an error.
///
/// Re-running with unchanged inputs produces an identical breakdown: same
/// rate set, same order, same sum.
pub fn match_rates(segmented: &SegmentedRoute, rates: &[SectorRate]) -> PricedBreakdown {
    let mut matched: Vec<SectorRate> = Vec::new();

    for leg in segmented.legs().into_iter().flatten() {
        for rate in rates {
            if !rate.is_active {
                continue;
            }
            if rate.origin == leg.origin && rate.destination == leg.destination {
                if !matched.iter().any(|m| m.id == rate.id) {
                    matched.push(rate.clone());
                }
            }
        }
    }

    let total_sum: Decimal = matched.iter().map(|r| r.sector_rate).sum();

    PricedBreakdown {
        route: format!("{} → {}", segmented.origin, segmented.destination),
        total_sum,
        rates: matched,
    }
}
