//! Transit pricing: enumerating the selectable variants of a transit rate.

use rust_decimal::Decimal;

use crate::models::{Customer, TransitRate};
use crate::routes::transit::TransitOption;

const NO_CUSTOMER: &str = "No Customer";

/// Generate every selectable pricing variant of a transit rate.
///
/// Without selected routes a single base option is emitted at the pair's
/// own rate (zero when absent). Each selected route (`"A -> B -> C"`)
/// otherwise becomes one option whose total is the base rate plus the
/// incremental price of every interior stop, looked up by first matching
/// index in the transit stop chain. Unknown stops and price text that
/// fails numeric coercion contribute zero; nothing here errors.
pub fn generate_transit_options(
    rate: &TransitRate,
    customers: &[Customer],
) -> Vec<TransitOption> {
    let base = rate.sector_rate.unwrap_or(Decimal::ZERO);
    let customer_name = rate
        .customer_id
        .and_then(|id| customers.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| NO_CUSTOMER.to_string());

    if rate.selected_routes.is_empty() {
        return vec![TransitOption {
            transit_rate_id: rate.id,
            transit_route: None,
            display_text: format!("€{:.2} - {} - {}", base, rate.label, customer_name),
            total_price: base,
        }];
    }

    rate.selected_routes
        .iter()
        .map(|route| {
            let total = base + transit_surcharge(rate, route);
            TransitOption {
                transit_rate_id: rate.id,
                transit_route: Some(route.clone()),
                display_text: format!(
                    "€{:.2} - {} - {} - {}",
                    total, rate.label, route, customer_name
                ),
                total_price: total,
            }
        })
        .collect()
}

/// Sum of the incremental prices of a selected route's interior stops.
fn transit_surcharge(rate: &TransitRate, route: &str) -> Decimal {
    // Stop and price arrays are parallel; on a length mismatch they are
    // treated as absent together.
    if rate.transit_routes.len() != rate.transit_prices.len() {
        return Decimal::ZERO;
    }

    let stops: Vec<&str> = route.split("->").map(str::trim).collect();
    if stops.len() <= 2 {
        return Decimal::ZERO;
    }

    stops[1..stops.len() - 1]
        .iter()
        .map(|stop| {
            rate.transit_routes
                .iter()
                .position(|r| r == stop)
                .and_then(|idx| rate.transit_prices[idx].trim().parse::<Decimal>().ok())
                .unwrap_or(Decimal::ZERO)
        })
        .sum()
}
