//! Registry entities mirrored from the hosted store.
//!
//! These are the four read-only registries the pricing engine consumes
//! (airport codes, flights, sector rates, transit rates) plus the customer
//! registry needed for transit option display. The engine receives them as
//! plain slices; filtering to active rows happens in the orchestration
//! layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::api::{AirportCodeId, CustomerId, FlightId, SectorRateId, TransitRateId};

/// Canonical 3-letter airport code registry row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportCode {
    pub id: AirportCodeId,
    /// 3-letter code; the join key used everywhere else.
    pub code: String,
    pub is_active: bool,
    pub is_eu: bool,
}

/// Flight registry row.
///
/// `origin` and `destination` are stored in the longer raw form; the
/// canonical airport code is derived by the normalizer, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub id: FlightId,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub is_active: bool,
}

/// Flat price for one directed airport pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorRate {
    pub id: SectorRateId,
    pub origin: String,
    pub destination: String,
    pub sector_rate: Decimal,
    pub is_active: bool,
}

/// Composite pricing fact: a priced airport pair carrying an ordered chain
/// of transit stops with per-stop incremental prices.
///
/// `transit_prices[i]` is the incremental price attributable to
/// `transit_routes[i]`; when the two arrays differ in length they are
/// treated as absent together. Prices are kept as stored text and coerced
/// at computation time so malformed store values degrade to zero instead of
/// failing the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitRate {
    pub id: TransitRateId,
    pub label: String,
    pub origin: String,
    pub destination: String,
    pub sector_rate: Option<Decimal>,
    #[serde(default)]
    pub transit_routes: Vec<String>,
    #[serde(default, deserialize_with = "de_lenient_strings")]
    pub transit_prices: Vec<String>,
    /// Precomputed display routes, `"A -> B -> C"` form.
    #[serde(default)]
    pub selected_routes: Vec<String>,
    pub customer_id: Option<CustomerId>,
    pub status: bool,
}

/// Customer registry row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub status: bool,
}

/// Accept both JSON strings and JSON numbers for stored price text.
///
/// The hosted store keeps transit prices in a text column, but older rows
/// and hand-edited data occasionally carry bare numbers.
fn de_lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<serde_json::Value> = Vec::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|v| match v {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transit_rate_accepts_string_prices() {
        let json = r#"{
            "id": 1,
            "label": "FRA-RIX",
            "origin": "FRA",
            "destination": "RIX",
            "sector_rate": 25.0,
            "transit_routes": ["AMS", "ATH"],
            "transit_prices": ["2.00", "5.00"],
            "selected_routes": [],
            "customer_id": null,
            "status": true
        }"#;
        let rate: TransitRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.transit_prices, vec!["2.00", "5.00"]);
    }

    #[test]
    fn test_transit_rate_accepts_numeric_prices() {
        let json = r#"{
            "id": 2,
            "label": "FRA-RIX",
            "origin": "FRA",
            "destination": "RIX",
            "sector_rate": null,
            "transit_prices": [2.5, 5],
            "customer_id": null,
            "status": true
        }"#;
        let rate: TransitRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.transit_prices, vec!["2.5", "5"]);
        assert!(rate.transit_routes.is_empty());
        assert!(rate.selected_routes.is_empty());
    }

    #[test]
    fn test_sector_rate_roundtrip() {
        let rate = SectorRate {
            id: SectorRateId::new(3),
            origin: "FRA".to_string(),
            destination: "RIX".to_string(),
            sector_rate: Decimal::new(300, 2),
            is_active: true,
        };
        let json = serde_json::to_string(&rate).unwrap();
        let back: SectorRate = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sector_rate, rate.sector_rate);
        assert_eq!(back.origin, "FRA");
    }
}
