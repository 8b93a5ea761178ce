use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::{CustomerId, TransitRateId};

// =========================================================
// Transit pricing types
// =========================================================

/// One selectable pricing variant of a transit rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitOption {
    pub transit_rate_id: TransitRateId,
    /// The selected route chain (`"A -> B -> C"`), absent for the base
    /// option that uses only the pair's own rate.
    pub transit_route: Option<String>,
    pub display_text: String,
    pub total_price: Decimal,
}

/// The fields persisted onto a record when the user picks an option.
///
/// Selection never mutates the transit rate row itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSelection {
    pub transit_rate_id: TransitRateId,
    #[serde(default)]
    pub transit_route: Option<String>,
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transit_option_serialize() {
        let option = TransitOption {
            transit_rate_id: TransitRateId::new(4),
            transit_route: Some("FRA -> AMS -> RIX".to_string()),
            display_text: "€27.00 - FRA-RIX - FRA -> AMS -> RIX - No Customer".to_string(),
            total_price: Decimal::new(2700, 2),
        };
        let json = serde_json::to_string(&option).unwrap();
        let back: TransitOption = serde_json::from_str(&json).unwrap();
        assert_eq!(back, option);
    }

    #[test]
    fn test_rate_selection_defaults() {
        let selection: RateSelection = serde_json::from_str(r#"{"transit_rate_id": 4}"#).unwrap();
        assert_eq!(selection.transit_rate_id, TransitRateId::new(4));
        assert_eq!(selection.transit_route, None);
        assert_eq!(selection.customer_id, None);
    }
}
