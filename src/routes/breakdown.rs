use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SectorRate;

// =========================================================
// Priced breakdown types
// =========================================================

/// The deduplicated set of matched sector rates and their sum for a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricedBreakdown {
    /// Record-level route, `"<origin> → <destination>"`.
    pub route: String,
    pub total_sum: Decimal,
    pub rates: Vec<SectorRate>,
}

impl PricedBreakdown {
    /// An empty breakdown for a route with no matching rates.
    pub fn empty(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            total_sum: Decimal::ZERO,
            rates: Vec::new(),
        }
    }
}

/// Breakdown response for a record, marking whether the automatic pipeline
/// was bypassed by a conversion override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPrice {
    pub record_id: crate::api::CargoRecordId,
    pub converted: bool,
    pub breakdown: PricedBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_breakdown() {
        let b = PricedBreakdown::empty("FRA → RIX");
        assert_eq!(b.route, "FRA → RIX");
        assert_eq!(b.total_sum, Decimal::ZERO);
        assert!(b.rates.is_empty());
    }

    #[test]
    fn test_breakdown_serialize() {
        let b = PricedBreakdown::empty("FRA → RIX");
        let json = serde_json::to_string(&b).unwrap();
        assert!(json.contains("FRA → RIX"));
        let back: PricedBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_sum, Decimal::ZERO);
    }
}
