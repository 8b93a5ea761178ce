use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =========================================================
// Alternative route types
// =========================================================

/// A priced segment sharing an endpoint with a direct route, for
/// informational display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeRoute {
    /// Rendered route, `"<origin> → <destination>"`.
    pub route: String,
    pub rate: Decimal,
    pub is_direct: bool,
}
