use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::SectorRateId;
use crate::models::CargoRecord;

// =========================================================
// Conversion override types
// =========================================================

/// A user-submitted override replacing the derived segmentation and price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub before_bt_from: Option<String>,
    #[serde(default)]
    pub before_bt_to: Option<String>,
    #[serde(default)]
    pub after_bt_from: Option<String>,
    #[serde(default)]
    pub after_bt_to: Option<String>,
    #[serde(default)]
    pub applied_rate: Option<Decimal>,
    #[serde(default)]
    pub sector_rate_id: Option<SectorRateId>,
}

/// Result of a conversion attempt.
///
/// Validation failures are collected, human-readable and non-fatal; the
/// record stays unconverted until the form is corrected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome {
    Converted { record: CargoRecord },
    Rejected { errors: Vec<String> },
}
