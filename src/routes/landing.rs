use serde::{Deserialize, Serialize};

use crate::api::CargoRecordId;

// =========================================================
// Record listing types
// =========================================================

/// Lightweight record listing row for the console's landing table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordInfo {
    pub record_id: CargoRecordId,
    /// Canonical origin code.
    pub origin: String,
    /// Canonical destination code.
    pub destination: String,
    pub inbound: Option<String>,
    pub outbound: Option<String>,
    pub is_converted: bool,
}
