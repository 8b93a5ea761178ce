//! Cargo records awaiting pricing.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::{CargoRecordId, CustomerId, ManifestId, SectorRateId, TransitRateId};

/// A row awaiting pricing, created by a manifest upload.
///
/// The engine never deletes records; the only mutations are the conversion
/// override (which fills the `converted_*`/`before_bt_*`/`after_bt_*`
/// fields and flips `is_converted`) and the transit rate selection (which
/// fills `sector_rate_id`/`transit_route`/`customer_id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CargoRecord {
    pub id: CargoRecordId,
    pub manifest_id: ManifestId,
    /// Raw origin location code as uploaded.
    pub origin: String,
    /// Raw destination location code as uploaded.
    pub destination: String,
    /// Booked inbound flight number, if any.
    pub inbound: Option<String>,
    /// Booked outbound flight number, if any.
    pub outbound: Option<String>,
    pub is_converted: bool,
    pub converted_origin: Option<String>,
    pub converted_destination: Option<String>,
    pub before_bt_from: Option<String>,
    pub before_bt_to: Option<String>,
    pub after_bt_from: Option<String>,
    pub after_bt_to: Option<String>,
    pub applied_rate: Option<Decimal>,
    pub sector_rate_id: Option<SectorRateId>,
    pub transit_rate_id: Option<TransitRateId>,
    pub transit_route: Option<String>,
    pub customer_id: Option<CustomerId>,
    pub uploaded_at: DateTime<Utc>,
}

/// The override values persisted by a successful conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionFields {
    pub converted_origin: String,
    pub converted_destination: String,
    pub before_bt_from: Option<String>,
    pub before_bt_to: Option<String>,
    pub after_bt_from: Option<String>,
    pub after_bt_to: Option<String>,
    pub applied_rate: Option<Decimal>,
    pub sector_rate_id: Option<SectorRateId>,
}

impl CargoRecord {
    /// Apply a validated conversion override to this record.
    pub fn apply_conversion(&mut self, fields: &ConversionFields) {
        self.is_converted = true;
        self.converted_origin = Some(fields.converted_origin.clone());
        self.converted_destination = Some(fields.converted_destination.clone());
        self.before_bt_from = fields.before_bt_from.clone();
        self.before_bt_to = fields.before_bt_to.clone();
        self.after_bt_from = fields.after_bt_from.clone();
        self.after_bt_to = fields.after_bt_to.clone();
        self.applied_rate = fields.applied_rate;
        self.sector_rate_id = fields.sector_rate_id;
    }
}
