//! Conversion override validation.

use crate::models::{CargoRecord, ConversionFields, Flight};
use crate::routes::conversion::ConversionRequest;

use super::airport_codes::normalize_airport_code;
use super::flight_resolver::flight_label;

/// Validate a conversion override against its record.
///
/// The four checks are peers: every failing check contributes its own
/// message and none suppresses the others. An empty result authorizes the
/// transition to converted. The optional leg checks only fire when both
/// operands were entered; the flight check compares the rendered labels of
/// the record's booked flights, resolved or not.
pub fn validate_conversion(
    request: &ConversionRequest,
    record: &CargoRecord,
    flights: &[Flight],
) -> Vec<String> {
    let mut errors = Vec::new();

    if normalize_airport_code(&request.origin) == normalize_airport_code(&request.destination) {
        errors.push("Origin and destination cannot be the same.".to_string());
    }

    if let (Some(from), Some(to)) = (&request.before_bt_from, &request.before_bt_to) {
        if from == to {
            errors.push("Before BT from and to cannot be the same.".to_string());
        }
    }

    if let (Some(inbound), Some(outbound)) = (&record.inbound, &record.outbound) {
        let inbound_label = flight_label(inbound, flights).to_string();
        let outbound_label = flight_label(outbound, flights).to_string();
        if inbound_label == outbound_label {
            errors.push("Inbound and outbound flights cannot be the same.".to_string());
        }
    }

    if let (Some(from), Some(to)) = (&request.after_bt_from, &request.after_bt_to) {
        if from == to {
            errors.push("After BT from and to cannot be the same.".to_string());
        }
    }

    errors
}

/// Build the persisted override fields from a validated request.
///
/// Origin and destination are stored in canonical form.
pub fn to_fields(request: &ConversionRequest) -> ConversionFields {
    ConversionFields {
        converted_origin: normalize_airport_code(&request.origin),
        converted_destination: normalize_airport_code(&request.destination),
        before_bt_from: request.before_bt_from.clone(),
        before_bt_to: request.before_bt_to.clone(),
        after_bt_from: request.after_bt_from.clone(),
        after_bt_to: request.after_bt_to.clone(),
        applied_rate: request.applied_rate,
        sector_rate_id: request.sector_rate_id,
    }
}
