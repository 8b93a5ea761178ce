//! Public API surface for the Rust backend.
//!
//! This file consolidates the identifier newtypes and re-exports the DTO
//! types produced by the engine. All types derive Serialize/Deserialize for
//! JSON serialization.

pub use crate::routes::alternatives::AlternativeRoute;
pub use crate::routes::breakdown::PricedBreakdown;
pub use crate::routes::breakdown::RecordPrice;
pub use crate::routes::conversion::ConversionOutcome;
pub use crate::routes::conversion::ConversionRequest;
pub use crate::routes::landing::RecordInfo;
pub use crate::routes::segmentation::FlightLabel;
pub use crate::routes::segmentation::RouteLeg;
pub use crate::routes::segmentation::SegmentationView;
pub use crate::routes::segmentation::SegmentedRoute;
pub use crate::routes::transit::RateSelection;
pub use crate::routes::transit::TransitOption;

crate::define_id_type!(i64, CargoRecordId);
crate::define_id_type!(i64, AirportCodeId);
crate::define_id_type!(i64, FlightId);
crate::define_id_type!(i64, SectorRateId);
crate::define_id_type!(i64, TransitRateId);
crate::define_id_type!(i64, CustomerId);
crate::define_id_type!(i64, ManifestId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = CargoRecordId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_serialize_as_plain_integer() {
        let id = SectorRateId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: SectorRateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
