//! Conversion override flow tests.

use rust_decimal::Decimal;

use aco_rust::api::{FlightId, SectorRateId};
use aco_rust::db::repositories::LocalRepository;
use aco_rust::db::repository::RegistryRepository;
use aco_rust::db::services;
use aco_rust::models::{CargoManifest, Flight, NewCargoRecord};
use aco_rust::routes::conversion::{ConversionOutcome, ConversionRequest};

fn request(origin: &str, destination: &str) -> ConversionRequest {
    ConversionRequest {
        origin: origin.to_string(),
        destination: destination.to_string(),
        before_bt_from: None,
        before_bt_to: None,
        after_bt_from: None,
        after_bt_to: None,
        applied_rate: None,
        sector_rate_id: None,
    }
}

async fn repo_with_record(
    inbound: Option<&str>,
    outbound: Option<&str>,
) -> (LocalRepository, aco_rust::api::CargoRecordId) {
    let repo = LocalRepository::new();
    repo.replace_flights(vec![
        Flight {
            id: FlightId::new(1),
            flight_number: "BT234".to_string(),
            origin: "DEFRAX".to_string(),
            destination: "LVRIXX".to_string(),
            is_active: true,
        },
        Flight {
            id: FlightId::new(2),
            flight_number: "BT341".to_string(),
            origin: "LVRIXX".to_string(),
            destination: "LTVNOX".to_string(),
            is_active: true,
        },
    ])
    .await
    .unwrap();

    let manifest = CargoManifest {
        name: "batch".to_string(),
        records: vec![NewCargoRecord {
            origin: "USFRAT".to_string(),
            destination: "USRIXT".to_string(),
            inbound: inbound.map(str::to_string),
            outbound: outbound.map(str::to_string),
        }],
    };
    services::store_manifest(&repo, &manifest, "c1").await.unwrap();
    let id = services::list_records(&repo).await.unwrap()[0].record_id;
    (repo, id)
}

#[tokio::test]
async fn test_equal_pairs_yield_two_distinct_messages() {
    let (repo, id) = repo_with_record(None, None).await;

    let mut req = request("FRA", "FRA");
    req.before_bt_from = Some("RIX".to_string());
    req.before_bt_to = Some("RIX".to_string());

    let outcome = services::convert_record(&repo, id, &req).await.unwrap();
    let errors = match outcome {
        ConversionOutcome::Rejected { errors } => errors,
        ConversionOutcome::Converted { .. } => panic!("expected rejection"),
    };
    assert_eq!(errors.len(), 2);
    assert_ne!(errors[0], errors[1]);

    // State remains unconverted.
    let records = services::list_records(&repo).await.unwrap();
    assert!(!records[0].is_converted);
}

#[tokio::test]
async fn test_same_booked_flight_in_and_out_is_rejected() {
    let (repo, id) = repo_with_record(Some("BT234"), Some("BT234")).await;

    let outcome = services::convert_record(&repo, id, &request("FRA", "VNO"))
        .await
        .unwrap();
    match outcome {
        ConversionOutcome::Rejected { errors } => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("Inbound and outbound"));
        }
        ConversionOutcome::Converted { .. } => panic!("expected rejection"),
    }
}

#[tokio::test]
async fn test_successful_conversion_persists_and_reprices() {
    let (repo, id) = repo_with_record(Some("BT234"), Some("BT341")).await;

    let mut req = request("FRA", "VNO");
    req.before_bt_from = Some("FRA".to_string());
    req.before_bt_to = Some("RIX".to_string());
    req.applied_rate = Some(Decimal::new(750, 2));
    req.sector_rate_id = Some(SectorRateId::new(3));

    let outcome = services::convert_record(&repo, id, &req).await.unwrap();
    let record = match outcome {
        ConversionOutcome::Converted { record } => record,
        ConversionOutcome::Rejected { errors } => panic!("unexpected rejection: {:?}", errors),
    };
    assert!(record.is_converted);
    assert_eq!(record.converted_origin.as_deref(), Some("FRA"));
    assert_eq!(record.converted_destination.as_deref(), Some("VNO"));
    assert_eq!(record.applied_rate, Some(Decimal::new(750, 2)));

    // The pipeline is bypassed for the converted record.
    let price = services::price_record(&repo, id).await.unwrap();
    assert!(price.converted);
    assert_eq!(price.breakdown.total_sum, Decimal::new(750, 2));
    assert!(price.breakdown.rates.is_empty());

    // Display shows the override legs, not recomputed ones.
    let view = services::segment_record(&repo, id).await.unwrap();
    assert!(view.converted);
    assert_eq!(view.before_bt.as_ref().unwrap().to_string(), "FRA → RIX");
    assert_eq!(view.inbound, None);
    assert_eq!(view.outbound, None);
}

#[tokio::test]
async fn test_converted_record_is_reeditable() {
    let (repo, id) = repo_with_record(None, None).await;

    let first = services::convert_record(&repo, id, &request("FRA", "RIX"))
        .await
        .unwrap();
    assert!(matches!(first, ConversionOutcome::Converted { .. }));

    let second = services::convert_record(&repo, id, &request("FRA", "IST"))
        .await
        .unwrap();
    let record = match second {
        ConversionOutcome::Converted { record } => record,
        ConversionOutcome::Rejected { errors } => panic!("unexpected rejection: {:?}", errors),
    };
    assert_eq!(record.converted_destination.as_deref(), Some("IST"));
}

#[tokio::test]
async fn test_raw_codes_accepted_in_override_form() {
    // The form may carry raw codes; they are canonicalized before the
    // equality check and before persistence.
    let (repo, id) = repo_with_record(None, None).await;

    let outcome = services::convert_record(&repo, id, &request("USFRAT", "FRA"))
        .await
        .unwrap();
    match outcome {
        ConversionOutcome::Rejected { errors } => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("Origin and destination"));
        }
        ConversionOutcome::Converted { .. } => panic!("expected rejection"),
    }
}
