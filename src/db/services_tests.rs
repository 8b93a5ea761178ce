use rust_decimal::Decimal;

use crate::api::{
    CargoRecordId, CustomerId, FlightId, SectorRateId, TransitRateId,
};
use crate::db::repositories::LocalRepository;
use crate::db::repository::{FullRepository, RegistryRepository, RepositoryError};
use crate::db::services;
use crate::models::{
    CargoManifest, Customer, Flight, NewCargoRecord, SectorRate, TransitRate,
};
use crate::routes::conversion::{ConversionOutcome, ConversionRequest};
use crate::routes::segmentation::RouteLeg;
use crate::routes::transit::RateSelection;

fn flight(id: i64, number: &str, origin: &str, destination: &str) -> Flight {
    Flight {
        id: FlightId::new(id),
        flight_number: number.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        is_active: true,
    }
}

fn sector_rate(id: i64, origin: &str, destination: &str, cents: i64) -> SectorRate {
    SectorRate {
        id: SectorRateId::new(id),
        origin: origin.to_string(),
        destination: destination.to_string(),
        sector_rate: Decimal::new(cents, 2),
        is_active: true,
    }
}

fn manifest(records: Vec<NewCargoRecord>) -> CargoManifest {
    CargoManifest {
        name: "test batch".to_string(),
        records,
    }
}

fn record_row(
    origin: &str,
    destination: &str,
    inbound: Option<&str>,
    outbound: Option<&str>,
) -> NewCargoRecord {
    NewCargoRecord {
        origin: origin.to_string(),
        destination: destination.to_string(),
        inbound: inbound.map(str::to_string),
        outbound: outbound.map(str::to_string),
    }
}

async fn seeded_repo() -> LocalRepository {
    let repo = LocalRepository::new();
    repo.replace_flights(vec![
        flight(1, "BT234", "DEFRAX", "LVRIXX"),
        flight(2, "BT341", "LVRIXX", "LTVNOX"),
    ])
    .await
    .unwrap();
    repo.replace_sector_rates(vec![
        sector_rate(1, "FRA", "RIX", 300),
        sector_rate(2, "FRA", "IST", 400),
        sector_rate(3, "RMO", "RIX", 250),
    ])
    .await
    .unwrap();
    repo
}

async fn upload_single(
    repo: &dyn FullRepository,
    row: NewCargoRecord,
) -> CargoRecordId {
    services::store_manifest(repo, &manifest(vec![row]), "checksum-1")
        .await
        .unwrap();
    services::list_records(repo).await.unwrap()[0].record_id
}

#[tokio::test]
async fn test_segment_record_resolves_inbound_leg() {
    let repo = seeded_repo().await;
    let id = upload_single(&repo, record_row("USFRAT", "USRIXT", Some("BT234"), None)).await;

    let view = services::segment_record(&repo, id).await.unwrap();
    assert_eq!(view.origin, "FRA");
    assert_eq!(view.destination, "RIX");
    assert_eq!(view.before_bt, None);
    assert_eq!(view.inbound, Some(RouteLeg::new("FRA", "RIX")));
    assert_eq!(view.after_bt, None);
    assert!(!view.converted);
    let label = view.inbound_flight.unwrap();
    assert_eq!(label.to_string(), "BT234, FRA → RIX");
}

#[tokio::test]
async fn test_price_record_single_rate() {
    let repo = seeded_repo().await;
    let id = upload_single(&repo, record_row("USFRAT", "USRIXT", Some("BT234"), None)).await;

    let price = services::price_record(&repo, id).await.unwrap();
    assert!(!price.converted);
    assert_eq!(price.breakdown.route, "FRA → RIX");
    assert_eq!(price.breakdown.total_sum, Decimal::new(300, 2));
    assert_eq!(price.breakdown.rates.len(), 1);
}

#[tokio::test]
async fn test_price_record_unresolved_flight_is_empty() {
    let repo = seeded_repo().await;
    let id = upload_single(&repo, record_row("USFRAT", "USRIXT", Some("BT999"), None)).await;

    let price = services::price_record(&repo, id).await.unwrap();
    assert_eq!(price.breakdown.total_sum, Decimal::ZERO);
    assert!(price.breakdown.rates.is_empty());
}

#[tokio::test]
async fn test_price_record_rerun_is_deterministic() {
    let repo = seeded_repo().await;
    let id = upload_single(&repo, record_row("USVNOT", "USRIXT", Some("BT234"), None)).await;

    let first = services::price_record(&repo, id).await.unwrap();
    let second = services::price_record(&repo, id).await.unwrap();
    assert_eq!(first.breakdown.total_sum, second.breakdown.total_sum);
    let first_ids: Vec<i64> = first.breakdown.rates.iter().map(|r| r.id.value()).collect();
    let second_ids: Vec<i64> = second.breakdown.rates.iter().map(|r| r.id.value()).collect();
    assert_eq!(first_ids, second_ids);
}

#[tokio::test]
async fn test_registry_change_is_picked_up_on_rerun() {
    let repo = seeded_repo().await;
    let id = upload_single(&repo, record_row("USFRAT", "USRIXT", Some("BT234"), None)).await;

    let before = services::price_record(&repo, id).await.unwrap();
    assert_eq!(before.breakdown.total_sum, Decimal::new(300, 2));

    // An emptied rate registry empties the breakdown on the next full
    // run; there is no incremental state to invalidate.
    repo.replace_sector_rates(vec![]).await.unwrap();
    let after = services::price_record(&repo, id).await.unwrap();
    assert_eq!(after.breakdown.total_sum, Decimal::ZERO);
    assert!(after.breakdown.rates.is_empty());
}

#[tokio::test]
async fn test_convert_record_rejected_keeps_record_unconverted() {
    let repo = seeded_repo().await;
    let id = upload_single(&repo, record_row("USFRAT", "USRIXT", Some("BT234"), None)).await;

    let request = ConversionRequest {
        origin: "FRA".to_string(),
        destination: "FRA".to_string(),
        before_bt_from: Some("RIX".to_string()),
        before_bt_to: Some("RIX".to_string()),
        after_bt_from: None,
        after_bt_to: None,
        applied_rate: None,
        sector_rate_id: None,
    };

    let outcome = services::convert_record(&repo, id, &request).await.unwrap();
    match outcome {
        ConversionOutcome::Rejected { errors } => assert_eq!(errors.len(), 2),
        ConversionOutcome::Converted { .. } => panic!("expected rejection"),
    }

    let records = services::list_records(&repo).await.unwrap();
    assert!(!records[0].is_converted);
}

#[tokio::test]
async fn test_convert_record_then_price_bypasses_matcher() {
    let repo = seeded_repo().await;
    let id = upload_single(&repo, record_row("USFRAT", "USRIXT", Some("BT234"), None)).await;

    let request = ConversionRequest {
        origin: "FRA".to_string(),
        destination: "IST".to_string(),
        before_bt_from: None,
        before_bt_to: None,
        after_bt_from: None,
        after_bt_to: None,
        applied_rate: Some(Decimal::new(450, 2)),
        sector_rate_id: Some(SectorRateId::new(2)),
    };

    let outcome = services::convert_record(&repo, id, &request).await.unwrap();
    assert!(matches!(outcome, ConversionOutcome::Converted { .. }));

    let price = services::price_record(&repo, id).await.unwrap();
    assert!(price.converted);
    assert_eq!(price.breakdown.route, "FRA → IST");
    assert_eq!(price.breakdown.total_sum, Decimal::new(450, 2));
    assert!(price.breakdown.rates.is_empty());

    // Segmentation display prefers the override and suppresses flight legs.
    let view = services::segment_record(&repo, id).await.unwrap();
    assert!(view.converted);
    assert_eq!(view.origin, "FRA");
    assert_eq!(view.destination, "IST");
    assert_eq!(view.inbound, None);
    assert!(view.inbound_flight.is_none());
}

#[tokio::test]
async fn test_route_alternatives_normalizes_inputs() {
    let repo = seeded_repo().await;

    let alternatives = services::route_alternatives(&repo, "USFRAT", "USRIXT")
        .await
        .unwrap();
    let routes: Vec<(&str, bool)> = alternatives
        .iter()
        .map(|a| (a.route.as_str(), a.is_direct))
        .collect();
    assert_eq!(
        routes,
        vec![
            ("FRA → RIX", true),
            ("RMO → RIX", false),
            ("FRA → IST", false),
        ]
    );
}

#[tokio::test]
async fn test_transit_options_unknown_rate_is_not_found() {
    let repo = seeded_repo().await;
    let err = services::transit_options(&repo, TransitRateId::new(99))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_select_rate_defaults_customer_from_rate() {
    let repo = seeded_repo().await;
    repo.replace_transit_rates(vec![TransitRate {
        id: TransitRateId::new(4),
        label: "FRA-RIX".to_string(),
        origin: "FRA".to_string(),
        destination: "RIX".to_string(),
        sector_rate: Some(Decimal::new(2500, 2)),
        transit_routes: vec!["AMS".to_string()],
        transit_prices: vec!["2.00".to_string()],
        selected_routes: vec!["FRA -> AMS -> RIX".to_string()],
        customer_id: Some(CustomerId::new(11)),
        status: true,
    }])
    .await
    .unwrap();
    let id = upload_single(&repo, record_row("USFRAT", "USRIXT", None, None)).await;

    let updated = services::select_rate(
        &repo,
        id,
        &RateSelection {
            transit_rate_id: TransitRateId::new(4),
            transit_route: Some("FRA -> AMS -> RIX".to_string()),
            customer_id: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.transit_rate_id, Some(TransitRateId::new(4)));
    assert_eq!(updated.customer_id, Some(CustomerId::new(11)));
    // Selection never marks the record converted.
    assert!(!updated.is_converted);
}

#[tokio::test]
async fn test_store_manifest_duplicate_checksum() {
    let repo = seeded_repo().await;
    let m = manifest(vec![record_row("USFRAT", "USRIXT", None, None)]);
    services::store_manifest(&repo, &m, "same").await.unwrap();

    let err = services::store_manifest(&repo, &m, "same").await.unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
}

#[tokio::test]
async fn test_health_check() {
    let repo = LocalRepository::new();
    assert!(services::health_check(&repo).await.unwrap());
}

#[tokio::test]
async fn test_customer_seeding_unused_by_v1_pricing() {
    // Customers only affect transit option display; v1 pricing ignores them.
    let repo = seeded_repo().await;
    repo.replace_customers(vec![Customer {
        id: CustomerId::new(1),
        name: "Baltic Freight".to_string(),
        status: true,
    }])
    .await
    .unwrap();
    let id = upload_single(&repo, record_row("USFRAT", "USRIXT", Some("BT234"), None)).await;

    let price = services::price_record(&repo, id).await.unwrap();
    assert_eq!(price.breakdown.total_sum, Decimal::new(300, 2));
}
