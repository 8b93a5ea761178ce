//! High-level business logic over any repository implementation.
//!
//! These functions fetch registry snapshots, run the pure engine from
//! [`crate::services`], and persist the only writes the engine owns. Use
//! them instead of talking to a repository directly.

use rust_decimal::Decimal;

use crate::api::{CargoRecordId, TransitRateId};
use crate::models::{CargoManifest, CargoRecord, Flight, ManifestInfo};
use crate::routes::breakdown::{PricedBreakdown, RecordPrice};
use crate::routes::conversion::{ConversionOutcome, ConversionRequest};
use crate::routes::landing::RecordInfo;
use crate::routes::segmentation::{RouteLeg, SegmentationView};
use crate::routes::transit::{RateSelection, TransitOption};
use crate::routes::alternatives::AlternativeRoute;
use crate::services;

use super::repository::{
    FullRepository, RecordRepository, RegistryRepository, RepositoryResult,
};

/// Check that the repository is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Store a parsed manifest, creating one record per row.
pub async fn store_manifest(
    repo: &dyn FullRepository,
    manifest: &CargoManifest,
    checksum: &str,
) -> RepositoryResult<ManifestInfo> {
    repo.store_manifest(manifest, checksum).await
}

/// List stored manifests, newest first.
pub async fn list_manifests(repo: &dyn FullRepository) -> RepositoryResult<Vec<ManifestInfo>> {
    repo.list_manifests().await
}

/// List all records with their presentation origin/destination.
///
/// Converted records show the persisted override codes; the rest show the
/// canonical form of the uploaded raw codes.
pub async fn list_records(repo: &dyn FullRepository) -> RepositoryResult<Vec<RecordInfo>> {
    let records = repo.list_records().await?;
    Ok(records.iter().map(record_info).collect())
}

fn record_info(record: &CargoRecord) -> RecordInfo {
    let (origin, destination) = display_endpoints(record);
    RecordInfo {
        record_id: record.id,
        origin,
        destination,
        inbound: record.inbound.clone(),
        outbound: record.outbound.clone(),
        is_converted: record.is_converted,
    }
}

fn display_endpoints(record: &CargoRecord) -> (String, String) {
    if record.is_converted {
        (
            record
                .converted_origin
                .clone()
                .unwrap_or_else(|| services::normalize_airport_code(&record.origin)),
            record
                .converted_destination
                .clone()
                .unwrap_or_else(|| services::normalize_airport_code(&record.destination)),
        )
    } else {
        (
            services::normalize_airport_code(&record.origin),
            services::normalize_airport_code(&record.destination),
        )
    }
}

async fn active_flights(repo: &dyn FullRepository) -> RepositoryResult<Vec<Flight>> {
    let flights = repo.fetch_flights().await?;
    Ok(flights.into_iter().filter(|f| f.is_active).collect())
}

/// Build the segmentation view for a record.
///
/// For converted records the override fields take presentation precedence:
/// the recomputed legs and flight labels are suppressed and the persisted
/// before/after connections are shown instead.
pub async fn segment_record(
    repo: &dyn FullRepository,
    id: CargoRecordId,
) -> RepositoryResult<SegmentationView> {
    let record = repo.fetch_record(id).await?;

    if record.is_converted {
        let (origin, destination) = display_endpoints(&record);
        return Ok(SegmentationView {
            record_id: record.id,
            origin,
            destination,
            before_bt: override_leg(&record.before_bt_from, &record.before_bt_to),
            inbound: None,
            outbound: None,
            after_bt: override_leg(&record.after_bt_from, &record.after_bt_to),
            inbound_flight: None,
            outbound_flight: None,
            converted: true,
        });
    }

    let flights = active_flights(repo).await?;
    let segmented = services::segment(
        &record.origin,
        &record.destination,
        record.inbound.as_deref(),
        record.outbound.as_deref(),
        &flights,
    );

    Ok(SegmentationView {
        record_id: record.id,
        origin: segmented.origin.clone(),
        destination: segmented.destination.clone(),
        before_bt: segmented.before_bt,
        inbound: segmented.inbound,
        outbound: segmented.outbound,
        after_bt: segmented.after_bt,
        inbound_flight: record
            .inbound
            .as_deref()
            .map(|number| services::flight_label(number, &flights)),
        outbound_flight: record
            .outbound
            .as_deref()
            .map(|number| services::flight_label(number, &flights)),
        converted: false,
    })
}

fn override_leg(from: &Option<String>, to: &Option<String>) -> Option<RouteLeg> {
    match (from, to) {
        (Some(from), Some(to)) => Some(RouteLeg::new(from.clone(), to.clone())),
        _ => None,
    }
}

/// Price a record.
///
/// Converted records bypass the matcher entirely: their price is whatever
/// applied rate was chosen at conversion time, with an empty rate list.
pub async fn price_record(
    repo: &dyn FullRepository,
    id: CargoRecordId,
) -> RepositoryResult<RecordPrice> {
    let record = repo.fetch_record(id).await?;

    if record.is_converted {
        let (origin, destination) = display_endpoints(&record);
        return Ok(RecordPrice {
            record_id: record.id,
            converted: true,
            breakdown: PricedBreakdown {
                route: format!("{} → {}", origin, destination),
                total_sum: record.applied_rate.unwrap_or(Decimal::ZERO),
                rates: Vec::new(),
            },
        });
    }

    let flights = active_flights(repo).await?;
    let rates = repo.fetch_sector_rates().await?;
    let segmented = services::segment(
        &record.origin,
        &record.destination,
        record.inbound.as_deref(),
        record.outbound.as_deref(),
        &flights,
    );

    Ok(RecordPrice {
        record_id: record.id,
        converted: false,
        breakdown: services::match_rates(&segmented, &rates),
    })
}

/// Find the priced segments sharing an endpoint with a direct pair.
///
/// Inputs may be raw location codes; they are normalized before lookup.
pub async fn route_alternatives(
    repo: &dyn FullRepository,
    origin: &str,
    destination: &str,
) -> RepositoryResult<Vec<AlternativeRoute>> {
    let rates = repo.fetch_sector_rates().await?;
    let origin = services::normalize_airport_code(origin);
    let destination = services::normalize_airport_code(destination);
    Ok(services::find_alternatives(&origin, &destination, &rates))
}

/// Enumerate the selectable pricing variants of a transit rate.
pub async fn transit_options(
    repo: &dyn FullRepository,
    id: TransitRateId,
) -> RepositoryResult<Vec<TransitOption>> {
    let rate = repo.fetch_transit_rate(id).await?;
    let customers = repo.fetch_customers().await?;
    Ok(services::generate_transit_options(&rate, &customers))
}

/// Attempt a conversion override on a record.
///
/// All validation checks run before anything is persisted; a rejected
/// conversion leaves the record untouched and returns the collected
/// messages.
pub async fn convert_record(
    repo: &dyn FullRepository,
    id: CargoRecordId,
    request: &ConversionRequest,
) -> RepositoryResult<ConversionOutcome> {
    let record = repo.fetch_record(id).await?;
    let flights = active_flights(repo).await?;

    let errors = services::validate_conversion(request, &record, &flights);
    if !errors.is_empty() {
        return Ok(ConversionOutcome::Rejected { errors });
    }

    let fields = services::conversion::to_fields(request);
    let record = repo.apply_conversion(id, &fields).await?;
    Ok(ConversionOutcome::Converted { record })
}

/// Persist a transit rate selection onto a record.
///
/// The referenced rate must exist; when the form leaves the customer blank
/// the rate's own customer is used.
pub async fn select_rate(
    repo: &dyn FullRepository,
    id: CargoRecordId,
    selection: &RateSelection,
) -> RepositoryResult<CargoRecord> {
    let rate = repo.fetch_transit_rate(selection.transit_rate_id).await?;
    let selection = RateSelection {
        transit_rate_id: selection.transit_rate_id,
        transit_route: selection.transit_route.clone(),
        customer_id: selection.customer_id.or(rate.customer_id),
    };
    repo.apply_rate_selection(id, &selection).await
}
