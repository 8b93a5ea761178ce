//! In-memory repository implementation.
//!
//! Backs unit tests and local development. State is a single
//! `parking_lot::RwLock`; reads hand out cloned snapshots so the engine
//! always works over stable values.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::api::{CargoRecordId, ManifestId, TransitRateId};
use crate::db::repository::error::{ErrorContext, RepositoryError, RepositoryResult};
use crate::db::repository::records::RecordRepository;
use crate::db::repository::registries::RegistryRepository;
use crate::models::{
    AirportCode, CargoManifest, CargoRecord, ConversionFields, Customer, Flight, ManifestInfo,
    SectorRate, TransitRate,
};
use crate::routes::transit::RateSelection;

#[derive(Default)]
struct LocalState {
    airport_codes: Vec<AirportCode>,
    flights: Vec<Flight>,
    sector_rates: Vec<SectorRate>,
    transit_rates: Vec<TransitRate>,
    customers: Vec<Customer>,
    manifests: Vec<ManifestInfo>,
    records: Vec<CargoRecord>,
    next_id: i64,
}

impl LocalState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory repository.
pub struct LocalRepository {
    state: RwLock<LocalState>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LocalState::default()),
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistryRepository for LocalRepository {
    async fn fetch_airport_codes(&self) -> RepositoryResult<Vec<AirportCode>> {
        Ok(self.state.read().airport_codes.clone())
    }

    async fn fetch_flights(&self) -> RepositoryResult<Vec<Flight>> {
        Ok(self.state.read().flights.clone())
    }

    async fn fetch_sector_rates(&self) -> RepositoryResult<Vec<SectorRate>> {
        Ok(self.state.read().sector_rates.clone())
    }

    async fn fetch_transit_rates(&self) -> RepositoryResult<Vec<TransitRate>> {
        Ok(self.state.read().transit_rates.clone())
    }

    async fn fetch_transit_rate(&self, id: TransitRateId) -> RepositoryResult<TransitRate> {
        self.state
            .read()
            .transit_rates
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Transit rate {} not found", id),
                    ErrorContext::new("fetch_transit_rate")
                        .with_entity("transit_rate")
                        .with_entity_id(id),
                )
            })
    }

    async fn fetch_customers(&self) -> RepositoryResult<Vec<Customer>> {
        Ok(self.state.read().customers.clone())
    }

    async fn replace_airport_codes(&self, rows: Vec<AirportCode>) -> RepositoryResult<usize> {
        let mut state = self.state.write();
        state.airport_codes = rows;
        Ok(state.airport_codes.len())
    }

    async fn replace_flights(&self, rows: Vec<Flight>) -> RepositoryResult<usize> {
        let mut state = self.state.write();
        state.flights = rows;
        Ok(state.flights.len())
    }

    async fn replace_sector_rates(&self, rows: Vec<SectorRate>) -> RepositoryResult<usize> {
        let mut state = self.state.write();
        state.sector_rates = rows;
        Ok(state.sector_rates.len())
    }

    async fn replace_transit_rates(&self, rows: Vec<TransitRate>) -> RepositoryResult<usize> {
        let mut state = self.state.write();
        state.transit_rates = rows;
        Ok(state.transit_rates.len())
    }

    async fn replace_customers(&self, rows: Vec<Customer>) -> RepositoryResult<usize> {
        let mut state = self.state.write();
        state.customers = rows;
        Ok(state.customers.len())
    }
}

#[async_trait]
impl RecordRepository for LocalRepository {
    async fn store_manifest(
        &self,
        manifest: &CargoManifest,
        checksum: &str,
    ) -> RepositoryResult<ManifestInfo> {
        let mut state = self.state.write();

        if state.manifests.iter().any(|m| m.checksum == checksum) {
            return Err(RepositoryError::validation_with_context(
                "A manifest with this checksum has already been uploaded",
                ErrorContext::new("store_manifest")
                    .with_entity("manifest")
                    .with_details(format!("checksum={}", checksum)),
            ));
        }

        let manifest_id = ManifestId::new(state.next_id());
        let uploaded_at = Utc::now();

        for record in &manifest.records {
            let record_id = CargoRecordId::new(state.next_id());
            state.records.push(CargoRecord {
                id: record_id,
                manifest_id,
                origin: record.origin.clone(),
                destination: record.destination.clone(),
                inbound: record.inbound.clone(),
                outbound: record.outbound.clone(),
                is_converted: false,
                converted_origin: None,
                converted_destination: None,
                before_bt_from: None,
                before_bt_to: None,
                after_bt_from: None,
                after_bt_to: None,
                applied_rate: None,
                sector_rate_id: None,
                transit_rate_id: None,
                transit_route: None,
                customer_id: None,
                uploaded_at,
            });
        }

        let info = ManifestInfo {
            id: manifest_id,
            name: manifest.name.clone(),
            checksum: checksum.to_string(),
            record_count: manifest.records.len(),
            uploaded_at,
        };
        state.manifests.push(info.clone());

        log::info!(
            "Stored manifest {} with {} records",
            manifest_id,
            info.record_count
        );
        Ok(info)
    }

    async fn list_manifests(&self) -> RepositoryResult<Vec<ManifestInfo>> {
        let mut manifests = self.state.read().manifests.clone();
        manifests.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(manifests)
    }

    async fn list_records(&self) -> RepositoryResult<Vec<CargoRecord>> {
        Ok(self.state.read().records.clone())
    }

    async fn fetch_record(&self, id: CargoRecordId) -> RepositoryResult<CargoRecord> {
        self.state
            .read()
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| record_not_found(id, "fetch_record"))
    }

    async fn apply_conversion(
        &self,
        id: CargoRecordId,
        fields: &ConversionFields,
    ) -> RepositoryResult<CargoRecord> {
        let mut state = self.state.write();
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| record_not_found(id, "apply_conversion"))?;
        record.apply_conversion(fields);
        Ok(record.clone())
    }

    async fn apply_rate_selection(
        &self,
        id: CargoRecordId,
        selection: &RateSelection,
    ) -> RepositoryResult<CargoRecord> {
        let mut state = self.state.write();
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| record_not_found(id, "apply_rate_selection"))?;
        record.transit_rate_id = Some(selection.transit_rate_id);
        record.transit_route = selection.transit_route.clone();
        record.customer_id = selection.customer_id;
        Ok(record.clone())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

fn record_not_found(id: CargoRecordId, operation: &str) -> RepositoryError {
    RepositoryError::not_found_with_context(
        format!("Cargo record {} not found", id),
        ErrorContext::new(operation)
            .with_entity("cargo_record")
            .with_entity_id(id),
    )
}
