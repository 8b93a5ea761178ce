//! Registry repository trait for read-only pricing inputs.
//!
//! The engine consumes snapshots of the airport code, flight, sector rate,
//! transit rate and customer registries. Replacement is wholesale: the
//! console's data layer pushes a fresh snapshot whenever a registry
//! changes, and the pipeline re-runs over the new state.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::TransitRateId;
use crate::models::{AirportCode, Customer, Flight, SectorRate, TransitRate};

/// Repository trait for registry snapshots.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait RegistryRepository: Send + Sync {
    // ==================== Snapshot Reads ====================

    /// Fetch all airport code rows.
    async fn fetch_airport_codes(&self) -> RepositoryResult<Vec<AirportCode>>;

    /// Fetch all flight rows.
    async fn fetch_flights(&self) -> RepositoryResult<Vec<Flight>>;

    /// Fetch all sector rate rows.
    async fn fetch_sector_rates(&self) -> RepositoryResult<Vec<SectorRate>>;

    /// Fetch all transit rate rows.
    async fn fetch_transit_rates(&self) -> RepositoryResult<Vec<TransitRate>>;

    /// Fetch a single transit rate row.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` if the id is unknown
    async fn fetch_transit_rate(&self, id: TransitRateId) -> RepositoryResult<TransitRate>;

    /// Fetch all customer rows.
    async fn fetch_customers(&self) -> RepositoryResult<Vec<Customer>>;

    // ==================== Snapshot Replacement ====================

    /// Replace the airport code registry. Returns the new row count.
    async fn replace_airport_codes(&self, rows: Vec<AirportCode>) -> RepositoryResult<usize>;

    /// Replace the flight registry. Returns the new row count.
    async fn replace_flights(&self, rows: Vec<Flight>) -> RepositoryResult<usize>;

    /// Replace the sector rate registry. Returns the new row count.
    async fn replace_sector_rates(&self, rows: Vec<SectorRate>) -> RepositoryResult<usize>;

    /// Replace the transit rate registry. Returns the new row count.
    async fn replace_transit_rates(&self, rows: Vec<TransitRate>) -> RepositoryResult<usize>;

    /// Replace the customer registry. Returns the new row count.
    async fn replace_customers(&self, rows: Vec<Customer>) -> RepositoryResult<usize>;
}
