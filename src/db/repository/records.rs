//! Record repository trait for cargo records and manifests.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::CargoRecordId;
use crate::models::{CargoManifest, CargoRecord, ConversionFields, ManifestInfo};
use crate::routes::transit::RateSelection;

/// Repository trait for cargo record operations.
///
/// Records are created by manifest uploads and never deleted; the only
/// mutations are the conversion override and the transit rate selection.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Store an uploaded manifest and create its records.
    ///
    /// # Arguments
    /// * `manifest` - The parsed manifest
    /// * `checksum` - SHA-256 checksum of the raw upload, used for
    ///   deduplication
    ///
    /// # Returns
    /// * `Ok(ManifestInfo)` - Metadata of the stored manifest
    /// * `Err(RepositoryError::ValidationError)` - If the checksum was
    ///   already uploaded
    async fn store_manifest(
        &self,
        manifest: &CargoManifest,
        checksum: &str,
    ) -> RepositoryResult<ManifestInfo>;

    /// List stored manifests, newest first.
    async fn list_manifests(&self) -> RepositoryResult<Vec<ManifestInfo>>;

    /// List all cargo records in upload order.
    async fn list_records(&self) -> RepositoryResult<Vec<CargoRecord>>;

    /// Fetch a single cargo record.
    async fn fetch_record(&self, id: CargoRecordId) -> RepositoryResult<CargoRecord>;

    /// Persist a validated conversion override onto a record.
    async fn apply_conversion(
        &self,
        id: CargoRecordId,
        fields: &ConversionFields,
    ) -> RepositoryResult<CargoRecord>;

    /// Persist a transit rate selection onto a record.
    async fn apply_rate_selection(
        &self,
        id: CargoRecordId,
        selection: &RateSelection,
    ) -> RepositoryResult<CargoRecord>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
