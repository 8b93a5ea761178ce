//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Most engine result types are re-exported from the routes module since
//! they already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Alternatives
    AlternativeRoute,
    // Conversion
    ConversionOutcome, ConversionRequest,
    // Segmentation
    FlightLabel, RouteLeg, SegmentationView, SegmentedRoute,
    // Pricing
    PricedBreakdown, RecordPrice,
    // Landing
    RecordInfo,
    // Transit
    RateSelection, TransitOption,
};

/// Request body for uploading a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadManifestRequest {
    /// Name for the manifest
    pub name: String,
    /// Manifest JSON data (object with a `records` array)
    pub manifest_json: serde_json::Value,
}

/// Response for manifest upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadManifestResponse {
    /// Job ID for tracking the async processing
    pub job_id: String,
    /// Message about the operation
    pub message: String,
}

/// Job status response for async processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    /// Job ID
    pub job_id: String,
    /// Job status
    pub status: String,
    /// Log entries
    pub logs: Vec<crate::services::job_tracker::LogEntry>,
    /// Result if completed
    pub result: Option<serde_json::Value>,
}

/// Query parameters for the alternatives endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AlternativesQuery {
    /// Origin code (raw or canonical)
    pub origin: String,
    /// Destination code (raw or canonical)
    pub destination: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository connection status
    pub repository: String,
}

/// Record list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordListResponse {
    /// List of records
    pub records: Vec<RecordInfo>,
    /// Total count
    pub total: usize,
}

/// Response for registry snapshot replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceRegistryResponse {
    /// Number of rows in the new snapshot
    pub replaced: usize,
}
