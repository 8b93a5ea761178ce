//! Manifest upload parsing.
//!
//! A manifest is a batch of raw cargo records exported from the carrier's
//! booking system and uploaded through the console. Parsing is lenient
//! about optional flight numbers (empty cells arrive as empty strings) but
//! strict about the presence of the `records` field.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::ManifestId;

/// An uploaded manifest before storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CargoManifest {
    #[serde(default)]
    pub name: String,
    pub records: Vec<NewCargoRecord>,
}

/// One raw record row inside a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCargoRecord {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub inbound: Option<String>,
    #[serde(default)]
    pub outbound: Option<String>,
}

/// Stored manifest metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub id: ManifestId,
    pub name: String,
    pub checksum: String,
    pub record_count: usize,
    pub uploaded_at: DateTime<Utc>,
}

fn validate_input_manifest(manifest_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(manifest_json).context("Invalid manifest JSON")?;
    let has_records = value
        .as_object()
        .and_then(|obj| obj.get("records"))
        .is_some();
    if !has_records {
        anyhow::bail!("Missing required 'records' field");
    }
    Ok(())
}

/// Parse a manifest from a JSON string.
///
/// Empty-string flight numbers (blank spreadsheet cells) are normalized to
/// absent so downstream segmentation treats them as "no booked flight".
pub fn parse_manifest_json_str(manifest_json: &str) -> Result<CargoManifest> {
    validate_input_manifest(manifest_json)?;

    let mut manifest: CargoManifest = serde_json::from_str(manifest_json)
        .context("Failed to deserialize manifest JSON using Serde")?;

    for record in &mut manifest.records {
        normalize_flight_field(&mut record.inbound);
        normalize_flight_field(&mut record.outbound);
    }

    Ok(manifest)
}

fn normalize_flight_field(field: &mut Option<String>) {
    if let Some(value) = field.take() {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            *field = Some(trimmed.to_string());
        }
    }
}
