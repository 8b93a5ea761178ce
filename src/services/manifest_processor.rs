//! Async manifest processing service.
//!
//! Handles manifest uploads (parsing, checksum deduplication, record
//! creation) in the background, emitting progress logs.

use crate::api::ManifestId;
use crate::db::checksum::calculate_checksum;
use crate::db::repository::FullRepository;
use crate::db::services as db_services;
use crate::models;
use crate::services::job_tracker::{JobTracker, LogLevel};
use std::sync::Arc;

/// Process a manifest asynchronously: parse, deduplicate, and store.
///
/// Designed to be spawned as a background task. Progress is logged to the
/// job tracker so users can follow along via SSE.
pub async fn process_manifest_async(
    job_id: String,
    tracker: JobTracker,
    repo: Arc<dyn FullRepository>,
    manifest_name: String,
    manifest_json: String,
) -> Result<ManifestId, String> {
    tracker.log(&job_id, LogLevel::Info, "Starting manifest processing...");

    tracker.log(&job_id, LogLevel::Info, "Parsing manifest JSON...");
    let manifest = match tokio::task::spawn_blocking({
        let manifest_json = manifest_json.clone();
        let manifest_name = manifest_name.clone();
        move || {
            models::manifest::parse_manifest_json_str(&manifest_json).map(|mut m| {
                if m.name.is_empty() {
                    m.name = manifest_name;
                }
                m
            })
        }
    })
    .await
    {
        Ok(Ok(manifest)) => {
            tracker.log(
                &job_id,
                LogLevel::Success,
                format!("✓ Parsed manifest with {} records", manifest.records.len()),
            );
            manifest
        }
        Ok(Err(e)) => {
            let msg = format!("Failed to parse manifest: {}", e);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
        Err(e) => {
            let msg = format!("Parse task panic: {}", e);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
    };

    let checksum = calculate_checksum(&manifest_json);

    tracker.log(&job_id, LogLevel::Info, "Storing manifest in repository...");
    let info = match db_services::store_manifest(repo.as_ref(), &manifest, &checksum).await {
        Ok(info) => {
            tracker.log(
                &job_id,
                LogLevel::Success,
                format!(
                    "✓ Stored manifest (ID: {}) with {} records",
                    info.id.value(),
                    info.record_count
                ),
            );
            info
        }
        Err(e) => {
            let msg = format!("Failed to store manifest: {}", e);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
    };

    tracker.log(
        &job_id,
        LogLevel::Success,
        format!("✅ Manifest processing complete! ID: {}", info.id.value()),
    );

    let result = serde_json::json!({
        "manifest_id": info.id.value(),
        "manifest_name": info.name,
        "record_count": info.record_count,
    });
    tracker.complete_job(&job_id, Some(result));

    Ok(info.id)
}
