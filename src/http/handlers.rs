//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::sse::{Event, Sse},
    response::{IntoResponse, Response},
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;

use super::dto::{
    AlternativesQuery, HealthResponse, JobStatusResponse, RecordListResponse,
    ReplaceRegistryResponse, UploadManifestRequest, UploadManifestResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{CargoRecordId, TransitRateId};
use crate::db::repository::RegistryRepository;
use crate::db::services as db_services;
use crate::models::{AirportCode, Customer, Flight, SectorRate, TransitRate};
use crate::routes::conversion::{ConversionOutcome, ConversionRequest};
use crate::routes::transit::RateSelection;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Manifest Upload
// =============================================================================

/// POST /v1/uploads
///
/// Upload a manifest asynchronously. Returns a job ID for tracking
/// progress.
pub async fn upload_manifest(
    State(state): State<AppState>,
    Json(request): Json<UploadManifestRequest>,
) -> Result<(StatusCode, Json<UploadManifestResponse>), AppError> {
    // Convert JSON values to strings for the service layer
    let manifest_json_str = serde_json::to_string(&request.manifest_json)
        .map_err(|e| AppError::BadRequest(format!("Invalid manifest JSON: {}", e)))?;

    let job_id = state.job_tracker.create_job();
    let response_job_id = job_id.clone();

    let tracker = state.job_tracker.clone();
    let repo = state.repository.clone();
    let manifest_name = request.name.clone();

    tokio::spawn(async move {
        let _ = crate::services::manifest_processor::process_manifest_async(
            job_id,
            tracker,
            repo,
            manifest_name,
            manifest_json_str,
        )
        .await;
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(UploadManifestResponse {
            job_id: response_job_id.clone(),
            message: format!(
                "Manifest upload started. Track progress at /v1/jobs/{}/logs",
                response_job_id
            ),
        }),
    ))
}

// =============================================================================
// Records & Pricing
// =============================================================================

/// GET /v1/records
///
/// List all records with their presentation origin/destination.
pub async fn list_records(State(state): State<AppState>) -> HandlerResult<RecordListResponse> {
    let records = db_services::list_records(state.repository.as_ref()).await?;
    let total = records.len();

    Ok(Json(RecordListResponse { records, total }))
}

/// GET /v1/records/{record_id}/segmentation
///
/// Get the derived (or overridden) segmentation of a record.
pub async fn get_segmentation(
    State(state): State<AppState>,
    Path(record_id): Path<i64>,
) -> HandlerResult<crate::api::SegmentationView> {
    let record_id = CargoRecordId::new(record_id);
    let view = db_services::segment_record(state.repository.as_ref(), record_id).await?;
    Ok(Json(view))
}

/// GET /v1/records/{record_id}/price
///
/// Get the priced breakdown of a record. A record with no matching rates
/// yields an empty breakdown, not an error.
pub async fn get_price(
    State(state): State<AppState>,
    Path(record_id): Path<i64>,
) -> HandlerResult<crate::api::RecordPrice> {
    let record_id = CargoRecordId::new(record_id);
    let price = db_services::price_record(state.repository.as_ref(), record_id).await?;
    Ok(Json(price))
}

/// POST /v1/records/{record_id}/conversion
///
/// Attempt a conversion override. Validation failures come back as 422
/// with the full list of messages; the record stays unconverted.
pub async fn convert_record(
    State(state): State<AppState>,
    Path(record_id): Path<i64>,
    Json(request): Json<ConversionRequest>,
) -> Result<Response, AppError> {
    let record_id = CargoRecordId::new(record_id);
    let outcome =
        db_services::convert_record(state.repository.as_ref(), record_id, &request).await?;

    let response = match &outcome {
        ConversionOutcome::Converted { .. } => (StatusCode::OK, Json(outcome)).into_response(),
        ConversionOutcome::Rejected { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(outcome)).into_response()
        }
    };
    Ok(response)
}

/// POST /v1/records/{record_id}/rate-selection
///
/// Persist a transit rate selection onto a record.
pub async fn select_rate(
    State(state): State<AppState>,
    Path(record_id): Path<i64>,
    Json(selection): Json<RateSelection>,
) -> HandlerResult<crate::models::CargoRecord> {
    let record_id = CargoRecordId::new(record_id);
    let record =
        db_services::select_rate(state.repository.as_ref(), record_id, &selection).await?;
    Ok(Json(record))
}

// =============================================================================
// Route Intelligence
// =============================================================================

/// GET /v1/routes/alternatives?origin=FRA&destination=RIX
///
/// List the priced segments sharing an endpoint with a direct pair.
pub async fn get_alternatives(
    State(state): State<AppState>,
    Query(query): Query<AlternativesQuery>,
) -> HandlerResult<Vec<crate::api::AlternativeRoute>> {
    let alternatives = db_services::route_alternatives(
        state.repository.as_ref(),
        &query.origin,
        &query.destination,
    )
    .await?;
    Ok(Json(alternatives))
}

/// GET /v1/transit-rates/{rate_id}/options
///
/// Enumerate the selectable pricing variants of a transit rate.
pub async fn get_transit_options(
    State(state): State<AppState>,
    Path(rate_id): Path<i64>,
) -> HandlerResult<Vec<crate::api::TransitOption>> {
    let rate_id = TransitRateId::new(rate_id);
    let options = db_services::transit_options(state.repository.as_ref(), rate_id).await?;
    Ok(Json(options))
}

// =============================================================================
// Registry Snapshots
// =============================================================================

macro_rules! registry_handlers {
    ($list:ident, $replace:ident, $fetch:ident, $replace_repo:ident, $row:ty) => {
        pub async fn $list(State(state): State<AppState>) -> HandlerResult<Vec<$row>> {
            let rows = state.repository.$fetch().await?;
            Ok(Json(rows))
        }

        pub async fn $replace(
            State(state): State<AppState>,
            Json(rows): Json<Vec<$row>>,
        ) -> HandlerResult<ReplaceRegistryResponse> {
            let replaced = state.repository.$replace_repo(rows).await?;
            Ok(Json(ReplaceRegistryResponse { replaced }))
        }
    };
}

registry_handlers!(
    list_airport_codes,
    replace_airport_codes,
    fetch_airport_codes,
    replace_airport_codes,
    AirportCode
);
registry_handlers!(list_flights, replace_flights, fetch_flights, replace_flights, Flight);
registry_handlers!(
    list_sector_rates,
    replace_sector_rates,
    fetch_sector_rates,
    replace_sector_rates,
    SectorRate
);
registry_handlers!(
    list_transit_rates,
    replace_transit_rates,
    fetch_transit_rates,
    replace_transit_rates,
    TransitRate
);
registry_handlers!(list_customers, replace_customers, fetch_customers, replace_customers, Customer);

// =============================================================================
// Async Job Management
// =============================================================================

/// GET /v1/jobs/{job_id}
///
/// Get the current status and logs of a background job.
pub async fn get_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> HandlerResult<JobStatusResponse> {
    let job = state
        .job_tracker
        .get_job(&job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", job_id)))?;

    Ok(Json(JobStatusResponse {
        job_id: job.job_id,
        status: format!("{:?}", job.status).to_lowercase(),
        logs: job.logs,
        result: job.result,
    }))
}

/// GET /v1/jobs/{job_id}/logs
///
/// Stream job logs via Server-Sent Events (SSE).
pub async fn stream_job_logs(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    // Verify job exists
    if state.job_tracker.get_job(&job_id).is_none() {
        return Err(AppError::NotFound(format!("Job {} not found", job_id)));
    }

    let tracker = state.job_tracker.clone();
    let stream = async_stream::stream! {
        let mut last_log_count = 0;
        loop {
            let logs = tracker.get_logs(&job_id);

            // Send new logs since last check
            for log in logs.iter().skip(last_log_count) {
                let event_data = serde_json::to_string(log).unwrap_or_default();
                yield Ok(Event::default().data(event_data));
            }
            last_log_count = logs.len();

            // Check if job is complete
            if let Some(job) = tracker.get_job(&job_id) {
                if job.status != crate::services::job_tracker::JobStatus::Running {
                    // Serde serialization keeps status values lowercase
                    // ("completed", "failed") for the console.
                    let final_event = serde_json::json!({
                        "status": job.status,
                        "result": job.result,
                    });
                    yield Ok(Event::default()
                        .event("complete")
                        .data(serde_json::to_string(&final_event).unwrap_or_default()));
                    break;
                }
            } else {
                break;
            }

            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    };

    Ok(Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(1))
            .text("keep-alive"),
    ))
}
