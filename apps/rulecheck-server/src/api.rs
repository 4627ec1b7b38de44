//! API handlers for the rule checker server
//!
//! Provides REST endpoints for:
//! - Health check
//! - Rule checking of an uploaded PDF

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use compliance_engine::{collect_rules, MAX_RULES};
use shared_pdf::{extract_document_text, ExtractionOutcome};
use shared_types::CheckResponse;

use crate::error::ServerError;
use crate::AppState;

/// Multipart field holding the document
const FILE_FIELD: &str = "file";

/// Multipart fields holding rule phrases, in response order
const RULE_FIELDS: [&str; MAX_RULES] = ["rule1", "rule2", "rule3"];

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub evaluator: String,
    pub llm_configured: bool,
}

/// Handler: GET /health
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "rulecheck-server",
        version: env!("CARGO_PKG_VERSION"),
        evaluator: state.engine.evaluator_name().to_string(),
        llm_configured: state.llm.is_configured(),
    })
}

/// Fields read from a `/check` form
#[derive(Debug, Default)]
struct CheckForm {
    file: Option<Bytes>,
    file_name: Option<String>,
    rules: [Option<String>; MAX_RULES],
}

async fn read_check_form(multipart: &mut Multipart) -> Result<CheckForm, ServerError> {
    let mut form = CheckForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        if name == FILE_FIELD {
            form.file_name = field.file_name().map(|s| s.to_string());
            let data = field.bytes().await?;
            debug!("Read {} bytes of file data", data.len());
            form.file = Some(data);
        } else if let Some(idx) = RULE_FIELDS.iter().position(|f| *f == name) {
            form.rules[idx] = Some(field.text().await?);
        } else {
            debug!("Ignoring unexpected form field '{}'", name);
        }
    }

    Ok(form)
}

/// Run extraction on the blocking pool, bounded by `timeout_ms`
///
/// The timeout covers waiting for a permit as well as the extraction itself.
/// It bounds how long the request waits, not the parser: a timed-out task
/// keeps its blocking thread, and its permit, until pdf-extract returns. The
/// permit pool therefore caps how many extractions run at once.
///
/// A timeout or a failed task degrades to empty text like any other
/// extraction failure.
pub async fn extract_with_timeout(
    data: Bytes,
    timeout_ms: u64,
    permits: Arc<Semaphore>,
) -> ExtractionOutcome {
    let run = async move {
        let permit = permits.acquire_owned().await.map_err(|e| e.to_string())?;
        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            extract_document_text(&data)
        })
        .await
        .map_err(|e| e.to_string())
    };

    match tokio::time::timeout(Duration::from_millis(timeout_ms), run).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(e)) => {
            warn!("Extraction task failed: {}", e);
            ExtractionOutcome::failed(format!("extraction task failed: {}", e))
        }
        Err(_) => {
            warn!("Extraction timed out after {}ms", timeout_ms);
            ExtractionOutcome::failed(format!("extraction timed out after {}ms", timeout_ms))
        }
    }
}

/// Handler: POST /check
pub async fn handle_check(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CheckResponse>, ServerError> {
    let form = read_check_form(&mut multipart).await?;

    let data = form.file.ok_or_else(|| {
        ServerError::InvalidRequest(format!("Missing required '{}' field", FILE_FIELD))
    })?;

    let rules = collect_rules(form.rules);
    info!(
        "Check request: file={}, bytes={}, rules={}",
        form.file_name.as_deref().unwrap_or("<unnamed>"),
        data.len(),
        rules.len()
    );

    let outcome = extract_with_timeout(
        data,
        state.extract_timeout_ms,
        state.extraction_permits.clone(),
    )
    .await;
    match &outcome {
        ExtractionOutcome::Failed { reason } => {
            info!("Evaluating against empty text: {}", reason)
        }
        ExtractionOutcome::Extracted { page_count, .. } if !outcome.has_text() => {
            info!("No extractable text in {} pages (scanned PDF?)", page_count)
        }
        ExtractionOutcome::Extracted { page_count, .. } => {
            debug!("Extracted text from {} pages", page_count)
        }
    }

    let response = state.engine.check_rules(outcome.text(), &rules);
    Ok(Json(response))
}
