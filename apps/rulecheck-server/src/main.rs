//! PDF Rule Checker Server
//!
//! Accepts a PDF upload together with up to three plain-language rules
//! ("must contain a date", "must name a responsible party", ...) and returns
//! a pass/fail verdict for each rule with evidence and a confidence score.
//!
//! ## Architecture
//!
//! - `shared-pdf` turns the upload into page-marked text (never fails)
//! - `compliance-engine` classifies each rule and runs its heuristic check
//! - this crate handles HTTP, configuration, and logging
//!
//! The LLM settings (`OPENAI_API_KEY`, `OPENAI_MODEL`) are loaded and reported
//! but not used: the heuristic evaluator is always installed.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use tokio::sync::Semaphore;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use compliance_engine::ComplianceEngine;

mod api;
mod config;
mod error;

use api::{handle_check, handle_health};
use config::LlmSettings;

/// Default request body cap (25 MiB)
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Default extraction timeout in milliseconds
const DEFAULT_EXTRACT_TIMEOUT_MS: u64 = 10_000;

/// Default number of extractions allowed to run at once
const DEFAULT_MAX_CONCURRENT_EXTRACTIONS: usize = 4;

/// Command-line arguments for the rule checker server
#[derive(Parser, Debug)]
#[command(name = "rulecheck-server")]
#[command(about = "Check uploaded PDFs against plain-language rules")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// PDF text extraction timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_EXTRACT_TIMEOUT_MS)]
    extract_timeout_ms: u64,

    /// Maximum number of PDF extractions running at once
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT_EXTRACTIONS)]
    max_concurrent_extractions: usize,

    /// Maximum accepted request body size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: ComplianceEngine,
    /// Extraction timeout in milliseconds
    pub extract_timeout_ms: u64,
    /// Permits for running extractions, held until the parser returns
    pub extraction_permits: Arc<Semaphore>,
    /// Request body cap in bytes
    pub max_upload_bytes: usize,
    pub llm: LlmSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            engine: ComplianceEngine::new(),
            extract_timeout_ms: DEFAULT_EXTRACT_TIMEOUT_MS,
            extraction_permits: Arc::new(Semaphore::new(DEFAULT_MAX_CONCURRENT_EXTRACTIONS)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            llm: LlmSettings::default(),
        }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/check", post(handle_check))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting rule checker on {}:{}", args.host, args.port);

    let llm = LlmSettings::from_env();
    if llm.is_configured() {
        info!(
            "LLM configured (model={}) but not used; heuristic evaluation only",
            llm.model
        );
    } else {
        info!("No LLM API key set; heuristic evaluation only");
    }

    let state = AppState {
        engine: ComplianceEngine::new(),
        extract_timeout_ms: args.extract_timeout_ms,
        extraction_permits: Arc::new(Semaphore::new(args.max_concurrent_extractions.max(1))),
        max_upload_bytes: args.max_upload_bytes,
        llm,
    };

    let app = build_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!(
        "Extraction timeout: {}ms, concurrency: {}",
        args.extract_timeout_ms, args.max_concurrent_extractions
    );
    info!("Upload limit: {} bytes", args.max_upload_bytes);

    axum::serve(listener, app).await?;

    Ok(())
}
