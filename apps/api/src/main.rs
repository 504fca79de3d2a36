use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_api::config::Config;
use folio_api::enrichment::EnrichmentClient;
use folio_api::export::{CommandPdfExporter, DocumentExporter, ExportRunner, HtmlExporter};
use folio_api::llm_client::{self, LlmClient};
use folio_api::routes::build_router;
use folio_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    if config.uses_placeholder_key() {
        warn!("OPENAI_API_KEY is not set; generation will use fallback content");
    }
    let llm = LlmClient::new(config.openai_api_key.clone(), config.openai_base_url.clone())
        .context("failed to build the generation HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let exporter: Arc<dyn DocumentExporter> = match &config.pdf_converter {
        Some(program) => {
            info!("PDF export via {}", program.display());
            Arc::new(CommandPdfExporter::new(program.clone()))
        }
        None => {
            info!("PDF_CONVERTER not set; exports are served as print-ready HTML");
            Arc::new(HtmlExporter)
        }
    };

    let state = AppState {
        enrichment: EnrichmentClient::new(Arc::new(llm)),
        exports: ExportRunner::new(exporter).with_timeout(config.export_timeout),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
