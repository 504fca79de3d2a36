use crate::enrichment::EnrichmentClient;
use crate::export::ExportRunner;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub enrichment: EnrichmentClient,
    /// Runs each request's export independently, under a deadline.
    pub exports: ExportRunner,
}

#[cfg(test)]
impl AppState {
    /// HTML exports and the given generator in place of the upstream service.
    pub fn for_tests(generator: std::sync::Arc<dyn crate::llm_client::TextGenerator>) -> Self {
        Self {
            enrichment: EnrichmentClient::new(generator),
            exports: ExportRunner::new(std::sync::Arc::new(crate::export::HtmlExporter)),
        }
    }
}
