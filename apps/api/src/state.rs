use std::sync::Arc;

use crate::llm_client::Inference;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Document store. Default: `PgStore` over the startup pool.
    pub store: Arc<dyn Store>,
    /// Inference backend. Default: `LlmClient`.
    pub llm: Arc<dyn Inference>,
}
