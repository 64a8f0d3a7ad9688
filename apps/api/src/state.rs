use std::sync::Arc;

use crate::config::Config;
use crate::corpus::JobCorpus;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum
/// extractors. The corpus is read-only after load, so requests share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<JobCorpus>,
    /// Pluggable narrative provider. Production: `AnthropicClient`;
    /// tests inject mocks.
    pub provider: Arc<dyn CompletionProvider>,
    pub config: Config,
}
