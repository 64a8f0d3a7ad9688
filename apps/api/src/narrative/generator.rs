//! Narrative generator — provider call with first-class fallback.
//!
//! Protocol per document: render prompt → one bounded provider call → decode
//! JSON → document, or the static fallback on any failure. The fallback is
//! an explicit branch on the `Result`, not a swallowed error, so both paths
//! are independently testable. The two documents of a request run this
//! protocol independently; one may succeed while the other falls back.

use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::llm_client::{strip_json_fences, CompletionProvider, ProviderError};
use crate::models::profile::{CandidateAttributes, Category};
use crate::narrative::prompts::{
    render_prompt, ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM, NARRATIVE_TEMPERATURE,
    ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM,
};
use crate::narrative::{fallback, AnalysisResult, ImprovementPlan};

/// Generates the skill analysis document. Never fails: any provider anomaly
/// yields the category's static fallback.
pub async fn generate_analysis(
    provider: &dyn CompletionProvider,
    timeout: Duration,
    category: Category,
    attributes: &CandidateAttributes,
    skill_names: &[String],
) -> AnalysisResult {
    let prompt = render_prompt(ANALYSIS_PROMPT_TEMPLATE, category, attributes, skill_names);

    match request_document::<AnalysisResult>(provider, timeout, ANALYSIS_SYSTEM, &prompt).await {
        Ok(analysis) => {
            debug!("Analysis document generated by provider");
            analysis
        }
        Err(e) => {
            warn!("Analysis generation failed ({e}); using static fallback");
            fallback::analysis_for(category)
        }
    }
}

/// Generates the learning roadmap document. Never fails: any provider
/// anomaly yields the category's static fallback.
pub async fn generate_improvement(
    provider: &dyn CompletionProvider,
    timeout: Duration,
    category: Category,
    attributes: &CandidateAttributes,
    skill_names: &[String],
) -> ImprovementPlan {
    let prompt = render_prompt(ROADMAP_PROMPT_TEMPLATE, category, attributes, skill_names);

    match request_document::<ImprovementPlan>(provider, timeout, ROADMAP_SYSTEM, &prompt).await {
        Ok(plan) => {
            debug!("Improvement document generated by provider");
            plan
        }
        Err(e) => {
            warn!("Improvement generation failed ({e}); using static fallback");
            fallback::improvement_for(category)
        }
    }
}

/// One bounded provider attempt decoded as `T`. No retries: failure handling
/// belongs to the callers' fallback branch.
async fn request_document<T: DeserializeOwned>(
    provider: &dyn CompletionProvider,
    timeout: Duration,
    system: &str,
    prompt: &str,
) -> Result<T, ProviderError> {
    let text = tokio::time::timeout(
        timeout,
        provider.complete(system, prompt, NARRATIVE_TEMPERATURE),
    )
    .await
    .map_err(|_| ProviderError::Timeout)??;

    let decoded = serde_json::from_str(strip_json_fences(&text))?;
    Ok(decoded)
}
