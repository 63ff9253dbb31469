//! Handle Turn use case
//!
//! Fans one user turn out to every configured provider concurrently,
//! waits for the cohort to settle within a global budget, and selects
//! one winning response.

use crate::config::{OrchestratorConfig, SelectionMode};
use crate::ports::model_provider::{ModelProvider, ProviderError, ProviderResult};
use medley_domain::{
    OrchestrationResult, PromptTemplate, ProviderId, Turn, parse_judge_verdict,
    select_by_priority,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info, warn};

const RATIONALE_PRIORITY: &str = "selected by priority ordering";
const RATIONALE_ONLY: &str = "only available response";
const RATIONALE_UNAVAILABLE: &str =
    "no provider produced a response; all upstream services failed or were unavailable";

/// Input for the HandleTurn use case
#[derive(Debug, Clone)]
pub struct HandleTurnInput {
    /// Deployment persona/policy text, used verbatim for every provider
    /// and for the judge call.
    pub system_prompt: String,
    /// Prior turns, oldest first. Read-only snapshot.
    pub history: Vec<Turn>,
    /// The new user message. Must be non-empty.
    pub user_message: String,
}

impl HandleTurnInput {
    pub fn new(
        system_prompt: impl Into<String>,
        history: Vec<Turn>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            history,
            user_message: user_message.into(),
        }
    }
}

/// Use case orchestrating one conversation turn across all providers
///
/// Total over its input: every invocation returns exactly one
/// [`OrchestrationResult`], never an error. Individual provider
/// failures are absorbed and only observable through logging. No
/// retries happen inside a single pass.
pub struct HandleTurnUseCase {
    providers: Vec<Arc<dyn ModelProvider>>,
    config: OrchestratorConfig,
}

impl HandleTurnUseCase {
    pub fn new(providers: Vec<Arc<dyn ModelProvider>>, config: OrchestratorConfig) -> Self {
        Self { providers, config }
    }

    /// Run one turn: dispatch, await, aggregate, select.
    pub async fn execute(&self, input: HandleTurnInput) -> OrchestrationResult {
        let input = Arc::new(self.clamp_message(input));

        info!(
            providers = self.providers.len(),
            "dispatching turn to provider cohort"
        );

        let results = self.dispatch_and_await(&input).await;
        let responses = Self::aggregate(results);
        self.select(&input, responses).await
    }

    /// Truncate oversized user messages before dispatch.
    fn clamp_message(&self, mut input: HandleTurnInput) -> HandleTurnInput {
        let max = self.config.max_message_chars;
        if input.user_message.chars().count() > max {
            warn!(max_chars = max, "user message exceeds cap, truncating");
            input.user_message = input.user_message.chars().take(max).collect();
        }
        input
    }

    /// Dispatch one task per provider and drain the cohort under the
    /// global budget. Tasks still outstanding when the budget elapses
    /// are aborted, not left running past our return.
    async fn dispatch_and_await(&self, input: &Arc<HandleTurnInput>) -> Vec<ProviderResult> {
        let mut join_set = JoinSet::new();

        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let input = Arc::clone(input);

            join_set.spawn(async move {
                let started = Instant::now();
                let outcome = provider
                    .generate(&input.system_prompt, &input.history, &input.user_message)
                    .await;
                ProviderResult {
                    provider: provider.id().clone(),
                    outcome,
                    elapsed: started.elapsed(),
                }
            });
        }

        let mut results = Vec::new();
        let drain = async {
            while let Some(joined) = join_set.join_next().await {
                match joined {
                    Ok(result) => results.push(result),
                    Err(e) => warn!("provider task failed to join: {e}"),
                }
            }
        };

        if timeout(self.config.timeout, drain).await.is_err() {
            warn!(
                budget = ?self.config.timeout,
                "global budget elapsed, abandoning outstanding providers"
            );
            join_set.abort_all();
        }

        results
    }

    /// Keep successes, log and drop failures.
    fn aggregate(results: Vec<ProviderResult>) -> BTreeMap<ProviderId, String> {
        let mut responses = BTreeMap::new();

        for result in results {
            match result.outcome {
                Ok(text) => {
                    info!(
                        provider = %result.provider,
                        elapsed_ms = result.elapsed.as_millis() as u64,
                        "provider responded"
                    );
                    responses.insert(result.provider, text);
                }
                Err(ProviderError::Unconfigured) => {
                    debug!(provider = %result.provider, "provider unconfigured, skipped");
                }
                Err(e) => {
                    warn!(provider = %result.provider, error = %e, "provider failed");
                }
            }
        }

        responses
    }

    /// Apply the configured selection policy over the response map.
    async fn select(
        &self,
        input: &HandleTurnInput,
        responses: BTreeMap<ProviderId, String>,
    ) -> OrchestrationResult {
        if responses.is_empty() {
            warn!("no provider responded, returning fallback message");
            return OrchestrationResult::fallback(
                &self.config.fallback_message,
                RATIONALE_UNAVAILABLE,
            );
        }

        if responses.len() == 1 {
            // Nothing to compare; skip the judge entirely.
            if let Some(provider) = responses.keys().next().cloned() {
                return OrchestrationResult::selected(responses, provider, RATIONALE_ONLY);
            }
        }

        match self.config.policy {
            SelectionMode::Priority => self.priority_result(responses),
            SelectionMode::Judge => self.judge_result(input, responses).await,
        }
    }

    fn priority_result(&self, responses: BTreeMap<ProviderId, String>) -> OrchestrationResult {
        match select_by_priority(&responses, &self.config.priority) {
            Some(provider) => {
                info!(provider = %provider, "winner by priority ordering");
                OrchestrationResult::selected(responses, provider, RATIONALE_PRIORITY)
            }
            // Unreachable for a non-empty map; kept total anyway.
            None => OrchestrationResult::fallback(
                &self.config.fallback_message,
                RATIONALE_UNAVAILABLE,
            ),
        }
    }

    /// Ask the judge to rank the candidates. Runs strictly after the
    /// fan-out join; any judge failure degrades to priority ordering.
    async fn judge_result(
        &self,
        input: &HandleTurnInput,
        responses: BTreeMap<ProviderId, String>,
    ) -> OrchestrationResult {
        let Some(judge) = self.judge_provider() else {
            warn!("judge policy configured but no judge provider available");
            return self.priority_result(responses);
        };

        let candidates: Vec<(ProviderId, String)> = responses
            .iter()
            .map(|(id, text)| (id.clone(), text.clone()))
            .collect();
        let prompt = PromptTemplate::judge_prompt(&input.user_message, &candidates);

        let reply = timeout(
            self.config.timeout,
            judge.generate(PromptTemplate::judge_system(), &[], &prompt),
        )
        .await;

        match reply {
            Ok(Ok(text)) => {
                if let Some(verdict) = parse_judge_verdict(&text) {
                    if let Some(provider) =
                        responses.keys().find(|id| id.matches(&verdict.best)).cloned()
                    {
                        info!(provider = %provider, "winner by judge verdict");
                        return OrchestrationResult::selected(responses, provider, verdict.why);
                    }
                    warn!(named = %verdict.best, "judge named a provider with no response");
                } else {
                    warn!("judge reply did not follow the BEST/WHY contract");
                }
            }
            Ok(Err(e)) => warn!(error = %e, "judge call failed"),
            Err(_) => warn!("judge call timed out"),
        }

        self.priority_result(responses)
    }

    fn judge_provider(&self) -> Option<&Arc<dyn ModelProvider>> {
        let judge_id = self.config.judge.as_ref()?;
        self.providers.iter().find(|p| p.id() == judge_id)
    }
}
