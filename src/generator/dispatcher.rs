//! Concurrent candidate dispatch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use futures::future::join_all;
use tokio::time::timeout;
use tracing::{debug, error, warn};

use crate::error::GenerationFailure;
use crate::planner::VariantConfig;

use super::fallback::synthesize_fallback;
use super::service::{ContentGenerationService, GenerationRequest};
use super::{Candidate, CandidateMetadata};

/// Dispatches one service call per variant config.
///
/// Every call runs in its own spawned task with an independent deadline.
/// Failures of any kind (service error, timeout, empty markup, panic)
/// resolve to a locally synthesized fallback candidate, so the batch always
/// yields exactly one candidate per config, in config order.
pub struct CandidateGenerator {
    service: Arc<dyn ContentGenerationService>,
    request_timeout: Duration,
}

impl CandidateGenerator {
    pub fn new(service: Arc<dyn ContentGenerationService>, request_timeout: Duration) -> Self {
        Self {
            service,
            request_timeout,
        }
    }

    pub async fn generate_all(&self, configs: &[VariantConfig]) -> Vec<Candidate> {
        let handles: Vec<_> = configs
            .iter()
            .cloned()
            .map(|config| {
                let service = Arc::clone(&self.service);
                let request_timeout = self.request_timeout;
                tokio::spawn(
                    async move { Self::generate_one(service, config, request_timeout).await },
                )
            })
            .collect();

        let joined = join_all(handles).await;

        joined
            .into_iter()
            .zip(configs.iter())
            .map(|(result, config)| match result {
                Ok(candidate) => candidate,
                Err(e) => {
                    let failure = GenerationFailure::TaskPanic {
                        message: e.to_string(),
                    };
                    error!(
                        focus = config.design_focus.label(),
                        error = %failure,
                        "Generation task panicked"
                    );
                    synthesize_fallback(config, 0)
                }
            })
            .collect()
    }

    async fn generate_one(
        service: Arc<dyn ContentGenerationService>,
        config: VariantConfig,
        request_timeout: Duration,
    ) -> Candidate {
        let started = Instant::now();
        let request = GenerationRequest::from_config(&config);

        debug!(
            focus = config.design_focus.label(),
            style = config.design_style.label(),
            "Dispatching generation request"
        );

        let outcome = match timeout(request_timeout, service.generate(&request)).await {
            Ok(Ok(response)) => {
                if !response.success {
                    Err(GenerationFailure::Service {
                        message: "service reported failure".to_string(),
                    })
                } else if response.html_content.trim().is_empty() {
                    Err(GenerationFailure::MalformedResponse {
                        reason: "empty htmlContent".to_string(),
                    })
                } else {
                    Ok(response)
                }
            }
            Ok(Err(failure)) => Err(failure),
            Err(_) => Err(GenerationFailure::Timeout {
                elapsed_secs: request_timeout.as_secs(),
            }),
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(response) => {
                debug!(
                    focus = config.design_focus.label(),
                    elapsed_ms,
                    model = %response.metadata.model,
                    "Generation succeeded"
                );
                Candidate {
                    success: true,
                    html_content: response.html_content,
                    css_content: response.css_content,
                    title: response.title,
                    structure: response.structure,
                    metadata: CandidateMetadata {
                        generated_at: Utc::now(),
                        model: response.metadata.model,
                        processing_time_ms: elapsed_ms,
                    },
                }
            }
            Err(failure) => {
                warn!(
                    focus = config.design_focus.label(),
                    reason = failure.label(),
                    error = %failure,
                    "Generation failed, synthesizing fallback"
                );
                synthesize_fallback(&config, elapsed_ms)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::BusinessContext;
    use crate::generator::fallback::FALLBACK_MODEL;
    use crate::generator::service::{GenerationResponse, ResponseMetadata};
    use crate::planner::{GenerationOverrides, VariantPlanner};

    enum Behavior {
        Succeed,
        Fail,
        EmptyHtml,
        Hang,
        Panic,
    }

    struct ScriptedService {
        // One behavior per call, keyed by the request's design style label
        // position; a single behavior applies to all calls.
        behaviors: Vec<Behavior>,
        calls: std::sync::atomic::AtomicUsize,
    }

    impl ScriptedService {
        fn uniform(behavior: Behavior) -> Self {
            Self {
                behaviors: vec![behavior],
                calls: std::sync::atomic::AtomicUsize::new(0),
            }
        }

        fn per_call(behaviors: Vec<Behavior>) -> Self {
            Self {
                behaviors,
                calls: std::sync::atomic::AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl ContentGenerationService for ScriptedService {
        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GenerationResponse, GenerationFailure> {
            let call = self
                .calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            let behavior = if self.behaviors.len() == 1 {
                &self.behaviors[0]
            } else {
                &self.behaviors[call % self.behaviors.len()]
            };

            match behavior {
                Behavior::Succeed => Ok(GenerationResponse {
                    success: true,
                    html_content: format!("<html><body><h1>{}</h1></body></html>", request.topic),
                    css_content: "body {}".to_string(),
                    title: request.topic.clone(),
                    structure: None,
                    metadata: ResponseMetadata {
                        model: "test-model".to_string(),
                    },
                }),
                Behavior::Fail => Err(GenerationFailure::Service {
                    message: "boom".to_string(),
                }),
                Behavior::EmptyHtml => Ok(GenerationResponse {
                    success: true,
                    html_content: "   ".to_string(),
                    css_content: String::new(),
                    title: String::new(),
                    structure: None,
                    metadata: ResponseMetadata::default(),
                }),
                Behavior::Hang => {
                    std::future::pending::<()>().await;
                    unreachable!()
                }
                Behavior::Panic => panic!("scripted panic"),
            }
        }
    }

    fn configs(count: u32) -> Vec<VariantConfig> {
        VariantPlanner::new()
            .plan(
                "topic",
                count,
                &[],
                &BusinessContext::default(),
                &GenerationOverrides::default(),
            )
            .unwrap()
    }

    #[tokio::test]
    async fn test_all_calls_succeed_in_order() {
        let service = Arc::new(ScriptedService::uniform(Behavior::Succeed));
        let generator = CandidateGenerator::new(service.clone(), Duration::from_secs(5));

        let configs = configs(3);
        let candidates = generator.generate_all(&configs).await;

        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|c| c.success));
        for (candidate, config) in candidates.iter().zip(&configs) {
            assert!(candidate.html_content.contains(&config.enhanced_topic));
        }
        assert_eq!(service.calls.load(std::sync::atomic::Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_service_error_yields_fallback() {
        let service = Arc::new(ScriptedService::uniform(Behavior::Fail));
        let generator = CandidateGenerator::new(service, Duration::from_secs(5));

        let candidates = generator.generate_all(&configs(1)).await;

        assert_eq!(candidates.len(), 1);
        assert!(!candidates[0].success);
        assert_eq!(candidates[0].metadata.model, FALLBACK_MODEL);
    }

    #[tokio::test]
    async fn test_empty_html_yields_fallback() {
        let service = Arc::new(ScriptedService::uniform(Behavior::EmptyHtml));
        let generator = CandidateGenerator::new(service, Duration::from_secs(5));

        let candidates = generator.generate_all(&configs(1)).await;
        assert!(!candidates[0].success);
        assert_eq!(candidates[0].metadata.model, FALLBACK_MODEL);
    }

    #[tokio::test]
    async fn test_timeout_yields_fallback() {
        let service = Arc::new(ScriptedService::uniform(Behavior::Hang));
        let generator = CandidateGenerator::new(service, Duration::from_millis(50));

        let candidates = generator.generate_all(&configs(1)).await;
        assert!(!candidates[0].success);
        assert_eq!(candidates[0].metadata.model, FALLBACK_MODEL);
    }

    #[tokio::test]
    async fn test_panic_is_isolated() {
        let service = Arc::new(ScriptedService::per_call(vec![
            Behavior::Succeed,
            Behavior::Panic,
            Behavior::Succeed,
        ]));
        let generator = CandidateGenerator::new(service, Duration::from_secs(5));

        let candidates = generator.generate_all(&configs(3)).await;

        assert_eq!(candidates.len(), 3);
        let fallbacks = candidates.iter().filter(|c| !c.success).count();
        assert_eq!(fallbacks, 1);
        let successes = candidates.iter().filter(|c| c.success).count();
        assert_eq!(successes, 2);
    }
}
