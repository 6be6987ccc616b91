//! Mock generation service for testing without a live endpoint.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use pageforge::error::GenerationFailure;
use pageforge::generator::{
    ContentGenerationService, GenerationRequest, GenerationResponse, ResponseMetadata,
};

#[derive(Debug, Clone)]
pub enum ServiceScenario {
    /// Respond with the given markup.
    Markup { html: String, css: String },
    /// Fail with a service error.
    Fail(String),
    /// Success-shaped response with no usable markup.
    Blank,
}

impl ServiceScenario {
    pub fn markup(html: impl Into<String>, css: impl Into<String>) -> Self {
        Self::Markup {
            html: html.into(),
            css: css.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(message.into())
    }
}

/// Scenario-driven stand-in for the page generation endpoint.
///
/// Scenarios are keyed by substring of the request topic. The enhanced topic
/// built by the planner embeds each variant's focus clause, so keys like
/// "conversion focused" address exactly one variant of a batch.
#[derive(Debug)]
pub struct MockGenerationService {
    scenarios: RwLock<HashMap<String, ServiceScenario>>,
    call_counts: RwLock<HashMap<String, AtomicUsize>>,
    total_calls: AtomicUsize,
}

impl Default for MockGenerationService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerationService {
    pub fn new() -> Self {
        Self {
            scenarios: RwLock::new(HashMap::new()),
            call_counts: RwLock::new(HashMap::new()),
            total_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_scenario(&self, key: &str, scenario: ServiceScenario) {
        self.scenarios.write().insert(key.to_string(), scenario);
        self.call_counts
            .write()
            .insert(key.to_string(), AtomicUsize::new(0));
    }

    pub fn call_count(&self, key: &str) -> usize {
        self.call_counts
            .read()
            .get(key)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.total_calls.load(Ordering::SeqCst)
    }

    pub fn assert_called(&self, key: &str, times: usize) {
        let count = self.call_count(key);
        assert_eq!(
            count, times,
            "Expected '{}' to be called {} times, but was called {} times",
            key, times, count
        );
    }

    fn find_scenario(&self, topic: &str) -> Option<(String, ServiceScenario)> {
        let scenarios = self.scenarios.read();
        scenarios
            .iter()
            .find(|(key, _)| topic.contains(key.as_str()))
            .map(|(key, scenario)| (key.clone(), scenario.clone()))
    }
}

#[async_trait]
impl ContentGenerationService for MockGenerationService {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GenerationFailure> {
        self.total_calls.fetch_add(1, Ordering::SeqCst);

        let Some((key, scenario)) = self.find_scenario(&request.topic) else {
            return Ok(markup_response(
                format!("<main><h1>{}</h1></main>", request.topic),
                "main { display: flex; }".to_string(),
            ));
        };

        if let Some(counter) = self.call_counts.read().get(&key) {
            counter.fetch_add(1, Ordering::SeqCst);
        }

        match scenario {
            ServiceScenario::Markup { html, css } => Ok(markup_response(html, css)),
            ServiceScenario::Fail(message) => Err(GenerationFailure::Service { message }),
            ServiceScenario::Blank => Ok(markup_response(String::new(), String::new())),
        }
    }
}

fn markup_response(html: String, css: String) -> GenerationResponse {
    GenerationResponse {
        success: true,
        html_content: html,
        css_content: css,
        title: "Test Page".to_string(),
        structure: None,
        metadata: ResponseMetadata {
            model: "mock-model".to_string(),
        },
    }
}

pub struct MockServiceBuilder {
    service: MockGenerationService,
}

impl MockServiceBuilder {
    pub fn new() -> Self {
        Self {
            service: MockGenerationService::new(),
        }
    }

    pub fn scenario(self, key: &str, scenario: ServiceScenario) -> Self {
        self.service.set_scenario(key, scenario);
        self
    }

    pub fn markup(self, key: &str, html: impl Into<String>, css: impl Into<String>) -> Self {
        self.scenario(key, ServiceScenario::markup(html, css))
    }

    pub fn fail(self, key: &str, message: impl Into<String>) -> Self {
        self.scenario(key, ServiceScenario::fail(message))
    }

    pub fn build(self) -> MockGenerationService {
        self.service
    }
}

impl Default for MockServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageforge::context::{BusinessGoal, Industry};
    use pageforge::planner::{DesignStyle, MarketingPsychology};

    fn request(topic: &str) -> GenerationRequest {
        GenerationRequest {
            topic: topic.to_string(),
            target_audience: "general consumers".to_string(),
            business_goal: BusinessGoal::SalesIncrease,
            industry: Industry::General,
            competitive_advantage: Vec::new(),
            design_style: DesignStyle::Minimal,
            psychology: MarketingPsychology {
                pasona: true,
                four_u: false,
            },
        }
    }

    #[tokio::test]
    async fn test_markup_scenario_matches_topic_substring() {
        let service = MockServiceBuilder::new()
            .markup("coffee", "<main><h1>Coffee</h1></main>", "main { gap: 1rem; }")
            .build();

        let response = service.generate(&request("artisanal coffee shop")).await.unwrap();
        assert!(response.html_content.contains("Coffee"));
        service.assert_called("coffee", 1);
    }

    #[tokio::test]
    async fn test_fail_scenario_returns_service_failure() {
        let service = MockServiceBuilder::new().fail("broken", "backend down").build();

        let err = service.generate(&request("broken topic")).await.unwrap_err();
        assert!(err.to_string().contains("backend down"));
        assert!(!err.is_timeout());
    }

    #[tokio::test]
    async fn test_unmatched_topic_gets_default_markup() {
        let service = MockGenerationService::new();

        let response = service.generate(&request("anything at all")).await.unwrap();
        assert!(response.html_content.contains("anything at all"));
        assert_eq!(service.total_calls(), 1);
    }
}
