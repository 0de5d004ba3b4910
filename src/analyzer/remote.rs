//! Remote analysis delegation
//!
//! Sends the text to an HTTP service implementing the analysis contract:
//! request `{"text", "k", "topN", "task"}`, response
//! `{"summary": [...], "keywords": [...]}`. Transport failures surface as
//! [`GistError::UnavailableService`]; undecodable payloads as
//! [`GistError::MalformedResponse`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analyzer::Analyzer;
use crate::errors::{GistError, Result};
use crate::types::Analysis;

/// Configuration for the remote analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Full endpoint URL accepting analysis POSTs
    pub endpoint: String,
    /// Task identifier sent with each request
    pub task: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Maximum attempts per analysis call
    pub max_retries: u32,
}

impl RemoteConfig {
    /// Create a config for the given endpoint with default task, timeout,
    /// and retry settings
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            task: "analyze".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
        }
    }

    /// Set the task identifier
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set the maximum attempt count (minimum 1)
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries.max(1);
        self
    }
}

/// The request body sent to the remote service.
#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
    k: usize,
    #[serde(rename = "topN")]
    top_n: usize,
    task: &'a str,
}

/// Delegates analysis to a remote HTTP service.
#[derive(Debug, Clone)]
pub struct RemoteAnalyzer {
    config: RemoteConfig,
    agent: ureq::Agent,
}

impl RemoteAnalyzer {
    /// Create a remote analyzer for the configured endpoint
    pub fn new(config: RemoteConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build();
        Self { config, agent }
    }

    fn request_once(&self, body: &AnalyzeRequest<'_>) -> Result<Analysis> {
        let response = self
            .agent
            .post(&self.config.endpoint)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| GistError::UnavailableService(e.to_string()))?;

        response
            .into_json::<Analysis>()
            .map_err(|e| GistError::MalformedResponse(e.to_string()))
    }
}

impl Analyzer for RemoteAnalyzer {
    fn analyze(&self, text: &str, k: usize, top_n: usize) -> Result<Analysis> {
        if k == 0 || top_n == 0 {
            return Err(GistError::InvalidArgument(
                "k and top_n must be >= 1".to_string(),
            ));
        }

        let body = AnalyzeRequest {
            text,
            k,
            top_n,
            task: &self.config.task,
        };

        let mut last_err = GistError::UnavailableService("no attempts made".to_string());
        for attempt in 1..=self.config.max_retries {
            match self.request_once(&body) {
                Ok(analysis) => return Ok(analysis),
                Err(err @ GistError::MalformedResponse(_)) => {
                    // A decoded-but-wrong payload will not improve on retry
                    return Err(err);
                }
                Err(err) => {
                    log::warn!("remote analysis attempt {attempt} failed: {err}");
                    last_err = err;
                }
            }
        }

        Err(last_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let body = AnalyzeRequest {
            text: "Some prose.",
            k: 3,
            top_n: 8,
            task: "analyze",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["text"], "Some prose.");
        assert_eq!(json["k"], 3);
        assert_eq!(json["topN"], 8);
        assert_eq!(json["task"], "analyze");
    }

    #[test]
    fn test_response_wire_shape() {
        let json = r#"{"summary": ["First."], "keywords": ["machine learning"]}"#;
        let analysis: Analysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.summary, vec!["First."]);
        assert_eq!(analysis.keywords, vec!["machine learning"]);
    }

    #[test]
    fn test_config_builders() {
        let config = RemoteConfig::new("http://localhost:9090/analyze")
            .with_task("summarize_keywords")
            .with_timeout_seconds(5)
            .with_max_retries(0);
        assert_eq!(config.task, "summarize_keywords");
        assert_eq!(config.timeout_seconds, 5);
        // Retries never drop below one attempt
        assert_eq!(config.max_retries, 1);
    }

    #[test]
    fn test_unreachable_endpoint_is_unavailable() {
        // Nothing listens on this port
        let config = RemoteConfig::new("http://127.0.0.1:9/analyze")
            .with_timeout_seconds(1)
            .with_max_retries(1);
        let analyzer = RemoteAnalyzer::new(config);

        match analyzer.analyze("Some prose.", 2, 4) {
            Err(GistError::UnavailableService(_)) => {}
            other => panic!("expected UnavailableService, got {other:?}"),
        }
    }
}
