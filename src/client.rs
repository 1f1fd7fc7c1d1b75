//! Typed client for the analysis endpoint, used by the CLI front-end.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::api::models::{AnalysisResult, AnalyzeResponse};
use crate::error::{AppError, Result};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct AnalyzeClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalyzeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        AnalyzeClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submits a URL for analysis and returns both profiles' screenshots.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResult> {
        let endpoint = format!("{}/api/analyze", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .post(&endpoint)
            .json(&serde_json::json!({ "url": url }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("server returned {}", status));
            return Err(if status == StatusCode::BAD_REQUEST {
                AppError::Validation(message)
            } else {
                AppError::Upstream(message)
            });
        }

        let body: AnalyzeResponse = response.json().await?;
        body.screenshots
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Upstream("empty analysis response".to_string()))
    }
}
