//! Client session state.
//!
//! The hosted front-end kept the current URL, loading flag, results, and
//! error message in separate mutable slots. Here they collapse into one
//! state machine with explicit transitions:
//! `Idle -> Loading -> Success | Failed`, and resubmission from any state
//! starts a fresh cycle.

use crate::api::models::AnalysisResult;

#[derive(Clone)]
pub enum Phase {
    Idle,
    Loading,
    Success(AnalysisResult),
    Failed(String),
}

pub struct Session {
    url: String,
    phase: Phase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            url: String::new(),
            phase: Phase::Idle,
        }
    }

    /// Begins a new analysis cycle, discarding any previous result or error.
    /// A blank URL moves straight to `Failed` with no network activity and
    /// returns `None`; otherwise the trimmed URL is returned and the session
    /// enters `Loading`.
    pub fn submit(&mut self, url: &str) -> Option<String> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            self.phase = Phase::Failed("Please enter a website URL".to_string());
            return None;
        }

        self.url = trimmed.to_string();
        self.phase = Phase::Loading;
        Some(self.url.clone())
    }

    pub fn complete(&mut self, result: AnalysisResult) {
        self.phase = Phase::Success(result);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = Phase::Failed(message.into());
    }

    pub fn reset(&mut self) {
        self.url.clear();
        self.phase = Phase::Idle;
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }
}
