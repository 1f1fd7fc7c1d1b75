pub mod api;
pub mod chunker;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod provider;
pub mod session;

use std::sync::Arc;
use config::Config;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}
