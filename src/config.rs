use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

/// Default provider base; the free tier needs no API key.
pub const DEFAULT_PROVIDER_URL: &str = "https://cdn.microlink.io";

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub provider_base_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let provider_base_url = env::var("SCREENSHOT_API_URL")
            .unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string());

        // Server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port.parse::<u16>()
            .map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        Ok(Config {
            server_addr,
            provider_base_url,
        })
    }
}
