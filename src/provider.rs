//! Client for the remote screenshot-rendering API.
//!
//! The provider is a CDN-style service: a single GET with the target URL and
//! viewport parameters in the query string returns a full-page PNG. No API
//! key is required on the free tier.

use base64::Engine;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::error::{AppError, Result};

// Shared client so connections are reused across requests.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// Viewport profile the provider renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Desktop,
    Mobile,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Desktop, Profile::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Desktop => "desktop",
            Profile::Mobile => "mobile",
        }
    }

    /// Viewport passed to the provider, as "WIDTHxHEIGHT".
    pub fn viewport(&self) -> &'static str {
        match self {
            Profile::Desktop => "3840x2160",
            Profile::Mobile => "375x812",
        }
    }

    /// Assumed full-page height in pixels. The provider does not report the
    /// rendered image's dimensions, so chunking works from this estimate.
    pub fn estimated_height(&self) -> u32 {
        match self {
            Profile::Desktop => 12288,
            Profile::Mobile => 8192,
        }
    }
}

fn screenshot_url(base: &str, target: &str, profile: Profile) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("url", target)
        .append_pair("deviceScaleFactor", "2")
        .append_pair("viewport", profile.viewport())
        .append_pair("fullPage", "true")
        .append_pair("type", "png")
        .finish();
    format!("{}/?{}", base.trim_end_matches('/'), query)
}

/// Fetches one full-page screenshot. A non-success status is an upstream
/// failure; the caller decides what to surface.
pub async fn fetch_screenshot(base: &str, target: &str, profile: Profile) -> Result<Vec<u8>> {
    let url = screenshot_url(base, target, profile);
    tracing::info!(profile = profile.as_str(), "fetching screenshot");

    let response = CLIENT.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(AppError::Upstream(format!(
            "provider returned {} for {} profile",
            response.status(),
            profile.as_str()
        )));
    }

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

/// Wraps raw PNG bytes as a self-describing inline payload.
pub fn to_data_uri(png_bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(png_bytes);
    format!("data:image/png;base64,{}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screenshot_url_encodes_target_and_viewport() {
        let url = screenshot_url(
            "https://cdn.example.io",
            "https://example.com/a page?q=1",
            Profile::Mobile,
        );
        assert!(url.starts_with("https://cdn.example.io/?url="));
        assert!(url.contains("viewport=375x812"));
        assert!(url.contains("fullPage=true"));
        assert!(url.contains("deviceScaleFactor=2"));
        assert!(url.contains("type=png"));
        // The target URL must be percent-encoded into the query string.
        assert!(url.contains("example.com%2Fa+page%3Fq%3D1"));
    }

    #[test]
    fn data_uri_has_png_header() {
        let uri = to_data_uri(&[0x89, 0x50, 0x4e, 0x47]);
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn profile_constants_match_viewports() {
        assert_eq!(Profile::Desktop.estimated_height(), 12288);
        assert_eq!(Profile::Mobile.estimated_height(), 8192);
        assert_eq!(Profile::Desktop.viewport(), "3840x2160");
    }
}
