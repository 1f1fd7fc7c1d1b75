use axum::{
    routing::post,
    Router,
    extract::{Json, State},
};
use tower_http::cors::{Any, CorsLayer};

use crate::error::{AppError, Result};
use crate::api::models::{AnalysisResult, AnalyzeRequest, AnalyzeResponse, Chunk, FullPageScreenshot};
use crate::chunker::{self, MAX_CHUNK_HEIGHT};
use crate::provider::{self, Profile};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    let target = validate_url(&req.url)?;
    tracing::info!(url = %target, "analyzing website");
    let start = std::time::Instant::now();

    // Desktop first, then mobile; a failure in either aborts the analysis
    // with no partial result.
    let desktop = capture_profile(&state, &target, Profile::Desktop).await?;
    let mobile = capture_profile(&state, &target, Profile::Mobile).await?;

    tracing::info!(elapsed = ?start.elapsed(), "full-page screenshots generated");

    Ok(Json(AnalyzeResponse {
        screenshots: vec![AnalysisResult { desktop, mobile }],
    }))
}

/// Trims and syntax-checks the submitted URL. No outbound request is made
/// until this passes.
fn validate_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("URL is required".to_string()));
    }

    let parsed = url::Url::parse(trimmed)
        .map_err(|_| AppError::Validation("Invalid URL provided".to_string()))?;
    Ok(parsed.to_string())
}

async fn capture_profile(
    state: &AppState,
    target: &str,
    profile: Profile,
) -> Result<FullPageScreenshot> {
    let png = provider::fetch_screenshot(&state.config.provider_base_url, target, profile).await?;
    let image_data = provider::to_data_uri(&png);

    // The provider does not report pixel dimensions, so chunking works from
    // the profile's estimated height. Every chunk references the same
    // undivided payload.
    let total_height = profile.estimated_height();
    let chunks = chunker::partition(total_height, MAX_CHUNK_HEIGHT)
        .into_iter()
        .map(|spec| Chunk {
            chunk_number: spec.number,
            height: spec.height,
            image_data: image_data.clone(),
        })
        .collect();

    Ok(FullPageScreenshot {
        profile: profile.as_str().to_string(),
        total_height,
        chunks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_urls_are_rejected() {
        assert!(matches!(validate_url(""), Err(AppError::Validation(_))));
        assert!(matches!(validate_url("   "), Err(AppError::Validation(_))));
    }

    #[test]
    fn malformed_url_is_rejected() {
        assert!(matches!(
            validate_url("not a url"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn valid_url_is_normalized() {
        let url = validate_url("  https://example.com  ").unwrap();
        assert_eq!(url, "https://example.com/");
    }
}
